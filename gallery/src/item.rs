use std::fmt;

use payloads::{MAX_IMAGE_SIZE, validation::is_image_mime};
use uuid::Uuid;

/// Identity of one selected file for the lifetime of a form session.
///
/// Two selections of the same file on disk get different keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileKey(Uuid);

impl FileKey {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for FileKey {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FileKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A file picked on this device that has not been uploaded yet.
///
/// `F` is the platform's file handle (a browser `File` in the ui crate).
#[derive(Debug, Clone, PartialEq)]
pub struct LocalFile<F> {
    pub key: FileKey,
    pub name: String,
    pub size: u64,
    pub mime_type: String,
    pub file: F,
}

impl<F> LocalFile<F> {
    pub fn new(
        name: impl Into<String>,
        size: u64,
        mime_type: impl Into<String>,
        file: F,
    ) -> Self {
        Self {
            key: FileKey::new(),
            name: name.into(),
            size,
            mime_type: mime_type.into(),
            file,
        }
    }

    /// Images up to the size limit are accepted; anything else is dropped
    /// before duplicate and limit checks.
    pub fn is_acceptable(&self) -> bool {
        is_image_mime(&self.mime_type) && self.size <= MAX_IMAGE_SIZE
    }

    /// Duplicates are detected by name and size, not content.
    pub fn same_file_as(&self, name: &str, size: u64) -> bool {
        self.name == name && self.size == size
    }
}

/// One photo in a category.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaItem<F> {
    /// Selected locally and not yet uploaded.
    Local(LocalFile<F>),
    /// Already stored by the backend, e.g. when resuming a draft.
    Persisted(String),
}

impl<F> MediaItem<F> {
    pub fn as_local(&self) -> Option<&LocalFile<F>> {
        match self {
            Self::Local(file) => Some(file),
            Self::Persisted(_) => None,
        }
    }

    pub fn local_key(&self) -> Option<FileKey> {
        self.as_local().map(|file| file.key)
    }

    pub fn is_persisted(&self) -> bool {
        matches!(self, Self::Persisted(_))
    }

    /// Name shown under a thumbnail.
    pub fn display_name(&self) -> &str {
        match self {
            Self::Local(file) => &file.name,
            Self::Persisted(url) => url.rsplit('/').next().unwrap_or(url),
        }
    }

    /// Persisted references have no known size, so they never collide with
    /// a newly selected file.
    pub(crate) fn same_file_as(&self, name: &str, size: u64) -> bool {
        self.as_local()
            .is_some_and(|file| file.same_file_as(name, size))
    }
}
