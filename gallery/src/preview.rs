//! Display handles for local files.
//!
//! Browsers show a picked file through an object url that holds the file's
//! memory until it is revoked. [`PreviewCache`] creates one handle per local
//! file on first use and is responsible for revoking every handle it made.

use std::collections::{HashMap, HashSet};
use std::marker::PhantomData;

use crate::{CategorizedMediaState, FileKey, LocalFile, MediaItem};

#[derive(Debug, thiserror::Error)]
#[error("Could not create preview for {file_name}: {reason}")]
pub struct PreviewError {
    pub file_name: String,
    pub reason: String,
}

/// Platform mechanism for creating and releasing display handles.
pub trait PreviewSource<F> {
    fn create(&mut self, file: &LocalFile<F>) -> Result<String, PreviewError>;
    fn release(&mut self, handle: &str);
}

/// Handles created for local files, keyed by file identity.
///
/// Owned by a single upload widget. Dropping the cache releases every handle
/// still in it.
pub struct PreviewCache<F, P: PreviewSource<F>> {
    source: P,
    handles: HashMap<FileKey, String>,
    _file: PhantomData<fn(&F)>,
}

impl<F, P: PreviewSource<F>> PreviewCache<F, P> {
    pub fn new(source: P) -> Self {
        Self {
            source,
            handles: HashMap::new(),
            _file: PhantomData,
        }
    }

    /// Handle to display `item`.
    ///
    /// Persisted urls are returned as is. A local file gets the handle made
    /// the first time it was shown, so repeated renders don't create new
    /// ones.
    pub fn get(&mut self, item: &MediaItem<F>) -> Result<String, PreviewError> {
        match item {
            MediaItem::Persisted(url) => Ok(url.clone()),
            MediaItem::Local(file) => {
                if let Some(handle) = self.handles.get(&file.key) {
                    return Ok(handle.clone());
                }
                let handle = self.source.create(file)?;
                tracing::debug!(key = %file.key, name = %file.name, "Created preview");
                self.handles.insert(file.key, handle.clone());
                Ok(handle)
            }
        }
    }

    /// Release the handle for one file, if it has one.
    pub fn release(&mut self, key: &FileKey) -> bool {
        match self.handles.remove(key) {
            Some(handle) => {
                self.source.release(&handle);
                tracing::debug!(%key, "Released preview");
                true
            }
            None => false,
        }
    }

    /// Release handles whose file is no longer in `state`. Returns how many
    /// were released.
    pub fn reconcile(&mut self, state: &CategorizedMediaState<F>) -> usize
    where
        F: Clone,
    {
        let reachable: HashSet<FileKey> = state.local_keys();
        let stale: Vec<FileKey> = self
            .handles
            .keys()
            .filter(|key| !reachable.contains(key))
            .copied()
            .collect();
        for key in &stale {
            self.release(key);
        }
        stale.len()
    }

    /// Release every handle, reachable or not.
    pub fn flush(&mut self) {
        let count = self.handles.len();
        for (_, handle) in self.handles.drain() {
            self.source.release(&handle);
        }
        if count > 0 {
            tracing::debug!(count, "Flushed previews");
        }
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    pub fn contains(&self, key: &FileKey) -> bool {
        self.handles.contains_key(key)
    }

    pub fn source(&self) -> &P {
        &self.source
    }
}

impl<F, P: PreviewSource<F>> Drop for PreviewCache<F, P> {
    fn drop(&mut self) {
        self.flush();
    }
}
