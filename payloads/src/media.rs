//! Photo categories and the persisted shape of a listing's gallery.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Largest image accepted by the upload widget, in bytes (5 MiB).
pub const MAX_IMAGE_SIZE: u64 = 5 * 1024 * 1024;

/// Default number of photos allowed in a single category.
pub const DEFAULT_CATEGORY_LIMIT: usize = 5;

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct CategoryId(pub String);

impl From<&str> for CategoryId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl CategoryId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A named bucket of photos, e.g. "kitchen".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaCategory {
    pub id: CategoryId,
    pub label: String,
}

impl MediaCategory {
    pub fn new(id: &str, label: &str) -> Self {
        Self {
            id: id.into(),
            label: label.to_string(),
        }
    }
}

/// Categories and per-category cap used by one gallery step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryConfig {
    pub categories: Vec<MediaCategory>,
    pub max_per_category: usize,
}

impl GalleryConfig {
    pub fn new(categories: Vec<MediaCategory>) -> Self {
        Self {
            categories,
            max_per_category: DEFAULT_CATEGORY_LIMIT,
        }
    }

    pub fn residential() -> Self {
        Self::new(vec![
            MediaCategory::new("bathroom", "Bathroom"),
            MediaCategory::new("bedroom", "Bedroom"),
            MediaCategory::new("hall", "Hall"),
            MediaCategory::new("kitchen", "Kitchen"),
            MediaCategory::new("frontView", "Front View"),
            MediaCategory::new("balcony", "Balcony"),
            MediaCategory::new("others", "Others"),
        ])
    }

    pub fn commercial() -> Self {
        Self::new(vec![
            MediaCategory::new("frontView", "Front View"),
            MediaCategory::new("insideView", "Inside View"),
            MediaCategory::new("others", "Others"),
        ])
    }

    pub fn with_limit(mut self, max_per_category: usize) -> Self {
        self.max_per_category = max_per_category;
        self
    }

    pub fn contains(&self, id: &CategoryId) -> bool {
        self.categories.iter().any(|c| &c.id == id)
    }

    pub fn label(&self, id: &CategoryId) -> Option<&str> {
        self.categories
            .iter()
            .find(|c| &c.id == id)
            .map(|c| c.label.as_str())
    }
}

/// Persisted photo references for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryPhotos {
    pub category: CategoryId,
    pub urls: Vec<String>,
}

/// Gallery section of a draft or submission.
///
/// `photos` is the flat list older consumers read: every category's urls
/// concatenated in declared category order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GalleryPayload {
    pub categorized: Vec<CategoryPhotos>,
    pub photos: Vec<String>,
    pub video: Option<String>,
}

impl GalleryPayload {
    /// Build a payload from categorized urls, deriving the flat list.
    pub fn from_categorized(
        categorized: Vec<CategoryPhotos>,
        video: Option<String>,
    ) -> Self {
        let photos = categorized
            .iter()
            .flat_map(|c| c.urls.iter().cloned())
            .collect();
        Self {
            categorized,
            photos,
            video,
        }
    }

    pub fn urls_for(&self, category: &CategoryId) -> &[String] {
        self.categorized
            .iter()
            .find(|c| &c.category == category)
            .map(|c| c.urls.as_slice())
            .unwrap_or(&[])
    }

    pub fn photo_count(&self) -> usize {
        self.categorized.iter().map(|c| c.urls.len()).sum()
    }
}
