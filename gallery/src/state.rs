use std::collections::HashSet;

use payloads::{
    CategoryId, CategoryPhotos, GalleryConfig, GalleryPayload,
};

use crate::{FileKey, GalleryError, LocalFile, MediaItem};

/// Photos of one category, in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryMedia<F> {
    pub category: CategoryId,
    pub items: Vec<MediaItem<F>>,
}

/// Photos of every configured category.
///
/// Every category of the config it was built from is present, in declared
/// order, even when empty. Mutations return a new value and leave `self`
/// untouched.
///
/// Saved urls that can't be shown (over a category's cap, or in a category
/// the config doesn't declare) are carried along unseen and written back by
/// [`CategorizedMediaState::to_payload`].
#[derive(Debug, Clone, PartialEq)]
pub struct CategorizedMediaState<F> {
    categories: Vec<CategoryMedia<F>>,
    carried: Vec<CategoryPhotos>,
}

/// Result of adding a batch of picked files to a category.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionOutcome<F> {
    pub state: CategorizedMediaState<F>,
    /// Files kept in the category.
    pub added: usize,
    /// Names of files rejected as already present, one per rejected file.
    pub duplicates: Vec<String>,
    /// Non-image or oversized files, dropped without notice.
    pub filtered: usize,
    /// Files dropped because the category was full, without notice.
    pub overflow: usize,
}

/// Result of removing one photo.
#[derive(Debug, Clone, PartialEq)]
pub struct Removal<F> {
    pub state: CategorizedMediaState<F>,
    pub removed: MediaItem<F>,
}

impl<F: Clone> CategorizedMediaState<F> {
    pub fn new(config: &GalleryConfig) -> Self {
        Self {
            categories: config
                .categories
                .iter()
                .map(|c| CategoryMedia {
                    category: c.id.clone(),
                    items: Vec::new(),
                })
                .collect(),
            carried: Vec::new(),
        }
    }

    /// Rebuild the state from a saved gallery.
    ///
    /// Each category shows up to the configured cap. A payload with only the
    /// flat `photos` list (written before photos were categorized) is placed
    /// in the last configured category. Urls beyond a cap and categories the
    /// config doesn't declare are carried, not dropped.
    pub fn from_payload(config: &GalleryConfig, payload: &GalleryPayload) -> Self {
        let mut state = Self::new(config);
        let legacy_only =
            payload.categorized.is_empty() && !payload.photos.is_empty();
        let last = state.categories.len().saturating_sub(1);
        for (index, media) in state.categories.iter_mut().enumerate() {
            let urls = if legacy_only && index == last {
                payload.photos.as_slice()
            } else {
                payload.urls_for(&media.category)
            };
            let shown = urls.len().min(config.max_per_category);
            media.items = urls[..shown]
                .iter()
                .cloned()
                .map(MediaItem::Persisted)
                .collect();
            if shown < urls.len() {
                state.carried.push(CategoryPhotos {
                    category: media.category.clone(),
                    urls: urls[shown..].to_vec(),
                });
            }
        }
        for saved in &payload.categorized {
            if !config.contains(&saved.category) && !saved.urls.is_empty() {
                tracing::debug!(
                    category = %saved.category,
                    "Carrying photos for unconfigured category"
                );
                state.carried.push(saved.clone());
            }
        }
        if !state.carried.is_empty() {
            tracing::debug!(count = state.carried_count(), "Carrying hidden photos");
        }
        state
    }

    /// Saved urls kept for the payload but not shown in any category.
    pub fn carried_count(&self) -> usize {
        self.carried.iter().map(|c| c.urls.len()).sum()
    }

    pub fn categories(&self) -> &[CategoryMedia<F>] {
        &self.categories
    }

    pub fn items(&self, category: &CategoryId) -> Option<&[MediaItem<F>]> {
        self.position(category)
            .map(|i| self.categories[i].items.as_slice())
    }

    fn position(&self, category: &CategoryId) -> Option<usize> {
        self.categories.iter().position(|c| &c.category == category)
    }

    fn index_of(&self, category: &CategoryId) -> Result<usize, GalleryError> {
        self.position(category)
            .ok_or_else(|| GalleryError::UnknownCategory(category.clone()))
    }

    pub fn len(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every item, category by category in declared order.
    pub fn flatten(&self) -> impl Iterator<Item = &MediaItem<F>> {
        self.categories.iter().flat_map(|c| c.items.iter())
    }

    /// Local files still waiting to be uploaded.
    pub fn local_files(&self) -> impl Iterator<Item = &LocalFile<F>> {
        self.flatten().filter_map(MediaItem::as_local)
    }

    pub fn contains_local(&self, key: FileKey) -> bool {
        self.local_files().any(|file| file.key == key)
    }

    /// Keys of every local file reachable from any category.
    pub fn local_keys(&self) -> HashSet<FileKey> {
        self.local_files().map(|file| file.key).collect()
    }

    /// Add picked files to the end of a category.
    ///
    /// Non-images and files over the size limit are dropped silently. A file
    /// whose name and size match one already in the category (or one
    /// accepted earlier in the same batch) is reported as a duplicate. The
    /// rest are appended and the category is cut to `max_per_category`,
    /// silently dropping whatever doesn't fit.
    pub fn select_files(
        &self,
        category: &CategoryId,
        files: Vec<LocalFile<F>>,
        max_per_category: usize,
    ) -> Result<SelectionOutcome<F>, GalleryError> {
        let index = self.index_of(category)?;
        let existing = &self.categories[index].items;
        let before = existing.len();

        let mut filtered = 0;
        let mut duplicates = Vec::new();
        let mut accepted: Vec<LocalFile<F>> = Vec::new();
        for file in files {
            if !file.is_acceptable() {
                filtered += 1;
                continue;
            }
            let duplicate = existing
                .iter()
                .any(|item| item.same_file_as(&file.name, file.size))
                || accepted
                    .iter()
                    .any(|other| other.same_file_as(&file.name, file.size));
            if duplicate {
                duplicates.push(file.name);
                continue;
            }
            accepted.push(file);
        }

        let accepted_count = accepted.len();
        let mut items = existing.clone();
        items.extend(accepted.into_iter().map(MediaItem::Local));
        items.truncate(max_per_category);
        let added = items.len().saturating_sub(before);
        let overflow = accepted_count - added;

        tracing::debug!(
            %category,
            added,
            duplicates = duplicates.len(),
            filtered,
            overflow,
            "Selected files"
        );

        Ok(SelectionOutcome {
            state: self.with_items(index, items),
            added,
            duplicates,
            filtered,
            overflow,
        })
    }

    /// Remove the item at `index`, shifting later items down.
    pub fn remove_item(
        &self,
        category: &CategoryId,
        index: usize,
    ) -> Result<Removal<F>, GalleryError> {
        let position = self.index_of(category)?;
        let mut items = self.categories[position].items.clone();
        if index >= items.len() {
            return Err(GalleryError::IndexOutOfBounds {
                category: category.clone(),
                index,
                len: items.len(),
            });
        }
        let removed = items.remove(index);
        Ok(Removal {
            state: self.with_items(position, items),
            removed,
        })
    }

    /// Swap a local file for its uploaded url, keeping its position.
    /// Unknown keys leave the state unchanged.
    pub fn with_uploaded(&self, key: FileKey, url: &str) -> Self {
        let mut next = self.clone();
        for media in &mut next.categories {
            for item in &mut media.items {
                if item.local_key() == Some(key) {
                    *item = MediaItem::Persisted(url.to_string());
                }
            }
        }
        next
    }

    /// Saved form of the gallery, carried urls included after the shown
    /// ones of their category. Fails while local files are still waiting to
    /// be uploaded.
    pub fn to_payload(
        &self,
        video: Option<String>,
    ) -> Result<GalleryPayload, GalleryError> {
        let pending = self.local_files().count();
        if pending > 0 {
            return Err(GalleryError::PendingUploads(pending));
        }
        let mut categorized: Vec<CategoryPhotos> = self
            .categories
            .iter()
            .map(|media| CategoryPhotos {
                category: media.category.clone(),
                urls: media
                    .items
                    .iter()
                    .filter_map(|item| match item {
                        MediaItem::Persisted(url) => Some(url.clone()),
                        MediaItem::Local(_) => None,
                    })
                    .collect(),
            })
            .collect();
        for extra in &self.carried {
            match categorized.iter_mut().find(|c| c.category == extra.category) {
                Some(photos) => photos.urls.extend(extra.urls.iter().cloned()),
                None => categorized.push(extra.clone()),
            }
        }
        Ok(GalleryPayload::from_categorized(categorized, video))
    }

    fn with_items(&self, index: usize, items: Vec<MediaItem<F>>) -> Self {
        let mut categories = self.categories.clone();
        categories[index].items = items;
        Self {
            categories,
            carried: self.carried.clone(),
        }
    }
}
