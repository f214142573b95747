use payloads::{CategoryId, GalleryConfig};

use crate::{
    CategorizedMediaState, GalleryError, LocalFile, MediaItem, PreviewCache,
    PreviewError, PreviewSource, SelectionOutcome,
};

/// The categorized upload widget's logic, minus rendering.
///
/// The host step owns the [`CategorizedMediaState`] and passes it in; every
/// operation hands back a new state for the host to store. The widget owns
/// the preview handles and keeps them in step with the state: after each
/// mutation it releases handles for files that are gone, and dropping it
/// (or calling [`MediaUpload::teardown`]) releases the rest.
///
/// The widget remembers the last state it produced or was handed, and only
/// makes previews for local files in that state.
pub struct MediaUpload<F, P: PreviewSource<F>> {
    config: GalleryConfig,
    current: CategorizedMediaState<F>,
    previews: PreviewCache<F, P>,
}

impl<F: Clone, P: PreviewSource<F>> MediaUpload<F, P> {
    pub fn new(config: GalleryConfig, source: P) -> Self {
        Self {
            current: CategorizedMediaState::new(&config),
            config,
            previews: PreviewCache::new(source),
        }
    }

    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    /// The state after the most recent mutation or replacement. Newer than
    /// the host's copy until the host stores what it was handed.
    pub fn state(&self) -> &CategorizedMediaState<F> {
        &self.current
    }

    /// A state with every configured category present and empty.
    pub fn empty_state(&self) -> CategorizedMediaState<F> {
        CategorizedMediaState::new(&self.config)
    }

    /// Add picked files to a category. The caller raises one notice per
    /// entry of `duplicates` in the outcome.
    pub fn select_files(
        &mut self,
        state: &CategorizedMediaState<F>,
        category: &CategoryId,
        files: Vec<LocalFile<F>>,
    ) -> Result<SelectionOutcome<F>, GalleryError> {
        let outcome = state.select_files(
            category,
            files,
            self.config.max_per_category,
        )?;
        self.previews.reconcile(&outcome.state);
        self.current = outcome.state.clone();
        Ok(outcome)
    }

    /// Remove one item. Its preview handle is released before this returns.
    pub fn remove_item(
        &mut self,
        state: &CategorizedMediaState<F>,
        category: &CategoryId,
        index: usize,
    ) -> Result<CategorizedMediaState<F>, GalleryError> {
        let removal = state.remove_item(category, index)?;
        if let MediaItem::Local(file) = &removal.removed {
            self.previews.release(&file.key);
        }
        self.previews.reconcile(&removal.state);
        self.current = removal.state.clone();
        Ok(removal.state)
    }

    /// Catch up after the host replaced the state wholesale, e.g. loading a
    /// draft or swapping uploaded files for their urls. Returns how many
    /// handles were released.
    pub fn replace_state(&mut self, state: &CategorizedMediaState<F>) -> usize {
        self.current = state.clone();
        self.previews.reconcile(state)
    }

    /// Display handle for `item`. Local files outside the current state are
    /// refused, since nothing would ever release their handle.
    pub fn preview(
        &mut self,
        item: &MediaItem<F>,
    ) -> Result<String, PreviewError> {
        if let MediaItem::Local(file) = item {
            if !self.current.contains_local(file.key) {
                return Err(PreviewError {
                    file_name: file.name.clone(),
                    reason: "file is not in this gallery".to_string(),
                });
            }
        }
        self.previews.get(item)
    }

    /// Number of preview handles currently held.
    pub fn live_previews(&self) -> usize {
        self.previews.len()
    }

    /// Release every preview handle. Called when the widget unmounts.
    pub fn teardown(&mut self) {
        self.previews.flush();
    }
}
