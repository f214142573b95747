//! Categorized photo selection for listing gallery steps.
//!
//! A gallery step shows a fixed, ordered set of categories (bathroom,
//! kitchen, ...). Owners pick photos per category; each category holds at
//! most a configured number of items, rejects files it already has, and
//! ignores anything that is not an image or is over the size limit. Picked
//! files are previewed through revocable handles which must be released as
//! soon as their file leaves the gallery.
//!
//! - [`CategorizedMediaState`] is the value the hosting step stores.
//! - [`MediaUpload`] is the per-widget controller that applies changes and
//!   keeps preview handles in step with the state.
//! - [`PreviewSource`] is implemented by the platform (object urls in the
//!   browser).

mod item;
mod preview;
mod state;
mod upload;

pub use item::{FileKey, LocalFile, MediaItem};
pub use preview::{PreviewCache, PreviewError, PreviewSource};
pub use state::{CategorizedMediaState, CategoryMedia, Removal, SelectionOutcome};
pub use upload::MediaUpload;

use payloads::CategoryId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GalleryError {
    #[error("Unknown photo category: {0}")]
    UnknownCategory(CategoryId),
    #[error("No photo at position {index} in {category} (has {len})")]
    IndexOutOfBounds {
        category: CategoryId,
        index: usize,
        len: usize,
    },
    #[error("{0} photo(s) still need to be uploaded")]
    PendingUploads(usize),
}
