pub mod api_client;
pub mod content;
pub mod listing;
pub mod media;
pub mod requests;
pub mod responses;
pub mod validation;
pub mod wizard;

pub use api_client::{APIClient, ClientError};
pub use content::{ContentRecord, ContentSection, group_by_section};
pub use listing::*;
pub use media::{
    CategoryId, CategoryPhotos, DEFAULT_CATEGORY_LIMIT, GalleryConfig,
    GalleryPayload, MAX_IMAGE_SIZE, MediaCategory,
};
pub use validation::FieldError;
pub use wizard::{WizardProgress, WizardStep};

use derive_more::Display;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Id type wrapper helps ensure we don't mix up ids for different records.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
pub struct ListingId(pub Uuid);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
pub struct DraftId(pub Uuid);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
pub struct ContentId(pub Uuid);

/// Which owner-facing flow a listing belongs to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ListingKind {
    #[display("Rent")]
    Rent,
    #[display("Resale")]
    Resale,
    #[display("PG/Hostel")]
    PgHostel,
    #[display("Flatmates")]
    Flatmates,
}

impl ListingKind {
    pub const ALL: [ListingKind; 4] = [
        ListingKind::Rent,
        ListingKind::Resale,
        ListingKind::PgHostel,
        ListingKind::Flatmates,
    ];

    /// Stable key, used for local storage and URLs.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Rent => "rent",
            Self::Resale => "resale",
            Self::PgHostel => "pg",
            Self::Flatmates => "flatmates",
        }
    }

    /// Only rent and resale listings can be commercial.
    pub fn supports_commercial(&self) -> bool {
        matches!(self, Self::Rent | Self::Resale)
    }
}

/// Residential and commercial listings use different photo categories.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PropertyClass {
    #[default]
    Residential,
    Commercial,
}

impl PropertyClass {
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Residential => "residential",
            Self::Commercial => "commercial",
        }
    }

    pub fn gallery_config(&self) -> GalleryConfig {
        match self {
            Self::Residential => GalleryConfig::residential(),
            Self::Commercial => GalleryConfig::commercial(),
        }
    }
}
