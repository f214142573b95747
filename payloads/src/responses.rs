use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{DraftId, ListingDraft};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Draft {
    pub id: DraftId,
    pub draft: ListingDraft,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedImage {
    pub url: String,
}

/// A place returned by the backend's autocomplete proxy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceSuggestion {
    pub place_id: String,
    pub description: String,
    pub locality: String,
    pub city: Option<String>,
}
