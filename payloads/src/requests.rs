use serde::{Deserialize, Serialize};

use crate::{ContentId, DraftId, ListingDraft, ListingId, ListingKind};

/// Create a content record when `id` is `None`, otherwise update it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpsertContent {
    pub id: Option<ContentId>,
    pub section: String,
    pub key: String,
    pub value: String,
}

/// Save a wizard's progress. Passing an existing `draft_id` overwrites that
/// draft.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveDraft {
    pub draft_id: Option<DraftId>,
    pub draft: ListingDraft,
}

/// Upload a single listing photo. The backend responds with the url to
/// persist in the gallery payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadImage {
    pub file_name: String,
    pub mime_type: String,
    pub image_data: Vec<u8>,
}

/// Ask the backend to email the owner a confirmation for a listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotifyOwner {
    pub listing_id: ListingId,
    pub kind: ListingKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceQuery {
    pub query: String,
    pub city: Option<String>,
}
