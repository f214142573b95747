//! Remembers the saved draft of each listing flow in local storage so the
//! wizard can pick up where the owner left off after a reload.

use payloads::{DraftId, ListingKind, PropertyClass};
use uuid::Uuid;
use web_sys::Storage;

const KEY_PREFIX: &str = "listing_draft";

fn storage_key(kind: ListingKind, class: PropertyClass) -> String {
    format!("{KEY_PREFIX}:{}:{}", kind.slug(), class.slug())
}

fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

pub fn stored_draft_id(
    kind: ListingKind,
    class: PropertyClass,
) -> Option<DraftId> {
    let storage = local_storage()?;
    let value = storage.get_item(&storage_key(kind, class)).ok()??;
    match Uuid::parse_str(&value) {
        Ok(id) => Some(DraftId(id)),
        Err(e) => {
            tracing::warn!(%value, "ignoring malformed draft id: {e}");
            None
        }
    }
}

pub fn store_draft_id(kind: ListingKind, class: PropertyClass, id: DraftId) {
    let Some(storage) = local_storage() else {
        return;
    };
    if let Err(e) = storage.set_item(&storage_key(kind, class), &id.to_string())
    {
        tracing::warn!("failed to remember draft id: {e:?}");
    }
}

pub fn clear_draft_id(kind: ListingKind, class: PropertyClass) {
    let Some(storage) = local_storage() else {
        return;
    };
    if let Err(e) = storage.remove_item(&storage_key(kind, class)) {
        tracing::warn!("failed to forget draft id: {e:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_keys_are_per_flow() {
        assert_eq!(
            storage_key(ListingKind::Rent, PropertyClass::Commercial),
            "listing_draft:rent:commercial"
        );
        assert_ne!(
            storage_key(ListingKind::Rent, PropertyClass::Residential),
            storage_key(ListingKind::Resale, PropertyClass::Residential)
        );
    }
}
