use payloads::{ContentSection, group_by_section};
use yew::prelude::*;

use super::{FetchHookReturn, use_fetch};
use crate::get_api_client;

/// All homepage content, grouped into sections for editing.
#[hook]
pub fn use_content() -> FetchHookReturn<Vec<ContentSection>> {
    use_fetch((), || async {
        let api_client = get_api_client();
        api_client
            .list_content()
            .await
            .map(group_by_section)
            .map_err(|e| e.to_string())
    })
}
