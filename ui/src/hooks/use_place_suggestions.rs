use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use payloads::{
    requests::PlaceQuery, responses::PlaceSuggestion,
    validation::PLACE_QUERY_MIN_LEN,
};
use yew::prelude::*;

use crate::get_api_client;

/// Wait for typing to pause before asking the backend.
const DEBOUNCE_MS: u32 = 300;

/// Place suggestions for what the owner has typed so far. Queries shorter
/// than the minimum length yield nothing. Answers to stale queries are
/// dropped.
#[hook]
pub fn use_place_suggestions(query: String, city: String) -> Vec<PlaceSuggestion> {
    let suggestions = use_state(Vec::<PlaceSuggestion>::new);

    {
        let suggestions = suggestions.clone();
        use_effect_with((query, city), move |(query, city)| {
            let stale = Rc::new(Cell::new(false));
            let query = query.trim().to_string();

            if query.chars().count() < PLACE_QUERY_MIN_LEN {
                suggestions.set(Vec::new());
            } else {
                let request = PlaceQuery {
                    query,
                    city: Some(city.trim().to_string()).filter(|c| !c.is_empty()),
                };
                let stale = stale.clone();
                yew::platform::spawn_local(async move {
                    TimeoutFuture::new(DEBOUNCE_MS).await;
                    if stale.get() {
                        return;
                    }
                    match get_api_client().place_suggestions(&request).await {
                        Ok(found) if !stale.get() => suggestions.set(found),
                        Ok(_) => {}
                        Err(e) => tracing::warn!("place suggestions failed: {e}"),
                    }
                });
            }

            move || stale.set(true)
        });
    }

    (*suggestions).clone()
}
