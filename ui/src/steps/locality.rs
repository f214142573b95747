use payloads::{FieldError, LocalityDetails, responses::PlaceSuggestion};
use yew::prelude::*;

use super::{edit, optional_text};
use crate::{
    components::form_fields::{TextField, field_error},
    hooks::use_place_suggestions,
};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub value: LocalityDetails,
    pub errors: Vec<FieldError>,
    pub on_change: Callback<LocalityDetails>,
}

#[function_component]
pub fn LocalityStep(props: &Props) -> Html {
    let value = &props.value;
    let errors = &props.errors;
    let on_change = &props.on_change;

    // Only look up places until one has been picked.
    let query = if value.place_id.is_none() {
        value.locality.clone()
    } else {
        String::new()
    };
    let suggestions = use_place_suggestions(query, value.city.clone());

    // Typing clears a previously picked place.
    let on_locality = edit(value, on_change, |d, v: String| {
        d.locality = v;
        d.place_id = None;
    });

    let on_pick = edit(value, on_change, |d, place: PlaceSuggestion| {
        d.locality = place.locality;
        if let Some(city) = place.city {
            d.city = city;
        }
        d.place_id = Some(place.place_id);
    });

    html! {
        <div class="space-y-6">
            <TextField
                id="city"
                label="City"
                value={value.city.clone()}
                error={field_error(errors, "city")}
                on_change={edit(value, on_change, |d, v| d.city = v)}
            />
            <div class="relative">
                <TextField
                    id="locality"
                    label="Locality"
                    placeholder="Start typing your locality"
                    value={value.locality.clone()}
                    error={field_error(errors, "locality")}
                    on_change={on_locality}
                />
                if !suggestions.is_empty() {
                    <ul class="absolute z-10 mt-1 w-full bg-white dark:bg-neutral-800 border border-neutral-200
                               dark:border-neutral-700 rounded-md shadow-lg max-h-60 overflow-auto">
                        {for suggestions.into_iter().map(|place| {
                            let description = place.description.clone();
                            let onclick = on_pick.reform(move |_: MouseEvent| place.clone());
                            html! {
                                <li>
                                    <button
                                        type="button"
                                        {onclick}
                                        class="w-full text-left px-3 py-2 text-sm hover:bg-neutral-100 dark:hover:bg-neutral-700"
                                    >
                                        {description}
                                    </button>
                                </li>
                            }
                        })}
                    </ul>
                }
            </div>
            <TextField
                id="landmark"
                label="Landmark / Street"
                value={value.landmark.clone().unwrap_or_default()}
                on_change={edit(value, on_change, |d, v| d.landmark = optional_text(v))}
            />
        </div>
    }
}
