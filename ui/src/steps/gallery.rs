use gallery::CategorizedMediaState;
use payloads::{FieldError, PropertyClass};
use web_sys::File;
use yew::prelude::*;

use super::optional_text;
use crate::components::{
    CategorizedMediaUpload,
    form_fields::{TextField, field_error},
};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub class: PropertyClass,
    pub value: CategorizedMediaState<File>,
    pub video: Option<String>,
    pub errors: Vec<FieldError>,
    pub on_change: Callback<CategorizedMediaState<File>>,
    pub on_video_change: Callback<Option<String>>,
    #[prop_or_default]
    pub disabled: bool,
}

/// Photos by category for the listing's property class, plus an optional
/// video link passed through untouched.
#[function_component]
pub fn GalleryStep(props: &Props) -> Html {
    let config = props.class.gallery_config();
    let on_video = props.on_video_change.reform(optional_text);

    html! {
        <div class="space-y-6">
            if let Some(error) = field_error(&props.errors, "photos") {
                <div class="p-3 rounded-md bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800">
                    <p class="text-sm text-red-700 dark:text-red-400">{error}</p>
                </div>
            }
            <CategorizedMediaUpload
                key={props.class.slug()}
                {config}
                value={props.value.clone()}
                on_change={props.on_change.clone()}
                disabled={props.disabled}
            />
            <TextField
                id="video-url"
                label="Video link (optional)"
                placeholder="https://"
                value={props.video.clone().unwrap_or_default()}
                on_change={on_video}
            />
        </div>
    }
}
