use gallery::{CategorizedMediaState, LocalFile, MediaUpload};
use payloads::{CategoryId, GalleryConfig, MAX_IMAGE_SIZE};
use web_sys::{File, HtmlInputElement};
use yew::prelude::*;

use crate::{contexts::use_toast, preview::ObjectUrls};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub config: GalleryConfig,
    /// Owned by the hosting step; every change comes back through
    /// `on_change`.
    pub value: CategorizedMediaState<File>,
    pub on_change: Callback<CategorizedMediaState<File>>,
    #[prop_or_default]
    pub disabled: bool,
}

struct Thumbnail {
    index: usize,
    name: String,
    src: Option<String>,
    pending: bool,
}

/// Photo picker with one section per category.
///
/// Remount (e.g. by keying on the property class) to change `config`; the
/// widget keeps the config it was created with.
#[function_component]
pub fn CategorizedMediaUpload(props: &Props) -> Html {
    let toast = use_toast();
    let upload = {
        let config = props.config.clone();
        use_mut_ref(move || MediaUpload::new(config, ObjectUrls))
    };

    {
        let upload = upload.clone();
        use_effect_with((), move |_| move || upload.borrow_mut().teardown());
    }

    // Edits build on the widget's own latest state, so a second event that
    // lands before the host re-renders doesn't undo the first.
    let on_files = {
        let upload = upload.clone();
        let on_change = props.on_change.clone();
        let config = props.config.clone();
        Callback::from(move |(category, files): (CategoryId, Vec<LocalFile<File>>)| {
            let result = {
                let mut upload = upload.borrow_mut();
                let latest = upload.state().clone();
                upload
                    .select_files(&latest, &category, files)
                    .map(|outcome| (outcome, latest))
            };
            match result {
                Ok((outcome, latest)) => {
                    let label = config.label(&category).unwrap_or(category.as_str());
                    for name in &outcome.duplicates {
                        toast.warning(format!("{name} is already added to {label}"));
                    }
                    if outcome.state != latest {
                        on_change.emit(outcome.state);
                    }
                }
                Err(e) => tracing::error!("photo selection failed: {e}"),
            }
        })
    };

    let on_remove = {
        let upload = upload.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |(category, index): (CategoryId, usize)| {
            let result = {
                let mut upload = upload.borrow_mut();
                let latest = upload.state().clone();
                upload.remove_item(&latest, &category, index)
            };
            match result {
                Ok(state) => on_change.emit(state),
                Err(e) => tracing::error!("photo removal failed: {e}"),
            }
        })
    };

    // Resolve every preview up front so the widget isn't borrowed while
    // rendering. The host may have swapped the whole state (draft resume,
    // finished uploads), so catch up with it first.
    let sections: Vec<(CategoryId, String, Vec<Thumbnail>)> = {
        let mut upload = upload.borrow_mut();
        let released = upload.replace_state(&props.value);
        if released > 0 {
            tracing::debug!(released, "released previews after state change");
        }
        props
            .value
            .categories()
            .iter()
            .map(|media| {
                let label = props
                    .config
                    .label(&media.category)
                    .unwrap_or(media.category.as_str())
                    .to_string();
                let thumbnails = media
                    .items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| Thumbnail {
                        index,
                        name: item.display_name().to_string(),
                        src: upload
                            .preview(item)
                            .inspect_err(|e| tracing::warn!("{e}"))
                            .ok(),
                        pending: !item.is_persisted(),
                    })
                    .collect();
                (media.category.clone(), label, thumbnails)
            })
            .collect()
    };

    let max = props.config.max_per_category;
    let max_mb = MAX_IMAGE_SIZE / (1024 * 1024);
    let hidden = props.value.carried_count();

    html! {
        <div class="space-y-6">
            <p class="text-sm text-neutral-500 dark:text-neutral-400">
                {format!("Up to {max} photos per category, {max_mb}MB each.")}
            </p>
            if hidden > 0 {
                <p class="text-sm text-amber-700 dark:text-amber-400">
                    {format!("{hidden} earlier photos don't fit these categories. They stay on your listing.")}
                </p>
            }
            {for sections.into_iter().map(|(category, label, thumbnails)| {
                let count = thumbnails.len();
                let full = count >= max;
                let input_id = format!("photos-{category}");
                let onchange = {
                    let on_files = on_files.clone();
                    let category = category.clone();
                    Callback::from(move |e: Event| {
                        on_files.emit((category.clone(), picked_files(e)));
                    })
                };
                html! {
                    <section key={category.to_string()} class="border border-neutral-200 dark:border-neutral-700 rounded-lg p-4">
                        <div class="flex items-center justify-between mb-3">
                            <h3 class="font-medium text-neutral-900 dark:text-neutral-100">{&label}</h3>
                            <span class="text-xs text-neutral-500">
                                {format!("{count}/{max}")}
                            </span>
                        </div>
                        <div class="grid grid-cols-3 sm:grid-cols-5 gap-3">
                            {for thumbnails.into_iter().map(|thumb| {
                                let index = thumb.index;
                                let onclick = on_remove.reform({
                                    let category = category.clone();
                                    move |_: MouseEvent| (category.clone(), index)
                                });
                                html! {
                                    <div class="relative aspect-square rounded overflow-hidden bg-neutral-100 dark:bg-neutral-700">
                                        if let Some(src) = thumb.src {
                                            <img src={src} alt={thumb.name.clone()} class="w-full h-full object-cover" />
                                        } else {
                                            <div class="w-full h-full flex items-center justify-center text-xs text-neutral-500 p-1 truncate">
                                                {&thumb.name}
                                            </div>
                                        }
                                        if thumb.pending {
                                            <span class="absolute bottom-1 left-1 text-[10px] px-1 rounded bg-white/80 text-neutral-700">
                                                {"Not uploaded"}
                                            </span>
                                        }
                                        <button
                                            type="button"
                                            {onclick}
                                            disabled={props.disabled}
                                            title={format!("Remove {}", thumb.name)}
                                            class="absolute top-1 right-1 w-6 h-6 rounded-full bg-black/60 text-white text-sm leading-none"
                                        >
                                            {"×"}
                                        </button>
                                    </div>
                                }
                            })}
                            if !full {
                                <label
                                    for={input_id.clone()}
                                    class="aspect-square rounded border-2 border-dashed border-neutral-300 dark:border-neutral-600
                                           hover:border-neutral-400 flex flex-col items-center justify-center cursor-pointer"
                                >
                                    <span class="text-2xl text-neutral-400">{"+"}</span>
                                    <span class="text-xs text-neutral-500 mt-1">{"Add photos"}</span>
                                </label>
                            }
                        </div>
                        <input
                            id={input_id}
                            type="file"
                            accept="image/*"
                            multiple={true}
                            class="hidden"
                            disabled={props.disabled || full}
                            {onchange}
                        />
                    </section>
                }
            })}
        </div>
    }
}

/// Read the picked files off a file input, then clear it so picking the
/// same file again still fires a change event.
fn picked_files(e: Event) -> Vec<LocalFile<File>> {
    let input: HtmlInputElement = e.target_unchecked_into();
    let mut picked = Vec::new();
    if let Some(files) = input.files() {
        for i in 0..files.length() {
            if let Some(file) = files.get(i) {
                picked.push(LocalFile::new(
                    file.name(),
                    file.size() as u64,
                    file.type_(),
                    file,
                ));
            }
        }
    }
    input.set_value("");
    picked
}
