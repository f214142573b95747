use payloads::{
    ContentRecord, ContentSection, FieldError, content::validate_content,
    requests::UpsertContent,
};
use yew::prelude::*;

use crate::{
    components::form_fields::{
        INPUT_CLASS, TextAreaField, TextField, field_error,
    },
    contexts::use_toast,
    get_api_client,
    hooks::{use_content, use_title},
};

#[function_component]
pub fn AdminContentPage() -> Html {
    use_title("Site content");
    let content_hook = use_content();
    let reload = content_hook.refetch.clone();
    let on_added = content_hook.refetch.clone();

    html! {
        <div class="space-y-8">
            <div>
                <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100">
                    {"Site content"}
                </h1>
                <p class="text-neutral-600 dark:text-neutral-400">
                    {"Text shown on the public pages, grouped by section."}
                </p>
            </div>

            <NewContentForm on_saved={on_added} />

            {content_hook.render("content", move |sections, is_loading, error| html! {
                <div class="space-y-6">
                    if is_loading {
                        <p class="text-sm text-neutral-500">{"Refreshing..."}</p>
                    }
                    if let Some(error) = error {
                        <p class="text-sm text-red-600 dark:text-red-400">{error}</p>
                    }
                    if sections.is_empty() {
                        <p class="text-neutral-500">{"No content yet."}</p>
                    }
                    {for sections.iter().map(|section| html! {
                        <ContentSectionCard
                            key={section.name.clone()}
                            section={section.clone()}
                            on_changed={reload.clone()}
                        />
                    })}
                </div>
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SectionProps {
    section: ContentSection,
    on_changed: Callback<()>,
}

#[function_component]
fn ContentSectionCard(props: &SectionProps) -> Html {
    html! {
        <section class="bg-white dark:bg-neutral-800 rounded-lg shadow-md p-6">
            <h2 class="text-lg font-semibold mb-4 text-neutral-900 dark:text-neutral-100">
                {&props.section.name}
            </h2>
            <div class="divide-y divide-neutral-200 dark:divide-neutral-700">
                {for props.section.records.iter().map(|record| html! {
                    <ContentRow
                        key={record.id.to_string()}
                        record={record.clone()}
                        on_changed={props.on_changed.clone()}
                    />
                })}
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct RowProps {
    record: ContentRecord,
    on_changed: Callback<()>,
}

/// One record with its value editable in place.
#[function_component]
fn ContentRow(props: &RowProps) -> Html {
    let toast = use_toast();
    let value = use_state(|| props.record.value.clone());
    let is_saving = use_state(|| false);

    // pick up the stored value after a reload
    {
        let value = value.clone();
        use_effect_with(props.record.value.clone(), move |stored| {
            value.set(stored.clone())
        });
    }

    let on_input = {
        let value = value.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
            value.set(input.value());
        })
    };

    let on_save = {
        let record = props.record.clone();
        let value = value.clone();
        let is_saving = is_saving.clone();
        let on_changed = props.on_changed.clone();
        let toast = toast.clone();
        Callback::from(move |_: MouseEvent| {
            let request = UpsertContent {
                id: Some(record.id),
                section: record.section.clone(),
                key: record.key.clone(),
                value: (*value).clone(),
            };
            let is_saving = is_saving.clone();
            let on_changed = on_changed.clone();
            let toast = toast.clone();
            yew::platform::spawn_local(async move {
                is_saving.set(true);
                match get_api_client().upsert_content(&request).await {
                    Ok(saved) => {
                        toast.success(format!("Saved {}", saved.key));
                        on_changed.emit(());
                    }
                    Err(e) => toast.error(format!("Could not save: {e}")),
                }
                is_saving.set(false);
            });
        })
    };

    let on_delete = {
        let record = props.record.clone();
        let is_saving = is_saving.clone();
        let on_changed = props.on_changed.clone();
        Callback::from(move |_: MouseEvent| {
            let id = record.id;
            let key = record.key.clone();
            let is_saving = is_saving.clone();
            let on_changed = on_changed.clone();
            let toast = toast.clone();
            yew::platform::spawn_local(async move {
                is_saving.set(true);
                match get_api_client().delete_content(&id).await {
                    Ok(()) => {
                        toast.success(format!("Deleted {key}"));
                        on_changed.emit(());
                    }
                    Err(e) => toast.error(format!("Could not delete: {e}")),
                }
                is_saving.set(false);
            });
        })
    };

    let changed = *value != props.record.value;

    html! {
        <div class="py-4 grid grid-cols-1 md:grid-cols-4 gap-3 items-start">
            <div class="md:col-span-1">
                <p class="font-mono text-sm text-neutral-900 dark:text-neutral-100">{&props.record.key}</p>
                <p class="text-xs text-neutral-500">
                    {format!("Updated {}", props.record.updated_at.strftime("%Y-%m-%d %H:%M"))}
                </p>
            </div>
            <textarea
                class={classes!(INPUT_CLASS, "md:col-span-2")}
                rows="2"
                value={(*value).clone()}
                oninput={on_input}
            />
            <div class="flex gap-2">
                <button
                    type="button"
                    onclick={on_save}
                    disabled={!changed || *is_saving}
                    class="px-3 py-1.5 text-sm font-medium text-white bg-neutral-900 hover:bg-neutral-800
                           dark:bg-neutral-100 dark:text-neutral-900 rounded-md disabled:opacity-50"
                >
                    {"Save"}
                </button>
                <button
                    type="button"
                    onclick={on_delete}
                    disabled={*is_saving}
                    class="px-3 py-1.5 text-sm text-red-600 dark:text-red-400 hover:bg-red-50
                           dark:hover:bg-red-900/20 rounded-md disabled:opacity-50"
                >
                    {"Delete"}
                </button>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct NewContentProps {
    on_saved: Callback<()>,
}

#[function_component]
fn NewContentForm(props: &NewContentProps) -> Html {
    let toast = use_toast();
    let section = use_state(String::new);
    let key = use_state(String::new);
    let value = use_state(String::new);
    let errors = use_state(Vec::<FieldError>::new);
    let is_saving = use_state(|| false);

    let on_submit = {
        let section = section.clone();
        let key = key.clone();
        let value = value.clone();
        let errors = errors.clone();
        let is_saving = is_saving.clone();
        let on_saved = props.on_saved.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let request = UpsertContent {
                id: None,
                section: section.trim().to_string(),
                key: key.trim().to_string(),
                value: (*value).clone(),
            };
            let problems = validate_content(&request);
            if !problems.is_empty() {
                errors.set(problems);
                return;
            }
            errors.set(Vec::new());

            let section = section.clone();
            let key = key.clone();
            let value = value.clone();
            let is_saving = is_saving.clone();
            let on_saved = on_saved.clone();
            let toast = toast.clone();
            yew::platform::spawn_local(async move {
                is_saving.set(true);
                match get_api_client().upsert_content(&request).await {
                    Ok(saved) => {
                        toast.success(format!("Added {}/{}", saved.section, saved.key));
                        section.set(String::new());
                        key.set(String::new());
                        value.set(String::new());
                        on_saved.emit(());
                    }
                    Err(e) => toast.error(format!("Could not add content: {e}")),
                }
                is_saving.set(false);
            });
        })
    };

    let setter = |handle: &UseStateHandle<String>| {
        let handle = handle.clone();
        Callback::from(move |text: String| handle.set(text))
    };

    html! {
        <form onsubmit={on_submit} class="bg-white dark:bg-neutral-800 rounded-lg shadow-md p-6 space-y-4">
            <h2 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100">{"Add content"}</h2>
            <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                <TextField
                    id="content-section"
                    label="Section"
                    value={(*section).clone()}
                    error={field_error(&errors, "section")}
                    on_change={setter(&section)}
                />
                <TextField
                    id="content-key"
                    label="Key"
                    value={(*key).clone()}
                    error={field_error(&errors, "key")}
                    on_change={setter(&key)}
                />
            </div>
            <TextAreaField
                id="content-value"
                label="Value"
                rows={3}
                value={(*value).clone()}
                on_change={setter(&value)}
            />
            <button
                type="submit"
                disabled={*is_saving}
                class="px-4 py-2 rounded-md text-sm font-medium text-white bg-neutral-900 hover:bg-neutral-800
                       dark:bg-neutral-100 dark:text-neutral-900 disabled:opacity-50"
            >
                if *is_saving { {"Adding..."} } else { {"Add"} }
            </button>
        </form>
    }
}
