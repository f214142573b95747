use gallery::CategorizedMediaState;
use payloads::{
    APIClient, DraftId, FieldError, ListingDraft, ListingKind, PropertyClass,
    WizardProgress, WizardStep,
    requests::{NotifyOwner, SaveDraft},
    validation::build_submission,
};
use web_sys::File;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::{
    Route, State, SubmittedListing,
    components::StepProgress,
    contexts::use_toast,
    drafts, get_api_client,
    hooks::use_title,
    steps::{
        AmenitiesStep, FlatmateStep, GalleryStep, LocalityStep, PgStep,
        PropertyStep, RentalStep, ResaleStep, ScheduleStep, edit,
    },
    uploads::upload_pending,
};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub kind: ListingKind,
    pub class: PropertyClass,
}

/// Give the step's section its blank value so validating it reports the
/// individual missing fields.
fn ensure_section(draft: &mut ListingDraft, step: WizardStep) {
    match step {
        WizardStep::Property => {
            draft.property.get_or_insert_with(Default::default);
        }
        WizardStep::Locality => {
            draft.locality.get_or_insert_with(Default::default);
        }
        WizardStep::Rental => {
            draft.rental.get_or_insert_with(Default::default);
        }
        WizardStep::Resale => {
            draft.resale.get_or_insert_with(Default::default);
        }
        WizardStep::PgDetails => {
            draft.pg.get_or_insert_with(Default::default);
        }
        WizardStep::Flatmate => {
            draft.flatmate.get_or_insert_with(Default::default);
        }
        WizardStep::Amenities => {
            draft.amenities.get_or_insert_with(Default::default);
        }
        WizardStep::Schedule => {
            draft.schedule.get_or_insert_with(Default::default);
        }
        // built from the photo widget's state instead
        WizardStep::Gallery => {}
    }
}

/// Upload any photos still on this device and store the resulting gallery
/// in the draft. On failure, hands back the photo state as far as it got.
async fn commit_gallery(
    client: &APIClient,
    mut draft: ListingDraft,
    media: CategorizedMediaState<File>,
    video: Option<String>,
) -> Result<
    (ListingDraft, CategorizedMediaState<File>),
    (CategorizedMediaState<File>, String),
> {
    let media = upload_pending(client, media)
        .await
        .map_err(|(partial, e)| (partial, format!("{e:#}")))?;
    match media.to_payload(video) {
        Ok(payload) => {
            draft.gallery = Some(payload);
            Ok((draft, media))
        }
        Err(e) => Err((media, e.to_string())),
    }
}

#[function_component]
pub fn ListingWizardPage(props: &Props) -> Html {
    let kind = props.kind;
    let class = if kind.supports_commercial() {
        props.class
    } else {
        PropertyClass::Residential
    };
    use_title(&format!("List your property for {kind}"));

    let toast = use_toast();
    let navigator = use_navigator();
    let (_, dispatch) = use_store::<State>();

    let draft = use_state(|| ListingDraft::new(kind, class));
    let progress = use_state(|| WizardProgress::new(kind));
    let media = use_state(|| CategorizedMediaState::<File>::new(&class.gallery_config()));
    let video = use_state(|| None::<String>);
    let draft_id = use_state(|| None::<DraftId>);
    let errors = use_state(Vec::<FieldError>::new);
    let busy = use_state(|| None::<&'static str>);
    let resuming = use_state(|| drafts::stored_draft_id(kind, class).is_some());

    // Resume a saved draft on mount
    {
        let draft = draft.clone();
        let progress = progress.clone();
        let media = media.clone();
        let video = video.clone();
        let draft_id = draft_id.clone();
        let resuming = resuming.clone();
        let toast = toast.clone();

        use_effect_with((), move |_| {
            if let Some(id) = drafts::stored_draft_id(kind, class) {
                yew::platform::spawn_local(async move {
                    match get_api_client().get_draft(&id).await {
                        Ok(saved)
                            if saved.draft.kind == kind
                                && saved.draft.class == class =>
                        {
                            tracing::debug!(draft_id = %saved.id, "resuming draft");
                            let gallery =
                                saved.draft.gallery.clone().unwrap_or_default();
                            media.set(CategorizedMediaState::from_payload(
                                &class.gallery_config(),
                                &gallery,
                            ));
                            video.set(gallery.video);
                            progress.set(WizardProgress::resume(&saved.draft));
                            draft_id.set(Some(saved.id));
                            draft.set(saved.draft);
                            toast.success("Picked up where you left off");
                        }
                        Ok(saved) => {
                            tracing::warn!(draft_id = %saved.id, "stored draft belongs to another flow");
                            drafts::clear_draft_id(kind, class);
                        }
                        Err(e) => {
                            tracing::warn!(draft_id = %id, "failed to load draft: {e}");
                            drafts::clear_draft_id(kind, class);
                            toast.error(format!("Could not load your saved draft: {e}"));
                        }
                    }
                    resuming.set(false);
                });
            }
        });
    }

    let set_draft = {
        let draft = draft.clone();
        Callback::from(move |next: ListingDraft| draft.set(next))
    };
    let set_media = {
        let media = media.clone();
        Callback::from(move |next: CategorizedMediaState<File>| media.set(next))
    };
    let set_video = {
        let video = video.clone();
        Callback::from(move |next: Option<String>| video.set(next))
    };

    let on_next = {
        let draft = draft.clone();
        let progress = progress.clone();
        let media = media.clone();
        let video = video.clone();
        let errors = errors.clone();
        let busy = busy.clone();
        let toast = toast.clone();

        Callback::from(move |_: MouseEvent| {
            let step = progress.current();
            let mut draft_value = (*draft).clone();
            ensure_section(&mut draft_value, step);

            let advance = {
                let progress = progress.clone();
                let errors = errors.clone();
                let toast = toast.clone();
                move |draft_value: &ListingDraft| {
                    let mut next = (*progress).clone();
                    match next.advance(draft_value) {
                        Ok(()) => {
                            errors.set(Vec::new());
                            progress.set(next);
                        }
                        Err(problems) => {
                            errors.set(problems);
                            toast.error("Please fix the highlighted fields");
                        }
                    }
                }
            };

            if step != WizardStep::Gallery {
                advance(&draft_value);
                draft.set(draft_value);
                return;
            }

            let draft = draft.clone();
            let media_value = (*media).clone();
            let media = media.clone();
            let video_value = (*video).clone();
            let busy = busy.clone();
            let toast = toast.clone();
            yew::platform::spawn_local(async move {
                busy.set(Some("Uploading photos..."));
                let client = get_api_client();
                match commit_gallery(&client, draft_value, media_value, video_value).await {
                    Ok((draft_value, media_value)) => {
                        media.set(media_value);
                        advance(&draft_value);
                        draft.set(draft_value);
                    }
                    Err((partial, message)) => {
                        media.set(partial);
                        toast.error(message);
                    }
                }
                busy.set(None);
            });
        })
    };

    let on_back = {
        let progress = progress.clone();
        let errors = errors.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*progress).clone();
            next.back();
            progress.set(next);
            errors.set(Vec::new());
        })
    };

    let on_jump = {
        let progress = progress.clone();
        let errors = errors.clone();
        Callback::from(move |step: WizardStep| {
            let mut next = (*progress).clone();
            if next.jump_to(step) {
                progress.set(next);
                errors.set(Vec::new());
            }
        })
    };

    let on_save = {
        let draft = draft.clone();
        let media = media.clone();
        let video = video.clone();
        let draft_id = draft_id.clone();
        let busy = busy.clone();
        let toast = toast.clone();

        Callback::from(move |_: MouseEvent| {
            let draft = draft.clone();
            let draft_value = (*draft).clone();
            let media = media.clone();
            let media_value = (*media).clone();
            let video_value = (*video).clone();
            let draft_id = draft_id.clone();
            let busy = busy.clone();
            let toast = toast.clone();

            yew::platform::spawn_local(async move {
                busy.set(Some("Saving draft..."));
                let client = get_api_client();
                match commit_gallery(&client, draft_value, media_value, video_value).await {
                    Ok((draft_value, media_value)) => {
                        media.set(media_value);
                        let request = SaveDraft {
                            draft_id: *draft_id,
                            draft: draft_value.clone(),
                        };
                        draft.set(draft_value);
                        match client.save_draft(&request).await {
                            Ok(id) => {
                                drafts::store_draft_id(kind, class, id);
                                draft_id.set(Some(id));
                                toast.success("Draft saved");
                            }
                            Err(e) => toast.error(format!("Could not save draft: {e}")),
                        }
                    }
                    Err((partial, message)) => {
                        media.set(partial);
                        toast.error(message);
                    }
                }
                busy.set(None);
            });
        })
    };

    let on_restart = {
        let draft = draft.clone();
        let progress = progress.clone();
        let media = media.clone();
        let video = video.clone();
        let draft_id = draft_id.clone();
        let errors = errors.clone();

        Callback::from(move |_: MouseEvent| {
            drafts::clear_draft_id(kind, class);
            if let Some(id) = *draft_id {
                yew::platform::spawn_local(async move {
                    if let Err(e) = get_api_client().delete_draft(&id).await {
                        tracing::warn!(draft_id = %id, "failed to delete draft: {e}");
                    }
                });
            }
            draft.set(ListingDraft::new(kind, class));
            progress.set(WizardProgress::new(kind));
            media.set(CategorizedMediaState::new(&class.gallery_config()));
            video.set(None);
            draft_id.set(None);
            errors.set(Vec::new());
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let progress = progress.clone();
        let media = media.clone();
        let video = video.clone();
        let draft_id = draft_id.clone();
        let errors = errors.clone();
        let busy = busy.clone();
        let toast = toast.clone();
        let navigator = navigator.clone();
        let dispatch = dispatch.clone();

        Callback::from(move |_: MouseEvent| {
            let mut draft_value = (*draft).clone();
            ensure_section(&mut draft_value, progress.current());
            let draft = draft.clone();
            let progress = progress.clone();
            let media = media.clone();
            let media_value = (*media).clone();
            let video_value = (*video).clone();
            let draft_id = *draft_id;
            let errors = errors.clone();
            let busy = busy.clone();
            let toast = toast.clone();
            let navigator = navigator.clone();
            let dispatch = dispatch.clone();

            yew::platform::spawn_local(async move {
                busy.set(Some("Submitting..."));
                let client = get_api_client();

                let draft_value = match commit_gallery(
                    &client,
                    draft_value,
                    media_value,
                    video_value,
                )
                .await
                {
                    Ok((draft_value, media_value)) => {
                        media.set(media_value);
                        draft.set(draft_value.clone());
                        draft_value
                    }
                    Err((partial, message)) => {
                        media.set(partial);
                        toast.error(message);
                        busy.set(None);
                        return;
                    }
                };

                let mut next = (*progress).clone();
                if let Err(problems) = next.advance(&draft_value) {
                    errors.set(problems);
                    toast.error("Please fix the highlighted fields");
                    busy.set(None);
                    return;
                }

                let submission = match build_submission(&draft_value) {
                    Ok(submission) => submission,
                    Err(problems) => {
                        // send the owner back to the first step that fails
                        progress.set(WizardProgress::resume(&draft_value));
                        errors.set(problems);
                        toast.error("Some steps still need attention");
                        busy.set(None);
                        return;
                    }
                };
                progress.set(next);

                match client.submit_listing(&submission).await {
                    Ok(listing_id) => {
                        tracing::info!(%listing_id, %kind, "listing submitted");
                        let notify = NotifyOwner { listing_id, kind };
                        let notify_failed = match client.notify_owner(&notify).await {
                            Ok(()) => false,
                            Err(e) => {
                                tracing::warn!(%listing_id, "owner notification failed: {e}");
                                true
                            }
                        };
                        if let Some(id) = draft_id {
                            if let Err(e) = client.delete_draft(&id).await {
                                tracing::warn!(draft_id = %id, "failed to delete draft: {e}");
                            }
                        }
                        drafts::clear_draft_id(kind, class);
                        dispatch.reduce_mut(|state| {
                            state.last_submission = Some(SubmittedListing {
                                id: listing_id,
                                kind,
                                class,
                                notify_failed,
                            });
                        });
                        if let Some(navigator) = &navigator {
                            navigator.push(&Route::ListingSubmitted);
                        }
                    }
                    Err(e) => toast.error(format!("Could not submit listing: {e}")),
                }
                busy.set(None);
            });
        })
    };

    if *resuming {
        return html! {
            <div class="text-center py-12">
                <p class="text-neutral-600 dark:text-neutral-400">
                    {"Loading your saved draft..."}
                </p>
            </div>
        };
    }

    let step = progress.current();
    let step_errors = (*errors).clone();
    let is_busy = busy.is_some();

    let body = match step {
        WizardStep::Property => html! {
            <PropertyStep
                value={draft.property.clone().unwrap_or_default()}
                {class}
                errors={step_errors}
                on_change={edit(&*draft, &set_draft, |d, v| d.property = Some(v))}
            />
        },
        WizardStep::Locality => html! {
            <LocalityStep
                value={draft.locality.clone().unwrap_or_default()}
                errors={step_errors}
                on_change={edit(&*draft, &set_draft, |d, v| d.locality = Some(v))}
            />
        },
        WizardStep::Rental => html! {
            <RentalStep
                value={draft.rental.clone().unwrap_or_default()}
                errors={step_errors}
                on_change={edit(&*draft, &set_draft, |d, v| d.rental = Some(v))}
            />
        },
        WizardStep::Resale => html! {
            <ResaleStep
                value={draft.resale.clone().unwrap_or_default()}
                errors={step_errors}
                on_change={edit(&*draft, &set_draft, |d, v| d.resale = Some(v))}
            />
        },
        WizardStep::PgDetails => html! {
            <PgStep
                value={draft.pg.clone().unwrap_or_default()}
                errors={step_errors}
                on_change={edit(&*draft, &set_draft, |d, v| d.pg = Some(v))}
            />
        },
        WizardStep::Flatmate => html! {
            <FlatmateStep
                value={draft.flatmate.clone().unwrap_or_default()}
                errors={step_errors}
                on_change={edit(&*draft, &set_draft, |d, v| d.flatmate = Some(v))}
            />
        },
        WizardStep::Amenities => html! {
            <AmenitiesStep
                value={draft.amenities.clone().unwrap_or_default()}
                errors={step_errors}
                on_change={edit(&*draft, &set_draft, |d, v| d.amenities = Some(v))}
            />
        },
        WizardStep::Gallery => html! {
            <GalleryStep
                {class}
                value={(*media).clone()}
                video={(*video).clone()}
                errors={step_errors}
                on_change={set_media}
                on_video_change={set_video}
                disabled={is_busy}
            />
        },
        WizardStep::Schedule => html! {
            <ScheduleStep
                value={draft.schedule.clone().unwrap_or_default()}
                errors={step_errors}
                on_change={edit(&*draft, &set_draft, |d, v| d.schedule = Some(v))}
            />
        },
    };

    let heading = match class {
        PropertyClass::Commercial => format!("Commercial property for {kind}"),
        PropertyClass::Residential => format!("Residential property for {kind}"),
    };
    let heading = if kind.supports_commercial() {
        heading
    } else {
        format!("List your {kind}")
    };

    let secondary_button = "px-4 py-2 border border-neutral-300 dark:border-neutral-600 rounded-md text-sm font-medium
        text-neutral-700 dark:text-neutral-300 bg-white dark:bg-neutral-700 hover:bg-neutral-50 dark:hover:bg-neutral-600
        disabled:opacity-50 disabled:cursor-not-allowed transition-colors duration-200";
    let primary_button = "px-4 py-2 rounded-md text-sm font-medium text-white bg-neutral-900 hover:bg-neutral-800
        dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200
        disabled:opacity-50 disabled:cursor-not-allowed transition-colors duration-200";

    html! {
        <div class="grid grid-cols-1 md:grid-cols-4 gap-8">
            <aside class="md:col-span-1">
                <StepProgress progress={(*progress).clone()} {on_jump} />
            </aside>
            <section class="md:col-span-3 bg-white dark:bg-neutral-800 p-6 rounded-lg shadow-md">
                <div class="mb-6">
                    <p class="text-xs uppercase tracking-wide text-neutral-500">{heading}</p>
                    <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100">
                        {step.title()}
                    </h1>
                    <p class="text-sm text-neutral-500">
                        {format!("Step {} of {}", progress.current_index() + 1, progress.steps().len())}
                    </p>
                </div>

                {body}

                <div class="mt-8 flex flex-wrap items-center justify-between gap-3">
                    <div class="flex gap-3">
                        <button type="button" class={secondary_button} onclick={on_back}
                            disabled={progress.is_first() || is_busy}>
                            {"Back"}
                        </button>
                        <button type="button" class={secondary_button} onclick={on_restart} disabled={is_busy}>
                            {"Start over"}
                        </button>
                    </div>
                    <div class="flex items-center gap-3">
                        if let Some(label) = *busy {
                            <span class="text-sm text-neutral-500">{label}</span>
                        }
                        <button type="button" class={secondary_button} onclick={on_save} disabled={is_busy}>
                            {"Save draft"}
                        </button>
                        if progress.is_last() {
                            <button type="button" class={primary_button} onclick={on_submit} disabled={is_busy}>
                                {"Submit listing"}
                            </button>
                        } else {
                            <button type="button" class={primary_button} onclick={on_next} disabled={is_busy}>
                                {"Save & Continue"}
                            </button>
                        }
                    </div>
                </div>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_section_fills_only_the_step() {
        let mut draft = ListingDraft::new(ListingKind::Rent, PropertyClass::Residential);
        ensure_section(&mut draft, WizardStep::Rental);
        assert!(draft.rental.is_some());
        assert!(draft.property.is_none());

        // the gallery is never filled with a blank payload
        ensure_section(&mut draft, WizardStep::Gallery);
        assert!(draft.gallery.is_none());
    }

    #[test]
    fn test_blank_section_reports_fields() {
        let mut draft = ListingDraft::new(ListingKind::Rent, PropertyClass::Residential);
        ensure_section(&mut draft, WizardStep::Locality);
        let errors = payloads::validation::validate_step(&draft, WizardStep::Locality);
        let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, ["city", "locality"]);
    }
}
