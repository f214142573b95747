use payloads::{WizardProgress, WizardStep};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub progress: WizardProgress,
    pub on_jump: Callback<WizardStep>,
}

/// Sidebar listing the wizard's steps. Completed steps and the first open
/// one are clickable.
#[function_component]
pub fn StepProgress(props: &Props) -> Html {
    let progress = &props.progress;
    let percent = progress.percent_complete();
    let first_open = progress
        .steps()
        .iter()
        .position(|step| !progress.is_completed(*step))
        .unwrap_or(progress.steps().len());

    html! {
        <nav class="space-y-4">
            <div>
                <div class="flex justify-between text-xs text-neutral-500 mb-1">
                    <span>{"Progress"}</span>
                    <span>{format!("{percent}%")}</span>
                </div>
                <div class="h-2 rounded bg-neutral-200 dark:bg-neutral-700 overflow-hidden">
                    <div
                        class="h-full bg-neutral-900 dark:bg-neutral-100 transition-all"
                        style={format!("width: {percent}%")}
                    />
                </div>
            </div>
            <ol class="space-y-1">
                {for progress.steps().iter().enumerate().map(|(index, step)| {
                    let step = *step;
                    let is_current = step == progress.current();
                    let done = progress.is_completed(step);
                    let reachable = done || index <= first_open;
                    let onclick = props.on_jump.reform(move |_: MouseEvent| step);
                    let class = classes!(
                        "w-full", "text-left", "px-3", "py-2", "rounded-md", "text-sm",
                        "flex", "items-center", "gap-2",
                        if is_current {
                            "bg-neutral-100 dark:bg-neutral-800 font-semibold"
                        } else {
                            "hover:bg-neutral-50 dark:hover:bg-neutral-800"
                        },
                        (!reachable).then_some("opacity-50 cursor-not-allowed"),
                    );
                    html! {
                        <li>
                            <button type="button" {class} {onclick} disabled={!reachable}>
                                <span class="w-5 text-center">
                                    {if done { "✓".to_string() } else { (index + 1).to_string() }}
                                </span>
                                {step.title()}
                            </button>
                        </li>
                    }
                })}
            </ol>
        </nav>
    }
}
