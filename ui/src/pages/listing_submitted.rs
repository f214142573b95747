use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::{Route, State, hooks::use_title};

#[function_component]
pub fn ListingSubmittedPage() -> Html {
    use_title("Listing submitted");
    let (state, _) = use_store::<State>();

    let Some(listing) = &state.last_submission else {
        // reached directly, nothing to confirm
        return html! { <Redirect<Route> to={Route::Home} /> };
    };

    html! {
        <div class="flex items-center justify-center min-h-[50vh]">
            <div class="max-w-md w-full bg-white dark:bg-neutral-800 p-8 rounded-lg shadow-md text-center space-y-4">
                <div class="text-4xl text-green-600">{"✓"}</div>
                <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100">
                    {"Your listing is submitted"}
                </h1>
                <p class="text-neutral-600 dark:text-neutral-400">
                    {format!("{} listing reference: {}", listing.kind, listing.id)}
                </p>
                if listing.notify_failed {
                    <p class="text-sm text-amber-700 dark:text-amber-400">
                        {"We couldn't send the confirmation email. Your listing is saved."}
                    </p>
                } else {
                    <p class="text-sm text-neutral-500">
                        {"A confirmation email is on its way."}
                    </p>
                }
                <div class="flex justify-center gap-3 pt-2">
                    <Link<Route> to={Route::Home} classes="px-4 py-2 rounded-md text-sm border border-neutral-300 dark:border-neutral-600">
                        {"Home"}
                    </Link<Route>>
                    <Link<Route>
                        to={Route::for_flow(listing.kind, listing.class)}
                        classes="px-4 py-2 rounded-md text-sm text-white bg-neutral-900 dark:bg-neutral-100 dark:text-neutral-900"
                    >
                        {"List another"}
                    </Link<Route>>
                </div>
            </div>
        </div>
    }
}
