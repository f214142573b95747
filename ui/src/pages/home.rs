use payloads::{ListingKind, PropertyClass};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{Route, drafts, hooks::use_title};

struct Flow {
    kind: ListingKind,
    class: PropertyClass,
    title: &'static str,
    blurb: &'static str,
}

const FLOWS: &[Flow] = &[
    Flow {
        kind: ListingKind::Rent,
        class: PropertyClass::Residential,
        title: "Rent out a home",
        blurb: "Flats, independent houses and villas for tenants.",
    },
    Flow {
        kind: ListingKind::Resale,
        class: PropertyClass::Residential,
        title: "Sell a home",
        blurb: "Find buyers for your flat or house.",
    },
    Flow {
        kind: ListingKind::Rent,
        class: PropertyClass::Commercial,
        title: "Rent out commercial space",
        blurb: "Offices, shops and warehouses.",
    },
    Flow {
        kind: ListingKind::Resale,
        class: PropertyClass::Commercial,
        title: "Sell commercial property",
        blurb: "Offices, shops, warehouses and industrial buildings.",
    },
    Flow {
        kind: ListingKind::PgHostel,
        class: PropertyClass::Residential,
        title: "List a PG or hostel",
        blurb: "Rooms with shared or private occupancy.",
    },
    Flow {
        kind: ListingKind::Flatmates,
        class: PropertyClass::Residential,
        title: "Find a flatmate",
        blurb: "Share your flat with the right person.",
    },
];

#[function_component]
pub fn HomePage() -> Html {
    use_title("Post your property");

    html! {
        <div class="space-y-8">
            <div class="text-center">
                <h1 class="text-3xl font-bold text-neutral-900 dark:text-neutral-100 mb-2">
                    {"Post your property for free"}
                </h1>
                <p class="text-neutral-600 dark:text-neutral-400">
                    {"Pick what you'd like to list. You can save a draft and finish later."}
                </p>
            </div>
            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4">
                {for FLOWS.iter().map(|flow| {
                    let has_draft = drafts::stored_draft_id(flow.kind, flow.class).is_some();
                    html! {
                        <Link<Route>
                            to={Route::for_flow(flow.kind, flow.class)}
                            classes="block p-6 rounded-lg border border-neutral-200 dark:border-neutral-700
                                     hover:border-neutral-400 dark:hover:border-neutral-500 transition-colors"
                        >
                            <h2 class="font-semibold text-neutral-900 dark:text-neutral-100">{flow.title}</h2>
                            <p class="mt-1 text-sm text-neutral-600 dark:text-neutral-400">{flow.blurb}</p>
                            if has_draft {
                                <p class="mt-3 text-xs font-medium text-amber-700 dark:text-amber-400">
                                    {"Draft in progress"}
                                </p>
                            }
                        </Link<Route>>
                    }
                })}
            </div>
        </div>
    }
}
