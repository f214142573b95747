use payloads::{APIClient, ListingId, ListingKind, PropertyClass};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

mod components;
mod contexts;
mod drafts;
mod hooks;
mod logs;
mod pages;
mod preview;
mod steps;
mod uploads;

use components::{MainLayout, ToastContainer};
use contexts::ToastProvider;

/// The listing that was just submitted, shown on the confirmation page.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmittedListing {
    pub id: ListingId,
    pub kind: ListingKind,
    pub class: PropertyClass,
    /// Set when the confirmation email request failed.
    pub notify_failed: bool,
}

#[derive(Default, Clone, PartialEq, Store)]
struct State {
    pub last_submission: Option<SubmittedListing>,
}

// Global API client - configurable via environment or same-origin fallback
pub fn get_api_client() -> APIClient {
    // Try environment variable first (set at build time)
    let address = option_env!("BACKEND_URL")
        .map(|url| url.to_string())
        .or_else(|| {
            // Fallback to same origin
            web_sys::window().and_then(|w| w.location().origin().ok())
        })
        .unwrap_or_default();

    APIClient::new(address)
}

#[function_component]
pub fn App() -> Html {
    use_effect_with((), |_| logs::init_logging());

    html! {
        <ToastProvider>
            <BrowserRouter>
                <MainLayout>
                    <Switch<Route> render={switch} />
                </MainLayout>
                <ToastContainer />
            </BrowserRouter>
        </ToastProvider>
    }
}

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/list/rent")]
    RentResidential,
    #[at("/list/rent/commercial")]
    RentCommercial,
    #[at("/list/resale")]
    ResaleResidential,
    #[at("/list/resale/commercial")]
    ResaleCommercial,
    #[at("/list/pg")]
    PgHostel,
    #[at("/list/flatmates")]
    Flatmates,
    #[at("/list/submitted")]
    ListingSubmitted,
    #[at("/admin/content")]
    AdminContent,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Route of the wizard for a listing flow. Classes a kind doesn't
    /// support fall back to its residential flow.
    pub fn for_flow(kind: ListingKind, class: PropertyClass) -> Route {
        match (kind, class) {
            (ListingKind::Rent, PropertyClass::Commercial) => {
                Route::RentCommercial
            }
            (ListingKind::Rent, PropertyClass::Residential) => {
                Route::RentResidential
            }
            (ListingKind::Resale, PropertyClass::Commercial) => {
                Route::ResaleCommercial
            }
            (ListingKind::Resale, PropertyClass::Residential) => {
                Route::ResaleResidential
            }
            (ListingKind::PgHostel, _) => Route::PgHostel,
            (ListingKind::Flatmates, _) => Route::Flatmates,
        }
    }
}

fn switch(route: Route) -> Html {
    use pages::*;

    match route {
        Route::Home => html! { <HomePage /> },
        Route::RentResidential => html! {
            <ListingWizardPage
                key="rent-residential"
                kind={ListingKind::Rent}
                class={PropertyClass::Residential}
            />
        },
        Route::RentCommercial => html! {
            <ListingWizardPage
                key="rent-commercial"
                kind={ListingKind::Rent}
                class={PropertyClass::Commercial}
            />
        },
        Route::ResaleResidential => html! {
            <ListingWizardPage
                key="resale-residential"
                kind={ListingKind::Resale}
                class={PropertyClass::Residential}
            />
        },
        Route::ResaleCommercial => html! {
            <ListingWizardPage
                key="resale-commercial"
                kind={ListingKind::Resale}
                class={PropertyClass::Commercial}
            />
        },
        Route::PgHostel => html! {
            <ListingWizardPage
                key="pg"
                kind={ListingKind::PgHostel}
                class={PropertyClass::Residential}
            />
        },
        Route::Flatmates => html! {
            <ListingWizardPage
                key="flatmates"
                kind={ListingKind::Flatmates}
                class={PropertyClass::Residential}
            />
        },
        Route::ListingSubmitted => html! { <ListingSubmittedPage /> },
        Route::AdminContent => html! { <AdminContentPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
