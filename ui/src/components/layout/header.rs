use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component]
pub fn Header() -> Html {
    html! {
        <header class="bg-white dark:bg-neutral-800 border-b border-neutral-200 dark:border-neutral-700">
            <div class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <Link<Route> to={Route::Home} classes="text-xl font-semibold text-neutral-900 dark:text-white">
                        {"ListYourHome"}
                    </Link<Route>>
                    <nav class="flex items-center space-x-4 text-sm">
                        <Link<Route> to={Route::RentResidential} classes="hover:underline">{"Rent"}</Link<Route>>
                        <Link<Route> to={Route::ResaleResidential} classes="hover:underline">{"Sell"}</Link<Route>>
                        <Link<Route> to={Route::PgHostel} classes="hover:underline">{"PG/Hostel"}</Link<Route>>
                        <Link<Route> to={Route::Flatmates} classes="hover:underline">{"Flatmates"}</Link<Route>>
                        <Link<Route> to={Route::AdminContent} classes="text-neutral-500 hover:underline">{"Admin"}</Link<Route>>
                    </nav>
                </div>
            </div>
        </header>
    }
}
