use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

use crate::{models::auth_state::AuthState, routes::Route};

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let signed_in = use_selector(|state: &AuthState| state.session.is_authenticated());

    let cta = if *signed_in {
        html! { <Link<Route> to={Route::Dashboard} classes="btn btn-primary">{"Open dashboard"}</Link<Route>> }
    } else {
        html! { <Link<Route> to={Route::Login} classes="btn btn-primary">{"Get started"}</Link<Route>> }
    };

    html! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content text-center">
                <div class="max-w-md">
                    <h1 class="text-5xl font-bold">{"FamFin"}</h1>
                    <p class="py-6">
                        {"Track income, spending and savings for the whole family in one place."}
                    </p>
                    { cta }
                </div>
            </div>
        </div>
    }
}
