use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

use crate::{models::auth_state::AuthState, routes::Route, services::use_services};

/// Identity providers offered on the login page, as `(provider, label)`.
pub const PROVIDERS: [(&str, &str); 2] = [
    ("google", "Continue with Google"),
    ("kakao", "Continue with Kakao"),
];

/// Starts an external login. The API redirects back to `/auth/callback`.
#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let services = use_services();
    let signed_in = use_selector(|state: &AuthState| state.session.is_authenticated());

    if *signed_in {
        return html! { <Redirect<Route> to={Route::Dashboard} /> };
    }

    let buttons = PROVIDERS.iter().map(|(provider, label)| {
        match services.api.social_login_url(provider) {
            Ok(url) => html! {
                <a class="btn btn-outline w-full" href={url.to_string()}>{ *label }</a>
            },
            Err(err) => {
                log::error!("cannot build login URL for {provider}: {err}");
                html! {}
            }
        }
    });

    html! {
        <div class="min-h-screen flex items-center justify-center bg-base-200">
            <div class="card w-96 bg-base-100 shadow-xl">
                <div class="card-body gap-4">
                    <h2 class="card-title justify-center">{"Sign in to FamFin"}</h2>
                    { for buttons }
                    <Link<Route> to={Route::Home} classes="link link-hover text-sm text-center">
                        {"Back to home"}
                    </Link<Route>>
                </div>
            </div>
        </div>
    }
}
