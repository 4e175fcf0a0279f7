use client::CallbackResolver;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yewdux::prelude::use_dispatch;

use crate::{
    components::Loading,
    models::{auth_state::AuthState, toast::{ToastNotifier, ToastState}},
    navigation::RouterNavigator,
    services::use_services,
};

/// Landing page of the external login round trip.
#[function_component(CallbackPage)]
pub fn callback_page() -> Html {
    let services = use_services();
    let router = use_navigator();
    let auth = use_dispatch::<AuthState>();
    let toasts = use_dispatch::<ToastState>();

    // Runs once per mount.
    use_effect_with((), move |_| {
        spawn_local(async move {
            let navigator = RouterNavigator::new(router);
            let notifier = ToastNotifier::new(toasts);
            CallbackResolver::default()
                .resolve(&services.session, &services.api, &navigator, &notifier)
                .await;
            AuthState::sync(&auth, &services.session);
        });
        || ()
    });

    html! { <Loading label="Completing sign in" /> }
}
