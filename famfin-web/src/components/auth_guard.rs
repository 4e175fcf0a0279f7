use client::{GuardOutcome, GuardPhase, Liveness};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::{use_location, use_navigator};
use yewdux::prelude::{use_dispatch, use_selector};

use crate::{
    components::loading::Loading, models::auth_state::AuthState, navigation::RouterNavigator,
    services::use_services,
};

#[derive(Properties, PartialEq)]
pub struct AuthGuardProps {
    pub children: Html,
}

/// Gates the protected area behind a verified session.
///
/// The phase is derived on every render from the current path and the
/// session store, so a protected path never shows its children before the
/// store holds an identity. A navigation away tears the pending check down.
#[function_component(AuthGuard)]
pub fn auth_guard(props: &AuthGuardProps) -> Html {
    let services = use_services();
    let router = use_navigator();
    let auth = use_dispatch::<AuthState>();
    let rerender = use_force_update();
    // Re-render whenever the mirrored session changes.
    let _session = use_selector(|state: &AuthState| state.session.clone());
    let path = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_default();

    let phase = client::AuthGuard::default().initial_phase(&path, &services.session);

    {
        let services = services.clone();
        use_effect_with(path, move |path| {
            let guard = client::AuthGuard::default();
            let liveness = Liveness::new();

            if guard.initial_phase(path, &services.session) == GuardPhase::Checking {
                let path = path.clone();
                let liveness = liveness.clone();
                spawn_local(async move {
                    let navigator = RouterNavigator::new(router);
                    let outcome = guard
                        .run(&path, &services.session, &services.api, &navigator, &liveness)
                        .await;
                    if outcome == GuardOutcome::Discarded {
                        return;
                    }
                    AuthState::sync(&auth, &services.session);
                    if outcome == GuardOutcome::Render {
                        rerender.force_update();
                    }
                });
            }

            move || liveness.teardown()
        });
    }

    match phase {
        GuardPhase::Checking => html! { <Loading label="Checking your session" /> },
        GuardPhase::Ready => props.children.clone(),
    }
}
