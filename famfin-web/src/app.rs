use crate::components::{AuthGuard, Toaster};
use crate::models::auth_state::AuthState;
use crate::routes::{Route, switch};
use crate::services::AppServices;
use wasm_bindgen::prelude::*;
use yew::{ContextProvider, Html, function_component, html, use_effect_with, use_state};
use yew_router::prelude::*;
use yewdux::prelude::use_dispatch;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

#[function_component(App)]
pub fn app() -> Html {
    let services = use_state(AppServices::bootstrap);
    let auth = use_dispatch::<AuthState>();

    {
        let services = services.clone();
        use_effect_with((), move |_| {
            if let Ok(services) = &*services {
                AuthState::sync(&auth, &services.session);
            }
            || ()
        });
    }

    match &*services {
        Ok(services) => html! {
            <ContextProvider<AppServices> context={services.clone()}>
                <BrowserRouter>
                    <AuthGuard>
                        <Switch<Route> render={switch} />
                    </AuthGuard>
                </BrowserRouter>
                <Toaster />
            </ContextProvider<AppServices>>
        },
        Err(err) => {
            log(&format!("FamFin failed to start: {err}"));
            html! {
                <div class="alert alert-error m-8">
                    { format!("FamFin could not start: {err}") }
                </div>
            }
        }
    }
}
