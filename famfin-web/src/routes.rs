use crate::{containers::layout::Layout, pages::*};
use wasm_bindgen::prelude::*;
use yew::prelude::*;
use yew_router::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// Application routes. Everything under `/dashboard` sits behind the auth guard.
#[derive(Debug, Clone, PartialEq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/auth/login")]
    Login,
    #[at("/auth/callback")]
    Callback,
    #[at("/dashboard")]
    Dashboard,
    #[at("/dashboard/members")]
    Members,
    #[at("/dashboard/reports")]
    Reports,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Route for a raw path, falling back to [`Route::NotFound`].
    pub fn from_path(path: &str) -> Self {
        let pathname = path.split(['?', '#']).next().unwrap_or(path);
        Self::recognize(pathname).unwrap_or(Self::NotFound)
    }

    /// Entries shown in the dashboard navigation.
    pub fn dashboard_entries() -> [(Self, &'static str); 3] {
        [
            (Self::Dashboard, "Overview"),
            (Self::Members, "Members"),
            (Self::Reports, "Reports"),
        ]
    }
}

/// Switch function for the main routes.
pub fn switch(route: Route) -> Html {
    log(std::format!("Switching to route: {:?}", route).as_str());
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Login => html! { <LoginPage /> },
        Route::Callback => html! { <CallbackPage /> },
        Route::Dashboard => html! {
            <Layout current={Route::Dashboard}><DashboardPage /></Layout>
        },
        Route::Members => html! {
            <Layout current={Route::Members}><MembersPage /></Layout>
        },
        Route::Reports => html! {
            <Layout current={Route::Reports}><ReportsPage /></Layout>
        },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
