use std::{sync::Arc, time::Duration};

use client::{FamfinClient, SessionStore, storage::MemoryStorage};
use shared::{
    config::client::{ClientConfig, DEFAULT_STORAGE_KEY},
    models::{Role, User},
};
use wasm_bindgen_test::*;
use yew::prelude::*;
use yew_router::{
    Router,
    history::{AnyHistory, History, MemoryHistory},
};
use yewdux::YewduxRoot;

use crate::{components::AuthGuard, pages::CallbackPage, services::AppServices};

wasm_bindgen_test_configure!(run_in_browser);

const CONTENT: &str = "protected dashboard content";

#[derive(Properties, PartialEq)]
struct HarnessProps {
    history: AnyHistory,
    services: AppServices,
    children: Html,
}

#[function_component(Harness)]
fn harness(props: &HarnessProps) -> Html {
    html! {
        <YewduxRoot>
            <ContextProvider<AppServices> context={props.services.clone()}>
                <Router history={props.history.clone()}>
                    { props.children.clone() }
                </Router>
            </ContextProvider<AppServices>>
        </YewduxRoot>
    }
}

fn services(signed_in: bool) -> AppServices {
    let session = SessionStore::open(MemoryStorage::shared(), DEFAULT_STORAGE_KEY);
    if signed_in {
        session.set_user(Some(User {
            id: "u-1".to_string(),
            email: "ada@example.com".to_string(),
            name: "Ada".to_string(),
            avatar: None,
            role: Role::Admin,
        }));
    }
    // Unroutable, so a started verification stays pending for the test.
    let config = ClientConfig {
        api_base_url: "http://10.255.255.1/api".to_string(),
        ..ClientConfig::with_defaults()
    };
    let api = FamfinClient::new(&config, Arc::new(MemoryStorage::new())).unwrap();
    AppServices { session, api }
}

fn history_at(path: &str) -> AnyHistory {
    let history = MemoryHistory::new();
    history.push(path.to_string());
    history.into()
}

async fn settle() {
    yew::platform::time::sleep(Duration::ZERO).await;
}

async fn mount(history: AnyHistory, services: AppServices, children: Html) -> web_sys::Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let root = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&root).unwrap();

    yew::Renderer::<Harness>::with_root_and_props(
        root.clone(),
        HarnessProps {
            history,
            services,
            children,
        },
    )
    .render();
    settle().await;
    root
}

fn guarded() -> Html {
    html! {
        <AuthGuard>
            <p>{ CONTENT }</p>
        </AuthGuard>
    }
}

#[wasm_bindgen_test]
async fn guard_shows_placeholder_without_session() {
    let root = mount(history_at("/dashboard"), services(false), guarded()).await;

    let rendered = root.inner_html();
    assert!(rendered.contains("Checking your session"));
    assert!(!rendered.contains(CONTENT));
}

#[wasm_bindgen_test]
async fn guard_renders_children_for_loaded_session() {
    let root = mount(history_at("/dashboard/members"), services(true), guarded()).await;

    let rendered = root.inner_html();
    assert!(rendered.contains(CONTENT));
    assert!(!rendered.contains("Checking your session"));
}

#[wasm_bindgen_test]
async fn guard_renders_public_paths_without_session() {
    let root = mount(history_at("/auth/login"), services(false), guarded()).await;

    assert!(root.inner_html().contains(CONTENT));
}

#[wasm_bindgen_test]
async fn guard_hides_children_when_navigating_into_dashboard() {
    let history = history_at("/auth/login");
    let root = mount(history.clone(), services(false), guarded()).await;
    assert!(root.inner_html().contains(CONTENT));

    history.push("/dashboard".to_string());
    settle().await;

    let rendered = root.inner_html();
    assert!(rendered.contains("Checking your session"));
    assert!(!rendered.contains(CONTENT));
}

#[wasm_bindgen_test]
async fn callback_page_shows_loading_state() {
    let root = mount(
        history_at("/auth/callback"),
        services(false),
        html! { <CallbackPage /> },
    )
    .await;

    assert!(root.inner_html().contains("Completing sign in"));
}
