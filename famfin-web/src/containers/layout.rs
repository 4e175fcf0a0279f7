use crate::components::UserMenu;
use crate::routes::Route;
use web_sys::window;
use yew::{Children, Html, Properties, classes, function_component, html, use_effect_with};
use yew_router::prelude::Link;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    pub current: Route,
}

/// Shell of the dashboard pages: header navigation, user menu and footer.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    use_effect_with((), |_| {
        if let Some(html_element) = window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element())
        {
            html_element
                .set_attribute("data-theme", "light")
                .unwrap_or_default();
        }
        || {}
    });

    let nav = Route::dashboard_entries().into_iter().map(|(route, label)| {
        let active = route == props.current;
        html! {
            <li>
                <Link<Route> to={route} classes={classes!(active.then_some("active"))}>
                    { label }
                </Link<Route>>
            </li>
        }
    });

    html! {
    <>
        <header class="navbar bg-base-200 shadow-sm">
            <div class="flex-1 gap-4">
                <Link<Route> to={Route::Dashboard} classes="btn btn-ghost text-xl">{"FamFin"}</Link<Route>>
                <ul class="menu menu-horizontal px-1">{ for nav }</ul>
            </div>
            <div class="flex-none">
                <UserMenu />
            </div>
        </header>
        <div class="min-h-screen bg-base-100 flex flex-col">
            <main class={classes!("flex-grow", "p-4", "max-w-6xl", "mx-auto", "w-full")}>
                { props.children.clone() }
            </main>
            <footer class="footer footer-center p-4 border-t border-base-300 text-base-content">
                <div>
                    <p>{"FamFin · family budgets made simple"}</p>
                </div>
            </footer>
        </div>
    </>
    }
}
