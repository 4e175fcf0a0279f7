use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content text-center flex-col">
                <h1 class="text-6xl font-bold">{"404"}</h1>
                <p>{"This page does not exist."}</p>
                <Link<Route> to={Route::Home} classes="btn btn-primary">{"Go home"}</Link<Route>>
            </div>
        </div>
    }
}
