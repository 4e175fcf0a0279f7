use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yewdux::prelude::{use_dispatch, use_selector};

use crate::{models::auth_state::AuthState, routes::Route, services::use_services};

#[function_component(UserMenu)]
pub fn user_menu() -> Html {
    let services = use_services();
    let navigator = use_navigator();
    let auth = use_dispatch::<AuthState>();
    let user = use_selector(|state: &AuthState| state.session.user().cloned());
    let Some(user) = (*user).clone() else {
        return html! {};
    };

    let on_logout = Callback::from(move |event: MouseEvent| {
        event.prevent_default();
        services.session.logout();
        AuthState::sync(&auth, &services.session);
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Login);
        }
    });

    let initial = user
        .display_name()
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default();

    html! {
        <div class="dropdown dropdown-end">
            <div tabindex="0" role="button" class="btn btn-ghost gap-2">
                {
                    match &user.avatar {
                        Some(avatar) => html! {
                            <div class="avatar"><div class="w-8 rounded-full"><img src={avatar.clone()} alt="" /></div></div>
                        },
                        None => html! {
                            <div class="avatar placeholder"><div class="bg-neutral text-neutral-content w-8 rounded-full"><span>{ initial }</span></div></div>
                        },
                    }
                }
                <span>{ user.display_name().to_string() }</span>
            </div>
            <ul tabindex="0" class="dropdown-content menu bg-base-100 rounded-box z-10 w-52 p-2 shadow">
                <li class="menu-title">{ user.email.clone() }</li>
                <li><a onclick={on_logout}>{"Sign out"}</a></li>
            </ul>
        </div>
    }
}
