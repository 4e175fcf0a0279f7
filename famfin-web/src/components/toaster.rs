use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yewdux::prelude::{use_dispatch, use_selector};

use crate::models::toast::{TOAST_TIMEOUT_MS, Toast, ToastState};

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let dispatch = use_dispatch::<ToastState>();
    let id = props.toast.id;

    {
        let dispatch = dispatch.clone();
        use_effect_with(id, move |&id| {
            let timeout = Timeout::new(TOAST_TIMEOUT_MS, move || {
                dispatch.reduce_mut(|state| state.dismiss(id));
            });
            move || drop(timeout)
        });
    }

    let onclick = Callback::from(move |_: MouseEvent| {
        dispatch.reduce_mut(|state| state.dismiss(id));
    });

    html! {
        <div class={props.toast.alert_class()} role="alert" {onclick}>
            <span>{ props.toast.message.clone() }</span>
        </div>
    }
}

/// Stack of transient notifications in the corner of the screen.
#[function_component(Toaster)]
pub fn toaster() -> Html {
    let toasts = use_selector(|state: &ToastState| state.toasts.clone());

    html! {
        <div class="toast toast-top toast-end z-50">
            { for toasts.iter().map(|toast| html! {
                <ToastItem key={toast.id} toast={toast.clone()} />
            }) }
        </div>
    }
}
