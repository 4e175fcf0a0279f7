use client::Notifier;
use shared::models::{InviteMemberRequest, Member, Role};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yewdux::prelude::{use_dispatch, use_selector};

use crate::{
    components::Loading,
    format::money,
    models::{
        auth_state::AuthState,
        remote::{Remote, describe},
        toast::{ToastNotifier, ToastState},
    },
    services::use_services,
};

fn text_input(handle: &UseStateHandle<String>) -> Callback<InputEvent> {
    let handle = handle.clone();
    Callback::from(move |event: InputEvent| {
        if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
            handle.set(input.value());
        }
    })
}

#[derive(Properties, PartialEq)]
struct InviteFormProps {
    on_invited: Callback<()>,
}

#[function_component(InviteForm)]
fn invite_form(props: &InviteFormProps) -> Html {
    let services = use_services();
    let notifier = ToastNotifier::new(use_dispatch::<ToastState>());
    let name = use_state(String::new);
    let email = use_state(String::new);
    let relation = use_state(String::new);
    let limit = use_state(|| "0".to_string());
    let role = use_state(|| Role::Member);
    let submitting = use_state(|| false);

    let on_role_change = {
        let role = role.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                role.set(select.value().parse().unwrap_or_default());
            }
        })
    };

    let onsubmit = {
        let (name, email, relation, limit, role, submitting) = (
            name.clone(),
            email.clone(),
            relation.clone(),
            limit.clone(),
            role.clone(),
            submitting.clone(),
        );
        let on_invited = props.on_invited.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let Ok(monthly_limit) = limit.trim().parse::<f64>() else {
                notifier.error("Monthly limit must be a number");
                return;
            };
            let request = InviteMemberRequest {
                name: (*name).clone(),
                email: (*email).clone(),
                role: *role,
                relation: (*relation).clone(),
                monthly_limit,
            };
            let (services, notifier, on_invited) =
                (services.clone(), notifier.clone(), on_invited.clone());
            let (name, email, relation, submitting) =
                (name.clone(), email.clone(), relation.clone(), submitting.clone());
            submitting.set(true);
            spawn_local(async move {
                match services.api.invite_member(&request).await {
                    Ok(()) => {
                        notifier.success(&format!("Invitation sent to {}", request.email));
                        name.set(String::new());
                        email.set(String::new());
                        relation.set(String::new());
                        on_invited.emit(());
                    }
                    Err(err) => notifier.error(&describe(&err)),
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <form class="card bg-base-200 shadow" {onsubmit}>
            <div class="card-body grid grid-cols-1 md:grid-cols-3 gap-3">
                <h2 class="card-title md:col-span-3">{"Invite a member"}</h2>
                <input class="input input-bordered" placeholder="Name" value={(*name).clone()} oninput={text_input(&name)} />
                <input class="input input-bordered" type="email" placeholder="Email" value={(*email).clone()} oninput={text_input(&email)} />
                <input class="input input-bordered" placeholder="Relation" value={(*relation).clone()} oninput={text_input(&relation)} />
                <select class="select select-bordered" onchange={on_role_change}>
                    <option value="MEMBER" selected={*role == Role::Member}>{"Member"}</option>
                    <option value="ADMIN" selected={*role == Role::Admin}>{"Admin"}</option>
                </select>
                <input class="input input-bordered" type="number" min="0" step="0.01" placeholder="Monthly limit" value={(*limit).clone()} oninput={text_input(&limit)} />
                <button class="btn btn-primary" type="submit" disabled={*submitting}>{"Send invite"}</button>
            </div>
        </form>
    }
}

#[function_component(MembersPage)]
pub fn members_page() -> Html {
    let services = use_services();
    let notifier = ToastNotifier::new(use_dispatch::<ToastState>());
    let is_admin = use_selector(|state: &AuthState| {
        state.session.user().is_some_and(|user| user.is_admin())
    });
    let members = use_state(|| Remote::<Vec<Member>>::Loading);
    let revision = use_state(|| 0_u32);

    {
        let members = members.clone();
        let services = services.clone();
        use_effect_with(*revision, move |_| {
            spawn_local(async move {
                members.set(Remote::from_result(services.api.list_members().await));
            });
            || ()
        });
    }

    let reload = {
        let revision = revision.clone();
        Callback::from(move |()| revision.set(revision.wrapping_add(1)))
    };

    let on_remove = {
        let reload = reload.clone();
        Callback::from(move |member: Member| {
            let (services, notifier, reload) = (services.clone(), notifier.clone(), reload.clone());
            spawn_local(async move {
                match services.api.remove_member(&member.id).await {
                    Ok(()) => {
                        notifier.success(&format!("{} was removed", member.name));
                        reload.emit(());
                    }
                    Err(err) => notifier.error(&describe(&err)),
                }
            });
        })
    };

    let rows = match &*members {
        Remote::Loading => return html! { <Loading label="Loading members" /> },
        Remote::Failed(message) => return html! {
            <div class="alert alert-error">{ message.clone() }</div>
        },
        Remote::Ready(members) => members
            .iter()
            .map(|member| {
                let remove = {
                    let on_remove = on_remove.clone();
                    let member = member.clone();
                    Callback::from(move |_: MouseEvent| on_remove.emit(member.clone()))
                };
                html! {
                    <tr key={member.id.clone()}>
                        <td>{ member.name.clone() }</td>
                        <td>{ member.email.clone() }</td>
                        <td>{ member.relation.clone() }</td>
                        <td><span class="badge">{ member.role.to_string() }</span></td>
                        <td>{ money(member.monthly_limit) }</td>
                        <td>
                            if *is_admin {
                                <button class="btn btn-ghost btn-xs" onclick={remove}>{"Remove"}</button>
                            }
                        </td>
                    </tr>
                }
            })
            .collect::<Html>(),
    };

    html! {
        <div class="space-y-6">
            <h1 class="text-2xl font-bold">{"Family members"}</h1>
            <div class="overflow-x-auto">
                <table class="table">
                    <thead>
                        <tr>
                            <th>{"Name"}</th>
                            <th>{"Email"}</th>
                            <th>{"Relation"}</th>
                            <th>{"Role"}</th>
                            <th>{"Monthly limit"}</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>{ rows }</tbody>
                </table>
            </div>
            if *is_admin {
                <InviteForm on_invited={reload} />
            }
        </div>
    }
}
