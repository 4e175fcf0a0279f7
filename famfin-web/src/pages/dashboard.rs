use shared::models::DashboardSummary;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

use crate::{
    components::Loading,
    format::{money, percent},
    models::{auth_state::AuthState, remote::Remote},
    routes::Route,
    services::use_services,
};

#[derive(Properties, PartialEq)]
struct StatProps {
    title: AttrValue,
    value: String,
}

#[function_component(Stat)]
fn stat(props: &StatProps) -> Html {
    html! {
        <div class="stat">
            <div class="stat-title">{ props.title.clone() }</div>
            <div class="stat-value text-2xl">{ props.value.clone() }</div>
        </div>
    }
}

/// Dashboard page component
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let services = use_services();
    let greeting = use_selector(|state: &AuthState| {
        state
            .session
            .user()
            .map(|user| format!("Welcome back, {}", user.display_name()))
            .unwrap_or_else(|| "Welcome".to_string())
    });
    let summary = use_state(|| Remote::<DashboardSummary>::Loading);

    {
        let summary = summary.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                summary.set(Remote::from_result(services.api.dashboard_summary().await));
            });
            || ()
        });
    }

    let body = match &*summary {
        Remote::Loading => html! { <Loading label="Loading summary" /> },
        Remote::Failed(message) => html! {
            <div class="alert alert-error">{ message.clone() }</div>
        },
        Remote::Ready(summary) => html! {
            <div class="stats stats-vertical lg:stats-horizontal shadow w-full">
                <Stat title="Total wealth" value={money(summary.total_wealth)} />
                <Stat title="Monthly income" value={money(summary.monthly_income)} />
                <Stat title="Monthly spending" value={money(summary.monthly_spending)} />
                <Stat title="Budget used" value={percent(summary.budget_status)} />
            </div>
        },
    };

    html! {
        <div class="space-y-6">
            <h1 class="text-2xl font-bold">{ (*greeting).clone() }</h1>
            { body }
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <div class="card bg-base-200 shadow-xl">
                    <div class="card-body">
                        <h2 class="card-title">{"Family members"}</h2>
                        <p>{"See who shares the budget and set monthly limits."}</p>
                        <div class="card-actions justify-end">
                            <Link<Route> to={Route::Members} classes="btn btn-primary">{"Manage members"}</Link<Route>>
                        </div>
                    </div>
                </div>
                <div class="card bg-base-200 shadow-xl">
                    <div class="card-body">
                        <h2 class="card-title">{"Monthly reports"}</h2>
                        <p>{"Income, spending and savings month by month."}</p>
                        <div class="card-actions justify-end">
                            <Link<Route> to={Route::Reports} classes="btn btn-primary">{"View reports"}</Link<Route>>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
