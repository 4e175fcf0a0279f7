use shared::models::{MonthlyReport, ReportPeriod};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::{components::Loading, format::money, models::remote::Remote, services::use_services};

const MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

fn current_period() -> ReportPeriod {
    let now = js_sys::Date::new_0();
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    let year = now.get_full_year() as i32;
    ReportPeriod::new(year, now.get_month() + 1).unwrap_or(ReportPeriod { year, month: 1 })
}

fn shift(period: ReportPeriod, months: i32) -> ReportPeriod {
    #[allow(clippy::cast_possible_wrap)]
    let index = period.year * 12 + period.month as i32 - 1 + months;
    #[allow(clippy::cast_sign_loss)]
    let month = index.rem_euclid(12) as u32 + 1;
    ReportPeriod {
        year: index.div_euclid(12),
        month,
    }
}

#[derive(Properties, PartialEq)]
struct ReportViewProps {
    report: MonthlyReport,
}

#[function_component(ReportView)]
fn report_view(props: &ReportViewProps) -> Html {
    let report = &props.report;
    let top = report.top_expenses.iter().map(|item| {
        html! {
            <tr key={item.category.clone()}>
                <td>{ item.category.clone() }</td>
                <td class="text-right">{ money(item.amount) }</td>
            </tr>
        }
    });
    let daily = report.daily_spending.iter().map(|day| {
        html! {
            <tr key={day.date.clone()}>
                <td>{ day.date.clone() }</td>
                <td class="text-right">{ money(day.amount) }</td>
            </tr>
        }
    });

    html! {
        <>
            <div class="stats stats-vertical lg:stats-horizontal shadow w-full">
                <div class="stat"><div class="stat-title">{"Income"}</div><div class="stat-value text-2xl">{ money(report.income) }</div></div>
                <div class="stat"><div class="stat-title">{"Expenses"}</div><div class="stat-value text-2xl">{ money(report.expenses) }</div></div>
                <div class="stat"><div class="stat-title">{"Savings"}</div><div class="stat-value text-2xl">{ money(report.savings) }</div></div>
                <div class="stat"><div class="stat-title">{"Remaining budget"}</div><div class="stat-value text-2xl">{ money(report.remaining_budget) }</div></div>
            </div>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <div>
                    <h2 class="text-lg font-semibold mb-2">{"Top expenses"}</h2>
                    <table class="table table-zebra"><tbody>{ for top }</tbody></table>
                </div>
                <div>
                    <h2 class="text-lg font-semibold mb-2">{"Daily spending"}</h2>
                    <table class="table table-zebra"><tbody>{ for daily }</tbody></table>
                </div>
            </div>
        </>
    }
}

#[function_component(ReportsPage)]
pub fn reports_page() -> Html {
    let services = use_services();
    let period = use_state(current_period);
    let report = use_state(|| Remote::<MonthlyReport>::Loading);

    {
        let report = report.clone();
        use_effect_with(*period, move |&period| {
            report.set(Remote::Loading);
            spawn_local(async move {
                report.set(Remote::from_result(services.api.monthly_report(period).await));
            });
            || ()
        });
    }

    let step = |months: i32| {
        let period = period.clone();
        Callback::from(move |_: MouseEvent| period.set(shift(*period, months)))
    };

    let on_month = {
        let period = period.clone();
        Callback::from(move |event: Event| {
            let Some(select) = event.target_dyn_into::<HtmlSelectElement>() else {
                return;
            };
            if let Some(next) = select
                .value()
                .parse()
                .ok()
                .and_then(|month| ReportPeriod::new(period.year, month))
            {
                period.set(next);
            }
        })
    };

    let options = MONTHS.iter().zip(1_u32..).map(|(name, month)| {
        html! {
            <option value={month.to_string()} selected={month == period.month}>{ *name }</option>
        }
    });

    let body = match &*report {
        Remote::Loading => html! { <Loading label="Loading report" /> },
        Remote::Failed(message) => html! { <div class="alert alert-error">{ message.clone() }</div> },
        Remote::Ready(report) => html! { <ReportView report={report.clone()} /> },
    };

    html! {
        <div class="space-y-6">
            <div class="flex items-center gap-2">
                <h1 class="text-2xl font-bold flex-1">{"Monthly report"}</h1>
                <button class="btn btn-sm" onclick={step(-1)}>{"‹"}</button>
                <select class="select select-bordered select-sm" onchange={on_month}>{ for options }</select>
                <span class="font-mono">{ period.year.to_string() }</span>
                <button class="btn btn-sm" onclick={step(1)}>{"›"}</button>
            </div>
            { body }
        </div>
    }
}
