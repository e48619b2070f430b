use shared::{
    BudgetStatusResponse, ExpenseEntry, MonthlyReportResponse, OverallSummaryResponse,
    TrackerConfig,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

mod components;
mod services;

use components::{ExpenseForm, ExpenseTable, MonthlyReport, SummaryPanel};
use services::ApiClient;

#[function_component(App)]
fn app() -> Html {
    let config = TrackerConfig::default();

    let entries = use_state(Vec::<ExpenseEntry>::new);
    let summary = use_state(|| Option::<OverallSummaryResponse>::None);
    let months = use_state(Vec::<String>::new);
    let selected_month = use_state(|| Option::<String>::None);
    let report = use_state(|| Option::<MonthlyReportResponse>::None);
    let budget_input = use_state(|| "5000".to_string());
    let budget_status = use_state(|| Option::<BudgetStatusResponse>::None);
    let loading = use_state(|| true);

    // Recompute the whole view from the backend. Every mutation and the
    // initial load funnel through here; there are no incremental updates.
    let refresh = {
        let entries = entries.clone();
        let summary = summary.clone();
        let months = months.clone();
        let selected_month = selected_month.clone();
        let report = report.clone();
        let budget_input = budget_input.clone();
        let budget_status = budget_status.clone();
        let loading = loading.clone();

        Callback::from(move |_: ()| {
            let entries = entries.clone();
            let summary = summary.clone();
            let months = months.clone();
            let selected_month = selected_month.clone();
            let report = report.clone();
            let budget_input = budget_input.clone();
            let budget_status = budget_status.clone();
            let loading = loading.clone();

            spawn_local(async move {
                loading.set(true);
                let api = ApiClient::new();

                match api.list_expenses().await {
                    Ok(response) => entries.set(response.entries),
                    Err(e) => gloo::console::error!("Failed to fetch expenses:", e),
                }

                match api.overall_summary().await {
                    Ok(response) => summary.set(Some(response)),
                    Err(e) => gloo::console::error!("Failed to fetch summary:", e),
                }

                let month = match api.months().await {
                    Ok(response) => {
                        // Keep the current selection while it still has data,
                        // otherwise fall back to the earliest month.
                        let next = match (*selected_month).clone() {
                            Some(month) if response.months.contains(&month) => Some(month),
                            _ => response.months.first().cloned(),
                        };
                        selected_month.set(next.clone());
                        months.set(response.months);
                        next
                    }
                    Err(e) => {
                        gloo::console::error!("Failed to fetch month list:", e);
                        None
                    }
                };

                if let Some(month) = month {
                    match api.monthly_report(&month).await {
                        Ok(response) => report.set(Some(response)),
                        Err(e) => gloo::console::error!("Failed to fetch monthly report:", e),
                    }

                    let budget = (*budget_input).trim().parse::<f64>().unwrap_or(0.0);
                    match api.budget_status(&month, budget).await {
                        Ok(response) => budget_status.set(Some(response)),
                        Err(e) => gloo::console::error!("Failed to fetch budget status:", e),
                    }
                }

                loading.set(false);
            });
        })
    };

    // Load everything once on startup.
    use_effect_with((), {
        let refresh = refresh.clone();
        move |_| {
            refresh.emit(());
            || ()
        }
    });

    // Reload the report and budget check when the month or budget changes.
    use_effect_with((selected_month.clone(), budget_input.clone()), {
        let report = report.clone();
        let budget_status = budget_status.clone();

        move |(selected_month, budget_input): &(
            UseStateHandle<Option<String>>,
            UseStateHandle<String>,
        )| {
            let month = (**selected_month).clone();
            let budget = (**budget_input).trim().parse::<f64>().unwrap_or(0.0);
            let report = report.clone();
            let budget_status = budget_status.clone();

            spawn_local(async move {
                let Some(month) = month else {
                    report.set(None);
                    budget_status.set(None);
                    return;
                };

                let api = ApiClient::new();
                match api.monthly_report(&month).await {
                    Ok(response) => report.set(Some(response)),
                    Err(e) => gloo::console::error!("Failed to fetch monthly report:", e),
                }
                match api.budget_status(&month, budget).await {
                    Ok(response) => budget_status.set(Some(response)),
                    Err(e) => gloo::console::error!("Failed to fetch budget status:", e),
                }
            });

            || ()
        }
    });

    let on_month_change = {
        let selected_month = selected_month.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            selected_month.set(Some(select.value()));
        })
    };

    let on_budget_change = {
        let budget_input = budget_input.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            budget_input.set(input.value());
        })
    };

    let on_added = {
        let refresh = refresh.clone();
        Callback::from(move |_| refresh.emit(()))
    };

    html! {
        <>
            <header class="header">
                <div class="container">
                    <h1>{"ExpensePulse"}</h1>
                    <p class="tagline">{"Smart expense tracking & spending insights"}</p>
                </div>
            </header>

            <main class="main">
                <div class="container layout">
                    <ExpenseForm on_added={on_added} />

                    <div class="content">
                        {if *loading {
                            html! { <div class="loading">{"Loading..."}</div> }
                        } else { html! {} }}

                        <ExpenseTable
                            entries={(*entries).clone()}
                            currency_symbol={config.currency_symbol.clone()}
                        />

                        <SummaryPanel
                            summary={(*summary).clone()}
                            currency_symbol={config.currency_symbol.clone()}
                        />

                        <MonthlyReport
                            months={(*months).clone()}
                            selected_month={(*selected_month).clone()}
                            report={(*report).clone()}
                            budget_input={(*budget_input).clone()}
                            budget_status={(*budget_status).clone()}
                            currency_symbol={config.currency_symbol.clone()}
                            on_month_change={on_month_change}
                            on_budget_change={on_budget_change}
                        />
                    </div>
                </div>
            </main>
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
