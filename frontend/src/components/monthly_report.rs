use shared::{BudgetLevel, BudgetStatusResponse, Category, MonthlyReportResponse};
use yew::prelude::*;

use crate::components::CategoryChart;

#[derive(Properties, PartialEq)]
pub struct MonthlyReportProps {
    pub months: Vec<String>,
    pub selected_month: Option<String>,
    pub report: Option<MonthlyReportResponse>,
    pub budget_input: String,
    pub budget_status: Option<BudgetStatusResponse>,
    pub currency_symbol: String,
    pub on_month_change: Callback<Event>,
    pub on_budget_change: Callback<Event>,
}

/// Monthly report: month selector, totals, budget alert, suggestions.
///
/// Hidden entirely until at least one expense exists, matching the rest of
/// the page's empty-state behavior.
#[function_component(MonthlyReport)]
pub fn monthly_report(props: &MonthlyReportProps) -> Html {
    if props.months.is_empty() {
        return html! {};
    }

    html! {
        <section class="monthly-section">
            <h2>{"Monthly Expense Report"}</h2>

            <div class="form-group">
                <label for="month-select">{"Select Month"}</label>
                <select id="month-select" onchange={props.on_month_change.clone()}>
                    {for props.months.iter().map(|month| {
                        let selected = Some(month) == props.selected_month.as_ref();
                        html! {
                            <option value={month.clone()} selected={selected}>
                                {month}
                            </option>
                        }
                    })}
                </select>
            </div>

            {if let Some(report) = props.report.as_ref() {
                let totals: Vec<(Category, f64)> =
                    report.by_category.iter().map(|(c, t)| (*c, *t)).collect();
                html! {
                    <>
                        <div class="metric">
                            <span class="metric-label">{"Monthly Expense"}</span>
                            <span class="metric-value">
                                {format!("{} {:.2}", props.currency_symbol, report.total)}
                            </span>
                        </div>
                        <CategoryChart totals={totals} />
                    </>
                }
            } else {
                html! { <div class="loading">{"Loading report..."}</div> }
            }}

            <h2>{"Monthly Budget Alert"}</h2>

            <div class="form-group">
                <label for="budget-input">{"Set Monthly Budget"}</label>
                <input
                    type="number"
                    id="budget-input"
                    min="0"
                    step="500"
                    value={props.budget_input.clone()}
                    onchange={props.on_budget_change.clone()}
                />
            </div>

            {budget_banner(props)}

            {if let Some(report) = props.report.as_ref() {
                suggestions(report, &props.currency_symbol)
            } else {
                html! {}
            }}
        </section>
    }
}

/// One banner per evaluation outcome; nothing at all when the budget was not
/// evaluated (zero or negative input).
fn budget_banner(props: &MonthlyReportProps) -> Html {
    let Some(status) = props.budget_status.as_ref() else {
        return html! {};
    };
    let Some(evaluation) = status.evaluation.as_ref() else {
        return html! {};
    };

    match evaluation.level {
        BudgetLevel::Exceeded => html! {
            <div class="form-message error">
                {format!(
                    "Budget Exceeded! Spent {sym}{spent:.2} / Budget {sym}{budget:.2}",
                    sym = props.currency_symbol,
                    spent = status.monthly_total,
                    budget = status.budget,
                )}
            </div>
        },
        BudgetLevel::Warning => html! {
            <div class="form-message warning">
                {format!(
                    "Warning! You have used {:.1}% of your budget.",
                    evaluation.usage_percent
                )}
            </div>
        },
        BudgetLevel::Ok => html! {
            <div class="form-message success">
                {format!(
                    "You are within budget. Used {:.1}%.",
                    evaluation.usage_percent
                )}
            </div>
        },
    }
}

fn suggestions(report: &MonthlyReportResponse, currency_symbol: &str) -> Html {
    let Some(top) = report.top_category.as_ref() else {
        return html! {};
    };

    html! {
        <>
            <h2>{"Spending Suggestions"}</h2>
            <div class="form-message info">
                {format!(
                    "Highest spending category: {} ({} {:.2})",
                    top.category, currency_symbol, top.amount
                )}
            </div>
            {if report.discretionary_alert {
                html! {
                    <div class="form-message warning">
                        {"Consider reducing non-essential expenses next month."}
                    </div>
                }
            } else {
                html! {}
            }}
        </>
    }
}
