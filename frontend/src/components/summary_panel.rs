use shared::{Category, OverallSummaryResponse};
use yew::prelude::*;

use crate::components::CategoryChart;

#[derive(Properties, PartialEq)]
pub struct SummaryPanelProps {
    pub summary: Option<OverallSummaryResponse>,
    pub currency_symbol: String,
}

/// Overall total and per-category breakdown for the whole session.
#[function_component(SummaryPanel)]
pub fn summary_panel(props: &SummaryPanelProps) -> Html {
    html! {
        <section class="summary-section">
            <h2>{"Overall Expense Summary"}</h2>

            {match props.summary.as_ref() {
                None => html! { <div class="loading">{"Loading summary..."}</div> },
                Some(summary) if summary.by_category.is_empty() => {
                    html! { <div class="empty-state">{"No expenses added yet"}</div> }
                }
                Some(summary) => {
                    let totals: Vec<(Category, f64)> =
                        summary.by_category.iter().map(|(c, t)| (*c, *t)).collect();
                    html! {
                        <>
                            <div class="metric">
                                <span class="metric-label">{"Total Expense"}</span>
                                <span class="metric-value">
                                    {format!("{} {:.2}", props.currency_symbol, summary.total)}
                                </span>
                            </div>
                            <CategoryChart totals={totals} />
                        </>
                    }
                }
            }}
        </section>
    }
}
