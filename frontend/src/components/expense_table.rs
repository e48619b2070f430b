use shared::ExpenseEntry;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ExpenseTableProps {
    pub entries: Vec<ExpenseEntry>,
    pub currency_symbol: String,
}

/// Expense list in insertion order.
#[function_component(ExpenseTable)]
pub fn expense_table(props: &ExpenseTableProps) -> Html {
    html! {
        <section class="expenses-section">
            <h2>{"Expense List"}</h2>

            {if props.entries.is_empty() {
                html! { <div class="empty-state">{"No expenses added yet"}</div> }
            } else {
                html! {
                    <div class="table-container">
                        <table class="expenses-table">
                            <thead>
                                <tr>
                                    <th>{"Date"}</th>
                                    <th>{"Category"}</th>
                                    <th>{"Description"}</th>
                                    <th>{"Amount"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {for props.entries.iter().map(|entry| {
                                    html! {
                                        <tr>
                                            <td class="date">{entry.date.to_string()}</td>
                                            <td class="category">{entry.category.to_string()}</td>
                                            <td class="description">{&entry.description}</td>
                                            <td class="amount">
                                                {format!("{} {:.2}", props.currency_symbol, entry.amount)}
                                            </td>
                                        </tr>
                                    }
                                })}
                            </tbody>
                        </table>
                    </div>
                }
            }}
        </section>
    }
}
