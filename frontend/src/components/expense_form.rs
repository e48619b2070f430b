use shared::{AddExpenseRequest, Category, TrackerConfig};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::services::ApiClient;

#[derive(Properties, PartialEq)]
pub struct ExpenseFormProps {
    /// Fired after the backend accepts an expense, so the page can recompute.
    pub on_added: Callback<()>,
}

/// Sidebar form for recording a new expense.
///
/// The form owns its own input state and talks to the backend itself; the
/// parent only learns that something was added. Validation happens on the
/// backend, and rejection messages are rendered verbatim above the form.
#[function_component(ExpenseForm)]
pub fn expense_form(props: &ExpenseFormProps) -> Html {
    let date = use_state(|| chrono::Local::now().date_naive().to_string());
    let category = use_state(|| Category::Food.name().to_string());
    let description = use_state(String::new);
    let amount = use_state(String::new);
    let submitting = use_state(|| false);
    let form_error = use_state(|| Option::<String>::None);
    let success_message = use_state(|| Option::<String>::None);

    let on_date_change = {
        let date = date.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            date.set(input.value());
        })
    };

    let on_category_change = {
        let category = category.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            category.set(select.value());
        })
    };

    let on_description_change = {
        let description = description.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            description.set(input.value());
        })
    };

    let on_amount_change = {
        let amount = amount.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            amount.set(input.value());
        })
    };

    let on_submit = {
        let date = date.clone();
        let category = category.clone();
        let description = description.clone();
        let amount = amount.clone();
        let submitting = submitting.clone();
        let form_error = form_error.clone();
        let success_message = success_message.clone();
        let on_added = props.on_added.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let date = date.clone();
            let category = category.clone();
            let description = description.clone();
            let amount = amount.clone();
            let submitting = submitting.clone();
            let form_error = form_error.clone();
            let success_message = success_message.clone();
            let on_added = on_added.clone();

            spawn_local(async move {
                form_error.set(None);
                success_message.set(None);
                submitting.set(true);

                let parsed_date = match (*date).parse::<chrono::NaiveDate>() {
                    Ok(parsed) => parsed,
                    Err(_) => {
                        form_error.set(Some("Enter a valid date".to_string()));
                        submitting.set(false);
                        return;
                    }
                };

                // An unparseable amount becomes 0 and is rejected by the
                // backend with its own message.
                let amount_value = (*amount).trim().parse::<f64>().unwrap_or(0.0);

                let request = AddExpenseRequest {
                    date: parsed_date,
                    category: (*category).clone(),
                    description: (*description).clone(),
                    amount: amount_value,
                };

                match ApiClient::new().add_expense(request).await {
                    Ok(response) => {
                        description.set(String::new());
                        amount.set(String::new());
                        success_message.set(Some(response.success_message));
                        on_added.emit(());

                        // Clear the success banner after the configured delay.
                        let success_clear = success_message.clone();
                        let duration = TrackerConfig::default().success_message_duration_ms;
                        spawn_local(async move {
                            gloo::timers::future::TimeoutFuture::new(duration as u32).await;
                            success_clear.set(None);
                        });
                    }
                    Err(message) => {
                        form_error.set(Some(message));
                    }
                }

                submitting.set(false);
            });
        })
    };

    html! {
        <aside class="sidebar">
            <h2>{"Add New Expense"}</h2>

            {if let Some(error) = (*form_error).as_ref() {
                html! {
                    <div class="form-message error">
                        {error}
                    </div>
                }
            } else { html! {} }}

            {if let Some(message) = (*success_message).as_ref() {
                html! {
                    <div class="form-message success">
                        {message}
                    </div>
                }
            } else { html! {} }}

            <form class="add-expense-form" onsubmit={on_submit}>
                <div class="form-group">
                    <label for="expense-date">{"Date"}</label>
                    <input
                        type="date"
                        id="expense-date"
                        value={(*date).clone()}
                        onchange={on_date_change}
                        disabled={*submitting}
                    />
                </div>

                <div class="form-group">
                    <label for="expense-category">{"Category"}</label>
                    <select
                        id="expense-category"
                        onchange={on_category_change}
                        disabled={*submitting}
                    >
                        {for Category::ALL.iter().map(|c| {
                            html! {
                                <option
                                    value={c.name()}
                                    selected={c.name() == category.as_str()}
                                >
                                    {c.name()}
                                </option>
                            }
                        })}
                    </select>
                </div>

                <div class="form-group">
                    <label for="expense-description">{"Description"}</label>
                    <input
                        type="text"
                        id="expense-description"
                        placeholder="Lunch, bus ticket, textbook..."
                        value={(*description).clone()}
                        onchange={on_description_change}
                        disabled={*submitting}
                    />
                </div>

                <div class="form-group">
                    <label for="expense-amount">{"Amount"}</label>
                    <input
                        type="number"
                        id="expense-amount"
                        placeholder="200.00"
                        step="1"
                        min="0"
                        value={(*amount).clone()}
                        onchange={on_amount_change}
                        disabled={*submitting}
                    />
                </div>

                <button
                    type="submit"
                    class="btn btn-primary add-expense-btn"
                    disabled={*submitting}
                >
                    {if *submitting {
                        "Adding Expense..."
                    } else {
                        "Add Expense"
                    }}
                </button>
            </form>
        </aside>
    }
}
