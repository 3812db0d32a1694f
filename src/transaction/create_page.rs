//! Defines the route handler for the page for creating a new transaction.

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use time::Date;

use crate::{
    AppState, Error,
    currency::Currency,
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, base,
        loading_spinner,
    },
    navigation::NavBar,
    timezone::local_today,
    transaction::{PaymentMethod, TransactionType},
};

fn required_text_input(name: &str, label: &str, placeholder: &str) -> Markup {
    html! {
        div
        {
            label for=(name) class=(FORM_LABEL_STYLE) { (label) }

            input
                name=(name)
                id=(name)
                type="text"
                placeholder=(placeholder)
                required
                class=(FORM_TEXT_INPUT_STYLE);
        }
    }
}

fn create_transaction_view(today: Date) -> Markup {
    let create_transaction_route = endpoints::TRANSACTIONS_API;
    let nav_bar = NavBar::new(endpoints::NEW_TRANSACTION_VIEW).into_html();
    let spinner = loading_spinner();

    let content = html! {
        (nav_bar)

        div class=(FORM_CONTAINER_STYLE)
        {
            form
                hx-post=(create_transaction_route)
                hx-target-error="#alert-container"
                class="w-full space-y-4 md:space-y-6"
            {
                h2 class="text-xl font-bold" { "New Transaction" }

                (required_text_input("description", "Description", "Description"))

                div
                {
                    label for="amount" class=(FORM_LABEL_STYLE) { "Amount" }

                    input
                        name="amount"
                        id="amount"
                        type="number"
                        step="0.01"
                        placeholder="0.00"
                        required
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div
                {
                    label for="currency" class=(FORM_LABEL_STYLE) { "Currency" }

                    select
                        name="currency"
                        id="currency"
                        required
                        class=(FORM_TEXT_INPUT_STYLE)
                    {
                        @for currency in Currency::SUPPORTED {
                            option value=(currency.code()) { (currency.code()) }
                        }
                    }
                }

                div
                {
                    label for="date" class=(FORM_LABEL_STYLE) { "Date" }

                    input
                        name="date"
                        id="date"
                        type="date"
                        required
                        value=(today)
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                (required_text_input("category", "Category", "e.g. Groceries"))

                div
                {
                    label for="type" class=(FORM_LABEL_STYLE) { "Type" }

                    select
                        name="type"
                        id="type"
                        required
                        class=(FORM_TEXT_INPUT_STYLE)
                    {
                        @for kind in TransactionType::ALL {
                            option
                                value=(kind.as_str())
                                selected[kind == TransactionType::Expense]
                            {
                                (kind.label())
                            }
                        }
                    }
                }

                (required_text_input("location", "Location", "e.g. Skopje"))

                div
                {
                    label for="payment_method" class=(FORM_LABEL_STYLE) { "Payment Method" }

                    select
                        name="payment_method"
                        id="payment_method"
                        class=(FORM_TEXT_INPUT_STYLE)
                    {
                        option value="" { "Not specified" }

                        @for method in PaymentMethod::ALL {
                            option value=(method.as_str()) { (method.as_str()) }
                        }
                    }
                }

                div
                {
                    label for="notes" class=(FORM_LABEL_STYLE) { "Notes" }

                    textarea
                        name="notes"
                        id="notes"
                        rows="3"
                        class=(FORM_TEXT_INPUT_STYLE)
                    {}
                }

                button type="submit" id="submit-button" tabindex="0" class=(BUTTON_PRIMARY_STYLE)
                {
                    span
                        id="indicator"
                        class="inline htmx-indicator"
                    {
                        (spinner)
                    }
                    " Create Transaction"
                }
            }
        }
    };

    base("Create Transaction", &[], &content)
}

/// The state needed for create new transaction page.
#[derive(Debug, Clone)]
pub struct CreateTransactionPageState {
    /// The local timezone as a canonical timezone name, e.g. "Europe/Skopje".
    pub local_timezone: String,
}

impl FromRef<AppState> for CreateTransactionPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// Renders the page for creating a transaction.
///
/// The date input defaults to today's date in the configured timezone.
pub async fn get_create_transaction_page(
    State(state): State<CreateTransactionPageState>,
) -> Result<Response, Error> {
    let today = local_today(&state.local_timezone)?;

    Ok(create_transaction_view(today).into_response())
}
