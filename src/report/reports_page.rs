//! Defines the route handler for the reports page.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    Error,
    app_state::TransactionState,
    currency::REFERENCE_CURRENCY,
    endpoints,
    html::{
        HeadElement, PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE,
        base, format_reference_amount, link,
    },
    navigation::NavBar,
    report::{
        aggregation::{aggregate_by_location, max_location, transactions_by_reference_amount},
        charts::{chart_script, chart_view, location_totals_chart},
    },
    transaction::Transaction,
};

const TABLE_STYLE: &str = "w-full text-sm text-left rtl:text-right text-gray-500 dark:text-gray-400";
const TABLE_CONTAINER_STYLE: &str =
    "relative overflow-x-auto shadow-md sm:rounded-lg w-full max-w-screen-xl mb-8";

fn max_location_table(max: Option<(&str, f64)>) -> Markup {
    html! {
        h2 class="text-lg font-semibold mb-2 w-full max-w-screen-xl" { "Location with the most spending" }

        div class=(TABLE_CONTAINER_STYLE)
        {
            table id="max-location" class=(TABLE_STYLE)
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        th scope="col" class=(TABLE_CELL_STYLE) { "Location" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Total (" (REFERENCE_CURRENCY) ")" }
                    }
                }

                tbody
                {
                    tr class=(TABLE_ROW_STYLE)
                    {
                        @if let Some((location, total)) = max {
                            td class=(TABLE_CELL_STYLE) { (location) }
                            td class=(TABLE_CELL_STYLE) { (format_reference_amount(total)) }
                        } @else {
                            td colspan="2" class="px-6 py-4 text-center" { "No data available" }
                        }
                    }
                }
            }
        }
    }
}

fn ordered_transactions_table(ordered: &[(&Transaction, f64)]) -> Markup {
    html! {
        h2 class="text-lg font-semibold mb-2 w-full max-w-screen-xl" { "All transactions ordered by money spent" }

        div class=(TABLE_CONTAINER_STYLE)
        {
            table id="ordered-transactions" class=(TABLE_STYLE)
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        th scope="col" class=(TABLE_CELL_STYLE) { "Description" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Location" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Amount" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Amount (" (REFERENCE_CURRENCY) ")" }
                    }
                }

                tbody
                {
                    @for (transaction, reference_amount) in ordered {
                        tr class=(TABLE_ROW_STYLE)
                        {
                            td class=(TABLE_CELL_STYLE) { (transaction.description) }
                            td class=(TABLE_CELL_STYLE) { (transaction.location) }
                            td class=(TABLE_CELL_STYLE) { (transaction.date) }
                            td class=(TABLE_CELL_STYLE)
                            {
                                (format!("{:.2} {}", transaction.amount, transaction.currency))
                            }
                            td class=(TABLE_CELL_STYLE) { (format_reference_amount(*reference_amount)) }
                        }
                    }
                }
            }
        }
    }
}

fn no_data_view() -> Markup {
    html! {
        p class="mb-4"
        {
            "No transactions to report on yet. "
            (link(endpoints::NEW_TRANSACTION_VIEW, "Add a transaction"))
            " to see where your money goes."
        }
    }
}

fn reports_view(transactions: &[Transaction]) -> Markup {
    let nav_bar = NavBar::new(endpoints::REPORTS_VIEW).into_html();
    let totals = aggregate_by_location(transactions);
    let max = max_location(&totals);
    let ordered = transactions_by_reference_amount(transactions);
    let chart = location_totals_chart(&totals);

    let content = html! {
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            h1 class="text-xl font-bold mb-4 w-full max-w-screen-xl" { "Reports" }

            (max_location_table(max))

            @if transactions.is_empty() {
                (no_data_view())
            } @else {
                (ordered_transactions_table(&ordered))
                (chart_view(&chart))
            }
        }
    };

    let scripts = if transactions.is_empty() {
        Vec::new()
    } else {
        vec![
            HeadElement::ScriptLink("/static/echarts.6.0.0.min.js".to_owned()),
            chart_script(&chart),
        ]
    };

    base("Reports", &scripts, &content)
}

/// Render the report of spending per location.
pub async fn get_reports_page(State(state): State<TransactionState>) -> Result<Response, Error> {
    let transactions = state.with_store(|store| store.list_all())?;

    Ok(reports_view(&transactions).into_response())
}
