//! Defines the route handler for the page that lists all transactions.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    Error,
    app_state::TransactionState,
    endpoints,
    html::{
        BUTTON_LINK_STYLE, PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE,
        TABLE_ROW_STYLE, base,
    },
    navigation::NavBar,
    transaction::Transaction,
};

const COLUMNS: [&str; 8] = [
    "Description",
    "Amount",
    "Date",
    "Category",
    "Type",
    "Currency",
    "Location",
    "Payment Method",
];

fn transaction_row(transaction: &Transaction) -> Markup {
    html! {
        tr class=(TABLE_ROW_STYLE) data-transaction-id=(transaction.id)
        {
            th scope="row" class="px-6 py-4 font-medium text-gray-900 whitespace-nowrap dark:text-white"
            {
                (transaction.description)
            }
            td class="px-6 py-4 text-right" { (format!("{:.2}", transaction.amount)) }
            td class=(TABLE_CELL_STYLE) { (transaction.date) }
            td class=(TABLE_CELL_STYLE) { (transaction.category) }
            td class=(TABLE_CELL_STYLE) { (transaction.kind.label()) }
            td class=(TABLE_CELL_STYLE) { (transaction.currency) }
            td class=(TABLE_CELL_STYLE) { (transaction.location) }
            td class=(TABLE_CELL_STYLE)
            {
                @if let Some(payment_method) = transaction.payment_method {
                    (payment_method)
                } @else {
                    "-"
                }
            }
        }
    }
}

fn transactions_view(transactions: &[Transaction]) -> Markup {
    let nav_bar = NavBar::new(endpoints::TRANSACTIONS_VIEW).into_html();

    let content = html! {
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="flex justify-between items-center w-full max-w-screen-xl mb-4"
            {
                h1 class="text-xl font-bold" { "Transactions" }

                a href=(endpoints::NEW_TRANSACTION_VIEW) class=(BUTTON_LINK_STYLE)
                {
                    "Add Transaction"
                }
            }

            div class="relative overflow-x-auto shadow-md sm:rounded-lg w-full max-w-screen-xl"
            {
                table class="w-full text-sm text-left rtl:text-right text-gray-500 dark:text-gray-400"
                {
                    thead class=(TABLE_HEADER_STYLE)
                    {
                        tr
                        {
                            @for column in COLUMNS {
                                th scope="col" class=(TABLE_CELL_STYLE) { (column) }
                            }
                        }
                    }

                    tbody
                    {
                        @for transaction in transactions {
                            (transaction_row(transaction))
                        }

                        @if transactions.is_empty() {
                            tr class=(TABLE_ROW_STYLE)
                            {
                                td colspan=(COLUMNS.len()) class="px-6 py-4 text-center"
                                {
                                    "No transactions yet. Add one to get started."
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    base("Transactions", &[], &content)
}

/// Render the table of all transactions in the order they were created.
pub async fn get_transactions_page(
    State(state): State<TransactionState>,
) -> Result<Response, Error> {
    let transactions = state.with_store(|store| store.list_all())?;

    Ok(transactions_view(&transactions).into_response())
}

#[cfg(test)]
mod tests {
    use axum::extract::State;
    use scraper::{Html, Selector};
    use time::macros::date;

    use crate::{
        app_state::TransactionState,
        currency::Currency,
        endpoints,
        storage::InMemoryKeyValueStorage,
        test_utils::{assert_content_type, assert_status_ok, assert_valid_html, parse_html_document},
        transaction::{NewTransaction, PaymentMethod, get_transactions_page},
    };

    fn body_rows(document: &Html) -> Vec<Vec<String>> {
        let row_selector = Selector::parse("tbody tr").unwrap();
        let cell_selector = Selector::parse("th, td").unwrap();

        document
            .select(&row_selector)
            .map(|row| {
                row.select(&cell_selector)
                    .map(|cell| cell.text().collect::<String>().trim().to_owned())
                    .collect()
            })
            .collect()
    }

    #[tokio::test]
    async fn lists_transactions_in_creation_order() {
        let state = TransactionState::with_storage(InMemoryKeyValueStorage::new());
        state
            .with_store(|store| {
                store
                    .create(
                        NewTransaction::build(
                            "Dinner",
                            25.5,
                            Currency::Euro,
                            date!(2024 - 05 - 01),
                            "Food",
                            "Ohrid",
                        )
                        .payment_method(Some(PaymentMethod::CreditCard)),
                    )
                    .unwrap();
                store
                    .create(NewTransaction::build(
                        "Bus",
                        40.0,
                        Currency::Mkd,
                        date!(2024 - 05 - 02),
                        "Transport",
                        "Skopje",
                    ))
                    .unwrap();
            })
            .unwrap();

        let response = get_transactions_page(State(state)).await.unwrap();

        assert_status_ok(&response);
        assert_content_type(&response, "text/html; charset=utf-8");
        let document = parse_html_document(response).await;
        assert_valid_html(&document);

        let rows = body_rows(&document);
        assert_eq!(
            rows,
            vec![
                vec![
                    "Dinner",
                    "25.50",
                    "2024-05-01",
                    "Food",
                    "Expense",
                    "EURO",
                    "Ohrid",
                    "Credit Card"
                ],
                vec!["Bus", "40.00", "2024-05-02", "Transport", "Expense", "MKD", "Skopje", "-"],
            ]
        );
    }

    #[tokio::test]
    async fn shows_message_without_transactions() {
        let state = TransactionState::with_storage(InMemoryKeyValueStorage::new());

        let response = get_transactions_page(State(state)).await.unwrap();

        let document = parse_html_document(response).await;
        assert_valid_html(&document);
        let rows = body_rows(&document);
        assert_eq!(rows.len(), 1);
        assert!(rows[0][0].contains("No transactions yet"));

        let link_selector =
            Selector::parse(&format!("a[href=\"{}\"]", endpoints::NEW_TRANSACTION_VIEW)).unwrap();
        assert!(
            document.select(&link_selector).next().is_some(),
            "want link to the new transaction page"
        );
    }
}
