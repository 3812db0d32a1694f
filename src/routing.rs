//! Application router configuration.

use axum::{
    Router,
    response::Redirect,
    routing::get,
};
use tower_http::services::ServeDir;

use crate::{
    AppState, endpoints,
    not_found::get_404_not_found,
    report::get_reports_page,
    transaction::{
        create_transaction_endpoint, get_create_transaction_page, get_transaction_endpoint,
        get_transactions_page, list_transactions_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::TRANSACTIONS_VIEW, get(get_transactions_page))
        .route(
            endpoints::NEW_TRANSACTION_VIEW,
            get(get_create_transaction_page),
        )
        .route(endpoints::REPORTS_VIEW, get(get_reports_page))
        .route(
            endpoints::TRANSACTIONS_API,
            get(list_transactions_endpoint).post(create_transaction_endpoint),
        )
        .route(endpoints::TRANSACTION, get(get_transaction_endpoint))
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the transactions page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::TRANSACTIONS_VIEW)
}
