//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/api/transactions/{transaction_id}',
//! the parameter is matched by axum's path extractor.

/// The root route which redirects to the transactions page.
pub const ROOT: &str = "/";
/// The page for displaying the user's transactions.
pub const TRANSACTIONS_VIEW: &str = "/transactions";
/// The page for creating a new transaction.
pub const NEW_TRANSACTION_VIEW: &str = "/transactions/new";
/// The page that reports spending per location.
pub const REPORTS_VIEW: &str = "/reports";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route to create and list transactions.
pub const TRANSACTIONS_API: &str = "/api/transactions";
/// The route to access a single transaction.
pub const TRANSACTION: &str = "/api/transactions/{transaction_id}";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/api/transactions/{transaction_id}',
/// '{transaction_id}' is the parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
#[cfg(test)]
pub fn format_endpoint(endpoint_path: &str, id: &str) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_owned();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map_or(endpoint_path.len(), |end| param_start + end + 1);

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}

// These tests are here so that we know when we call `Uri::from_shared` it will not panic.
#[cfg(test)]
mod endpoints_tests {
    use axum::http::Uri;

    use crate::endpoints;

    use super::format_endpoint;

    fn assert_endpoint_is_valid_uri(uri: &str) {
        assert!(uri.parse::<Uri>().is_ok());
    }

    #[test]
    fn endpoints_are_valid_uris() {
        assert_endpoint_is_valid_uri(endpoints::ROOT);
        assert_endpoint_is_valid_uri(endpoints::TRANSACTIONS_VIEW);
        assert_endpoint_is_valid_uri(endpoints::NEW_TRANSACTION_VIEW);
        assert_endpoint_is_valid_uri(endpoints::REPORTS_VIEW);
        assert_endpoint_is_valid_uri(endpoints::STATIC);
        assert_endpoint_is_valid_uri(endpoints::TRANSACTIONS_API);
        assert_endpoint_is_valid_uri(endpoints::TRANSACTION);
    }

    #[test]
    fn produces_valid_uri() {
        let formatted_path = format_endpoint(endpoints::TRANSACTION, "1714521600000");

        assert_eq!(formatted_path, "/api/transactions/1714521600000");
        assert!(formatted_path.parse::<Uri>().is_ok());
    }

    #[test]
    fn returns_original_path_with_no_parameter() {
        let formatted_path = format_endpoint("/hello/world", "1");

        assert_eq!(formatted_path, "/hello/world");
    }

    #[test]
    fn parameter_in_middle() {
        let formatted_path = format_endpoint("/hello/{world}/bye", "1");

        assert_eq!(formatted_path, "/hello/1/bye");
    }
}
