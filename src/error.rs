//! Defines the app level error type and conversions to rendered HTML pages and alerts.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{alert::Alert, internal_server_error::InternalServerError, not_found::NotFoundError};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the parameters
    /// (e.g., ID) are correct and that the resource has been created.
    #[error("the requested resource could not be found")]
    NotFound,

    /// The data for a new transaction is malformed, e.g. an empty description
    /// or a currency outside of the supported set.
    ///
    /// This error is raised before any storage is touched.
    #[error("invalid transaction: {0}")]
    Validation(String),

    /// The value stored under a key could not be read or parsed.
    ///
    /// The transaction store recovers from this error by treating the
    /// collection as empty, so it should not reach the client.
    #[error("could not read from storage: {0}")]
    StorageRead(String),

    /// The value could not be written to storage.
    ///
    /// Nothing is written when this error occurs and the operation is not
    /// retried.
    #[error("could not write to storage: {0}")]
    StorageWrite(String),

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the transaction store lock.
    #[error("could not acquire the transaction store lock")]
    StoreLockError,

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => NotFoundError.into_response(),
            Error::InvalidTimezoneError(timezone) => InternalServerError {
                description: "Invalid Timezone Settings",
                fix: &format!(
                    "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                ),
            }
            .into_response(),
            Error::StoreLockError => InternalServerError::default().into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}

impl Error {
    /// Convert the error into an HTTP response with an HTML alert.
    pub fn into_alert_response(self) -> Response {
        let (status_code, alert) = match self {
            Error::Validation(reason) => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Invalid transaction".to_owned(),
                    details: format!("{reason}. Check the form and try again."),
                },
            ),
            Error::StorageWrite(reason) => {
                tracing::error!("Could not save transaction: {reason}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Alert::Error {
                        message: "Could not save transaction".to_owned(),
                        details: "The transaction could not be written to storage. \
                            Your other transactions have not been changed, try again later."
                            .to_owned(),
                    },
                )
            }
            Error::InvalidTimezoneError(timezone) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::Error {
                    message: "Invalid Timezone Settings".to_owned(),
                    details: format!(
                        "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                    ),
                },
            ),
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Alert::Error {
                        message: "Something went wrong".to_owned(),
                        details: "An unexpected error occurred, check the server logs for more details."
                            .to_owned(),
                    },
                )
            }
        };

        (status_code, alert.into_html()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::Error;

    #[test]
    fn not_found_renders_404() {
        let response = Error::NotFound.into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_alert_is_bad_request() {
        let response = Error::Validation("description cannot be empty".to_owned())
            .into_alert_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn storage_write_alert_is_server_error() {
        let response = Error::StorageWrite("disk full".to_owned()).into_alert_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn query_returned_no_rows_maps_to_not_found() {
        let error: Error = rusqlite::Error::QueryReturnedNoRows.into();

        assert_eq!(error, Error::NotFound);
    }
}
