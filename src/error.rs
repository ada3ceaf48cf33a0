//! Defines the app level error type and conversions to rendered HTML pages and alerts.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{alert::Alert, internal_server_error::InternalServerError};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// An empty (or whitespace only) string was submitted as an expense description.
    #[error("Description cannot be empty")]
    EmptyDescription,

    /// An empty (or whitespace only) string was submitted as an expense category.
    #[error("Category cannot be empty")]
    EmptyCategory,

    /// The submitted amount is not a finite number.
    ///
    /// Callers should pass in the text that failed to parse.
    #[error("\"{0}\" is not a valid amount")]
    InvalidAmount(String),

    /// The submitted amount is less than zero.
    #[error("Amount cannot be negative")]
    NegativeAmount,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),

    /// Could not acquire the lock for a store or the database connection.
    ///
    /// This only happens when another thread panicked while holding the lock,
    /// which indicates a bug rather than a condition the user can fix.
    #[error("could not acquire the store lock")]
    StoreLockError,
}

impl From<rusqlite::Error> for Error {
    fn from(error: rusqlite::Error) -> Self {
        tracing::error!("an unhandled SQL error occurred: {}", error);
        Error::SqlError(error)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
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
            Error::EmptyDescription | Error::EmptyCategory | Error::NegativeAmount => (
                StatusCode::BAD_REQUEST,
                Alert::error("Invalid expense", &self.to_string()),
            ),
            Error::InvalidAmount(ref text) => (
                StatusCode::BAD_REQUEST,
                Alert::error(
                    "Invalid expense",
                    &format!("\"{text}\" is not a valid amount. Enter a number such as 12.50."),
                ),
            ),
            Error::InvalidTimezoneError(timezone) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::error(
                    "Invalid Timezone Settings",
                    &format!(
                        "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                    ),
                ),
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::error(
                    "Something went wrong",
                    "An unexpected error occurred, check the server logs for more details.",
                ),
            ),
        };

        (status_code, alert.into_html()).into_response()
    }
}
