//! Result helper extensions for HTTP handlers.

use std::fmt::Display;

use salvo::prelude::StatusError;
use tracing::{debug, error};

/// Generic brief for failures whose details stay server-side.
pub(crate) const GENERIC_ERROR_BRIEF: &str = "An error occurred.";

/// Map any error to an HTTP error response.
pub(crate) trait ResultExt<T> {
    /// Log the error and respond with a generic internal server error.
    fn or_500(self, context: &str) -> Result<T, StatusError>;

    /// Respond with a bad request carrying `brief`.
    fn or_400(self, brief: &str) -> Result<T, StatusError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Display,
{
    fn or_500(self, context: &str) -> Result<T, StatusError> {
        self.map_err(|error| {
            error!("{context}: {error}");

            StatusError::internal_server_error().brief(GENERIC_ERROR_BRIEF)
        })
    }

    fn or_400(self, brief: &str) -> Result<T, StatusError> {
        self.map_err(|error| {
            debug!("{brief}: {error}");

            StatusError::bad_request().brief(brief)
        })
    }
}
