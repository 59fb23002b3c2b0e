//! Validation outcome helpers.

use salvo::prelude::StatusError;
use tracing::debug;

use catalogue_app::validation::Validation;

/// Turn a rejected payload into a bad request naming the first violation.
pub(crate) trait ValidationExt<T> {
    fn or_400(self) -> Result<T, StatusError>;
}

impl<T> ValidationExt<T> for Validation<T> {
    fn or_400(self) -> Result<T, StatusError> {
        self.into_result().map_err(|violations| {
            debug!(count = violations.len(), "payload rejected");

            let brief = violations
                .first()
                .map_or_else(|| "Invalid payload".to_string(), ToString::to_string);

            StatusError::bad_request().brief(brief)
        })
    }
}
