//! Depot helper extensions.

use std::any::{Any, type_name};

use salvo::prelude::{Depot, StatusError};
use tracing::error;

use crate::extensions::GENERIC_ERROR_BRIEF;

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    /// Fetch an injected value. A missing value is a wiring bug, not a
    /// client error.
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>().map_err(|_missing| {
            error!(value_type = type_name::<T>(), "value missing from depot");

            StatusError::internal_server_error().brief(GENERIC_ERROR_BRIEF)
        })
    }
}
