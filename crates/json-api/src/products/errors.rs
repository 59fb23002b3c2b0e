//! Product Errors

use salvo::http::StatusError;
use tracing::error;

use catalogue_app::domain::products::ProductsServiceError;

use crate::extensions::GENERIC_ERROR_BRIEF;

pub(crate) const PRODUCT_NOT_FOUND: &str = "Product not found.";

pub(crate) fn into_status_error(error: ProductsServiceError) -> StatusError {
    match error {
        ProductsServiceError::NotFound => StatusError::not_found().brief(PRODUCT_NOT_FOUND),
        ProductsServiceError::Database(source) => {
            error!("product store operation failed: {source}");

            StatusError::internal_server_error().brief(GENERIC_ERROR_BRIEF)
        }
        ProductsServiceError::Encoding(source) => {
            error!("failed to encode product document: {source}");

            StatusError::internal_server_error().brief(GENERIC_ERROR_BRIEF)
        }
    }
}
