//! Products service errors.

use mongodb::bson;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductsServiceError {
    #[error("product not found")]
    NotFound,

    #[error("storage error")]
    Database(#[from] mongodb::error::Error),

    #[error("could not encode product document")]
    Encoding(#[from] bson::ser::Error),
}
