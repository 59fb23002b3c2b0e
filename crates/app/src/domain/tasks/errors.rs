//! Tasks service errors.

use mongodb::bson;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TasksServiceError {
    #[error("task not found")]
    NotFound,

    #[error("storage error")]
    Database(#[from] mongodb::error::Error),

    #[error("could not encode task document")]
    Encoding(#[from] bson::ser::Error),
}
