//! Tasks

pub mod data;
pub mod errors;
pub mod records;
mod repository;
pub mod schema;
pub mod service;

pub use errors::TasksServiceError;
pub use service::*;
