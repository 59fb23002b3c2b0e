//! Catalogue Domain Concerns

pub mod products;
pub mod tasks;
