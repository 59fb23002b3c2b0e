//! Shared application domain, validation and persistence modules.

pub mod context;
pub mod database;
pub mod domain;
pub mod ids;
pub mod validation;

#[cfg(test)]
mod test;
