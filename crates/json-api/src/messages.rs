//! Confirmation bodies returned by update and delete endpoints.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

/// Confirmation Message Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct MessageResponse {
    /// Human readable confirmation
    pub message: String,
}

impl MessageResponse {
    pub(crate) fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}
