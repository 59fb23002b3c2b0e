//! Path identifier parsing helpers.

use salvo::{oapi::extract::PathParam, prelude::StatusError};
use tracing::debug;

use catalogue_app::ids::TypedId;

pub(crate) trait PathIdExt {
    /// Parse an ObjectId path segment. Malformed ids cannot match a
    /// document, so they answer with the resource's not-found brief.
    fn into_id_or_404<T>(self, not_found: &str) -> Result<TypedId<T>, StatusError>;
}

impl PathIdExt for PathParam<String> {
    fn into_id_or_404<T>(self, not_found: &str) -> Result<TypedId<T>, StatusError> {
        let raw = self.into_inner();

        raw.parse::<TypedId<T>>().map_err(|source| {
            debug!(id = %raw, "malformed identifier: {source}");

            StatusError::not_found().brief(not_found)
        })
    }
}
