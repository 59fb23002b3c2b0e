//! Task Errors

use salvo::http::StatusError;
use tracing::error;

use catalogue_app::domain::tasks::TasksServiceError;

use crate::extensions::GENERIC_ERROR_BRIEF;

pub(crate) const TASK_NOT_FOUND: &str = "Task not found.";

pub(crate) fn into_status_error(error: TasksServiceError) -> StatusError {
    match error {
        TasksServiceError::NotFound => StatusError::not_found().brief(TASK_NOT_FOUND),
        TasksServiceError::Database(source) => {
            error!("task store operation failed: {source}");

            StatusError::internal_server_error().brief(GENERIC_ERROR_BRIEF)
        }
        TasksServiceError::Encoding(source) => {
            error!("failed to encode task document: {source}");

            StatusError::internal_server_error().brief(GENERIC_ERROR_BRIEF)
        }
    }
}
