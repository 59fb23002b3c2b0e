//! Delete Task Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    extensions::*,
    messages::MessageResponse,
    state::State,
    tasks::errors::{TASK_NOT_FOUND, into_status_error},
};

/// Delete Task Handler
#[endpoint(
    tags("tasks"),
    summary = "Delete Task",
    responses(
        (status_code = StatusCode::OK, description = "Task deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Task not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<MessageResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let id = id.into_id_or_404(TASK_NOT_FOUND)?;

    state
        .app
        .tasks
        .delete_task(id)
        .await
        .map_err(into_status_error)?;

    Ok(Json(MessageResponse::new("Task deleted.")))
}
