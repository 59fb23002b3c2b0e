//! Create Task Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::ToSchema,
    prelude::*,
};
use serde::{Deserialize, Serialize};

use catalogue_app::{
    domain::tasks::{data::TaskInput, schema::TASK_RULES},
    validation::validate,
};

use crate::{
    extensions::*,
    state::State,
    tasks::{errors::into_status_error, get::TaskResponse},
};

/// Task fields accepted on create and update.
///
/// `titulo`, `descricao`, `pendente` and `finalizada` are accepted in place of
/// the English names and values.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct TaskRequest {
    pub title: String,

    pub description: String,

    /// "pending" or "done", defaults to "pending"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Create Task Handler
///
/// Accepts `title`, `description` and an optional `status` as JSON or form
/// fields.
#[endpoint(
    tags("tasks"),
    summary = "Create Task",
    request_body(
        content = TaskRequest,
        content_type = "application/json",
        description = "The new task; form fields are accepted too",
    ),
    responses(
        (status_code = StatusCode::CREATED, description = "Task created", body = TaskResponse),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let payload = read_payload(req, None).await?;
    let task = validate::<TaskInput>(TASK_RULES, &payload.fields).or_400()?;

    let task = state
        .app
        .tasks
        .create_task(task)
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/tasks/{}", task.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    tracing::info!(task_id = %task.id, "created task");

    res.render(Json(TaskResponse::from(task)));

    Ok(())
}
