//! Update Task Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use catalogue_app::{
    domain::tasks::{data::TaskInput, schema::TASK_RULES},
    validation::validate,
};

use crate::{
    extensions::*,
    messages::MessageResponse,
    state::State,
    tasks::{
        create::TaskRequest,
        errors::{TASK_NOT_FOUND, into_status_error},
    },
};

/// Task Update Handler
///
/// Replaces the task's fields and bumps its version.
#[endpoint(
    tags("tasks"),
    summary = "Update Task",
    request_body(
        content = TaskRequest,
        content_type = "application/json",
        description = "The replacement fields; form fields are accepted too",
    ),
    responses(
        (status_code = StatusCode::OK, description = "Task updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Task not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "tasks.update",
    skip(id, req, depot),
    fields(task_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<MessageResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let payload = read_payload(req, None).await?;
    let update = validate::<TaskInput>(TASK_RULES, &payload.fields).or_400()?;
    let id = id.into_id_or_404(TASK_NOT_FOUND)?;

    tracing::Span::current().record("task_id", tracing::field::display(id));

    state
        .app
        .tasks
        .update_task(id, update)
        .await
        .map_err(into_status_error)?;

    tracing::info!(task_id = %id, "updated task");

    Ok(Json(MessageResponse::new("Task updated.")))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use catalogue_app::domain::tasks::{
        MockTasksService, TasksServiceError,
        records::{TaskId, TaskStatus},
    };

    use crate::test_helpers::tasks_service;

    use super::*;

    fn make_service(repo: MockTasksService) -> Service {
        tasks_service(repo, Router::with_path("tasks/{id}").put(handler))
    }

    #[tokio::test]
    async fn test_update_task_success() -> TestResult {
        let id = TaskId::new();

        let mut repo = MockTasksService::new();

        repo.expect_update_task()
            .once()
            .withf(move |t, update| {
                *t == id
                    && *update
                        == TaskInput {
                            title: "Study".to_string(),
                            description: "Read the docs".to_string(),
                            status: TaskStatus::Done,
                        }
            })
            .return_once(|_, _| Ok(()));

        let mut res = TestClient::put(format!("http://example.com/tasks/{id}"))
            .json(&json!({ "title": "Study", "description": "Read the docs", "status": "finalizada" }))
            .send(&make_service(repo))
            .await;

        let body: MessageResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.message, "Task updated.");

        Ok(())
    }

    #[tokio::test]
    async fn test_update_missing_task_returns_404() -> TestResult {
        let id = TaskId::new();

        let mut repo = MockTasksService::new();

        repo.expect_update_task()
            .once()
            .return_once(|_, _| Err(TasksServiceError::NotFound));

        let res = TestClient::put(format!("http://example.com/tasks/{id}"))
            .json(&json!({ "title": "Study", "description": "Read the docs" }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_malformed_id_returns_404() -> TestResult {
        let mut repo = MockTasksService::new();

        repo.expect_update_task().never();

        let res = TestClient::put("http://example.com/tasks/not-an-id")
            .json(&json!({ "title": "Study", "description": "Read the docs" }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_invalid_payload_returns_400() -> TestResult {
        let id = TaskId::new();

        let mut repo = MockTasksService::new();

        repo.expect_update_task().never();

        let mut res = TestClient::put(format!("http://example.com/tasks/{id}"))
            .json(&json!({ "title": "Study" }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert!(
            res.take_string()
                .await?
                .contains("Field description is required")
        );

        Ok(())
    }
}
