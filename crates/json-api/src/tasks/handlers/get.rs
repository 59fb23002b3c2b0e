//! Get Task Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use catalogue_app::domain::tasks::records::TaskRecord;

use crate::{
    extensions::*,
    state::State,
    tasks::errors::{TASK_NOT_FOUND, into_status_error},
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct TaskResponse {
    /// The task's ObjectId, as hex
    pub id: String,

    pub title: String,

    pub description: String,

    /// Either "pending" or "done"
    pub status: String,

    /// Incremented on every update
    pub version: i64,
}

impl From<TaskRecord> for TaskResponse {
    fn from(task: TaskRecord) -> Self {
        TaskResponse {
            id: task.id.to_hex(),
            title: task.title,
            description: task.description,
            status: task.status.as_str().to_string(),
            version: task.version,
        }
    }
}

/// Get Task Handler
///
/// Returns a task.
#[endpoint(
    tags("tasks"),
    summary = "Get Task",
    responses(
        (status_code = StatusCode::OK, description = "Task found"),
        (status_code = StatusCode::NOT_FOUND, description = "Task not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<TaskResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let id = id.into_id_or_404(TASK_NOT_FOUND)?;

    let task = state
        .app
        .tasks
        .get_task(id)
        .await
        .map_err(into_status_error)?;

    Ok(Json(task.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use catalogue_app::domain::tasks::{MockTasksService, TasksServiceError, records::TaskId};

    use crate::test_helpers::{make_task, store_unavailable, tasks_service};

    use super::*;

    fn make_service(repo: MockTasksService) -> Service {
        tasks_service(repo, Router::with_path("tasks/{id}").get(handler))
    }

    #[tokio::test]
    async fn test_get_returns_task() -> TestResult {
        let id = TaskId::new();
        let task = make_task(id);

        let mut repo = MockTasksService::new();

        repo.expect_get_task()
            .once()
            .withf(move |t| *t == id)
            .return_once(move |_| Ok(task));

        let mut res = TestClient::get(format!("http://example.com/tasks/{id}"))
            .send(&make_service(repo))
            .await;

        let body: TaskResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.id, id.to_hex());
        assert_eq!(body.status, "pending");
        assert_eq!(body.version, 0);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_task_returns_404() -> TestResult {
        let id = TaskId::new();

        let mut repo = MockTasksService::new();

        repo.expect_get_task()
            .once()
            .withf(move |t| *t == id)
            .return_once(|_| Err(TasksServiceError::NotFound));

        let mut res = TestClient::get(format!("http://example.com/tasks/{id}"))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert!(res.take_string().await?.contains(TASK_NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_malformed_id_returns_404() -> TestResult {
        let mut repo = MockTasksService::new();

        repo.expect_get_task().never();

        let res = TestClient::get("http://example.com/tasks/123")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_store_failure_returns_500() -> TestResult {
        let id = TaskId::new();

        let mut repo = MockTasksService::new();

        repo.expect_get_task()
            .once()
            .return_once(|_| Err(TasksServiceError::Database(store_unavailable())));

        let mut res = TestClient::get(format!("http://example.com/tasks/{id}"))
            .send(&make_service(repo))
            .await;

        let body = res.take_string().await?;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert!(
            !body.contains("store unavailable"),
            "driver details must not leak: {body}"
        );

        Ok(())
    }
}
