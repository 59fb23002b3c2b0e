//! Tasks service.

use async_trait::async_trait;
use mockall::automock;
use tracing::debug;

use crate::{
    database::Db,
    domain::tasks::{
        data::TaskInput,
        errors::TasksServiceError,
        records::{TaskId, TaskRecord},
        repository::{MongoTasksRepository, replacement},
    },
};

#[derive(Debug, Clone)]
pub struct MongoTasksService {
    repository: MongoTasksRepository,
}

impl MongoTasksService {
    #[must_use]
    pub fn new(db: &Db) -> Self {
        Self {
            repository: MongoTasksRepository::new(db),
        }
    }
}

#[async_trait]
impl TasksService for MongoTasksService {
    async fn list_tasks(&self) -> Result<Vec<TaskRecord>, TasksServiceError> {
        Ok(self.repository.list_tasks().await?)
    }

    async fn get_task(&self, task: TaskId) -> Result<TaskRecord, TasksServiceError> {
        self.repository
            .get_task(task)
            .await?
            .ok_or(TasksServiceError::NotFound)
    }

    async fn create_task(&self, task: TaskInput) -> Result<TaskRecord, TasksServiceError> {
        let created = self.repository.create_task(task).await?;

        debug!(task_id = %created.id, "created task");

        Ok(created)
    }

    async fn update_task(&self, task: TaskId, update: TaskInput) -> Result<(), TasksServiceError> {
        let matched = self
            .repository
            .update_task(task, replacement(&update)?)
            .await?;

        if matched == 0 {
            return Err(TasksServiceError::NotFound);
        }

        Ok(())
    }

    async fn delete_task(&self, task: TaskId) -> Result<(), TasksServiceError> {
        let deleted = self.repository.delete_task(task).await?;

        if deleted == 0 {
            return Err(TasksServiceError::NotFound);
        }

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait TasksService: Send + Sync {
    /// Retrieves all tasks.
    async fn list_tasks(&self) -> Result<Vec<TaskRecord>, TasksServiceError>;

    /// Retrieve a single task.
    async fn get_task(&self, task: TaskId) -> Result<TaskRecord, TasksServiceError>;

    /// Stores a new task with a fresh id and version 0.
    async fn create_task(&self, task: TaskInput) -> Result<TaskRecord, TasksServiceError>;

    /// Replaces the fields of an existing task, bumping its version.
    async fn update_task(&self, task: TaskId, update: TaskInput) -> Result<(), TasksServiceError>;

    /// Deletes a task.
    async fn delete_task(&self, task: TaskId) -> Result<(), TasksServiceError>;
}
