//! Tasks Repository

use futures::TryStreamExt;
use mongodb::{
    Collection,
    bson::{self, Document, doc},
};

use crate::{
    database::{Db, TASKS_COLLECTION},
    domain::tasks::{
        data::TaskInput,
        records::{TaskId, TaskRecord},
    },
};

#[derive(Debug, Clone)]
pub(crate) struct MongoTasksRepository {
    collection: Collection<TaskRecord>,
}

impl MongoTasksRepository {
    #[must_use]
    pub(crate) fn new(db: &Db) -> Self {
        Self {
            collection: db.collection(TASKS_COLLECTION),
        }
    }

    pub(crate) async fn list_tasks(&self) -> Result<Vec<TaskRecord>, mongodb::error::Error> {
        self.collection
            .find(doc! {})
            .sort(doc! { "_id": 1 })
            .await?
            .try_collect()
            .await
    }

    pub(crate) async fn get_task(
        &self,
        task: TaskId,
    ) -> Result<Option<TaskRecord>, mongodb::error::Error> {
        self.collection.find_one(by_id(task)).await
    }

    pub(crate) async fn create_task(
        &self,
        task: TaskInput,
    ) -> Result<TaskRecord, mongodb::error::Error> {
        let record = TaskRecord {
            id: TaskId::new(),
            title: task.title,
            description: task.description,
            status: task.status,
            version: 0,
        };

        self.collection.insert_one(&record).await?;

        Ok(record)
    }

    /// Returns the number of matched documents.
    pub(crate) async fn update_task(
        &self,
        task: TaskId,
        update: Document,
    ) -> Result<u64, mongodb::error::Error> {
        let result = self.collection.update_one(by_id(task), update).await?;

        Ok(result.matched_count)
    }

    /// Returns the number of deleted documents.
    pub(crate) async fn delete_task(&self, task: TaskId) -> Result<u64, mongodb::error::Error> {
        let result = self.collection.delete_one(by_id(task)).await?;

        Ok(result.deleted_count)
    }
}

fn by_id(task: TaskId) -> Document {
    doc! { "_id": task.into_object_id() }
}

/// Update document replacing every client-owned field and bumping the version.
pub(crate) fn replacement(task: &TaskInput) -> Result<Document, bson::ser::Error> {
    Ok(doc! {
        "$set": bson::to_document(task)?,
        "$inc": { "version": 1 },
    })
}
