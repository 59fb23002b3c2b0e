//! Task Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    state::State,
    tasks::{errors::into_status_error, get::TaskResponse},
};

/// Task Index Handler
///
/// Returns every task in insertion order.
#[endpoint(tags("tasks"), summary = "List Tasks")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<TaskResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let tasks = state
        .app
        .tasks
        .list_tasks()
        .await
        .map_err(into_status_error)?;

    Ok(Json(tasks.into_iter().map(Into::into).collect()))
}
