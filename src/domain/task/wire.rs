//! Wire types for task endpoints.

use super::Task;
use serde::{Deserialize, Serialize};

/// Request body for `POST /user/tasks` when querying by id.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TasksQuery {
    pub task_ids: Vec<String>,
}

impl TasksQuery {
    pub fn by_id(task_id: &str) -> Self {
        Self {
            task_ids: vec![task_id.to_string()],
        }
    }
}

/// Response envelope for `POST /user/tasks`.
///
/// `tasks` is absent when the query matched nothing — the poller degrades
/// that to a synthetic failed report instead of erroring.
#[derive(Debug, Clone, Deserialize)]
pub struct TasksResponse {
    #[serde(default)]
    pub tasks: Option<Vec<Task>>,
}
