//! Conversions from wire types to the poller's status view.

use super::wire::TasksResponse;
use super::{StatusReport, TaskStatus};

impl StatusReport {
    /// Build a status report from a `POST /user/tasks` response.
    ///
    /// A response with no tasks list (or an empty one) degrades to a
    /// synthetic failed report rather than an error; the task may simply not
    /// be visible yet, and the poller contract is to report, not to raise.
    pub fn from_tasks_response(task_id: &str, resp: TasksResponse) -> Self {
        let task = resp.tasks.and_then(|mut tasks| {
            if tasks.is_empty() {
                None
            } else {
                Some(tasks.remove(0))
            }
        });

        match task {
            Some(task) => StatusReport {
                status: task.status.clone(),
                task: Some(task),
                error: None,
            },
            None => StatusReport {
                status: TaskStatus::Failed,
                task: None,
                error: Some(format!("Task {} not found", task_id)),
            },
        }
    }
}
