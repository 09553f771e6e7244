//! Task domain — asynchronous generation jobs tracked by id and status.

#[cfg(feature = "http")]
pub mod client;
mod convert;
#[cfg(feature = "http")]
pub mod poll;
pub mod wire;

use crate::domain::creation::Creation;
use crate::shared::{CreationId, TaskId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

// ─── TaskStatus ──────────────────────────────────────────────────────────────

/// Generation task status as reported by the backend.
///
/// The client is a passive observer: `pending`, `starting` and `running` keep
/// the poll loop alive, every other value is terminal. Unknown strings
/// round-trip through `Other` so new server vocabulary is still terminal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TaskStatus {
    Pending,
    Starting,
    Running,
    Succeeded,
    Failed,
    Cancelled,
    Other(String),
}

impl TaskStatus {
    pub fn as_str(&self) -> &str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Starting => "starting",
            TaskStatus::Running => "running",
            TaskStatus::Succeeded => "succeeded",
            TaskStatus::Failed => "failed",
            TaskStatus::Cancelled => "cancelled",
            TaskStatus::Other(s) => s,
        }
    }

    /// True for every status outside {pending, starting, running}.
    pub fn is_terminal(&self) -> bool {
        !matches!(
            self,
            TaskStatus::Pending | TaskStatus::Starting | TaskStatus::Running
        )
    }
}

impl From<String> for TaskStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "pending" => TaskStatus::Pending,
            "starting" => TaskStatus::Starting,
            "running" => TaskStatus::Running,
            "succeeded" => TaskStatus::Succeeded,
            "failed" => TaskStatus::Failed,
            "cancelled" => TaskStatus::Cancelled,
            _ => TaskStatus::Other(s),
        }
    }
}

impl From<TaskStatus> for String {
    fn from(s: TaskStatus) -> Self {
        s.as_str().to_string()
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─── Task ────────────────────────────────────────────────────────────────────

/// A server-side generation job.
///
/// The id is stable for the task's lifetime; status moves monotonically
/// toward a terminal value (server-driven, never validated client-side).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "_id")]
    pub id: TaskId,
    pub status: TaskStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<f64>,
    /// Id of the completed creation, once the task has produced one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation: Option<CreationId>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

// ─── TaskSubmission ──────────────────────────────────────────────────────────

/// Request body for `POST /user/create`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSubmission {
    pub generator_name: String,
    pub config: Value,
    pub metadata: Option<Value>,
    pub generator_version: Option<String>,
}

impl TaskSubmission {
    pub fn new(generator_name: impl Into<String>, config: Value) -> Self {
        Self {
            generator_name: generator_name.into(),
            config,
            metadata: None,
            generator_version: None,
        }
    }

    pub fn metadata(mut self, metadata: Value) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn generator_version(mut self, version: impl Into<String>) -> Self {
        self.generator_version = Some(version.into());
        self
    }
}

// ─── SubmitReceipt ───────────────────────────────────────────────────────────

/// Response envelope for `POST /user/create`.
///
/// `error` set means the submission was rejected server-side; the poller
/// returns the receipt as-is without a single status fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitReceipt {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<TaskId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

// ─── StatusReport ────────────────────────────────────────────────────────────

/// One status observation for a task, as the poller sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusReport {
    pub status: TaskStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task: Option<Task>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StatusReport {
    /// Id of the completed creation, if the terminal task references one.
    pub fn creation_id(&self) -> Option<&CreationId> {
        self.task.as_ref().and_then(|t| t.creation.as_ref())
    }
}

// ─── CreateOutcome ───────────────────────────────────────────────────────────

/// Result of a create-and-wait workflow.
#[derive(Debug, Clone, PartialEq)]
pub enum CreateOutcome {
    /// The task finished and produced a creation, fetched for convenience.
    Creation(Creation),
    /// The task reached a terminal status without a creation reference.
    Finished(StatusReport),
    /// The submission itself was rejected (receipt carries `error`).
    Rejected(SubmitReceipt),
}
