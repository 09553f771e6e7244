//! Tasks sub-client — submit, query, and the create-and-wait workflow.

use crate::client::{require_id, EdenClient};
use crate::domain::creation::Creation;
use crate::domain::task::poll::{
    self, PollConfig, ProgressObserver, TaskBackend, TracingObserver,
};
use crate::domain::task::wire::TasksQuery;
use crate::domain::task::{CreateOutcome, StatusReport, SubmitReceipt, Task, TaskSubmission};
use crate::error::SdkError;

/// Sub-client for generation task operations.
pub struct Tasks<'a> {
    pub(crate) client: &'a EdenClient,
}

impl<'a> Tasks<'a> {
    /// Submit a generation task without waiting for it.
    pub async fn start(&self, request: &TaskSubmission) -> Result<SubmitReceipt, SdkError> {
        Ok(self.client.http.start_task(request).await?)
    }

    /// List tasks matching a filter. Pass `serde_json::json!({})` for all.
    pub async fn list(&self, filter: &impl serde::Serialize) -> Result<Vec<Task>, SdkError> {
        let resp = self.client.http.query_tasks(filter).await?;
        Ok(resp.tasks.unwrap_or_default())
    }

    /// Current status of a task.
    ///
    /// A task the backend does not know about comes back as a synthetic
    /// failed report, not an error.
    pub async fn status(&self, task_id: &str) -> Result<StatusReport, SdkError> {
        require_id("task id", task_id)?;
        let resp = self.client.http.query_tasks(&TasksQuery::by_id(task_id)).await?;
        Ok(StatusReport::from_tasks_response(task_id, resp))
    }

    /// Submit a task and poll until it finishes, with default polling
    /// (2000 ms interval, unbounded) and tracing-backed progress logging.
    pub async fn create(&self, request: &TaskSubmission) -> Result<CreateOutcome, SdkError> {
        self.create_with(request, &PollConfig::default(), &mut TracingObserver)
            .await
    }

    /// Submit a task and poll until it finishes, with explicit polling
    /// configuration and progress observer.
    pub async fn create_with(
        &self,
        request: &TaskSubmission,
        config: &PollConfig,
        observer: &mut dyn ProgressObserver,
    ) -> Result<CreateOutcome, SdkError> {
        poll::create_and_wait(self, request, config, observer).await
    }
}

impl TaskBackend for Tasks<'_> {
    async fn submit(&self, request: &TaskSubmission) -> Result<SubmitReceipt, SdkError> {
        self.start(request).await
    }

    async fn status(&self, task_id: &str) -> Result<StatusReport, SdkError> {
        Tasks::status(self, task_id).await
    }

    async fn creation(&self, creation_id: &str) -> Result<Creation, SdkError> {
        self.client.creations().get(creation_id).await
    }
}
