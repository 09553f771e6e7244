//! Create-and-wait polling loop.
//!
//! The loop runs against a [`TaskBackend`] — submit, status fetch, creation
//! fetch — so its collaborators are always explicit. Progress display is a
//! separate [`ProgressObserver`] the loop invokes once per re-fetch.

use super::{CreateOutcome, StatusReport, TaskStatus, TaskSubmission};
use crate::domain::creation::Creation;
use crate::error::SdkError;
use crate::shared::TaskId;

use futures_timer::Delay;
use std::time::Duration;

/// Spinner frames cycled through the progress observer, one per re-fetch.
const PROGRESS_FRAMES: [char; 4] = ['-', '\\', '|', '/'];

// ─── TaskBackend ─────────────────────────────────────────────────────────────

/// The three calls the create-and-wait loop needs.
///
/// Implemented by the `Tasks` sub-client over HTTP; tests drive the loop with
/// scripted in-memory implementations.
pub trait TaskBackend {
    fn submit(
        &self,
        request: &TaskSubmission,
    ) -> impl std::future::Future<Output = Result<super::SubmitReceipt, SdkError>>;

    fn status(
        &self,
        task_id: &str,
    ) -> impl std::future::Future<Output = Result<StatusReport, SdkError>>;

    fn creation(
        &self,
        creation_id: &str,
    ) -> impl std::future::Future<Output = Result<Creation, SdkError>>;
}

// ─── PollConfig ──────────────────────────────────────────────────────────────

/// Polling behavior for the create-and-wait loop.
///
/// The defaults match the backend's documented client behavior: a 2000 ms
/// interval and no upper bound — the loop runs until the server reports a
/// terminal status. Budgets are opt-in.
#[derive(Debug, Clone)]
pub struct PollConfig {
    /// Sleep between status fetches.
    pub interval: Duration,
    /// Maximum number of status fetches before giving up.
    pub max_checks: Option<u32>,
    /// Wall-clock budget for the whole loop.
    pub timeout: Option<Duration>,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(2000),
            max_checks: None,
            timeout: None,
        }
    }
}

impl PollConfig {
    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn max_checks(mut self, max_checks: u32) -> Self {
        self.max_checks = Some(max_checks);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

// ─── ProgressObserver ────────────────────────────────────────────────────────

/// One poll iteration, as reported to observers.
#[derive(Debug, Clone, PartialEq)]
pub struct PollProgress<'a> {
    /// Cycling spinner frame.
    pub frame: char,
    pub task_id: &'a str,
    pub status: &'a TaskStatus,
    pub progress: Option<f64>,
}

/// Receives one callback per status re-fetch. Purely observational — the
/// loop's return value never depends on it.
pub trait ProgressObserver {
    fn on_poll(&mut self, progress: &PollProgress<'_>);
}

/// Observer that logs each iteration through `tracing`.
#[derive(Debug, Default)]
pub struct TracingObserver;

impl ProgressObserver for TracingObserver {
    fn on_poll(&mut self, p: &PollProgress<'_>) {
        tracing::info!(
            task_id = p.task_id,
            status = %p.status,
            progress = ?p.progress,
            "{} polling task",
            p.frame
        );
    }
}

/// Observer that discards all progress callbacks.
#[derive(Debug, Default)]
pub struct NoopObserver;

impl ProgressObserver for NoopObserver {
    fn on_poll(&mut self, _: &PollProgress<'_>) {}
}

// ─── Loop ────────────────────────────────────────────────────────────────────

/// Submit a generation task and wait for it to reach a terminal status.
///
/// Short-circuits on a rejected submission (receipt carries `error`) without
/// issuing a single status fetch. Otherwise polls per `config`, invoking
/// `observer` after each re-fetch, and resolves a referenced creation once
/// the status leaves {pending, starting, running}.
pub async fn create_and_wait<B: TaskBackend>(
    backend: &B,
    request: &TaskSubmission,
    config: &PollConfig,
    observer: &mut dyn ProgressObserver,
) -> Result<CreateOutcome, SdkError> {
    let receipt = backend.submit(request).await?;
    if receipt.error.is_some() {
        return Ok(CreateOutcome::Rejected(receipt));
    }
    let task_id = receipt
        .task_id
        .clone()
        .ok_or_else(|| SdkError::InvalidArgument("task submission returned no task id".into()))?;

    tracing::info!(task_id = %task_id, "starting task");

    let report = poll_until_terminal(backend, &task_id, config, observer).await?;

    if let Some(creation_id) = report.creation_id() {
        let creation = backend.creation(creation_id.as_str()).await?;
        return Ok(CreateOutcome::Creation(creation));
    }
    Ok(CreateOutcome::Finished(report))
}

/// Fetch task status until it is terminal.
///
/// The first fetch happens immediately; every subsequent one after sleeping
/// `config.interval`. Exactly one observer callback per re-fetch.
pub async fn poll_until_terminal<B: TaskBackend>(
    backend: &B,
    task_id: &TaskId,
    config: &PollConfig,
    observer: &mut dyn ProgressObserver,
) -> Result<StatusReport, SdkError> {
    // Instant is unavailable on wasm32; only touch the clock when a wall
    // budget is actually configured.
    let deadline = config.timeout.map(|t| (std::time::Instant::now(), t));
    let mut report = backend.status(task_id.as_str()).await?;
    let mut checks: u32 = 1;
    let mut frame_idx: usize = 0;

    while !report.status.is_terminal() {
        let out_of_checks = config.max_checks.is_some_and(|max| checks >= max);
        let out_of_time = deadline.is_some_and(|(started, t)| started.elapsed() >= t);
        if out_of_checks || out_of_time {
            return Err(SdkError::PollExhausted {
                task_id: task_id.to_string(),
                checks,
            });
        }

        Delay::new(config.interval).await;
        report = backend.status(task_id.as_str()).await?;
        checks += 1;

        observer.on_poll(&PollProgress {
            frame: PROGRESS_FRAMES[frame_idx % PROGRESS_FRAMES.len()],
            task_id: task_id.as_str(),
            status: &report.status,
            progress: report.task.as_ref().and_then(|t| t.progress),
        });
        frame_idx += 1;
    }

    Ok(report)
}
