//! End-to-end tests for the create-and-wait polling loop.
//!
//! The loop runs against a scripted in-memory `TaskBackend`, so every test
//! can assert exact call counts: one submit, one status fetch per iteration,
//! one creation fetch on resolution.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use eden_sdk::prelude::*;

// ─── Scripted backend ────────────────────────────────────────────────────────

struct ScriptedBackend {
    receipt: SubmitReceipt,
    statuses: Mutex<VecDeque<StatusReport>>,
    submit_calls: AtomicU32,
    status_calls: AtomicU32,
    creation_calls: Mutex<Vec<String>>,
}

impl ScriptedBackend {
    fn new(receipt: SubmitReceipt, statuses: Vec<StatusReport>) -> Self {
        Self {
            receipt,
            statuses: Mutex::new(statuses.into()),
            submit_calls: AtomicU32::new(0),
            status_calls: AtomicU32::new(0),
            creation_calls: Mutex::new(Vec::new()),
        }
    }

    fn status_count(&self) -> u32 {
        self.status_calls.load(Ordering::SeqCst)
    }
}

impl TaskBackend for ScriptedBackend {
    async fn submit(&self, _request: &TaskSubmission) -> Result<SubmitReceipt, SdkError> {
        self.submit_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.receipt.clone())
    }

    async fn status(&self, _task_id: &str) -> Result<StatusReport, SdkError> {
        self.status_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .statuses
            .lock()
            .unwrap()
            .pop_front()
            .expect("status script exhausted"))
    }

    async fn creation(&self, creation_id: &str) -> Result<Creation, SdkError> {
        self.creation_calls
            .lock()
            .unwrap()
            .push(creation_id.to_string());
        Ok(sample_creation(creation_id))
    }
}

// ─── Fixtures ────────────────────────────────────────────────────────────────

fn sample_creation(id: &str) -> Creation {
    Creation {
        id: CreationId::from(id),
        user: Some("user_1".to_string()),
        task: Some(TaskId::from("t_1")),
        name: Some("desert oasis".to_string()),
        uri: Some(format!("https://cdn.eden.art/{}.png", id)),
        created_at: None,
        updated_at: None,
        extra: HashMap::new(),
    }
}

fn report(status: TaskStatus, progress: Option<f64>, creation: Option<&str>) -> StatusReport {
    StatusReport {
        status: status.clone(),
        task: Some(Task {
            id: TaskId::from("t_1"),
            status,
            progress,
            creation: creation.map(CreationId::from),
            extra: HashMap::new(),
        }),
        error: None,
    }
}

fn accepted_receipt() -> SubmitReceipt {
    SubmitReceipt {
        task_id: Some(TaskId::from("t_1")),
        error: None,
        extra: HashMap::new(),
    }
}

fn submission() -> TaskSubmission {
    TaskSubmission::new("create", serde_json::json!({"text_input": "a desert oasis"}))
}

fn fast_poll() -> PollConfig {
    PollConfig::default().interval(Duration::from_millis(1))
}

struct RecordingObserver {
    events: Vec<(char, String, Option<f64>)>,
}

impl ProgressObserver for RecordingObserver {
    fn on_poll(&mut self, p: &PollProgress<'_>) {
        self.events
            .push((p.frame, p.status.to_string(), p.progress));
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_resolves_creation_after_three_status_fetches() {
    let backend = ScriptedBackend::new(
        accepted_receipt(),
        vec![
            report(TaskStatus::Pending, None, None),
            report(TaskStatus::Running, Some(0.5), None),
            report(TaskStatus::Succeeded, Some(1.0), Some("abc123")),
        ],
    );
    let mut observer = RecordingObserver { events: Vec::new() };

    let outcome = eden_sdk::domain::task::poll::create_and_wait(
        &backend,
        &submission(),
        &fast_poll(),
        &mut observer,
    )
    .await
    .unwrap();

    match outcome {
        CreateOutcome::Creation(creation) => assert_eq!(creation.id.as_str(), "abc123"),
        other => panic!("expected resolved creation, got: {other:?}"),
    }
    assert_eq!(backend.status_count(), 3);
    assert_eq!(*backend.creation_calls.lock().unwrap(), vec!["abc123"]);

    // One callback per re-fetch; the initial fetch is not observed.
    assert_eq!(
        observer.events,
        vec![
            ('-', "running".to_string(), Some(0.5)),
            ('\\', "succeeded".to_string(), Some(1.0)),
        ]
    );
}

#[tokio::test]
async fn rejected_submission_short_circuits_without_status_fetch() {
    let backend = ScriptedBackend::new(
        SubmitReceipt {
            task_id: None,
            error: Some("out of credits".to_string()),
            extra: HashMap::new(),
        },
        vec![],
    );

    let outcome = eden_sdk::domain::task::poll::create_and_wait(
        &backend,
        &submission(),
        &fast_poll(),
        &mut NoopObserver,
    )
    .await
    .unwrap();

    match outcome {
        CreateOutcome::Rejected(receipt) => {
            assert_eq!(receipt.error.as_deref(), Some("out of credits"));
        }
        other => panic!("expected rejection, got: {other:?}"),
    }
    assert_eq!(backend.status_count(), 0);
    assert!(backend.creation_calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn unknown_task_degrades_to_failed_report() {
    let backend = ScriptedBackend::new(
        accepted_receipt(),
        vec![StatusReport {
            status: TaskStatus::Failed,
            task: None,
            error: Some("Task t_1 not found".to_string()),
        }],
    );

    let outcome = eden_sdk::domain::task::poll::create_and_wait(
        &backend,
        &submission(),
        &fast_poll(),
        &mut NoopObserver,
    )
    .await
    .unwrap();

    match outcome {
        CreateOutcome::Finished(report) => {
            assert_eq!(report.status, TaskStatus::Failed);
            assert_eq!(report.error.as_deref(), Some("Task t_1 not found"));
        }
        other => panic!("expected finished report, got: {other:?}"),
    }
    assert_eq!(backend.status_count(), 1);
}

#[tokio::test]
async fn terminal_status_without_creation_returns_raw_report() {
    let backend = ScriptedBackend::new(
        accepted_receipt(),
        vec![
            report(TaskStatus::Starting, None, None),
            report(TaskStatus::Cancelled, None, None),
        ],
    );

    let outcome = eden_sdk::domain::task::poll::create_and_wait(
        &backend,
        &submission(),
        &fast_poll(),
        &mut NoopObserver,
    )
    .await
    .unwrap();

    match outcome {
        CreateOutcome::Finished(report) => assert_eq!(report.status, TaskStatus::Cancelled),
        other => panic!("expected finished report, got: {other:?}"),
    }
    assert_eq!(backend.status_count(), 2);
    assert!(backend.creation_calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn unknown_status_vocabulary_is_treated_as_terminal() {
    let backend = ScriptedBackend::new(
        accepted_receipt(),
        vec![report(TaskStatus::Other("paused".into()), None, None)],
    );

    let outcome = eden_sdk::domain::task::poll::create_and_wait(
        &backend,
        &submission(),
        &fast_poll(),
        &mut NoopObserver,
    )
    .await
    .unwrap();

    assert!(matches!(outcome, CreateOutcome::Finished(_)));
    assert_eq!(backend.status_count(), 1);
}

#[tokio::test]
async fn max_checks_budget_stops_a_stuck_task() {
    let backend = ScriptedBackend::new(
        accepted_receipt(),
        vec![
            report(TaskStatus::Pending, None, None),
            report(TaskStatus::Pending, None, None),
            report(TaskStatus::Pending, None, None),
        ],
    );

    let result = eden_sdk::domain::task::poll::create_and_wait(
        &backend,
        &submission(),
        &fast_poll().max_checks(3),
        &mut NoopObserver,
    )
    .await;

    match result {
        Err(SdkError::PollExhausted { task_id, checks }) => {
            assert_eq!(task_id, "t_1");
            assert_eq!(checks, 3);
        }
        other => panic!("expected poll exhaustion, got: {other:?}"),
    }
    assert_eq!(backend.status_count(), 3);
}

#[tokio::test]
async fn timeout_budget_stops_a_stuck_task() {
    let pending: Vec<StatusReport> = (0..50)
        .map(|_| report(TaskStatus::Pending, None, None))
        .collect();
    let backend = ScriptedBackend::new(accepted_receipt(), pending);

    let result = eden_sdk::domain::task::poll::create_and_wait(
        &backend,
        &submission(),
        &fast_poll()
            .interval(Duration::from_millis(5))
            .timeout(Duration::from_millis(30)),
        &mut NoopObserver,
    )
    .await;

    match result {
        Err(SdkError::PollExhausted { task_id, checks }) => {
            assert_eq!(task_id, "t_1");
            assert!(checks >= 1);
        }
        other => panic!("expected poll exhaustion, got: {other:?}"),
    }
    // The wall budget cut the loop short well before the script ran out.
    let fetched = backend.status_count();
    assert!(fetched >= 1 && fetched < 50, "status fetches: {fetched}");
    assert!(backend.creation_calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn receipt_without_task_id_is_an_invalid_argument() {
    let backend = ScriptedBackend::new(
        SubmitReceipt {
            task_id: None,
            error: None,
            extra: HashMap::new(),
        },
        vec![],
    );

    let result = eden_sdk::domain::task::poll::create_and_wait(
        &backend,
        &submission(),
        &fast_poll(),
        &mut NoopObserver,
    )
    .await;

    assert!(matches!(result, Err(SdkError::InvalidArgument(_))));
    assert_eq!(backend.status_count(), 0);
}
