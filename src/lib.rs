//! # Eden SDK
//!
//! A unified Rust SDK for the Eden creation-generation API supporting both
//! native and WASM targets.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Domain types, wire types, errors (always available, WASM-safe)
//! 2. **HTTP API** — `EdenHttp` with one method per endpoint
//! 3. **High-Level Client** — `EdenClient` with nested sub-clients and the
//!    create-and-wait task poller
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use eden_sdk::prelude::*;
//!
//! let client = EdenClient::builder()
//!     .base_url("https://api.eden.art")
//!     .build()?;
//!
//! let creation = client.creations().get("62f5...").await?;
//! let outcome = client
//!     .tasks()
//!     .create(&TaskSubmission::new("create", serde_json::json!({
//!         "text_input": "a desert oasis at dusk",
//!     })))
//!     .await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP client — one method per endpoint.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `EdenClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{CreationId, TaskId};

    // Domain types — creation
    pub use crate::domain::creation::{Creation, Reaction};

    // Domain types — collection
    pub use crate::domain::collection::Collection;

    // Domain types — task
    #[cfg(feature = "http")]
    pub use crate::domain::task::poll::{
        NoopObserver, PollConfig, PollProgress, ProgressObserver, TaskBackend, TracingObserver,
    };
    pub use crate::domain::task::{
        CreateOutcome, StatusReport, SubmitReceipt, Task, TaskStatus, TaskSubmission,
    };

    // Errors
    pub use crate::error::{HttpError, SdkError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{CreationsClient, EdenClient, EdenClientBuilder, TasksClient};
}
