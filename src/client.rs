//! High-level client — `EdenClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and the accessor methods.

use crate::domain::creation::client::Creations;
use crate::domain::task::client::Tasks;
use crate::error::SdkError;
use crate::http::EdenHttp;

// Re-export sub-client types for convenience.
pub use crate::domain::creation::client::Creations as CreationsClient;
pub use crate::domain::task::client::Tasks as TasksClient;

/// The primary entry point for the Eden SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.creations()`, `client.tasks()`.
///
/// The client carries no shared mutable state — every call is a fresh round
/// trip, and concurrent operations are fully independent.
pub struct EdenClient {
    pub(crate) http: EdenHttp,
}

impl EdenClient {
    pub fn builder() -> EdenClientBuilder {
        EdenClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn creations(&self) -> Creations<'_> {
        Creations { client: self }
    }

    pub fn tasks(&self) -> Tasks<'_> {
        Tasks { client: self }
    }
}

impl Clone for EdenClient {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
        }
    }
}

/// Presence check for required identifiers, before any network I/O.
pub(crate) fn require_id(what: &str, id: &str) -> Result<(), SdkError> {
    if id.trim().is_empty() {
        return Err(SdkError::InvalidArgument(format!("{} is required", what)));
    }
    Ok(())
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct EdenClientBuilder {
    base_url: String,
}

impl Default for EdenClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
        }
    }
}

impl EdenClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn build(self) -> Result<EdenClient, SdkError> {
        Ok(EdenClient {
            http: EdenHttp::new(&self.base_url),
        })
    }
}
