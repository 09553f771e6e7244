//! Low-level HTTP client — `EdenHttp`.
//!
//! One method per API endpoint. Returns wire types (conversion to domain
//! types happens at the sub-client boundary). Every call is a single fresh
//! round trip: no caching, no retries — transport and server errors
//! propagate to the caller unmodified.

use crate::domain::creation::wire::{
    CollectionsResponse, CreationResponse, CreationsResponse, ReactRequest, ReactionsRequest,
    ReactionsResponse,
};
use crate::domain::creation::Creation;
use crate::domain::task::wire::TasksResponse;
use crate::domain::task::{SubmitReceipt, TaskSubmission};
use crate::error::HttpError;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Low-level HTTP client for the Eden REST API.
pub struct EdenHttp {
    base_url: String,
    client: Client,
}

impl EdenHttp {
    pub fn new(base_url: &str) -> Self {
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder
                .timeout(Duration::from_secs(30))
                .pool_max_idle_per_host(10);
        }

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build().expect("Failed to build HTTP client"),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Creations ────────────────────────────────────────────────────────

    pub async fn get_creations(
        &self,
        filter: &impl Serialize,
    ) -> Result<CreationsResponse, HttpError> {
        let url = format!("{}/creations", self.base_url);
        self.post(&url, filter).await
    }

    pub async fn get_creation(&self, creation_id: &str) -> Result<CreationResponse, HttpError> {
        let url = format!(
            "{}/creation/{}",
            self.base_url,
            urlencoding::encode(creation_id)
        );
        self.get(&url).await
    }

    pub async fn react(
        &self,
        creation_id: &str,
        body: &ReactRequest,
    ) -> Result<serde_json::Value, HttpError> {
        let url = format!(
            "{}/creation/{}/react",
            self.base_url,
            urlencoding::encode(creation_id)
        );
        self.post(&url, body).await
    }

    pub async fn get_recreations(&self, creation_id: &str) -> Result<Vec<Creation>, HttpError> {
        let url = format!(
            "{}/creation/{}/recreations",
            self.base_url,
            urlencoding::encode(creation_id)
        );
        self.get(&url).await
    }

    pub async fn get_creation_collections(
        &self,
        creation_id: &str,
    ) -> Result<CollectionsResponse, HttpError> {
        let url = format!(
            "{}/creation/{}/collections",
            self.base_url,
            urlencoding::encode(creation_id)
        );
        self.get(&url).await
    }

    pub async fn get_creation_reactions(
        &self,
        creation_id: &str,
        filter: &ReactionsRequest,
    ) -> Result<ReactionsResponse, HttpError> {
        let url = format!(
            "{}/creation/{}/reactions",
            self.base_url,
            urlencoding::encode(creation_id)
        );
        self.post(&url, filter).await
    }

    // ── Tasks ────────────────────────────────────────────────────────────

    pub async fn start_task(&self, request: &TaskSubmission) -> Result<SubmitReceipt, HttpError> {
        let url = format!("{}/user/create", self.base_url);
        self.post(&url, request).await
    }

    pub async fn query_tasks(&self, filter: &impl Serialize) -> Result<TasksResponse, HttpError> {
        let url = format!("{}/user/tasks", self.base_url);
        self.post(&url, filter).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        self.do_request(reqwest::Method::GET, url, None::<&()>).await
    }

    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, HttpError> {
        self.do_request(reqwest::Method::POST, url, Some(body)).await
    }

    async fn do_request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: reqwest::Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<T, HttpError> {
        tracing::debug!(%method, url, "sending request");

        let mut req = self.client.request(method, url);
        if let Some(b) = body {
            req = req.json(b);
        }

        let resp = req.send().await?;
        let status = resp.status();

        if status.is_success() {
            let parsed = resp.json::<T>().await?;
            return Ok(parsed);
        }

        let status_code = status.as_u16();
        let body_text = resp.text().await.unwrap_or_default();

        match status_code {
            401 => Err(HttpError::Unauthorized),
            404 => Err(HttpError::NotFound(body_text)),
            429 => Err(HttpError::RateLimited {
                retry_after_ms: None,
            }),
            400..=499 => Err(HttpError::BadRequest(body_text)),
            _ => Err(HttpError::ServerError {
                status: status_code,
                body: body_text,
            }),
        }
    }
}

impl Clone for EdenHttp {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            client: self.client.clone(),
        }
    }
}
