//! HTTP client for the gateway's `/api` endpoints.
//!
//! Every gateway response carries a `success` flag; list endpoints put
//! their rows under `data`, actions add a confirmation `message`, and
//! failures carry an `error` text. [`FloorApi`] hides the envelope from
//! callers and [`HttpFloorApi`] implements it with [`reqwest`].

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use shopfloor_core::types::{record_set, RecordSet};

use crate::error::ClientError;

/// Gateway paths, relative to `/api`.
pub mod paths {
    pub const WORK_CENTER_LIST: &str = "/workcenter/list";
    pub const PRODUCTION_LIST: &str = "/production/list";
    pub const WORK_AREA_LIST: &str = "/work-area/list";
    pub const PRODUCTION_PLAN_LIST: &str = "/production-plan/list";
    pub const PROCESS_WORK_LIST: &str = "/process-work/list";
    pub const WORK_PROGRESS_LIST: &str = "/work-progress/list";
    pub const WORKER_LIST: &str = "/worker/list";
    pub const BENCH_STATUS: &str = "/status/bench";
    pub const EXCEPTION_STATUS: &str = "/status/exception";

    pub const WORK_START: &str = "/work/start";
    pub const WORK_END: &str = "/work/end";
    pub const WORK_RESOLVE: &str = "/work/resolve";

    pub const PRODUCTION_START: &str = "/production/start";
    pub const PRODUCTION_COMPLETE: &str = "/production/complete";
    pub const PRODUCTION_RESOLVE: &str = "/production/resolve";
    pub const MATERIAL_CHECK: &str = "/production/material-check";
}

/// A successful action response.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionOutcome {
    /// Confirmation text shown to the operator.
    pub message: String,
    /// Rows returned by the procedure, usually empty.
    pub data: RecordSet,
}

/// The gateway operations the dashboard needs.
#[async_trait]
pub trait FloorApi: Send + Sync {
    /// `GET` a list endpoint and return its `data` rows.
    async fn get_list(&self, path: &str, query: &[(&str, &str)]) -> Result<RecordSet, ClientError>;

    /// `POST` an action body and return the confirmation.
    async fn post_action(&self, path: &str, body: Value) -> Result<ActionOutcome, ClientError>;
}

#[async_trait]
impl<T: FloorApi + ?Sized> FloorApi for Arc<T> {
    async fn get_list(&self, path: &str, query: &[(&str, &str)]) -> Result<RecordSet, ClientError> {
        (**self).get_list(path, query).await
    }

    async fn post_action(&self, path: &str, body: Value) -> Result<ActionOutcome, ClientError> {
        (**self).post_action(path, body).await
    }
}

/// Read a list, substituting `fallback` when the request fails.
///
/// Read paths never surface errors to the operator; the failure is logged
/// and the fixed placeholder dataset is shown instead.
pub async fn list_or_fallback<A: FloorApi + ?Sized>(
    api: &A,
    path: &str,
    query: &[(&str, &str)],
    fallback: fn() -> RecordSet,
) -> RecordSet {
    match api.get_list(path, query).await {
        Ok(rows) => rows,
        Err(e) => {
            tracing::warn!(path, error = %e, "List request failed, showing fallback data");
            fallback()
        }
    }
}

/// [`FloorApi`] over HTTP.
pub struct HttpFloorApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpFloorApi {
    /// Create a client for the gateway at `base_url`, e.g.
    /// `http://localhost:3000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    async fn read_envelope(response: reqwest::Response) -> Result<Value, ClientError> {
        let status = response.status().as_u16();
        let bytes = response.bytes().await?;
        let body = serde_json::from_slice::<Value>(&bytes).ok();
        unwrap_envelope(status, body)
    }
}

#[async_trait]
impl FloorApi for HttpFloorApi {
    async fn get_list(&self, path: &str, query: &[(&str, &str)]) -> Result<RecordSet, ClientError> {
        let response = self.client.get(self.url(path)).query(query).send().await?;
        let mut body = Self::read_envelope(response).await?;
        Ok(take_rows(&mut body, "data"))
    }

    async fn post_action(&self, path: &str, body: Value) -> Result<ActionOutcome, ClientError> {
        let response = self.client.post(self.url(path)).json(&body).send().await?;
        let mut body = Self::read_envelope(response).await?;
        Ok(ActionOutcome {
            message: body
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            data: take_rows(&mut body, "data"),
        })
    }
}

/// Accept a response only when the status is 2xx and `success` is true.
fn unwrap_envelope(status: u16, body: Option<Value>) -> Result<Value, ClientError> {
    let ok_status = (200..300).contains(&status);
    match body {
        Some(body) if ok_status && body.get("success") == Some(&Value::Bool(true)) => Ok(body),
        body => {
            let message = body
                .as_ref()
                .and_then(|b| b.get("error"))
                .and_then(Value::as_str)
                .filter(|m| !m.trim().is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| format!("request failed with status {status}"));
            Err(ClientError::Api { status, message })
        }
    }
}

fn take_rows(body: &mut Value, key: &str) -> RecordSet {
    body.get_mut(key).map(Value::take).map(record_set).unwrap_or_default()
}
