#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use shopfloor_core::params::ProcedureCall;
use shopfloor_core::types::{record_set, RecordSet};
use shopfloor_db::{DbError, ProcedureCaller};
use tower::ServiceExt;

use shopfloor_api::config::ServerConfig;
use shopfloor_api::router::build_app_router;
use shopfloor_api::state::AppState;

/// How the fake database answers a given procedure.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// Return these result sets in order.
    Sets(Vec<RecordSet>),
    /// The procedure raises an error with this message.
    Fails(String),
    /// The database cannot be reached.
    Unreachable,
    /// The call never completes.
    Hangs,
}

/// In-memory [`ProcedureCaller`] that records every call.
///
/// Procedures without a configured outcome return one empty result set.
#[derive(Default)]
pub struct FakeProcedures {
    calls: Mutex<Vec<ProcedureCall>>,
    outcomes: Mutex<HashMap<String, Outcome>>,
    down: AtomicBool,
}

impl FakeProcedures {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Answer `procedure` with a single result set built from a JSON array.
    pub fn returns(&self, procedure: &str, rows: Value) {
        self.answer(procedure, Outcome::Sets(vec![record_set(rows)]));
    }

    pub fn answer(&self, procedure: &str, outcome: Outcome) {
        self.outcomes
            .lock()
            .unwrap()
            .insert(procedure.to_string(), outcome);
    }

    /// Make `ping` fail.
    pub fn go_down(&self) {
        self.down.store(true, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<ProcedureCall> {
        self.calls.lock().unwrap().clone()
    }

    /// The single recorded call, panicking when there is not exactly one.
    pub fn only_call(&self) -> ProcedureCall {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "expected exactly one call, got {calls:?}");
        calls.into_iter().next().unwrap()
    }

    async fn run(&self, call: &ProcedureCall) -> Result<Vec<RecordSet>, DbError> {
        self.calls.lock().unwrap().push(call.clone());

        let outcome = self.outcomes.lock().unwrap().get(call.procedure).cloned();
        match outcome {
            None => Ok(vec![Vec::new()]),
            Some(Outcome::Sets(sets)) => Ok(sets),
            Some(Outcome::Fails(message)) => Err(DbError::Procedure {
                procedure: call.procedure.to_string(),
                message,
            }),
            Some(Outcome::Unreachable) => Err(DbError::Connection(sqlx::Error::PoolTimedOut)),
            Some(Outcome::Hangs) => std::future::pending().await,
        }
    }
}

#[async_trait]
impl ProcedureCaller for FakeProcedures {
    async fn call(&self, call: &ProcedureCall) -> Result<RecordSet, DbError> {
        Ok(self.run(call).await?.into_iter().next().unwrap_or_default())
    }

    async fn call_multi(&self, call: &ProcedureCall) -> Result<Vec<RecordSet>, DbError> {
        self.run(call).await
    }

    async fn ping(&self) -> Result<(), DbError> {
        if self.down.load(Ordering::SeqCst) {
            Err(DbError::Connection(sqlx::Error::PoolTimedOut))
        } else {
            Ok(())
        }
    }
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        procedure_timeout_secs: 25,
        shutdown_timeout_secs: 30,
    }
}

/// Build the full application router around a fake database.
///
/// Uses the same builder as `main.rs`, so tests exercise the production
/// middleware stack.
pub fn build_test_app(procedures: Arc<FakeProcedures>) -> Router {
    build_test_app_with(procedures, test_config())
}

/// Like [`build_test_app`] with an explicit configuration.
pub fn build_test_app_with(procedures: Arc<FakeProcedures>, config: ServerConfig) -> Router {
    let procedures: Arc<dyn ProcedureCaller> = procedures;
    let state = AppState {
        procedures,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    post_raw(app, uri, &body.to_string()).await
}

/// POST a body verbatim with a JSON content type.
pub async fn post_raw(app: Router, uri: &str, body: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
