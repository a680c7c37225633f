//! HTTP handlers of the gateway.
//!
//! Each handler binds its parameters to exactly one remote procedure and
//! wraps the result in a response envelope. Handlers hold no state of
//! their own and never retry.

pub mod initial_load;
pub mod lists;
pub mod production;
pub mod work;

use std::future::Future;
use std::time::Duration;

use axum::Json;
use shopfloor_core::params::ProcedureCall;
use shopfloor_db::DbError;

use crate::error::{AppError, AppResult};
use crate::response::{ActionResponse, ListResponse};
use crate::state::AppState;

/// Await a procedure call under the configured per-call deadline.
async fn bounded<T>(
    state: &AppState,
    call: &ProcedureCall,
    pending: impl Future<Output = Result<T, DbError>>,
) -> AppResult<T> {
    let secs = state.config.procedure_timeout_secs;
    match tokio::time::timeout(Duration::from_secs(secs), pending).await {
        Ok(result) => Ok(result?),
        Err(_) => Err(AppError::Timeout {
            procedure: call.procedure,
            secs,
        }),
    }
}

/// Run a list procedure and return its rows as `data`.
async fn list(state: &AppState, call: ProcedureCall) -> AppResult<Json<ListResponse>> {
    let rows = bounded(state, &call, state.procedures.call(&call)).await?;
    Ok(Json(ListResponse::ok(rows)))
}

/// Run an action procedure and confirm it with `message`.
async fn action(
    state: &AppState,
    call: ProcedureCall,
    message: &'static str,
) -> AppResult<Json<ActionResponse>> {
    let rows = bounded(state, &call, state.procedures.call(&call)).await?;

    tracing::info!(procedure = call.procedure, args = ?call.args, "Action executed");

    Ok(Json(ActionResponse::ok(message, rows)))
}
