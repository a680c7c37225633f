//! Handlers for the process-work actions driven by the selection panel.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use shopfloor_core::procedures::{END_WORK, RESOLVE_WORK, START_WORK};

use super::action;
use crate::error::AppResult;
use crate::request::{StartWorkRequest, WorkTargetRequest};
use crate::response::ActionResponse;
use crate::state::AppState;

pub const MSG_WORK_STARTED: &str = "작업이 시작되었습니다.";
pub const MSG_WORK_ENDED: &str = "작업이 종료되었습니다.";
pub const MSG_WORK_RESOLVED: &str = "공정이상이 해제되었습니다.";

/// POST /api/work/start
///
/// Assigns every listed worker to the process work in one procedure call.
pub async fn start_work(
    State(state): State<AppState>,
    payload: Result<Json<StartWorkRequest>, JsonRejection>,
) -> AppResult<Json<ActionResponse>> {
    let Json(input) = payload?;
    let call = START_WORK.bind(vec![input.process_work_id()?, input.workers()?])?;
    action(&state, call, MSG_WORK_STARTED).await
}

/// POST /api/work/end
pub async fn end_work(
    State(state): State<AppState>,
    payload: Result<Json<WorkTargetRequest>, JsonRejection>,
) -> AppResult<Json<ActionResponse>> {
    let Json(input) = payload?;
    let call = END_WORK.bind(vec![input.process_work_id()?])?;
    action(&state, call, MSG_WORK_ENDED).await
}

/// POST /api/work/resolve
pub async fn resolve_work(
    State(state): State<AppState>,
    payload: Result<Json<WorkTargetRequest>, JsonRejection>,
) -> AppResult<Json<ActionResponse>> {
    let Json(input) = payload?;
    let call = RESOLVE_WORK.bind(vec![input.process_work_id()?])?;
    action(&state, call, MSG_WORK_RESOLVED).await
}
