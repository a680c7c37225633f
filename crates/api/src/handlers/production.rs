//! Handlers for the legacy per-item production actions.
//!
//! The dashboard issues one request per selected item; each request runs
//! one procedure call and nothing ties the calls of a batch together.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use shopfloor_core::procedures::{
    CHECK_MATERIAL, COMPLETE_PRODUCTION, RESOLVE_PRODUCTION, START_PRODUCTION,
};

use super::action;
use crate::error::AppResult;
use crate::request::ProductionActionRequest;
use crate::response::ActionResponse;
use crate::state::AppState;

pub const MSG_PRODUCTION_STARTED: &str = "작업이 시작되었습니다.";
pub const MSG_PRODUCTION_COMPLETED: &str = "작업이 완료되었습니다.";
pub const MSG_PRODUCTION_RESOLVED: &str = "공정이상이 해제되었습니다.";
pub const MSG_MATERIAL_CHECKED: &str = "원재료 확인이 완료되었습니다.";

/// POST /api/production/start
pub async fn start_production(
    State(state): State<AppState>,
    payload: Result<Json<ProductionActionRequest>, JsonRejection>,
) -> AppResult<Json<ActionResponse>> {
    let Json(input) = payload?;
    let call = START_PRODUCTION.bind(vec![input.item_id()?, input.work_center()?])?;
    action(&state, call, MSG_PRODUCTION_STARTED).await
}

/// POST /api/production/complete
pub async fn complete_production(
    State(state): State<AppState>,
    payload: Result<Json<ProductionActionRequest>, JsonRejection>,
) -> AppResult<Json<ActionResponse>> {
    let Json(input) = payload?;
    let call = COMPLETE_PRODUCTION.bind(vec![input.item_id()?, input.quantity()?])?;
    action(&state, call, MSG_PRODUCTION_COMPLETED).await
}

/// POST /api/production/resolve
pub async fn resolve_production(
    State(state): State<AppState>,
    payload: Result<Json<ProductionActionRequest>, JsonRejection>,
) -> AppResult<Json<ActionResponse>> {
    let Json(input) = payload?;
    let call = RESOLVE_PRODUCTION.bind(vec![input.item_id()?, input.work_center()?])?;
    action(&state, call, MSG_PRODUCTION_RESOLVED).await
}

/// POST /api/production/material-check
pub async fn check_material(
    State(state): State<AppState>,
    payload: Result<Json<ProductionActionRequest>, JsonRejection>,
) -> AppResult<Json<ActionResponse>> {
    let Json(input) = payload?;
    let call = CHECK_MATERIAL.bind(vec![input.item_id()?, input.work_center()?])?;
    action(&state, call, MSG_MATERIAL_CHECKED).await
}
