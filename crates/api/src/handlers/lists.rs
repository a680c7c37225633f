//! Handlers for the list endpoints.
//!
//! Lookup lists take no parameters; scoped lists forward their optional
//! query parameters verbatim.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use shopfloor_core::params::ParamValue;
use shopfloor_core::procedures::{self, Procedure, FILTER_ALL};

use super::list;
use crate::error::AppResult;
use crate::query::{
    PlanParams, ProductionListParams, ProductionPlanParams, WorkAreaParams, WorkProgressParams,
};
use crate::response::ListResponse;
use crate::state::AppState;

async fn lookup(state: &AppState, procedure: Procedure) -> AppResult<Json<ListResponse>> {
    list(state, procedure.call()?).await
}

// ---------------------------------------------------------------------------
// Lookup lists
// ---------------------------------------------------------------------------

/// GET /api/workcenter/list
pub async fn list_work_centers(State(state): State<AppState>) -> AppResult<Json<ListResponse>> {
    lookup(&state, procedures::WORK_CENTER_LIST).await
}

/// GET /api/filter/plants
pub async fn list_plants(State(state): State<AppState>) -> AppResult<Json<ListResponse>> {
    lookup(&state, procedures::PLANT_LIST).await
}

/// GET /api/filter/models
pub async fn list_models(State(state): State<AppState>) -> AppResult<Json<ListResponse>> {
    lookup(&state, procedures::MODEL_LIST).await
}

/// GET /api/filter/workcenters
pub async fn list_filter_work_centers(
    State(state): State<AppState>,
) -> AppResult<Json<ListResponse>> {
    lookup(&state, procedures::FILTER_WORK_CENTER_LIST).await
}

/// GET /api/filter/processes
pub async fn list_processes(State(state): State<AppState>) -> AppResult<Json<ListResponse>> {
    lookup(&state, procedures::PROCESS_LIST).await
}

/// GET /api/worker/list
pub async fn list_workers(State(state): State<AppState>) -> AppResult<Json<ListResponse>> {
    lookup(&state, procedures::WORKER_LIST).await
}

/// GET /api/status/bench
pub async fn bench_status(State(state): State<AppState>) -> AppResult<Json<ListResponse>> {
    lookup(&state, procedures::BENCH_STATUS).await
}

/// GET /api/status/exception
pub async fn exception_status(State(state): State<AppState>) -> AppResult<Json<ListResponse>> {
    lookup(&state, procedures::EXCEPTION_STATUS).await
}

// ---------------------------------------------------------------------------
// Scoped lists
// ---------------------------------------------------------------------------

/// GET /api/production/list
///
/// `workCenter` defaults to an empty string and `filter` to `ALL`.
pub async fn list_production(
    State(state): State<AppState>,
    params: Result<Query<ProductionListParams>, QueryRejection>,
) -> AppResult<Json<ListResponse>> {
    let Query(params) = params?;
    let call = procedures::PRODUCTION_LIST.bind(vec![
        ParamValue::text_or(params.work_center.as_deref(), ""),
        ParamValue::text_or(params.filter.as_deref(), FILTER_ALL),
    ])?;
    list(&state, call).await
}

/// GET /api/work-area/list
pub async fn list_work_areas(
    State(state): State<AppState>,
    params: Result<Query<WorkAreaParams>, QueryRejection>,
) -> AppResult<Json<ListResponse>> {
    let Query(params) = params?;
    let call = procedures::WORK_AREA_LIST.bind(vec![ParamValue::text(params.plant.as_deref())])?;
    list(&state, call).await
}

/// GET /api/production-plan/list
pub async fn list_production_plans(
    State(state): State<AppState>,
    params: Result<Query<ProductionPlanParams>, QueryRejection>,
) -> AppResult<Json<ListResponse>> {
    let Query(params) = params?;
    let call = procedures::PRODUCTION_PLAN_LIST.bind(vec![
        ParamValue::text(params.work_area.as_deref()),
        ParamValue::text(params.model.as_deref()),
        ParamValue::text(params.start_date.as_deref()),
        ParamValue::text(params.end_date.as_deref()),
    ])?;
    list(&state, call).await
}

/// GET /api/process-work/list
pub async fn list_process_works(
    State(state): State<AppState>,
    params: Result<Query<PlanParams>, QueryRejection>,
) -> AppResult<Json<ListResponse>> {
    let Query(params) = params?;
    let call =
        procedures::PROCESS_WORK_LIST.bind(vec![ParamValue::text(params.plan_id.as_deref())])?;
    list(&state, call).await
}

/// GET /api/process-flow/list
pub async fn list_process_flow(
    State(state): State<AppState>,
    params: Result<Query<PlanParams>, QueryRejection>,
) -> AppResult<Json<ListResponse>> {
    let Query(params) = params?;
    let call =
        procedures::PROCESS_FLOW_LIST.bind(vec![ParamValue::text(params.plan_id.as_deref())])?;
    list(&state, call).await
}

/// GET /api/work-progress/list
pub async fn list_work_progress(
    State(state): State<AppState>,
    params: Result<Query<WorkProgressParams>, QueryRejection>,
) -> AppResult<Json<ListResponse>> {
    let Query(params) = params?;
    let call =
        procedures::WORK_PROGRESS_LIST.bind(vec![ParamValue::text(params.work_id.as_deref())])?;
    list(&state, call).await
}
