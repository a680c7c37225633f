//! Handler for the initial dashboard load.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use shopfloor_core::params::ParamValue;
use shopfloor_core::procedures::INITIAL_LOAD;

use super::bounded;
use crate::error::AppResult;
use crate::query::InitialLoadParams;
use crate::response::InitialLoadResponse;
use crate::state::AppState;

/// GET /api/initial-load
///
/// One procedure call yielding two result sets: the work-area/plan
/// projection (`dataBlock1`) and the workers (`dataBlock2`). Either set
/// may be absent and is then returned empty. Sets beyond the second are
/// ignored.
pub async fn initial_load(
    State(state): State<AppState>,
    params: Result<Query<InitialLoadParams>, QueryRejection>,
) -> AppResult<Json<InitialLoadResponse>> {
    let Query(params) = params?;
    let call = INITIAL_LOAD.bind(vec![
        ParamValue::text(params.fact_unit.as_deref()),
        ParamValue::text(params.dept_seq.as_deref()),
        ParamValue::text(params.plant_code.as_deref()),
    ])?;

    let sets = bounded(&state, &call, state.procedures.call_multi(&call)).await?;
    if sets.len() > 2 {
        tracing::warn!(result_sets = sets.len(), "Initial load returned extra result sets");
    }

    Ok(Json(InitialLoadResponse::from_sets(sets)))
}
