//! Selection-panel lists and process-work actions.
//!
//! These paths do not share a prefix, so the router is merged rather than
//! nested.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{lists, work};
use crate::state::AppState;

/// ```text
/// GET  /work-area/list        -> list_work_areas
/// GET  /production-plan/list  -> list_production_plans
/// GET  /process-work/list     -> list_process_works
/// GET  /process-flow/list     -> list_process_flow
/// GET  /work-progress/list    -> list_work_progress
/// POST /work/start            -> start_work
/// POST /work/end              -> end_work
/// POST /work/resolve          -> resolve_work
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/work-area/list", get(lists::list_work_areas))
        .route("/production-plan/list", get(lists::list_production_plans))
        .route("/process-work/list", get(lists::list_process_works))
        .route("/process-flow/list", get(lists::list_process_flow))
        .route("/work-progress/list", get(lists::list_work_progress))
        .route("/work/start", post(work::start_work))
        .route("/work/end", post(work::end_work))
        .route("/work/resolve", post(work::resolve_work))
}
