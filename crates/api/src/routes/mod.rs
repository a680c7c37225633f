pub mod dashboard;
pub mod filter;
pub mod health;
pub mod production;
pub mod status;
pub mod work;

use axum::routing::get;
use axum::Router;

use crate::handlers::{initial_load, lists};
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /workcenter/list                       work centers
/// /worker/list                           workers
/// /filter/plants                         plant filter options
/// /filter/models                         model filter options
/// /filter/workcenters                    work center filter options
/// /filter/processes                      process filter options
///
/// /production/list                       legacy production list
/// /production/start                      start item (POST)
/// /production/complete                   complete item (POST)
/// /production/resolve                    resolve item exception (POST)
/// /production/material-check             check item material (POST)
///
/// /work-area/list                        work areas of a plant
/// /production-plan/list                  plans of a work area
/// /process-work/list                     process works of a plan
/// /process-flow/list                     process flow of a plan
/// /work-progress/list                    progress of a process work
/// /work/start                            start process work (POST)
/// /work/end                              end process work (POST)
/// /work/resolve                          resolve process exception (POST)
///
/// /status/bench                          bench readiness counters
/// /status/exception                      process exception counters
/// /initial-load                          two-block initial dashboard data
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/workcenter/list", get(lists::list_work_centers))
        .route("/worker/list", get(lists::list_workers))
        .route("/initial-load", get(initial_load::initial_load))
        .nest("/filter", filter::router())
        .nest("/production", production::router())
        .nest("/status", status::router())
        .merge(work::router())
}
