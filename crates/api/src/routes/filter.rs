//! Filter option lists mounted at `/filter`.

use axum::routing::get;
use axum::Router;

use crate::handlers::lists;
use crate::state::AppState;

/// ```text
/// GET /plants       -> list_plants
/// GET /models       -> list_models
/// GET /workcenters  -> list_filter_work_centers
/// GET /processes    -> list_processes
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/plants", get(lists::list_plants))
        .route("/models", get(lists::list_models))
        .route("/workcenters", get(lists::list_filter_work_centers))
        .route("/processes", get(lists::list_processes))
}
