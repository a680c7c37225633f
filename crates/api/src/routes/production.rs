//! Legacy production list and per-item actions mounted at `/production`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{lists, production};
use crate::state::AppState;

/// ```text
/// GET  /list            -> list_production
/// POST /start           -> start_production
/// POST /complete        -> complete_production
/// POST /resolve         -> resolve_production
/// POST /material-check  -> check_material
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/list", get(lists::list_production))
        .route("/start", post(production::start_production))
        .route("/complete", post(production::complete_production))
        .route("/resolve", post(production::resolve_production))
        .route("/material-check", post(production::check_material))
}
