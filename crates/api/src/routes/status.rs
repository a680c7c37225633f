//! Status panels mounted at `/status`.

use axum::routing::get;
use axum::Router;

use crate::handlers::lists;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/bench", get(lists::bench_status))
        .route("/exception", get(lists::exception_status))
}
