use std::sync::Arc;

use shopfloor_db::ProcedureCaller;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Remote procedure executor. The connection manager behind it is
    /// owned by the binary entrypoint.
    pub procedures: Arc<dyn ProcedureCaller>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
