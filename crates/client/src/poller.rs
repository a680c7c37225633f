//! Periodic refresh of the bench and exception status panels.
//!
//! [`StatusPoller`] runs as a background task and writes each response
//! into a shared [`StatusBoard`]. When given a [`ProductionList`] it
//! reloads that on the same tick. Refreshes are not coordinated with
//! user-triggered reads: whichever response lands last wins.

use std::sync::Arc;
use std::time::Duration;

use shopfloor_core::fallback;
use shopfloor_core::render::{render_panel, Highlight, Panel};
use shopfloor_core::types::RecordSet;
use tokio::sync::{Mutex, RwLock};
use tokio_util::sync::CancellationToken;

use crate::api::{list_or_fallback, paths, FloorApi};
use crate::production::ProductionList;

/// How often the status panels are refreshed.
pub const STATUS_REFRESH_INTERVAL: Duration = Duration::from_secs(30);

/// Shortest accepted refresh interval.
pub const MIN_REFRESH_INTERVAL: Duration = Duration::from_millis(10);

/// Latest rows of both status panels.
#[derive(Debug, Clone, Default)]
pub struct StatusBoard {
    pub bench: RecordSet,
    pub exceptions: RecordSet,
    /// Number of completed refreshes.
    pub refreshes: u64,
}

impl StatusBoard {
    pub fn render_bench(&self) -> String {
        render_panel(Panel::BenchStatus, &self.bench, Highlight::default())
    }

    pub fn render_exceptions(&self) -> String {
        render_panel(Panel::ExceptionStatus, &self.exceptions, Highlight::default())
    }
}

// ---------------------------------------------------------------------------
// StatusPoller
// ---------------------------------------------------------------------------

pub struct StatusPoller<A: ?Sized> {
    api: Arc<A>,
    board: Arc<RwLock<StatusBoard>>,
    production: Option<Arc<Mutex<ProductionList<Arc<A>>>>>,
    interval: Duration,
}

impl<A: FloorApi + ?Sized> StatusPoller<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            board: Arc::new(RwLock::new(StatusBoard::default())),
            production: None,
            interval: STATUS_REFRESH_INTERVAL,
        }
    }

    /// Set the refresh interval, raised to [`MIN_REFRESH_INTERVAL`] if
    /// shorter.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        if interval < MIN_REFRESH_INTERVAL {
            tracing::warn!(
                requested = ?interval,
                used = ?MIN_REFRESH_INTERVAL,
                "Refresh interval too short, clamping"
            );
        }
        self.interval = interval.max(MIN_REFRESH_INTERVAL);
        self
    }

    /// Also reload `list` on every refresh.
    pub fn with_production(mut self, list: Arc<Mutex<ProductionList<Arc<A>>>>) -> Self {
        self.production = Some(list);
        self
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Shared handle to the board the poller writes into.
    pub fn board(&self) -> Arc<RwLock<StatusBoard>> {
        Arc::clone(&self.board)
    }

    /// Refresh on every tick until `cancel` fires. The first refresh runs
    /// immediately.
    pub async fn run(&self, cancel: CancellationToken) {
        let mut interval = tokio::time::interval(self.interval);

        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::info!("Status poller cancelled");
                    break;
                }
                _ = interval.tick() => {
                    self.refresh_once().await;
                }
            }
        }
    }

    /// Fetch both status panels and publish them, reloading the
    /// production list alongside when one is attached.
    pub async fn refresh_once(&self) {
        let api = self.api.as_ref();
        let (bench, exceptions, ()) = tokio::join!(
            list_or_fallback(api, paths::BENCH_STATUS, &[], fallback::bench_status),
            list_or_fallback(api, paths::EXCEPTION_STATUS, &[], fallback::exception_status),
            self.reload_production(),
        );

        let mut board = self.board.write().await;
        board.bench = bench;
        board.exceptions = exceptions;
        board.refreshes += 1;

        tracing::debug!(
            bench = board.bench.len(),
            exceptions = board.exceptions.len(),
            "Status panels refreshed"
        );
    }

    async fn reload_production(&self) {
        if let Some(list) = &self.production {
            list.lock().await.reload().await;
        }
    }
}
