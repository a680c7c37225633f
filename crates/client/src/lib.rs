//! Dashboard client for the shop-floor gateway.
//!
//! [`Dashboard`] drives the selection panels and the work actions.
//! [`ProductionList`] is the legacy production screen, whose per-item
//! actions live in [`batch`]. [`StatusPoller`] keeps the status panels
//! and the production list fresh. All of them talk to the gateway
//! through the [`FloorApi`] trait.

pub mod api;
pub mod batch;
pub mod dashboard;
pub mod error;
pub mod poller;
pub mod production;

pub use api::{ActionOutcome, FloorApi, HttpFloorApi};
pub use dashboard::Dashboard;
pub use error::ClientError;
pub use poller::{StatusBoard, StatusPoller};
pub use production::ProductionList;
