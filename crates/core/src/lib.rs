//! Domain building blocks for the shop-floor monitor.
//!
//! The `core` crate has no I/O. It defines the remote procedure catalogue,
//! parameter values, the status vocabulary, the cascading selection state
//! machine, the view renderer and the fixed fallback datasets. Both the
//! gateway (`shopfloor-api`) and the dashboard client (`shopfloor-client`)
//! build on these.

pub mod error;
pub mod fallback;
pub mod params;
pub mod procedures;
pub mod render;
pub mod selection;
pub mod status;
pub mod types;
