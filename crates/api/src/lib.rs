//! Shop-floor monitor API server library.
//!
//! Exposes the gateway building blocks (config, state, error handling,
//! routes, handlers) so integration tests and the binary entrypoint can
//! both access them.

pub mod config;
pub mod error;
pub mod handlers;
pub mod query;
pub mod request;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
