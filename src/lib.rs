//! Developer Registry Service
//!
//! This library exposes the service internals for integration testing.
//! The main entry point for running the server is the `devreg` binary.

pub mod config;
pub mod developers;
pub mod error;
pub mod models;
pub mod registry;
pub mod routes;
pub mod state;
pub mod tax;

pub use config::Config;
pub use state::AppState;
