//! HTTP route handlers.

pub mod developer;
pub mod health;
