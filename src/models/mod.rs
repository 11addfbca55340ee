//! Domain models.

pub mod developer;

pub use developer::{CreateDeveloper, Developer, Experience};
