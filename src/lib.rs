//! Roastery - coffee shop website backend.
//!
//! REST API for status-check pings and contact form submissions,
//! stored in SQLite.

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod services;
pub mod state;

pub use config::config;
pub use error::{Error, Result};
pub use state::AppState;
