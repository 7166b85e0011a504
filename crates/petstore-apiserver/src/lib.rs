//! Petstore API Server - REST API over the in-memory pet store
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - Pet resource handlers (GET, POST, PUT, DELETE)
//! - LIST with tag filtering and a result limit
//! - Bracket-syntax query decoding for nested parameters
//! - A uniform 400 error contract for every failure

pub mod error;
pub mod server;
pub mod handlers;
pub mod state;
pub mod response;
pub mod validation;
pub mod extract;
pub mod query;

// Re-export commonly used types
pub use error::{ApiError, Result};
pub use server::{ApiServer, Config};
pub use state::AppState;
