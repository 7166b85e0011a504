//! Petstore Core - Fundamental types for the petstore API
//!
//! This crate provides:
//! - The `Pet` record and its create/update input type
//! - The ordered in-memory `PetStore` collection
//! - Error types with miette diagnostics

pub mod error;
pub mod pet;
pub mod store;

// Re-export commonly used types
pub use error::{PetstoreError, Result};
pub use pet::{parse_pet_id, Pet, PetInput};
pub use store::PetStore;
