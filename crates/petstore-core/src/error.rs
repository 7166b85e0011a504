use miette::Diagnostic;
use thiserror::Error;

/// Core error type for petstore operations
#[derive(Error, Debug, Diagnostic)]
pub enum PetstoreError {
    /// No pet with the requested id
    #[error("Pet not found: {id}")]
    #[diagnostic(
        code(petstore::pet_not_found),
        help("List /pets to see the ids known to this process")
    )]
    PetNotFound { id: String },

    /// The id is not a valid pet id
    #[error("Invalid pet id: {id}")]
    #[diagnostic(
        code(petstore::invalid_pet_id),
        help("Pet ids are the positive integers assigned at creation")
    )]
    InvalidPetId { id: String },

    /// The input lacks a usable name
    #[error("Pet should have name")]
    #[diagnostic(
        code(petstore::missing_name),
        help("Provide a non-empty \"name\" field in the request body")
    )]
    MissingName,
}

/// Result type alias for petstore operations
pub type Result<T> = std::result::Result<T, PetstoreError>;

impl PetstoreError {
    /// Create a PetNotFound error
    pub fn pet_not_found(id: impl Into<String>) -> Self {
        Self::PetNotFound { id: id.into() }
    }

    /// Create an InvalidPetId error
    pub fn invalid_pet_id(id: impl Into<String>) -> Self {
        Self::InvalidPetId { id: id.into() }
    }
}
