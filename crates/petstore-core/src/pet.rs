use crate::error::{PetstoreError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A pet record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    /// Unique id, assigned at creation
    pub id: u64,
    /// Display name
    pub name: String,
    /// Free-form tag, empty when the pet has none
    #[serde(default)]
    pub tag: String,
}

impl Pet {
    /// Create a new Pet
    pub fn new(id: u64, name: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            tag: tag.into(),
        }
    }
}

impl fmt::Display for Pet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// Request body for creating or updating a pet
///
/// `name` is required by the API, but modeled as an `Option` so that an
/// absent field surfaces as a domain error instead of a deserialization
/// failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PetInput {
    pub name: Option<String>,
    pub tag: Option<String>,
}

impl PetInput {
    /// Validate the input, yielding the name and the defaulted tag
    ///
    /// The tag is optional and falls back to the empty string, which is
    /// also what an update writes when the field is omitted.
    pub fn validate(self) -> Result<(String, String)> {
        match self.name {
            Some(name) if !name.is_empty() => Ok((name, self.tag.unwrap_or_default())),
            _ => Err(PetstoreError::MissingName),
        }
    }
}

/// Parse a raw id string into a pet id
pub fn parse_pet_id(raw: &str) -> Result<u64> {
    raw.parse()
        .map_err(|_| PetstoreError::invalid_pet_id(raw))
}
