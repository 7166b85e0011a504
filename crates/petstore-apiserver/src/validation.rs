use crate::{ApiError, Result};
use petstore_core::PetInput;
use serde_json::Value;

/// Parse the id path segment into a pet id
pub fn parse_pet_id(raw: &str) -> Result<u64> {
    Ok(petstore_core::parse_pet_id(raw)?)
}

/// Validate a create/update body, yielding the name and defaulted tag
pub fn validate_pet_input(input: PetInput) -> Result<(String, String)> {
    Ok(input.validate()?)
}

/// Parse the `limit` query parameter into a result-count cap
pub fn parse_limit(value: &Value) -> Result<usize> {
    let raw = value
        .as_str()
        .ok_or_else(|| ApiError::BadRequest("Invalid limit".to_string()))?;

    raw.parse()
        .map_err(|_| ApiError::BadRequest(format!("Invalid limit: {}", raw)))
}
