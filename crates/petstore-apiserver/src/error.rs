use crate::query::QueryError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};

/// API error type
///
/// Every failure this API reports is treated as bad client input: the
/// response status is always 400 and the body always carries the
/// `{error, message, id?}` shape.
#[derive(Debug)]
pub enum ApiError {
    /// No pet with the requested id
    PetNotFound(String),

    /// The id path segment is not a valid pet id
    InvalidPetId(String),

    /// The request body has no usable name
    MissingName,

    /// Any other malformed input (body, query string, parameters)
    BadRequest(String),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;

impl ApiError {
    /// The JSON body for this error
    ///
    /// Lookup failures echo the requested id so the caller can tell
    /// which id the server rejected.
    pub fn to_body(&self) -> Value {
        match self {
            ApiError::PetNotFound(id) => json!({
                "error": "Bad Request",
                "message": "Pet not found",
                "id": id,
            }),
            ApiError::InvalidPetId(id) => json!({
                "error": "Bad Request",
                "message": "Invalid pet id",
                "id": id,
            }),
            ApiError::MissingName => json!({
                "error": "Bad Request",
                "message": "Pet should have name",
            }),
            ApiError::BadRequest(message) => json!({
                "error": "Bad Request",
                "message": message,
            }),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, Json(self.to_body())).into_response()
    }
}

impl From<petstore_core::PetstoreError> for ApiError {
    fn from(err: petstore_core::PetstoreError) -> Self {
        use petstore_core::PetstoreError;

        match err {
            PetstoreError::PetNotFound { id } => ApiError::PetNotFound(id),
            PetstoreError::InvalidPetId { id } => ApiError::InvalidPetId(id),
            PetstoreError::MissingName => ApiError::MissingName,
        }
    }
}

impl From<QueryError> for ApiError {
    fn from(err: QueryError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(format!("Invalid request body: {}", rejection.body_text()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use petstore_core::PetstoreError;

    #[test]
    fn test_every_error_maps_to_400() {
        let errors = [
            ApiError::PetNotFound("9".to_string()),
            ApiError::InvalidPetId("abc".to_string()),
            ApiError::MissingName,
            ApiError::BadRequest("Invalid limit".to_string()),
        ];

        for err in errors {
            assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn test_lookup_errors_echo_the_id() {
        let body = ApiError::PetNotFound("9".to_string()).to_body();
        assert_eq!(
            body,
            json!({"error": "Bad Request", "message": "Pet not found", "id": "9"})
        );

        let body = ApiError::InvalidPetId("abc".to_string()).to_body();
        assert_eq!(
            body,
            json!({"error": "Bad Request", "message": "Invalid pet id", "id": "abc"})
        );
    }

    #[test]
    fn test_missing_name_body() {
        let body = ApiError::MissingName.to_body();
        assert_eq!(
            body,
            json!({"error": "Bad Request", "message": "Pet should have name"})
        );
    }

    #[test]
    fn test_core_error_conversion() {
        let err: ApiError = PetstoreError::pet_not_found("5").into();
        assert!(matches!(err, ApiError::PetNotFound(id) if id == "5"));

        let err: ApiError = PetstoreError::MissingName.into();
        assert!(matches!(err, ApiError::MissingName));
    }
}
