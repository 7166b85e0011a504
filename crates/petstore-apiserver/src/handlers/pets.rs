use crate::extract::ApiJson;
use crate::query::{parse_query, string_items};
use crate::response::{no_content, ApiResponse};
use crate::validation::{parse_limit, parse_pet_id, validate_pet_input};
use crate::{AppState, Result};
use axum::extract::{Path, RawQuery, State};
use axum::response::{IntoResponse, Response};
use petstore_core::PetInput;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// GET /pets
pub async fn list_pets(
    State(state): State<Arc<AppState>>,
    RawQuery(raw): RawQuery,
) -> Result<Response> {
    let params = parse_query(raw.as_deref().unwrap_or(""))?;

    // An empty tags or limit parameter means no filter
    let tags = params
        .get("tags")
        .map(string_items)
        .filter(|tags| !tags.is_empty());
    let limit = match params.get("limit") {
        None => None,
        Some(Value::String(raw)) if raw.is_empty() => None,
        Some(value) => Some(parse_limit(value)?),
    };

    let store = state.store.read().await;
    let pets = store.list(tags.as_deref(), limit);

    debug!("Listing {} of {} pets", pets.len(), store.len());

    Ok(ApiResponse::ok(pets).into_response())
}

/// GET /pets/{id}
pub async fn get_pet(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Response> {
    let id = parse_pet_id(&id)?;

    let store = state.store.read().await;
    let pet = store.get(id)?.clone();

    Ok(ApiResponse::ok(pet).into_response())
}

/// POST /pets
pub async fn create_pet(
    State(state): State<Arc<AppState>>,
    ApiJson(input): ApiJson<PetInput>,
) -> Result<Response> {
    // Validate
    let (name, tag) = validate_pet_input(input)?;

    // Create
    let mut store = state.store.write().await;
    let pet = store.insert(name, tag);

    info!("Created pet {}", pet);

    Ok(ApiResponse::created(pet).into_response())
}

/// PUT /pets/{id}
pub async fn update_pet(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    ApiJson(input): ApiJson<PetInput>,
) -> Result<Response> {
    let id = parse_pet_id(&id)?;

    // Validate before looking the pet up
    let (name, tag) = validate_pet_input(input)?;

    // Update
    let mut store = state.store.write().await;
    let pet = store.update(id, name, tag)?;

    info!("Updated pet {}", pet);

    Ok(ApiResponse::ok(pet).into_response())
}

/// DELETE /pets/{id}
pub async fn delete_pet(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Response> {
    let id = parse_pet_id(&id)?;

    let mut store = state.store.write().await;
    let pet = store.remove(id)?;

    info!("Deleted pet {}", pet);

    Ok(no_content())
}
