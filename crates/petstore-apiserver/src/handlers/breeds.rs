use crate::extract::ApiJson;
use crate::response::ApiResponse;
use crate::Result;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Breed-picker request body
#[derive(Debug, Default, Deserialize)]
pub struct BreedInput {
    #[serde(default, rename = "catBreed")]
    pub cat_breed: bool,
    #[serde(default, rename = "dogBreed")]
    pub dog_breed: bool,
}

/// Breed-picker answer, tagged by the chosen family
#[derive(Debug, PartialEq, Eq, Serialize)]
pub enum BreedAnswer {
    #[serde(rename = "catBreed")]
    Cat(&'static str),
    #[serde(rename = "dogBreed")]
    Dog(&'static str),
}

/// POST /breeds
///
/// Answers a cat breed when the body asks for one, and falls back to a
/// dog breed otherwise.
pub async fn pick_breed(ApiJson(input): ApiJson<BreedInput>) -> Result<Response> {
    let answer = if input.cat_breed {
        BreedAnswer::Cat("Sphynx")
    } else {
        BreedAnswer::Dog("Labrador")
    };

    debug!("Picked breed {:?}", answer);

    Ok(ApiResponse::ok(answer).into_response())
}
