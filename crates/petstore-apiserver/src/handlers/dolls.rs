use crate::query::parse_query;
use crate::{ApiError, Result};
use axum::extract::RawQuery;
use serde_json::Value;
use tracing::debug;

/// GET /nestedReferenceInParameter
///
/// Accepts a `russianDoll` object encoded with bracket syntax, e.g.
/// `russianDoll[name]=a&russianDoll[nestedDoll][name]=b`, and answers
/// with the names found along the `nestedDoll` chain.
pub async fn get_doll_names(RawQuery(raw): RawQuery) -> Result<String> {
    let params = parse_query(raw.as_deref().unwrap_or(""))?;
    let doll = params
        .get("russianDoll")
        .ok_or_else(|| ApiError::BadRequest("Missing russianDoll parameter".to_string()))?;

    let mut names = Vec::new();
    collect_names(doll, &mut names);

    debug!("Collected {} doll names", names.len());

    Ok(format!("Nested dolls name: {}", names.join(",")))
}

/// Collect each `name` down the chain of `nestedDoll` children
fn collect_names(doll: &Value, names: &mut Vec<String>) {
    if let Some(name) = doll.get("name").and_then(Value::as_str) {
        names.push(name.to_string());
    }
    if let Some(nested) = doll.get("nestedDoll") {
        collect_names(nested, names);
    }
}
