//! `/local/users` and `/local/reset`: the file-backed collection.

use axum::{
    extract::{Path, State},
    Json,
};
use common::types::Success;
use serde_json::{json, Value};
use service::users::{UserId, UserRecord};

use super::AppState;
use crate::errors::JsonApiError;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<UserRecord>>, JsonApiError> {
    Ok(Json(state.users.list().await?))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UserRecord>, JsonApiError> {
    Ok(Json(state.users.get(UserId::parse(&id)).await?))
}

/// A missing or non-JSON body is treated as `{}` and rejected for lacking an id.
pub async fn create(
    State(state): State<AppState>,
    body: Option<Json<Value>>,
) -> Result<Json<UserRecord>, JsonApiError> {
    let body = body.map(|Json(v)| v).unwrap_or_else(|| json!({}));
    Ok(Json(state.users.create(body).await?))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Success>, JsonApiError> {
    state.users.delete(UserId::parse(&id)).await?;
    Ok(Json(Success::ok()))
}

pub async fn reset(State(state): State<AppState>) -> Result<Json<Success>, JsonApiError> {
    state.users.reset().await?;
    Ok(Json(Success::ok()))
}
