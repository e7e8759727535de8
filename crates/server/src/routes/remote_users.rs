//! `/apiurl/users`: forwards each request to the remote users service.
//!
//! Successful answers are relayed as `200` with the remote body, whatever
//! 2xx status the remote used. Any failure becomes a 500 with a fixed
//! message naming the operation; the cause is only logged.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use common::{types::Success, CoreError};
use serde_json::{json, Value};
use tracing::error;

use super::AppState;
use crate::errors::JsonApiError;

pub const LIST_FAILED: &str = "Failed to reach the external API.";
pub const CREATE_FAILED: &str = "Failed to create user (external API).";
pub const UPDATE_FAILED: &str = "Failed to update user (external API).";
pub const DELETE_FAILED: &str = "Failed to delete user (external API).";

fn failure(op: &'static str, message: &'static str, e: CoreError) -> JsonApiError {
    error!(op, error = %e, "remote users request failed");
    JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, message)
}

/// Missing or non-JSON bodies are forwarded as an empty object.
fn body_or_empty(body: Option<Json<Value>>) -> Value {
    body.map(|Json(v)| v).unwrap_or_else(|| json!({}))
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Value>, JsonApiError> {
    let reply = state.remote.list().await.map_err(|e| failure("list", LIST_FAILED, e))?;
    Ok(Json(reply))
}

pub async fn create(
    State(state): State<AppState>,
    body: Option<Json<Value>>,
) -> Result<Json<Value>, JsonApiError> {
    let body = body_or_empty(body);
    let reply = state
        .remote
        .create(&body)
        .await
        .map_err(|e| failure("create", CREATE_FAILED, e))?;
    Ok(Json(reply))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Option<Json<Value>>,
) -> Result<Json<Value>, JsonApiError> {
    let body = body_or_empty(body);
    let reply = state
        .remote
        .update(&id, &body)
        .await
        .map_err(|e| failure("update", UPDATE_FAILED, e))?;
    Ok(Json(reply))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Success>, JsonApiError> {
    state
        .remote
        .delete(&id)
        .await
        .map_err(|e| failure("delete", DELETE_FAILED, e))?;
    Ok(Json(Success::ok()))
}
