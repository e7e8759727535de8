pub mod local_users;
pub mod remote_users;

use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Json, Router,
};
use common::{remote::RemoteUsersClient, types::Health};
use service::users::UserStore;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;

/// Shared handler state: one collaborator per route group.
#[derive(Clone)]
pub struct AppState {
    pub remote: Arc<RemoteUsersClient>,
    pub users: Arc<dyn UserStore>,
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: health, proxy group and local group
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let public = Router::new().route("/health", get(health));

    // Passthrough to the remote users service
    let remote = Router::new()
        .route("/apiurl/users", get(remote_users::list).post(remote_users::create))
        .route("/apiurl/users/:id", put(remote_users::update).delete(remote_users::delete));

    // File-backed collection
    let local = Router::new()
        .route("/local/users", get(local_users::list).post(local_users::create))
        .route("/local/users/:id", get(local_users::get).delete(local_users::delete))
        .route("/local/reset", post(local_users::reset));

    public
        .merge(remote)
        .merge(local)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                        .on_request(DefaultOnRequest::new().level(Level::INFO))
                        .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                        // 5xx are logged at ERROR
                        .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
                )
                .layer(cors),
        )
}
