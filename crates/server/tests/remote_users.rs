use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::Path,
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use common::remote::RemoteUsersClient;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use service::storage::MemoryStore;
use service::users::LocalUserStore;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use server::routes::{self, AppState};

async fn listen(app: Router) -> anyhow::Result<String> {
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });
    Ok(format!("http://{}:{}", addr.ip(), addr.port()))
}

/// Stand-in for the remote users service: echoes what it receives.
fn fake_remote() -> Router {
    Router::new()
        .route(
            "/users",
            get(|| async { Json(json!([{"id": 1, "name": "Leanne"}])) })
                .post(|Json(v): Json<Value>| async move {
                    (StatusCode::CREATED, Json(json!({"id": 11, "received": v})))
                }),
        )
        .route(
            "/users/:id",
            put(|Path(id): Path<String>, Json(v): Json<Value>| async move {
                Json(json!({"id": id, "received": v}))
            })
            .delete(|| async { Json(json!({})) }),
        )
}

/// Remote that fails every call.
fn broken_remote() -> Router {
    Router::new()
        .route("/users", get(|| async { StatusCode::BAD_GATEWAY }).post(|| async { StatusCode::BAD_GATEWAY }))
        .route(
            "/users/:id",
            put(|| async { StatusCode::NOT_FOUND }).delete(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        )
}

async fn start_gateway(remote_url: &str) -> anyhow::Result<String> {
    let state = AppState {
        remote: Arc::new(RemoteUsersClient::new(remote_url)?),
        users: LocalUserStore::new(Arc::new(MemoryStore::default())),
    };
    listen(routes::build_router(state, CorsLayer::very_permissive())).await
}

#[tokio::test]
async fn forwards_and_relays_remote_answers() -> anyhow::Result<()> {
    let remote = listen(fake_remote()).await?;
    let base = start_gateway(&format!("{remote}/users")).await?;
    let c = reqwest::Client::new();

    let res = c.get(format!("{base}/apiurl/users")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?, json!([{"id": 1, "name": "Leanne"}]));

    // the remote answers 201; callers always see 200
    let res = c.post(format!("{base}/apiurl/users")).json(&json!({"name": "New"})).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?, json!({"id": 11, "received": {"name": "New"}}));

    let res = c.put(format!("{base}/apiurl/users/5")).json(&json!({"name": "Upd"})).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?, json!({"id": "5", "received": {"name": "Upd"}}));

    let res = c.delete(format!("{base}/apiurl/users/5")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?, json!({"success": true}));
    Ok(())
}

#[tokio::test]
async fn missing_body_is_forwarded_as_empty_object() -> anyhow::Result<()> {
    let remote = listen(fake_remote()).await?;
    let base = start_gateway(&format!("{remote}/users")).await?;

    let res = reqwest::Client::new().post(format!("{base}/apiurl/users")).send().await?;
    assert_eq!(res.json::<Value>().await?, json!({"id": 11, "received": {}}));
    Ok(())
}

#[tokio::test]
async fn remote_errors_become_operation_messages() -> anyhow::Result<()> {
    let remote = listen(broken_remote()).await?;
    let base = start_gateway(&format!("{remote}/users")).await?;
    let c = reqwest::Client::new();

    let cases = [
        (c.get(format!("{base}/apiurl/users")), "Failed to reach the external API."),
        (c.post(format!("{base}/apiurl/users")).json(&json!({})), "Failed to create user (external API)."),
        (c.put(format!("{base}/apiurl/users/1")).json(&json!({})), "Failed to update user (external API)."),
        (c.delete(format!("{base}/apiurl/users/1")), "Failed to delete user (external API)."),
    ];
    for (req, message) in cases {
        let res = req.send().await?;
        assert_eq!(res.status(), HttpStatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(res.json::<Value>().await?, json!({"error": message}));
    }
    Ok(())
}

#[tokio::test]
async fn unreachable_remote_is_500() -> anyhow::Result<()> {
    let base = start_gateway("http://127.0.0.1:9/users").await?;
    let res = reqwest::get(format!("{base}/apiurl/users")).await?;
    assert_eq!(res.status(), HttpStatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(res.json::<Value>().await?, json!({"error": "Failed to reach the external API."}));
    Ok(())
}

#[tokio::test]
async fn remote_created_status_is_answered_as_ok() -> anyhow::Result<()> {
    let remote = listen(fake_remote()).await?;
    let base = start_gateway(&format!("{remote}/users")).await?;

    let res = reqwest::Client::new()
        .post(format!("{base}/apiurl/users"))
        .json(&json!({"id": 99, "name": "Created"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?, json!({"id": 11, "received": {"id": 99, "name": "Created"}}));
    Ok(())
}
