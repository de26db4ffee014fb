//! Example consumer: a small axum service whose handlers answer with api-envelope responses.
//!
//! Run from repo root: `cargo run -p example-consumer`
//! Settings come from the environment (or `.env`): `BIND_ADDR`, `RUST_LOG`.

use api_envelope::{
    created, method_not_allowed, no_content, not_found, success, ApiResponse, EmptyResponse,
    ServiceError,
};
use axum::{
    extract::Path,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
}

#[derive(Serialize)]
struct User {
    id: u64,
    email: String,
}

#[derive(Deserialize)]
struct NewUser {
    email: String,
}

const TAKEN_EMAIL: &str = "admin@example.com";

async fn health() -> ApiResponse<HealthBody> {
    success(HealthBody { status: "ok" }, "healthy")
}

async fn version() -> ApiResponse<serde_json::Value> {
    success(
        serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION")
        }),
        "version",
    )
}

async fn get_user(Path(id): Path<u64>) -> Result<ApiResponse<User>, ServiceError> {
    if id != 1 {
        return Err(ServiceError::not_found(format!("user {} not found", id)));
    }
    let user = User {
        id,
        email: TAKEN_EMAIL.into(),
    };
    Ok(success(user, "user found"))
}

async fn create_user(Json(body): Json<NewUser>) -> Result<ApiResponse<User>, ServiceError> {
    if !body.email.contains('@') {
        return Err(ServiceError::validation("email is invalid"));
    }
    if body.email == TAKEN_EMAIL {
        return Err(ServiceError::duplicate("email already registered"));
    }
    tracing::info!(email = %body.email, "user created");
    Ok(created(User { id: 2, email: body.email }, "user created"))
}

async fn delete_user(Path(id): Path<u64>) -> EmptyResponse {
    tracing::info!(id, "user deleted");
    no_content("user deleted")
}

async fn fallback() -> EmptyResponse {
    not_found("route not found")
}

async fn wrong_method() -> EmptyResponse {
    method_not_allowed("method not allowed")
}

fn app() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/version", get(version))
        .route("/users", post(create_user).fallback(wrong_method))
        .route("/users/:id", get(get_user).delete(delete_user).fallback(wrong_method))
        .fallback(fallback)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("api_envelope=info,example_consumer=info")
            }),
        )
        .init();

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".into());
    let listener = TcpListener::bind(&bind_addr).await?;
    tracing::info!("Example consumer listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app()).await?;
    Ok(())
}
