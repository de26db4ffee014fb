//! Envelopes rendered through an axum router.

use api_envelope::{
    created, no_content, not_found, success, ApiResponse, EmptyResponse, HttpStatus, ServiceError,
};
use axum::{
    body::{to_bytes, Body},
    extract::Path,
    http::{Request, StatusCode},
    response::Response,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tower::ServiceExt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Item {
    id: u32,
    name: String,
}

async fn get_item(Path(id): Path<u32>) -> Result<ApiResponse<Item>, EmptyResponse> {
    if id == 1 {
        Ok(success(Item { id, name: "widget".into() }, "item found"))
    } else {
        Err(not_found(format!("item {} not found", id)))
    }
}

async fn create_item() -> ApiResponse<Item> {
    created(Item { id: 2, name: "gadget".into() }, "item created")
}

async fn delete_item() -> EmptyResponse {
    no_content("item deleted")
}

async fn reserve_item(Path(id): Path<u32>) -> Result<ApiResponse<Item>, ServiceError> {
    match id {
        1 => Err(ServiceError::locked("item 1 is reserved")),
        2 => Err(ServiceError::configuration("warehouse not configured")),
        _ => Err(ServiceError::not_found(format!("item {} not found", id))),
    }
}

fn app() -> Router {
    Router::new()
        .route("/items/:id", get(get_item).delete(delete_item))
        .route("/items", post(create_item))
        .route("/items/:id/reserve", post(reserve_item))
}

async fn send(method: &str, uri: &str) -> Response {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app().oneshot(req).await.unwrap()
}

async fn json_body(resp: Response) -> Value {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn success_envelope_with_data() {
    let resp = send("GET", "/items/1").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["status"], 200);
    assert_eq!(body["message"], "item found");
    assert_eq!(body["data"]["name"], "widget");
}

#[tokio::test]
async fn error_envelope_has_no_data() {
    let resp = send("GET", "/items/9").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = json_body(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["status"], 404);
    assert_eq!(body["message"], "item 9 not found");
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn created_envelope_round_trips() {
    let resp = send("POST", "/items").await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body: ApiResponse<Item> = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body.status, HttpStatus::Created);
    assert_eq!(body.into_data(), Some(Item { id: 2, name: "gadget".into() }));
}

#[tokio::test]
async fn no_content_sends_empty_body() {
    let resp = send("DELETE", "/items/1").await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn service_error_maps_to_http_status() {
    let resp = send("POST", "/items/1/reserve").await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body = json_body(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["status"], 409);
    assert_eq!(body["message"], "item 1 is reserved");

    let resp = send("POST", "/items/2/reserve").await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let resp = send("POST", "/items/3/reserve").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
