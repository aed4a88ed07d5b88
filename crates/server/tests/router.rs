use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
};
use tower::ServiceExt;
use tower_http::cors::CorsLayer;

use server::routes::{self, ServerState};

async fn app() -> axum::Router {
    let db = models::db::connect_in_memory().await.unwrap();
    routes::build_router(ServerState::new(db), CorsLayer::very_permissive())
}

fn json_request(method: Method, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn error_body_has_error_and_detail() {
    let res = app()
        .await
        .oneshot(Request::get("/library/books/NOPE").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"], "Not Found");
    assert_eq!(body["detail"], "book 'NOPE' not found");
}

#[tokio::test]
async fn malformed_json_is_rejected_before_the_service() {
    let res = app()
        .await
        .oneshot(json_request(Method::POST, "/library/authors", "{\"authorId\": "))
        .await
        .unwrap();
    assert!(res.status().is_client_error());
}

#[tokio::test]
async fn unknown_route_is_404() {
    let res = app()
        .await
        .oneshot(Request::get("/library/unknown").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_missing_book_is_404() {
    let body = r#"{"bookId":"B9","bookAuthor":"X","bookTitle":"Y","bookDetail":{"a":1}}"#;
    let res = app()
        .await
        .oneshot(json_request(Method::PUT, "/library/books/B9", body))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
