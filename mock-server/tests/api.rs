use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, ListResponse};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn get_request(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(String::new())
        .unwrap()
}

// --- list ---

#[tokio::test]
async fn list_when_empty_returns_200_with_zero_results() {
    let app = app();
    let resp = app.oneshot(get_request("/todo")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: ListResponse = body_json(resp).await;
    assert!(body.results.is_empty());
    assert_eq!(body.total_results, 0);
}

// --- create ---

#[tokio::test]
async fn create_returns_201_with_empty_body() {
    let app = app();
    let resp = app
        .oneshot(json_request("POST", "/todo", r#"{"task":"walk the dog"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    assert!(body_text(resp).await.is_empty());
}

#[tokio::test]
async fn create_rejects_empty_task() {
    let app = app();
    let resp = app
        .oneshot(json_request("POST", "/todo", r#"{"task":"  "}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_rejects_malformed_body() {
    let app = app();
    let resp = app
        .oneshot(json_request("POST", "/todo", r#"{"name":"nope"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- get ---

#[tokio::test]
async fn get_missing_item_returns_404_with_text_body() {
    let app = app();
    let resp = app.oneshot(get_request("/todo/9")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_text(resp).await, "item 9 not found");
}

#[tokio::test]
async fn get_non_numeric_id_returns_400() {
    let app = app();
    let resp = app.oneshot(get_request("/todo/not-a-number")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- complete ---

#[tokio::test]
async fn patch_without_complete_flag_returns_400() {
    let app = app();
    let resp = app
        .oneshot(empty_request("PATCH", "/todo/1"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn patch_missing_item_returns_404() {
    let app = app();
    let resp = app
        .oneshot(empty_request("PATCH", "/todo/5?complete"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- delete ---

#[tokio::test]
async fn delete_missing_item_returns_404() {
    let app = app();
    let resp = app
        .oneshot(empty_request("DELETE", "/todo/3"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- full lifecycle ---

#[tokio::test]
async fn item_lifecycle() {
    use tower::Service;

    let mut app = app().into_service();

    // create
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("POST", "/todo", r#"{"task":"walk the dog"}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    // list — one pending item, ID 1
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/todo"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: ListResponse = body_json(resp).await;
    assert_eq!(body.total_results, 1);
    assert_eq!(body.results[0].task, "walk the dog");
    assert!(!body.results[0].done);
    assert_eq!(body.results[0].completed_at.year(), 1);

    // get — singleton envelope
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/todo/1"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: ListResponse = body_json(resp).await;
    assert_eq!(body.results.len(), 1);

    // complete
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("PATCH", "/todo/1?complete"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    // get — now done with a real completion timestamp
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/todo/1"))
        .await
        .unwrap();
    let body: ListResponse = body_json(resp).await;
    assert!(body.results[0].done);
    assert!(body.results[0].completed_at.year() > 1);

    // delete
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("DELETE", "/todo/1"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    // get after delete — 404
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/todo/1"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // list after delete — empty again
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/todo"))
        .await
        .unwrap();
    let body: ListResponse = body_json(resp).await;
    assert!(body.results.is_empty());
}
