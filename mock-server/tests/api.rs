use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, MockResponse, MockServer};
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn post(uri: &str, content_type: &str, body: &str) -> Request<String> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(http::header::ACCEPT, "application/json")
        .header(http::header::CONTENT_TYPE, content_type)
        .header(http::header::AUTHORIZATION, "Basic Og==")
        .body(body.to_string())
        .unwrap()
}

// --- queued responses ---

#[tokio::test]
async fn serves_enqueued_response() {
    let server = MockServer::new();
    server.enqueue(MockResponse::raw_json(r#"{"document_tone":{}}"#));

    let resp = app(server)
        .oneshot(post("/v3/tone?version=2017-09-21", "text/plain", "hello"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(http::header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
    let json = body_json(resp).await;
    assert_eq!(json, serde_json::json!({ "document_tone": {} }));
}

#[tokio::test]
async fn serves_enqueued_error_status() {
    let server = MockServer::new();
    server.enqueue(
        MockResponse::raw_json(r#"{"code":401,"error":"Unauthorized"}"#).with_status(StatusCode::UNAUTHORIZED),
    );

    let resp = app(server)
        .oneshot(post("/v3/tone_chat?version=2017-09-21", "application/json", "{}"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn empty_queue_returns_500() {
    let server = MockServer::new();
    let resp = app(server.clone())
        .oneshot(post("/v3/tone", "text/plain", "hello"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_bytes(resp).await;
    assert_eq!(&body[..], b"no mock response for POST /v3/tone");
    assert_eq!(server.request_count(), 1);
}

#[tokio::test]
async fn default_response_matches_path_without_query() {
    let server = MockServer::new();
    server.set_default("/v3/tone_chat", MockResponse::raw_json(r#"{"utterances_tone":[]}"#));

    let resp = app(server)
        .oneshot(post("/v3/tone_chat?version=2017-09-21", "application/json", "{}"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, serde_json::json!({ "utterances_tone": [] }));
}

// --- recording ---

#[tokio::test]
async fn records_method_path_headers_and_body() {
    let server = MockServer::new();
    server.enqueue(MockResponse::raw_json("{}"));

    app(server.clone())
        .oneshot(post(
            "/v3/tone?version=2017-09-21&tones=emotion%2Clanguage%2Csocial",
            "text/html; charset=utf-8",
            "<p>Watching Youtube is fun!</p>",
        ))
        .await
        .unwrap();

    let request = server.take_request().unwrap();
    assert_eq!(request.method, "POST");
    assert_eq!(request.path, "/v3/tone?version=2017-09-21&tones=emotion%2Clanguage%2Csocial");
    assert_eq!(request.header("Accept"), Some("application/json"));
    assert_eq!(request.header("content-type"), Some("text/html; charset=utf-8"));
    assert_eq!(request.header("authorization"), Some("Basic Og=="));
    assert_eq!(request.body, "<p>Watching Youtube is fun!</p>");
    assert!(server.take_request().is_none());
}

#[tokio::test]
async fn records_requests_in_arrival_order() {
    let server = MockServer::new();
    server.enqueue(MockResponse::raw_json("{}"));
    server.enqueue(MockResponse::raw_json("{}"));

    let router = app(server.clone());
    router.clone().oneshot(post("/first", "text/plain", "1")).await.unwrap();
    router.oneshot(post("/second", "text/plain", "2")).await.unwrap();

    assert_eq!(server.request_count(), 2);
    assert_eq!(server.take_request().unwrap().path, "/first");
    assert_eq!(server.take_request().unwrap().path, "/second");
}
