use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use washcli::{server, smartthings, types::ProxyState};

fn test_state() -> Arc<ProxyState> {
    Arc::new(ProxyState {
        api_token: "secret-token".to_string(),
        device_ids: vec!["device-a".to_string(), "device-b".to_string()],
        upstream_token: "upstream-token".to_string(),
    })
}

fn device_request(nr: &str, auth: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(format!("/device/{}", nr));
    if let Some(value) = auth {
        builder = builder.header("authorization", value);
    }
    builder.body(Body::empty()).unwrap()
}

async fn error_body(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_missing_authorization_header_is_unauthorized() {
    let app = server::app(test_state());

    let response = app.oneshot(device_request("1", None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = error_body(response).await;
    assert_eq!(body["error"], "authorization header missing");
}

#[tokio::test]
async fn test_wrong_token_is_forbidden() {
    let app = server::app(test_state());

    let response = app
        .oneshot(device_request("1", Some("Bearer wrong-token")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = error_body(response).await;
    assert_eq!(body["error"], "invalid or missing bearer token");
}

#[tokio::test]
async fn test_non_bearer_scheme_is_forbidden() {
    let app = server::app(test_state());

    let response = app
        .oneshot(device_request("1", Some("Basic secret-token")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_out_of_range_machine_is_bad_request() {
    let app = server::app(test_state());

    // Two devices configured, machine 3 does not exist
    let response = app
        .oneshot(device_request("3", Some("Bearer secret-token")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = error_body(response).await;
    assert_eq!(body["error"], "invalid machine number");
}

#[tokio::test]
async fn test_machine_zero_is_bad_request() {
    let app = server::app(test_state());

    let response = app
        .oneshot(device_request("0", Some("Bearer secret-token")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_non_numeric_machine_is_bad_request() {
    let app = server::app(test_state());

    let response = app
        .oneshot(device_request("two", Some("Bearer secret-token")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unreachable_upstream_is_connection_error() {
    // Point the upstream at a port nothing listens on. The upstream token
    // comes from the router state, so no token variable is needed here.
    unsafe {
        std::env::set_var("SMARTTHINGS_API_URL", "http://127.0.0.1:9/v1");
    }

    let app = server::app(test_state());

    let response = app
        .oneshot(device_request("1", Some("Bearer secret-token")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = error_body(response).await;
    assert_eq!(body["error"], "connection error");
}

#[tokio::test]
async fn test_callback_exchanges_code_once_and_returns_token() {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use axum::{Json, Router, routing::post};
    use serde_json::json;

    // Mock token endpoint on an ephemeral local port, counting exchanges.
    let exchanges = Arc::new(AtomicUsize::new(0));
    let exchange_counter = Arc::clone(&exchanges);
    let mock = Router::new().route(
        "/token",
        post(move || {
            let counter = Arc::clone(&exchange_counter);
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Json(json!({
                    "access_token": "upstream-access-token",
                    "refresh_token": "upstream-refresh-token",
                    "expires_in": 86400,
                    "scope": "r:devices:*"
                }))
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let token_url = format!("http://{}/token", listener.local_addr().unwrap());
    tokio::spawn(async move {
        axum::serve(listener, mock).await.unwrap();
    });

    unsafe {
        std::env::set_var("SMARTTHINGS_TOKEN_URL", token_url);
        std::env::set_var("SMARTTHINGS_CLIENT_ID", "client-123");
        std::env::set_var("SMARTTHINGS_CLIENT_SECRET", "secret-456");
        std::env::set_var(
            "SMARTTHINGS_REDIRECT_URI",
            "http://localhost:3000/oauth/callback",
        );
    }

    let app = server::app(test_state());

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/oauth/callback?code=auth-code-123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    // The access token comes back as the plain-text body.
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(
        String::from_utf8(bytes.to_vec()).unwrap(),
        "upstream-access-token"
    );

    // Exactly one exchange call per callback.
    assert_eq!(exchanges.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_callback_without_code_is_bad_request() {
    let app = server::app(test_state());

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/oauth/callback")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = error_body(response).await;
    assert_eq!(body["error"], "missing authorization code");
}

#[tokio::test]
async fn test_unmatched_route_is_not_found() {
    let app = server::app(test_state());

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/nope")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health_probe() {
    let app = server::app(test_state());

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_authorize_url_carries_code_grant_fields() {
    unsafe {
        std::env::set_var("SMARTTHINGS_AUTH_URL", "https://auth.example/authorize");
        std::env::set_var("SMARTTHINGS_CLIENT_ID", "client-123");
        std::env::set_var(
            "SMARTTHINGS_REDIRECT_URI",
            "http://localhost:3000/oauth/callback",
        );
        std::env::set_var("SMARTTHINGS_SCOPE", "r:devices:*");
    }

    let url = smartthings::auth::build_authorize_url("state-abc");

    assert!(url.starts_with("https://auth.example/authorize?"));
    assert!(url.contains("client_id=client-123"));
    assert!(url.contains("response_type=code"));
    assert!(url.contains("redirect_uri=http://localhost:3000/oauth/callback"));
    assert!(url.contains("scope=r:devices:*"));
    assert!(url.contains("state=state-abc"));
}
