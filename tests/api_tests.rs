//! End-to-end tests for the authentication gate.

use axum::{
    body::Body,
    http::{Method, Request, StatusCode, header},
    response::Response,
};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde_json::Value;
use tower::ServiceExt;

use basic_auth_api::services::auth::AuthPolicy;

mod common;
use common::{basic_policy, basic_policy_with, test_app, user};

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method(Method::GET)
        .body(Body::empty())
        .unwrap()
}

fn get_basic(uri: &str, credentials: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method(Method::GET)
        .header(
            header::AUTHORIZATION,
            format!("Basic {}", STANDARD.encode(credentials)),
        )
        .body(Body::empty())
        .unwrap()
}

async fn body_json(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn excluded_status_endpoint_needs_no_credentials() {
    let app = test_app(basic_policy(vec![]));

    let response = app.oneshot(get("/api/v1/status")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!({"status": "OK"}));
}

#[tokio::test]
async fn missing_header_is_401_with_contract_body() {
    let app = test_app(basic_policy(vec![user("bob@example.com", "secret")]));

    let response = app.oneshot(get("/api/v1/users/me")).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["error"], "Unauthorized");
}

#[tokio::test]
async fn wrong_scheme_is_403() {
    let app = test_app(basic_policy(vec![user("bob@example.com", "secret")]));

    // Header is present, so the gate moves past the 401 stage; the scheme
    // check then fails to produce an identity.
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/users/me")
                .header(header::AUTHORIZATION, "Bearer abc123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn invalid_base64_is_403() {
    let app = test_app(basic_policy(vec![user("bob@example.com", "secret")]));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/users/me")
                .header(header::AUTHORIZATION, "Basic not-valid-base64!!!")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(response).await["error"], "Forbidden");
}

#[tokio::test]
async fn wrong_password_is_403() {
    let app = test_app(basic_policy(vec![user("bob@example.com", "secret")]));

    let response = app
        .oneshot(get_basic("/api/v1/users/me", "bob@example.com:wrong"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn unknown_user_is_403() {
    let app = test_app(basic_policy(vec![]));

    let response = app
        .oneshot(get_basic("/api/v1/users/me", "nobody@example.com:secret"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn store_failure_reads_as_403_not_500() {
    let app = test_app(basic_policy_with(
        vec![user("bob@example.com", "secret")],
        common::default_excluded_paths(),
        true,
    ));

    let response = app
        .oneshot(get_basic("/api/v1/users/me", "bob@example.com:secret"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn valid_credentials_attach_identity() {
    let app = test_app(basic_policy(vec![user("bob@example.com", "secret")]));

    let response = app
        .oneshot(get_basic("/api/v1/users/me", "bob@example.com:secret"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["email"], "bob@example.com");
    assert!(json.get("password_hash").is_none());
}

#[tokio::test]
async fn password_with_colons_round_trips_through_the_gate() {
    let app = test_app(basic_policy(vec![user("bob@example.com", "p@ss:w:rd")]));

    let response = app
        .oneshot(get_basic("/api/v1/users/me", "bob@example.com:p@ss:w:rd"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn diagnostic_endpoints_bypass_the_gate_and_answer_themselves() {
    let app = test_app(basic_policy(vec![]));
    let response = app.oneshot(get("/api/v1/unauthorized")).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["error"], "Unauthorized");

    let app = test_app(basic_policy(vec![]));
    let response = app.oneshot(get("/api/v1/forbidden")).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(response).await["error"], "Forbidden");
}

#[tokio::test]
async fn unmatched_route_is_404_with_contract_body() {
    let app = test_app(basic_policy(vec![]));

    let response = app.oneshot(get("/no/such/route")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Not found");
}

#[tokio::test]
async fn wildcard_exclusion_skips_the_gate() {
    // /api/v1/users* excluded: /users/me passes the gate unauthenticated,
    // so no identity is attached and the handler answers 404 instead of 401.
    let app = test_app(basic_policy_with(
        vec![user("bob@example.com", "secret")],
        vec!["/api/v1/users*".to_string(), "/api/v1/status/".to_string()],
        false,
    ));

    let response = app.oneshot(get("/api/v1/users/me")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn empty_exclusion_list_gates_even_status() {
    let app = test_app(basic_policy_with(vec![], Vec::new(), false));

    let response = app.oneshot(get("/api/v1/status")).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn disabled_auth_passes_everything_through() {
    let app = test_app(AuthPolicy::NoAuth);
    let response = app.oneshot(get("/api/v1/status")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // No gate means no identity is ever attached; /users/me answers 404.
    let app = test_app(AuthPolicy::NoAuth);
    let response = app.oneshot(get("/api/v1/users/me")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
