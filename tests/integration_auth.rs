mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{post_json, send, setup_test_app};
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn test_register_success() {
    let (status, body) = send(
        setup_test_app(),
        post_json(
            "/api/auth/register",
            &json!({ "email": "a@b.com", "password": "12345678" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "User registered successfully" }));
}

#[tokio::test]
async fn test_login_success_with_short_password() {
    let (status, body) = send(
        setup_test_app(),
        post_json(
            "/api/auth/login",
            &json!({ "email": "a@b.com", "password": "x" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "message": "Login successful", "token": "mock-jwt-token" })
    );
}

#[tokio::test]
async fn test_register_short_password() {
    let (status, body) = send(
        setup_test_app(),
        post_json(
            "/api/auth/register",
            &json!({ "email": "a@b.com", "password": "1234567" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "error": "password must be at least 8 characters long" })
    );
}

#[tokio::test]
async fn test_missing_email_rejected_on_both_routes() {
    for uri in ["/api/auth/register", "/api/auth/login"] {
        let (status, body) = send(
            setup_test_app(),
            post_json(uri, &json!({ "password": "12345678" })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(body["error"], "email is required", "{}", uri);
    }
}

#[tokio::test]
async fn test_malformed_email_rejected_on_both_routes() {
    for email in ["not-an-email", "", "a@", "@b.com", "a@b"] {
        for uri in ["/api/auth/register", "/api/auth/login"] {
            let (status, body) = send(
                setup_test_app(),
                post_json(uri, &json!({ "email": email, "password": "12345678" })),
            )
            .await;

            assert_eq!(status, StatusCode::BAD_REQUEST, "{} {}", uri, email);
            let message = body["error"].as_str().unwrap();
            assert!(!message.is_empty());
        }
    }
}

#[tokio::test]
async fn test_only_first_error_is_reported() {
    let (status, body) = send(
        setup_test_app(),
        post_json(
            "/api/auth/register",
            &json!({ "email": "nope", "password": "short" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "email must be a valid email" }));
}

#[tokio::test]
async fn test_login_missing_password() {
    let (status, body) = send(
        setup_test_app(),
        post_json("/api/auth/login", &json!({ "email": "a@b.com" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "password is required");
}

#[tokio::test]
async fn test_empty_body_object() {
    let (status, body) = send(
        setup_test_app(),
        post_json("/api/auth/login", &json!({})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "email is required");
}

#[tokio::test]
async fn test_unknown_field_not_allowed() {
    let (status, body) = send(
        setup_test_app(),
        post_json(
            "/api/auth/register",
            &json!({ "email": "a@b.com", "password": "12345678", "role": "admin" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "role is not allowed");
}

#[tokio::test]
async fn test_field_errors_win_over_unknown_field() {
    let (status, body) = send(
        setup_test_app(),
        post_json(
            "/api/auth/login",
            &json!({ "password": "x", "role": "admin" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "email is required" }));

    let (status, body) = send(
        setup_test_app(),
        post_json(
            "/api/auth/register",
            &json!({ "email": "a@b.com", "password": "short", "role": "admin" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "password must be at least 8 characters long");
}

#[tokio::test]
async fn test_register_empty_password() {
    let (status, body) = send(
        setup_test_app(),
        post_json(
            "/api/auth/register",
            &json!({ "email": "a@b.com", "password": "" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "password is not allowed to be empty" }));
}

#[tokio::test]
async fn test_wrong_field_type() {
    let (status, body) = send(
        setup_test_app(),
        post_json(
            "/api/auth/login",
            &json!({ "email": "a@b.com", "password": 12345678 }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid field type in request");
}

#[tokio::test]
async fn test_missing_content_type() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/auth/login")
        .body(Body::from(r#"{"email":"a@b.com","password":"x"}"#))
        .unwrap();

    let (status, body) = send(setup_test_app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Missing 'Content-Type: application/json' header"
    );
}

#[tokio::test]
async fn test_invalid_json_syntax() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/auth/register")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"email": "a@b.com","#))
        .unwrap();

    let (status, body) = send(setup_test_app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid request body");
}

#[tokio::test]
async fn test_same_body_validates_the_same_twice() {
    let body = json!({ "email": "a@b.com", "password": "12345678" });

    let first = send(setup_test_app(), post_json("/api/auth/register", &body)).await;
    let second = send(setup_test_app(), post_json("/api/auth/register", &body)).await;

    assert_eq!(first, second);
    assert_eq!(first.0, StatusCode::OK);
}

#[tokio::test]
async fn test_health() {
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let (status, body) = send(setup_test_app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_openapi_document_lists_auth_routes() {
    let request = Request::builder()
        .uri("/api-docs/openapi.json")
        .body(Body::empty())
        .unwrap();

    let (status, body) = send(setup_test_app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"].get("/api/auth/login").is_some());
    assert!(body["paths"].get("/api/auth/register").is_some());
    assert!(body["components"]["securitySchemes"]
        .get("bearer_auth")
        .is_some());
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let request = Request::builder()
        .uri("/health")
        .header("x-request-id", "trace-42")
        .body(Body::empty())
        .unwrap();

    let response = setup_test_app().oneshot(request).await.unwrap();

    assert_eq!(response.headers()["x-request-id"], "trace-42");
}

#[tokio::test]
async fn test_request_id_is_minted_for_rejected_requests() {
    let response = setup_test_app()
        .oneshot(post_json("/api/auth/login", &json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let id = response.headers()["x-request-id"].to_str().unwrap();
    assert!(uuid::Uuid::parse_str(id).is_ok());
}
