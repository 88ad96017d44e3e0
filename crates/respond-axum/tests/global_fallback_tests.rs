// Rust guideline compliant 2026-10-16

//! Process-wide helpers without an installed configuration.

use axum::{body::to_bytes, http::StatusCode, response::IntoResponse};
use respond_axum::global;
use respond_core::{ResponseConfig, ResponseRequest};
use serde_json::{json, Value};

#[tokio::test]
async fn test_helpers_fall_back_to_friendly_names() {
    let cases = [
        (global::ok(json!({"a": 1})), StatusCode::OK, "Ok"),
        (
            global::unauthenticated(json!({})),
            StatusCode::UNAUTHORIZED,
            "Unauthenticated User",
        ),
        (
            global::forbidden(json!({})),
            StatusCode::FORBIDDEN,
            "Forbidden Resource",
        ),
        (
            global::not_found(json!({})),
            StatusCode::NOT_FOUND,
            "Resource Not Found",
        ),
        (
            global::validation_errors(json!({})),
            StatusCode::UNPROCESSABLE_ENTITY,
            "Validation Errors",
        ),
        (
            global::failed(json!({})),
            StatusCode::INTERNAL_SERVER_ERROR,
            "Server Error",
        ),
        (
            global::maintenance(json!({})),
            StatusCode::SERVICE_UNAVAILABLE,
            "Maintenance",
        ),
        (
            global::respond(ResponseRequest::not_found().with_message("Gone")),
            StatusCode::NOT_FOUND,
            "Gone",
        ),
    ];

    for (reply, status, message) in cases {
        let response = reply.into_response();
        assert_eq!(response.status(), status);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let payload: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(payload["message"], message);
    }

    let error = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
    let response = global::failed_with_error(&error).into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let payload: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(payload["message"], "Server Error");
    assert_eq!(payload["data"], json!({}));

    // The fallback is settled once a helper has run.
    assert!(respond_axum::install(ResponseConfig::default()).is_err());
}
