//! Credential and token errors

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Ways a presented token can fail verification.
///
/// All variants are non-retryable; the caller maps them to an
/// unauthenticated/forbidden response, never a silent default.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("token signature is invalid")]
    InvalidSignature,

    #[error("token issuer or audience mismatch")]
    ClaimMismatch,

    #[error("token has expired")]
    Expired,

    #[error("token is not yet valid")]
    NotYetValid,

    #[error("token is malformed")]
    Malformed,
}

/// Credential failure at the request boundary.
///
/// Absence of a credential is a different condition from presence of a bad
/// one: `MissingCredential` is 401, `InvalidCredential` is 403.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("missing bearer credential")]
    MissingCredential,

    #[error("invalid bearer credential")]
    InvalidCredential,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, code) = match self {
            AuthError::MissingCredential => (StatusCode::UNAUTHORIZED, "missing token"),
            AuthError::InvalidCredential => (StatusCode::FORBIDDEN, "invalid token"),
        };

        (status, Json(json!({ "error": code }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_error_status_codes() {
        let cases = [
            (AuthError::MissingCredential, StatusCode::UNAUTHORIZED),
            (AuthError::InvalidCredential, StatusCode::FORBIDDEN),
        ];

        for (error, expected_status) in cases {
            let response = error.into_response();
            assert_eq!(response.status(), expected_status);
        }
    }

    #[tokio::test]
    async fn auth_error_bodies_are_flat_json() {
        let response = AuthError::MissingCredential.into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({ "error": "missing token" }));

        let response = AuthError::InvalidCredential.into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({ "error": "invalid token" }));
    }
}
