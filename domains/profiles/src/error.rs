//! Profile domain errors

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errors surfaced by profile operations.
///
/// Client-caused failures carry the wire codes the API contract promises;
/// store and presence failures are logged and surfaced as opaque 500s,
/// never leaked to the client and never swallowed.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("display name violates the character or length rule")]
    InvalidDisplayName,

    #[error("display name is already taken")]
    DisplayNameTaken,

    #[error("profile not found")]
    NotFound,

    #[error("placeholder display names exhausted")]
    PlaceholderExhausted,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Presence(#[from] inovacube_presence::PresenceError),
}

impl IntoResponse for ProfileError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ProfileError::InvalidDisplayName => (StatusCode::BAD_REQUEST, "invalid_username"),
            ProfileError::DisplayNameTaken => (StatusCode::CONFLICT, "username_taken"),
            ProfileError::NotFound => (StatusCode::NOT_FOUND, "not_found"),
            ProfileError::PlaceholderExhausted
            | ProfileError::Database(_)
            | ProfileError::Presence(_) => {
                tracing::error!(error = %self, "profile request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error")
            }
        };

        (status, Json(json!({ "error": code }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_map_to_their_status_codes() {
        let cases = [
            (ProfileError::InvalidDisplayName, StatusCode::BAD_REQUEST),
            (ProfileError::DisplayNameTaken, StatusCode::CONFLICT),
            (ProfileError::NotFound, StatusCode::NOT_FOUND),
            (
                ProfileError::PlaceholderExhausted,
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected_status) in cases {
            let response = error.into_response();
            assert_eq!(response.status(), expected_status);
        }
    }

    #[tokio::test]
    async fn conflict_body_carries_the_wire_code() {
        let response = ProfileError::DisplayNameTaken.into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({ "error": "username_taken" }));
    }
}
