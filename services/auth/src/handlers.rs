//! Issuance endpoint handlers

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::state::AppState;

/// Request for the session exchange.
///
/// The upstream player-identity exchange is an external collaborator;
/// this endpoint accepts the already-validated raw identifier.
#[derive(Debug, Deserialize)]
pub struct ExchangeRequest {
    pub mc_uuid: Option<String>,
}

/// Response carrying the signed token and its expiry (epoch seconds)
#[derive(Debug, Serialize)]
pub struct ExchangeResponse {
    pub token: String,
    pub exp: i64,
}

/// GET /healthz
pub async fn healthz() -> Json<serde_json::Value> {
    Json(json!({ "ok": true, "service": "auth" }))
}

/// POST /auth/mc/exchange - exchange a player session for an access token
pub async fn exchange(
    State(state): State<AppState>,
    Json(request): Json<ExchangeRequest>,
) -> Response {
    let subject = match request.mc_uuid.as_deref() {
        Some(subject) if !subject.is_empty() => subject,
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "mc_uuid required" })),
            )
                .into_response();
        }
    };

    match state.issuer.issue(subject) {
        Ok(issued) => {
            tracing::info!(subject, exp = issued.expires_at, "issued access token");
            Json(ExchangeResponse {
                token: issued.token,
                exp: issued.expires_at,
            })
            .into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "token issuance failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "internal_error" })),
            )
                .into_response()
        }
    }
}
