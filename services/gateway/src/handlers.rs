//! Gateway endpoint handlers

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;

use inovacube_auth::AuthUser;
use inovacube_presence::PresenceError;

use crate::state::AppState;

/// Gateway-local error type for handler side effects
#[derive(Debug)]
pub enum ApiError {
    Presence(PresenceError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Presence(err) => {
                tracing::error!(error = %err, "presence touch failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "internal_error" })),
                )
                    .into_response()
            }
        }
    }
}

impl From<PresenceError> for ApiError {
    fn from(err: PresenceError) -> Self {
        ApiError::Presence(err)
    }
}

/// Token identity echoed by the protected introspection route
#[derive(Debug, Serialize)]
pub struct TokenIdentity {
    pub sub: String,
    pub scope: String,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user: TokenIdentity,
}

/// GET /healthz
pub async fn healthz() -> Json<serde_json::Value> {
    Json(json!({ "ok": true, "service": "api-gateway" }))
}

/// GET /api/ping
pub async fn ping() -> Json<serde_json::Value> {
    Json(json!({ "pong": true, "ts": chrono::Utc::now().to_rfc3339() }))
}

/// POST /api/v1/heartbeat - refresh the caller's presence marker
pub async fn heartbeat(
    AuthUser(claims): AuthUser,
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.presence.touch(&claims.sub).await?;
    Ok(Json(json!({ "ok": true })))
}

/// GET /api/secure/me - echo the authenticated token identity
pub async fn secure_me(AuthUser(claims): AuthUser) -> Json<MeResponse> {
    Json(MeResponse {
        user: TokenIdentity {
            sub: claims.sub,
            scope: claims.scope,
            iat: claims.iat,
            exp: claims.exp,
        },
    })
}
