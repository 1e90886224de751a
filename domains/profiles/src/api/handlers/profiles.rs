//! Identity-scoped profile handlers
//!
//! Handlers are thin: verify (via the `AuthUser` extractor), perform the
//! described store/presence side effects, return the resulting document.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;

use inovacube_auth::AuthUser;

use crate::api::state::ProfilesState;
use crate::domain::entities::Profile;
use crate::error::ProfileError;

/// Request for updating the caller's profile
#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub username: Option<String>,
}

/// GET /api/v1/me - fetch the caller's profile, creating it on first access
pub async fn get_me(
    AuthUser(claims): AuthUser,
    State(state): State<ProfilesState>,
) -> Result<Json<Profile>, ProfileError> {
    let profile = state.repo.get_or_create(&claims.sub).await?;
    state.presence.touch(&claims.sub).await?;
    Ok(Json(profile))
}

/// PATCH /api/v1/me - rename the caller's profile
pub async fn update_me(
    AuthUser(claims): AuthUser,
    State(state): State<ProfilesState>,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<Response, ProfileError> {
    let Some(username) = request.username else {
        // Nothing to change; acknowledge without touching the store.
        return Ok(Json(json!({ "ok": true })).into_response());
    };

    let profile = state.repo.update_username(&claims.sub, &username).await?;
    Ok(Json(profile).into_response())
}
