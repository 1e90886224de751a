//! Axum extractors for authentication
//!
//! Generic over any state `S` where `TokenVerifier: FromRef<S>`.
//! This is axum's idiomatic nested-state pattern.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::claims::Claims;
use crate::error::AuthError;
use crate::verifier::TokenVerifier;

/// Authenticated subject extractor.
///
/// Protected handlers take this as their first argument; requests without
/// a valid bearer credential short-circuit with 401/403 before the
/// handler body runs.
#[derive(Debug)]
pub struct AuthUser(pub Claims);

impl<S> FromRequestParts<S> for AuthUser
where
    TokenVerifier: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let verifier = TokenVerifier::from_ref(state);

        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or(AuthError::MissingCredential)?;

        let claims = verifier.verify_bearer(auth_header)?;

        Ok(AuthUser(claims))
    }
}
