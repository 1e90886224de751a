//! Auth service composition root
//!
//! Issues signed access tokens for authenticated players. Verifier
//! services hold only the public half of the key pair; this is the one
//! process with the private half.

use axum::{
    routing::{get, post},
    Router,
};
use inovacube_auth::{SigningKey, TokenIssuer, KEY_ID};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod handlers;
pub mod state;

pub use config::Config;
pub use state::AppState;

/// Build the issuance router over an explicit state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(handlers::healthz))
        .route("/auth/mc/exchange", post(handlers::exchange))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Create the application router from configuration.
///
/// Loading the signing key is the only fallible step; a missing or
/// malformed key aborts startup.
pub fn create_app(config: &Config) -> Result<Router, anyhow::Error> {
    let signing_key = SigningKey::from_pem_file(KEY_ID, &config.private_key_file)?;
    let issuer = TokenIssuer::new(signing_key, config.auth.clone(), config.ttl_minutes);

    Ok(router(AppState { issuer }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header::CONTENT_TYPE, Request, StatusCode},
    };
    use inovacube_auth::{test_keys, AuthConfig, TokenVerifier, VerificationKey};
    use serde_json::json;
    use tower::ServiceExt;

    fn test_router() -> Router {
        let key = SigningKey::from_rsa_pem(KEY_ID, test_keys::PRIVATE_KEY.as_bytes()).unwrap();
        let issuer = TokenIssuer::new(key, AuthConfig::default(), 15);
        router(AppState { issuer })
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn healthz_reports_the_service_name() {
        let request = Request::builder()
            .uri("/healthz")
            .body(Body::empty())
            .unwrap();

        let response = test_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({ "ok": true, "service": "auth" })
        );
    }

    #[tokio::test]
    async fn exchange_without_subject_is_400() {
        let request = Request::builder()
            .method("POST")
            .uri("/auth/mc/exchange")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from("{}"))
            .unwrap();

        let response = test_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "mc_uuid required" })
        );
    }

    #[tokio::test]
    async fn exchange_with_empty_subject_is_400() {
        let request = Request::builder()
            .method("POST")
            .uri("/auth/mc/exchange")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"mc_uuid":""}"#))
            .unwrap();

        let response = test_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn exchanged_token_verifies_for_the_subject() {
        let subject = uuid::Uuid::new_v4().to_string();
        let body = serde_json::to_string(&json!({ "mc_uuid": subject })).unwrap();
        let request = Request::builder()
            .method("POST")
            .uri("/auth/mc/exchange")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap();

        let before = chrono::Utc::now().timestamp();
        let response = test_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        let exp = body["exp"].as_i64().unwrap();
        assert!(exp >= before + 15 * 60);

        let key = VerificationKey::from_rsa_pem(test_keys::PUBLIC_KEY.as_bytes()).unwrap();
        let verifier = TokenVerifier::new(key, AuthConfig::default());
        let claims = verifier
            .verify_token(body["token"].as_str().unwrap())
            .unwrap();
        assert_eq!(claims.sub, subject);
        assert_eq!(claims.exp, exp);
    }
}
