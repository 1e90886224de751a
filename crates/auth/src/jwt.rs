//! Token codec: signing, verification, and bearer-header extraction

use axum::http::HeaderValue;
use jsonwebtoken::{Algorithm, Header, Validation};

use crate::claims::Claims;
use crate::error::{AuthError, TokenError};
use crate::keys::{SigningKey, VerificationKey};

/// Sign a claim set with the private key, binding the key id into the
/// token header.
pub fn sign_claims(key: &SigningKey, claims: &Claims) -> Result<String, jsonwebtoken::errors::Error> {
    let mut header = Header::new(Algorithm::RS256);
    header.kid = Some(key.kid.clone());
    jsonwebtoken::encode(&header, claims, &key.encoding_key)
}

/// Verify a token's signature and claims against the expected issuer and
/// audience.
///
/// Signature verification happens before claim checks, so an authentic but
/// expired token reports `Expired`, never `InvalidSignature`. Validation is
/// exact-time: no leeway, and `nbf` is enforced.
pub fn verify_token(
    key: &VerificationKey,
    token: &str,
    expected_issuer: &str,
    expected_audience: &str,
) -> Result<Claims, TokenError> {
    let mut validation = Validation::new(Algorithm::RS256);
    validation.set_issuer(&[expected_issuer]);
    validation.set_audience(&[expected_audience]);
    validation.validate_nbf = true;
    validation.leeway = 0;

    let token_data = jsonwebtoken::decode::<Claims>(token, &key.decoding_key, &validation)
        .map_err(map_jwt_error)?;

    Ok(token_data.claims)
}

/// Extract the bearer token from an `Authorization` header value.
///
/// A header that does not carry the bearer scheme counts as a missing
/// credential, the same as no header at all.
pub fn extract_bearer_token(header: &HeaderValue) -> Result<String, AuthError> {
    let header_str = header.to_str().map_err(|_| AuthError::MissingCredential)?;

    match header_str.strip_prefix("Bearer ") {
        Some(token) => Ok(token.to_string()),
        None => Err(AuthError::MissingCredential),
    }
}

fn map_jwt_error(err: jsonwebtoken::errors::Error) -> TokenError {
    use jsonwebtoken::errors::ErrorKind;

    match err.kind() {
        ErrorKind::InvalidSignature => TokenError::InvalidSignature,
        ErrorKind::InvalidIssuer | ErrorKind::InvalidAudience => TokenError::ClaimMismatch,
        ErrorKind::ExpiredSignature => TokenError::Expired,
        ErrorKind::ImmatureSignature => TokenError::NotYetValid,
        _ => TokenError::Malformed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::claims::{SCOPE_PLAYER, TOKEN_TYPE_ACCESS};
    use crate::config::{DEFAULT_AUDIENCE, DEFAULT_ISSUER};
    use crate::keys::KEY_ID;
    use crate::test_keys;

    fn signing_key() -> SigningKey {
        SigningKey::from_rsa_pem(KEY_ID, test_keys::PRIVATE_KEY.as_bytes()).unwrap()
    }

    fn verification_key() -> VerificationKey {
        VerificationKey::from_rsa_pem(test_keys::PUBLIC_KEY.as_bytes()).unwrap()
    }

    fn claims_valid_for(secs: i64) -> Claims {
        let now = chrono::Utc::now().timestamp();
        Claims {
            sub: "uuid-1234".to_string(),
            iss: DEFAULT_ISSUER.to_string(),
            aud: DEFAULT_AUDIENCE.to_string(),
            iat: now,
            nbf: now,
            exp: now + secs,
            scope: SCOPE_PLAYER.to_string(),
            typ: TOKEN_TYPE_ACCESS.to_string(),
        }
    }

    fn verify(token: &str) -> Result<Claims, TokenError> {
        verify_token(&verification_key(), token, DEFAULT_ISSUER, DEFAULT_AUDIENCE)
    }

    #[test]
    fn sign_verify_roundtrip() {
        let claims = claims_valid_for(300);
        let token = sign_claims(&signing_key(), &claims).unwrap();

        let decoded = verify(&token).unwrap();
        assert_eq!(decoded, claims);
    }

    #[test]
    fn token_header_carries_key_id() {
        let token = sign_claims(&signing_key(), &claims_valid_for(300)).unwrap();
        let header = jsonwebtoken::decode_header(&token).unwrap();
        assert_eq!(header.alg, Algorithm::RS256);
        assert_eq!(header.kid.as_deref(), Some(KEY_ID));
    }

    #[test]
    fn token_from_another_key_fails_signature_check() {
        let other = SigningKey::from_rsa_pem(KEY_ID, test_keys::OTHER_PRIVATE_KEY.as_bytes()).unwrap();
        let token = sign_claims(&other, &claims_valid_for(300)).unwrap();

        assert_eq!(verify(&token).unwrap_err(), TokenError::InvalidSignature);
    }

    #[test]
    fn tampered_payload_fails_signature_check() {
        let token = sign_claims(&signing_key(), &claims_valid_for(300)).unwrap();

        // Flip one byte of the payload segment, keeping it valid base64url.
        let mut parts: Vec<String> = token.split('.').map(str::to_string).collect();
        let mut payload: Vec<u8> = parts[1].clone().into_bytes();
        payload[0] = if payload[0] == b'A' { b'B' } else { b'A' };
        parts[1] = String::from_utf8(payload).unwrap();
        let tampered = parts.join(".");

        assert_eq!(verify(&tampered).unwrap_err(), TokenError::InvalidSignature);
    }

    #[test]
    fn issuer_mismatch_is_a_claim_mismatch() {
        let mut claims = claims_valid_for(300);
        claims.iss = "someone-else".to_string();
        let token = sign_claims(&signing_key(), &claims).unwrap();

        assert_eq!(verify(&token).unwrap_err(), TokenError::ClaimMismatch);
    }

    #[test]
    fn audience_mismatch_is_a_claim_mismatch() {
        let token = sign_claims(&signing_key(), &claims_valid_for(300)).unwrap();

        let err = verify_token(
            &verification_key(),
            &token,
            DEFAULT_ISSUER,
            "some-other-audience",
        )
        .unwrap_err();
        assert_eq!(err, TokenError::ClaimMismatch);
    }

    #[test]
    fn expired_token_reports_expired_not_invalid_signature() {
        let mut claims = claims_valid_for(300);
        claims.iat = claims.iat - 7200;
        claims.nbf = claims.nbf - 7200;
        claims.exp = chrono::Utc::now().timestamp() - 3600;
        let token = sign_claims(&signing_key(), &claims).unwrap();

        assert_eq!(verify(&token).unwrap_err(), TokenError::Expired);
    }

    #[test]
    fn future_nbf_is_not_yet_valid() {
        let now = chrono::Utc::now().timestamp();
        let mut claims = claims_valid_for(7200);
        claims.nbf = now + 3600;
        let token = sign_claims(&signing_key(), &claims).unwrap();

        assert_eq!(verify(&token).unwrap_err(), TokenError::NotYetValid);
    }

    #[test]
    fn unparseable_token_is_malformed() {
        assert_eq!(verify("not-a-token").unwrap_err(), TokenError::Malformed);
        assert_eq!(verify("").unwrap_err(), TokenError::Malformed);
    }

    #[test]
    fn extracts_bearer_token() {
        let header = HeaderValue::from_static("Bearer abc123");
        assert_eq!(extract_bearer_token(&header).unwrap(), "abc123");

        // No scheme
        let header = HeaderValue::from_static("abc123");
        assert_eq!(
            extract_bearer_token(&header).unwrap_err(),
            AuthError::MissingCredential
        );

        // Wrong scheme
        let header = HeaderValue::from_static("Basic abc123");
        assert_eq!(
            extract_bearer_token(&header).unwrap_err(),
            AuthError::MissingCredential
        );
    }
}
