//! Access token (JWT) verification.
//!
//! Only answers "who is calling". What that caller may see is decided by
//! `services::authz`.
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::Deserialize;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("invalid access token: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
    #[error("subject is not a user id")]
    InvalidSubject,
}

#[derive(Debug, Deserialize)]
struct AccessClaims {
    sub: String,
    jti: Option<String>,
}

/// Claims the rest of the request pipeline cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedClaims {
    pub user_id: Uuid,
    pub jti: Option<String>,
}

pub trait AccessTokenVerifier: Send + Sync + 'static {
    fn verify(&self, token: &str) -> Result<VerifiedClaims, VerifyError>;
}

pub struct JwtVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl JwtVerifier {
    pub fn new(
        key: DecodingKey,
        algorithm: Algorithm,
        issuer: &str,
        audience: &str,
        leeway_seconds: u64,
    ) -> Self {
        let mut validation = Validation::new(algorithm);
        validation.set_issuer(&[issuer]);
        validation.set_audience(&[audience]);
        validation.set_required_spec_claims(&["exp", "iss", "aud", "sub"]);
        validation.leeway = leeway_seconds;

        Self { key, validation }
    }

    pub fn from_rsa_pem(
        public_key_pem: &str,
        issuer: &str,
        audience: &str,
        leeway_seconds: u64,
    ) -> Result<Self, VerifyError> {
        let key = DecodingKey::from_rsa_pem(public_key_pem.as_bytes())?;
        Ok(Self::new(
            key,
            Algorithm::RS256,
            issuer,
            audience,
            leeway_seconds,
        ))
    }
}

impl std::fmt::Debug for JwtVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // 鍵はログに出さない
        f.debug_struct("JwtVerifier")
            .field("algorithms", &self.validation.algorithms)
            .finish_non_exhaustive()
    }
}

impl AccessTokenVerifier for JwtVerifier {
    fn verify(&self, token: &str) -> Result<VerifiedClaims, VerifyError> {
        let data = decode::<AccessClaims>(token, &self.key, &self.validation)?;
        let user_id =
            Uuid::parse_str(&data.claims.sub).map_err(|_| VerifyError::InvalidSubject)?;

        Ok(VerifiedClaims {
            user_id,
            jti: data.claims.jti,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::time::{SystemTime, UNIX_EPOCH};

    use jsonwebtoken::{EncodingKey, Header, encode};
    use serde_json::json;

    use super::*;

    const SECRET: &[u8] = b"resource-api-test-secret";

    fn verifier() -> JwtVerifier {
        JwtVerifier::new(
            DecodingKey::from_secret(SECRET),
            Algorithm::HS256,
            "https://auth.example.com",
            "resource-api",
            0,
        )
    }

    fn now() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs()
    }

    fn sign(claims: serde_json::Value) -> String {
        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap()
    }

    #[test]
    fn valid_token_yields_user_id() {
        let user_id = Uuid::new_v4();
        let token = sign(json!({
            "sub": user_id.to_string(),
            "iss": "https://auth.example.com",
            "aud": "resource-api",
            "exp": now() + 300,
            "jti": "abc",
        }));

        let claims = verifier().verify(&token).unwrap();
        assert_eq!(claims.user_id, user_id);
        assert_eq!(claims.jti.as_deref(), Some("abc"));
    }

    #[test]
    fn expired_token_is_rejected() {
        let token = sign(json!({
            "sub": Uuid::new_v4().to_string(),
            "iss": "https://auth.example.com",
            "aud": "resource-api",
            "exp": now() - 600,
        }));

        assert!(matches!(verifier().verify(&token), Err(VerifyError::Jwt(_))));
    }

    #[test]
    fn wrong_audience_is_rejected() {
        let token = sign(json!({
            "sub": Uuid::new_v4().to_string(),
            "iss": "https://auth.example.com",
            "aud": "someone-else",
            "exp": now() + 300,
        }));

        assert!(matches!(verifier().verify(&token), Err(VerifyError::Jwt(_))));
    }

    #[test]
    fn non_uuid_subject_is_rejected() {
        let token = sign(json!({
            "sub": "admin",
            "iss": "https://auth.example.com",
            "aud": "resource-api",
            "exp": now() + 300,
        }));

        assert!(matches!(
            verifier().verify(&token),
            Err(VerifyError::InvalidSubject)
        ));
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(verifier().verify("not-a-jwt").is_err());
    }
}
