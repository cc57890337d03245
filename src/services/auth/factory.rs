/// Factory: build the access token verifier from application `Config`.
use std::sync::Arc;

use crate::config::Config;
use crate::services::auth::{AccessTokenVerifier, JwtVerifier, VerifyError};

pub fn build_token_verifier(config: &Config) -> Result<Arc<dyn AccessTokenVerifier>, VerifyError> {
    let verifier = JwtVerifier::from_rsa_pem(
        &config.access_jwt_public_key_pem,
        &config.auth_issuer,
        &config.auth_audience,
        config.access_token_leeway_seconds,
    )?;

    Ok(Arc::new(verifier))
}
