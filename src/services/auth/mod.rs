pub mod access_jwt;
pub mod factory;

pub use access_jwt::{AccessTokenVerifier, JwtVerifier, VerifiedClaims, VerifyError};
pub use factory::build_token_verifier;
