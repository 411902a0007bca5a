//! HMAC-signed JSON Web Token verification.

use std::collections::HashSet;

use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode,
    errors::{Error as JwtError, ErrorKind},
};
use mockable::Clock;
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::auth::{
    domain::{Claims, VerificationError},
    ports::CredentialVerifier,
};

/// Error returned when a token cannot be signed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("failed to sign token: {0}")]
pub struct TokenSigningError(pub String);

/// Verifies HS256 tokens signed with a shared secret.
///
/// Expiry is checked against the injected clock rather than by the JWT
/// library, so tokens without an `exp` claim are accepted.
pub struct JwtCredentialVerifier<C>
where
    C: Clock + Send + Sync,
{
    decoding_key: DecodingKey,
    encoding_key: EncodingKey,
    validation: Validation,
    clock: C,
}

impl<C> JwtCredentialVerifier<C>
where
    C: Clock + Send + Sync,
{
    /// Creates a verifier for tokens signed with `secret`.
    #[must_use]
    pub fn new(secret: &SecretString, clock: C) -> Self {
        let key = secret.expose_secret().as_bytes();
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.required_spec_claims = HashSet::new();
        Self {
            decoding_key: DecodingKey::from_secret(key),
            encoding_key: EncodingKey::from_secret(key),
            validation,
            clock,
        }
    }

    /// Signs `claims` with the shared secret.
    ///
    /// # Errors
    ///
    /// Returns [`TokenSigningError`] when the claims cannot be encoded.
    pub fn issue(&self, claims: &Claims) -> Result<String, TokenSigningError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|err| TokenSigningError(err.to_string()))
    }
}

impl<C> CredentialVerifier for JwtCredentialVerifier<C>
where
    C: Clock + Send + Sync,
{
    fn verify(&self, token: &str) -> Result<Claims, VerificationError> {
        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|err| map_jwt_error(&err))?
            .claims;
        if claims.sub.trim().is_empty() {
            return Err(VerificationError::InvalidClaims(
                "subject must not be empty".to_owned(),
            ));
        }
        if let Some(exp) = claims.exp
            && exp <= self.clock.utc().timestamp()
        {
            return Err(VerificationError::Expired);
        }
        Ok(claims)
    }
}

fn map_jwt_error(err: &JwtError) -> VerificationError {
    match err.kind() {
        ErrorKind::InvalidSignature => VerificationError::BadSignature,
        ErrorKind::ExpiredSignature => VerificationError::Expired,
        ErrorKind::InvalidToken | ErrorKind::Base64(_) | ErrorKind::Utf8(_) => {
            VerificationError::Malformed(err.to_string())
        }
        _ => VerificationError::InvalidClaims(err.to_string()),
    }
}
