//! Credential verifier implementations.

pub mod jwt;

pub use jwt::{JwtCredentialVerifier, TokenSigningError};
