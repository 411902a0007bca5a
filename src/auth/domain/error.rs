//! Error types for credential verification and authorization.

use super::Operation;
use thiserror::Error;

/// Reasons a presented token fails verification.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VerificationError {
    /// The token is not a well-formed signed token.
    #[error("malformed token: {0}")]
    Malformed(String),

    /// The token signature does not match the shared key.
    #[error("token signature is invalid")]
    BadSignature,

    /// The token's expiry time has passed.
    #[error("token has expired")]
    Expired,

    /// The token decoded but its claims are unusable.
    #[error("invalid token claims: {0}")]
    InvalidClaims(String),
}

/// Errors returned by the authorization gate.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// No bearer credential was presented.
    #[error("missing bearer credential")]
    MissingCredential,

    /// The bearer credential failed verification.
    #[error(transparent)]
    InvalidCredential(#[from] VerificationError),

    /// The caller is authenticated but lacks the privilege the operation needs.
    #[error("caller '{subject}' is not permitted to {operation}")]
    Forbidden {
        /// Subject of the rejected caller.
        subject: String,
        /// Operation that was attempted.
        operation: Operation,
    },
}

impl AuthError {
    /// Returns `true` when the caller could not be identified at all.
    #[must_use]
    pub const fn is_unauthenticated(&self) -> bool {
        matches!(self, Self::MissingCredential | Self::InvalidCredential(_))
    }
}
