//! Credential verification port.

use crate::auth::domain::{Claims, VerificationError};

/// Verifies bearer tokens and yields their claims.
///
/// Implementations must check integrity and expiry. Authorization decisions
/// belong to [`crate::auth::services::AuthGate`].
pub trait CredentialVerifier: Send + Sync {
    /// Verifies `token` and returns its claims.
    ///
    /// # Errors
    ///
    /// Returns [`VerificationError`] when the token is malformed, forged,
    /// expired, or carries unusable claims.
    fn verify(&self, token: &str) -> Result<Claims, VerificationError>;
}
