//! Per-operation authorization.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::auth::{
    domain::{AuthError, Caller, Operation},
    ports::CredentialVerifier,
};

/// Decides whether a bearer credential may perform an operation.
///
/// Any verified caller may read. Mutating operations also require the admin
/// privilege.
pub struct AuthGate<V>
where
    V: CredentialVerifier + ?Sized,
{
    verifier: Arc<V>,
}

impl<V> AuthGate<V>
where
    V: CredentialVerifier + ?Sized,
{
    /// Creates a gate backed by `verifier`.
    #[must_use]
    pub const fn new(verifier: Arc<V>) -> Self {
        Self { verifier }
    }

    /// Authorizes `operation` for the bearer `credential`.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::MissingCredential`] or
    /// [`AuthError::InvalidCredential`] when the caller cannot be identified,
    /// and [`AuthError::Forbidden`] when an unprivileged caller attempts a
    /// mutating operation.
    pub fn authorize(
        &self,
        credential: Option<&str>,
        operation: Operation,
    ) -> Result<Caller, AuthError> {
        let token = credential
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or(AuthError::MissingCredential)?;
        let claims = self.verifier.verify(token).inspect_err(|err| {
            warn!(%operation, error = %err, "rejected bearer credential");
        })?;
        if !claims.extra.is_empty() {
            debug!(
                subject = %claims.sub,
                claims = ?claims.extra.keys().collect::<Vec<_>>(),
                "ignoring informational claims"
            );
        }
        let caller = Caller::from(claims);
        if operation.is_mutating() && !caller.is_privileged() {
            warn!(subject = caller.subject(), %operation, "caller lacks admin privilege");
            return Err(AuthError::Forbidden {
                subject: caller.subject().to_owned(),
                operation,
            });
        }
        debug!(subject = caller.subject(), %operation, "request authorized");
        Ok(caller)
    }
}
