//! Token claims and the authenticated caller derived from them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Claims carried by a bearer token.
///
/// Only `sub`, `admin`, and `exp` influence authorization. Any other claim is
/// retained in [`Claims::extra`] for logging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Identity of the caller.
    pub sub: String,
    /// Whether the caller may perform mutating operations.
    #[serde(default, alias = "isAdmin")]
    pub admin: bool,
    /// Expiry as seconds since the Unix epoch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
    /// Informational claims that carry no authorization meaning.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Claims {
    /// Creates claims for `subject` without an expiry.
    #[must_use]
    pub fn new(subject: impl Into<String>, admin: bool) -> Self {
        Self {
            sub: subject.into(),
            admin,
            exp: None,
            extra: Map::new(),
        }
    }

    /// Sets the expiry instant.
    #[must_use]
    pub fn expiring_at(mut self, at: DateTime<Utc>) -> Self {
        self.exp = Some(at.timestamp());
        self
    }

    /// Adds an informational claim.
    #[must_use]
    pub fn with_claim(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// The identity an authorized request runs as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    subject: String,
    privileged: bool,
}

impl Caller {
    /// Creates a caller.
    #[must_use]
    pub fn new(subject: impl Into<String>, privileged: bool) -> Self {
        Self {
            subject: subject.into(),
            privileged,
        }
    }

    /// Returns the caller's subject.
    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Returns `true` when the caller holds the admin privilege.
    #[must_use]
    pub const fn is_privileged(&self) -> bool {
        self.privileged
    }
}

impl From<Claims> for Caller {
    fn from(claims: Claims) -> Self {
        Self {
            subject: claims.sub,
            privileged: claims.admin,
        }
    }
}

/// Extracts the token from an `Authorization` header value.
///
/// The scheme is matched case-insensitively. Returns `None` for any other
/// scheme or an empty token.
#[must_use]
pub fn bearer_token(header_value: &str) -> Option<&str> {
    let (scheme, raw_token) = header_value.trim().split_once(' ')?;
    let token = raw_token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}
