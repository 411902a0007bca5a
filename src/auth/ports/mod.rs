//! Port contracts for authorization.

pub mod verifier;

pub use verifier::CredentialVerifier;
