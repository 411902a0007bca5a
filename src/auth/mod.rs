//! Bearer-token authorization for task and unit test operations.
//!
//! A [`services::AuthGate`] turns an optional bearer credential and a
//! requested [`domain::Operation`] into either an authenticated
//! [`domain::Caller`] or an [`domain::AuthError`]. Token checking sits behind
//! the [`ports::CredentialVerifier`] port; [`adapters::jwt`] provides the
//! HS256 implementation used by the server.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
