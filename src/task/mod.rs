//! Coding-challenge task management for taskbench.
//!
//! Tasks are stored as single documents that embed their ordered unit tests.
//! [`services::TaskRepository`] works on whole tasks and
//! [`services::UnitTestCollection`] works on the unit tests of one task. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]
//!
//! Authorization is not checked here; callers go through
//! [`crate::auth::services::AuthGate`] first.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
