//! Taskbench: a resource server for coding-challenge tasks.
//!
//! A task carries a name, a difficulty level, and an ordered sequence of unit
//! tests. Callers present a bearer token; any valid token may read, and only
//! tokens carrying the admin claim may change anything.
//!
//! # Architecture
//!
//! Taskbench follows hexagonal architecture principles:
//!
//! - **Domain**: Validated value types with no infrastructure dependencies
//! - **Ports**: Trait interfaces for storage and credential verification
//! - **Adapters**: In-memory and `PostgreSQL` stores, HS256 token verifier
//! - **Services**: Task and unit test operations, per-operation authorization
//!
//! # Modules
//!
//! - [`task`]: Tasks, unit tests, and their storage
//! - [`auth`]: Bearer-token verification and authorization
//! - [`http`]: Axum routes mapping requests onto the services
//! - [`config`]: JSON configuration loading
//! - [`telemetry`]: Tracing subscriber setup

pub mod auth;
pub mod config;
pub mod http;
pub mod task;
pub mod telemetry;
