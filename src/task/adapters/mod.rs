//! Adapter implementations for the task store port.
//!
//! - [`memory::InMemoryTaskStore`]: thread-safe in-memory storage used by
//!   tests and by the server when no database is configured
//! - [`postgres::PostgresTaskStore`]: `PostgreSQL` persistence using Diesel

pub mod memory;
pub mod postgres;
