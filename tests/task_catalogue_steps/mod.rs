//! Step definitions for task catalogue scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
