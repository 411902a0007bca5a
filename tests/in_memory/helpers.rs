//! Shared fixtures for in-memory integration tests.

use std::sync::Arc;

use rstest::fixture;
use taskbench::task::{
    adapters::memory::InMemoryTaskStore,
    services::{CreateUnitTestRequest, TaskRepository, UnitTestCollection},
};

/// Both task services over one shared store.
pub struct Services {
    pub tasks: TaskRepository<InMemoryTaskStore>,
    pub unit_tests: UnitTestCollection<InMemoryTaskStore>,
}

/// Provides services over a fresh in-memory store.
#[fixture]
pub fn services() -> Services {
    let store = Arc::new(InMemoryTaskStore::new());
    Services {
        tasks: TaskRepository::new(Arc::clone(&store)),
        unit_tests: UnitTestCollection::new(store),
    }
}

/// A valid unit test payload with the given language.
pub fn unit_test_in(language: &str) -> CreateUnitTestRequest {
    CreateUnitTestRequest::new("initCode", "testCode", language, 1.0)
}
