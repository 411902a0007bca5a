//! Shared world state for task catalogue BDD scenarios.

use axum::http::Method;
use rstest::fixture;
use serde_json::Value;

use crate::test_helpers::{TestApp, TestResponse};

/// Scenario world for catalogue behaviour tests.
pub struct CatalogueWorld {
    pub app: TestApp,
    pub token: Option<String>,
    pub task_id: Option<String>,
    pub unit_test_id: Option<String>,
    pub last_response: Option<TestResponse>,
}

impl CatalogueWorld {
    /// Creates a world over an empty store with no caller identity.
    #[must_use]
    pub fn new() -> Self {
        Self {
            app: TestApp::new(),
            token: None,
            task_id: None,
            unit_test_id: None,
            last_response: None,
        }
    }

    /// Sends a request as the current caller and records the response.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent.
    pub fn request(
        &mut self,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> Result<&TestResponse, eyre::Report> {
        let response = run_async(
            self.app
                .send(method, uri, self.token.as_deref(), body),
        )?;
        Ok(self.last_response.insert(response))
    }

    /// Returns the id of the task under test.
    ///
    /// # Errors
    ///
    /// Returns an error if no task has been created.
    pub fn task_id(&self) -> Result<String, eyre::Report> {
        self.task_id
            .clone()
            .ok_or_else(|| eyre::eyre!("missing task id in scenario world"))
    }

    /// Returns the id of the unit test under test.
    ///
    /// # Errors
    ///
    /// Returns an error if no unit test has been appended.
    pub fn unit_test_id(&self) -> Result<String, eyre::Report> {
        self.unit_test_id
            .clone()
            .ok_or_else(|| eyre::eyre!("missing unit test id in scenario world"))
    }

    /// Returns the most recent response.
    ///
    /// # Errors
    ///
    /// Returns an error if no request has been sent.
    pub fn last_response(&self) -> Result<&TestResponse, eyre::Report> {
        self.last_response
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing response in scenario world"))
    }
}

impl Default for CatalogueWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> CatalogueWorld {
    CatalogueWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
