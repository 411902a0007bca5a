//! Shared HTTP harness for router integration and behaviour tests.

use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use mockable::DefaultClock;
use secrecy::SecretString;
use serde_json::Value;
use taskbench::{
    auth::{adapters::JwtCredentialVerifier, domain::Claims, ports::CredentialVerifier},
    http::{AppState, router},
    task::adapters::memory::InMemoryTaskStore,
};
use tower::ServiceExt;

const SECRET: &str = "taskbench-test-secret";
const BODY_LIMIT: usize = 1024 * 1024;

/// Status and decoded JSON body of one response.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Option<Value>,
}

impl TestResponse {
    /// Returns a string field of the body.
    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.body.as_ref()?.get(key)?.as_str()
    }
}

/// Router over a fresh in-memory store, plus a signer for its tokens.
pub struct TestApp {
    router: Router,
    signer: Arc<JwtCredentialVerifier<DefaultClock>>,
}

impl TestApp {
    /// Builds an app with an empty store.
    pub fn new() -> Self {
        let signer = Arc::new(JwtCredentialVerifier::new(
            &SecretString::from(SECRET.to_owned()),
            DefaultClock,
        ));
        let verifier: Arc<dyn CredentialVerifier> = signer.clone();
        let state = AppState::new(Arc::new(InMemoryTaskStore::new()), verifier);
        Self {
            router: router(state),
            signer,
        }
    }

    /// Signs a token for `subject`.
    ///
    /// # Errors
    ///
    /// Returns an error if signing fails.
    pub fn token(&self, subject: &str, admin: bool) -> Result<String, eyre::Report> {
        Ok(self.signer.issue(&Claims::new(subject, admin))?)
    }

    /// Signs a token carrying arbitrary `claims`.
    ///
    /// # Errors
    ///
    /// Returns an error if signing fails.
    pub fn token_with(&self, claims: &Claims) -> Result<String, eyre::Report> {
        Ok(self.signer.issue(claims)?)
    }

    /// Sends one request through the router.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be built or the body is not
    /// JSON.
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> Result<TestResponse, eyre::Report> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(bearer) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {bearer}"));
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&json)?))?,
            None => builder.body(Body::empty())?,
        };
        self.send_request(request).await
    }

    /// Sends a prepared request through the router.
    ///
    /// # Errors
    ///
    /// Returns an error if the body cannot be read or is not JSON.
    pub async fn send_request(&self, request: Request<Body>) -> Result<TestResponse, eyre::Report> {
        let response = self.router.clone().oneshot(request).await?;
        let status = response.status();
        let bytes = to_bytes(response.into_body(), BODY_LIMIT).await?;
        let body = if bytes.is_empty() {
            None
        } else {
            Some(serde_json::from_slice(&bytes)?)
        };
        Ok(TestResponse { status, body })
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}
