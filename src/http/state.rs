//! Shared request state and the bearer credential extractor.

use std::{convert::Infallible, sync::Arc};

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::{
    auth::{
        domain::{Caller, Operation, bearer_token},
        ports::CredentialVerifier,
        services::AuthGate,
    },
    task::{
        ports::TaskStore,
        services::{TaskRepository, UnitTestCollection},
    },
};

use super::ApiError;

/// Services shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    tasks: Arc<TaskRepository<dyn TaskStore>>,
    unit_tests: Arc<UnitTestCollection<dyn TaskStore>>,
    gate: Arc<AuthGate<dyn CredentialVerifier>>,
}

impl AppState {
    /// Wires the services over one store and one verifier.
    #[must_use]
    pub fn new(store: Arc<dyn TaskStore>, verifier: Arc<dyn CredentialVerifier>) -> Self {
        Self {
            tasks: Arc::new(TaskRepository::new(Arc::clone(&store))),
            unit_tests: Arc::new(UnitTestCollection::new(store)),
            gate: Arc::new(AuthGate::new(verifier)),
        }
    }

    pub(super) fn tasks(&self) -> &TaskRepository<dyn TaskStore> {
        &self.tasks
    }

    pub(super) fn unit_tests(&self) -> &UnitTestCollection<dyn TaskStore> {
        &self.unit_tests
    }

    pub(super) fn authorize(
        &self,
        credential: &BearerCredential,
        operation: Operation,
    ) -> Result<Caller, ApiError> {
        self.gate
            .authorize(credential.token(), operation)
            .map_err(ApiError::from)
    }
}

/// Token taken from the `Authorization: Bearer` header, if any.
///
/// Extraction never fails; an absent or non-bearer header yields no token and
/// is rejected by the gate.
#[derive(Debug, Clone, Default)]
pub struct BearerCredential(Option<String>);

impl BearerCredential {
    /// Returns the raw token.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl<S> FromRequestParts<S> for BearerCredential
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(bearer_token)
            .map(str::to_owned);
        Ok(Self(token))
    }
}
