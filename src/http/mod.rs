//! HTTP interface for tasks and their unit tests.
//!
//! Routes:
//!
//! ```text
//! GET    /tasks                      list tasks
//! POST   /tasks                      create a task (201)
//! GET    /tasks/{id}                 read a task
//! PUT    /tasks/{id}                 partially update a task
//! DELETE /tasks/{id}                 delete a task and its unit tests (204)
//! GET    /tasks/{id}/tests           list unit tests
//! POST   /tasks/{id}/tests           append a unit test (201)
//! PUT    /tasks/{id}/tests/{testId}  partially update a unit test
//! DELETE /tasks/{id}/tests/{testId}  remove a unit test (204)
//! ```
//!
//! Every route requires `Authorization: Bearer <token>`; mutating routes also
//! require the admin claim.

mod access_log;
mod error;
mod handlers;
mod state;

use axum::{
    Router, middleware,
    routing::{get, put},
};
use tokio::net::TcpListener;
use tracing::{info, warn};

pub use error::ApiError;
pub use state::{AppState, BearerCredential};

/// Builds the router over `state`.
#[must_use]
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/tasks", get(handlers::list_tasks).post(handlers::create_task))
        .route(
            "/tasks/{id}",
            get(handlers::get_task)
                .put(handlers::update_task)
                .delete(handlers::delete_task),
        )
        .route(
            "/tasks/{id}/tests",
            get(handlers::list_unit_tests).post(handlers::append_unit_test),
        )
        .route(
            "/tasks/{id}/tests/{test_id}",
            put(handlers::update_unit_test).delete(handlers::remove_unit_test),
        )
        .layer(middleware::from_fn(access_log::access_log))
        .with_state(state)
}

/// Serves the router on `listener` until Ctrl-C is received.
///
/// # Errors
///
/// Returns the I/O error that stopped the server.
pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    if let Ok(address) = listener.local_addr() {
        info!(%address, "server started");
    }
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown requested"),
        Err(err) => warn!(error = %err, "failed to listen for shutdown signal"),
    }
}
