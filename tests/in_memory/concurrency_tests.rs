//! Concurrent access to one in-memory store.

use std::{collections::HashSet, sync::Arc};

use eyre::ensure;
use rstest::rstest;
use taskbench::task::{
    adapters::memory::InMemoryTaskStore,
    services::{CreateTaskRequest, TaskRepository},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_creates_all_land_with_distinct_ids() -> eyre::Result<()> {
    let repository = Arc::new(TaskRepository::new(Arc::new(InMemoryTaskStore::new())));

    let handles: Vec<_> = (0..16_i64)
        .map(|level| {
            let shared = Arc::clone(&repository);
            tokio::spawn(async move {
                shared
                    .create(CreateTaskRequest::new(format!("task{level}"), level))
                    .await
            })
        })
        .collect();
    let mut ids = HashSet::new();
    for handle in handles {
        ids.insert(handle.await??.id());
    }

    ensure!(ids.len() == 16, "expected 16 distinct ids, got {}", ids.len());
    ensure!(repository.list().await?.len() == 16, "expected 16 stored tasks");
    Ok(())
}
