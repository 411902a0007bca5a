//! End-to-end flows through the task services.

use super::helpers::{Services, services, unit_test_in};
use eyre::ensure;
use rstest::rstest;
use taskbench::task::services::{
    CreateTaskRequest, TaskServiceError, UpdateTaskRequest, UpdateUnitTestRequest,
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_rename_and_delete_a_task(services: Services) -> eyre::Result<()> {
    let created = services
        .tasks
        .create(CreateTaskRequest::new("task1", 1))
        .await?;
    ensure!(services.tasks.list().await?.len() == 1, "expected one task");

    services
        .tasks
        .update(created.id(), UpdateTaskRequest::new().with_name("task2"))
        .await?;
    let fetched = services.tasks.get(created.id()).await?;
    ensure!(fetched.id() == created.id(), "id changed on update");
    ensure!(fetched.name().as_str() == "task2", "name was not updated");
    ensure!(fetched.level() == 1, "level changed on a name-only update");

    services.tasks.delete(created.id()).await?;
    let after = services.tasks.get(created.id()).await;
    ensure!(
        matches!(after, Err(TaskServiceError::TaskNotFound(_))),
        "expected not found after delete, got {after:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn append_retarget_and_remove_a_unit_test(services: Services) -> eyre::Result<()> {
    let task = services
        .tasks
        .create(CreateTaskRequest::new("task1", 1))
        .await?;
    let appended = services
        .unit_tests
        .append(task.id(), unit_test_in("java"))
        .await?;
    ensure!(
        services.unit_tests.list(task.id()).await?.len() == 1,
        "expected one unit test"
    );

    let updated = services
        .unit_tests
        .update(
            task.id(),
            appended.id(),
            UpdateUnitTestRequest::new().with_language("scala"),
        )
        .await?;
    ensure!(updated.language().as_str() == "scala", "language not updated");
    ensure!(updated.init_code() == "initCode", "init code changed");
    let listed = services.unit_tests.list(task.id()).await?;
    ensure!(listed == vec![updated], "listed unit tests differ from update");

    services.unit_tests.remove(task.id(), appended.id()).await?;
    ensure!(
        services.unit_tests.list(task.id()).await?.is_empty(),
        "unit test was not removed"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_updates_leave_the_unit_test_sequence_alone(services: Services) -> eyre::Result<()> {
    let task = services
        .tasks
        .create(CreateTaskRequest::new("task1", 1))
        .await?;
    for language in ["java", "scala", "kotlin"] {
        services
            .unit_tests
            .append(task.id(), unit_test_in(language))
            .await?;
    }
    let before = services.unit_tests.list(task.id()).await?;

    services
        .tasks
        .update(task.id(), UpdateTaskRequest::new().with_level(5))
        .await?;

    ensure!(
        services.unit_tests.list(task.id()).await? == before,
        "unit tests changed on task update"
    );
    Ok(())
}
