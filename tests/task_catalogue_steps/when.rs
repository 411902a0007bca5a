//! When steps for task catalogue BDD scenarios.

use axum::http::Method;
use rstest_bdd_macros::when;
use serde_json::json;

use super::world::CatalogueWorld;

#[when(r#"the caller creates a task named "{name}" at level {level:u64}"#)]
fn create_task(world: &mut CatalogueWorld, name: String, level: u64) -> Result<(), eyre::Report> {
    let response = world.request(
        Method::POST,
        "/tasks",
        Some(json!({ "name": name, "level": level })),
    )?;
    let created_id = response.str_field("id").map(str::to_owned);
    if created_id.is_some() {
        world.task_id = created_id;
    }
    Ok(())
}

#[when("the caller lists the tasks")]
fn list_tasks(world: &mut CatalogueWorld) -> Result<(), eyre::Report> {
    world.request(Method::GET, "/tasks", None)?;
    Ok(())
}

#[when(r#"the caller renames the task to "{name}""#)]
fn rename_task(world: &mut CatalogueWorld, name: String) -> Result<(), eyre::Report> {
    let id = world.task_id()?;
    world.request(
        Method::PUT,
        &format!("/tasks/{id}"),
        Some(json!({ "name": name })),
    )?;
    Ok(())
}

#[when("the caller deletes the task")]
fn delete_task(world: &mut CatalogueWorld) -> Result<(), eyre::Report> {
    let id = world.task_id()?;
    world.request(Method::DELETE, &format!("/tasks/{id}"), None)?;
    Ok(())
}

#[when(r#"the caller appends a "{language}" unit test"#)]
fn append_unit_test(world: &mut CatalogueWorld, language: String) -> Result<(), eyre::Report> {
    let id = world.task_id()?;
    let response = world.request(
        Method::POST,
        &format!("/tasks/{id}/tests"),
        Some(json!({
            "initCode": "initCode",
            "testCode": "testCode",
            "language": language,
            "scoreFactor": 1.0
        })),
    )?;
    let created_id = response.str_field("id").map(str::to_owned);
    if created_id.is_some() {
        world.unit_test_id = created_id;
    }
    Ok(())
}

#[when(r#"the caller changes the unit test language to "{language}""#)]
fn change_language(world: &mut CatalogueWorld, language: String) -> Result<(), eyre::Report> {
    let task_id = world.task_id()?;
    let test_id = world.unit_test_id()?;
    world.request(
        Method::PUT,
        &format!("/tasks/{task_id}/tests/{test_id}"),
        Some(json!({ "language": language })),
    )?;
    Ok(())
}

#[when("the caller removes the unit test")]
fn remove_unit_test(world: &mut CatalogueWorld) -> Result<(), eyre::Report> {
    let task_id = world.task_id()?;
    let test_id = world.unit_test_id()?;
    world.request(
        Method::DELETE,
        &format!("/tasks/{task_id}/tests/{test_id}"),
        None,
    )?;
    Ok(())
}

#[when("the caller removes the unit test through another task")]
fn remove_through_other_task(world: &mut CatalogueWorld) -> Result<(), eyre::Report> {
    let test_id = world.unit_test_id()?;
    let other = world.request(
        Method::POST,
        "/tasks",
        Some(json!({ "name": "other", "level": 2 })),
    )?;
    let other_id = other
        .str_field("id")
        .ok_or_else(|| eyre::eyre!("other task has no id"))?
        .to_owned();
    world.request(
        Method::DELETE,
        &format!("/tasks/{other_id}/tests/{test_id}"),
        None,
    )?;
    Ok(())
}
