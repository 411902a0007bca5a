//! Then steps for task catalogue BDD scenarios.

use axum::http::{Method, StatusCode};
use rstest_bdd_macros::then;
use serde_json::Value;

use super::world::CatalogueWorld;

fn listed_len(body: Option<&Value>) -> Result<u64, eyre::Report> {
    let items = body
        .and_then(Value::as_array)
        .ok_or_else(|| eyre::eyre!("expected a JSON array, got {body:?}"))?;
    Ok(u64::try_from(items.len())?)
}

#[then("the response status is {status:u64}")]
fn response_status(world: &CatalogueWorld, status: u64) -> Result<(), eyre::Report> {
    let actual = world.last_response()?.status;
    eyre::ensure!(
        actual == StatusCode::from_u16(u16::try_from(status)?)?,
        "expected status {status}, got {actual}"
    );
    Ok(())
}

#[then("the catalogue lists {count:u64} tasks")]
fn catalogue_lists(world: &mut CatalogueWorld, count: u64) -> Result<(), eyre::Report> {
    let response = world.request(Method::GET, "/tasks", None)?;
    let listed = listed_len(response.body.as_ref())?;
    eyre::ensure!(listed == count, "expected {count} tasks, found {listed}");
    Ok(())
}

#[then(r#"the task is named "{name}" at level {level:u64}"#)]
fn task_is_named(world: &mut CatalogueWorld, name: String, level: u64) -> Result<(), eyre::Report> {
    let id = world.task_id()?;
    let response = world.request(Method::GET, &format!("/tasks/{id}"), None)?;
    let body = response
        .body
        .as_ref()
        .ok_or_else(|| eyre::eyre!("task response has no body"))?;
    eyre::ensure!(
        body.get("name").and_then(Value::as_str) == Some(name.as_str()),
        "expected name {name}, got {body}"
    );
    eyre::ensure!(
        body.get("level").and_then(Value::as_u64) == Some(level),
        "expected level {level}, got {body}"
    );
    Ok(())
}

#[then("the task can no longer be found")]
fn task_is_gone(world: &mut CatalogueWorld) -> Result<(), eyre::Report> {
    let id = world.task_id()?;
    let response = world.request(Method::GET, &format!("/tasks/{id}"), None)?;
    eyre::ensure!(
        response.status == StatusCode::NOT_FOUND,
        "expected 404 for deleted task, got {}",
        response.status
    );
    Ok(())
}

#[then("the task has {count:u64} unit tests")]
fn task_has_unit_tests(world: &mut CatalogueWorld, count: u64) -> Result<(), eyre::Report> {
    let id = world.task_id()?;
    let response = world.request(Method::GET, &format!("/tasks/{id}/tests"), None)?;
    let listed = listed_len(response.body.as_ref())?;
    eyre::ensure!(listed == count, "expected {count} unit tests, found {listed}");
    Ok(())
}

#[then(r#"the unit test languages are "{languages}""#)]
fn unit_test_languages(world: &mut CatalogueWorld, languages: String) -> Result<(), eyre::Report> {
    let id = world.task_id()?;
    let response = world.request(Method::GET, &format!("/tasks/{id}/tests"), None)?;
    let actual: Vec<&str> = response
        .body
        .as_ref()
        .and_then(Value::as_array)
        .ok_or_else(|| eyre::eyre!("expected a JSON array of unit tests"))?
        .iter()
        .filter_map(|test| test.get("language").and_then(Value::as_str))
        .collect();
    let expected: Vec<&str> = languages.split(", ").collect();
    eyre::ensure!(
        actual == expected,
        "expected languages {expected:?}, got {actual:?}"
    );
    Ok(())
}
