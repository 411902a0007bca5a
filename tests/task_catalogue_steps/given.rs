//! Given steps for task catalogue BDD scenarios.

use axum::http::StatusCode;
use rstest_bdd_macros::given;
use serde_json::json;

use super::world::{CatalogueWorld, run_async};

#[given("an administrator")]
fn an_administrator(world: &mut CatalogueWorld) -> Result<(), eyre::Report> {
    world.token = Some(world.app.token("foo", true)?);
    Ok(())
}

#[given("a reader")]
fn a_reader(world: &mut CatalogueWorld) -> Result<(), eyre::Report> {
    world.token = Some(world.app.token("bar", false)?);
    Ok(())
}

#[given("an anonymous caller")]
fn an_anonymous_caller(world: &mut CatalogueWorld) {
    world.token = None;
}

#[given(r#"an existing task named "{name}" at level {level:u64}"#)]
fn an_existing_task(
    world: &mut CatalogueWorld,
    name: String,
    level: u64,
) -> Result<(), eyre::Report> {
    let admin = world.app.token("foo", true)?;
    let response = run_async(world.app.send(
        axum::http::Method::POST,
        "/tasks",
        Some(&admin),
        Some(json!({ "name": name, "level": level })),
    ))?;
    eyre::ensure!(
        response.status == StatusCode::CREATED,
        "task setup returned {}",
        response.status
    );
    let id = response
        .str_field("id")
        .ok_or_else(|| eyre::eyre!("created task has no id"))?;
    world.task_id = Some(id.to_owned());
    Ok(())
}
