//! Request handlers for task and unit test routes.
//!
//! Every handler authorizes first, then parses path identifiers, then reads
//! the body, so an unauthenticated caller never learns whether a resource
//! exists.

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};

use crate::{
    auth::domain::Operation,
    task::{
        domain::{Task, TaskId, UnitTest, UnitTestId},
        services::{
            CreateTaskRequest, CreateUnitTestRequest, UpdateTaskRequest, UpdateUnitTestRequest,
        },
    },
};

use super::{ApiError, AppState, BearerCredential};

type Body<T> = Result<Json<T>, JsonRejection>;
type Segments<T> = Result<Path<T>, PathRejection>;

fn parse_task_id(raw: &str) -> Result<TaskId, ApiError> {
    raw.parse().map_err(|_| ApiError::UnknownId {
        resource: "task",
        raw: raw.to_owned(),
    })
}

fn parse_unit_test_id(raw: &str) -> Result<UnitTestId, ApiError> {
    raw.parse().map_err(|_| ApiError::UnknownId {
        resource: "unit test",
        raw: raw.to_owned(),
    })
}

pub(super) async fn list_tasks(
    State(state): State<AppState>,
    credential: BearerCredential,
) -> Result<Json<Vec<Task>>, ApiError> {
    state.authorize(&credential, Operation::ListTasks)?;
    Ok(Json(state.tasks().list().await?))
}

pub(super) async fn create_task(
    State(state): State<AppState>,
    credential: BearerCredential,
    body: Body<CreateTaskRequest>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    state.authorize(&credential, Operation::CreateTask)?;
    let Json(request) = body?;
    let task = state.tasks().create(request).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

pub(super) async fn get_task(
    State(state): State<AppState>,
    credential: BearerCredential,
    path: Segments<String>,
) -> Result<Json<Task>, ApiError> {
    state.authorize(&credential, Operation::GetTask)?;
    let Path(task_id) = path?;
    let id = parse_task_id(&task_id)?;
    Ok(Json(state.tasks().get(id).await?))
}

pub(super) async fn update_task(
    State(state): State<AppState>,
    credential: BearerCredential,
    path: Segments<String>,
    body: Body<UpdateTaskRequest>,
) -> Result<Json<Task>, ApiError> {
    state.authorize(&credential, Operation::UpdateTask)?;
    let Path(task_id) = path?;
    let id = parse_task_id(&task_id)?;
    let Json(request) = body?;
    Ok(Json(state.tasks().update(id, request).await?))
}

pub(super) async fn delete_task(
    State(state): State<AppState>,
    credential: BearerCredential,
    path: Segments<String>,
) -> Result<StatusCode, ApiError> {
    state.authorize(&credential, Operation::DeleteTask)?;
    let Path(task_id) = path?;
    let id = parse_task_id(&task_id)?;
    state.tasks().delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub(super) async fn list_unit_tests(
    State(state): State<AppState>,
    credential: BearerCredential,
    path: Segments<String>,
) -> Result<Json<Vec<UnitTest>>, ApiError> {
    state.authorize(&credential, Operation::ListUnitTests)?;
    let Path(task_id) = path?;
    let id = parse_task_id(&task_id)?;
    Ok(Json(state.unit_tests().list(id).await?))
}

pub(super) async fn append_unit_test(
    State(state): State<AppState>,
    credential: BearerCredential,
    path: Segments<String>,
    body: Body<CreateUnitTestRequest>,
) -> Result<(StatusCode, Json<UnitTest>), ApiError> {
    state.authorize(&credential, Operation::AppendUnitTest)?;
    let Path(task_id) = path?;
    let id = parse_task_id(&task_id)?;
    let Json(request) = body?;
    let unit_test = state.unit_tests().append(id, request).await?;
    Ok((StatusCode::CREATED, Json(unit_test)))
}

pub(super) async fn update_unit_test(
    State(state): State<AppState>,
    credential: BearerCredential,
    path: Segments<(String, String)>,
    body: Body<UpdateUnitTestRequest>,
) -> Result<Json<UnitTest>, ApiError> {
    state.authorize(&credential, Operation::UpdateUnitTest)?;
    let Path((task_id, test_id)) = path?;
    let task = parse_task_id(&task_id)?;
    let test = parse_unit_test_id(&test_id)?;
    let Json(request) = body?;
    Ok(Json(state.unit_tests().update(task, test, request).await?))
}

pub(super) async fn remove_unit_test(
    State(state): State<AppState>,
    credential: BearerCredential,
    path: Segments<(String, String)>,
) -> Result<StatusCode, ApiError> {
    state.authorize(&credential, Operation::RemoveUnitTest)?;
    let Path((task_id, test_id)) = path?;
    let task = parse_task_id(&task_id)?;
    let test = parse_unit_test_id(&test_id)?;
    state.unit_tests().remove(task, test).await?;
    Ok(StatusCode::NO_CONTENT)
}
