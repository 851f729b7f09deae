use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Utc;
use crate::errors::{AppError, AppResult};
use crate::middleware::{CurrentUser, ValidJson};
use crate::models::{validation, AssigneeFilter, CreateTaskRequest, Task, UpdateTaskRequest};
use crate::services::policy::{self, Action};
use crate::state::AppState;
use super::store_and_reload;

pub async fn create_task(
    State(state): State<AppState>,
    CurrentUser(current): CurrentUser,
    payload: AppResult<ValidJson<CreateTaskRequest>>,
) -> AppResult<Json<Task>> {
    policy::require(&current, Action::CreateTask)?;
    let ValidJson(payload) = payload?;

    let task = payload.into_task(Utc::now())?;
    let stored = store_and_reload(&state.repo, &task).await?;

    tracing::info!("Created task {} for {}", stored.id, stored.assignee_email);
    Ok(Json(stored))
}

pub async fn list_tasks(
    State(state): State<AppState>,
    CurrentUser(current): CurrentUser,
    Query(filter): Query<AssigneeFilter>,
) -> AppResult<Json<Vec<Task>>> {
    let requested = filter
        .assignee
        .as_deref()
        .map(|assignee| validation::email("assignee", assignee))
        .transpose()?;
    let scope = policy::owner_scope(&current, requested);
    tracing::debug!("Listing tasks for {} scoped to {:?}", current.email, scope);

    let tasks = state
        .repo
        .list_where(|task: &Task| scope.as_ref().map_or(true, |email| &task.assignee_email == email))
        .await?;
    Ok(Json(tasks))
}

pub async fn update_task(
    State(state): State<AppState>,
    CurrentUser(current): CurrentUser,
    Path(task_id): Path<String>,
    ValidJson(payload): ValidJson<UpdateTaskRequest>,
) -> AppResult<Json<Task>> {
    let task_id = validation::record_id("task", &task_id)?;

    let mut task = state
        .repo
        .find::<Task>(&task_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Task not found".into()))?;

    if !policy::can_modify_task(&current, &task) {
        tracing::warn!("{} tried to modify task {} assigned to {}", current.email, task.id, task.assignee_email);
        return Err(AppError::Forbidden("Not allowed".into()));
    }

    // Nothing to change: no write, updated_at untouched.
    if payload.is_empty() {
        return Ok(Json(task));
    }
    payload.validate()?;

    payload.apply(&mut task, Utc::now());
    state.repo.save(&task).await?;

    let updated = state
        .repo
        .find::<Task>(&task_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Task not found".into()))?;

    tracing::info!("Task {} updated by {}", updated.id, current.email);
    Ok(Json(updated))
}
