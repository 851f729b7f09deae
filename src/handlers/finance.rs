use axum::{extract::State, Json};
use chrono::Utc;
use crate::errors::AppResult;
use crate::middleware::{CurrentUser, ValidJson};
use crate::models::{CreateFinanceRequest, FinanceRecord};
use crate::services::policy::{self, Action};
use crate::state::AppState;
use super::store_and_reload;

pub async fn create_finance(
    State(state): State<AppState>,
    CurrentUser(current): CurrentUser,
    payload: AppResult<ValidJson<CreateFinanceRequest>>,
) -> AppResult<Json<FinanceRecord>> {
    // Role before body: employees get 403 even for a malformed payload.
    policy::require(&current, Action::CreateFinance)?;
    let ValidJson(payload) = payload?;

    let record = payload.into_record(Utc::now())?;
    let stored = store_and_reload(&state.repo, &record).await?;

    tracing::info!("Added {:?} record {} ({})", stored.kind, stored.id, stored.category);
    Ok(Json(stored))
}

pub async fn list_finance(
    State(state): State<AppState>,
    CurrentUser(current): CurrentUser,
) -> AppResult<Json<Vec<FinanceRecord>>> {
    policy::require(&current, Action::ListFinance)?;

    let records = state.repo.list_where(|_: &FinanceRecord| true).await?;
    Ok(Json(records))
}
