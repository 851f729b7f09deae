use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Utc;
use crate::errors::AppResult;
use crate::middleware::{CurrentUser, ValidJson};
use crate::models::{validation, CreateSalaryRequest, OwnerFilter, SalaryPayment};
use crate::services::policy::{self, Action};
use crate::state::AppState;
use super::store_and_reload;

pub async fn create_salary(
    State(state): State<AppState>,
    CurrentUser(current): CurrentUser,
    payload: AppResult<ValidJson<CreateSalaryRequest>>,
) -> AppResult<Json<SalaryPayment>> {
    policy::require(&current, Action::CreateSalary)?;
    let ValidJson(payload) = payload?;

    let payment = payload.into_payment(Utc::now())?;
    let stored = store_and_reload(&state.repo, &payment).await?;

    tracing::info!("Recorded salary payment {} for {}", stored.id, stored.employee_email);
    Ok(Json(stored))
}

pub async fn list_salary(
    State(state): State<AppState>,
    CurrentUser(current): CurrentUser,
    Query(filter): Query<OwnerFilter>,
) -> AppResult<Json<Vec<SalaryPayment>>> {
    let requested = filter
        .employee
        .as_deref()
        .map(|employee| validation::email("employee", employee))
        .transpose()?;
    let scope = policy::owner_scope(&current, requested);
    tracing::debug!("Listing salary payments for {} scoped to {:?}", current.email, scope);

    let payments = state
        .repo
        .list_where(|payment: &SalaryPayment| {
            scope.as_ref().map_or(true, |email| &payment.employee_email == email)
        })
        .await?;
    Ok(Json(payments))
}
