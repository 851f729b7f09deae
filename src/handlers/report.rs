use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Utc;
use crate::errors::AppResult;
use crate::middleware::{CurrentUser, ValidJson};
use crate::models::{validation, CreateReportRequest, OwnerFilter, Report};
use crate::services::policy::{self, Action};
use crate::state::AppState;
use super::store_and_reload;

// Reports are self-reported: the author is always the caller.
pub async fn create_report(
    State(state): State<AppState>,
    CurrentUser(current): CurrentUser,
    payload: AppResult<ValidJson<CreateReportRequest>>,
) -> AppResult<Json<Report>> {
    policy::require(&current, Action::CreateReport)?;
    let ValidJson(payload) = payload?;

    let report = payload.into_report(&current.email, Utc::now())?;
    let stored = store_and_reload(&state.repo, &report).await?;

    tracing::info!("{} submitted report for {}", stored.employee_email, stored.report_date);
    Ok(Json(stored))
}

pub async fn list_reports(
    State(state): State<AppState>,
    CurrentUser(current): CurrentUser,
    Query(filter): Query<OwnerFilter>,
) -> AppResult<Json<Vec<Report>>> {
    let requested = filter
        .employee
        .as_deref()
        .map(|employee| validation::email("employee", employee))
        .transpose()?;
    let scope = policy::owner_scope(&current, requested);
    tracing::debug!("Listing reports for {} scoped to {:?}", current.email, scope);

    let reports = state
        .repo
        .list_where(|report: &Report| {
            scope.as_ref().map_or(true, |email| &report.employee_email == email)
        })
        .await?;
    Ok(Json(reports))
}
