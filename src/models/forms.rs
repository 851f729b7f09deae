use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use uuid::Uuid;
use super::{
    AuthUser, Role, Task, TaskStatus, Report, SalaryPayment, SalaryStatus,
    FinanceRecord, FinanceKind,
    validation,
};
use crate::errors::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub role: Role,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
    pub user: AuthUser,
}

#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    pub title: String,
    pub description: Option<String>,
    pub assignee_email: String,
    pub due_date: Option<String>,
}

// Absent and null fields are both left untouched.
#[derive(Debug, Deserialize, Default)]
pub struct UpdateTaskRequest {
    pub status: Option<TaskStatus>,
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateReportRequest {
    pub date: String,
    pub summary: String,
    pub hours_worked: f64,
}

#[derive(Debug, Deserialize)]
pub struct CreateSalaryRequest {
    pub employee_email: String,
    pub amount: f64,
    pub month: String,
    pub notes: Option<String>,
    #[serde(default)]
    pub status: SalaryStatus,
}

#[derive(Debug, Deserialize)]
pub struct CreateFinanceRequest {
    pub kind: FinanceKind,
    pub amount: f64,
    pub category: String,
    pub description: Option<String>,
    pub reference: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct AssigneeFilter {
    pub assignee: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct OwnerFilter {
    pub employee: Option<String>,
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

impl RegisterRequest {
    /// Also normalizes `email` in place.
    pub fn validate(&mut self) -> AppResult<()> {
        validation::not_blank("name", &self.name)?;
        self.email = validation::email("email", &self.email)?;
        if self.password.is_empty() {
            return Err(AppError::Validation("password must not be empty".into()));
        }
        Ok(())
    }
}

impl LoginRequest {
    /// Also normalizes `email` in place.
    pub fn validate(&mut self) -> AppResult<()> {
        self.email = validation::email("email", &self.email)?;
        Ok(())
    }
}

impl CreateTaskRequest {
    pub fn into_task(self, now: DateTime<Utc>) -> AppResult<Task> {
        validation::not_blank("title", &self.title)?;
        let assignee_email = validation::email("assignee_email", &self.assignee_email)?;
        let due_date = self
            .due_date
            .as_deref()
            .filter(|raw| !raw.is_empty())
            .map(|raw| validation::iso_date("due_date", raw))
            .transpose()?;

        Ok(Task {
            id: new_id(),
            title: self.title,
            description: self.description,
            assignee_email,
            status: TaskStatus::Pending,
            due_date,
            created_at: now,
            updated_at: now,
        })
    }
}

impl UpdateTaskRequest {
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.title.is_none() && self.description.is_none()
    }

    pub fn validate(&self) -> AppResult<()> {
        if let Some(title) = &self.title {
            validation::not_blank("title", title)?;
        }
        Ok(())
    }

    /// Merges the present fields into `task` and stamps `updated_at`.
    pub fn apply(self, task: &mut Task, now: DateTime<Utc>) {
        if let Some(status) = self.status {
            task.status = status;
        }
        if let Some(title) = self.title {
            task.title = title;
        }
        if let Some(description) = self.description {
            task.description = Some(description);
        }
        task.updated_at = now;
    }
}

impl CreateReportRequest {
    pub fn into_report(self, employee_email: &str, now: DateTime<Utc>) -> AppResult<Report> {
        let report_date = validation::iso_date("date", &self.date)?;
        validation::not_blank("summary", &self.summary)?;
        validation::hours_worked(self.hours_worked)?;

        Ok(Report {
            id: new_id(),
            employee_email: employee_email.to_string(),
            report_date,
            summary: self.summary,
            hours_worked: self.hours_worked,
            created_at: now,
            updated_at: now,
        })
    }
}

impl CreateSalaryRequest {
    pub fn into_payment(self, now: DateTime<Utc>) -> AppResult<SalaryPayment> {
        let employee_email = validation::email("employee_email", &self.employee_email)?;
        validation::non_negative("amount", self.amount)?;
        validation::not_blank("month", &self.month)?;

        Ok(SalaryPayment {
            id: new_id(),
            employee_email,
            amount: self.amount,
            month: self.month,
            notes: self.notes,
            status: self.status,
            created_at: now,
            updated_at: now,
        })
    }
}

impl CreateFinanceRequest {
    pub fn into_record(self, now: DateTime<Utc>) -> AppResult<FinanceRecord> {
        validation::non_negative("amount", self.amount)?;
        validation::not_blank("category", &self.category)?;

        Ok(FinanceRecord {
            id: new_id(),
            kind: self.kind,
            amount: self.amount,
            category: self.category,
            description: self.description,
            reference: self.reference,
            created_at: now,
            updated_at: now,
        })
    }
}
