mod auth;
mod task;
mod report;
mod salary;
mod finance;
mod health;

pub use auth::{register_user, login, me};
pub use task::{create_task, list_tasks, update_task};
pub use report::{create_report, list_reports};
pub use salary::{create_salary, list_salary};
pub use finance::{create_finance, list_finance};
pub use health::{read_root, test_database};

use crate::errors::{AppError, AppResult};
use crate::services::{Document, Repository};

// Persists a freshly built record and reads it back by its assigned id.
async fn store_and_reload<T: Document>(repo: &Repository, record: &T) -> AppResult<T> {
    if !repo.insert(record).await? {
        return Err(AppError::Duplicate(format!(
            "{} {} already exists",
            T::COLLECTION,
            record.id()
        )));
    }

    repo.find(record.id())
        .await?
        .ok_or_else(|| AppError::NotFound(format!("{} {} not found", T::COLLECTION, record.id())))
}
