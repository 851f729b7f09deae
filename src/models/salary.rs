use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use crate::services::Document;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SalaryStatus {
    Pending,
    #[default]
    Paid,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SalaryPayment {
    #[serde(rename = "_id")]
    pub id: String,
    pub employee_email: String,
    pub amount: f64,
    pub month: String,  // free-form label, e.g. "2025-01"
    pub notes: Option<String>,
    pub status: SalaryStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Document for SalaryPayment {
    const COLLECTION: &'static str = "salarypayment";

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
