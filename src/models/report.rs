use serde::{Deserialize, Serialize};
use chrono::{DateTime, NaiveDate, Utc};
use crate::services::Document;

// Daily work report, written once by the employee it belongs to.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Report {
    #[serde(rename = "_id")]
    pub id: String,
    pub employee_email: String,
    pub report_date: NaiveDate,
    pub summary: String,
    pub hours_worked: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Document for Report {
    const COLLECTION: &'static str = "report";

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
