use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use crate::services::Document;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FinanceKind {
    Revenue,
    Expense,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FinanceRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub kind: FinanceKind,
    pub amount: f64,
    pub category: String,
    pub description: Option<String>,
    pub reference: Option<String>,  // invoice, PO or transaction ref
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Document for FinanceRecord {
    const COLLECTION: &'static str = "financerecord";

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
