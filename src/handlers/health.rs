use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::{json, Value};
use crate::state::AppState;

pub async fn read_root() -> Json<Value> {
    Json(json!({ "message": "Company Operations Backend Running" }))
}

#[derive(Debug, Serialize)]
pub struct Diagnostics {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

fn presence(value: &Option<String>) -> String {
    if value.is_some() { "✅ Set" } else { "❌ Not Set" }.to_string()
}

fn truncated(err: impl std::fmt::Display) -> String {
    err.to_string().chars().take(80).collect()
}

/// Best-effort report on configuration and store reachability. Never fails.
pub async fn test_database(State(state): State<AppState>) -> Json<Diagnostics> {
    let database = &state.config.database;
    let mut report = Diagnostics {
        backend: "✅ Running".to_string(),
        database: "❌ Not Available".to_string(),
        database_url: presence(&database.url),
        database_name: presence(&database.name),
        connection_status: "Not Connected".to_string(),
        collections: Vec::new(),
    };

    let store = state.repo.store();
    match store.ping().await {
        Ok(()) => {
            report.database = "✅ Available".to_string();
            report.connection_status = "Connected".to_string();
            match store.collections().await {
                Ok(collections) => {
                    report.collections = collections;
                    report.database = "✅ Connected & Working".to_string();
                }
                Err(e) => {
                    tracing::warn!("Listing collections failed: {}", e);
                    report.database = format!("⚠️ Connected but Error: {}", truncated(e));
                }
            }
        }
        Err(e) => {
            tracing::warn!("Store ping failed: {}", e);
            report.database = format!("❌ Error: {}", truncated(e));
        }
    }

    Json(report)
}
