use axum::{
    extract::DefaultBodyLimit,
    routing::{get, patch, post},
    Router,
};
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};
use crate::{handlers, state::AppState};

pub fn build_router(state: AppState) -> Router {
    let max_body_size = state.config.server.max_body_size;

    Router::new()
        // Health
        .route("/", get(handlers::read_root))
        .route("/test", get(handlers::test_database))

        // Auth
        .route("/auth/register", post(handlers::register_user))
        .route("/auth/login", post(handlers::login))
        .route("/me", get(handlers::me))

        // Records
        .route("/tasks", post(handlers::create_task).get(handlers::list_tasks))
        .route("/tasks/:task_id", patch(handlers::update_task))
        .route("/reports", post(handlers::create_report).get(handlers::list_reports))
        .route("/salary", post(handlers::create_salary).get(handlers::list_salary))
        .route("/finance", post(handlers::create_finance).get(handlers::list_finance))

        // Body size limit from config
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(max_body_size))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
