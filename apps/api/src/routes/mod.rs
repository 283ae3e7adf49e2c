pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::dashboard::handlers as dashboard_handlers;
use crate::extraction::handlers as extraction_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/resumes",
            post(extraction_handlers::handle_upload).get(dashboard_handlers::handle_list_records),
        )
        .route(
            "/api/v1/resumes/export",
            get(dashboard_handlers::handle_export_csv),
        )
        .with_state(state)
}
