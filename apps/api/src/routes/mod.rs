pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::contact::handlers as contact;
use crate::content::handlers as content;
use crate::errors::AppError;
use crate::experience::timeline;
use crate::state::AppState;
use crate::theme::handlers as theme;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Static content
        .route("/api/v1/profile", get(content::handle_get_profile))
        .route("/api/v1/skills", get(content::handle_get_skills))
        .route("/api/v1/projects", get(content::handle_get_projects))
        .route("/api/v1/experience", get(timeline::handle_get_experience))
        // Contact form
        .route("/api/v1/contact", post(contact::handle_submit_contact))
        // Theme preference
        .route(
            "/api/v1/theme",
            get(theme::handle_get_theme).put(theme::handle_set_theme),
        )
        .route("/api/v1/theme/toggle", post(theme::handle_toggle_theme))
        .fallback(not_found)
        .with_state(state)
}
