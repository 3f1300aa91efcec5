use axum::{extract::State, Json};

use crate::models::content::{PersonalInfo, Project, SkillCategory};
use crate::state::AppState;

/// GET /api/v1/profile
pub async fn handle_get_profile(State(state): State<AppState>) -> Json<PersonalInfo> {
    Json(state.content.personal_info.clone())
}

/// GET /api/v1/skills
pub async fn handle_get_skills(State(state): State<AppState>) -> Json<Vec<SkillCategory>> {
    Json(state.content.skills.clone())
}

/// GET /api/v1/projects
pub async fn handle_get_projects(State(state): State<AppState>) -> Json<Vec<Project>> {
    Json(state.content.projects.clone())
}
