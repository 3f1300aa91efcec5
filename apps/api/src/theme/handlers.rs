use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::state::AppState;
use crate::theme::ThemePreference;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetThemeRequest {
    pub dark_mode: bool,
}

/// GET /api/v1/theme
pub async fn handle_get_theme(State(state): State<AppState>) -> Json<ThemePreference> {
    Json(state.theme.get().await)
}

/// PUT /api/v1/theme
pub async fn handle_set_theme(
    State(state): State<AppState>,
    Json(req): Json<SetThemeRequest>,
) -> Result<Json<ThemePreference>, AppError> {
    Ok(Json(state.theme.set(req.dark_mode).await?))
}

/// POST /api/v1/theme/toggle
pub async fn handle_toggle_theme(
    State(state): State<AppState>,
) -> Result<Json<ThemePreference>, AppError> {
    Ok(Json(state.theme.toggle().await?))
}
