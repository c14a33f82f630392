use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::prefs::theme::{load_theme, toggle_theme, Theme};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ThemeResponse {
    pub theme: Theme,
}

/// GET /api/v1/theme
pub async fn handle_get_theme(State(state): State<AppState>) -> Result<Json<ThemeResponse>, AppError> {
    let theme = load_theme(state.prefs.as_ref()).await?;
    Ok(Json(ThemeResponse { theme }))
}

/// POST /api/v1/theme/toggle
pub async fn handle_toggle_theme(
    State(state): State<AppState>,
) -> Result<Json<ThemeResponse>, AppError> {
    let theme = toggle_theme(state.prefs.as_ref()).await?;
    Ok(Json(ThemeResponse { theme }))
}
