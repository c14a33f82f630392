pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post, put},
    Router,
};

use crate::form::handlers as form;
use crate::form::photo::MAX_PHOTO_BYTES;
use crate::prefs::handlers as prefs;
use crate::render::handlers as render;
use crate::state::AppState;

// Room for multipart boundaries and headers around a maximum-size photo.
const PHOTO_BODY_LIMIT: usize = MAX_PHOTO_BYTES + 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Form
        .route("/api/v1/form", get(form::handle_get_form))
        .route("/api/v1/form/personal", put(form::handle_update_personal))
        .route(
            "/api/v1/form/entries/:category",
            post(form::handle_add_entry),
        )
        .route(
            "/api/v1/form/entries/:category/:seq",
            put(form::handle_update_entry).delete(form::handle_remove_entry),
        )
        .route("/api/v1/form/clear", post(form::handle_clear))
        .route("/api/v1/form/sample", post(form::handle_load_sample))
        .route(
            "/api/v1/form/photo",
            post(form::handle_upload_photo)
                .delete(form::handle_remove_photo)
                .layer(DefaultBodyLimit::max(PHOTO_BODY_LIMIT)),
        )
        // Preview and export
        .route(
            "/api/v1/preview",
            get(render::handle_get_preview).post(render::handle_generate_preview),
        )
        .route("/api/v1/preview/page", get(render::handle_preview_page))
        .route("/api/v1/font-scale", put(render::handle_set_font_scale))
        .route("/api/v1/export", post(render::handle_export))
        // Preferences
        .route("/api/v1/theme", get(prefs::handle_get_theme))
        .route("/api/v1/theme/toggle", post(prefs::handle_toggle_theme))
        .with_state(state)
}
