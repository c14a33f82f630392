//! Axum route handlers for preview generation, export, and font scale.

use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::errors::AppError;
use crate::extract::ApiJson;
use crate::layout::{FontScale, FontSizing};
use crate::render::export::{build_export_job, page_title, standalone_page};
use crate::render::markup::PLACEHOLDER_HTML;
use crate::render::Preview;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct StoredPreviewResponse {
    /// Preview markup, or the placeholder notice when nothing has been generated.
    pub html: String,
    pub preview: Option<Preview>,
}

#[derive(Debug, Deserialize)]
pub struct FontScaleRequest {
    pub scale: f32,
}

#[derive(Debug, Serialize)]
pub struct FontScaleResponse {
    pub scale: FontScale,
    /// Sizing of the stored preview after the change, if there is one.
    pub sizing: Option<FontSizing>,
}

#[derive(Debug, Serialize)]
pub struct ExportResponse {
    pub filename: String,
    pub status: &'static str,
}

/// POST /api/v1/preview
///
/// Re-derives the whole preview from the current form and stores it.
pub async fn handle_generate_preview(State(state): State<AppState>) -> Json<Preview> {
    let mut ws = state.workspace.lock().await;
    Json(ws.generate(&state.sizing).clone())
}

/// GET /api/v1/preview
pub async fn handle_get_preview(State(state): State<AppState>) -> Json<StoredPreviewResponse> {
    let ws = state.workspace.lock().await;
    let preview = ws.preview.clone();
    let html = preview
        .as_ref()
        .map(|p| p.html.clone())
        .unwrap_or_else(|| PLACEHOLDER_HTML.to_string());
    Json(StoredPreviewResponse { html, preview })
}

/// GET /api/v1/preview/page
///
/// The stored preview as a complete, printable HTML page.
pub async fn handle_preview_page(State(state): State<AppState>) -> Html<String> {
    let ws = state.workspace.lock().await;
    match &ws.preview {
        Some(preview) => {
            let title = page_title(&ws.form.personal.full_name);
            Html(standalone_page(&title, preview, &state.page_geometry))
        }
        None => Html(format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\"><title>CV Preview</title></head>\n<body>{PLACEHOLDER_HTML}</body>\n</html>\n"
        )),
    }
}

/// PUT /api/v1/font-scale
pub async fn handle_set_font_scale(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<FontScaleRequest>,
) -> Result<Json<FontScaleResponse>, AppError> {
    let scale = FontScale::new(req.scale)?;
    let mut ws = state.workspace.lock().await;
    ws.set_font_scale(scale, &state.sizing);
    Ok(Json(FontScaleResponse {
        scale,
        sizing: ws.preview.as_ref().map(|p| p.sizing.clone()),
    }))
}

/// POST /api/v1/export
///
/// Fire-and-forget: the job is handed to the exporter on a background task and
/// the request returns as soon as it is queued. Exporter failures are only logged.
pub async fn handle_export(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<ExportResponse>), AppError> {
    let job = {
        let ws = state.workspace.lock().await;
        build_export_job(
            ws.preview.as_ref(),
            &ws.form.personal.full_name,
            &state.page_geometry,
        )?
    };

    let filename = job.filename.clone();
    info!(%filename, "Export queued");

    let exporter = state.exporter.clone();
    tokio::spawn(async move {
        let filename = job.filename.clone();
        if let Err(e) = exporter.export(job).await {
            error!(%filename, "Export failed: {e:?}");
        }
    });

    Ok((
        StatusCode::ACCEPTED,
        Json(ExportResponse {
            filename,
            status: "queued",
        }),
    ))
}
