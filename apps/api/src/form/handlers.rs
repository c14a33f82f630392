//! Axum route handlers for the form.

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::extract::{ApiJson, ApiPath};
use crate::form::photo::{decode_attachment, MAX_PHOTO_BYTES};
use crate::form::state::FormSnapshot;
use crate::models::form::{Category, EntryFields, EntryId, PersonalInfo, PhotoSummary};
use crate::render::Preview;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct AddEntryResponse {
    pub id: String,
    pub category: Category,
    pub seq: u32,
}

#[derive(Debug, Serialize)]
pub struct RemoveEntryResponse {
    pub removed: bool,
}

#[derive(Debug, Deserialize)]
pub struct ClearRequest {
    #[serde(default)]
    pub confirm: bool,
}

#[derive(Debug, Serialize)]
pub struct ClearResponse {
    pub cleared: bool,
}

fn entry_id(category: &str, seq: u32) -> Result<EntryId, AppError> {
    Ok(EntryId {
        category: category.parse()?,
        seq,
    })
}

/// A body cut off by the route's size limit is an oversized photo, not a malformed request.
fn multipart_error(e: MultipartError, context: &str) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::InvalidAttachment(format!(
            "Image exceeds the 5 MB limit ({MAX_PHOTO_BYTES} bytes)"
        ))
    } else {
        AppError::Validation(format!("{context}: {}", e.body_text()))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/form
pub async fn handle_get_form(State(state): State<AppState>) -> Json<FormSnapshot> {
    Json(state.workspace.lock().await.form.snapshot())
}

/// PUT /api/v1/form/personal
pub async fn handle_update_personal(
    State(state): State<AppState>,
    ApiJson(info): ApiJson<PersonalInfo>,
) -> Json<PersonalInfo> {
    let mut ws = state.workspace.lock().await;
    ws.form.personal = info;
    Json(ws.form.personal.clone())
}

/// POST /api/v1/form/entries/:category
pub async fn handle_add_entry(
    State(state): State<AppState>,
    ApiPath(category): ApiPath<String>,
) -> Result<(StatusCode, Json<AddEntryResponse>), AppError> {
    let category: Category = category.parse()?;
    let id = state.workspace.lock().await.form.add_entry(category);
    Ok((
        StatusCode::CREATED,
        Json(AddEntryResponse {
            id: id.to_string(),
            category: id.category,
            seq: id.seq,
        }),
    ))
}

/// PUT /api/v1/form/entries/:category/:seq
pub async fn handle_update_entry(
    State(state): State<AppState>,
    ApiPath((category, seq)): ApiPath<(String, u32)>,
    ApiJson(fields): ApiJson<EntryFields>,
) -> Result<Json<EntryFields>, AppError> {
    let id = entry_id(&category, seq)?;
    let mut ws = state.workspace.lock().await;
    ws.form.update_entry(id, fields)?;
    let stored = ws
        .form
        .entry(id)
        .ok_or_else(|| AppError::NotFound(format!("Entry {id} not found")))?;
    Ok(Json(stored))
}

/// DELETE /api/v1/form/entries/:category/:seq
///
/// Removing an unknown entry is not an error.
pub async fn handle_remove_entry(
    State(state): State<AppState>,
    ApiPath((category, seq)): ApiPath<(String, u32)>,
) -> Result<Json<RemoveEntryResponse>, AppError> {
    let id = entry_id(&category, seq)?;
    let removed = state.workspace.lock().await.form.remove_entry(id);
    Ok(Json(RemoveEntryResponse { removed }))
}

/// POST /api/v1/form/clear
pub async fn handle_clear(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<ClearRequest>,
) -> Json<ClearResponse> {
    let cleared = state.workspace.lock().await.clear_all(req.confirm);
    Json(ClearResponse { cleared })
}

/// POST /api/v1/form/sample
///
/// Loads the sample dataset and renders it.
pub async fn handle_load_sample(State(state): State<AppState>) -> Json<Preview> {
    let mut ws = state.workspace.lock().await;
    Json(ws.load_sample(&state.sizing).clone())
}

/// POST /api/v1/form/photo
///
/// Multipart upload; the file goes in the `photo` field. The previous photo
/// stays in place until the new one has been validated and encoded.
pub async fn handle_upload_photo(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<PhotoSummary>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, "Malformed multipart body"))?
    {
        if field.name() != Some("photo") {
            continue;
        }
        let mime_type = field
            .content_type()
            .map(str::to_string)
            .unwrap_or_default();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| multipart_error(e, "Could not read upload"))?;

        let photo = decode_attachment(bytes, mime_type).await?;
        let summary = PhotoSummary::from(&photo);
        state.workspace.lock().await.form.set_photo(photo);
        return Ok(Json(summary));
    }
    Err(AppError::Validation("Missing 'photo' field".to_string()))
}

/// DELETE /api/v1/form/photo
pub async fn handle_remove_photo(State(state): State<AppState>) -> StatusCode {
    if state.workspace.lock().await.form.remove_photo() {
        info!("Photo removed");
    }
    StatusCode::NO_CONTENT
}
