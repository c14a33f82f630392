//! Photo attachment validation and encoding.
//!
//! Validation is synchronous and cheap; the base64 encode of up to 5 MiB runs
//! inside `spawn_blocking`. The caller applies the finished [`Photo`] to the
//! form whenever it lands, so two racing uploads resolve last-write-wins.

use anyhow::anyhow;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use bytes::Bytes;
use tracing::{debug, instrument};

use crate::errors::AppError;
use crate::models::form::Photo;

/// Largest accepted photo upload: 5 MiB.
pub const MAX_PHOTO_BYTES: usize = 5 * 1024 * 1024;

/// Rejects anything that is not a non-empty `image/*` payload within [`MAX_PHOTO_BYTES`].
pub fn validate_attachment(bytes: &[u8], mime_type: &str) -> Result<(), AppError> {
    let mime = mime_type.trim().to_ascii_lowercase();
    if !mime.starts_with("image/") || mime.len() == "image/".len() {
        return Err(AppError::InvalidAttachment(format!(
            "Expected an image file, got content type '{mime_type}'"
        )));
    }
    if bytes.is_empty() {
        return Err(AppError::InvalidAttachment("The uploaded file is empty".to_string()));
    }
    if bytes.len() > MAX_PHOTO_BYTES {
        return Err(AppError::InvalidAttachment(format!(
            "Image is {} bytes; the limit is 5 MB ({MAX_PHOTO_BYTES} bytes)",
            bytes.len()
        )));
    }
    Ok(())
}

/// Builds the embeddable photo. Pure CPU work; call through [`decode_attachment`] from async code.
pub fn encode_photo(bytes: Bytes, mime_type: &str) -> Photo {
    let mime_type = mime_type.trim().to_ascii_lowercase();
    let data_url = format!("data:{};base64,{}", mime_type, BASE64.encode(&bytes));
    Photo {
        mime_type,
        bytes,
        data_url,
    }
}

/// Validates, then encodes on the blocking pool. Resolves exactly once.
#[instrument(skip(bytes), fields(size = bytes.len()))]
pub async fn decode_attachment(bytes: Bytes, mime_type: String) -> Result<Photo, AppError> {
    validate_attachment(&bytes, &mime_type)?;

    let photo = tokio::task::spawn_blocking(move || encode_photo(bytes, &mime_type))
        .await
        .map_err(|e| AppError::Internal(anyhow!("photo encoding task failed: {e}")))?;

    debug!(mime = %photo.mime_type, encoded_len = photo.data_url.len(), "Photo encoded");
    Ok(photo)
}
