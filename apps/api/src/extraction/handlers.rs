use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::errors::AppError;
use crate::extraction::pipeline::run_pipeline;
use crate::models::record::StoredRecord;
use crate::state::AppState;

/// POST /api/v1/resumes
///
/// Accepts one resume as a multipart `file` part (PDF only), runs the
/// extraction pipeline, and appends the resulting record to the dashboard
/// store. A failed invocation returns before the append, so previously
/// accumulated records are never touched.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<StoredRecord>), AppError> {
    let mut upload: Option<(String, bytes::Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name() == Some("file") {
            let filename = field.file_name().unwrap_or("resume.pdf").to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
            upload = Some((filename, data));
            break;
        }
    }

    let (filename, data) = upload
        .ok_or_else(|| AppError::Validation("Missing 'file' part in multipart body".to_string()))?;

    // The declared format is always PDF; anything else is a format error,
    // not a validation error.
    if !filename.to_lowercase().ends_with(".pdf") {
        return Err(AppError::DocumentFormat(format!(
            "Only PDF uploads are accepted, got '{filename}'"
        )));
    }
    if data.is_empty() {
        return Err(AppError::Validation(format!("Uploaded file '{filename}' is empty")));
    }

    let record = run_pipeline(&data, &state.vocabulary, state.labeler.as_ref()).await?;
    let stored = state.store.append(record).await;

    info!(
        "Processed resume '{}' ({} bytes) as record {}",
        filename,
        data.len(),
        stored.id
    );

    Ok((StatusCode::CREATED, Json(stored)))
}
