use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Serialize;

use crate::dashboard::export::render_csv;
use crate::errors::AppError;
use crate::models::record::{RecordRow, StoredRecord};
use crate::state::AppState;

#[derive(Serialize)]
pub struct RecordListResponse {
    pub total: usize,
    pub records: Vec<StoredRecord>,
    /// Display projection of each record, fields in dashboard order.
    pub rows: Vec<RecordRow>,
}

/// GET /api/v1/resumes
pub async fn handle_list_records(
    State(state): State<AppState>,
) -> Result<Json<RecordListResponse>, AppError> {
    let records = state.store.list().await;
    let rows = records.iter().map(|r| RecordRow::from(&r.record)).collect();
    Ok(Json(RecordListResponse {
        total: records.len(),
        records,
        rows,
    }))
}

/// GET /api/v1/resumes/export
///
/// Serializes the accumulated records as a CSV attachment.
pub async fn handle_export_csv(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let records = state.store.list().await;
    let csv = render_csv(&records).map_err(AppError::Internal)?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"parsed_resumes.csv\"",
            ),
        ],
        csv,
    ))
}
