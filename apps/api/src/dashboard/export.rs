//! CSV export of the accumulated records.
//!
//! UTF-8, header row, fields in display order. Multi-value fields are
//! comma-joined inside their cell, so export-then-reparse reproduces every
//! field value modulo that join.

use anyhow::{Context, Result};

use crate::models::record::{RecordRow, StoredRecord};

pub const CSV_HEADER: [&str; 7] = [
    "Name",
    "Email",
    "Phone",
    "LinkedIn",
    "Skills",
    "Organizations",
    "Dates",
];

/// Renders the records as a CSV table.
pub fn render_csv(records: &[StoredRecord]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);

    writer
        .write_record(CSV_HEADER)
        .context("Failed to write CSV header")?;

    for stored in records {
        let row = RecordRow::from(&stored.record);
        writer
            .write_record([
                &row.name,
                &row.email,
                &row.phone,
                &row.linkedin,
                &row.skills,
                &row.organizations,
                &row.dates,
            ])
            .context("Failed to write CSV row")?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV writer: {e}"))?;
    String::from_utf8(bytes).context("CSV output was not valid UTF-8")
}
