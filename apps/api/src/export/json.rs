use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::models::extraction::ExtractedRecord;

/// Pretty-prints any serializable value with 2-space indentation (UTF-8).
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, AppError> {
    Ok(serde_json::to_vec_pretty(value)?)
}

/// Envelope written by the idea validator's "Export JSON" action.
///
/// `analysis` is the report exactly as received. Callers validate it with
/// `IdeaAnalysis::from_value` first; the typed model is never re-serialized here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdeaExport {
    pub title: String,
    pub analysis: Value,
    /// Supplied by the caller; never stamped here, so output stays reproducible.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exported_at: Option<DateTime<Utc>>,
}

pub fn export_idea_json(
    title: &str,
    analysis: &Value,
    exported_at: Option<DateTime<Utc>>,
) -> Result<Vec<u8>, AppError> {
    to_json(&IdeaExport {
        title: title.to_string(),
        analysis: analysis.clone(),
        exported_at,
    })
}

/// Batch download: every record, as received.
pub fn records_to_json(records: &[ExtractedRecord]) -> Result<Vec<u8>, AppError> {
    to_json(records)
}

/// Per-file download: only the record's fields.
pub fn record_fields_json(record: &ExtractedRecord) -> Result<Vec<u8>, AppError> {
    to_json(&record.fields)
}
