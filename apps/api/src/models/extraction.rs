use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::AppError;

/// One uploaded file's structured fields, as returned by the extraction backend.
///
/// `fields` keeps its keys in insertion order; the batch CSV header depends on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedRecord {
    pub filename: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default)]
    pub fields: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "rawText")]
    pub raw_text: Option<String>,
}

#[cfg(test)]
impl ExtractedRecord {
    pub fn new(filename: impl Into<String>, fields: Map<String, Value>) -> Self {
        Self {
            filename: filename.into(),
            summary: None,
            fields,
            raw_text: None,
        }
    }
}

/// Parses a batch of records from an untyped JSON body.
///
/// A non-array body is a caller error. An array whose elements don't look like
/// records is reported as unprocessable.
pub fn parse_records(value: Value) -> Result<Vec<ExtractedRecord>, AppError> {
    if !value.is_array() {
        return Err(AppError::Validation(
            "records must be a JSON array".to_string(),
        ));
    }
    serde_json::from_value(value)
        .map_err(|e| AppError::UnprocessableEntity(format!("invalid extracted record: {e}")))
}

/// Parses a single record (per-file download).
pub fn parse_record(value: Value) -> Result<ExtractedRecord, AppError> {
    if !value.is_object() {
        return Err(AppError::Validation(
            "record must be a JSON object".to_string(),
        ));
    }
    serde_json::from_value(value)
        .map_err(|e| AppError::UnprocessableEntity(format!("invalid extracted record: {e}")))
}
