//! Axum route handlers for the Export API.
//!
//! Each handler validates the untyped body, runs one serializer, and returns the
//! bytes as a download (`Content-Disposition: attachment`).

use axum::{
    extract::Path,
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::export::csv::{column_keys, record_to_csv, records_to_csv};
use crate::export::format::{download_stem, sanitize_filename};
use crate::export::json::{export_idea_json, record_fields_json, records_to_json};
use crate::export::markdown::idea_to_markdown;
use crate::export::scorecard::{scorecard, Scorecard};
use crate::models::extraction::{parse_record, parse_records};
use crate::models::idea::IdeaAnalysis;

const CSV: &str = "text/csv; charset=utf-8";
const JSON: &str = "application/json";
const MARKDOWN: &str = "text/markdown; charset=utf-8";

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct IdeaExportRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub analysis: Value,
    #[serde(default)]
    pub exported_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub struct IdeaMarkdownRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub analysis: Value,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/export/records/csv
pub async fn handle_records_csv(Json(body): Json<Value>) -> Result<Response, AppError> {
    let records = parse_records(body)?;
    let columns = column_keys(&records).len() + 1;
    let csv = records_to_csv(&records);

    info!(rows = records.len(), columns, "Exported records as CSV");
    Ok(attachment(CSV, "all_extracted_data.csv", csv))
}

/// POST /api/v1/export/records/json
pub async fn handle_records_json(Json(body): Json<Value>) -> Result<Response, AppError> {
    let records = parse_records(body)?;
    let json = records_to_json(&records)?;

    info!(rows = records.len(), "Exported records as JSON");
    Ok(attachment(JSON, "all_extracted_data.json", json))
}

/// POST /api/v1/export/record/:format
///
/// Single-file download; `format` is `csv` or `json`.
pub async fn handle_record(
    Path(format): Path<String>,
    Json(body): Json<Value>,
) -> Result<Response, AppError> {
    if !matches!(format.as_str(), "csv" | "json") {
        return Err(AppError::Validation(format!(
            "unsupported export format '{format}' (expected csv or json)"
        )));
    }

    let record = parse_record(body)?;
    let filename = format!("{}_extracted.{format}", record.filename);
    let (content_type, bytes) = if format == "csv" {
        (CSV, record_to_csv(&record))
    } else {
        (JSON, record_fields_json(&record)?)
    };

    info!(filename = %record.filename, format = %format, "Exported single record");
    Ok(attachment(content_type, &filename, bytes))
}

/// POST /api/v1/export/idea/json
pub async fn handle_idea_json(
    Json(request): Json<IdeaExportRequest>,
) -> Result<Response, AppError> {
    IdeaAnalysis::from_value(request.analysis.clone())?;
    let json = export_idea_json(&request.title, &request.analysis, request.exported_at)?;
    let filename = format!("{}_analysis.json", download_stem(&request.title));

    info!(title = %request.title, "Exported idea analysis as JSON");
    Ok(attachment(JSON, &filename, json))
}

/// POST /api/v1/export/idea/markdown
pub async fn handle_idea_markdown(
    Json(request): Json<IdeaMarkdownRequest>,
) -> Result<Response, AppError> {
    let analysis = IdeaAnalysis::from_value(request.analysis)?;
    let markdown = idea_to_markdown(&request.title, &analysis);
    let filename = format!("{}_analysis.md", download_stem(&request.title));

    info!(title = %request.title, "Exported idea analysis as Markdown");
    Ok(attachment(MARKDOWN, &filename, markdown.into_bytes()))
}

/// POST /api/v1/export/idea/scorecard
///
/// Score, label and percentages for the score widgets; not a download.
pub async fn handle_idea_scorecard(Json(body): Json<Value>) -> Result<Json<Scorecard>, AppError> {
    let analysis = IdeaAnalysis::from_value(body)?;
    Ok(Json(scorecard(&analysis)))
}

/// Wraps serialized bytes as a file download.
fn attachment(content_type: &'static str, filename: &str, body: Vec<u8>) -> Response {
    let disposition = format!("attachment; filename=\"{}\"", sanitize_filename(filename));
    let disposition = HeaderValue::from_str(&disposition)
        .unwrap_or_else(|_| HeaderValue::from_static("attachment"));

    (
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(content_type)),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        Bytes::from(body),
    )
        .into_response()
}
