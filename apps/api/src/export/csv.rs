//! CSV export for extracted records.
//!
//! Every cell is double-quoted with embedded quotes doubled (RFC 4180); cells are
//! comma-joined and rows are `\n`-joined with no trailing newline.

use std::collections::HashSet;

use crate::export::format::cell_text;
use crate::models::extraction::ExtractedRecord;

pub const FILENAME_HEADER: &str = "File Name";

fn quote_cell(cell: &str) -> String {
    format!("\"{}\"", cell.replace('"', "\"\""))
}

fn join_row<I, S>(cells: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    cells
        .into_iter()
        .map(|c| quote_cell(c.as_ref()))
        .collect::<Vec<_>>()
        .join(",")
}

/// Union of field keys in first-seen order across the batch.
pub fn column_keys(records: &[ExtractedRecord]) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut keys = Vec::new();
    for record in records {
        for key in record.fields.keys() {
            if seen.insert(key.as_str()) {
                keys.push(key.as_str());
            }
        }
    }
    keys
}

/// Batch table: `File Name` plus one column per distinct field key.
pub fn records_to_csv(records: &[ExtractedRecord]) -> Vec<u8> {
    let keys = column_keys(records);

    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(join_row(
        std::iter::once(FILENAME_HEADER).chain(keys.iter().copied()),
    ));

    for record in records {
        let row = std::iter::once(record.filename.clone()).chain(
            keys.iter()
                .map(|key| record.fields.get(*key).map(cell_text).unwrap_or_default()),
        );
        lines.push(join_row(row));
    }

    lines.join("\n").into_bytes()
}

/// Per-file download: one `key,value` row per field, in the record's own order.
pub fn record_to_csv(record: &ExtractedRecord) -> Vec<u8> {
    record
        .fields
        .iter()
        .map(|(key, value)| join_row([key.clone(), cell_text(value)]))
        .collect::<Vec<_>>()
        .join("\n")
        .into_bytes()
}
