//! Small formatting helpers shared by the serializers and download handlers.

use serde_json::Value;

use crate::models::idea::Score;

pub const NOT_AVAILABLE: &str = "N/A";

/// Renders a score the way the report shows it: `7`, `7.5`, or `N/A` when absent.
pub fn format_score(score: Option<Score>) -> String {
    match score {
        Some(s) => format!("{}", s.value()),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Labelled value with fallback: absent or empty → `N/A`.
pub fn or_na(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => NOT_AVAILABLE,
    }
}

/// Free-text value with fallback: absent → empty.
pub fn or_empty(value: Option<&str>) -> &str {
    value.unwrap_or("")
}

/// Human label for a 1–10 viability score.
pub fn score_label(score: f64) -> &'static str {
    if score >= 8.0 {
        "Excellent"
    } else if score >= 6.0 {
        "Good"
    } else if score >= 4.0 {
        "Fair"
    } else {
        "Needs Work"
    }
}

/// Score as a percentage of the 10-point scale, clamped to 0–100.
pub fn score_percent(score: f64) -> f64 {
    (score / 10.0 * 100.0).clamp(0.0, 100.0)
}

/// Stringifies a field value for a CSV cell.
/// Strings are used verbatim, `null` is empty, everything else is compact JSON.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

/// File stem for idea downloads: whitespace runs become `_`, blank titles become `idea`.
pub fn download_stem(title: &str) -> String {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return "idea".to_string();
    }
    trimmed.split_whitespace().collect::<Vec<_>>().join("_")
}

/// Makes a filename safe to place inside a quoted `Content-Disposition` value.
pub fn sanitize_filename(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_graphic() && !matches!(c, '"' | '\\' | '/') {
                c
            } else {
                '_'
            }
        })
        .collect();
    if cleaned.is_empty() {
        "download".to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(Some(Score(7.0))), "7");
        assert_eq!(format_score(Some(Score(7.5))), "7.5");
        assert_eq!(format_score(None), "N/A");
        // A real zero is data, not a missing score.
        assert_eq!(format_score(Some(Score(0.0))), "0");
    }

    #[test]
    fn test_or_na_treats_empty_as_missing() {
        assert_eq!(or_na(Some("Parents")), "Parents");
        assert_eq!(or_na(Some("")), "N/A");
        assert_eq!(or_na(None), "N/A");
    }

    #[test]
    fn test_score_label_thresholds() {
        assert_eq!(score_label(9.0), "Excellent");
        assert_eq!(score_label(8.0), "Excellent");
        assert_eq!(score_label(6.5), "Good");
        assert_eq!(score_label(4.0), "Fair");
        assert_eq!(score_label(3.9), "Needs Work");
    }

    #[test]
    fn test_score_percent_clamped() {
        assert_eq!(score_percent(7.0), 70.0);
        assert_eq!(score_percent(12.0), 100.0);
        assert_eq!(score_percent(-1.0), 0.0);
    }

    #[test]
    fn test_cell_text() {
        assert_eq!(cell_text(&json!("ACME")), "ACME");
        assert_eq!(cell_text(&json!(120.5)), "120.5");
        assert_eq!(cell_text(&json!(0)), "0");
        assert_eq!(cell_text(&json!(false)), "false");
        assert_eq!(cell_text(&Value::Null), "");
        assert_eq!(cell_text(&json!(["a", 1])), r#"["a",1]"#);
    }

    #[test]
    fn test_download_stem() {
        assert_eq!(download_stem("Tutor  Marketplace app"), "Tutor_Marketplace_app");
        assert_eq!(download_stem("  Solo "), "Solo");
        assert_eq!(download_stem("   "), "idea");
        assert_eq!(download_stem(""), "idea");
    }

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("scan 01.pdf"), "scan_01.pdf");
        assert_eq!(sanitize_filename("a\"b/c\\d"), "a_b_c_d");
        assert_eq!(sanitize_filename("café.png"), "caf_.png");
        assert_eq!(sanitize_filename(""), "download");
    }
}
