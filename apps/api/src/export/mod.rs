// Export engine
// Implements: JSON pretty-print, RFC 4180 CSV for extracted records, Markdown idea reports.
// Serializers are pure: same input, same bytes. Timestamps only come from callers.

pub mod csv;
pub mod format;
pub mod handlers;
pub mod json;
pub mod markdown;
pub mod scorecard;
