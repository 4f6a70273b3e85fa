use super::{FilterReport, Formatter};

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format(&self, report: &FilterReport) -> String {
        // Non-finite statistics serialize as null
        serde_json::to_string(report).unwrap_or_else(|e| format!(r#"{{"error":"{}"}}"#, e))
    }
}
