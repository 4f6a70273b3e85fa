mod csv;
mod json;
mod text;

use chrono::Utc;
use serde::Serialize;

use crate::config::FilterConfig;
use crate::signal_processing::{DataSet, Filter};

pub use self::csv::CsvFormatter;
pub use self::json::JsonFormatter;
pub use self::text::TextFormatter;

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

/// Summary statistics of one sample sequence
#[derive(Debug, Clone, Serialize)]
pub struct SequenceSummary {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub stdev: f64,
    pub median: Option<f64>,
}

impl SequenceSummary {
    pub fn from_dataset(data: &DataSet) -> Self {
        Self {
            count: data.len(),
            min: data.min(),
            max: data.max(),
            mean: data.mean(),
            stdev: data.stdev(),
            median: data.median(),
        }
    }
}

/// Result of filtering one sequence
#[derive(Debug, Clone, Serialize)]
pub struct FilterReport {
    pub ts: String,
    pub source: String,
    pub kind: String,
    pub cutoff_hz: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bandwidth_hz: Option<f64>,
    pub sample_rate: f64,
    pub b: [f64; 3],
    pub a: [f64; 3],
    pub input: SequenceSummary,
    pub output: SequenceSummary,
}

impl FilterReport {
    pub fn new(
        source: &str,
        config: &FilterConfig,
        filter: &Filter,
        input: &DataSet,
        output: &DataSet,
    ) -> Self {
        Self {
            ts: iso8601_timestamp(),
            source: source.to_string(),
            kind: config.kind.to_string(),
            cutoff_hz: config.cutoff_hz,
            bandwidth_hz: config.bandwidth_hz,
            sample_rate: config.sample_rate,
            b: *filter.b(),
            a: *filter.a(),
            input: SequenceSummary::from_dataset(input),
            output: SequenceSummary::from_dataset(output),
        }
    }
}

pub trait Formatter: Send {
    fn format(&self, report: &FilterReport) -> String;

    fn header(&self) -> Option<&'static str> {
        None
    }
}

pub fn create_formatter(format: OutputFormat, verbose: bool) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(verbose)),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Csv => Box::new(CsvFormatter),
    }
}

pub fn iso8601_timestamp() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

#[cfg(test)]
pub(crate) fn sample_report() -> FilterReport {
    let config = FilterConfig::default();
    let filter = Filter::low_pass(config.cutoff_hz, config.sample_rate);
    let input = DataSet::from(vec![1.0; 16]);
    let output = DataSet::from(filter.filter(input.as_slice()));
    FilterReport::new("unit.wav", &config, &filter, &input, &output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_of_constant_sequence() {
        let summary = SequenceSummary::from_dataset(&DataSet::from(vec![2.0; 5]));
        assert_eq!(summary.count, 5);
        assert_eq!(summary.min, 2.0);
        assert_eq!(summary.max, 2.0);
        assert_eq!(summary.mean, 2.0);
        assert_eq!(summary.median, Some(2.0));
    }

    #[test]
    fn test_report_copies_coefficients() {
        let report = sample_report();
        assert_eq!(report.b[0], 1.0);
        assert_eq!(report.kind, "low-pass");
        assert_eq!(report.input.count, report.output.count);
        assert!(report.ts.ends_with('Z'));
    }
}
