use super::{FilterReport, Formatter};

pub struct CsvFormatter;

impl Formatter for CsvFormatter {
    fn format(&self, report: &FilterReport) -> String {
        let bw = report
            .bandwidth_hz
            .map_or(String::new(), |bw| format!("{:.3}", bw));
        format!(
            "{},{},{},{:.3},{},{:.1},{},{},{:.6},{:.6},{:.6},{:.6}",
            report.ts,
            report.source,
            report.kind,
            report.cutoff_hz,
            bw,
            report.sample_rate,
            join(&report.b),
            join(&report.a),
            report.input.mean,
            report.input.stdev,
            report.output.mean,
            report.output.stdev
        )
    }

    fn header(&self) -> Option<&'static str> {
        Some(
            "ts,source,kind,cutoff_hz,bandwidth_hz,sample_rate,b0,b1,b2,a0,a1,a2,in_mean,in_stdev,out_mean,out_stdev",
        )
    }
}

fn join(coeffs: &[f64; 3]) -> String {
    coeffs
        .iter()
        .map(|c| format!("{:.12}", c))
        .collect::<Vec<_>>()
        .join(",")
}
