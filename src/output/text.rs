use super::{FilterReport, Formatter, SequenceSummary};

pub struct TextFormatter {
    verbose: bool,
}

impl TextFormatter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

fn summary_line(label: &str, s: &SequenceSummary) -> String {
    let median = s.median.map_or("-".to_string(), |m| format!("{:.4}", m));
    format!(
        "  {:<7} n={:<8} min={:>9.4} max={:>9.4} mean={:>9.4} stdev={:>9.4} median={}",
        label, s.count, s.min, s.max, s.mean, s.stdev, median
    )
}

impl Formatter for TextFormatter {
    fn format(&self, report: &FilterReport) -> String {
        let bw = report
            .bandwidth_hz
            .map_or(String::new(), |bw| format!(", bandwidth {:.1} Hz", bw));
        let mut out = format!(
            "{}: {} {:.1} Hz{} @ {:.0} Hz",
            report.source, report.kind, report.cutoff_hz, bw, report.sample_rate
        );
        if self.verbose {
            out.push_str(&format!(
                "\n  b = [{:.9}, {:.9}, {:.9}]\n  a = [{:.9}, {:.9}, {:.9}]",
                report.b[0], report.b[1], report.b[2], report.a[0], report.a[1], report.a[2]
            ));
        }
        out.push('\n');
        out.push_str(&summary_line("input", &report.input));
        out.push('\n');
        out.push_str(&summary_line("output", &report.output));
        out
    }
}
