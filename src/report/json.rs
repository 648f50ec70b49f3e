use crate::report::AnalysisReport;

pub fn render_report_json(report: &AnalysisReport) -> Result<String, serde_json::Error> {
    let mut out = serde_json::to_string_pretty(report)?;
    out.push('\n');
    Ok(out)
}
