use crate::pipeline::stage5_recommend::{ScoreSource, Section, Verdict};
use crate::report::AnalysisReport;

pub fn render_report_text(report: &AnalysisReport) -> String {
    let mut out = String::new();

    out.push_str("Business Analysis Structure Report\n");
    out.push_str("==================================\n\n");

    out.push_str("1. Overall assessment\n");
    out.push_str(&format!("Input: {}\n", report.input.source));
    match &report.verdict {
        Some(verdict) => push_verdict(&mut out, verdict),
        None => out.push_str("Overall score: not present\n"),
    }
    out.push('\n');

    out.push_str("2. Sections\n");
    if report.sections.is_empty() {
        out.push_str("No headings detected.\n");
    }
    for (i, section) in report.sections.iter().enumerate() {
        push_section(&mut out, i + 1, section);
    }
    out.push('\n');

    out.push_str("3. Key figures\n");
    if report.key_values.is_empty() {
        out.push_str("No key-value lines detected.\n");
    }
    let key_width = report
        .key_values
        .iter()
        .map(|r| r.key.chars().count())
        .max()
        .unwrap_or(0);
    for row in &report.key_values {
        let pad = key_width - row.key.chars().count();
        out.push_str(&format!("{}:{} {}\n", row.key, " ".repeat(pad), row.value));
    }
    out.push('\n');

    out.push_str("4. Narrative\n");
    if report.paragraphs.is_empty() {
        out.push_str("No narrative text.\n");
    }
    for paragraph in &report.paragraphs {
        out.push_str(paragraph);
        out.push_str("\n\n");
    }
    if !report.paragraphs.is_empty() {
        out.pop();
    }
    out.push('\n');

    let stats = &report.stats;
    out.push_str("5. Statistics\n");
    out.push_str(&format!(
        "Lines: {} ({} non-blank)\n",
        stats.lines, stats.non_blank_lines
    ));
    out.push_str(&format!(
        "Headings: {} ({} scored), points: {}\n",
        stats.headings, stats.scored_headings, stats.points
    ));
    out.push_str(&format!(
        "Table rows: {}, label-only lines: {}\n",
        stats.table_rows, stats.incomplete_key_values
    ));
    out.push_str(&format!("Paragraphs: {}\n", stats.paragraphs));

    out
}

fn push_verdict(out: &mut String, verdict: &Verdict) {
    let source = match verdict.source {
        ScoreSource::OverallHeading => "stated",
        ScoreSource::SectionMean => "mean of section scores",
    };
    out.push_str(&format!("Overall score: {} ({})\n", verdict.score, source));
    out.push_str(&format!(
        "Tier: {} [{}]\n",
        verdict.tier.label(),
        verdict.badge.as_str()
    ));
    out.push_str(&format!("Recommendation: {}\n", verdict.recommendation));
}

fn push_section(out: &mut String, number: usize, section: &Section) {
    out.push_str(&format!("[{}] {}", number, section.heading));
    if let (Some(score), Some(badge)) = (section.score, section.badge) {
        out.push_str(&format!(" ({} {})", score, badge.as_str()));
    }
    out.push('\n');
    for point in &section.points {
        out.push_str(&format!("    - {}\n", point));
    }
}
