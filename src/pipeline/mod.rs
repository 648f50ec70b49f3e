pub mod stage1_headings;
pub mod stage2_bullets;
pub mod stage3_key_values;
pub mod stage4_paragraphs;
pub mod stage5_recommend;
pub mod stage6_report;

use serde::Serialize;

use crate::model::formatted::{FormattedContent, TableRow};
use crate::model::profile::ParserProfile;
use crate::model::text::AnalysisText;
use crate::pipeline::stage2_bullets::format_content;
use crate::pipeline::stage3_key_values::extract_table;
use crate::pipeline::stage4_paragraphs::segment_paragraphs;
use crate::pipeline::stage5_recommend::{Section, Verdict, build_sections, overall_verdict};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnalysisStats {
    pub lines: usize,
    pub non_blank_lines: usize,
    pub headings: usize,
    pub scored_headings: usize,
    pub points: usize,
    pub table_rows: usize,
    pub incomplete_key_values: usize,
    pub paragraphs: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub formatted: FormattedContent,
    pub sections: Vec<Section>,
    pub table: Vec<TableRow>,
    pub paragraphs: Vec<String>,
    pub verdict: Option<Verdict>,
    pub stats: AnalysisStats,
}

/// Runs every structuring stage over `text`. Headings/points and the
/// table/paragraph split are computed independently from the same lines.
pub fn analyze(text: &AnalysisText, profile: &ParserProfile) -> Analysis {
    let formatted = format_content(&text.lines, profile);
    let sections = build_sections(&formatted, &profile.thresholds);
    let verdict = overall_verdict(&sections, &profile.thresholds);

    let extraction = extract_table(&text.lines, profile);
    let paragraphs = segment_paragraphs(&extraction.prose);

    let stats = AnalysisStats {
        lines: text.lines.len(),
        non_blank_lines: text.non_blank_lines(),
        headings: formatted.headings.len(),
        scored_headings: sections.iter().filter(|s| s.score.is_some()).count(),
        points: formatted.total_points(),
        table_rows: extraction.rows.len(),
        incomplete_key_values: extraction.incomplete_lines,
        paragraphs: paragraphs.len(),
    };

    tracing::debug!(
        headings = stats.headings,
        points = stats.points,
        table_rows = stats.table_rows,
        paragraphs = stats.paragraphs,
        "structured analysis text"
    );
    if stats.incomplete_key_values > 0 {
        tracing::debug!(
            "{} label-only lines were not turned into table rows",
            stats.incomplete_key_values
        );
    }

    Analysis {
        formatted,
        sections,
        table: extraction.rows,
        paragraphs,
        verdict,
        stats,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/analyze.rs"]
mod tests;
