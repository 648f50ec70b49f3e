pub mod json;
pub mod text;

use serde::Serialize;

use crate::model::formatted::TableRow;
use crate::model::profile::ParserProfile;
use crate::pipeline::stage5_recommend::{Section, Verdict};
use crate::pipeline::{Analysis, AnalysisStats};

#[derive(Debug, Clone, Serialize)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct InputInfo {
    pub source: String,
    pub bytes: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub tool: ToolInfo,
    pub input: InputInfo,
    pub profile: ParserProfile,
    pub verdict: Option<Verdict>,
    pub sections: Vec<Section>,
    pub key_values: Vec<TableRow>,
    pub paragraphs: Vec<String>,
    pub stats: AnalysisStats,
}

impl AnalysisReport {
    pub fn build(
        analysis: &Analysis,
        profile: &ParserProfile,
        tool: ToolInfo,
        input: InputInfo,
    ) -> Self {
        Self {
            tool,
            input,
            profile: profile.clone(),
            verdict: analysis.verdict.clone(),
            sections: analysis.sections.clone(),
            key_values: analysis.table.clone(),
            paragraphs: analysis.paragraphs.clone(),
            stats: analysis.stats.clone(),
        }
    }
}

pub fn escape_tsv_field(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\\' => out.push_str("\\\\"),
            _ => out.push(c),
        }
    }
    out
}

pub fn render_table_tsv(rows: &[TableRow]) -> String {
    let mut out = String::from("key\tvalue\n");
    for row in rows {
        out.push_str(&escape_tsv_field(&row.key));
        out.push('\t');
        out.push_str(&escape_tsv_field(&row.value));
        out.push('\n');
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
