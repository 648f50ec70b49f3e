use crate::model::formatted::TableRow;
use crate::model::profile::{EmptyKeyValuePolicy, ParserProfile};
use crate::pipeline::stage1_headings::strip_bold;
use crate::pipeline::stage2_bullets::strip_marker;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyValueLine {
    Row(TableRow),
    /// `Label: Detail` shape with an empty key or value after trimming.
    Incomplete,
    Prose,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableExtraction {
    pub rows: Vec<TableRow>,
    pub prose: String,
    pub incomplete_lines: usize,
}

pub fn sniff_key_value(line: &str, profile: &ParserProfile) -> KeyValueLine {
    let candidate = strip_marker(line);
    let Some((prefix, rest)) = candidate.split_once(':') else {
        return KeyValueLine::Prose;
    };
    if prefix.chars().count() >= profile.key_max_chars {
        return KeyValueLine::Prose;
    }
    // scheme separators, e.g. "https://..."
    if rest.starts_with("//") {
        return KeyValueLine::Prose;
    }

    let key = strip_bold(prefix);
    let value = rest
        .trim()
        .trim_start_matches("**")
        .trim_end_matches("**")
        .trim();
    if key.is_empty() || value.is_empty() {
        return KeyValueLine::Incomplete;
    }
    KeyValueLine::Row(TableRow::new(key, value))
}

pub fn extract_table<S: AsRef<str>>(lines: &[S], profile: &ParserProfile) -> TableExtraction {
    let mut rows = Vec::new();
    let mut kept: Vec<&str> = Vec::with_capacity(lines.len());
    let mut incomplete_lines = 0usize;

    for line in lines {
        let line = line.as_ref();
        match sniff_key_value(line, profile) {
            KeyValueLine::Row(row) => rows.push(row),
            KeyValueLine::Incomplete => {
                incomplete_lines += 1;
                if profile.empty_key_value == EmptyKeyValuePolicy::KeepAsProse {
                    kept.push(line);
                }
            }
            KeyValueLine::Prose => kept.push(line),
        }
    }

    TableExtraction {
        rows,
        prose: kept.join("\n"),
        incomplete_lines,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_key_values.rs"]
mod tests;
