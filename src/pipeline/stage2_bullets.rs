use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::model::formatted::FormattedContent;
use crate::model::profile::ParserProfile;
use crate::pipeline::stage1_headings::classify_heading;

static MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(?:[-•]\s*|\*(?:\s+|$)|\d+\.(?:\s+|$))").unwrap());

pub fn strip_marker(line: &str) -> String {
    MARKER_RE.replace(line, "").trim().to_string()
}

pub fn format_content<S: AsRef<str>>(lines: &[S], profile: &ParserProfile) -> FormattedContent {
    let mut headings: Vec<String> = Vec::new();
    let mut points: BTreeMap<usize, Vec<String>> = BTreeMap::new();
    let mut current: Vec<String> = Vec::new();

    for line in lines {
        let line = line.as_ref();
        if let Some(heading) = classify_heading(line, profile) {
            // Preamble stays buffered until the first heading exists.
            if !headings.is_empty() {
                flush(&mut points, headings.len() - 1, &mut current);
            }
            headings.push(heading);
            continue;
        }
        let point = strip_marker(line);
        if !point.is_empty() {
            current.push(point);
        }
    }

    if headings.is_empty() {
        if !current.is_empty() {
            tracing::debug!(
                "no headings found; discarding {} body lines from formatted view",
                current.len()
            );
        }
        return FormattedContent::default();
    }
    flush(&mut points, headings.len() - 1, &mut current);

    FormattedContent { headings, points }
}

fn flush(points: &mut BTreeMap<usize, Vec<String>>, idx: usize, current: &mut Vec<String>) {
    if current.is_empty() {
        return;
    }
    points.insert(idx, std::mem::take(current));
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_bullets.rs"]
mod tests;
