use std::sync::LazyLock;

use regex::Regex;

use crate::model::formatted::{Score, ScoredHeading};
use crate::model::profile::ParserProfile;

const BOLD: &str = "**";

static SCORE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)/100").unwrap());

/// Returns the heading text when `line` is a heading, `None` for body lines.
pub fn classify_heading(line: &str, profile: &ParserProfile) -> Option<String> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    if is_bold_wrapped(trimmed) || contains_keyword(trimmed, &profile.heading_keywords) {
        return Some(strip_bold(trimmed));
    }
    None
}

fn is_bold_wrapped(trimmed: &str) -> bool {
    trimmed.len() > BOLD.len() * 2 && trimmed.starts_with(BOLD) && trimmed.ends_with(BOLD)
}

fn contains_keyword(trimmed: &str, keywords: &[String]) -> bool {
    let lower = trimmed.to_lowercase();
    keywords.iter().any(|k| lower.contains(k.as_str()))
}

pub fn strip_bold(s: &str) -> String {
    s.replace(BOLD, "").trim().to_string()
}

pub fn extract_score(heading: &str) -> ScoredHeading {
    let unchanged = || ScoredHeading {
        text: heading.to_string(),
        score: None,
    };

    let Some(caps) = SCORE_RE.captures(heading) else {
        return unchanged();
    };
    let (Some(whole), Some(digits)) = (caps.get(0), caps.get(1)) else {
        return unchanged();
    };
    let Some(score) = digits.as_str().parse::<u32>().ok().and_then(Score::new) else {
        tracing::debug!(
            "ignoring out-of-range score {:?} in heading {:?}",
            whole.as_str(),
            heading
        );
        return unchanged();
    };

    let mut text = String::with_capacity(heading.len());
    text.push_str(&heading[..whole.start()]);
    text.push_str(&heading[whole.end()..]);

    ScoredHeading {
        text: text.trim().to_string(),
        score: Some(score),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_headings.rs"]
mod tests;
