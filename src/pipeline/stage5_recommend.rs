use serde::Serialize;

use crate::model::formatted::{FormattedContent, Score};
use crate::model::tiers::{BadgeClass, Tier, TierThresholds};
use crate::pipeline::stage1_headings::extract_score;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub heading: String,
    pub score: Option<Score>,
    pub tier: Option<Tier>,
    pub badge: Option<BadgeClass>,
    pub points: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub score: Score,
    pub source: ScoreSource,
    pub tier: Tier,
    pub badge: BadgeClass,
    pub recommendation: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreSource {
    OverallHeading,
    SectionMean,
}

pub fn recommendation(tier: Tier) -> &'static str {
    match tier {
        Tier::StrongPotential => {
            "This business idea shows strong potential. Consider moving forward with detailed planning and execution."
        }
        Tier::NeedsRefinement => {
            "This business idea has merit but needs refinement in key areas before proceeding."
        }
        Tier::NeedsRethinking => {
            "This business idea needs significant rethinking. Consider pivoting or addressing the fundamental challenges first."
        }
    }
}

pub fn build_sections(content: &FormattedContent, thresholds: &TierThresholds) -> Vec<Section> {
    content
        .headings
        .iter()
        .enumerate()
        .map(|(idx, heading)| {
            let scored = extract_score(heading);
            let tier = scored.score.map(|s| Tier::from_score(s, thresholds));
            Section {
                heading: scored.text,
                score: scored.score,
                tier,
                badge: tier.map(Tier::badge),
                points: content.points_for(idx).to_vec(),
            }
        })
        .collect()
}

pub fn overall_verdict(sections: &[Section], thresholds: &TierThresholds) -> Option<Verdict> {
    let (score, source) = overall_score(sections)?;
    let tier = Tier::from_score(score, thresholds);
    Some(Verdict {
        score,
        source,
        tier,
        badge: tier.badge(),
        recommendation: recommendation(tier),
    })
}

fn overall_score(sections: &[Section]) -> Option<(Score, ScoreSource)> {
    let explicit = sections
        .iter()
        .filter(|s| s.heading.to_lowercase().contains("overall"))
        .find_map(|s| s.score);
    if let Some(score) = explicit {
        return Some((score, ScoreSource::OverallHeading));
    }

    let scores: Vec<u32> = sections
        .iter()
        .filter_map(|s| s.score.map(Score::value))
        .collect();
    if scores.is_empty() {
        return None;
    }
    let sum: u32 = scores.iter().sum();
    let mean = (sum as f64 / scores.len() as f64).round() as u32;
    Score::new(mean).map(|s| (s, ScoreSource::SectionMean))
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_recommend.rs"]
mod tests;
