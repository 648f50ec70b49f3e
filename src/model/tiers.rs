use serde::{Deserialize, Serialize};

use crate::model::formatted::Score;

/// Score bands shared by the recommendation text and the badge colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierThresholds {
    pub strong_min: u32,
    pub merit_min: u32,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self::default_v1()
    }
}

impl TierThresholds {
    pub fn default_v1() -> Self {
        Self {
            strong_min: 80,
            merit_min: 60,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    StrongPotential,
    NeedsRefinement,
    NeedsRethinking,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeClass {
    Green,
    Amber,
    Red,
}

impl Tier {
    pub fn from_score(score: Score, thresholds: &TierThresholds) -> Self {
        let v = score.value();
        if v >= thresholds.strong_min {
            Tier::StrongPotential
        } else if v >= thresholds.merit_min {
            Tier::NeedsRefinement
        } else {
            Tier::NeedsRethinking
        }
    }

    pub fn badge(self) -> BadgeClass {
        match self {
            Tier::StrongPotential => BadgeClass::Green,
            Tier::NeedsRefinement => BadgeClass::Amber,
            Tier::NeedsRethinking => BadgeClass::Red,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tier::StrongPotential => "strong potential",
            Tier::NeedsRefinement => "merit but needs refinement",
            Tier::NeedsRethinking => "needs significant rethinking",
        }
    }
}

impl BadgeClass {
    pub fn as_str(self) -> &'static str {
        match self {
            BadgeClass::Green => "green",
            BadgeClass::Amber => "amber",
            BadgeClass::Red => "red",
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/tiers.rs"]
mod tests;
