use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::formatted::Score;
use crate::model::tiers::TierThresholds;

/// What to do with a line shaped like `Label:` whose key or value is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyKeyValuePolicy {
    KeepAsProse,
    Drop,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserProfile {
    pub heading_keywords: Vec<String>,
    pub key_max_chars: usize,
    pub empty_key_value: EmptyKeyValuePolicy,
    pub thresholds: TierThresholds,
}

impl Default for ParserProfile {
    fn default() -> Self {
        Self::default_v1()
    }
}

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("failed to read profile {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse profile {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid profile: {0}")]
    Invalid(String),
}

impl ParserProfile {
    pub fn default_v1() -> Self {
        Self {
            heading_keywords: vec![
                "key strengths".to_string(),
                "key challenges".to_string(),
                "recommendations".to_string(),
            ],
            key_max_chars: 30,
            empty_key_value: EmptyKeyValuePolicy::KeepAsProse,
            thresholds: TierThresholds::default_v1(),
        }
    }

    pub fn from_json_str(json: &str, origin: &str) -> Result<Self, ProfileError> {
        let mut profile: ParserProfile =
            serde_json::from_str(json).map_err(|source| ProfileError::Parse {
                path: origin.to_string(),
                source,
            })?;
        for keyword in &mut profile.heading_keywords {
            *keyword = keyword.trim().to_lowercase();
        }
        profile.heading_keywords.retain(|k| !k.is_empty());
        profile.validate()?;
        Ok(profile)
    }

    pub fn load(path: &Path) -> Result<Self, ProfileError> {
        let origin = path.display().to_string();
        let json = fs::read_to_string(path).map_err(|source| ProfileError::Io {
            path: origin.clone(),
            source,
        })?;
        Self::from_json_str(&json, &origin)
    }

    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.key_max_chars == 0 {
            return Err(ProfileError::Invalid(
                "key_max_chars must be greater than zero".to_string(),
            ));
        }
        let t = &self.thresholds;
        if t.strong_min > Score::MAX {
            return Err(ProfileError::Invalid(format!(
                "strong_min {} exceeds {}",
                t.strong_min,
                Score::MAX
            )));
        }
        if t.merit_min >= t.strong_min {
            return Err(ProfileError::Invalid(format!(
                "merit_min {} must be below strong_min {}",
                t.merit_min, t.strong_min
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/profile.rs"]
mod tests;
