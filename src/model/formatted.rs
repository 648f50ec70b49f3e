use std::collections::BTreeMap;

use serde::Serialize;

/// A score in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Score(u8);

impl Score {
    pub const MAX: u32 = 100;

    pub fn new(value: u32) -> Option<Self> {
        if value <= Self::MAX {
            Some(Self(value as u8))
        } else {
            None
        }
    }

    pub fn value(self) -> u32 {
        self.0 as u32
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/100", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredHeading {
    pub text: String,
    pub score: Option<Score>,
}

/// Headings in input order plus the points grouped under each of them.
///
/// `points` is keyed by heading index; an index is absent when its heading
/// had no body lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormattedContent {
    pub headings: Vec<String>,
    pub points: BTreeMap<usize, Vec<String>>,
}

impl FormattedContent {
    pub fn points_for(&self, heading_idx: usize) -> &[String] {
        self.points
            .get(&heading_idx)
            .map(|p| p.as_slice())
            .unwrap_or(&[])
    }

    pub fn total_points(&self) -> usize {
        self.points.values().map(|p| p.len()).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub key: String,
    pub value: String,
}

impl TableRow {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}
