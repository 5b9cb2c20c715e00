//! Score record and dimensions

use serde::{Deserialize, Serialize};

/// The four scored dimensions, in tie-break precedence order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Confidence,
    Engagement,
    Friendliness,
    Specificity,
}

impl Dimension {
    /// All dimensions in precedence order
    pub const ALL: [Dimension; 4] = [
        Dimension::Confidence,
        Dimension::Engagement,
        Dimension::Friendliness,
        Dimension::Specificity,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Confidence => "Confidence",
            Self::Engagement => "Engagement",
            Self::Friendliness => "Friendliness",
            Self::Specificity => "Specificity",
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Four scores, each in [0, 10]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub confidence: u8,
    pub engagement: u8,
    pub friendliness: u8,
    pub specificity: u8,
}

impl ScoreRecord {
    pub fn new(confidence: u8, engagement: u8, friendliness: u8, specificity: u8) -> Self {
        Self {
            confidence,
            engagement,
            friendliness,
            specificity,
        }
    }

    /// All four dimensions at zero
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn get(&self, dimension: Dimension) -> u8 {
        match dimension {
            Dimension::Confidence => self.confidence,
            Dimension::Engagement => self.engagement,
            Dimension::Friendliness => self.friendliness,
            Dimension::Specificity => self.specificity,
        }
    }

    /// Dimension/value pairs in precedence order
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, u8)> + '_ {
        Dimension::ALL.into_iter().map(move |d| (d, self.get(d)))
    }

    /// Lowest dimension; the first one in precedence order wins ties
    pub fn weakest(&self) -> (Dimension, u8) {
        let mut lowest = (Dimension::Confidence, self.confidence);
        for (dimension, value) in self.iter().skip(1) {
            if value < lowest.1 {
                lowest = (dimension, value);
            }
        }
        lowest
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        format!(
            "confidence={} | engagement={} | friendliness={} | specificity={}",
            self.confidence, self.engagement, self.friendliness, self.specificity
        )
    }
}
