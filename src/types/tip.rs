//! Canned improvement tips

use serde::{Deserialize, Serialize};
use crate::types::Dimension;

/// One of the five fixed tips
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tip {
    Confidence,
    Engagement,
    Friendliness,
    Specificity,
    /// Every dimension already strong
    Balanced,
}

impl Tip {
    /// Tip targeting a weak dimension
    pub fn for_dimension(dimension: Dimension) -> Self {
        match dimension {
            Dimension::Confidence => Self::Confidence,
            Dimension::Engagement => Self::Engagement,
            Dimension::Friendliness => Self::Friendliness,
            Dimension::Specificity => Self::Specificity,
        }
    }

    /// Dimension this tip targets; `None` for the balanced tip
    pub fn dimension(&self) -> Option<Dimension> {
        match self {
            Self::Confidence => Some(Dimension::Confidence),
            Self::Engagement => Some(Dimension::Engagement),
            Self::Friendliness => Some(Dimension::Friendliness),
            Self::Specificity => Some(Dimension::Specificity),
            Self::Balanced => None,
        }
    }

    /// The suggestion shown to the user
    pub fn text(&self) -> &'static str {
        match self {
            Self::Confidence => "Add one more sentence and remove a filler word. Try starting with a clear headline about yourself.",
            Self::Engagement => "Ask one follow-up question to keep the conversation going (e.g., 'What projects does your team enjoy most?').",
            Self::Friendliness => "Add a warm tone marker like 'Thanks for asking' or 'I appreciate your time'.",
            Self::Specificity => "Include one concrete detail: a project name, tool, number, or outcome.",
            Self::Balanced => "Nice balance! Keep answers specific and end with a friendly follow-up question.",
        }
    }
}

impl std::fmt::Display for Tip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text())
    }
}
