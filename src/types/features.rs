//! Feature record produced by the extractor

use serde::{Deserialize, Serialize};
use crate::{CAPITALIZED_CHUNK_CAP, NAMED_ENTITY_CAP};

/// Which strategy produced `specificity_signal`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecificitySource {
    /// Capitalized words of length >= 3, not at the start of the text
    #[default]
    CapitalizedChunks,
    /// Runs of proper nouns found by the entity recognizer
    NamedEntities,
}

impl SpecificitySource {
    /// Largest signal the scorer will credit, so specificity tops out at 10
    pub fn cap(&self) -> usize {
        match self {
            Self::CapitalizedChunks => CAPITALIZED_CHUNK_CAP,
            Self::NamedEntities => NAMED_ENTITY_CAP,
        }
    }
}

impl std::fmt::Display for SpecificitySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::CapitalizedChunks => "capitalized_chunks",
            Self::NamedEntities => "named_entities",
        };
        write!(f, "{}", name)
    }
}

/// Linguistic signals of one reply
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRecord {
    /// Whitespace-separated words
    pub tokens: usize,
    /// Non-empty segments between runs of `.`, `!`, `?`
    pub sentences: usize,
    /// um, uh, erm, like, you know, kinda, sorta
    pub fillers: usize,
    pub has_question: bool,
    /// Compound polarity in [-1, 1]
    pub sentiment: f64,
    pub has_thanks: bool,
    pub has_numbers: bool,
    pub has_domain_terms: bool,
    pub specificity_signal: usize,
    pub specificity_source: SpecificitySource,
    /// Trimmed text ends with "..."
    pub ends_trail: bool,
}

impl FeatureRecord {
    /// Features of an empty reply
    pub fn empty(source: SpecificitySource) -> Self {
        Self {
            tokens: 0,
            sentences: 0,
            fillers: 0,
            has_question: false,
            sentiment: 0.0,
            has_thanks: false,
            has_numbers: false,
            has_domain_terms: false,
            specificity_signal: 0,
            specificity_source: source,
            ends_trail: false,
        }
    }
}
