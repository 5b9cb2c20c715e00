//! Feature extractor: turns a reply into a FeatureRecord
//!
//! Regex patterns are compiled once; the sentiment model and specificity
//! provider are injected so tests can swap them.

use std::sync::Arc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::core::sentiment::{PolarityScorer, SentimentModel};
use crate::core::specificity::{provider_for, SpecificitySignal};
use crate::error::ModelError;
use crate::types::{FeatureRecord, SpecificitySource};

lazy_static! {
    static ref RE_SENTENCE_BREAK: Regex = Regex::new(r"[.!?]+").unwrap();

    // Verbal hedges; "umm"/"uhhh" elongations count once
    static ref RE_FILLERS: Regex = Regex::new(
        r"(?i)\b(um+|uh+|erm|like|you know|kinda|sorta)\b"
    ).unwrap();

    static ref RE_THANKS: Regex = Regex::new(
        r"(?i)\b(thanks|thank you|appreciate)\b"
    ).unwrap();

    // Programming, design and data vocabulary
    static ref RE_DOMAIN_TERMS: Regex = Regex::new(
        r"(?i)\b(python|java|figma|design|api|dataset|pipeline|kafka|pytorch|react|sql|ml|data)\b"
    ).unwrap();
}

/// Extracts linguistic features from a single reply
#[derive(Debug, Clone)]
pub struct FeatureExtractor {
    sentiment: Arc<dyn PolarityScorer>,
    specificity: Arc<dyn SpecificitySignal>,
}

impl FeatureExtractor {
    pub fn new(sentiment: Arc<dyn PolarityScorer>, specificity: Arc<dyn SpecificitySignal>) -> Self {
        Self { sentiment, specificity }
    }

    /// Shared bundled sentiment model with capitalized-chunk specificity
    pub fn with_defaults() -> Result<Self, ModelError> {
        Self::with_strategy(SpecificitySource::default())
    }

    /// Shared bundled sentiment model with the given specificity strategy
    pub fn with_strategy(source: SpecificitySource) -> Result<Self, ModelError> {
        let sentiment: Arc<dyn PolarityScorer> = SentimentModel::shared()?;
        Ok(Self::new(sentiment, provider_for(source)))
    }

    pub fn specificity_source(&self) -> SpecificitySource {
        self.specificity.source()
    }

    /// Derive all features from the trimmed text
    pub fn extract(&self, text: &str) -> FeatureRecord {
        let text = text.trim();

        if text.is_empty() {
            return FeatureRecord::empty(self.specificity.source());
        }

        FeatureRecord {
            tokens: text.split_whitespace().count(),
            sentences: count_sentences(text),
            fillers: RE_FILLERS.find_iter(text).count(),
            has_question: text.contains('?'),
            sentiment: self.sentiment.compound(text).clamp(-1.0, 1.0),
            has_thanks: RE_THANKS.is_match(text),
            has_numbers: text.bytes().any(|b| b.is_ascii_digit()),
            has_domain_terms: RE_DOMAIN_TERMS.is_match(text),
            specificity_signal: self.specificity.count(text),
            specificity_source: self.specificity.source(),
            ends_trail: text.ends_with("..."),
        }
    }
}

/// Segments between runs of sentence punctuation that contain something
fn count_sentences(text: &str) -> usize {
    RE_SENTENCE_BREAK
        .split(text)
        .filter(|segment| !segment.trim().is_empty())
        .count()
}

// =============================================================================
// TESTS
// =============================================================================
