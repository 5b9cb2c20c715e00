//! Specificity signal providers
//!
//! Two interchangeable strategies reward concrete detail. Each reports its
//! source so the scorer applies the matching cap.

use std::sync::Arc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::types::SpecificitySource;

lazy_static! {
    /// Capitalized word of length >= 3
    static ref RE_CAPITALIZED: Regex = Regex::new(r"\b[A-Z][a-zA-Z0-9_-]{2,}\b").unwrap();
}

/// Counts concrete-detail markers in a reply
pub trait SpecificitySignal: Send + Sync + std::fmt::Debug {
    fn source(&self) -> SpecificitySource;

    /// Count for already-trimmed text
    fn count(&self, text: &str) -> usize;
}

/// Capitalized chunks, ignoring one that opens the text
#[derive(Debug, Default, Clone, Copy)]
pub struct CapitalizedChunks;

impl SpecificitySignal for CapitalizedChunks {
    fn source(&self) -> SpecificitySource {
        SpecificitySource::CapitalizedChunks
    }

    fn count(&self, text: &str) -> usize {
        RE_CAPITALIZED
            .find_iter(text)
            .filter(|m| m.start() != 0)
            .count()
    }
}

/// Heuristic named-entity recognizer
///
/// A run of consecutive capitalized tokens that is not sentence-initial is
/// one entity ("Acme Corp", "Berlin"). Commas, semicolons and colons end a
/// run. The pronoun "I" and its contractions never count.
#[derive(Debug, Default, Clone, Copy)]
pub struct NamedEntities;

impl SpecificitySignal for NamedEntities {
    fn source(&self) -> SpecificitySource {
        SpecificitySource::NamedEntities
    }

    fn count(&self, text: &str) -> usize {
        let mut entities = 0;
        let mut in_run = false;
        let mut sentence_start = true;

        for raw in text.split_whitespace() {
            let word = raw.trim_matches(|c: char| !c.is_alphanumeric());

            if !sentence_start && is_proper(word) {
                if !in_run {
                    entities += 1;
                    in_run = true;
                }
            } else {
                in_run = false;
            }

            if raw.ends_with(|c: char| matches!(c, ',' | ';' | ':')) {
                in_run = false;
            }
            sentence_start = raw.ends_with(|c: char| matches!(c, '.' | '!' | '?'));
        }

        entities
    }
}

fn is_proper(word: &str) -> bool {
    if word.chars().count() < 2 || word.starts_with("I'") {
        return false;
    }
    word.chars().next().is_some_and(|c| c.is_uppercase())
}

/// Provider for a configured strategy
pub fn provider_for(source: SpecificitySource) -> Arc<dyn SpecificitySignal> {
    match source {
        SpecificitySource::CapitalizedChunks => Arc::new(CapitalizedChunks),
        SpecificitySource::NamedEntities => Arc::new(NamedEntities),
    }
}
