//! Scorer: maps a FeatureRecord onto four 0-10 scores
//!
//! Confidence:   length + structure, minus extra fillers and trailing off
//! Engagement:   asking back, saying more than one short line
//! Friendliness: sentiment mapped onto [0, 8] plus gratitude
//! Specificity:  numbers, domain terms, capped specificity signal

use crate::{
    CONFIDENCE_LONG_BONUS, CONFIDENCE_MEDIUM_BONUS, CONFIDENCE_SHORT_BONUS,
    DOMAIN_TERMS_BONUS, FILLER_PENALTY, GREETING_BASE_CAP, GREETING_MAX_TOKENS,
    LONG_REPLY_TOKENS, MEDIUM_REPLY_TOKENS, MULTI_SENTENCE_BONUS, NUMBERS_BONUS,
    QUESTION_BONUS, SCORE_MAX, SCORE_MIN, SENTIMENT_SCALE, TERSE_PENALTY,
    TERSE_REPLY_TOKENS, THANKS_BONUS, TRAIL_PENALTY,
};
use crate::types::{FeatureRecord, ScoreRecord};

/// Score a feature record. Total: every record maps to valid scores.
pub fn score(features: &FeatureRecord) -> ScoreRecord {
    // No content, no credit
    if features.tokens == 0 {
        return ScoreRecord::zero();
    }

    ScoreRecord {
        confidence: confidence(features),
        engagement: engagement(features),
        friendliness: friendliness(features),
        specificity: specificity(features),
    }
}

fn confidence(f: &FeatureRecord) -> u8 {
    let mut conf = if f.tokens >= LONG_REPLY_TOKENS {
        CONFIDENCE_LONG_BONUS
    } else if f.tokens >= MEDIUM_REPLY_TOKENS {
        CONFIDENCE_MEDIUM_BONUS
    } else {
        CONFIDENCE_SHORT_BONUS
    };
    if f.sentences >= 2 {
        conf += MULTI_SENTENCE_BONUS;
    }
    // First filler is free
    let extra_fillers = i64::try_from(f.fillers.saturating_sub(1)).unwrap_or(i64::MAX);
    conf = conf.saturating_sub(extra_fillers.saturating_mul(FILLER_PENALTY));
    if f.ends_trail {
        conf = conf.saturating_sub(TRAIL_PENALTY);
    }
    clip(conf as f64)
}

fn engagement(f: &FeatureRecord) -> u8 {
    let mut eng = 0;
    if f.has_question {
        eng += QUESTION_BONUS;
    }
    if f.sentences >= 2 {
        eng += MULTI_SENTENCE_BONUS;
    }
    if f.tokens < TERSE_REPLY_TOKENS {
        eng -= TERSE_PENALTY;
    }
    clip(eng as f64)
}

fn friendliness(f: &FeatureRecord) -> u8 {
    let mut base = (f.sentiment + 1.0) * SENTIMENT_SCALE;
    // A bare "Hi!" should not look friendly on sentiment alone
    if f.tokens <= GREETING_MAX_TOKENS {
        base = base.min(GREETING_BASE_CAP);
    }
    if f.has_thanks {
        base += THANKS_BONUS;
    }
    clip(base)
}

fn specificity(f: &FeatureRecord) -> u8 {
    let mut spec = 0;
    if f.has_numbers {
        spec += NUMBERS_BONUS;
    }
    if f.has_domain_terms {
        spec += DOMAIN_TERMS_BONUS;
    }
    spec += f.specificity_signal.min(f.specificity_source.cap()) as i64;
    clip(spec as f64)
}

/// Round half to even, then restrict to [0, 10]
fn clip(value: f64) -> u8 {
    if value.is_nan() {
        return SCORE_MIN;
    }
    value.round_ties_even().clamp(SCORE_MIN as f64, SCORE_MAX as f64) as u8
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SpecificitySource;
    use pretty_assertions::assert_eq;

    fn base() -> FeatureRecord {
        FeatureRecord {
            tokens: 12,
            sentences: 1,
            fillers: 0,
            has_question: false,
            sentiment: 0.0,
            has_thanks: false,
            has_numbers: false,
            has_domain_terms: false,
            specificity_signal: 0,
            specificity_source: SpecificitySource::CapitalizedChunks,
            ends_trail: false,
        }
    }

    #[test]
    fn test_zero_tokens_forces_zero() {
        let features = FeatureRecord {
            tokens: 0,
            has_question: true,
            sentiment: 1.0,
            has_thanks: true,
            has_numbers: true,
            has_domain_terms: true,
            specificity_signal: 9,
            ..base()
        };
        assert_eq!(score(&features), ScoreRecord::zero());
    }

    #[test]
    fn test_confidence_length_tiers() {
        let short = FeatureRecord { tokens: 9, ..base() };
        let medium = FeatureRecord { tokens: 10, ..base() };
        let long = FeatureRecord { tokens: 18, ..base() };
        assert_eq!(score(&short).confidence, 1);
        assert_eq!(score(&medium).confidence, 3);
        assert_eq!(score(&long).confidence, 6);
    }

    #[test]
    fn test_confidence_first_filler_free() {
        let one = FeatureRecord { fillers: 1, ..base() };
        let three = FeatureRecord { fillers: 3, ..base() };
        assert_eq!(score(&one).confidence, 3);
        assert_eq!(score(&three).confidence, 0);
    }

    #[test]
    fn test_confidence_structure_and_trail() {
        let features = FeatureRecord { tokens: 20, sentences: 3, ends_trail: true, ..base() };
        assert_eq!(score(&features).confidence, 6);
    }

    #[test]
    fn test_confidence_never_above_max() {
        let features = FeatureRecord { tokens: 500, sentences: 40, ..base() };
        assert_eq!(score(&features).confidence, 8);
    }

    #[test]
    fn test_huge_filler_count_clamps_to_zero() {
        let features = FeatureRecord { fillers: usize::MAX, ..base() };
        assert_eq!(score(&features).confidence, 0);
    }

    #[test]
    fn test_engagement() {
        let terse = FeatureRecord { tokens: 3, ..base() };
        let asking = FeatureRecord { tokens: 14, sentences: 2, has_question: true, ..base() };
        assert_eq!(score(&terse).engagement, 0);
        assert_eq!(score(&asking).engagement, 6);
    }

    #[test]
    fn test_friendliness_maps_sentiment() {
        let negative = FeatureRecord { sentiment: -1.0, ..base() };
        let neutral = FeatureRecord { sentiment: 0.0, ..base() };
        let positive = FeatureRecord { sentiment: 1.0, has_thanks: true, ..base() };
        assert_eq!(score(&negative).friendliness, 0);
        assert_eq!(score(&neutral).friendliness, 4);
        assert_eq!(score(&positive).friendliness, 10);
    }

    #[test]
    fn test_friendliness_rounds_not_truncates() {
        // (0.6 + 1) * 4 = 6.4 -> 6, (0.65 + 1) * 4 = 6.6 -> 7
        let low = FeatureRecord { sentiment: 0.6, ..base() };
        let high = FeatureRecord { sentiment: 0.65, ..base() };
        assert_eq!(score(&low).friendliness, 6);
        assert_eq!(score(&high).friendliness, 7);
    }

    #[test]
    fn test_friendliness_halves_round_to_even() {
        // (0.125 + 1) * 4 = 4.5 -> 4, (0.375 + 1) * 4 = 5.5 -> 6
        let low = FeatureRecord { sentiment: 0.125, ..base() };
        let high = FeatureRecord { sentiment: 0.375, ..base() };
        assert_eq!(score(&low).friendliness, 4);
        assert_eq!(score(&high).friendliness, 6);
    }

    #[test]
    fn test_friendliness_greeting_cap() {
        let hi = FeatureRecord { tokens: 1, sentiment: 0.9, ..base() };
        let thanks = FeatureRecord { tokens: 2, sentiment: 0.9, has_thanks: true, ..base() };
        assert_eq!(score(&hi).friendliness, 2);
        assert_eq!(score(&thanks).friendliness, 4);
    }

    #[test]
    fn test_specificity_caps_follow_strategy() {
        let chunks = FeatureRecord {
            has_numbers: true,
            has_domain_terms: true,
            specificity_signal: 20,
            ..base()
        };
        let entities = FeatureRecord {
            specificity_source: SpecificitySource::NamedEntities,
            ..chunks.clone()
        };
        assert_eq!(score(&chunks).specificity, 10);
        assert_eq!(score(&entities).specificity, 8);
    }

    #[test]
    fn test_nan_sentiment_scores_zero_friendliness() {
        let features = FeatureRecord { sentiment: f64::NAN, ..base() };
        assert_eq!(score(&features).friendliness, 0);
    }
}
