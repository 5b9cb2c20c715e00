//! Integration tests for the feedback pipeline
//!
//! Tests the full path: text → FeatureExtractor → score → tip

use convocoach::core::{score, select_tip, Coach, FeatureExtractor};
use convocoach::types::{FeatureRecord, ScoreRecord, SpecificitySource, Tip};
use pretty_assertions::assert_eq;

fn extractor() -> FeatureExtractor {
    FeatureExtractor::with_defaults().unwrap()
}

fn record(tokens: usize) -> FeatureRecord {
    FeatureRecord {
        tokens,
        sentences: 1,
        fillers: 0,
        has_question: false,
        sentiment: 0.2,
        has_thanks: false,
        has_numbers: false,
        has_domain_terms: false,
        specificity_signal: 1,
        specificity_source: SpecificitySource::CapitalizedChunks,
        ends_trail: false,
    }
}

/// Scores stay in range for assorted replies
#[test]
fn test_scores_always_in_range() {
    let ex = extractor();
    let replies = [
        "",
        "Hi",
        "?",
        "...",
        "um uh erm like you know kinda sorta um uh erm like",
        "THANK YOU SO MUCH!!!! This is AMAZING!!!!",
        "I hate this. It's terrible, awful, the worst. Never again...",
        "We migrated 14 services from Java to Kafka Streams at Acme, Globex, Initech, Umbrella, Hooli and Stark Industries. How about you? What's your stack?",
        "1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22",
    ];

    for reply in replies {
        let scores = score(&ex.extract(reply));
        for (dimension, value) in scores.iter() {
            assert!(value <= 10, "{} out of range for {:?}: {}", dimension, reply, value);
        }
    }
}

/// Empty and whitespace-only replies score zero everywhere
#[test]
fn test_empty_reply_scores_zero() {
    let ex = extractor();
    assert_eq!(ex.extract("").tokens, 0);
    assert_eq!(score(&ex.extract("")), ScoreRecord::zero());
    assert_eq!(score(&ex.extract(" \n\t ")), ScoreRecord::zero());
}

/// More words never lower confidence
#[test]
fn test_confidence_monotone_in_tokens() {
    let mut previous = 0;
    for tokens in 5..=20 {
        let confidence = score(&record(tokens)).confidence;
        assert!(confidence >= previous, "confidence dropped at {} tokens", tokens);
        previous = confidence;
    }
}

/// Fillers only cost confidence
#[test]
fn test_filler_penalty() {
    let clean = record(12);
    let hedged = FeatureRecord { fillers: 3, ..record(12) };
    assert!(score(&clean).confidence >= score(&hedged).confidence);
}

/// A greeting cannot look friendly on sentiment alone
#[test]
fn test_short_reply_friendliness_cap() {
    for sentiment in [-1.0, -0.3, 0.0, 0.5, 1.0] {
        for tokens in 1..=2 {
            let plain = FeatureRecord { sentiment, ..record(tokens) };
            let thanks = FeatureRecord { has_thanks: true, ..plain.clone() };
            assert!(score(&plain).friendliness <= 2);
            assert!(score(&thanks).friendliness <= 4);
        }
    }

    let ex = extractor();
    assert!(score(&ex.extract("Hi!!")).friendliness <= 2);
    assert!(score(&ex.extract("Thanks!")).friendliness <= 4);
}

/// Same text, same features
#[test]
fn test_extract_idempotent() {
    let ex = extractor();
    let text = "Thanks for asking! I kinda work on ML stuff... you know?";
    let first = ex.extract(text);
    for _ in 0..5 {
        assert_eq!(ex.extract(text), first);
    }
}

/// Tie between confidence and engagement goes to confidence
#[test]
fn test_tip_tie_break() {
    let scores = ScoreRecord::new(3, 3, 8, 9);
    assert_eq!(select_tip(&scores), Tip::Confidence.text());
}

/// Concrete, curious reply
#[test]
fn test_specific_engaged_reply() {
    let text = "I led a 3-person team shipping a Python data pipeline. What does your team usually work on?";
    let features = extractor().extract(text);

    assert!(features.has_numbers);
    assert!(features.has_domain_terms);
    assert!(features.has_question);
    assert!(features.tokens >= 15);
    assert_eq!(features.tokens, 17);
    assert_eq!(features.sentences, 2);
    assert_eq!(features.specificity_signal, 2); // Python, What

    let scores = score(&features);
    // 17 tokens sits in the medium tier: 3 + 2 for two sentences
    assert_eq!(scores.confidence, 5);
    assert!(scores.engagement >= 6);
    assert!(scores.specificity >= 4);
}

/// Hedged, trailing reply
#[test]
fn test_hedged_trailing_reply() {
    let features = extractor().extract("um like yeah...");

    assert!(features.fillers >= 2);
    assert!(features.ends_trail);
    assert!(features.tokens < 10);
    assert!(score(&features).confidence <= 2);
}

/// Coach output agrees with running the stages by hand
#[test]
fn test_coach_matches_stages() {
    let coach = Coach::with_defaults().unwrap();
    let text = "Thanks for having me! I design onboarding flows in Figma for 3 teams.";

    let feedback = coach.evaluate(text);
    let features = extractor().extract(text);
    let scores = score(&features);

    assert_eq!(feedback.features, features);
    assert_eq!(feedback.scores, scores);
    assert_eq!(feedback.advice, select_tip(&scores));
}

/// Entity strategy never pushes specificity past 10
#[test]
fn test_entity_strategy_max_specificity() {
    let coach = Coach::with_strategy(SpecificitySource::NamedEntities).unwrap();
    let feedback = coach.evaluate(
        "At 22 we used Python with Acme, Globex, Initech, Hooli, Umbrella and Stark on data work.",
    );
    assert_eq!(feedback.features.specificity_source, SpecificitySource::NamedEntities);
    assert!(feedback.features.specificity_signal > 4);
    assert_eq!(feedback.scores.specificity, 8);
}

/// JSON output is valid and round-trips
#[test]
fn test_json_output_valid() {
    let coach = Coach::with_defaults().unwrap();
    let feedback = coach.evaluate("Nice to meet you! I work on React apps.");

    let json = serde_json::to_string(&feedback).unwrap();
    assert!(json.contains("\"scores\""));
    assert!(json.contains("\"features\""));
    assert!(json.contains("\"specificity_source\":\"capitalized_chunks\""));

    let back: convocoach::types::Feedback = serde_json::from_str(&json).unwrap();
    assert_eq!(back.scores, feedback.scores);
    assert_eq!(back.tip, feedback.tip);
    assert!((back.features.sentiment - feedback.features.sentiment).abs() < 1e-12);
}

/// Parseable output format
#[test]
fn test_parseable_output_format() {
    let coach = Coach::with_defaults().unwrap();
    let formatted = coach.evaluate("Hello there.").to_parseable_string();

    assert!(formatted.contains("confidence="));
    assert!(formatted.contains("engagement="));
    assert!(formatted.contains("friendliness="));
    assert!(formatted.contains("specificity="));
    assert!(formatted.contains("tip="));
}
