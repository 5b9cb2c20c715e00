//! ConvoCoach: conversational practice coach
//!
//! Pipeline per reply: text → FeatureExtractor → Scorer → tip selection.
//! Everything around it (scenarios, practice sessions, CLI, HTTP API) is
//! caller-side state built on top of the stateless core.

pub mod config;
pub mod core;
pub mod error;
pub mod types;

// =============================================================================
// SCORE RANGE
// =============================================================================

/// Lowest score any dimension can take
pub const SCORE_MIN: u8 = 0;

/// Highest score any dimension can take
pub const SCORE_MAX: u8 = 10;

// =============================================================================
// CONFIDENCE RULES
// =============================================================================

/// Token count for the full length bonus
pub const LONG_REPLY_TOKENS: usize = 18;

/// Token count for the medium length bonus
pub const MEDIUM_REPLY_TOKENS: usize = 10;

pub const CONFIDENCE_LONG_BONUS: i64 = 6;
pub const CONFIDENCE_MEDIUM_BONUS: i64 = 3;
pub const CONFIDENCE_SHORT_BONUS: i64 = 1;

/// Bonus for answering in two or more sentences (confidence and engagement)
pub const MULTI_SENTENCE_BONUS: i64 = 2;

/// Cost of each filler after the first
pub const FILLER_PENALTY: i64 = 2;

/// Cost of trailing off with "..."
pub const TRAIL_PENALTY: i64 = 2;

// =============================================================================
// ENGAGEMENT RULES
// =============================================================================

pub const QUESTION_BONUS: i64 = 4;

/// Replies shorter than this lose engagement
pub const TERSE_REPLY_TOKENS: usize = 8;
pub const TERSE_PENALTY: i64 = 2;

// =============================================================================
// FRIENDLINESS RULES
// =============================================================================

/// Maps compound sentiment [-1, 1] onto [0, 8]
pub const SENTIMENT_SCALE: f64 = 4.0;

/// Replies this short count as a bare greeting
pub const GREETING_MAX_TOKENS: usize = 2;

/// Friendliness base ceiling for a bare greeting
pub const GREETING_BASE_CAP: f64 = 2.0;

pub const THANKS_BONUS: f64 = 2.0;

// =============================================================================
// SPECIFICITY RULES
// =============================================================================

pub const NUMBERS_BONUS: i64 = 2;
pub const DOMAIN_TERMS_BONUS: i64 = 2;

/// Signal cap when counting capitalized chunks
pub const CAPITALIZED_CHUNK_CAP: usize = 6;

/// Signal cap when counting named entities
pub const NAMED_ENTITY_CAP: usize = 4;

// =============================================================================
// TIPS
// =============================================================================

/// Every dimension at or above this earns the balanced encouragement
pub const BALANCED_FLOOR: u8 = 7;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "0.3.0";
