//! Session log entries
//!
//! A turn is one bot prompt plus the user's scored reply. The log layout
//! matches the saved sessions file: an array of logs, each an array of turns.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::types::{Dimension, ScoreRecord};

/// One answered prompt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnRecord {
    pub bot: String,
    pub user: String,
    pub scores: ScoreRecord,
    pub tip: String,
    pub timestamp: DateTime<Utc>,
}

impl TurnRecord {
    pub fn new(bot: impl Into<String>, user: impl Into<String>, scores: ScoreRecord, tip: impl Into<String>) -> Self {
        Self {
            bot: bot.into(),
            user: user.into(),
            scores,
            tip: tip.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Per-dimension averages over a session log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub turns: usize,
    pub confidence: f64,
    pub engagement: f64,
    pub friendliness: f64,
    pub specificity: f64,
}

impl SessionSummary {
    /// Averages rounded to one decimal; None for an empty log
    pub fn from_turns(turns: &[TurnRecord]) -> Option<Self> {
        if turns.is_empty() {
            return None;
        }

        let n = turns.len() as f64;
        let average = |dimension: Dimension| {
            let total: u32 = turns.iter().map(|t| t.scores.get(dimension) as u32).sum();
            round_one_decimal(total as f64 / n)
        };

        Some(Self {
            turns: turns.len(),
            confidence: average(Dimension::Confidence),
            engagement: average(Dimension::Engagement),
            friendliness: average(Dimension::Friendliness),
            specificity: average(Dimension::Specificity),
        })
    }

    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Confidence => self.confidence,
            Dimension::Engagement => self.engagement,
            Dimension::Friendliness => self.friendliness,
            Dimension::Specificity => self.specificity,
        }
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn turn(c: u8, e: u8, f: u8, s: u8) -> TurnRecord {
        TurnRecord::new("Hi", "Hello", ScoreRecord::new(c, e, f, s), "tip")
    }

    #[test]
    fn test_empty_log_has_no_summary() {
        assert!(SessionSummary::from_turns(&[]).is_none());
    }

    #[test]
    fn test_averages_round_to_one_decimal() {
        let turns = vec![turn(1, 4, 6, 0), turn(2, 4, 7, 10), turn(2, 5, 7, 3)];
        let summary = SessionSummary::from_turns(&turns).unwrap();

        assert_eq!(summary.turns, 3);
        assert_eq!(summary.confidence, 1.7);
        assert_eq!(summary.engagement, 4.3);
        assert_eq!(summary.friendliness, 6.7);
        assert_eq!(summary.specificity, 4.3);
    }
}
