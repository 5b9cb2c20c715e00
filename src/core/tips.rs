//! Tip selection: one suggestion aimed at the weakest dimension

use crate::BALANCED_FLOOR;
use crate::types::{ScoreRecord, Tip};

/// Pick the tip for a score record.
///
/// The lowest dimension wins; ties go to confidence, engagement,
/// friendliness, specificity in that order. When every dimension is at
/// least `BALANCED_FLOOR` there is nothing to fix and the balanced
/// encouragement is returned instead.
pub fn choose_tip(scores: &ScoreRecord) -> Tip {
    if scores.iter().all(|(_, value)| value >= BALANCED_FLOOR) {
        return Tip::Balanced;
    }
    let (weakest, _) = scores.weakest();
    Tip::for_dimension(weakest)
}

/// Tip text for a score record
pub fn select_tip(scores: &ScoreRecord) -> &'static str {
    choose_tip(scores).text()
}
