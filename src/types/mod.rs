//! Core types for ConvoCoach

mod features;
mod scores;
mod tip;
mod output;
mod scenario;
mod turn;

pub use features::{FeatureRecord, SpecificitySource};
pub use scores::{Dimension, ScoreRecord};
pub use tip::Tip;
pub use output::{Feedback, paint_score, paint_average};
pub use scenario::{Scenario, DialogueTurn};
pub use turn::{TurnRecord, SessionSummary};
