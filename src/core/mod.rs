//! Core modules for ConvoCoach

pub mod sentiment;
pub mod specificity;
pub mod analyzer;
pub mod scorer;
pub mod tips;
pub mod coach;
pub mod practice;
pub mod store;
pub mod api;

pub use sentiment::{PolarityScorer, SentimentModel};
pub use specificity::{provider_for, CapitalizedChunks, NamedEntities, SpecificitySignal};
pub use analyzer::FeatureExtractor;
pub use scorer::score;
pub use tips::{choose_tip, select_tip};
pub use coach::Coach;
pub use practice::PracticeSession;
pub use store::SessionStore;
pub use api::{create_router, run_server, AppState};
