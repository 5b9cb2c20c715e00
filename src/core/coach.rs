//! Coach: extractor → scorer → tip in one call

use log::debug;

use crate::core::analyzer::FeatureExtractor;
use crate::core::scorer::score;
use crate::core::tips::choose_tip;
use crate::error::ModelError;
use crate::types::{Feedback, SpecificitySource};

/// Stateless feedback pipeline, safe to share across threads
#[derive(Debug, Clone)]
pub struct Coach {
    extractor: FeatureExtractor,
}

impl Coach {
    pub fn new(extractor: FeatureExtractor) -> Self {
        Self { extractor }
    }

    /// Bundled sentiment model, capitalized-chunk specificity
    pub fn with_defaults() -> Result<Self, ModelError> {
        Ok(Self::new(FeatureExtractor::with_defaults()?))
    }

    pub fn with_strategy(source: SpecificitySource) -> Result<Self, ModelError> {
        Ok(Self::new(FeatureExtractor::with_strategy(source)?))
    }

    pub fn extractor(&self) -> &FeatureExtractor {
        &self.extractor
    }

    /// Evaluate one reply
    pub fn evaluate(&self, text: &str) -> Feedback {
        let features = self.extractor.extract(text);
        let scores = score(&features);
        let tip = choose_tip(&scores);
        debug!(
            "evaluated reply: tokens={} {} tip={:?}",
            features.tokens,
            scores.to_parseable_string(),
            tip
        );
        Feedback::new(features, scores, tip)
    }
}
