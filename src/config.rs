//! Runtime configuration
//!
//! An optional JSON file supplies defaults; CLI flags override it.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::{provider_for, Coach, FeatureExtractor, PolarityScorer, SentimentModel};
use crate::error::{ModelError, ScenarioError};
use crate::types::{Scenario, SpecificitySource};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoachConfig {
    /// Scenario file; the bundled recruiter scenario when unset
    pub scenario_path: Option<PathBuf>,
    /// Where saved session logs accumulate
    pub sessions_path: PathBuf,
    /// HTTP listen address
    pub addr: String,
    pub strategy: SpecificitySource,
    /// Custom sentiment lexicon; the bundled one when unset
    pub lexicon_path: Option<PathBuf>,
}

impl Default for CoachConfig {
    fn default() -> Self {
        Self {
            scenario_path: None,
            sessions_path: PathBuf::from("data/sessions.json"),
            addr: "127.0.0.1:3000".to_string(),
            strategy: SpecificitySource::default(),
            lexicon_path: None,
        }
    }
}

impl CoachConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config {}", path.display()))
    }

    /// Config file when given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn scenario(&self) -> Result<Scenario, ScenarioError> {
        match &self.scenario_path {
            Some(path) => Scenario::load(path),
            None => Scenario::bundled(),
        }
    }

    /// Build the coach, failing fast when the sentiment model cannot load
    pub fn build_coach(&self) -> Result<Coach, ModelError> {
        let sentiment: Arc<dyn PolarityScorer> = match &self.lexicon_path {
            Some(path) => Arc::new(SentimentModel::load(path)?),
            None => SentimentModel::shared()?,
        };
        let extractor = FeatureExtractor::new(sentiment, provider_for(self.strategy));
        Ok(Coach::new(extractor))
    }
}
