//! Scripted dialogue scenarios

use serde::{Deserialize, Serialize};
use std::path::Path;
use crate::error::ScenarioError;

const BUNDLED_SCENARIO: &str = include_str!("../../data/scenarios/recruiter.json");

/// One scripted turn; either side may be absent
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DialogueTurn {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bot: Option<String>,
    /// Example answer, never scored
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

/// A named, ordered list of turns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// Title shown above the conversation
    pub scenario: String,
    pub dialogue: Vec<DialogueTurn>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_note: Option<String>,
}

impl Scenario {
    pub fn from_json(json: &str) -> Result<Self, ScenarioError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a scenario file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScenarioError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ScenarioError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// The recruiter small-talk scenario shipped with the crate
    pub fn bundled() -> Result<Self, ScenarioError> {
        Self::from_json(BUNDLED_SCENARIO)
    }

    /// Bot prompts in order, skipping turns without one
    pub fn bot_prompts(&self) -> Vec<&str> {
        self.dialogue
            .iter()
            .filter_map(|turn| turn.bot.as_deref())
            .collect()
    }

    pub fn prompt_count(&self) -> usize {
        self.dialogue.iter().filter(|turn| turn.bot.is_some()).count()
    }
}
