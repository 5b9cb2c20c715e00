//! Error types
//!
//! Degenerate input (empty replies) is never an error; it scores zero.

use std::path::PathBuf;
use thiserror::Error;

/// Sentiment or entity model could not be initialised. Fatal at startup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("sentiment lexicon is empty; reinstall the bundled lexicon or point --lexicon at a word<TAB>valence file")]
    EmptyLexicon,

    #[error("sentiment lexicon line {line} is malformed ({content:?}); expected word<TAB>valence")]
    MalformedLexicon { line: usize, content: String },

    #[error("cannot read sentiment lexicon {path}: {reason}; download the lexicon or drop --lexicon to use the bundled one")]
    LexiconUnreadable { path: PathBuf, reason: String },
}

/// Scenario file problems
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("cannot read scenario {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("scenario is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Practice session problems
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("scenario finished; restart the session to practice again")]
    Finished,

    #[error("session log I/O failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("session log is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
