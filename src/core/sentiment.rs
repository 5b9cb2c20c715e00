//! Sentiment: lexicon-based compound polarity
//!
//! Word valences come from a `word<TAB>valence` lexicon. Boosters, negation,
//! ALL-CAPS emphasis, a contrastive "but" and trailing punctuation adjust the
//! sum, which is then squashed into [-1, 1].

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use lazy_static::lazy_static;
use log::info;

use crate::error::ModelError;

const BUNDLED_LEXICON: &str = include_str!("../../data/sentiment_lexicon.tsv");

/// Normalization constant for s / sqrt(s² + alpha)
const NORMALIZE_ALPHA: f64 = 15.0;

const BOOSTER_INCREMENT: f64 = 0.293;
const DAMPENER_DECREMENT: f64 = -0.293;
const CAPS_INCREMENT: f64 = 0.733;
const NEGATION_SCALAR: f64 = -0.74;

/// Booster weight by distance (1, 2, 3 words before)
const BOOSTER_DECAY: [f64; 3] = [1.0, 0.95, 0.9];

const BUT_BEFORE_SCALAR: f64 = 0.5;
const BUT_AFTER_SCALAR: f64 = 1.5;

const EXCLAMATION_INCREMENT: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;
const QUESTION_INCREMENT: f64 = 0.18;
const QUESTION_CEILING: f64 = 0.96;

lazy_static! {
    static ref BOOSTERS: HashMap<&'static str, f64> = {
        let mut map = HashMap::new();
        for word in [
            "absolutely", "amazingly", "completely", "deeply", "especially",
            "extremely", "highly", "incredibly", "really", "so", "super",
            "totally", "truly", "very", "most", "more",
        ] {
            map.insert(word, BOOSTER_INCREMENT);
        }
        for word in [
            "barely", "hardly", "kinda", "less", "little",
            "marginally", "occasionally", "partly", "slightly", "somewhat", "sorta",
        ] {
            map.insert(word, DAMPENER_DECREMENT);
        }
        map
    };

    static ref NEGATIONS: Vec<&'static str> = vec![
        "not", "no", "never", "none", "nobody", "nothing", "neither", "nor",
        "nowhere", "cannot", "without", "aint", "isnt", "dont", "doesnt",
        "didnt", "wont", "wasnt", "cant", "couldnt", "shouldnt",
    ];

    /// Bundled model, built once per process on first use
    static ref SHARED_MODEL: Result<Arc<SentimentModel>, ModelError> =
        SentimentModel::bundled().map(Arc::new);
}

/// Anything that can turn text into a compound polarity in [-1, 1]
pub trait PolarityScorer: Send + Sync + std::fmt::Debug {
    fn compound(&self, text: &str) -> f64;
}

/// Lexicon-backed sentiment model
#[derive(Debug, Clone)]
pub struct SentimentModel {
    lexicon: HashMap<String, f64>,
}

impl SentimentModel {
    /// Parse a `word<TAB>valence[<TAB>...]` lexicon; `#` starts a comment line
    pub fn from_lexicon(source: &str) -> Result<Self, ModelError> {
        let mut lexicon = HashMap::new();

        for (idx, line) in source.lines().enumerate() {
            let line = line.trim_end();
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }

            let mut fields = line.split('\t');
            let word = fields.next().map(str::trim).unwrap_or_default();
            let valence = fields
                .next()
                .and_then(|v| v.trim().parse::<f64>().ok())
                .filter(|v| v.is_finite());

            match valence {
                Some(v) if !word.is_empty() => {
                    lexicon.insert(word.to_lowercase(), v);
                }
                _ => {
                    return Err(ModelError::MalformedLexicon {
                        line: idx + 1,
                        content: line.to_string(),
                    })
                }
            }
        }

        if lexicon.is_empty() {
            return Err(ModelError::EmptyLexicon);
        }
        Ok(Self { lexicon })
    }

    /// Model built from the lexicon compiled into the crate
    pub fn bundled() -> Result<Self, ModelError> {
        let model = Self::from_lexicon(BUNDLED_LEXICON)?;
        info!("loaded bundled sentiment lexicon ({} entries)", model.len());
        Ok(model)
    }

    /// Model built from a lexicon file on disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| ModelError::LexiconUnreadable {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let model = Self::from_lexicon(&source)?;
        info!("loaded sentiment lexicon {} ({} entries)", path.display(), model.len());
        Ok(model)
    }

    /// Process-wide bundled model; initialised at most once
    pub fn shared() -> Result<Arc<SentimentModel>, ModelError> {
        SHARED_MODEL.clone()
    }

    pub fn len(&self) -> usize {
        self.lexicon.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lexicon.is_empty()
    }

    pub fn valence(&self, word: &str) -> Option<f64> {
        self.lexicon.get(&word.to_lowercase()).copied()
    }

    fn word_valences(&self, words: &[&str]) -> Vec<f64> {
        let cleaned: Vec<&str> = words.iter().map(|w| strip_punctuation(w)).collect();
        let lowered: Vec<String> = cleaned.iter().map(|w| w.to_lowercase()).collect();
        let mixed_case = has_mixed_case(&cleaned);

        let mut valences = Vec::with_capacity(words.len());
        for (i, word) in lowered.iter().enumerate() {
            if BOOSTERS.contains_key(word.as_str()) {
                valences.push(0.0);
                continue;
            }
            // "kind of" is a hedge, not an adjective
            if word == "kind" && lowered.get(i + 1).map(String::as_str) == Some("of") {
                valences.push(0.0);
                continue;
            }
            let Some(mut valence) = self.lexicon.get(word).copied() else {
                valences.push(0.0);
                continue;
            };

            if mixed_case && is_shouting(cleaned[i]) {
                valence += CAPS_INCREMENT.copysign(valence);
            }

            for (distance, decay) in BOOSTER_DECAY.iter().enumerate() {
                let Some(j) = i.checked_sub(distance + 1) else {
                    break;
                };
                if let Some(boost) = BOOSTERS.get(lowered[j].as_str()) {
                    let mut scalar = if valence < 0.0 { -boost } else { *boost };
                    if mixed_case && is_shouting(cleaned[j]) {
                        scalar += CAPS_INCREMENT.copysign(valence);
                    }
                    valence += scalar * decay;
                }
            }

            let negated = (1..=3)
                .filter_map(|d| i.checked_sub(d))
                .any(|j| is_negation(&lowered[j]));
            if negated {
                valence *= NEGATION_SCALAR;
            }

            valences.push(valence);
        }

        if let Some(pivot) = lowered.iter().position(|w| w == "but") {
            for (i, v) in valences.iter_mut().enumerate() {
                if i < pivot {
                    *v *= BUT_BEFORE_SCALAR;
                } else if i > pivot {
                    *v *= BUT_AFTER_SCALAR;
                }
            }
        }

        valences
    }
}

impl PolarityScorer for SentimentModel {
    fn compound(&self, text: &str) -> f64 {
        let normalized = text.replace(['\u{2019}', '\u{2018}'], "'");
        let words: Vec<&str> = normalized.split_whitespace().collect();
        if words.is_empty() {
            return 0.0;
        }

        let mut sum: f64 = self.word_valences(&words).iter().sum();
        if sum == 0.0 {
            return 0.0;
        }

        let emphasis = punctuation_emphasis(&normalized);
        sum += emphasis.copysign(sum);

        normalize(sum)
    }
}

/// Squash an unbounded valence sum into [-1, 1]
fn normalize(score: f64) -> f64 {
    (score / (score * score + NORMALIZE_ALPHA).sqrt()).clamp(-1.0, 1.0)
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(MAX_EXCLAMATIONS) as f64;
    let questions = text.matches('?').count();
    let question_emphasis = match questions {
        0 | 1 => 0.0,
        2 | 3 => questions as f64 * QUESTION_INCREMENT,
        _ => QUESTION_CEILING,
    };
    exclamations * EXCLAMATION_INCREMENT + question_emphasis
}

fn strip_punctuation(word: &str) -> &str {
    word.trim_matches(|c: char| c.is_ascii_punctuation() && c != '\'')
        .trim_matches('\'')
}

fn is_negation(word: &str) -> bool {
    word.ends_with("n't") || NEGATIONS.iter().any(|n| *n == word)
}

/// Word written entirely in capitals, e.g. "LOVE"
fn is_shouting(word: &str) -> bool {
    word.chars().any(|c| c.is_alphabetic())
        && word.chars().filter(|c| c.is_alphabetic()).all(|c| c.is_uppercase())
}

/// Some words shouted and some not; shouting only counts as emphasis then
fn has_mixed_case(words: &[&str]) -> bool {
    let shouted = words.iter().filter(|w| is_shouting(w)).count();
    shouted > 0 && shouted < words.iter().filter(|w| w.chars().any(|c| c.is_alphabetic())).count()
}

// =============================================================================
// TESTS
// =============================================================================
