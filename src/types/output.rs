//! Output structures for terminal and API display

use colored::{ColoredString, Colorize};
use serde::{Deserialize, Serialize};
use crate::types::{Dimension, FeatureRecord, ScoreRecord, Tip};

/// Result of evaluating one reply
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    pub features: FeatureRecord,
    pub scores: ScoreRecord,
    /// Which tip was chosen
    pub tip: Tip,
    /// Tip text
    pub advice: String,
}

impl Feedback {
    pub fn new(features: FeatureRecord, scores: ScoreRecord, tip: Tip) -> Self {
        Self {
            features,
            scores,
            tip,
            advice: tip.text().to_string(),
        }
    }

    /// Format for terminal display (with colors)
    pub fn to_terminal_string(&self) -> String {
        let scores = self
            .scores
            .iter()
            .map(|(dimension, value)| format!("{}: {}/10", dimension, paint_score(value)))
            .collect::<Vec<_>>()
            .join(" | ");
        format!("Scores → {}\n{} {}", scores, "Tip:".italic(), self.advice)
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        format!("{} | tip={:?}", self.scores.to_parseable_string(), self.tip)
    }

    /// Feature breakdown, one per line
    pub fn to_verbose_string(&self) -> String {
        let f = &self.features;
        let mut lines = vec![
            format!("tokens:             {}", f.tokens),
            format!("sentences:          {}", f.sentences),
            format!("fillers:            {}", f.fillers),
            format!("has_question:       {}", f.has_question),
            format!("sentiment:          {:.4}", f.sentiment),
            format!("has_thanks:         {}", f.has_thanks),
            format!("has_numbers:        {}", f.has_numbers),
            format!("has_domain_terms:   {}", f.has_domain_terms),
            format!("specificity_signal: {} ({})", f.specificity_signal, f.specificity_source),
            format!("ends_trail:         {}", f.ends_trail),
        ];
        lines.push(self.scores.to_parseable_string());
        match self.tip.dimension() {
            Some(weakest) => lines.push(format!("weakest: {} → {}", weakest, self.advice)),
            None => lines.push(format!("balanced → {}", self.advice)),
        }
        lines.join("\n")
    }
}

/// Green for strong, yellow for middling, red for weak
pub fn paint_score(value: u8) -> ColoredString {
    let text = value.to_string();
    match value {
        7..=10 => text.green().bold(),
        4..=6 => text.yellow(),
        _ => text.red(),
    }
}

/// Label with its average, used by session summaries
pub fn paint_average(dimension: Dimension, average: f64) -> String {
    format!("{}: {:.1}", dimension.label().bold(), average)
}
