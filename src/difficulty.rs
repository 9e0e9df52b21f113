//! Heuristic reading-level estimate from vocabulary and text complexity.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::hyperparameters::HP;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl DifficultyLevel {
    /// Declaration order, which is also the tie-break order.
    pub const ALL: [DifficultyLevel; 3] = [
        DifficultyLevel::Beginner,
        DifficultyLevel::Intermediate,
        DifficultyLevel::Advanced,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DifficultyLevel::Beginner => "beginner",
            DifficultyLevel::Intermediate => "intermediate",
            DifficultyLevel::Advanced => "advanced",
        }
    }

    fn indicators(self) -> &'static [&'static str] {
        match self {
            DifficultyLevel::Beginner => &[
                "simple",
                "basic",
                "introduction",
                "beginner",
                "overview",
                "fundamentals",
            ],
            DifficultyLevel::Intermediate => {
                &["analysis", "explores", "examines", "discusses", "considers"]
            }
            DifficultyLevel::Advanced => &[
                "comprehensive",
                "complex",
                "sophisticated",
                "advanced",
                "technical",
                "in-depth",
                "theoretical",
                "methodology",
                "paradigm",
            ],
        }
    }
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Final tallies and the complexity metrics that fed the bonus.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DifficultyScores {
    pub beginner: u32,
    pub intermediate: u32,
    pub advanced: u32,
    pub avg_word_length: f64,
    pub avg_sentence_length: f64,
}

impl DifficultyScores {
    pub fn get(&self, level: DifficultyLevel) -> u32 {
        match level {
            DifficultyLevel::Beginner => self.beginner,
            DifficultyLevel::Intermediate => self.intermediate,
            DifficultyLevel::Advanced => self.advanced,
        }
    }

    fn add(&mut self, level: DifficultyLevel, amount: u32) {
        match level {
            DifficultyLevel::Beginner => self.beginner += amount,
            DifficultyLevel::Intermediate => self.intermediate += amount,
            DifficultyLevel::Advanced => self.advanced += amount,
        }
    }

    /// Highest tally; an equal later level never displaces an earlier one.
    pub fn level(&self) -> DifficultyLevel {
        let mut best = DifficultyLevel::Beginner;
        for level in DifficultyLevel::ALL {
            if self.get(level) > self.get(best) {
                best = level;
            }
        }
        best
    }
}

pub fn score_difficulty(text: &str) -> DifficultyScores {
    let lower = text.to_lowercase();
    let words: Vec<&str> = text.split_whitespace().collect();
    let segments = text.split('.').count();

    let avg_word_length = if words.is_empty() {
        0.0
    } else {
        let total: usize = words.iter().map(|w| w.chars().count()).sum();
        total as f64 / words.len() as f64
    };
    let avg_sentence_length = if segments == 0 {
        0.0
    } else {
        words.len() as f64 / segments as f64
    };

    let mut scores = DifficultyScores {
        beginner: 0,
        intermediate: 0,
        advanced: 0,
        avg_word_length,
        avg_sentence_length,
    };

    for level in DifficultyLevel::ALL {
        for &indicator in level.indicators() {
            scores.add(level, lower.matches(indicator).count() as u32);
        }
    }

    if avg_word_length > HP.advanced_word_length || avg_sentence_length > HP.advanced_sentence_length
    {
        scores.add(DifficultyLevel::Advanced, HP.advanced_bonus);
    } else if avg_word_length > HP.intermediate_word_length
        || avg_sentence_length > HP.intermediate_sentence_length
    {
        scores.add(DifficultyLevel::Intermediate, HP.intermediate_bonus);
    } else {
        scores.add(DifficultyLevel::Beginner, HP.beginner_bonus);
    }

    scores
}

pub fn assess_difficulty(text: &str) -> DifficultyLevel {
    let scores = score_difficulty(text);
    let level = scores.level();
    tracing::debug!(
        level = %level,
        beginner = scores.beginner,
        intermediate = scores.intermediate,
        advanced = scores.advanced,
        "difficulty assessed"
    );
    level
}
