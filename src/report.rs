use serde::Serialize;

use crate::difficulty::DifficultyLevel;
use crate::error::Result;

/// Serialize any report, pretty-printed or on one line.
pub fn to_json<T: Serialize>(report: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };
    Ok(json)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CritiqueReport {
    pub critical_summary: String,
    pub logical_gaps: Vec<String>,
    pub unsupported_claims: Vec<String>,
    pub follow_up_questions: Vec<String>,
    pub related_topics: Vec<String>,
}

/// Everything known about one document, ready to hand to a response layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub title: String,
    pub source: String,
    pub text_preview: String,
    pub word_count: usize,

    pub summary: String,
    pub topics: Vec<String>,
    pub sentiment: String,
    pub sentiment_score: f64,
    pub difficulty_level: DifficultyLevel,

    pub critical_analysis: String,
    pub logical_gaps: Vec<String>,
    pub unsupported_claims: Vec<String>,

    pub follow_up_questions: Vec<String>,
    pub related_topics: Vec<String>,
}
