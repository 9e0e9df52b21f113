//! Rule-based critical reading of research documents.
//!
//! The core passes are pure functions over text: unsupported-claim and
//! logical-gap detection, a short narrative critique, follow-up questions,
//! related-topic suggestions and a difficulty estimate. [`Pipeline`] wraps
//! them together with pluggable summary, topic and sentiment signals.

pub mod claims;
pub mod config;
pub mod difficulty;
pub mod document;
pub mod error;
pub mod gaps;
mod hyperparameters;
pub mod narrative;
pub mod patterns;
pub mod pipeline;
pub mod report;
pub mod signals;
pub mod suggest;
pub mod text;

pub use claims::detect_unsupported_claims;
pub use config::Config;
pub use difficulty::{assess_difficulty, score_difficulty, DifficultyLevel, DifficultyScores};
pub use document::Document;
pub use error::{Error, Result};
pub use gaps::detect_logical_gaps;
pub use narrative::synthesize_critique;
pub use patterns::{PatternLibrary, PatternRule, RuleCategory, RuleDefinition};
pub use pipeline::Pipeline;
pub use report::{AnalysisReport, CritiqueReport};
pub use suggest::{generate_follow_up_questions, suggest_related_topics};

// ---------------------------------------------------------------------------
// Critical analysis
// ---------------------------------------------------------------------------

/// Runs every critical pass against one pattern library.
#[derive(Debug, Clone, Copy)]
pub struct CriticalAnalyzer<'a> {
    patterns: &'a PatternLibrary,
}

impl Default for CriticalAnalyzer<'static> {
    fn default() -> Self {
        Self::new(PatternLibrary::standard())
    }
}

impl<'a> CriticalAnalyzer<'a> {
    pub fn new(patterns: &'a PatternLibrary) -> Self {
        Self { patterns }
    }

    /// `topics` are labels from an upstream classifier, used as given.
    pub fn analyze(&self, text: &str, topics: &[String]) -> CritiqueReport {
        let unsupported_claims = detect_unsupported_claims(text, self.patterns);
        let logical_gaps = detect_logical_gaps(text, self.patterns);
        let critical_summary =
            synthesize_critique(text, &unsupported_claims, &logical_gaps, self.patterns);
        let follow_up_questions = generate_follow_up_questions(text, topics);
        let related_topics = suggest_related_topics(text, topics);

        tracing::info!(
            claims = unsupported_claims.len(),
            gaps = logical_gaps.len(),
            related = related_topics.len(),
            "Critical analysis complete"
        );

        CritiqueReport {
            critical_summary,
            logical_gaps,
            unsupported_claims,
            follow_up_questions,
            related_topics,
        }
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Critical analysis with the standard rule set.
pub fn critique(text: &str, topics: &[String]) -> CritiqueReport {
    CriticalAnalyzer::default().analyze(text, topics)
}
