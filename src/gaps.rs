//! Logical gap detection: loose fallacy heuristics plus two structural checks.

use std::collections::HashMap;

use crate::hyperparameters::HP;
use crate::patterns::PatternLibrary;
use crate::text::context_window;

pub const MISSING_CITATIONS: &str = "Research mentioned but no citations provided";
pub const VAGUE_QUANTIFIERS: &str = "Vague quantifiers used without specific data";

/// Scan the whole text for fallacy patterns, then for uncited research and
/// vague quantifiers. Fallacy findings come first, in rule order, and each
/// fallacy name contributes at most two, even when several rules share it.
pub fn detect_logical_gaps(text: &str, patterns: &PatternLibrary) -> Vec<String> {
    let mut gaps = Vec::new();
    let mut per_name: HashMap<&str, usize> = HashMap::new();

    for rule in patterns.fallacy_rules() {
        let seen = per_name.entry(rule.name()).or_insert(0);
        for m in rule.find_iter(text) {
            if *seen >= HP.fallacy_matches_per_name {
                break;
            }
            *seen += 1;
            let context = context_window(
                text,
                m.start(),
                m.end(),
                HP.gap_context_before_chars,
                HP.gap_context_after_chars,
            )
            .trim();
            gaps.push(format!("Possible {}: '{context}...'", rule.name()));
        }
    }

    let lower = text.to_lowercase();
    if (lower.contains("research") || lower.contains("study")) && !patterns.has_citation_marker(text)
    {
        gaps.push(MISSING_CITATIONS.to_string());
    }

    if patterns.has_vague_quantifier(text) {
        gaps.push(VAGUE_QUANTIFIERS.to_string());
    }

    gaps.truncate(HP.gap_record_cap);
    tracing::debug!(count = gaps.len(), "gap scan finished");
    gaps
}
