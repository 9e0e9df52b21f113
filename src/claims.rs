use crate::hyperparameters::HP;
use crate::patterns::PatternLibrary;
use crate::text::{char_len, dot_segments, snippet};

/// Flag sentences phrased as claims without support.
///
/// Each `.`-delimited sentence of at least twenty chars is tested against the
/// claim rules in order. The first rule that fires records the sentence and
/// no further rules are tried on it, so a sentence yields at most one entry.
/// Collection stops at the record cap.
pub fn detect_unsupported_claims(text: &str, patterns: &PatternLibrary) -> Vec<String> {
    let mut claims = Vec::new();

    for sentence in dot_segments(text) {
        if claims.len() >= HP.claim_record_cap {
            break;
        }
        if char_len(sentence) < HP.claim_min_sentence_chars {
            continue;
        }
        if let Some(rule) = patterns
            .claim_rules()
            .iter()
            .find(|rule| rule.is_match(sentence))
        {
            tracing::trace!(rule = rule.name(), "unsupported claim");
            claims.push(snippet(sentence, HP.claim_snippet_chars));
        }
    }

    tracing::debug!(count = claims.len(), "claim scan finished");
    claims
}
