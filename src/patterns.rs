//! Rule tables for the critical analysis passes.
//!
//! A [`PatternLibrary`] is plain immutable data. The detectors take it by
//! reference, so callers can hand in a library built from configuration
//! instead of the standard one.

use once_cell::sync::Lazy;
use regex::{Match, Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Standard rule tables
// ---------------------------------------------------------------------------

/// (name, pattern, rejected when followed by)
const CLAIM_RULES: &[(&str, &str, Option<&str>)] = &[
    (
        "certain_future",
        r"will\s+(?:definitely|certainly|surely)\s+\w+",
        None,
    ),
    (
        "absolute_language",
        r"(?:always|never|all|every|none)\s+\w+",
        None,
    ),
    ("unsourced_studies", r"studies show", Some(r"\s+\(")),
    (
        "unsourced_experts",
        r"experts? (?:say|believe|think)",
        Some(r"\s+\("),
    ),
    (
        "asserted_certainty",
        r"it is (?:proven|obvious|clear) that",
        None,
    ),
    ("unsourced_percentage", r"\d+%", Some(r"\s+\(")),
    ("common_knowledge", r"everyone knows that", None),
    ("clearly", r"clearly\s+\w+", None),
    ("without_doubt", r"without (?:a )?doubt", None),
];

const FALLACY_RULES: &[(&str, &str)] = &[
    (
        "Appeal to Authority",
        r"(?:famous|renowned|expert)\s+\w+\s+(?:says|believes)",
    ),
    (
        "False Dichotomy",
        r"(?:either|only two)\s+(?:options?|choices?|ways?)",
    ),
    ("Slippery Slope", r"if\s+\w+.*then\s+\w+.*and\s+then"),
    ("Correlation vs Causation", r"because\s+\w+.*therefore"),
    (
        "Hasty Generalization",
        r"(?:all|every|always)\s+\w+\s+(?:are|do|have)",
    ),
];

static CITATION_MARKER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(\d{4}\)|\[\d+\]").unwrap());

static CITATION_MENTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(\d{4}\)|\[\d+\]|et al\.").unwrap());

static VAGUE_QUANTIFIER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)many|some|few|several").unwrap());

static STANDARD: Lazy<PatternLibrary> = Lazy::new(|| PatternLibrary {
    claim_rules: CLAIM_RULES
        .iter()
        .map(|(name, pattern, guard)| {
            let rule = PatternRule::new(*name, RuleCategory::Claim, pattern).unwrap();
            match guard {
                Some(guard) => rule.unless_followed_by(guard).unwrap(),
                None => rule,
            }
        })
        .collect(),
    fallacy_rules: FALLACY_RULES
        .iter()
        .map(|(name, pattern)| PatternRule::new(*name, RuleCategory::Fallacy, pattern).unwrap())
        .collect(),
    citation_marker: CITATION_MARKER_RE.clone(),
    citation_mention: CITATION_MENTION_RE.clone(),
    vague_quantifier: VAGUE_QUANTIFIER_RE.clone(),
});

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleCategory {
    Claim,
    Fallacy,
}

/// A case-insensitive matcher, optionally rejecting matches that are
/// immediately followed by a guard pattern (a negative lookahead).
#[derive(Debug, Clone)]
pub struct PatternRule {
    name: String,
    category: RuleCategory,
    matcher: Regex,
    unless_followed_by: Option<Regex>,
}

impl PatternRule {
    pub fn new(name: impl Into<String>, category: RuleCategory, pattern: &str) -> Result<Self> {
        let name = name.into();
        let matcher = compile(&name, pattern)?;
        Ok(Self {
            name,
            category,
            matcher,
            unless_followed_by: None,
        })
    }

    /// Reject any match whose trailing text starts with `guard`.
    pub fn unless_followed_by(mut self, guard: &str) -> Result<Self> {
        self.unless_followed_by = Some(compile(&self.name, &format!("^(?:{guard})"))?);
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> RuleCategory {
        self.category
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.find_iter(text).next().is_some()
    }

    /// Non-overlapping matches in order, guard applied.
    pub fn find_iter<'a>(&'a self, text: &'a str) -> impl Iterator<Item = Match<'a>> + 'a {
        self.matcher
            .find_iter(text)
            .filter(move |m| !self.is_guarded(&text[m.end()..]))
    }

    fn is_guarded(&self, rest: &str) -> bool {
        self.unless_followed_by
            .as_ref()
            .is_some_and(|guard| guard.is_match(rest))
    }
}

fn compile(name: &str, pattern: &str) -> Result<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|source| Error::InvalidPattern {
            name: name.to_string(),
            source,
        })
}

/// Serializable rule definition, as found in configuration files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleDefinition {
    /// Claim rules may omit the name; the pattern then doubles as one.
    /// Fallacy rules must carry one, since it is what gap findings report.
    #[serde(default)]
    pub name: String,
    pub pattern: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unless_followed_by: Option<String>,
}

impl RuleDefinition {
    pub fn compile(&self, category: RuleCategory) -> Result<PatternRule> {
        let name = match (self.name.trim().is_empty(), category) {
            (false, _) => self.name.clone(),
            (true, RuleCategory::Claim) => self.pattern.clone(),
            (true, RuleCategory::Fallacy) => {
                return Err(Error::UnnamedRule {
                    pattern: self.pattern.clone(),
                })
            }
        };
        let rule = PatternRule::new(name, category, &self.pattern)?;
        match &self.unless_followed_by {
            Some(guard) => rule.unless_followed_by(guard),
            None => Ok(rule),
        }
    }
}

// ---------------------------------------------------------------------------
// Library
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct PatternLibrary {
    claim_rules: Vec<PatternRule>,
    fallacy_rules: Vec<PatternRule>,
    citation_marker: Regex,
    citation_mention: Regex,
    vague_quantifier: Regex,
}

impl Default for PatternLibrary {
    fn default() -> Self {
        STANDARD.clone()
    }
}

impl PatternLibrary {
    /// The process-wide standard library, built on first use.
    pub fn standard() -> &'static PatternLibrary {
        &STANDARD
    }

    /// Standard citation and quantifier matchers with the given rule sets.
    pub fn with_rules(claim_rules: Vec<PatternRule>, fallacy_rules: Vec<PatternRule>) -> Self {
        Self {
            claim_rules,
            fallacy_rules,
            ..Self::default()
        }
    }

    pub fn push_rule(&mut self, rule: PatternRule) {
        match rule.category() {
            RuleCategory::Claim => self.claim_rules.push(rule),
            RuleCategory::Fallacy => self.fallacy_rules.push(rule),
        }
    }

    pub fn claim_rules(&self) -> &[PatternRule] {
        &self.claim_rules
    }

    pub fn fallacy_rules(&self) -> &[PatternRule] {
        &self.fallacy_rules
    }

    /// A year in parentheses or a bracketed reference number.
    pub fn has_citation_marker(&self, text: &str) -> bool {
        self.citation_marker.is_match(text)
    }

    /// Citation markers plus `et al.` mentions.
    pub fn count_citations(&self, text: &str) -> usize {
        self.citation_mention.find_iter(text).count()
    }

    pub fn has_vague_quantifier(&self, text: &str) -> bool {
        self.vague_quantifier.is_match(text)
    }
}
