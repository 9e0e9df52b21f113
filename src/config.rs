use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::document::DEFAULT_MIN_TEXT_CHARS;
use crate::error::{Error, Result};
use crate::patterns::{PatternLibrary, PatternRule, RuleCategory, RuleDefinition};

const ENV_CONFIG_PATH: &str = "DOC_CRITIC_CONFIG_PATH";
const DEFAULT_CONFIG_PATH: &str = "doc-critic.yaml";

/// Extra or replacement rules for the critical analysis passes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RuleOverrides {
    /// Drop the standard rules instead of appending to them.
    #[serde(default)]
    pub replace: bool,
    #[serde(default)]
    pub claims: Vec<RuleDefinition>,
    #[serde(default)]
    pub fallacies: Vec<RuleDefinition>,
}

impl RuleOverrides {
    pub fn is_empty(&self) -> bool {
        !self.replace && self.claims.is_empty() && self.fallacies.is_empty()
    }
}

/// Analysis settings. Every field may be given in the YAML file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Summarizer input is cut to this many chars.
    pub max_text_length: usize,
    pub classification_sample_chars: usize,
    pub sentiment_sample_chars: usize,
    pub max_topics: usize,
    pub min_text_chars: usize,
    pub preview_chars: usize,
    pub rules: RuleOverrides,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_text_length: 10_000,
            classification_sample_chars: 1_000,
            sentiment_sample_chars: 2_000,
            max_topics: 3,
            min_text_chars: DEFAULT_MIN_TEXT_CHARS,
            preview_chars: 500,
            rules: RuleOverrides::default(),
        }
    }
}

impl Config {
    /// Load from the config file named by the environment (if any), then
    /// apply environment overrides. A missing or broken file means defaults.
    pub fn from_env() -> Self {
        let config_path =
            std::env::var(ENV_CONFIG_PATH).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let mut config = Self::load_config_file(Path::new(&config_path)).unwrap_or_default();
        config.apply_env_overrides();
        config
    }

    /// Strict variant for an explicitly requested file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::parse(path, &contents)
    }

    fn parse(path: &Path, contents: &str) -> Result<Self> {
        let contents = contents.trim();
        if contents.is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(contents).map_err(|e| Error::Config {
            path: PathBuf::from(path),
            message: e.to_string(),
        })
    }

    fn load_config_file(path: &Path) -> Option<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "Config file not found, using defaults");
            return None;
        }

        match Self::from_file(path) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "Loaded configuration from file");
                Some(config)
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to load config file, using defaults");
                None
            }
        }
    }

    /// `DOC_CRITIC_MAX_TEXT_LENGTH`, `DOC_CRITIC_MIN_TEXT_CHARS` and
    /// `DOC_CRITIC_MAX_TOPICS` take precedence over file values.
    pub fn apply_env_overrides(&mut self) {
        if let Some(v) = env_usize("DOC_CRITIC_MAX_TEXT_LENGTH") {
            self.max_text_length = v;
        }
        if let Some(v) = env_usize("DOC_CRITIC_MIN_TEXT_CHARS") {
            self.min_text_chars = v;
        }
        if let Some(v) = env_usize("DOC_CRITIC_MAX_TOPICS") {
            self.max_topics = v;
        }
    }

    /// The standard rules combined with the configured overrides.
    pub fn pattern_library(&self) -> Result<PatternLibrary> {
        if self.rules.is_empty() {
            return Ok(PatternLibrary::default());
        }

        let claims = compile_all(&self.rules.claims, RuleCategory::Claim)?;
        let fallacies = compile_all(&self.rules.fallacies, RuleCategory::Fallacy)?;

        if self.rules.replace {
            return Ok(PatternLibrary::with_rules(claims, fallacies));
        }

        let mut library = PatternLibrary::default();
        for rule in claims.into_iter().chain(fallacies) {
            library.push_rule(rule);
        }
        Ok(library)
    }
}

fn compile_all(defs: &[RuleDefinition], category: RuleCategory) -> Result<Vec<PatternRule>> {
    defs.iter().map(|d| d.compile(category)).collect()
}

fn env_usize(key: &str) -> Option<usize> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            tracing::warn!(key, value = %raw, "Ignoring non-numeric environment override");
            None
        }
    }
}
