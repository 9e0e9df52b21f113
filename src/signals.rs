//! Seams for the model-backed passes (summary, topics, sentiment).
//!
//! The crate ships offline implementations that behave like the degraded
//! path of a model-backed service: lead sentences for the summary, a fixed
//! label set for topics, and a neutral sentiment.

use serde::Serialize;

use crate::hyperparameters::HP;

pub const GENERAL_TOPIC: &str = "General";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sentiment {
    pub label: String,
    pub score: f64,
}

impl Sentiment {
    pub fn neutral() -> Self {
        Self {
            label: "neutral".to_string(),
            score: HP.fallback_sentiment_score,
        }
    }
}

pub trait Summarizer: Send + Sync {
    fn summarize(&self, text: &str) -> String;
}

pub trait TopicClassifier: Send + Sync {
    /// Up to `top_k` labels, most relevant first.
    fn classify(&self, text: &str, top_k: usize) -> Vec<String>;
}

pub trait SentimentAnalyzer: Send + Sync {
    fn analyze(&self, text: &str) -> Sentiment;
}

/// First three `.`-segments, rejoined.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeadSentenceSummarizer;

impl Summarizer for LeadSentenceSummarizer {
    fn summarize(&self, text: &str) -> String {
        let lead: Vec<&str> = text.split('.').take(HP.summary_lead_sentences).collect();
        format!("{}.", lead.join("."))
    }
}

/// Returns a preset label list, or `General` when none is configured.
#[derive(Debug, Clone, Default)]
pub struct FixedTopics {
    labels: Vec<String>,
}

impl FixedTopics {
    pub fn new(labels: Vec<String>) -> Self {
        Self { labels }
    }
}

impl TopicClassifier for FixedTopics {
    fn classify(&self, _text: &str, top_k: usize) -> Vec<String> {
        if self.labels.is_empty() {
            return vec![GENERAL_TOPIC.to_string()];
        }
        self.labels.iter().take(top_k).cloned().collect()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NeutralSentiment;

impl SentimentAnalyzer for NeutralSentiment {
    fn analyze(&self, _text: &str) -> Sentiment {
        Sentiment::neutral()
    }
}
