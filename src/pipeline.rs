//! Full document analysis: collaborator signals plus the rule-based passes.

use crate::config::Config;
use crate::difficulty::assess_difficulty;
use crate::document::Document;
use crate::error::Result;
use crate::patterns::PatternLibrary;
use crate::report::AnalysisReport;
use crate::signals::{
    FixedTopics, LeadSentenceSummarizer, NeutralSentiment, SentimentAnalyzer, Summarizer,
    TopicClassifier,
};
use crate::text::take_chars;
use crate::CriticalAnalyzer;

pub struct Pipeline {
    config: Config,
    patterns: PatternLibrary,
    summarizer: Box<dyn Summarizer>,
    classifier: Box<dyn TopicClassifier>,
    sentiment: Box<dyn SentimentAnalyzer>,
}

impl Pipeline {
    /// Offline pipeline: lead-sentence summary, `General` topic, neutral sentiment.
    pub fn new(config: Config) -> Result<Self> {
        let patterns = config.pattern_library()?;
        Ok(Self {
            config,
            patterns,
            summarizer: Box::new(LeadSentenceSummarizer),
            classifier: Box::new(FixedTopics::default()),
            sentiment: Box::new(NeutralSentiment),
        })
    }

    pub fn with_summarizer(mut self, summarizer: impl Summarizer + 'static) -> Self {
        self.summarizer = Box::new(summarizer);
        self
    }

    pub fn with_classifier(mut self, classifier: impl TopicClassifier + 'static) -> Self {
        self.classifier = Box::new(classifier);
        self
    }

    pub fn with_sentiment(mut self, sentiment: impl SentimentAnalyzer + 'static) -> Self {
        self.sentiment = Box::new(sentiment);
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn patterns(&self) -> &PatternLibrary {
        &self.patterns
    }

    pub fn analyze(&self, document: &Document) -> AnalysisReport {
        let text = document.text();
        tracing::info!(
            source = document.source(),
            chars = text.len(),
            "Analyzing document"
        );

        let summary_input = take_chars(text, self.config.max_text_length);
        if summary_input.len() < text.len() {
            tracing::warn!(
                limit = self.config.max_text_length,
                "Text too long for summarizer, truncating"
            );
        }
        let summary = self.summarizer.summarize(summary_input);

        let topics = self.classifier.classify(
            take_chars(text, self.config.classification_sample_chars),
            self.config.max_topics,
        );

        let mut sentiment = self
            .sentiment
            .analyze(take_chars(text, self.config.sentiment_sample_chars));
        sentiment.score = sentiment.score.clamp(0.0, 1.0);

        let difficulty_level = assess_difficulty(text);
        let critique = CriticalAnalyzer::new(&self.patterns).analyze(text, &topics);

        AnalysisReport {
            title: document.title().to_string(),
            source: document.source().to_string(),
            text_preview: take_chars(text, self.config.preview_chars).to_string(),
            word_count: document.word_count(),
            summary,
            topics,
            sentiment: sentiment.label,
            sentiment_score: sentiment.score,
            difficulty_level,
            critical_analysis: critique.critical_summary,
            logical_gaps: critique.logical_gaps,
            unsupported_claims: critique.unsupported_claims,
            follow_up_questions: critique.follow_up_questions,
            related_topics: critique.related_topics,
        }
    }
}
