// ---------------------------------------------------------------------------
// Hyperparameters
// ---------------------------------------------------------------------------

pub(crate) struct Hyperparameters {
    pub claim_min_sentence_chars: usize,
    pub claim_snippet_chars: usize,
    pub claim_record_cap: usize,
    pub fallacy_matches_per_name: usize,
    pub gap_context_before_chars: usize,
    pub gap_context_after_chars: usize,
    pub gap_record_cap: usize,
    pub limited_citation_threshold: usize,
    pub follow_up_min_sentence_chars: usize,
    pub follow_up_cap: usize,
    pub related_topic_cap: usize,
    pub advanced_word_length: f64,
    pub advanced_sentence_length: f64,
    pub advanced_bonus: u32,
    pub intermediate_word_length: f64,
    pub intermediate_sentence_length: f64,
    pub intermediate_bonus: u32,
    pub beginner_bonus: u32,
    pub summary_lead_sentences: usize,
    pub fallback_sentiment_score: f64,
}

pub(crate) static HP: Hyperparameters = Hyperparameters {
    claim_min_sentence_chars: 20,
    claim_snippet_chars: 150,
    claim_record_cap: 5,
    fallacy_matches_per_name: 2,
    gap_context_before_chars: 50,
    gap_context_after_chars: 100,
    gap_record_cap: 5,
    limited_citation_threshold: 3,
    follow_up_min_sentence_chars: 30,
    follow_up_cap: 5,
    related_topic_cap: 5,
    advanced_word_length: 6.0,
    advanced_sentence_length: 25.0,
    advanced_bonus: 3,
    intermediate_word_length: 5.0,
    intermediate_sentence_length: 15.0,
    intermediate_bonus: 2,
    beginner_bonus: 2,
    summary_lead_sentences: 3,
    fallback_sentiment_score: 0.5,
};
