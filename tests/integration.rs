use doc_critic::signals::{FixedTopics, Sentiment, SentimentAnalyzer, Summarizer};
use doc_critic::{critique, Config, DifficultyLevel, Document, PatternLibrary, Pipeline};

const ARTICLE: &str = "Artificial intelligence will definitely transform every hospital within a decade. \
    Experts say the benefits are obvious, and studies show that 80% of clinicians agree. \
    Renowned researcher says the shift is inevitable. Famous investor believes the market is ready. \
    Either choice leaves some patients behind, because funding is limited, therefore reform must wait. \
    If hospitals adopt it then costs fall and then care improves. \
    All doctors are enthusiastic. Many nurses remain unconvinced. \
    Our research draws on data from several regional clinics. \
    It is clear that policy makers never listen to frontline staff.";

const BALANCED: &str = "The committee met on Tuesday to review three proposals (2021). \
    However, the second proposal drew objections from the finance team [2]. \
    Although the budget was tight, Lee et al. recommended a phased rollout.";

fn topics(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn critique_respects_all_caps() {
    let report = critique(ARTICLE, &topics(&["Technology", "Science", "Healthcare"]));

    assert!(report.unsupported_claims.len() <= 5);
    assert!(report
        .unsupported_claims
        .iter()
        .all(|c| c.chars().count() <= 153));

    assert_eq!(report.logical_gaps.len(), 5);
    for name in [
        "Appeal to Authority",
        "False Dichotomy",
        "Slippery Slope",
        "Correlation vs Causation",
        "Hasty Generalization",
    ] {
        let n = report
            .logical_gaps
            .iter()
            .filter(|g| g.starts_with(&format!("Possible {name}:")))
            .count();
        assert!(n <= 2, "{name} reported {n} times");
    }

    assert_eq!(report.follow_up_questions.len(), 5);
    assert!(report.related_topics.len() <= 5);
    let mut unique = report.related_topics.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), report.related_topics.len());
}

#[test]
fn critique_of_flawed_article_calls_for_scrutiny() {
    let report = critique(ARTICLE, &[]);
    assert_eq!(report.unsupported_claims.len(), 5);
    assert!(report
        .critical_summary
        .starts_with("This article presents several claims that warrant scrutiny."));
    assert!(report
        .critical_summary
        .contains("There are 5 potentially unsupported claims"));
    assert!(report
        .critical_summary
        .ends_with("No academic citations were detected in the text."));
}

#[test]
fn balanced_article_reads_as_well_reasoned() {
    let report = critique(BALANCED, &[]);
    assert!(report.unsupported_claims.is_empty());
    assert!(report.logical_gaps.is_empty());
    assert_eq!(
        report.critical_summary,
        "This article appears well-reasoned with supported arguments."
    );
}

#[test]
fn one_claim_for_sentence_matching_two_patterns() {
    let report = critique("Experts say this will definitely work. ", &[]);
    assert_eq!(report.unsupported_claims.len(), 1);
}

#[test]
fn third_question_relates_the_first_two_topics() {
    let report = critique(ARTICLE, &topics(&["Technology", "Science"]));
    assert_eq!(
        report.follow_up_questions[2],
        "What is the connection between Technology and Science in this context?"
    );
}

#[test]
fn critique_is_idempotent() {
    let labels = topics(&["Technology", "Science"]);
    let first = serde_json::to_string(&critique(ARTICLE, &labels)).unwrap();
    let second = serde_json::to_string(&critique(ARTICLE, &labels)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn shared_library_works_across_threads() {
    let library = PatternLibrary::standard();
    let expected = critique(ARTICLE, &[]);
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                s.spawn(|| doc_critic::CriticalAnalyzer::new(library).analyze(ARTICLE, &[]))
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn critique_json_has_expected_fields() {
    let report = critique(ARTICLE, &[]);
    let json = serde_json::to_string_pretty(&report).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    for key in [
        "critical_summary",
        "logical_gaps",
        "unsupported_claims",
        "follow_up_questions",
        "related_topics",
    ] {
        assert!(parsed.get(key).is_some(), "missing {key}");
    }
}

#[test]
fn pipeline_builds_full_report() {
    let document = Document::new("AI in Hospitals", "https://example.org/ai", ARTICLE).unwrap();
    let pipeline = Pipeline::new(Config::default())
        .unwrap()
        .with_classifier(FixedTopics::new(topics(&["Healthcare", "Technology"])));

    let report = pipeline.analyze(&document);
    assert_eq!(report.title, "AI in Hospitals");
    assert_eq!(report.source, "https://example.org/ai");
    assert_eq!(report.word_count, document.word_count());
    assert!(report.text_preview.chars().count() <= 500);
    assert!(document.text().starts_with(&report.text_preview));
    assert_eq!(report.topics, topics(&["Healthcare", "Technology"]));
    assert_eq!(report.sentiment, "neutral");
    assert_eq!(report.sentiment_score, 0.5);
    assert!(DifficultyLevel::ALL.contains(&report.difficulty_level));
    assert!(report
        .summary
        .starts_with("Artificial intelligence will definitely transform every hospital"));
    assert_eq!(report.related_topics[0], "Medical Ethics");

    let json = serde_json::to_value(&report).unwrap();
    assert!(json.get("difficulty_level").unwrap().is_string());
    assert!(json.get("critical_analysis").is_some());
}

#[test]
fn pipeline_without_classifier_labels_falls_back_to_general() {
    let document = Document::new("Minutes", "stdin", BALANCED).unwrap();
    let report = Pipeline::new(Config::default()).unwrap().analyze(&document);
    assert_eq!(report.topics, topics(&["General"]));
    assert_eq!(
        report.follow_up_questions[1],
        "How does this relate to broader issues in general?"
    );
}

struct Headline;

impl Summarizer for Headline {
    fn summarize(&self, _text: &str) -> String {
        "Hospitals embrace AI.".to_string()
    }
}

struct Overconfident;

impl SentimentAnalyzer for Overconfident {
    fn analyze(&self, _text: &str) -> Sentiment {
        Sentiment {
            label: "positive".to_string(),
            score: 1.7,
        }
    }
}

#[test]
fn pipeline_uses_supplied_collaborators() {
    let document = Document::new("AI", "stdin", ARTICLE).unwrap();
    let report = Pipeline::new(Config::default())
        .unwrap()
        .with_summarizer(Headline)
        .with_sentiment(Overconfident)
        .analyze(&document);
    assert_eq!(report.summary, "Hospitals embrace AI.");
    assert_eq!(report.sentiment, "positive");
    assert_eq!(report.sentiment_score, 1.0);
}

#[test]
fn summarizer_input_is_capped() {
    struct Length;
    impl Summarizer for Length {
        fn summarize(&self, text: &str) -> String {
            text.chars().count().to_string()
        }
    }

    let config = Config {
        max_text_length: 120,
        ..Config::default()
    };
    let document = Document::new("AI", "stdin", ARTICLE).unwrap();
    let report = Pipeline::new(config)
        .unwrap()
        .with_summarizer(Length)
        .analyze(&document);
    assert_eq!(report.summary, "120");
}
