//! Follow-up questions and further-reading suggestions.

use crate::hyperparameters::HP;
use crate::text::{char_len, dot_segments};

const RELATED_TOPICS: &[(&str, &[&str])] = &[
    (
        "Technology",
        &["Artificial Intelligence", "Cybersecurity", "Digital Privacy"],
    ),
    (
        "Science",
        &["Research Methodology", "Scientific Ethics", "Peer Review"],
    ),
    (
        "Healthcare",
        &[
            "Medical Ethics",
            "Public Health Policy",
            "Healthcare Economics",
        ],
    ),
    (
        "Politics",
        &["Political Philosophy", "Governance", "Policy Analysis"],
    ),
    (
        "Economics",
        &["Behavioral Economics", "Market Theory", "Economic Policy"],
    ),
    (
        "Environment",
        &["Climate Science", "Sustainability", "Environmental Policy"],
    ),
    (
        "Education",
        &["Pedagogy", "Educational Technology", "Learning Theory"],
    ),
];

const KEYWORD_TOPICS: &[(&str, &str)] = &[
    ("ai", "Machine Learning Applications"),
    ("data", "Data Science and Analytics"),
    ("climate", "Climate Change"),
    ("policy", "Public Policy"),
    ("market", "Market Economics"),
    ("social", "Social Impact"),
    ("research", "Research Methodology"),
];

const GENERIC_QUESTIONS: &[&str] = &[
    "What counterarguments or alternative viewpoints exist?",
    "What are the practical implications of implementing these ideas?",
    "What might critics of this perspective say?",
    "What further research would strengthen these conclusions?",
];

pub fn generate_follow_up_questions(text: &str, topics: &[String]) -> Vec<String> {
    let mut questions = Vec::new();

    if let Some(main_claim) =
        dot_segments(text).find(|s| char_len(s) > HP.follow_up_min_sentence_chars)
    {
        questions.push(format!(
            "What evidence supports the assertion that {}?",
            main_claim.to_lowercase()
        ));
    }

    if let Some(first) = topics.first() {
        questions.push(format!(
            "How does this relate to broader issues in {}?",
            first.to_lowercase()
        ));
        if let Some(second) = topics.get(1) {
            questions.push(format!(
                "What is the connection between {first} and {second} in this context?"
            ));
        }
    }

    questions.extend(GENERIC_QUESTIONS.iter().map(|q| q.to_string()));
    questions.truncate(HP.follow_up_cap);
    questions
}

/// Related topics for the classified labels, then for keywords that appear as
/// whole tokens in the text. First occurrence wins on duplicates.
pub fn suggest_related_topics(text: &str, topics: &[String]) -> Vec<String> {
    let mut related: Vec<String> = Vec::new();

    for topic in topics {
        if let Some((_, entries)) = RELATED_TOPICS.iter().find(|(name, _)| *name == topic.as_str()) {
            related.extend(entries.iter().map(|e| e.to_string()));
        }
    }

    let lower = text.to_lowercase();
    let words: Vec<&str> = lower.split_whitespace().collect();
    for &(keyword, topic_name) in KEYWORD_TOPICS {
        if words.contains(&keyword) && !related.iter().any(|r| r == topic_name) {
            related.push(topic_name.to_string());
        }
    }

    let mut unique: Vec<String> = Vec::new();
    for topic in related {
        if !unique.contains(&topic) {
            unique.push(topic);
        }
    }
    unique.truncate(HP.related_topic_cap);
    unique
}
