use doc_critic::gaps::{MISSING_CITATIONS, VAGUE_QUANTIFIERS};
use doc_critic::{detect_logical_gaps, PatternLibrary};

fn gaps(text: &str) -> Vec<String> {
    detect_logical_gaps(text, PatternLibrary::standard())
}

#[test]
fn research_without_citation_is_flagged() {
    let text = "Our research suggests the approach works well in practice.";
    assert_eq!(gaps(text), vec![MISSING_CITATIONS.to_string()]);
}

#[test]
fn year_citation_suppresses_missing_citation_finding() {
    let text = "Our research suggests the approach works well in practice (2020).";
    assert!(gaps(text).is_empty());
}

#[test]
fn bracketed_reference_suppresses_missing_citation_finding() {
    let text = "A recent study found large effects [3].";
    assert!(gaps(text).is_empty());
    assert_eq!(
        gaps("A recent study found large effects."),
        vec![MISSING_CITATIONS.to_string()]
    );
}

#[test]
fn vague_quantifiers_match_inside_words() {
    assert_eq!(
        gaps("Many people agree with this view."),
        vec![VAGUE_QUANTIFIERS.to_string()]
    );
    assert_eq!(
        gaps("Something happened yesterday."),
        vec![VAGUE_QUANTIFIERS.to_string()]
    );
}

#[test]
fn structural_findings_follow_fallacy_findings() {
    let text = "There are only two options here. Many agree and the research is settled.";
    let result = gaps(text);
    assert_eq!(result.len(), 3);
    assert!(result[0].starts_with("Possible False Dichotomy: '"));
    assert_eq!(result[1], MISSING_CITATIONS);
    assert_eq!(result[2], VAGUE_QUANTIFIERS);
}

#[test]
fn fallacy_finding_quotes_the_context() {
    let text = "There are only two options here: accept or leave.";
    assert_eq!(
        gaps(text),
        vec!["Possible False Dichotomy: 'There are only two options here: accept or leave....'"
            .to_string()]
    );
}

#[test]
fn at_most_two_findings_per_fallacy() {
    let text = "Renowned doctor says yes. Famous actor believes it. Expert witness says no.";
    let result = gaps(text);
    let appeals = result
        .iter()
        .filter(|g| g.starts_with("Possible Appeal to Authority"))
        .count();
    assert_eq!(appeals, 2);
}

#[test]
fn capped_at_five_findings() {
    let text = "Renowned doctor says yes. Famous actor believes it. \
                There are only two options. Either choice is bad. \
                All cats are grey. Every dog has fleas. Some research exists.";
    let result = gaps(text);
    assert_eq!(result.len(), 5);
    assert!(result.iter().all(|g| g.starts_with("Possible ")));
    assert!(result[4].starts_with("Possible Hasty Generalization"));
}

#[test]
fn context_window_is_clipped_by_characters() {
    let text = format!("{} only two ways remain {}", "é".repeat(80), "ü".repeat(150));
    let result = gaps(&text);
    assert_eq!(result.len(), 1);
    let finding = &result[0];
    assert!(finding.contains("only two ways remain"));
    assert_eq!(finding.chars().filter(|&c| c == 'é').count(), 49);
    assert_eq!(finding.chars().filter(|&c| c == 'ü').count(), 92);
}

#[test]
fn slippery_slope_and_causation_are_detected() {
    let text = "If taxes rise then jobs leave and then towns empty. \
                Crime fell because police patrolled, therefore patrols work.";
    let result = gaps(text);
    assert!(result[0].starts_with("Possible Slippery Slope"));
    assert!(result[1].starts_with("Possible Correlation vs Causation"));
}

#[test]
fn clean_text_has_no_gaps() {
    assert!(gaps("The committee met on Tuesday and approved the budget.").is_empty());
}
