use crate::hyperparameters::HP;
use crate::patterns::PatternLibrary;

/// Compose a short prose critique from the findings and the citation density.
pub fn synthesize_critique(
    text: &str,
    claims: &[String],
    gaps: &[String],
    patterns: &PatternLibrary,
) -> String {
    let mut parts: Vec<String> = Vec::new();

    if claims.is_empty() && gaps.is_empty() {
        parts.push("This article appears well-reasoned with supported arguments.".to_string());
    } else {
        parts.push("This article presents several claims that warrant scrutiny.".to_string());
    }

    if !claims.is_empty() {
        parts.push(format!(
            "There are {} potentially unsupported claims that would benefit from additional evidence or citations.",
            claims.len()
        ));
    }

    if !gaps.is_empty() {
        parts.push(format!(
            "The analysis identified {} potential logical issues or areas requiring more rigorous argumentation.",
            gaps.len()
        ));
    }

    let lower = text.to_lowercase();
    if !lower.contains("however") && !lower.contains("although") {
        parts.push("The article may lack counterarguments or alternative perspectives.".to_string());
    }

    let citations = patterns.count_citations(text);
    if citations == 0 {
        parts.push("No academic citations were detected in the text.".to_string());
    } else if citations < HP.limited_citation_threshold {
        parts.push("The article contains limited citations.".to_string());
    }

    parts.join(" ")
}
