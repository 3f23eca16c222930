//! Structural sanity checks for synthesized concepts.

use std::collections::HashSet;

use crate::knowledge::{ProductConcept, MAX_NAME_LEN};

/// Shortest word that counts as a meaningful overlap between texts.
pub const MIN_SHARED_TOKEN_LEN: usize = 5;

/// A reason a concept fails the coherence check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoherenceIssue {
    /// Name is empty or longer than [`MAX_NAME_LEN`].
    NameLength,
    /// The tagline repeats the product name.
    TaglineRepeatsName,
    /// The description never mentions the pain it solves.
    DescriptionIgnoresPain,
}

impl std::fmt::Display for CoherenceIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            CoherenceIssue::NameLength => "name_length",
            CoherenceIssue::TaglineRepeatsName => "tagline_repeats_name",
            CoherenceIssue::DescriptionIgnoresPain => "description_ignores_pain",
        };
        write!(f, "{}", text)
    }
}

/// Lowercase alphanumeric words of a text.
pub fn tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
}

/// Whether `text` contains a word of at least [`MIN_SHARED_TOKEN_LEN`]
/// characters that also appears in `source`.
pub fn shares_significant_token(text: &str, source: &str) -> bool {
    let wanted: HashSet<String> = tokens(source)
        .filter(|t| t.chars().count() >= MIN_SHARED_TOKEN_LEN)
        .collect();
    tokens(text).any(|t| wanted.contains(&t))
}

/// All coherence problems of a concept.
pub fn check_coherence(concept: &ProductConcept) -> Vec<CoherenceIssue> {
    let mut issues = Vec::new();

    let name_len = concept.name.chars().count();
    if name_len == 0 || name_len > MAX_NAME_LEN {
        issues.push(CoherenceIssue::NameLength);
    }

    if !concept.name.is_empty()
        && concept
            .tagline
            .to_lowercase()
            .contains(&concept.name.to_lowercase())
    {
        issues.push(CoherenceIssue::TaglineRepeatsName);
    }

    if !shares_significant_token(&concept.description, &concept.pain_solved) {
        issues.push(CoherenceIssue::DescriptionIgnoresPain);
    }

    issues
}

/// Whether a concept passes every coherence check.
pub fn is_coherent(concept: &ProductConcept) -> bool {
    check_coherence(concept).is_empty()
}
