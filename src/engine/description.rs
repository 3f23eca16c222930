//! Description generation.

use rand::seq::SliceRandom;
use rand::Rng;

use super::coherence::{tokens, MIN_SHARED_TOKEN_LEN};
use super::{capitalize, display_category};
use crate::knowledge::KnowledgeBase;

/// Inputs available to description templates.
#[derive(Debug, Clone)]
pub struct DescriptionContext {
    /// Category as shown in prose.
    pub category: String,
    /// How the product solves the pain.
    pub mechanism: String,
    /// Benefit phrase.
    pub benefit: String,
    /// Lowercase adjective.
    pub adjective: String,
    /// The pain text, lowercased at the start and without end punctuation.
    pub pain: String,
    /// Longest significant word of the pain text.
    pub focus: String,
}

impl DescriptionContext {
    /// Build a context, deriving the pain forms from raw text
    pub fn new(
        category: &str,
        pain_text: &str,
        mechanism: impl Into<String>,
        benefit: impl Into<String>,
        adjective: &str,
    ) -> Self {
        let pain = sentence_fragment(pain_text);
        let focus = focus_word(pain_text).unwrap_or_else(|| pain.clone());
        Self {
            category: display_category(category).to_string(),
            mechanism: mechanism.into(),
            benefit: benefit.into(),
            adjective: adjective.to_lowercase(),
            pain,
            focus,
        }
    }
}

type DescriptionTemplate = fn(&DescriptionContext) -> String;

/// Every template mentions the pain or its focus word.
const TEMPLATES: &[DescriptionTemplate] = &[
    |c| {
        format!(
            "Meet the {} fix for {}. It uses {} so you get {}.",
            c.adjective, c.pain, c.mechanism, c.benefit
        )
    },
    |c| {
        format!(
            "Tired of {}? This {} take on {} relies on {}, which means {}.",
            c.pain, c.adjective, c.category, c.mechanism, c.benefit
        )
    },
    |c| {
        format!(
            "Confession: we got fed up with {} too. Our answer is {}, {} by design, and the result is {}.",
            c.pain, c.mechanism, c.adjective, c.benefit
        )
    },
    |c| {
        format!(
            "The problem: {}. The fix: {}, {} from the first use. The payoff: {}.",
            c.pain, c.mechanism, c.adjective, c.benefit
        )
    },
    |c| {
        format!(
            "It started with {}. Anyone shopping for {} knows the feeling. Ours answers with {} for {} routine and {}.",
            c.focus,
            c.category,
            c.mechanism,
            with_article(&c.adjective),
            c.benefit
        )
    },
    |c| {
        format!(
            "What if {} actually handled {}? With {}, it finally does. {} to use and built for {}.",
            c.category,
            c.focus,
            c.mechanism,
            capitalize(&c.adjective),
            c.benefit
        )
    },
    |c| {
        format!(
            "Built around {}, this is {} for people who refuse to accept {}. {} to use, and it delivers {}.",
            c.mechanism,
            c.category,
            c.pain,
            capitalize(&c.adjective),
            c.benefit
        )
    },
    |c| {
        format!(
            "Most {} ignore {}. We made it the whole point: {}, {} form factor and {}.",
            c.category,
            c.focus,
            c.mechanism,
            with_article(&c.adjective),
            c.benefit
        )
    },
    |c| {
        format!(
            "Picture a week without {}. That is the promise of {}, wrapped in {} design that brings {}.",
            c.pain,
            c.mechanism,
            with_article(&c.adjective),
            c.benefit
        )
    },
    |c| {
        format!(
            "Honest pitch: {} turns {} into a non-issue. It is {}, quiet about it, and gives you {}.",
            c.mechanism, c.focus, c.adjective, c.benefit
        )
    },
    |c| {
        format!(
            "Done with {}? Good. This {} design pairs {} with {}.",
            c.pain, c.adjective, c.mechanism, c.benefit
        )
    },
    |c| {
        format!(
            "Our engineers spent months on one question: how do you beat {}? Their answer is {}, {} enough for daily life and packed with {}.",
            c.focus, c.mechanism, c.adjective, c.benefit
        )
    },
];

/// Number of description templates.
pub fn template_count() -> usize {
    TEMPLATES.len()
}

/// Render a specific template. Indices wrap around.
pub fn render_template(index: usize, context: &DescriptionContext) -> String {
    TEMPLATES[index % TEMPLATES.len()](context)
}

/// Compose a description for a concept solving `pain_text`.
pub fn generate_description<R: Rng + ?Sized>(
    kb: &KnowledgeBase,
    category: &str,
    pain_text: &str,
    rng: &mut R,
) -> String {
    let mechanism = kb
        .mechanisms(category)
        .choose(rng)
        .map(String::as_str)
        .unwrap_or("a smarter design");
    let benefit = kb
        .benefits()
        .choose(rng)
        .map(String::as_str)
        .unwrap_or("fewer daily frustrations");
    let adjective = kb
        .adjectives()
        .choose(rng)
        .map(String::as_str)
        .unwrap_or("clever");

    let context = DescriptionContext::new(category, pain_text, mechanism, benefit, adjective);
    render_template(rng.gen_range(0..TEMPLATES.len()), &context)
}

fn sentence_fragment(text: &str) -> String {
    let trimmed = text
        .trim()
        .trim_end_matches(|c: char| matches!(c, '.' | '!' | '?'));
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn focus_word(text: &str) -> Option<String> {
    tokens(text)
        .filter(|t| t.chars().count() >= MIN_SHARED_TOKEN_LEN)
        .max_by_key(|t| t.chars().count())
}

fn with_article(word: &str) -> String {
    let article = match word.chars().next() {
        Some(c) if "aeiouAEIOU".contains(c) => "an",
        _ => "a",
    };
    format!("{} {}", article, word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::coherence::shares_significant_token;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn context() -> DescriptionContext {
        DescriptionContext::new(
            "gardening tools",
            "Constant bending over causes severe back pain.",
            "a foot-pedal extraction jaw",
            "real peace of mind",
            "Elegant",
        )
    }

    #[test]
    fn test_context_derives_pain_forms() {
        let c = context();
        assert_eq!(c.pain, "constant bending over causes severe back pain");
        assert_eq!(c.focus, "constant");
        assert_eq!(c.adjective, "elegant");
    }

    #[test]
    fn test_template_bank_is_varied() {
        assert!(template_count() >= 10);
        let c = context();
        let rendered: HashSet<String> = (0..template_count()).map(|i| render_template(i, &c)).collect();
        assert_eq!(rendered.len(), template_count());
    }

    #[test]
    fn test_every_template_references_pain() {
        let c = context();
        let pain = "Constant bending over causes severe back pain.";
        for i in 0..template_count() {
            let text = render_template(i, &c);
            assert!(shares_significant_token(&text, pain), "template {}: {}", i, text);
        }
    }

    #[test]
    fn test_article_matches_adjective() {
        assert_eq!(with_article("elegant"), "an elegant");
        assert_eq!(with_article("sleek"), "a sleek");
    }

    #[test]
    fn test_generate_description_uses_category_mechanism() {
        let kb = KnowledgeBase::builtin();
        let mut rng = StdRng::seed_from_u64(11);
        let text = generate_description(&kb, "water bottles", "Bottles leak everywhere", &mut rng);
        assert!(
            kb.mechanisms("water bottles").iter().any(|m| text.contains(m.as_str())),
            "no water bottle mechanism in: {}",
            text
        );
    }
}
