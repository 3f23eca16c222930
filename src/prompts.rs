//! Prompt definitions for the AI-assisted concept path.
//!
//! The system prompt is installed on the Langbase pipe when it is created
//! and also sent with every run, so a pipe created elsewhere still gets the
//! same instructions.

use crate::knowledge::PainPoint;

/// Pain points included in one brief.
pub const MAX_BRIEF_PAINS: usize = 5;

/// System prompt for product concept generation.
pub const SPARK_CONCEPT_PROMPT: &str = r#"You are a brilliant consumer product designer. Invent ONE novel product concept for the category and real consumer pain points you are given.

Your response MUST be valid JSON in this exact format:
{
  "name": "ProductName",
  "tagline": "A compelling 5-8 word tagline",
  "pain_solved": "The specific pain point this addresses",
  "description": "2-3 sentences on the product and how it works",
  "features": ["Feature 1", "Feature 2", "Feature 3", "Feature 4"],
  "price_point": "$XX",
  "vibe": "X meets Y aesthetic comparison"
}

Guidelines:
- Name is memorable and brandable, one or two words, at most 15 characters (e.g. TerraGlide, CloudCore, PawPod)
- Tagline is punchy and benefit-focused and does not repeat the name
- Description is specific about HOW the product solves the pain
- Exactly four concrete, differentiating features
- Price is a single realistic dollar amount for the category
- Vibe references known brands or aesthetics (e.g. "Apple meets IKEA")
- Do not describe products that already exist; invent something that makes people ask why it doesn't exist yet

Always respond with valid JSON only, no other text or markdown."#;

/// Bullet list of pain points, `- {pain} (Source: {source})` per line.
pub fn build_pain_brief(pain_points: &[PainPoint]) -> String {
    pain_points
        .iter()
        .take(MAX_BRIEF_PAINS)
        .map(|p| format!("- {} (Source: {})", p.text, p.source))
        .collect::<Vec<_>>()
        .join("\n")
}

/// User message for one concept request.
pub fn build_concept_request(category: &str, pain_points: &[PainPoint]) -> String {
    format!(
        "Category: \"{}\"\n\nREAL PAIN POINTS from consumers (Reddit, Amazon reviews, forums):\n{}\n\nCreate a product that solves one or more of these pain points in an innovative way.",
        category,
        build_pain_brief(pain_points)
    )
}
