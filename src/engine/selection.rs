//! Category and pain point selection.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::knowledge::{Intensity, KnowledgeBase, PainPoint};

/// Resolve the category to generate for.
///
/// A requested category is used verbatim, even when the knowledge base does
/// not know it (unknown and empty categories route through the defaults).
/// Without a request, picks uniformly from the known categories.
pub fn select_category<R: Rng + ?Sized>(
    kb: &KnowledgeBase,
    requested: Option<&str>,
    rng: &mut R,
) -> String {
    match requested {
        Some(category) => category.to_string(),
        None => kb
            .categories()
            .choose(rng)
            .cloned()
            .unwrap_or_default(),
    }
}

/// Pain points for a category, synthesizing generic ones when it has none.
pub fn select_pain_points(kb: &KnowledgeBase, category: &str) -> Vec<PainPoint> {
    match kb.pain_points(category) {
        Some(pains) => pains.to_vec(),
        None => {
            debug!(category = %category, "No curated pain points, using generic ones");
            generic_pain_points(category)
        }
    }
}

/// Generic complaints that apply to any category.
pub fn generic_pain_points(category: &str) -> Vec<PainPoint> {
    vec![
        PainPoint::new(
            format!("Current {} are overpriced for what they offer", category),
            "Market research",
            Intensity::Medium,
        ),
        PainPoint::new(
            format!("Quality of {} is inconsistent", category),
            "Consumer reports",
            Intensity::High,
        ),
        PainPoint::new(
            "Lack of innovation in this space",
            "Tech blogs",
            Intensity::Medium,
        ),
    ]
}

/// Pick the pain point a synthesized concept addresses.
///
/// High-intensity pains win whenever at least one exists; ties are broken
/// uniformly at random rather than by list order.
pub fn select_pain_to_solve<'a, R: Rng + ?Sized>(
    pain_points: &'a [PainPoint],
    rng: &mut R,
) -> Option<&'a PainPoint> {
    let high: Vec<&PainPoint> = pain_points.iter().filter(|p| p.is_high()).collect();
    if high.is_empty() {
        pain_points.choose(rng)
    } else {
        high.choose(rng).copied()
    }
}
