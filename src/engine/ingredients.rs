//! Features, price, vibe and image selection.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::knowledge::{KnowledgeBase, FEATURE_COUNT};

/// Pick [`FEATURE_COUNT`] distinct features from the category vocabulary.
///
/// The vocabulary is deduplicated (keeping first occurrences), shuffled and
/// truncated, so features never repeat within one concept.
pub fn select_features<R: Rng + ?Sized>(
    kb: &KnowledgeBase,
    category: &str,
    rng: &mut R,
) -> Vec<String> {
    let mut pool: Vec<String> = Vec::new();
    for feature in kb.features(category) {
        if !pool.contains(feature) {
            pool.push(feature.clone());
        }
    }
    pool.shuffle(rng);
    pool.truncate(FEATURE_COUNT);
    pool
}

/// Draw a price from the category bracket, formatted as `$<amount>`.
pub fn select_price<R: Rng + ?Sized>(kb: &KnowledgeBase, category: &str, rng: &mut R) -> String {
    let bracket = kb.price_bracket(category);
    let (low, high) = if bracket.min <= bracket.max {
        (bracket.min, bracket.max)
    } else {
        (bracket.max, bracket.min)
    };
    format!("${}", rng.gen_range(low..=high))
}

/// Pick a brand-pairing vibe from the global vocabulary.
pub fn select_vibe<R: Rng + ?Sized>(kb: &KnowledgeBase, rng: &mut R) -> String {
    kb.vibes()
        .choose(rng)
        .cloned()
        .unwrap_or_else(|| "Form meets function".to_string())
}

/// Associate an image reference with a synthesized concept.
///
/// Prefers images of the category's seed concepts, then any seed image,
/// then none.
pub fn select_image<R: Rng + ?Sized>(
    kb: &KnowledgeBase,
    category: &str,
    rng: &mut R,
) -> Option<String> {
    let own: Vec<&String> = kb
        .seeds(category)
        .iter()
        .filter_map(|c| c.image.as_ref())
        .collect();
    if let Some(image) = own.choose(rng) {
        return Some((*image).clone());
    }

    let mut all: Vec<&String> = kb.all_seeds().filter_map(|c| c.image.as_ref()).collect();
    // Seed map iteration order is unspecified; sort so seeded runs repeat.
    all.sort();
    all.choose(rng).map(|image| (*image).clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::PriceBracket;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(21)
    }

    #[test]
    fn test_features_are_distinct() {
        let kb = KnowledgeBase::builtin().with_features(
            "dupes",
            ["A", "A", "B", "C", "D", "B"].iter().map(|s| s.to_string()).collect(),
        );
        let mut rng = rng();
        for _ in 0..50 {
            let features = select_features(&kb, "dupes", &mut rng);
            assert_eq!(features.len(), FEATURE_COUNT);
            let distinct: HashSet<_> = features.iter().collect();
            assert_eq!(distinct.len(), FEATURE_COUNT);
        }
    }

    #[test]
    fn test_features_come_from_category() {
        let kb = KnowledgeBase::builtin();
        let features = select_features(&kb, "pet products", &mut rng());
        for feature in &features {
            assert!(kb.features("pet products").contains(feature));
        }
    }

    #[test]
    fn test_price_within_bracket() {
        let kb = KnowledgeBase::builtin();
        let mut rng = rng();
        for _ in 0..500 {
            let price = select_price(&kb, "water bottles", &mut rng);
            let amount: u32 = price.trim_start_matches('$').parse().unwrap();
            assert!((29..=59).contains(&amount), "price {} out of range", price);
        }
    }

    #[test]
    fn test_price_single_value_bracket() {
        let kb = KnowledgeBase::builtin().with_price_bracket("fixed", PriceBracket::new(42, 42));
        assert_eq!(select_price(&kb, "fixed", &mut rng()), "$42");
    }

    #[test]
    fn test_vibe_from_vocabulary() {
        let kb = KnowledgeBase::builtin();
        let vibe = select_vibe(&kb, &mut rng());
        assert!(kb.vibes().contains(&vibe));
    }

    #[test]
    fn test_image_prefers_category_seeds() {
        let kb = KnowledgeBase::builtin();
        let own: Vec<_> = kb
            .seeds("pet products")
            .iter()
            .filter_map(|c| c.image.clone())
            .collect();
        let mut rng = rng();
        for _ in 0..20 {
            let image = select_image(&kb, "pet products", &mut rng).unwrap();
            assert!(own.contains(&image));
        }
    }

    #[test]
    fn test_image_falls_back_to_any_seed() {
        let kb = KnowledgeBase::builtin();
        let image = select_image(&kb, "water bottles", &mut rng()).unwrap();
        assert!(kb.all_seeds().any(|c| c.image.as_ref() == Some(&image)));
    }

    #[test]
    fn test_image_none_without_seeds() {
        let kb = KnowledgeBase::builtin().without_seeds();
        assert!(select_image(&kb, "pet products", &mut rng()).is_none());
    }
}
