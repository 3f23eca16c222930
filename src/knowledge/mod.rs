//! Static knowledge the generation engine draws its ingredients from.
//!
//! The knowledge base is built once (either [`KnowledgeBase::builtin`] or a
//! JSON file in the same shape) and shared immutably between generation
//! calls. Every per-category table resolves unknown categories to its
//! `default` entry, so lookups never fail.

mod builtin;
mod table;
mod types;

pub use table::*;
pub use types::*;

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::config::EngineConfig;
use crate::error::{AppResult, KnowledgeError, KnowledgeResult};

/// Number of features every concept carries.
pub const FEATURE_COUNT: usize = 4;

/// Display limit for generated product names, in characters.
pub const MAX_NAME_LEN: usize = 15;

/// Curated vocabularies, pain points and seed concepts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeBase {
    categories: Vec<String>,
    #[serde(default)]
    pain_points: HashMap<String, Vec<PainPoint>>,
    mechanisms: CategoryTable<Vec<String>>,
    name_parts: CategoryTable<NameParts>,
    features: CategoryTable<Vec<String>>,
    price_brackets: CategoryTable<PriceBracket>,
    adjectives: Vec<String>,
    benefits: Vec<String>,
    vibes: Vec<String>,
    #[serde(default)]
    seeds: HashMap<String, Vec<ProductConcept>>,
}

impl KnowledgeBase {
    /// Parse and validate a knowledge base from JSON text
    pub fn from_json_str(json: &str) -> KnowledgeResult<Self> {
        let kb: Self = serde_json::from_str(json)?;
        kb.validate()?;
        Ok(kb)
    }

    /// Load and validate a knowledge base from a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> KnowledgeResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| KnowledgeError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let kb = Self::from_json_str(&json)?;
        info!(
            path = %path.display(),
            categories = kb.categories.len(),
            seeds = kb.all_seeds().count(),
            "Knowledge base loaded"
        );
        Ok(kb)
    }

    /// Knowledge base named by the engine config: the configured file when
    /// set, otherwise the built-in data set.
    pub fn from_config(config: &EngineConfig) -> AppResult<Self> {
        let Some(path) = &config.knowledge_path else {
            return Ok(Self::builtin());
        };
        let kb = Self::from_path(path).map_err(|e| {
            error!(path = %path.display(), error = %e, "Failed to load knowledge base");
            e
        })?;
        Ok(kb)
    }

    /// Check the invariants generation relies on.
    ///
    /// # Errors
    /// Returns the first violation found: an empty category list or
    /// vocabulary, a feature list too short to fill a concept, a name part
    /// set that can exceed [`MAX_NAME_LEN`], or an inverted price bracket.
    pub fn validate(&self) -> KnowledgeResult<()> {
        if self.categories.is_empty() {
            return Err(KnowledgeError::NoCategories);
        }

        for (table, words) in [
            ("adjectives", &self.adjectives),
            ("benefits", &self.benefits),
            ("vibes", &self.vibes),
        ] {
            if words.is_empty() {
                return Err(empty(table, DEFAULT_KEY));
            }
        }

        for (category, list) in self.mechanisms.iter() {
            if list.is_empty() {
                return Err(empty("mechanisms", category));
            }
        }

        for (category, list) in self.features.iter() {
            let mut distinct = list.clone();
            distinct.sort();
            distinct.dedup();
            if distinct.len() < FEATURE_COUNT {
                return Err(KnowledgeError::TooFewFeatures {
                    category: category.to_string(),
                    found: distinct.len(),
                    required: FEATURE_COUNT,
                });
            }
        }

        for (category, parts) in self.name_parts.iter() {
            if parts.prefixes.is_empty() || parts.suffixes.is_empty() {
                return Err(empty("name_parts", category));
            }
            let longest = |words: &[String]| words.iter().map(|w| w.chars().count()).max();
            let max_len = longest(parts.prefixes.as_slice()).unwrap_or(0)
                + longest(parts.suffixes.as_slice()).unwrap_or(0);
            if max_len > MAX_NAME_LEN {
                return Err(KnowledgeError::NameTooLong {
                    category: category.to_string(),
                    max_len,
                    limit: MAX_NAME_LEN,
                });
            }
        }

        for (category, bracket) in self.price_brackets.iter() {
            if bracket.min > bracket.max {
                return Err(KnowledgeError::InvalidBracket {
                    category: category.to_string(),
                    min: bracket.min,
                    max: bracket.max,
                });
            }
        }

        for (category, pains) in &self.pain_points {
            if pains.is_empty() {
                return Err(empty("pain_points", category));
            }
        }

        debug!(categories = self.categories.len(), "Knowledge base validated");
        Ok(())
    }

    /// Known categories, in display order
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Curated pain points for a category, if it has any
    pub fn pain_points(&self, category: &str) -> Option<&[PainPoint]> {
        self.pain_points
            .get(category)
            .map(Vec::as_slice)
            .filter(|p| !p.is_empty())
    }

    /// Solution mechanisms for a category (or the default list)
    pub fn mechanisms(&self, category: &str) -> &[String] {
        self.mechanisms.lookup(category)
    }

    /// Brand name vocabulary for a category (or the default set)
    pub fn name_parts(&self, category: &str) -> &NameParts {
        self.name_parts.lookup(category)
    }

    /// Feature vocabulary for a category (or the default list)
    pub fn features(&self, category: &str) -> &[String] {
        self.features.lookup(category)
    }

    /// Price bracket for a category (or the default bracket)
    pub fn price_bracket(&self, category: &str) -> PriceBracket {
        *self.price_brackets.lookup(category)
    }

    /// Global adjective vocabulary
    pub fn adjectives(&self) -> &[String] {
        &self.adjectives
    }

    /// Global benefit phrases
    pub fn benefits(&self) -> &[String] {
        &self.benefits
    }

    /// Global brand-pairing vibes
    pub fn vibes(&self) -> &[String] {
        &self.vibes
    }

    /// Seed concepts for a category; empty when it has none
    pub fn seeds(&self, category: &str) -> &[ProductConcept] {
        self.seeds.get(category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every seed concept across all categories
    pub fn all_seeds(&self) -> impl Iterator<Item = &ProductConcept> {
        self.seeds.values().flatten()
    }

    /// Replace a category's pain points
    pub fn with_pain_points(mut self, category: impl Into<String>, pains: Vec<PainPoint>) -> Self {
        self.pain_points.insert(category.into(), pains);
        self
    }

    /// Replace a category's name parts
    pub fn with_name_parts(mut self, category: impl Into<String>, parts: NameParts) -> Self {
        self.name_parts.insert(category, parts);
        self
    }

    /// Replace a category's feature vocabulary
    pub fn with_features(mut self, category: impl Into<String>, features: Vec<String>) -> Self {
        self.features.insert(category, features);
        self
    }

    /// Replace a category's price bracket
    pub fn with_price_bracket(mut self, category: impl Into<String>, bracket: PriceBracket) -> Self {
        self.price_brackets.insert(category, bracket);
        self
    }

    /// Replace a category's seed concepts. An empty list removes them.
    pub fn with_seeds(mut self, category: impl Into<String>, seeds: Vec<ProductConcept>) -> Self {
        let category = category.into();
        if seeds.is_empty() {
            self.seeds.remove(&category);
        } else {
            self.seeds.insert(category, seeds);
        }
        self
    }

    /// Remove every seed concept
    pub fn without_seeds(mut self) -> Self {
        self.seeds.clear();
        self
    }
}

fn empty(table: &str, category: &str) -> KnowledgeError {
    KnowledgeError::EmptyVocabulary {
        table: table.to_string(),
        category: category.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookups_fall_back_to_default() {
        let kb = KnowledgeBase::builtin();
        let unknown = "xyz_unknown_category";

        assert_eq!(kb.mechanisms(unknown), kb.mechanisms.default_entry().as_slice());
        assert_eq!(kb.name_parts(unknown), kb.name_parts.default_entry());
        assert_eq!(kb.features(unknown), kb.features.default_entry().as_slice());
        assert_eq!(kb.price_bracket(unknown), PriceBracket::new(29, 149));
        assert!(kb.pain_points(unknown).is_none());
        assert!(kb.seeds(unknown).is_empty());
    }

    #[test]
    fn test_empty_category_uses_defaults() {
        let kb = KnowledgeBase::builtin();
        assert_eq!(kb.name_parts(""), kb.name_parts.default_entry());
        assert!(kb.pain_points("").is_none());
    }

    #[test]
    fn test_from_config_without_path_is_builtin() {
        let kb = KnowledgeBase::from_config(&EngineConfig::default()).unwrap();
        assert_eq!(kb.categories(), KnowledgeBase::builtin().categories());
    }

    #[test]
    fn test_from_config_missing_file_is_app_error() {
        let config = EngineConfig {
            knowledge_path: Some("/nonexistent/spark/kb.json".into()),
            ..EngineConfig::default()
        };
        let err = KnowledgeBase::from_config(&config).unwrap_err();
        assert!(matches!(
            err,
            crate::error::AppError::Knowledge(KnowledgeError::Io { .. })
        ));
        assert!(err.to_string().starts_with("Knowledge base error: "));
    }

    #[test]
    fn test_with_seeds_empty_removes_category() {
        let kb = KnowledgeBase::builtin().with_seeds("kitchen gadgets", Vec::new());
        assert!(kb.seeds("kitchen gadgets").is_empty());
    }

    #[test]
    fn test_validate_rejects_long_names() {
        let kb = KnowledgeBase::builtin().with_name_parts(
            "pet products",
            NameParts::new(&["Extraordinary"], &["Companion"]),
        );
        assert!(matches!(
            kb.validate(),
            Err(KnowledgeError::NameTooLong { max_len: 22, .. })
        ));
    }

    #[test]
    fn test_validate_rejects_short_feature_list() {
        let kb = KnowledgeBase::builtin().with_features(
            "pet products",
            vec!["A".to_string(), "B".to_string(), "B".to_string(), "C".to_string()],
        );
        assert!(matches!(
            kb.validate(),
            Err(KnowledgeError::TooFewFeatures { found: 3, .. })
        ));
    }

    #[test]
    fn test_validate_rejects_inverted_bracket() {
        let kb = KnowledgeBase::builtin()
            .with_price_bracket("water bottles", PriceBracket::new(60, 20));
        assert!(matches!(
            kb.validate(),
            Err(KnowledgeError::InvalidBracket { min: 60, max: 20, .. })
        ));
    }

    #[test]
    fn test_json_round_trip_preserves_lookups() {
        let kb = KnowledgeBase::builtin();
        let json = serde_json::to_string(&kb).unwrap();
        let loaded = KnowledgeBase::from_json_str(&json).unwrap();

        assert_eq!(loaded.categories(), kb.categories());
        assert_eq!(loaded.price_bracket("water bottles"), kb.price_bracket("water bottles"));
        assert_eq!(loaded.seeds("pet products"), kb.seeds("pet products"));
    }
}
