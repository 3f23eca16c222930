//! Brand name generation and in-session deduplication.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, warn};

use crate::knowledge::KnowledgeBase;

/// Attempts made to find a name not already in the history.
pub const MAX_NAME_ATTEMPTS: usize = 15;

/// Default capacity of a [`NameHistory`].
pub const DEFAULT_HISTORY_CAP: usize = 100;

/// Names emitted during one engine's lifetime.
///
/// Bounded by `cap`: when an insertion pushes the size above the cap the
/// whole set is cleared (after the insertion), there is no per-entry
/// eviction. A history at the cap therefore holds exactly `cap` names and
/// the next new name empties it.
#[derive(Debug, Clone)]
pub struct NameHistory {
    names: HashSet<String>,
    cap: usize,
}

impl NameHistory {
    /// Create an empty history with the given cap
    pub fn new(cap: usize) -> Self {
        Self {
            names: HashSet::new(),
            cap,
        }
    }

    /// Whether a name was already emitted
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Record a name, clearing everything if the cap is exceeded.
    ///
    /// Returns `true` when the insertion triggered a clear.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into());
        if self.names.len() > self.cap {
            debug!(cap = self.cap, "Name history over capacity, clearing");
            self.names.clear();
            return true;
        }
        false
    }

    /// Number of remembered names
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the history is empty
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Configured capacity
    pub fn cap(&self) -> usize {
        self.cap
    }
}

impl Default for NameHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAP)
    }
}

/// Concatenate a random prefix and suffix for the category.
pub fn generate_name<R: Rng + ?Sized>(kb: &KnowledgeBase, category: &str, rng: &mut R) -> String {
    let parts = kb.name_parts(category);
    let prefix = parts.prefixes.choose(rng).map(String::as_str).unwrap_or("");
    let suffix = parts.suffixes.choose(rng).map(String::as_str).unwrap_or("");
    format!("{}{}", prefix, suffix)
}

/// Generate a name not yet in `history`, then record it.
///
/// Gives up after [`MAX_NAME_ATTEMPTS`] collisions and accepts the last
/// candidate anyway, so tiny vocabularies still terminate.
pub fn generate_unique_name<R: Rng + ?Sized>(
    kb: &KnowledgeBase,
    category: &str,
    history: &mut NameHistory,
    rng: &mut R,
) -> String {
    let mut name = generate_name(kb, category, rng);
    let mut attempts = 1;
    while history.contains(&name) && attempts < MAX_NAME_ATTEMPTS {
        name = generate_name(kb, category, rng);
        attempts += 1;
    }

    if history.contains(&name) {
        warn!(
            category = %category,
            name = %name,
            attempts,
            "Name retries exhausted, accepting duplicate"
        );
    }

    history.insert(name.clone());
    name
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::NameParts;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_history_clears_when_cap_exceeded() {
        let mut history = NameHistory::new(100);
        for i in 0..100 {
            assert!(!history.insert(format!("Name{}", i)));
        }
        assert_eq!(history.len(), 100);

        assert!(history.insert("Name100"));
        assert_eq!(history.len(), 0);
    }

    #[test]
    fn test_history_duplicate_insert_does_not_grow() {
        let mut history = NameHistory::new(2);
        history.insert("A");
        history.insert("A");
        history.insert("B");
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_generate_name_uses_category_parts() {
        let kb = KnowledgeBase::builtin()
            .with_name_parts("tiny", NameParts::new(&["Zip"], &["Zap"]));
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(generate_name(&kb, "tiny", &mut rng), "ZipZap");
    }

    #[test]
    fn test_unique_name_exhaustion_returns_duplicate() {
        let kb = KnowledgeBase::builtin()
            .with_name_parts("tiny", NameParts::new(&["Zip"], &["Zap"]));
        let mut rng = StdRng::seed_from_u64(1);
        let mut history = NameHistory::new(10);

        let first = generate_unique_name(&kb, "tiny", &mut history, &mut rng);
        let second = generate_unique_name(&kb, "tiny", &mut history, &mut rng);
        assert_eq!(first, "ZipZap");
        assert_eq!(second, "ZipZap");
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_unique_names_within_session() {
        let kb = KnowledgeBase::builtin();
        let mut rng = StdRng::seed_from_u64(99);
        let mut history = NameHistory::new(100);
        let mut seen = HashSet::new();

        for _ in 0..50 {
            let name = generate_unique_name(&kb, "xyz_unknown_category", &mut history, &mut rng);
            assert!(seen.insert(name.clone()), "duplicate name {}", name);
        }
    }
}
