//! Category-keyed lookup tables with a reserved default entry.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Reserved key holding a table's fallback entry.
pub const DEFAULT_KEY: &str = "default";

/// Mapping from category to an entry, with a guaranteed default.
///
/// Resolution is a two-step lookup: the exact category key, else the
/// default. A table cannot exist without its default, so lookups never fail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "HashMap<String, T>", into = "HashMap<String, T>")]
#[serde(bound(
    serialize = "T: Serialize + Clone",
    deserialize = "T: Deserialize<'de>"
))]
pub struct CategoryTable<T> {
    default: T,
    entries: HashMap<String, T>,
}

impl<T> CategoryTable<T> {
    /// Create a table containing only the default entry
    pub fn new(default: T) -> Self {
        Self {
            default,
            entries: HashMap::new(),
        }
    }

    /// Add a category entry, builder style
    pub fn with(mut self, category: impl Into<String>, entry: T) -> Self {
        self.insert(category, entry);
        self
    }

    /// Insert or replace an entry. Inserting under [`DEFAULT_KEY`] replaces the default.
    pub fn insert(&mut self, category: impl Into<String>, entry: T) {
        let category = category.into();
        if category == DEFAULT_KEY {
            self.default = entry;
        } else {
            self.entries.insert(category, entry);
        }
    }

    /// Resolve a category, falling back to the default entry
    pub fn lookup(&self, category: &str) -> &T {
        self.entries.get(category).unwrap_or(&self.default)
    }

    /// Whether the category has its own entry
    pub fn has_entry(&self, category: &str) -> bool {
        self.entries.contains_key(category)
    }

    /// The fallback entry
    pub fn default_entry(&self) -> &T {
        &self.default
    }

    /// Iterate over every entry including the default, keyed by category
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        std::iter::once((DEFAULT_KEY, &self.default))
            .chain(self.entries.iter().map(|(k, v)| (k.as_str(), v)))
    }
}

impl<T> TryFrom<HashMap<String, T>> for CategoryTable<T> {
    type Error = String;

    fn try_from(mut map: HashMap<String, T>) -> Result<Self, Self::Error> {
        let default = map
            .remove(DEFAULT_KEY)
            .ok_or_else(|| format!("table is missing the '{}' entry", DEFAULT_KEY))?;
        Ok(Self {
            default,
            entries: map,
        })
    }
}

impl<T> From<CategoryTable<T>> for HashMap<String, T> {
    fn from(table: CategoryTable<T>) -> Self {
        let mut map = table.entries;
        map.insert(DEFAULT_KEY.to_string(), table.default);
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_category() {
        let table = CategoryTable::new(1).with("kitchen gadgets", 2);
        assert_eq!(*table.lookup("kitchen gadgets"), 2);
    }

    #[test]
    fn test_lookup_falls_back_to_default() {
        let table = CategoryTable::new(1).with("kitchen gadgets", 2);
        assert_eq!(*table.lookup("xyz_unknown_category"), 1);
        assert_eq!(*table.lookup(""), 1);
    }

    #[test]
    fn test_insert_default_key_replaces_default() {
        let mut table = CategoryTable::new(1);
        table.insert(DEFAULT_KEY, 7);
        assert_eq!(*table.default_entry(), 7);
        assert!(!table.has_entry(DEFAULT_KEY));
    }

    #[test]
    fn test_iter_includes_default() {
        let table = CategoryTable::new(1).with("a", 2);
        let mut keys: Vec<_> = table.iter().map(|(k, _)| k).collect();
        keys.sort();
        assert_eq!(keys, vec!["a", DEFAULT_KEY]);
    }

    #[test]
    fn test_deserialize_requires_default() {
        let ok: Result<CategoryTable<u32>, _> =
            serde_json::from_str(r#"{"default": 3, "water bottles": 5}"#);
        let table = ok.unwrap();
        assert_eq!(*table.lookup("water bottles"), 5);
        assert_eq!(*table.lookup("other"), 3);

        let missing: Result<CategoryTable<u32>, _> =
            serde_json::from_str(r#"{"water bottles": 5}"#);
        let err = missing.unwrap_err().to_string();
        assert!(err.contains("missing the 'default' entry"));
    }

    #[test]
    fn test_serialize_round_trip_keeps_default() {
        let table = CategoryTable::new(1).with("a", 2);
        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json["default"], 1);
        assert_eq!(json["a"], 2);
    }
}
