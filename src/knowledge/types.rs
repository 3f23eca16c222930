use serde::{Deserialize, Serialize};

/// Severity of a consumer complaint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    /// Recurring, widely reported problem.
    High,
    /// Common annoyance.
    Medium,
    /// Occasional gripe.
    Low,
}

impl Intensity {
    /// Get the intensity name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Intensity::High => "high",
            Intensity::Medium => "medium",
            Intensity::Low => "low",
        }
    }
}

impl std::fmt::Display for Intensity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A short consumer complaint with source attribution and severity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PainPoint {
    /// Complaint text.
    #[serde(rename = "pain")]
    pub text: String,
    /// Where the complaint was observed (forum, reviews...).
    pub source: String,
    /// How strongly the complaint is felt.
    pub intensity: Intensity,
}

impl PainPoint {
    /// Create a new pain point
    pub fn new(text: impl Into<String>, source: impl Into<String>, intensity: Intensity) -> Self {
        Self {
            text: text.into(),
            source: source.into(),
            intensity,
        }
    }

    /// Whether this pain point is marked high intensity
    pub fn is_high(&self) -> bool {
        self.intensity == Intensity::High
    }
}

/// Brand name vocabulary for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameParts {
    /// Leading name fragments.
    pub prefixes: Vec<String>,
    /// Trailing name fragments.
    pub suffixes: Vec<String>,
}

impl NameParts {
    /// Build name parts from static word lists
    pub fn new(prefixes: &[&str], suffixes: &[&str]) -> Self {
        Self {
            prefixes: prefixes.iter().map(|s| s.to_string()).collect(),
            suffixes: suffixes.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Inclusive price range in whole dollars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBracket {
    /// Lowest price.
    pub min: u32,
    /// Highest price.
    pub max: u32,
}

impl PriceBracket {
    /// Create a new bracket
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Whether an amount falls inside the bracket
    pub fn contains(&self, amount: u32) -> bool {
        (self.min..=self.max).contains(&amount)
    }
}

/// One product idea, either hand-authored (seed) or generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductConcept {
    /// Brand name, at most 15 characters.
    pub name: String,
    /// One-line slogan.
    pub tagline: String,
    /// The pain point the product addresses.
    pub pain_solved: String,
    /// Short pitch paragraph.
    pub description: String,
    /// Exactly four selling points.
    pub features: Vec<String>,
    /// Price formatted as `$N`.
    pub price_point: String,
    /// Brand pairing, e.g. "Dyson meets Muji".
    pub vibe: String,
    /// Opaque image reference, never interpreted by the engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}
