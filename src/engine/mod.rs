//! Deterministic concept generation engine.
//!
//! This module provides:
//! - Category and pain point selection ([`select_category`], [`select_pain_points`])
//! - Sub-generators for names, taglines, descriptions, features, prices and vibes
//! - The coherence filter ([`is_coherent`])
//! - [`SparkEngine`], which owns the random source and the session name
//!   history and exposes [`SparkEngine::generate`]
//!
//! All randomness runs against an injected [`rand::Rng`], so every retry
//! loop and coin flip can be reproduced by seeding.

mod coherence;
mod description;
mod ingredients;
mod naming;
mod selection;
mod tagline;

pub use coherence::*;
pub use description::*;
pub use ingredients::*;
pub use naming::*;
pub use selection::*;
pub use tagline::*;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::EngineConfig;
use crate::knowledge::{KnowledgeBase, PainPoint, ProductConcept};

/// Candidates built before accepting an incoherent concept.
pub const MAX_COHERENCE_ATTEMPTS: usize = 3;

/// Default probability of reusing a seed concept.
pub const DEFAULT_REUSE_PROBABILITY: f64 = 0.4;

/// Category wording used in prose when the category string is blank.
const BLANK_CATEGORY_DISPLAY: &str = "everyday gear";

/// The full outcome of one generation call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    /// Category the concept was generated for, as requested.
    pub category: String,
    /// Pain points presented alongside the concept.
    pub pain_points: Vec<PainPoint>,
    /// The generated or reused concept.
    pub concept: ProductConcept,
    /// `false` when a seed concept was reused verbatim.
    pub is_synthesized: bool,
    /// Whether the concept came from the remote AI path.
    #[serde(default)]
    pub is_ai_generated: bool,
    /// When the result was produced.
    pub generated_at: DateTime<Utc>,
}

impl GenerationResult {
    /// Create a result stamped with the current time
    pub fn new(
        category: impl Into<String>,
        pain_points: Vec<PainPoint>,
        concept: ProductConcept,
        is_synthesized: bool,
    ) -> Self {
        Self {
            category: category.into(),
            pain_points,
            concept,
            is_synthesized,
            is_ai_generated: false,
            generated_at: Utc::now(),
        }
    }

    /// Mark the result as produced by the AI path
    pub fn ai_generated(mut self) -> Self {
        self.is_ai_generated = true;
        self
    }
}

/// Assemble one candidate concept for the given pain.
pub fn build_concept<R: Rng + ?Sized>(
    kb: &KnowledgeBase,
    category: &str,
    pain_text: &str,
    history: &mut NameHistory,
    rng: &mut R,
) -> ProductConcept {
    ProductConcept {
        name: generate_unique_name(kb, category, history, rng),
        tagline: generate_tagline(pain_text, category, rng),
        pain_solved: pain_text.to_string(),
        description: generate_description(kb, category, pain_text, rng),
        features: select_features(kb, category, rng),
        price_point: select_price(kb, category, rng),
        vibe: select_vibe(kb, rng),
        image: select_image(kb, category, rng),
    }
}

/// Synthesize a concept, retrying until it passes the coherence check.
///
/// Makes at most [`MAX_COHERENCE_ATTEMPTS`] candidates and returns the last
/// one if none is coherent.
pub fn generate_synthesized_concept<R: Rng + ?Sized>(
    kb: &KnowledgeBase,
    category: &str,
    pain_points: &[PainPoint],
    history: &mut NameHistory,
    rng: &mut R,
) -> ProductConcept {
    let pain_text = match select_pain_to_solve(pain_points, rng) {
        Some(pain) => pain.text.clone(),
        None => format!("Common frustrations with {}", category),
    };

    let mut attempt = 1;
    loop {
        let concept = build_concept(kb, category, &pain_text, history, rng);
        let issues = check_coherence(&concept);
        if issues.is_empty() {
            debug!(category = %category, attempt, name = %concept.name, "Coherent concept built");
            return concept;
        }
        if attempt >= MAX_COHERENCE_ATTEMPTS {
            warn!(
                category = %category,
                attempts = attempt,
                issues = ?issues,
                "Coherence retries exhausted, accepting last candidate"
            );
            return concept;
        }
        debug!(category = %category, attempt, issues = ?issues, "Incoherent candidate, retrying");
        attempt += 1;
    }
}

/// Generation engine over a shared knowledge base.
///
/// Holds the random source and the session name history behind mutexes, so
/// one engine can serve concurrent callers; the history's check-then-insert
/// runs under a single lock.
pub struct SparkEngine {
    knowledge: Arc<KnowledgeBase>,
    rng: Mutex<StdRng>,
    history: Mutex<NameHistory>,
    reuse_probability: f64,
}

impl SparkEngine {
    /// Create an engine with default settings and an entropy-seeded source
    pub fn new(knowledge: Arc<KnowledgeBase>) -> Self {
        Self {
            knowledge,
            rng: Mutex::new(StdRng::from_entropy()),
            history: Mutex::new(NameHistory::default()),
            reuse_probability: DEFAULT_REUSE_PROBABILITY,
        }
    }

    /// Create an engine from configuration
    pub fn from_config(knowledge: Arc<KnowledgeBase>, config: &EngineConfig) -> Self {
        let engine = Self::new(knowledge)
            .with_history_cap(config.history_cap)
            .with_reuse_probability(config.reuse_probability);
        match config.seed {
            Some(seed) => engine.with_seed(seed),
            None => engine,
        }
    }

    /// Use a deterministic random source
    pub fn with_seed(self, seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
            ..self
        }
    }

    /// Replace the name history with an empty one of the given cap
    pub fn with_history_cap(self, cap: usize) -> Self {
        Self {
            history: Mutex::new(NameHistory::new(cap)),
            ..self
        }
    }

    /// Set the seed reuse probability (clamped to 0.0-1.0)
    pub fn with_reuse_probability(mut self, probability: f64) -> Self {
        self.reuse_probability = if probability.is_nan() {
            DEFAULT_REUSE_PROBABILITY
        } else {
            probability.clamp(0.0, 1.0)
        };
        self
    }

    /// The knowledge base in use
    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    /// Configured seed reuse probability
    pub fn reuse_probability(&self) -> f64 {
        self.reuse_probability
    }

    /// Number of names currently remembered
    pub fn history_len(&self) -> usize {
        lock(&self.history).len()
    }

    /// Resolve a category, see [`select_category`]
    pub fn select_category(&self, requested: Option<&str>) -> String {
        select_category(&self.knowledge, requested, &mut *lock(&self.rng))
    }

    /// Pain points for a category, see [`select_pain_points`]
    pub fn select_pain_points(&self, category: &str) -> Vec<PainPoint> {
        select_pain_points(&self.knowledge, category)
    }

    /// Image association, see [`select_image`]
    pub fn select_image(&self, category: &str) -> Option<String> {
        select_image(&self.knowledge, category, &mut *lock(&self.rng))
    }

    /// Build one candidate concept, see [`build_concept`]
    pub fn build_concept(&self, category: &str, pain_text: &str) -> ProductConcept {
        let mut rng = lock(&self.rng);
        let mut history = lock(&self.history);
        build_concept(&self.knowledge, category, pain_text, &mut history, &mut *rng)
    }

    /// Synthesize a coherent concept, see [`generate_synthesized_concept`]
    pub fn generate_synthesized_concept(
        &self,
        category: &str,
        pain_points: &[PainPoint],
    ) -> ProductConcept {
        let mut rng = lock(&self.rng);
        let mut history = lock(&self.history);
        generate_synthesized_concept(&self.knowledge, category, pain_points, &mut history, &mut *rng)
    }

    /// Generate one concept.
    ///
    /// Resolves the category and its pain points, then either reuses a seed
    /// concept verbatim (with probability [`reuse_probability`], only when
    /// the category has seeds) or synthesizes a new one. Never fails.
    ///
    /// [`reuse_probability`]: SparkEngine::reuse_probability
    pub fn generate(&self, requested: Option<&str>) -> GenerationResult {
        let mut rng = lock(&self.rng);
        let kb = self.knowledge.as_ref();

        let category = select_category(kb, requested, &mut *rng);
        let pain_points = select_pain_points(kb, &category);

        let wants_reuse = rng.gen_bool(self.reuse_probability);
        let seed = if wants_reuse {
            kb.seeds(&category).choose(&mut *rng).cloned()
        } else {
            None
        };

        let (concept, is_synthesized) = match seed {
            Some(concept) => {
                debug!(category = %category, name = %concept.name, "Reusing seed concept");
                (concept, false)
            }
            None => {
                let mut history = lock(&self.history);
                let concept = generate_synthesized_concept(
                    kb,
                    &category,
                    &pain_points,
                    &mut history,
                    &mut *rng,
                );
                (concept, true)
            }
        };

        info!(
            category = %category,
            name = %concept.name,
            synthesized = is_synthesized,
            "Concept generated"
        );

        GenerationResult::new(category, pain_points, concept, is_synthesized)
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Category text for prose, never blank.
pub(crate) fn display_category(category: &str) -> &str {
    let trimmed = category.trim();
    if trimmed.is_empty() {
        BLANK_CATEGORY_DISPLAY
    } else {
        trimmed
    }
}

/// Uppercase the first character.
pub(crate) fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
