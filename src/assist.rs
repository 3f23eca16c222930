//! AI-assisted concept generation with deterministic fallback.
//!
//! Category and pain points are always resolved by the local engine. The
//! concept itself is requested from a [`ConceptPipe`]; any failure (network,
//! API status, malformed completion) degrades to [`SparkEngine::generate`]
//! for the same category, so callers always get a result.

use std::sync::{Arc, OnceLock};
use std::time::Instant;

use regex::Regex;
use tracing::{info, warn};

use crate::config::Config;
use crate::engine::{GenerationResult, SparkEngine};
use crate::error::{AppResult, LangbaseError, LangbaseResult};
use crate::knowledge::{PainPoint, ProductConcept, FEATURE_COUNT, MAX_NAME_LEN};
use crate::langbase::{ConceptPipe, LangbaseClient, Message};
use crate::prompts::{build_concept_request, SPARK_CONCEPT_PROMPT};

/// Concept generator backed by a remote pipe.
pub struct AssistedGenerator {
    engine: Arc<SparkEngine>,
    pipe: Arc<dyn ConceptPipe>,
    pipe_name: String,
}

impl AssistedGenerator {
    /// Create a generator over an engine and a pipe backend
    pub fn new(
        engine: Arc<SparkEngine>,
        pipe: Arc<dyn ConceptPipe>,
        pipe_name: impl Into<String>,
    ) -> Self {
        Self {
            engine,
            pipe,
            pipe_name: pipe_name.into(),
        }
    }

    /// Connect to Langbase and make sure the concept pipe exists.
    ///
    /// A failed pipe upsert is only logged; the pipe may already exist
    /// under credentials that cannot create it.
    pub async fn connect(engine: Arc<SparkEngine>, config: &Config) -> AppResult<Self> {
        let client = LangbaseClient::new(&config.langbase, config.request.clone())?;
        info!(base_url = %config.langbase.base_url, "Langbase client initialized");

        if let Err(e) = client.ensure_spark_pipe(&config.pipes.spark).await {
            warn!(error = %e, "Could not ensure concept pipe exists");
        }
        Ok(Self::new(engine, Arc::new(client), config.pipes.spark.clone()))
    }

    /// The fallback engine
    pub fn engine(&self) -> &SparkEngine {
        &self.engine
    }

    /// Generate one concept, preferring the remote pipe.
    pub async fn generate(&self, requested: Option<&str>) -> GenerationResult {
        let category = self.engine.select_category(requested);
        let pain_points = self.engine.select_pain_points(&category);
        let start = Instant::now();

        match self.request_concept(&category, &pain_points).await {
            Ok(mut concept) => {
                if concept.image.is_none() {
                    concept.image = self.engine.select_image(&category);
                }
                info!(
                    category = %category,
                    name = %concept.name,
                    latency_ms = start.elapsed().as_millis(),
                    "AI concept generated"
                );
                GenerationResult::new(category, pain_points, concept, true).ai_generated()
            }
            Err(e) => {
                warn!(
                    category = %category,
                    error = %e,
                    latency_ms = start.elapsed().as_millis(),
                    "AI generation failed, falling back to engine"
                );
                self.engine.generate(Some(&category))
            }
        }
    }

    /// Ask the pipe for a concept and parse its completion.
    pub async fn request_concept(
        &self,
        category: &str,
        pain_points: &[PainPoint],
    ) -> LangbaseResult<ProductConcept> {
        let messages = vec![
            Message::system(SPARK_CONCEPT_PROMPT),
            Message::user(build_concept_request(category, pain_points)),
        ];
        let completion = self.pipe.complete(&self.pipe_name, messages).await?;
        parse_concept(&completion)
    }
}

/// Parse a concept out of a completion, tolerating markdown code fences.
pub fn parse_concept(completion: &str) -> LangbaseResult<ProductConcept> {
    let json = extract_json_from_completion(completion)
        .map_err(|message| LangbaseError::InvalidResponse { message })?;

    let concept: ProductConcept =
        serde_json::from_str(json).map_err(|e| LangbaseError::InvalidResponse {
            message: format!("Failed to parse concept: {}", e),
        })?;

    check_shape(&concept).map_err(|message| LangbaseError::InvalidResponse { message })?;
    Ok(concept)
}

fn price_pattern() -> &'static Regex {
    static PRICE: OnceLock<Regex> = OnceLock::new();
    PRICE.get_or_init(|| Regex::new(r"^\$\d+$").expect("price pattern is valid"))
}

/// Hold a remote concept to the shape the engine guarantees locally.
fn check_shape(concept: &ProductConcept) -> Result<(), String> {
    let name_len = concept.name.trim().chars().count();
    if name_len == 0 {
        return Err("Concept has an empty name".to_string());
    }
    if concept.name.chars().count() > MAX_NAME_LEN {
        return Err(format!(
            "Concept name '{}' exceeds {} characters",
            concept.name, MAX_NAME_LEN
        ));
    }
    if concept.features.len() != FEATURE_COUNT {
        return Err(format!(
            "Concept has {} features, expected {}",
            concept.features.len(),
            FEATURE_COUNT
        ));
    }
    if !price_pattern().is_match(&concept.price_point) {
        return Err(format!("Malformed price point '{}'", concept.price_point));
    }
    if concept.vibe.trim().is_empty() {
        return Err("Concept has an empty vibe".to_string());
    }
    Ok(())
}

/// Locate the JSON body of a completion: raw, in a ```json block, or in a
/// bare ``` block.
pub(crate) fn extract_json_from_completion(completion: &str) -> Result<&str, String> {
    let trimmed = completion.trim();
    if trimmed.starts_with('{') {
        return Ok(trimmed);
    }

    if completion.contains("```json") {
        return completion
            .split("```json")
            .nth(1)
            .and_then(|s| s.split("```").next())
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| "Found ```json block but content was empty".to_string());
    }

    if completion.contains("```") {
        return completion
            .split("```")
            .nth(1)
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| "Found ``` block but content was empty".to_string());
    }

    Err(format!(
        "No JSON found in completion. First 100 chars: '{}'",
        completion.chars().take(100).collect::<String>()
    ))
}
