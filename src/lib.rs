//! # Spark Engine
//!
//! Generates plausible consumer product concepts (a brand name, tagline,
//! description, four features, a price and a brand-pairing "vibe") for a
//! product category and its real consumer pain points.
//!
//! ## Features
//!
//! - **Deterministic engine**: template and vocabulary synthesis with a
//!   seedable random source, per-session name deduplication and a coherence
//!   filter with bounded retries
//! - **Seed reuse**: curated concepts are returned verbatim with a
//!   configurable probability
//! - **AI-assisted path**: concepts requested from a Langbase pipe, falling
//!   back to the engine on any failure
//! - **Pluggable knowledge**: the built-in data set or a JSON file of the
//!   same shape
//!
//! ## Architecture
//!
//! ```text
//! spark CLI → AssistedGenerator → Langbase Pipes (HTTP)
//!                    ↓ (fallback)
//!              SparkEngine → KnowledgeBase
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use spark_engine::{KnowledgeBase, SparkEngine};
//!
//! let engine = SparkEngine::new(Arc::new(KnowledgeBase::builtin())).with_seed(7);
//! let result = engine.generate(Some("kitchen gadgets"));
//! println!("{}: {}", result.concept.name, result.concept.tagline);
//! ```

#![warn(missing_docs)]

/// AI-assisted generation with engine fallback.
pub mod assist;
/// Command-line interface for the `spark` binary.
pub mod cli;
/// Configuration loaded from environment variables.
pub mod config;
/// Concept generation engine.
pub mod engine;
/// Error types and result aliases for the application.
pub mod error;
/// Knowledge base of categories, vocabularies and seed concepts.
pub mod knowledge;
/// Langbase API client and types for pipe communication.
pub mod langbase;
/// System prompts for Langbase pipes.
pub mod prompts;

pub use config::Config;
pub use engine::{GenerationResult, SparkEngine};
pub use error::{AppError, AppResult};
pub use knowledge::{KnowledgeBase, PainPoint, ProductConcept};
