//! Command-line interface for the `spark` binary.

use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing::warn;

use crate::assist::AssistedGenerator;
use crate::engine::{GenerationResult, SparkEngine};

/// Upper bound for `--count`.
pub const MAX_COUNT: u32 = 50;

/// Product concept generator.
#[derive(Parser, Debug, Clone)]
#[command(name = "spark", version, about)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Seed requested on the command line, if any
    pub fn seed_override(&self) -> Option<u64> {
        match &self.command {
            Commands::Generate { seed, .. } => *seed,
            _ => None,
        }
    }

    /// Whether the command asks for the AI-assisted path
    pub fn wants_ai(&self) -> bool {
        matches!(self.command, Commands::Generate { ai: true, .. })
    }
}

/// `spark` subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Generate product concepts
    Generate {
        /// Category to generate for (random when omitted)
        #[arg(long, short)]
        category: Option<String>,

        /// Number of concepts to generate
        #[arg(long, short = 'n', default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=MAX_COUNT as i64))]
        count: u32,

        /// Fixed random seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,

        /// Use the Langbase pipe when an API key is configured
        #[arg(long)]
        ai: bool,

        /// Pause before each concept, in milliseconds
        #[arg(long, default_value_t = 0)]
        think_ms: u64,
    },

    /// List known categories
    Categories,

    /// Show the pain points used for a category
    Pains {
        /// Category name (unknown categories get generic pain points)
        category: String,
    },
}

/// Result of CLI command execution.
pub struct CliResult {
    /// Exit code (0 = success)
    pub exit_code: i32,
    /// Output message
    pub message: String,
}

impl CliResult {
    /// Create a success result with the given message.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            exit_code: 0,
            message: message.into(),
        }
    }

    /// Create an error result with the given message.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            exit_code: 1,
            message: message.into(),
        }
    }
}

/// Generators available to commands.
pub struct CliContext {
    engine: Arc<SparkEngine>,
    assisted: Option<AssistedGenerator>,
}

impl CliContext {
    /// Context with the local engine only
    pub fn new(engine: Arc<SparkEngine>) -> Self {
        Self {
            engine,
            assisted: None,
        }
    }

    /// Enable the AI-assisted path
    pub fn with_assisted(mut self, assisted: AssistedGenerator) -> Self {
        self.assisted = Some(assisted);
        self
    }

    /// The local engine
    pub fn engine(&self) -> &SparkEngine {
        &self.engine
    }
}

/// Execute a `spark` command.
pub async fn execute_command(command: Commands, context: &CliContext) -> CliResult {
    match command {
        Commands::Generate {
            category,
            count,
            json,
            ai,
            think_ms,
            ..
        } => execute_generate(context, category.as_deref(), count, json, ai, think_ms).await,
        Commands::Categories => execute_categories(context.engine()),
        Commands::Pains { category } => execute_pains(context.engine(), &category),
    }
}

async fn execute_generate(
    context: &CliContext,
    category: Option<&str>,
    count: u32,
    json: bool,
    ai: bool,
    think_ms: u64,
) -> CliResult {
    let assisted = match (ai, &context.assisted) {
        (true, Some(assisted)) => Some(assisted),
        (true, None) => {
            warn!("AI generation requested but LANGBASE_API_KEY is not set, using the local engine");
            None
        }
        (false, _) => None,
    };

    let mut results = Vec::with_capacity(count as usize);
    for _ in 0..count {
        if think_ms > 0 {
            tokio::time::sleep(Duration::from_millis(think_ms)).await;
        }
        let result = match assisted {
            Some(assisted) => assisted.generate(category).await,
            None => context.engine.generate(category),
        };
        results.push(result);
    }

    if json {
        return match serde_json::to_string_pretty(&results) {
            Ok(text) => CliResult::success(text),
            Err(e) => CliResult::error(format!("Failed to serialize results: {}", e)),
        };
    }

    let cards: Vec<String> = results.iter().map(format_card).collect();
    CliResult::success(cards.join("\n"))
}

fn execute_categories(engine: &SparkEngine) -> CliResult {
    let mut output = String::new();
    for (i, category) in engine.knowledge().categories().iter().enumerate() {
        output.push_str(&format!("{:>3}. {}\n", i + 1, category));
    }
    CliResult::success(output.trim_end())
}

fn execute_pains(engine: &SparkEngine, category: &str) -> CliResult {
    let pains = engine.select_pain_points(category);
    let mut output = String::new();

    if engine.knowledge().pain_points(category).is_none() {
        output.push_str(&format!(
            "No curated pain points for '{}', showing generic ones\n\n",
            category
        ));
    }

    for pain in &pains {
        output.push_str(&format!(
            "[{:<6}] {} ({})\n",
            pain.intensity.as_str().to_uppercase(),
            pain.text,
            pain.source
        ));
    }
    CliResult::success(output.trim_end())
}

/// Plain-text rendering of one result.
pub fn format_card(result: &GenerationResult) -> String {
    let concept = &result.concept;
    let origin = if result.is_ai_generated {
        "ai"
    } else if result.is_synthesized {
        "synthesized"
    } else {
        "seed"
    };

    let mut card = String::new();
    card.push_str(&format!("{}  ·  {}\n", concept.name, concept.price_point));
    card.push_str(&format!("\"{}\"\n\n", concept.tagline));
    card.push_str(&format!("Category: {} ({})\n", result.category, origin));
    card.push_str(&format!("Solves:   {}\n\n", concept.pain_solved));
    card.push_str(&format!("{}\n\n", concept.description));
    for feature in &concept.features {
        card.push_str(&format!("  • {}\n", feature));
    }
    card.push_str(&format!("\nVibe: {}\n", concept.vibe));
    if let Some(image) = &concept.image {
        card.push_str(&format!("Image: {}\n", image));
    }
    card
}
