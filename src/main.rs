use std::sync::Arc;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use spark_engine::{
    assist::AssistedGenerator,
    cli::{execute_command, Cli, CliContext},
    config::{Config, LogFormat},
    engine::SparkEngine,
    knowledge::KnowledgeBase,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize logging
    init_logging(&config);

    if let Some(seed) = cli.seed_override() {
        config.engine.seed = Some(seed);
    }

    let knowledge = KnowledgeBase::from_config(&config.engine)?;

    let engine = Arc::new(SparkEngine::from_config(Arc::new(knowledge), &config.engine));
    info!(
        version = env!("CARGO_PKG_VERSION"),
        seeded = config.engine.seed.is_some(),
        reuse_probability = engine.reuse_probability(),
        "Spark engine ready"
    );

    let mut context = CliContext::new(engine.clone());

    if cli.wants_ai() && config.ai_enabled() {
        match AssistedGenerator::connect(engine, &config).await {
            Ok(assisted) => context = context.with_assisted(assisted),
            Err(e) => {
                warn!(error = %e, "Failed to initialize Langbase client, using the local engine");
            }
        }
    }

    let result = execute_command(cli.command, &context).await;
    if result.exit_code == 0 {
        println!("{}", result.message);
    } else {
        eprintln!("{}", result.message);
    }
    std::process::exit(result.exit_code);
}

/// Initialize tracing/logging
fn init_logging(config: &Config) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}
