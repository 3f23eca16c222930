use std::env;
use std::path::PathBuf;

use crate::engine::{DEFAULT_HISTORY_CAP, DEFAULT_REUSE_PROBABILITY};
use crate::error::{AppError, AppResult};

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Generation engine settings.
    pub engine: EngineConfig,
    /// Langbase API settings.
    pub langbase: LangbaseConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// HTTP request settings.
    pub request: RequestConfig,
    /// Langbase pipe names.
    pub pipes: PipeConfig,
}

/// Generation engine configuration
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Remembered names before the history is cleared.
    pub history_cap: usize,
    /// Probability of reusing a seed concept, within 0.0-1.0.
    pub reuse_probability: f64,
    /// Fixed random seed; entropy-seeded when absent.
    pub seed: Option<u64>,
    /// JSON knowledge base to load instead of the built-in one.
    pub knowledge_path: Option<PathBuf>,
}

/// Langbase API configuration
#[derive(Debug, Clone)]
pub struct LangbaseConfig {
    /// The AI-assisted path is disabled without a key.
    pub api_key: Option<String>,
    /// API base URL.
    pub base_url: String,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter (e.g. "info").
    pub level: String,
    /// Log output format.
    pub format: LogFormat,
}

/// Log output format
#[derive(Debug, Clone, PartialEq)]
pub enum LogFormat {
    /// Human-readable output.
    Pretty,
    /// Structured JSON output.
    Json,
}

/// HTTP request configuration
#[derive(Debug, Clone)]
pub struct RequestConfig {
    /// Request timeout in milliseconds.
    pub timeout_ms: u64,
    /// Maximum retry attempts.
    pub max_retries: u32,
    /// Initial retry delay in milliseconds.
    pub retry_delay_ms: u64,
}

/// Langbase pipe name configuration
#[derive(Debug, Clone)]
pub struct PipeConfig {
    /// Concept generation pipe.
    pub spark: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> AppResult<Self> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let engine = EngineConfig {
            history_cap: parse_var("SPARK_HISTORY_CAP").unwrap_or(DEFAULT_HISTORY_CAP),
            reuse_probability: parse_var::<f64>("SPARK_REUSE_PROBABILITY")
                .filter(|p| !p.is_nan())
                .map(|p| p.clamp(0.0, 1.0))
                .unwrap_or(DEFAULT_REUSE_PROBABILITY),
            seed: match non_empty_var("SPARK_SEED") {
                Some(raw) => Some(raw.parse().map_err(|_| AppError::Config {
                    message: format!("SPARK_SEED must be an unsigned integer, got '{}'", raw),
                })?),
                None => None,
            },
            knowledge_path: non_empty_var("SPARK_KNOWLEDGE_PATH").map(PathBuf::from),
        };

        let langbase = LangbaseConfig {
            api_key: non_empty_var("LANGBASE_API_KEY"),
            base_url: env::var("LANGBASE_BASE_URL")
                .unwrap_or_else(|_| "https://api.langbase.com".to_string()),
        };

        let logging = LoggingConfig {
            level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            format: match env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .to_lowercase()
                .as_str()
            {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
        };

        let request = RequestConfig {
            timeout_ms: parse_var("REQUEST_TIMEOUT_MS").unwrap_or(30000),
            max_retries: parse_var("MAX_RETRIES").unwrap_or(3),
            retry_delay_ms: parse_var("RETRY_DELAY_MS").unwrap_or(1000),
        };

        let pipes = PipeConfig {
            spark: env::var("PIPE_SPARK").unwrap_or_else(|_| "spark-concept-v1".to_string()),
        };

        Ok(Config {
            engine,
            langbase,
            logging,
            request,
            pipes,
        })
    }

    /// Whether the AI-assisted path can be used
    pub fn ai_enabled(&self) -> bool {
        self.langbase.api_key.is_some()
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.trim().parse().ok())
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            history_cap: DEFAULT_HISTORY_CAP,
            reuse_probability: DEFAULT_REUSE_PROBABILITY,
            seed: None,
            knowledge_path: None,
        }
    }
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 30000,
            max_retries: 3,
            retry_delay_ms: 1000,
        }
    }
}

impl Default for PipeConfig {
    fn default() -> Self {
        Self {
            spark: "spark-concept-v1".to_string(),
        }
    }
}
