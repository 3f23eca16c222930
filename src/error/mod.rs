use thiserror::Error;

/// Application-level errors
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid environment configuration.
    #[error("Configuration error: {message}")]
    Config {
        /// What was wrong.
        message: String,
    },

    /// Knowledge base could not be loaded.
    #[error("Knowledge base error: {0}")]
    Knowledge(#[from] KnowledgeError),

    /// Langbase client could not be set up.
    #[error("Langbase error: {0}")]
    Langbase(#[from] LangbaseError),
}

/// Knowledge base loading and validation errors
#[derive(Debug, Error)]
pub enum KnowledgeError {
    /// The file could not be read.
    #[error("Failed to read knowledge base {path}: {message}")]
    Io {
        /// File that failed.
        path: String,
        /// Underlying I/O error.
        message: String,
    },

    /// The file is not a valid knowledge base document.
    #[error("Malformed knowledge base: {0}")]
    Parse(#[from] serde_json::Error),

    /// The category list is empty.
    #[error("Knowledge base defines no categories")]
    NoCategories,

    /// A vocabulary that generation draws from is empty.
    #[error("Empty vocabulary: {table} for '{category}'")]
    EmptyVocabulary {
        /// Table holding the vocabulary.
        table: String,
        /// Entry within the table.
        category: String,
    },

    /// A feature list cannot fill a concept.
    #[error("Too few features for '{category}': {found} distinct, {required} required")]
    TooFewFeatures {
        /// Offending category.
        category: String,
        /// Distinct features present.
        found: usize,
        /// Features every concept needs.
        required: usize,
    },

    /// Name parts can combine into an over-long name.
    #[error("Name parts for '{category}' can form {max_len}-char names (limit {limit})")]
    NameTooLong {
        /// Offending category.
        category: String,
        /// Longest possible name.
        max_len: usize,
        /// Name length limit.
        limit: usize,
    },

    /// A price bracket has min above max.
    #[error("Invalid price bracket for '{category}': {min} > {max}")]
    InvalidBracket {
        /// Offending category.
        category: String,
        /// Bracket minimum.
        min: u32,
        /// Bracket maximum.
        max: u32,
    },
}

/// Langbase API errors
#[derive(Debug, Error)]
pub enum LangbaseError {
    /// No API key is configured.
    #[error("LANGBASE_API_KEY is not configured")]
    MissingApiKey,

    /// Retries exhausted.
    #[error("Langbase unavailable: {message} (retries: {retries})")]
    Unavailable {
        /// Last failure.
        message: String,
        /// Retries attempted.
        retries: u32,
    },

    /// Non-success HTTP status.
    #[error("API error: {status} - {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body.
        message: String,
    },

    /// Response or completion did not have the expected shape.
    #[error("Invalid response: {message}")]
    InvalidResponse {
        /// What was wrong.
        message: String,
    },

    /// Request timed out.
    #[error("Request timeout after {timeout_ms}ms")]
    Timeout {
        /// Configured timeout.
        timeout_ms: u64,
    },

    /// Transport failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type alias for application errors
pub type AppResult<T> = Result<T, AppError>;

/// Result type alias for knowledge base operations
pub type KnowledgeResult<T> = Result<T, KnowledgeError>;

/// Result type alias for Langbase operations
pub type LangbaseResult<T> = Result<T, LangbaseError>;
