//! Langbase Pipes client used by the AI-assisted generation path.

mod client;
mod types;


pub use client::LangbaseClient;
pub use types::*;

use async_trait::async_trait;

use crate::error::LangbaseResult;

/// A remote backend that turns a concept brief into a completion.
///
/// Implemented by [`LangbaseClient`]; tests and embedding callers can supply
/// their own backend.
#[async_trait]
pub trait ConceptPipe: Send + Sync {
    /// Run the named pipe and return the raw completion text.
    async fn complete(&self, pipe_name: &str, messages: Vec<Message>) -> LangbaseResult<String>;
}
