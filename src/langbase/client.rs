use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

use super::types::{CreatePipeRequest, CreatePipeResponse, Message, PipeRequest, PipeResponse};
use super::ConceptPipe;
use crate::config::{LangbaseConfig, RequestConfig};
use crate::error::{LangbaseError, LangbaseResult};
use crate::prompts::SPARK_CONCEPT_PROMPT;

/// Client for interacting with Langbase Pipes API
#[derive(Clone)]
pub struct LangbaseClient {
    client: Client,
    base_url: String,
    api_key: String,
    request_config: RequestConfig,
}

impl LangbaseClient {
    /// Create a new Langbase client
    ///
    /// # Errors
    /// Fails with [`LangbaseError::MissingApiKey`] when no key is configured.
    pub fn new(config: &LangbaseConfig, request_config: RequestConfig) -> LangbaseResult<Self> {
        let api_key = config
            .api_key
            .clone()
            .ok_or(LangbaseError::MissingApiKey)?;

        let client = Client::builder()
            .timeout(Duration::from_millis(request_config.timeout_ms))
            .build()
            .map_err(LangbaseError::Http)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
            request_config,
        })
    }

    /// Call a Langbase pipe, retrying with exponential backoff
    pub async fn call_pipe(&self, request: PipeRequest) -> LangbaseResult<PipeResponse> {
        let url = format!("{}/v1/pipes/run", self.base_url);
        let pipe_name = request.name.clone();

        let mut last_error = None;
        let mut retries = 0;

        while retries <= self.request_config.max_retries {
            if retries > 0 {
                let delay = Duration::from_millis(
                    self.request_config.retry_delay_ms * (2_u64.pow(retries - 1)),
                );
                warn!(
                    pipe = %pipe_name,
                    retry = retries,
                    delay_ms = delay.as_millis(),
                    "Retrying Langbase request"
                );
                tokio::time::sleep(delay).await;
            }

            let start = Instant::now();

            match self.execute_request(&url, &request).await {
                Ok(response) => {
                    info!(
                        pipe = %pipe_name,
                        latency_ms = start.elapsed().as_millis(),
                        tokens = ?response.total_tokens(),
                        "Langbase pipe call succeeded"
                    );
                    return Ok(response);
                }
                Err(e) => {
                    error!(
                        pipe = %pipe_name,
                        error = %e,
                        latency_ms = start.elapsed().as_millis(),
                        retry = retries,
                        "Langbase pipe call failed"
                    );
                    last_error = Some(e);
                    retries += 1;
                }
            }
        }

        Err(LangbaseError::Unavailable {
            message: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "Unknown error".to_string()),
            retries,
        })
    }

    async fn execute_request(
        &self,
        url: &str,
        request: &PipeRequest,
    ) -> LangbaseResult<PipeResponse> {
        debug!(
            pipe = %request.name,
            messages = request.messages.len(),
            "Calling Langbase pipe"
        );

        let response = self
            .authorized_post(url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LangbaseError::Timeout {
                        timeout_ms: self.request_config.timeout_ms,
                    }
                } else {
                    LangbaseError::Http(e)
                }
            })?;

        read_json(response, "response").await
    }

    /// Get the base URL (for testing)
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a new pipe
    pub async fn create_pipe(
        &self,
        request: CreatePipeRequest,
    ) -> LangbaseResult<CreatePipeResponse> {
        let url = format!("{}/v1/pipes", self.base_url);

        info!(pipe = %request.name, "Creating Langbase pipe");

        let response = self
            .authorized_post(&url)
            .json(&request)
            .send()
            .await
            .map_err(LangbaseError::Http)?;

        let created: CreatePipeResponse = read_json(response, "create pipe response").await?;

        info!(
            pipe = %created.name,
            url = %created.url,
            "Pipe created successfully"
        );

        Ok(created)
    }

    /// Ensure the concept pipe exists, creating it if needed
    pub async fn ensure_spark_pipe(&self, pipe_name: &str) -> LangbaseResult<()> {
        let request = CreatePipeRequest::new(pipe_name)
            .with_description("Consumer product concept generation")
            .with_model("openai:gpt-4o-mini")
            .with_upsert(true)
            .with_json_output(true)
            .with_temperature(0.9)
            .with_max_tokens(1024)
            .with_messages(vec![Message::system(SPARK_CONCEPT_PROMPT)]);

        match self.create_pipe(request).await {
            Ok(_) => {
                info!(pipe = %pipe_name, "Concept pipe ready");
                Ok(())
            }
            Err(LangbaseError::Api { status: 409, .. }) => {
                info!(pipe = %pipe_name, "Pipe already exists");
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    fn authorized_post(&self, url: &str) -> RequestBuilder {
        self.client
            .post(url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
    }
}

async fn read_json<T: DeserializeOwned>(response: Response, what: &str) -> LangbaseResult<T> {
    let status = response.status();

    if !status.is_success() {
        let error_body = response.text().await.unwrap_or_default();
        return Err(LangbaseError::Api {
            status: status.as_u16(),
            message: error_body,
        });
    }

    response
        .json()
        .await
        .map_err(|e| LangbaseError::InvalidResponse {
            message: format!("Failed to parse {}: {}", what, e),
        })
}

#[async_trait]
impl ConceptPipe for LangbaseClient {
    async fn complete(&self, pipe_name: &str, messages: Vec<Message>) -> LangbaseResult<String> {
        let response = self.call_pipe(PipeRequest::new(pipe_name, messages)).await?;
        if !response.success {
            return Err(LangbaseError::InvalidResponse {
                message: "Pipe reported an unsuccessful run".to_string(),
            });
        }
        Ok(response.completion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(api_key: Option<&str>) -> LangbaseConfig {
        LangbaseConfig {
            api_key: api_key.map(str::to_string),
            base_url: "https://api.langbase.com/".to_string(),
        }
    }

    #[test]
    fn test_client_creation() {
        let client = LangbaseClient::new(&config(Some("test_key")), RequestConfig::default());
        assert!(client.is_ok());
        assert_eq!(client.unwrap().base_url(), "https://api.langbase.com");
    }

    #[test]
    fn test_client_requires_api_key() {
        let result = LangbaseClient::new(&config(None), RequestConfig::default());
        assert!(matches!(result, Err(LangbaseError::MissingApiKey)));
    }
}
