//! Integration tests for Langbase client
//!
//! Tests HTTP client behavior using wiremock for request/response mocking.

use serde_json::json;
use wiremock::{
    matchers::{body_partial_json, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

use spark_engine::config::{LangbaseConfig, RequestConfig};
use spark_engine::error::LangbaseError;
use spark_engine::langbase::{ConceptPipe, LangbaseClient, Message, PipeRequest};

/// Create a test client pointing to mock server
fn create_test_client(base_url: &str) -> LangbaseClient {
    create_client(base_url, 0)
}

fn create_client(base_url: &str, max_retries: u32) -> LangbaseClient {
    let config = LangbaseConfig {
        api_key: Some("test-api-key".to_string()),
        base_url: base_url.to_string(),
    };

    let request_config = RequestConfig {
        timeout_ms: 5000,
        max_retries,
        retry_delay_ms: 10,
    };

    LangbaseClient::new(&config, request_config).expect("Failed to create client")
}

fn create_test_request(content: &str) -> PipeRequest {
    PipeRequest::new("spark-concept-v1", vec![Message::user(content)])
}

#[cfg(test)]
mod pipe_call_tests {
    use super::*;

    #[tokio::test]
    async fn test_successful_pipe_call() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/pipes/run"))
            .and(header("Authorization", "Bearer test-api-key"))
            .and(header("Content-Type", "application/json"))
            .and(body_partial_json(json!({
                "name": "spark-concept-v1",
                "stream": false
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "completion": "{\"name\": \"PawPod\"}",
                "threadId": "thread-123",
                "raw": {
                    "model": "gpt-4o-mini",
                    "usage": {
                        "prompt_tokens": 100,
                        "completion_tokens": 50,
                        "total_tokens": 150
                    }
                }
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server.uri());
        let result = client.call_pipe(create_test_request("Category: pet products")).await;

        assert!(result.is_ok(), "Pipe call should succeed: {:?}", result.err());
        let response = result.unwrap();
        assert!(response.success);
        assert_eq!(response.completion, "{\"name\": \"PawPod\"}");
        assert_eq!(response.thread_id, Some("thread-123".to_string()));
        assert_eq!(response.total_tokens(), Some(150));
    }

    #[tokio::test]
    async fn test_pipe_call_authentication_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/pipes/run"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Invalid API key"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server.uri());
        let result = client.call_pipe(create_test_request("Test")).await;

        match result {
            Err(LangbaseError::Unavailable { message, retries }) => {
                assert!(message.contains("401"));
                assert!(message.contains("Invalid API key"));
                assert_eq!(retries, 1);
            }
            other => panic!("expected Unavailable, got {:?}", other.map(|r| r.completion)),
        }
    }

    #[tokio::test]
    async fn test_handle_malformed_json() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/pipes/run"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server.uri());
        let result = client.call_pipe(create_test_request("Test")).await;

        match result {
            Err(LangbaseError::Unavailable { message, .. }) => {
                assert!(message.contains("Failed to parse response"));
            }
            other => panic!("expected Unavailable, got {:?}", other.map(|r| r.completion)),
        }
    }

    #[tokio::test]
    async fn test_parse_response_without_optional_fields() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/pipes/run"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "completion": "Minimal"
            })))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server.uri());
        let response = client.call_pipe(create_test_request("Test")).await.unwrap();

        assert_eq!(response.completion, "Minimal");
        assert!(response.thread_id.is_none());
        assert!(response.raw.is_none());
    }
}

#[cfg(test)]
mod concept_pipe_tests {
    use super::*;

    #[tokio::test]
    async fn test_complete_returns_completion_text() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/pipes/run"))
            .and(body_partial_json(json!({"name": "custom-pipe"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "completion": "{}"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server.uri());
        let completion = client
            .complete(
                "custom-pipe",
                vec![Message::system("rules"), Message::user("brief")],
            )
            .await
            .unwrap();
        assert_eq!(completion, "{}");
    }

    #[tokio::test]
    async fn test_complete_rejects_unsuccessful_run() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/pipes/run"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": false,
                "completion": ""
            })))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server.uri());
        let result = client.complete("spark-concept-v1", vec![]).await;
        assert!(matches!(result, Err(LangbaseError::InvalidResponse { .. })));
    }
}

#[cfg(test)]
mod pipe_management_tests {
    use super::*;

    #[tokio::test]
    async fn test_ensure_spark_pipe_creates_pipe() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/pipes"))
            .and(header("Authorization", "Bearer test-api-key"))
            .and(body_partial_json(json!({
                "name": "spark-concept-v1",
                "upsert": true,
                "json": true
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "spark-concept-v1",
                "description": "Consumer product concept generation",
                "status": "private",
                "url": "https://langbase.com/test/spark-concept-v1"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server.uri());
        assert!(client.ensure_spark_pipe("spark-concept-v1").await.is_ok());
    }

    #[tokio::test]
    async fn test_ensure_spark_pipe_tolerates_conflict() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/pipes"))
            .respond_with(ResponseTemplate::new(409).set_body_string("Pipe already exists"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server.uri());
        assert!(client.ensure_spark_pipe("spark-concept-v1").await.is_ok());
    }

    #[tokio::test]
    async fn test_ensure_spark_pipe_propagates_other_errors() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/pipes"))
            .respond_with(ResponseTemplate::new(403).set_body_string("Forbidden"))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server.uri());
        let result = client.ensure_spark_pipe("spark-concept-v1").await;
        assert!(matches!(result, Err(LangbaseError::Api { status: 403, .. })));
    }
}

#[cfg(test)]
mod timeout_tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_request_timeout() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/pipes/run"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({
                        "success": true,
                        "completion": "Delayed response"
                    }))
                    .set_delay(Duration::from_secs(10)),
            )
            .mount(&mock_server)
            .await;

        let config = LangbaseConfig {
            api_key: Some("test-api-key".to_string()),
            base_url: mock_server.uri(),
        };
        let request_config = RequestConfig {
            timeout_ms: 100,
            max_retries: 0,
            retry_delay_ms: 100,
        };
        let client = LangbaseClient::new(&config, request_config).unwrap();

        let result = client.call_pipe(create_test_request("Test")).await;

        match result {
            Err(LangbaseError::Unavailable { message, .. }) => {
                assert!(message.contains("timeout"), "unexpected message: {}", message);
            }
            other => panic!("expected timeout, got {:?}", other.map(|r| r.completion)),
        }
    }
}

#[cfg(test)]
mod retry_tests {
    use super::*;

    #[tokio::test]
    async fn test_retries_until_exhausted() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/pipes/run"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Server error"))
            .expect(3)
            .mount(&mock_server)
            .await;

        let client = create_client(&mock_server.uri(), 2);
        let result = client.call_pipe(create_test_request("Test")).await;

        assert!(matches!(
            result,
            Err(LangbaseError::Unavailable { retries: 3, .. })
        ));
    }

    #[tokio::test]
    async fn test_retry_recovers_after_failure() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/pipes/run"))
            .respond_with(ResponseTemplate::new(503).set_body_string("Busy"))
            .up_to_n_times(1)
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("POST"))
            .and(path("/v1/pipes/run"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "completion": "Recovered"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_client(&mock_server.uri(), 1);
        let response = client.call_pipe(create_test_request("Test")).await.unwrap();
        assert_eq!(response.completion, "Recovered");
    }
}
