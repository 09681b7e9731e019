//! # HTTP Transport
//!
//! The request executor behind every call wrapper: build one HTTP request
//! against a fixed URL template, await it, and hand back the raw JSON body
//! (or a typed error). Resource modules own URL construction and decoding;
//! this module owns headers, encoding, and error mapping.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use stripe_core::{StripeError, StripeResult};
use tracing::{debug, error};
use uuid::Uuid;

use crate::config::StripeConfig;

/// HTTP methods used by the Stripe API surface this client covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

/// Executes a single API request and returns the parsed JSON body.
///
/// `params` are encoded as the query string for GET and as a form body for
/// POST; DELETE carries none. Implementations must map transport failures
/// to `StripeError::Network` and non-2xx responses to `StripeError::Api`.
#[async_trait]
pub trait RequestExecutor: Send + Sync {
    async fn execute(
        &self,
        method: Method,
        path: &str,
        params: &[(String, String)],
        idempotency_key: Option<&str>,
    ) -> StripeResult<Value>;
}

/// reqwest-backed executor
pub struct HttpExecutor {
    config: StripeConfig,
    client: Client,
}

impl HttpExecutor {
    pub fn new(config: StripeConfig) -> StripeResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| StripeError::Configuration(format!("HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }
}

#[async_trait]
impl RequestExecutor for HttpExecutor {
    async fn execute(
        &self,
        method: Method,
        path: &str,
        params: &[(String, String)],
        idempotency_key: Option<&str>,
    ) -> StripeResult<Value> {
        let url = format!("{}{}", self.config.api_base_url, path);

        debug!(
            "{} {} ({} params, idempotency_key={})",
            method.as_str(),
            path,
            params.len(),
            idempotency_key.is_some()
        );

        let mut request = match method {
            Method::Get => self.client.get(&url).query(params),
            Method::Post => self.client.post(&url).form(params),
            Method::Delete => self.client.delete(&url),
        };

        request = request
            .header("Authorization", self.config.auth_header())
            .header("Stripe-Version", &self.config.api_version);

        if let Some(key) = idempotency_key {
            request = request.header("Idempotency-Key", key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| StripeError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| StripeError::Network(e.to_string()))?;

        if !status.is_success() {
            error!("Stripe API error: status={}, body={}", status, body);

            if let Ok(error_body) = serde_json::from_str::<ApiErrorBody>(&body) {
                return Err(StripeError::Api {
                    status: status.as_u16(),
                    message: error_body.error.message,
                    code: error_body.error.code,
                    param: error_body.error.param,
                });
            }

            return Err(StripeError::Api {
                status: status.as_u16(),
                message: body,
                code: None,
                param: None,
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            StripeError::Serialization(format!("Failed to parse Stripe response: {}", e))
        })
    }
}

/// Shape of Stripe's error response body
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiError,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    param: Option<String>,
}

/// The Stripe API client.
///
/// Thin by design: each resource module adds call wrappers that format a
/// URL template, delegate to the executor, and decode the body into a
/// record from `stripe-core`. The client holds no mutable state and can be
/// cloned and shared across tasks freely.
#[derive(Clone)]
pub struct StripeClient {
    executor: Arc<dyn RequestExecutor>,
}

impl StripeClient {
    /// Create a client over the default reqwest executor
    pub fn new(config: StripeConfig) -> StripeResult<Self> {
        Ok(Self {
            executor: Arc::new(HttpExecutor::new(config)?),
        })
    }

    /// Create a client from environment variables
    pub fn from_env() -> StripeResult<Self> {
        Self::new(StripeConfig::from_env()?)
    }

    /// Create a client over a custom executor (tests, instrumentation)
    pub fn with_executor(executor: Arc<dyn RequestExecutor>) -> Self {
        Self { executor }
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> StripeResult<T> {
        let body = self.executor.execute(Method::Get, path, query, None).await?;
        decode_body(body)
    }

    /// POST with form-encoded params. When no idempotency key is supplied a
    /// v4 UUID is generated, so every create/update is safe to retry.
    pub(crate) async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(String, String)],
        idempotency_key: Option<&str>,
    ) -> StripeResult<T> {
        let generated;
        let key = match idempotency_key {
            Some(key) => key,
            None => {
                generated = Uuid::new_v4().to_string();
                &generated
            }
        };

        let body = self
            .executor
            .execute(Method::Post, path, params, Some(key))
            .await?;
        decode_body(body)
    }

    pub(crate) async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> StripeResult<T> {
        let body = self.executor.execute(Method::Delete, path, &[], None).await?;
        decode_body(body)
    }
}

fn decode_body<T: DeserializeOwned>(body: Value) -> StripeResult<T> {
    serde_json::from_value(body)
        .map_err(|e| StripeError::Serialization(format!("Unexpected response shape: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, header_exists, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_for(server: &MockServer) -> StripeClient {
        let config = StripeConfig::new("sk_test_abc123")
            .unwrap()
            .with_api_base_url(server.uri());
        StripeClient::new(config).unwrap()
    }

    #[tokio::test]
    async fn test_get_sends_auth_and_version_headers() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/ping"))
            .and(header("Authorization", "Bearer sk_test_abc123"))
            .and(header_exists("Stripe-Version"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let body: Value = client.get_json("/v1/ping", &[]).await.unwrap();
        assert_eq!(body["ok"], true);
    }

    #[tokio::test]
    async fn test_post_always_carries_idempotency_key() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/ping"))
            .and(header_exists("Idempotency-Key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let _: Value = client.post_form("/v1/ping", &[], None).await.unwrap();
    }

    #[tokio::test]
    async fn test_error_body_maps_to_api_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/ping"))
            .respond_with(ResponseTemplate::new(402).set_body_json(serde_json::json!({
                "error": {
                    "message": "Your card was declined.",
                    "code": "card_declined",
                    "param": "source"
                }
            })))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client.get_json::<Value>("/v1/ping", &[]).await.unwrap_err();

        match err {
            StripeError::Api {
                status,
                message,
                code,
                param,
            } => {
                assert_eq!(status, 402);
                assert_eq!(message, "Your card was declined.");
                assert_eq!(code.as_deref(), Some("card_declined"));
                assert_eq!(param.as_deref(), Some("source"));
            }
            other => panic!("expected api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unparseable_error_body_still_surfaces_status() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/ping"))
            .respond_with(ResponseTemplate::new(500).set_body_string("upstream broke"))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client.get_json::<Value>("/v1/ping", &[]).await.unwrap_err();

        match err {
            StripeError::Api { status, message, .. } => {
                assert_eq!(status, 500);
                assert_eq!(message, "upstream broke");
            }
            other => panic!("expected api error, got {:?}", other),
        }
    }
}
