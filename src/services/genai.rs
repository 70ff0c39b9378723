//! Client for the hosted generation API.
//!
//! Provides structured text/multimodal generation and image rendering. Every
//! request carries the client-level deadline configured at construction, so
//! a hung generation fails the call instead of hanging its caller.

use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{debug, error, instrument};

use crate::error::ApiError;

/// A named prompt with its instruction text and structured input, ready to
/// send to the generation API.
#[derive(Debug)]
pub struct Prompt<'a> {
    pub name: &'a str,
    pub instructions: &'a str,
    pub input: Value,
    /// Optional embedded document (data URI) for multimodal prompts.
    pub media: Option<&'a str>,
}

/// Boundary trait over the hosted generation API.
///
/// Flows are generic over this trait; tests substitute a deterministic fake
/// honoring the same input/output schema contract.
#[allow(async_fn_in_trait)]
pub trait GenerativeApi: Send + Sync {
    /// Run a prompt and return its structured JSON output.
    async fn generate(&self, prompt: &Prompt<'_>) -> Result<Value, ApiError>;

    /// Render a single image, returned as a data URI or URL.
    async fn generate_image(&self, prompt: &str) -> Result<String, ApiError>;
}

/// Client for the hosted generation API.
#[derive(Clone)]
pub struct GenAiClient {
    client: Client,
    base_url: String,
    api_key: String,
    text_model: String,
    image_model: String,
}

/// Error response from the generation API.
#[derive(Debug, Deserialize)]
struct GenAiErrorResponse {
    #[allow(dead_code)]
    code: Option<String>,
    message: String,
}

impl GenAiClient {
    /// Create a new generation API client.
    pub fn new(
        base_url: &str,
        api_key: &str,
        text_model: &str,
        image_model: &str,
        timeout_seconds: u64,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        tracing::info!(
            base_url = base_url,
            text_model = text_model,
            image_model = image_model,
            "Generation API client initialized"
        );

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            text_model: text_model.to_string(),
            image_model: image_model.to_string(),
        })
    }

    /// Make a POST request to the generation API.
    async fn post<R: DeserializeOwned>(&self, path: &str, body: &Value) -> Result<R, ApiError> {
        let url = format!("{}{}", self.base_url, path);

        debug!(url = %url, "Generation API request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Generation API request failed");
                ApiError::Upstream(format!("generation API unavailable: {e}"))
            })?;

        let status = response.status();

        if status.is_success() {
            response.json::<R>().await.map_err(|e| {
                error!(error = %e, "Failed to parse generation API response");
                ApiError::Upstream(format!("invalid generation API response: {e}"))
            })
        } else {
            let message = response
                .json::<GenAiErrorResponse>()
                .await
                .map(|e| e.message)
                .unwrap_or_else(|_| format!("generation API error: {status}"));

            match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    error!("Generation API authentication failed");
                    Err(ApiError::Upstream("generation API auth error".to_string()))
                }
                StatusCode::TOO_MANY_REQUESTS => {
                    Err(ApiError::Upstream("generation API rate limited".to_string()))
                }
                _ => {
                    error!(status = %status, message = %message, "Generation API error");
                    Err(ApiError::Upstream(message))
                }
            }
        }
    }

    /// Check generation API health.
    pub async fn health_check(&self) -> Result<()> {
        let url = format!("{}/v1/health", self.base_url);

        self.client
            .get(&url)
            .bearer_auth(&self.api_key)
            .timeout(Duration::from_secs(5))
            .send()
            .await
            .context("Generation API health check failed")?
            .error_for_status()
            .context("Generation API unhealthy")?;

        Ok(())
    }
}

impl GenerativeApi for GenAiClient {
    #[instrument(skip(self, prompt), fields(prompt = prompt.name))]
    async fn generate(&self, prompt: &Prompt<'_>) -> Result<Value, ApiError> {
        #[derive(Deserialize)]
        struct GenerateResponse {
            output: Value,
        }

        let mut body = json!({
            "model": &self.text_model,
            "prompt": prompt.name,
            "instructions": prompt.instructions,
            "input": &prompt.input,
            "response_format": "json",
        });
        if let Some(media) = prompt.media {
            body["media"] = json!({ "url": media });
        }

        let response: GenerateResponse = self.post("/v1/generate", &body).await?;

        Ok(response.output)
    }

    #[instrument(skip(self, prompt))]
    async fn generate_image(&self, prompt: &str) -> Result<String, ApiError> {
        #[derive(Deserialize)]
        struct ImagesResponse {
            images: Vec<String>,
        }

        let body = json!({
            "model": &self.image_model,
            "prompt": prompt,
        });

        let response: ImagesResponse = self.post("/v1/images", &body).await?;

        response
            .images
            .into_iter()
            .next()
            .ok_or_else(|| ApiError::Upstream("image model returned no artifacts".to_string()))
    }
}
