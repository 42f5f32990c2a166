//! Gemini extraction client.

use async_trait::async_trait;
use reqwest::Client;

use crate::error::{ListingError, Result};
use crate::extract::Extractor;
use crate::extract::config::ExtractorConfig;
use crate::extract::prompt::{extraction_prompt, response_schema};
use crate::extract::types::*;
use crate::vehicle::VehicleRecord;

/// Extractor backed by the Gemini `generateContent` API
pub struct GeminiExtractor {
    client: Client,
    config: ExtractorConfig,
}

impl GeminiExtractor {
    /// Create a client from the given configuration
    pub fn new(config: ExtractorConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ListingError::Network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Create a client configured from the environment
    pub fn from_env() -> Result<Self> {
        Self::new(ExtractorConfig::from_env())
    }

    /// Get the active configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    fn build_request(url: &str) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content::user(extraction_prompt(url))],
            tools: vec![GeminiTool {
                google_search: GoogleSearch::default(),
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: response_schema(),
            },
        }
    }
}

#[async_trait]
impl Extractor for GeminiExtractor {
    async fn extract(&self, url: &str) -> Result<VehicleRecord> {
        let api_key = self.config.api_key.as_deref().ok_or(ListingError::MissingApiKey)?;

        log::debug!("Gemini generate_content: model={} url={}", self.config.model, url);

        let response = self
            .client
            .post(self.config.generate_content_url())
            .query(&[("key", api_key)])
            .json(&Self::build_request(url))
            .send()
            .await
            .map_err(|e| ListingError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ListingError::Network(e.to_string()))?;

        if !status.is_success() {
            let message = match serde_json::from_str::<GeminiError>(&body) {
                Ok(e) => e.error.message,
                Err(_) => body,
            };
            return Err(ListingError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let response: GenerateContentResponse = serde_json::from_str(&body)
            .map_err(|e| ListingError::MalformedOutput(format!("Unexpected API response: {}", e)))?;

        let text = response.text().ok_or(ListingError::EmptyResponse)?;
        parse_record(&text)
    }
}

/// Parse the model's JSON text into a record
///
/// A surrounding markdown code fence is tolerated; grounded responses
/// sometimes come back wrapped in one.
pub fn parse_record(text: &str) -> Result<VehicleRecord> {
    let body = strip_code_fence(text.trim());
    serde_json::from_str(body).map_err(|e| ListingError::MalformedOutput(e.to_string()))
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
