//! Client for the text-completion service backing the generative providers.
//!
//! Providers depend on the `TextCompletion` trait rather than the concrete
//! client so tests can substitute canned or failing completions.

use std::env;
use std::error::Error;
use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::services::ConfigError;

const HF_API_BASE: &str = "https://api-inference.huggingface.co/models";
const HF_MODEL: &str = "mistralai/Mistral-7B-Instruct-v0.2";
const COMPLETION_TIMEOUT_SECS: u64 = 30;
const TEMPERATURE: f64 = 0.7;

#[derive(Debug)]
pub enum GenerativeError {
    HttpError(reqwest::Error),
    StatusError(u16),
    ResponseError(String),
}

impl fmt::Display for GenerativeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerativeError::HttpError(err) => write!(f, "HTTP error: {}", err),
            GenerativeError::StatusError(status) => {
                write!(f, "completion request returned status {}", status)
            }
            GenerativeError::ResponseError(msg) => write!(f, "Response error: {}", msg),
        }
    }
}

impl Error for GenerativeError {}

impl From<reqwest::Error> for GenerativeError {
    fn from(err: reqwest::Error) -> Self {
        GenerativeError::HttpError(err)
    }
}

#[async_trait]
pub trait TextCompletion: Send + Sync {
    async fn complete(
        &self,
        prompt: &str,
        max_new_tokens: u32,
    ) -> Result<String, GenerativeError>;
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    inputs: &'a str,
    parameters: CompletionParameters,
}

#[derive(Debug, Serialize)]
struct CompletionParameters {
    max_new_tokens: u32,
    temperature: f64,
    return_full_text: bool,
}

#[derive(Debug, Deserialize)]
struct CompletionChunk {
    generated_text: String,
}

/// HuggingFace Inference API client for the instruct model the providers
/// prompt for structured JSON.
pub struct HuggingFaceClient {
    client: reqwest::Client,
    api_token: String,
    model: String,
}

impl HuggingFaceClient {
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_token = env::var("HUGGINGFACEHUB_API_TOKEN")
            .map_err(|_| ConfigError::MissingCredential("HUGGINGFACEHUB_API_TOKEN"))?;
        Self::new(api_token)
    }

    pub fn new(api_token: impl Into<String>) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(COMPLETION_TIMEOUT_SECS))
            .build()
            .map_err(ConfigError::HttpClient)?;

        Ok(Self {
            client,
            api_token: api_token.into(),
            model: HF_MODEL.to_string(),
        })
    }
}

#[async_trait]
impl TextCompletion for HuggingFaceClient {
    async fn complete(
        &self,
        prompt: &str,
        max_new_tokens: u32,
    ) -> Result<String, GenerativeError> {
        let url = format!("{}/{}", HF_API_BASE, self.model);
        let request = CompletionRequest {
            inputs: prompt,
            parameters: CompletionParameters {
                max_new_tokens,
                temperature: TEMPERATURE,
                return_full_text: false,
            },
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_token)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GenerativeError::StatusError(response.status().as_u16()));
        }

        let chunks: Vec<CompletionChunk> = response.json().await?;
        match chunks.into_iter().next() {
            Some(chunk) => Ok(chunk.generated_text),
            None => Err(GenerativeError::ResponseError(
                "empty completion response".to_string(),
            )),
        }
    }
}

/// Models are prompted for bare JSON but frequently wrap it in Markdown code
/// fences anyway. Strip leading/trailing fence markers before decoding.
pub fn strip_code_fences(raw: &str) -> &str {
    let mut text = raw.trim();

    if let Some(rest) = text.strip_prefix("```json") {
        text = rest;
    } else if let Some(rest) = text.strip_prefix("```") {
        text = rest;
    }
    if let Some(rest) = text.strip_suffix("```") {
        text = rest;
    }

    text.trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_json_fence() {
        let raw = "```json\n{\"hotels\": []}\n```";
        assert_eq!(strip_code_fences(raw), "{\"hotels\": []}");
    }

    #[test]
    fn test_strips_plain_fence() {
        let raw = "```\n{\"hotels\": []}\n```";
        assert_eq!(strip_code_fences(raw), "{\"hotels\": []}");
    }

    #[test]
    fn test_unfenced_text_is_untouched() {
        assert_eq!(strip_code_fences("{\"hotels\": []}"), "{\"hotels\": []}");
    }

    #[test]
    fn test_fenced_and_unfenced_decode_identically() {
        let fenced: serde_json::Value =
            serde_json::from_str(strip_code_fences("```json\n{\"a\": 1}\n```")).unwrap();
        let plain: serde_json::Value = serde_json::from_str("{\"a\": 1}").unwrap();
        assert_eq!(fenced, plain);
    }
}
