use super::client::GeminiHttpClient;
use super::types::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Schema,
};
use crate::ai::{response, StrategyService};
use crate::models::{Config, GeneratedContent, GenerationParams};
use crate::{prompts, Error, Result};
use async_trait::async_trait;
use std::time::Duration;

const TOPIC_TEMPERATURE: f32 = 1.0;
const STRATEGY_TEMPERATURE: f32 = 0.8;

/// Gemini-backed [`StrategyService`]. Sends one request per call, no retries.
pub struct GeminiStrategyClient {
    http: GeminiHttpClient,
}

impl GeminiStrategyClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self::new_with_client(api_key, model, reqwest::Client::new())
    }

    pub fn new_with_client(api_key: String, model: String, client: reqwest::Client) -> Self {
        Self {
            http: GeminiHttpClient::new_with_client(
                api_key,
                model,
                Duration::from_secs(30),
                client,
            ),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api_key.clone(), config.model.clone())
            .with_base_url(config.base_url.clone())
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.http = self.http.with_base_url(base_url);
        self
    }

    pub fn model(&self) -> &str {
        self.http.model()
    }

    async fn generate_text(&self, request: GenerateContentRequest) -> Result<String> {
        let response: GenerateContentResponse = self.http.generate_content(&request).await?;

        response.first_text().ok_or_else(|| {
            let reason = response
                .candidates
                .first()
                .and_then(|c| c.finish_reason.clone())
                .unwrap_or_else(|| "no candidates".to_string());
            tracing::error!("Gemini returned no text (finish reason: {})", reason);
            Error::MalformedResponse(format!("No text in Gemini response ({})", reason))
        })
    }
}

#[async_trait]
impl StrategyService for GeminiStrategyClient {
    async fn fetch_viral_topic(&self) -> Result<String> {
        let request = GenerateContentRequest {
            contents: vec![Content::user_text(prompts::build_topic_prompt())],
            generation_config: GenerationConfig {
                temperature: TOPIC_TEMPERATURE,
                response_mime_type: None,
                response_schema: None,
            },
        };

        let text = self.generate_text(request).await?;
        let topic = response::clean_topic(&text)?;
        tracing::info!("Suggested topic: {}", topic);
        Ok(topic)
    }

    async fn fetch_strategy(&self, params: &GenerationParams) -> Result<GeneratedContent> {
        tracing::debug!(
            "Requesting strategy for {} / {} / {}s",
            params.platform,
            params.style,
            params.duration_seconds
        );

        let request = GenerateContentRequest {
            contents: vec![Content::user_text(prompts::build_strategy_prompt(params))],
            generation_config: GenerationConfig {
                temperature: STRATEGY_TEMPERATURE,
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(Schema::generated_content()),
            },
        };

        let text = self.generate_text(request).await?;
        let content = response::parse_generated_content(&text)?;

        tracing::info!(
            "Generated strategy: {} script chars, {} hashtags",
            content.script.len(),
            content.hashtags.len()
        );
        if content.hashtags.len() != 5 {
            tracing::warn!("Expected 5 hashtags, got {}", content.hashtags.len());
        }

        Ok(content)
    }
}
