//! Generative text service integration
//!
//! The strategy client is the only part of the crate that talks to the
//! generative text service. Each call issues exactly one request and never
//! retries; failures surface as [`crate::Error::Service`] or
//! [`crate::Error::MalformedResponse`].

pub mod gemini;
pub mod mock;
pub mod response;

pub use gemini::GeminiStrategyClient;
pub use mock::MockStrategyClient;

use crate::models::{GeneratedContent, GenerationParams};
use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait StrategyService: Send + Sync {
    /// Suggest one trending short-video topic as bare text.
    async fn fetch_viral_topic(&self) -> Result<String>;

    /// Generate a script, caption and hashtags for the given parameters.
    async fn fetch_strategy(&self, params: &GenerationParams) -> Result<GeneratedContent>;
}
