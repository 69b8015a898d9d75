//! Application orchestration: topic suggestion, parameter resolution and
//! strategy generation.

use crate::ai::{GeminiStrategyClient, StrategyService};
use crate::models::{Config, GeneratedContent, GenerationParams, Platform, VideoStyle};
use crate::{Error, Result};
use tracing::info;

/// What the user asked for. Missing fields fall back to a suggested topic or
/// the platform's default duration.
#[derive(Debug, Clone)]
pub struct Request {
    pub topic: Option<String>,
    pub style: VideoStyle,
    pub platform: Platform,
    pub duration_seconds: Option<u32>,
    /// Snap an off-grid duration onto the platform grid instead of rejecting it.
    pub clamp_duration: bool,
}

impl Request {
    pub fn new(platform: Platform, style: VideoStyle) -> Self {
        Self {
            topic: None,
            style,
            platform,
            duration_seconds: None,
            clamp_duration: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Generation {
    pub params: GenerationParams,
    pub content: GeneratedContent,
}

pub struct App {
    service: Box<dyn StrategyService>,
}

impl App {
    pub fn new(config: &Config) -> Self {
        info!("Strategy provider: Gemini (model: {})", config.model);
        Self::with_service(Box::new(GeminiStrategyClient::from_config(config)))
    }

    /// Build an app around any service; used by tests to inject mocks.
    pub fn with_service(service: Box<dyn StrategyService>) -> Self {
        Self { service }
    }

    pub async fn suggest_topic(&self) -> Result<String> {
        self.service.fetch_viral_topic().await
    }

    /// Resolve `request` into validated parameters without calling the service.
    pub fn resolve_params(request: &Request, topic: &str) -> Result<GenerationParams> {
        let config = request.platform.config();
        let duration = match request.duration_seconds {
            None => config.default_duration,
            Some(seconds) if request.clamp_duration => {
                let snapped = config.snap(seconds);
                if snapped != seconds {
                    info!(
                        "Adjusted duration {}s to {}s for {}",
                        seconds, snapped, request.platform
                    );
                }
                snapped
            }
            Some(seconds) => seconds,
        };

        GenerationParams::new(topic, request.style, request.platform, duration)
    }

    pub async fn generate(&self, request: &Request) -> Result<Generation> {
        let topic = match request.topic.as_deref().map(str::trim) {
            Some(topic) if !topic.is_empty() => topic.to_string(),
            Some(_) => {
                return Err(Error::InvalidParams(
                    "Please enter or generate a topic".to_string(),
                ))
            }
            None => {
                let topic = self.suggest_topic().await?;
                info!("Using suggested topic: {}", topic);
                topic
            }
        };

        let params = Self::resolve_params(request, &topic)?;
        let content = self.service.fetch_strategy(&params).await?;

        Ok(Generation { params, content })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_params_uses_platform_default() {
        let request = Request::new(Platform::LinkedIn, VideoStyle::HumanVideo);
        let params = App::resolve_params(&request, "cats").unwrap();
        assert_eq!(params.duration_seconds, 300);
    }

    #[test]
    fn test_resolve_params_rejects_off_grid_without_clamp() {
        let mut request = Request::new(Platform::InstagramReels, VideoStyle::AiVideo);
        request.duration_seconds = Some(120);
        assert!(matches!(
            App::resolve_params(&request, "cats").unwrap_err(),
            Error::InvalidParams(_)
        ));
    }

    #[test]
    fn test_resolve_params_snaps_with_clamp() {
        let mut request = Request::new(Platform::InstagramReels, VideoStyle::AiVideo);
        request.duration_seconds = Some(120);
        request.clamp_duration = true;
        assert_eq!(
            App::resolve_params(&request, "cats").unwrap().duration_seconds,
            90
        );
    }
}
