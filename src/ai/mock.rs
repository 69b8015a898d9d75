use super::{response, StrategyService};
use crate::models::{GeneratedContent, GenerationParams};
use crate::{Error, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// In-memory [`StrategyService`] with canned raw responses.
///
/// Raw text goes through the same cleaning and validation as the Gemini
/// client, so malformed payloads can be simulated too.
pub struct MockStrategyClient {
    topic_responses: Arc<Mutex<Vec<String>>>,
    strategy_responses: Arc<Mutex<Vec<String>>>,
    service_failure: Option<String>,
    call_count: Arc<Mutex<usize>>,
    strategy_requests: Arc<Mutex<Vec<GenerationParams>>>,
}

impl MockStrategyClient {
    pub fn new() -> Self {
        Self {
            topic_responses: Arc::new(Mutex::new(Vec::new())),
            strategy_responses: Arc::new(Mutex::new(Vec::new())),
            service_failure: None,
            call_count: Arc::new(Mutex::new(0)),
            strategy_requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_topic_response(self, response: String) -> Self {
        self.topic_responses.lock().unwrap().push(response);
        self
    }

    pub fn with_strategy_response(self, response: String) -> Self {
        self.strategy_responses.lock().unwrap().push(response);
        self
    }

    /// Every call fails with [`Error::Service`].
    pub fn with_service_failure(mut self, message: String) -> Self {
        self.service_failure = Some(message);
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    pub fn strategy_requests(&self) -> Vec<GenerationParams> {
        self.strategy_requests.lock().unwrap().clone()
    }

    fn record_call(&self) -> Result<usize> {
        let mut count = self.call_count.lock().unwrap();
        *count += 1;
        match &self.service_failure {
            Some(message) => Err(Error::Service(message.clone())),
            None => Ok(*count),
        }
    }
}

impl Default for MockStrategyClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StrategyService for MockStrategyClient {
    async fn fetch_viral_topic(&self) -> Result<String> {
        let count = self.record_call()?;

        let responses = self.topic_responses.lock().unwrap();
        if responses.is_empty() {
            Ok("Why cats hate water".to_string())
        } else {
            let index = (count - 1) % responses.len();
            response::clean_topic(&responses[index])
        }
    }

    async fn fetch_strategy(&self, params: &GenerationParams) -> Result<GeneratedContent> {
        self.strategy_requests.lock().unwrap().push(params.clone());
        let count = self.record_call()?;

        let responses = self.strategy_responses.lock().unwrap();
        if responses.is_empty() {
            // Default mock response
            Ok(GeneratedContent {
                script: format!(
                    "A {}s {} script about {}",
                    params.duration_seconds, params.platform, params.topic
                ),
                caption: format!("You won't believe this about {}", params.topic),
                hashtags: vec![
                    "#fyp".to_string(),
                    "#viral".to_string(),
                    "#niche".to_string(),
                    "#deepdive".to_string(),
                    "#community".to_string(),
                ],
            })
        } else {
            let index = (count - 1) % responses.len();
            response::parse_generated_content(&responses[index])
        }
    }
}
