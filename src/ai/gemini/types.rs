//! Gemini `generateContent` payload types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Gemini content container used in both requests and responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    pub fn user_text(text: String) -> Self {
        Self {
            role: Some("user".to_string()),
            parts: vec![Part { text: Some(text) }],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<Schema>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SchemaType {
    Object,
    String,
    Array,
}

/// Subset of the OpenAPI schema dialect accepted by `responseSchema`.
#[derive(Debug, Clone, Serialize)]
pub struct Schema {
    #[serde(rename = "type")]
    pub schema_type: SchemaType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, Schema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
}

impl Schema {
    fn leaf(schema_type: SchemaType, description: &str) -> Self {
        Self {
            schema_type,
            description: Some(description.to_string()),
            properties: None,
            items: None,
            required: None,
        }
    }

    /// `{script: STRING, caption: STRING, hashtags: ARRAY<STRING>}`, all required.
    pub fn generated_content() -> Self {
        let mut hashtags = Self::leaf(
            SchemaType::Array,
            "An array of exactly 5 viral hashtags: 2 broad, 2 niche, 1 community.",
        );
        hashtags.items = Some(Box::new(Self {
            schema_type: SchemaType::String,
            description: None,
            properties: None,
            items: None,
            required: None,
        }));

        let mut properties = BTreeMap::new();
        properties.insert(
            "script".to_string(),
            Self::leaf(
                SchemaType::String,
                "The full video script with a hook, a value-driven core and a callout, paced for the target duration.",
            ),
        );
        properties.insert(
            "caption".to_string(),
            Self::leaf(
                SchemaType::String,
                "A short, polarizing, viral-style social media caption.",
            ),
        );
        properties.insert("hashtags".to_string(), hashtags);

        Self {
            schema_type: SchemaType::Object,
            description: None,
            properties: Some(properties),
            items: None,
            required: Some(vec![
                "script".to_string(),
                "caption".to_string(),
                "hashtags".to_string(),
            ]),
        }
    }
}

/// Top-level `generateContent` response envelope.
#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// Candidate completion item returned by Gemini.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<Content>,
    pub finish_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate.
    pub fn first_text(&self) -> Option<String> {
        let candidate = self.candidates.first()?;
        let content = candidate.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_serializes_gemini_shape() {
        let json = serde_json::to_value(Schema::generated_content()).unwrap();
        assert_eq!(json["type"], "OBJECT");
        assert_eq!(json["properties"]["script"]["type"], "STRING");
        assert_eq!(json["properties"]["caption"]["type"], "STRING");
        assert_eq!(json["properties"]["hashtags"]["type"], "ARRAY");
        assert_eq!(json["properties"]["hashtags"]["items"]["type"], "STRING");
        assert_eq!(
            json["required"],
            serde_json::json!(["script", "caption", "hashtags"])
        );
    }

    #[test]
    fn test_first_text_joins_parts() {
        let response: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{
                "content": { "parts": [{ "text": "{\"a\":" }, { "text": "1}" }] },
                "finishReason": "STOP"
            }]
        }))
        .unwrap();
        assert_eq!(response.first_text().as_deref(), Some("{\"a\":1}"));
    }

    #[test]
    fn test_first_text_none_without_content() {
        let response: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{ "finishReason": "SAFETY" }]
        }))
        .unwrap();
        assert!(response.first_text().is_none());

        let empty: GenerateContentResponse = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(empty.first_text().is_none());
    }
}
