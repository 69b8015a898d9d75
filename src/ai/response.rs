//! Cleaning and validation of raw service text.

use crate::models::GeneratedContent;
use crate::{Error, Result};
use serde_json::Value;

/// Trim a suggested topic and strip wrapping double quotes.
pub fn clean_topic(raw: &str) -> Result<String> {
    let topic = raw.trim().trim_matches('"').trim();
    if topic.is_empty() {
        return Err(Error::MalformedResponse(
            "Topic response was empty".to_string(),
        ));
    }
    Ok(topic.to_string())
}

/// Parse the schema-constrained strategy payload.
///
/// `script` and `caption` must be non-empty strings and `hashtags` an array of
/// strings. The hashtag count is not checked.
pub fn parse_generated_content(raw: &str) -> Result<GeneratedContent> {
    let text = raw.trim();
    let value: Value = serde_json::from_str(text).map_err(|e| {
        tracing::error!("Failed to parse strategy JSON: {}\nBody: {}", e, text);
        Error::MalformedResponse(format!("Strategy payload is not valid JSON: {}", e))
    })?;

    let object = value.as_object().ok_or_else(|| {
        tracing::error!("Strategy payload is not a JSON object: {}", text);
        Error::MalformedResponse("Strategy payload is not a JSON object".to_string())
    })?;

    let script = required_text(object.get("script"), "script")?;
    let caption = required_text(object.get("caption"), "caption")?;

    let hashtags = match object.get("hashtags") {
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| {
                item.as_str().map(str::to_string).ok_or_else(|| {
                    Error::MalformedResponse("Hashtag entry is not a string".to_string())
                })
            })
            .collect::<Result<Vec<_>>>()?,
        _ => {
            tracing::error!("Strategy payload has no hashtag array: {}", text);
            return Err(Error::MalformedResponse(
                "Field 'hashtags' is missing or not an array".to_string(),
            ));
        }
    };

    Ok(GeneratedContent {
        script,
        caption,
        hashtags,
    })
}

fn required_text(value: Option<&Value>, field: &str) -> Result<String> {
    match value.and_then(Value::as_str) {
        Some(text) if !text.trim().is_empty() => Ok(text.to_string()),
        _ => {
            tracing::error!("Strategy payload field '{}' missing or empty", field);
            Err(Error::MalformedResponse(format!(
                "Field '{}' is missing or empty",
                field
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_clean_topic_strips_quotes_and_whitespace() {
        assert_eq!(
            clean_topic("\"Why cats hate water\"").unwrap(),
            "Why cats hate water"
        );
        assert_eq!(
            clean_topic("  \n\"Why cats hate water\"  \n").unwrap(),
            "Why cats hate water"
        );
        assert_eq!(clean_topic("plain topic").unwrap(), "plain topic");
    }

    #[test]
    fn test_clean_topic_keeps_inner_quotes() {
        assert_eq!(
            clean_topic("The \"quiet\" quitting myth").unwrap(),
            "The \"quiet\" quitting myth"
        );
    }

    #[test]
    fn test_clean_topic_rejects_empty() {
        assert!(matches!(
            clean_topic(" \"\" ").unwrap_err(),
            Error::MalformedResponse(_)
        ));
    }

    #[test]
    fn test_parse_well_formed_payload_unchanged() {
        let content =
            parse_generated_content(r##"{"script":"S","caption":"C","hashtags":["a","#b"]}"##)
                .unwrap();
        assert_eq!(
            content,
            GeneratedContent {
                script: "S".to_string(),
                caption: "C".to_string(),
                hashtags: vec!["a".to_string(), "#b".to_string()],
            }
        );
    }

    #[test]
    fn test_parse_accepts_empty_hashtags_and_extra_fields() {
        let content = parse_generated_content(
            r#" {"script":"S","caption":"C","hashtags":[],"notes":"ignored"} "#,
        )
        .unwrap();
        assert!(content.hashtags.is_empty());
    }

    #[test]
    fn test_parse_rejects_missing_caption() {
        let err = parse_generated_content(r#"{"script":"S","hashtags":["a"]}"#).unwrap_err();
        assert!(matches!(err, Error::MalformedResponse(msg) if msg.contains("caption")));
    }

    #[test]
    fn test_parse_rejects_empty_script() {
        let err = parse_generated_content(r#"{"script":"","caption":"C","hashtags":["a"]}"#)
            .unwrap_err();
        assert!(matches!(err, Error::MalformedResponse(msg) if msg.contains("script")));
    }

    #[test]
    fn test_parse_rejects_non_array_hashtags() {
        let err = parse_generated_content(r##"{"script":"S","caption":"C","hashtags":"#a #b"}"##)
            .unwrap_err();
        assert!(matches!(err, Error::MalformedResponse(_)));
    }

    #[test]
    fn test_parse_rejects_non_string_hashtag() {
        let err = parse_generated_content(r#"{"script":"S","caption":"C","hashtags":["a",3]}"#)
            .unwrap_err();
        assert!(matches!(err, Error::MalformedResponse(_)));
    }

    #[test]
    fn test_parse_rejects_non_json_and_non_object() {
        assert!(matches!(
            parse_generated_content("Here is your script!").unwrap_err(),
            Error::MalformedResponse(_)
        ));
        assert!(matches!(
            parse_generated_content("[1, 2]").unwrap_err(),
            Error::MalformedResponse(_)
        ));
        assert!(matches!(
            parse_generated_content("").unwrap_err(),
            Error::MalformedResponse(_)
        ));
    }
}
