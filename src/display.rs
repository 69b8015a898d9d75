//! Plain-text presentation of generated content.

use crate::models::{GeneratedContent, Platform};

/// Normalize hashtags for display: trim, drop empties, prefix `#`, join.
pub fn format_hashtags(hashtags: &[String]) -> String {
    hashtags
        .iter()
        .map(|tag| tag.trim())
        .filter(|tag| !tag.is_empty())
        .map(|tag| {
            if tag.starts_with('#') {
                tag.to_string()
            } else {
                format!("#{}", tag)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn render_content(content: &GeneratedContent) -> String {
    format!(
        "== Script ==\n{}\n\n== Caption ==\n{}\n\n== Hashtags ==\n{}\n",
        content.script.trim(),
        content.caption.trim(),
        format_hashtags(&content.hashtags)
    )
}

/// Table of platforms and their duration bounds in seconds.
pub fn render_platform_table() -> String {
    let mut out = format!(
        "{:<16} {:>8} {:>6} {:>6} {:>5}\n",
        "PLATFORM", "DEFAULT", "MIN", "MAX", "STEP"
    );
    for platform in Platform::ALL {
        let config = platform.config();
        out.push_str(&format!(
            "{:<16} {:>8} {:>6} {:>6} {:>5}\n",
            platform.name(),
            config.default_duration,
            config.min,
            config.max,
            config.step
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_hashtags_normalizes() {
        let tags: Vec<String> = ["tag1", "", "#tag2", "  tag3  "]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(format_hashtags(&tags), "#tag1 #tag2 #tag3");
    }

    #[test]
    fn test_format_hashtags_empty() {
        assert_eq!(format_hashtags(&[]), "");
        assert_eq!(format_hashtags(&["   ".to_string()]), "");
    }

    #[test]
    fn test_render_content_sections() {
        let content = GeneratedContent {
            script: "Hook.\nCore.\nCallout.".to_string(),
            caption: "Bold claim?".to_string(),
            hashtags: vec!["a".to_string(), "#b".to_string()],
        };
        assert_eq!(
            render_content(&content),
            "== Script ==\nHook.\nCore.\nCallout.\n\n== Caption ==\nBold claim?\n\n== Hashtags ==\n#a #b\n"
        );
    }

    #[test]
    fn test_platform_table_lists_every_platform() {
        let table = render_platform_table();
        assert_eq!(table.lines().count(), Platform::ALL.len() + 1);
        assert!(table.contains("Twitter (X)"));
    }
}
