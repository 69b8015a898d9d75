use crate::models::GenerationParams;

pub const TOPIC: &str = include_str!("../data/prompts/topic.txt");
pub const STRATEGY: &str = include_str!("../data/prompts/strategy.txt");

/// Replace `{{key}}` placeholders in a template string.
///
/// Substitution is single-pass, so placeholder-like text inside a value is
/// left alone. Unknown keys are kept verbatim.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        result.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find("}}") {
            Some(end) => {
                let key = &after[..end];
                match vars.iter().find(|(k, _)| *k == key) {
                    Some((_, value)) => result.push_str(value),
                    None => {
                        result.push_str("{{");
                        result.push_str(key);
                        result.push_str("}}");
                    }
                }
                rest = &after[end + 2..];
            }
            None => {
                result.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    result.push_str(rest);
    result
}

pub fn build_topic_prompt() -> String {
    TOPIC.trim().to_string()
}

pub fn build_strategy_prompt(params: &GenerationParams) -> String {
    let duration = params.duration_seconds.to_string();
    render(
        STRATEGY.trim(),
        &[
            ("topic", params.topic.as_str()),
            ("style", params.style.name()),
            ("platform", params.platform.name()),
            ("duration", duration.as_str()),
        ],
    )
}
