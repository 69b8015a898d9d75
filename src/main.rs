use anyhow::Result;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use viral_strategy_generator::app::{App, Request};
use viral_strategy_generator::display;
use viral_strategy_generator::models::{Config, Platform, VideoStyle};

#[derive(Debug, Parser)]
#[command(name = "viral-strategy-generator")]
#[command(about = "Generate a viral video script, caption and hashtags")]
struct CliArgs {
    /// Video topic. A trending topic is suggested when omitted.
    #[arg(long)]
    topic: Option<String>,

    #[arg(long, value_enum, default_value_t = Platform::TikTok)]
    platform: Platform,

    #[arg(long, value_enum, default_value_t = VideoStyle::AiVideo)]
    style: VideoStyle,

    /// Target duration in seconds (defaults to the platform default).
    #[arg(long, value_name = "SECONDS")]
    duration: Option<u32>,

    /// Snap an out-of-range duration onto the platform's grid.
    #[arg(long)]
    clamp_duration: bool,

    /// Only suggest a topic.
    #[arg(long, conflicts_with_all = ["topic", "json"])]
    topic_only: bool,

    /// Print the generated content as JSON.
    #[arg(long)]
    json: bool,

    /// Print platform duration limits and exit.
    #[arg(long)]
    list_platforms: bool,
}

impl CliArgs {
    fn to_request(&self) -> Request {
        Request {
            topic: self.topic.clone(),
            style: self.style,
            platform: self.platform,
            duration_seconds: self.duration,
            clamp_duration: self.clamp_duration,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "viral_strategy_generator=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = CliArgs::parse();

    if args.list_platforms {
        print!("{}", display::render_platform_table());
        return Ok(());
    }

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to initialize application: {}", e);
            std::process::exit(1);
        }
    };
    let app = App::new(&config);

    if args.topic_only {
        match app.suggest_topic().await {
            Ok(topic) => {
                println!("{}", topic);
                return Ok(());
            }
            Err(e) => {
                error!("Failed to generate a viral topic: {}", e);
                std::process::exit(1);
            }
        }
    }

    match app.generate(&args.to_request()).await {
        Ok(generation) => {
            info!(
                "Generated strategy for \"{}\" ({}, {}, {}s)",
                generation.params.topic,
                generation.params.platform,
                generation.params.style,
                generation.params.duration_seconds
            );
            if args.json {
                println!("{}", serde_json::to_string_pretty(&generation.content)?);
            } else {
                print!("{}", display::render_content(&generation.content));
            }
            Ok(())
        }
        Err(e) => {
            error!("Generation failed: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let args = CliArgs::try_parse_from(["viral-strategy-generator"]).unwrap();
        let request = args.to_request();
        assert_eq!(request.platform, Platform::TikTok);
        assert_eq!(request.style, VideoStyle::AiVideo);
        assert!(request.topic.is_none());
        assert!(request.duration_seconds.is_none());
    }

    #[test]
    fn test_cli_parses_platform_and_style() {
        let args = CliArgs::try_parse_from([
            "viral-strategy-generator",
            "--topic",
            "cats",
            "--platform",
            "twitter",
            "--style",
            "human-video",
            "--duration",
            "140",
        ])
        .unwrap();
        let request = args.to_request();
        assert_eq!(request.platform, Platform::Twitter);
        assert_eq!(request.style, VideoStyle::HumanVideo);
        assert_eq!(request.duration_seconds, Some(140));
    }

    #[test]
    fn test_cli_topic_only_conflicts_with_topic() {
        assert!(CliArgs::try_parse_from([
            "viral-strategy-generator",
            "--topic-only",
            "--topic",
            "cats"
        ])
        .is_err());
    }
}
