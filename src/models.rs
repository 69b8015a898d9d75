//! Data models and structures
//!
//! Defines the closed sets of video styles and platforms, the per-platform
//! duration table, generation parameters, the generated content package and
//! runtime configuration.

use crate::ai::gemini::client::DEFAULT_BASE_URL;
use crate::{Error, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum VideoStyle {
    #[serde(rename = "AI Video")]
    #[value(name = "ai-video")]
    AiVideo,
    #[serde(rename = "Human Video")]
    #[value(name = "human-video")]
    HumanVideo,
}

impl VideoStyle {
    pub const ALL: [VideoStyle; 2] = [VideoStyle::AiVideo, VideoStyle::HumanVideo];

    pub fn name(self) -> &'static str {
        match self {
            VideoStyle::AiVideo => "AI Video",
            VideoStyle::HumanVideo => "Human Video",
        }
    }
}

impl fmt::Display for VideoStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum Platform {
    #[serde(rename = "TikTok")]
    #[value(name = "tiktok")]
    TikTok,
    #[serde(rename = "YouTube Shorts")]
    #[value(name = "youtube-shorts")]
    YouTubeShorts,
    #[serde(rename = "YouTube Video")]
    #[value(name = "youtube-video")]
    YouTubeVideo,
    #[serde(rename = "Instagram Reels")]
    #[value(name = "instagram-reels")]
    InstagramReels,
    #[serde(rename = "Facebook Reels")]
    #[value(name = "facebook-reels")]
    FacebookReels,
    #[serde(rename = "Facebook Video")]
    #[value(name = "facebook-video")]
    FacebookVideo,
    #[serde(rename = "Twitter (X)")]
    #[value(name = "twitter")]
    Twitter,
    #[serde(rename = "LinkedIn")]
    #[value(name = "linkedin")]
    LinkedIn,
    #[serde(rename = "Pinterest")]
    #[value(name = "pinterest")]
    Pinterest,
    #[serde(rename = "Threads")]
    #[value(name = "threads")]
    Threads,
    #[serde(rename = "Other")]
    #[value(name = "other")]
    Other,
}

/// Duration bounds for a platform, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformConfig {
    pub default_duration: u32,
    pub min: u32,
    pub max: u32,
    pub step: u32,
}

const fn cfg(default_duration: u32, min: u32, max: u32, step: u32) -> PlatformConfig {
    PlatformConfig {
        default_duration,
        min,
        max,
        step,
    }
}

impl Platform {
    pub const ALL: [Platform; 11] = [
        Platform::TikTok,
        Platform::YouTubeShorts,
        Platform::YouTubeVideo,
        Platform::InstagramReels,
        Platform::FacebookReels,
        Platform::FacebookVideo,
        Platform::Twitter,
        Platform::LinkedIn,
        Platform::Pinterest,
        Platform::Threads,
        Platform::Other,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Platform::TikTok => "TikTok",
            Platform::YouTubeShorts => "YouTube Shorts",
            Platform::YouTubeVideo => "YouTube Video",
            Platform::InstagramReels => "Instagram Reels",
            Platform::FacebookReels => "Facebook Reels",
            Platform::FacebookVideo => "Facebook Video",
            Platform::Twitter => "Twitter (X)",
            Platform::LinkedIn => "LinkedIn",
            Platform::Pinterest => "Pinterest",
            Platform::Threads => "Threads",
            Platform::Other => "Other",
        }
    }

    pub fn config(self) -> PlatformConfig {
        match self {
            Platform::TikTok => cfg(60, 5, 600, 5),
            Platform::YouTubeShorts => cfg(60, 5, 60, 1),
            Platform::YouTubeVideo => cfg(180, 30, 3600, 60),
            Platform::InstagramReels => cfg(90, 5, 90, 5),
            Platform::FacebookReels => cfg(90, 5, 600, 15),
            Platform::FacebookVideo => cfg(180, 30, 3600, 60),
            Platform::Twitter => cfg(140, 5, 140, 5),
            Platform::LinkedIn => cfg(300, 15, 600, 15),
            Platform::Pinterest => cfg(60, 5, 900, 15),
            Platform::Threads => cfg(90, 5, 300, 5),
            Platform::Other => cfg(60, 5, 3600, 60),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl PlatformConfig {
    /// A duration is on the grid when it lies in `[min, max]` and is either a
    /// multiple of `step` or one of the bounds.
    pub fn is_on_grid(&self, seconds: u32) -> bool {
        (self.min..=self.max).contains(&seconds)
            && (seconds % self.step == 0 || seconds == self.min || seconds == self.max)
    }

    /// Clamp into range and move to the closest on-grid value. Ties go to the
    /// larger value.
    pub fn snap(&self, seconds: u32) -> u32 {
        let clamped = seconds.clamp(self.min, self.max);
        if self.is_on_grid(clamped) {
            return clamped;
        }
        let below = clamped / self.step * self.step;
        let above = below + self.step;
        [self.min, self.max, below, above]
            .into_iter()
            .filter(|candidate| self.is_on_grid(*candidate))
            .min_by_key(|candidate| (candidate.abs_diff(clamped), Reverse(*candidate)))
            .unwrap_or(clamped)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    pub topic: String,
    pub style: VideoStyle,
    pub platform: Platform,
    pub duration_seconds: u32,
}

impl GenerationParams {
    /// Build parameters, rejecting a blank topic or an off-grid duration.
    pub fn new(
        topic: &str,
        style: VideoStyle,
        platform: Platform,
        duration_seconds: u32,
    ) -> Result<Self> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(Error::InvalidParams(
                "Please enter or generate a topic".to_string(),
            ));
        }

        let config = platform.config();
        if !config.is_on_grid(duration_seconds) {
            return Err(Error::InvalidParams(format!(
                "{}s is not a valid duration for {} (min {}s, max {}s, step {}s)",
                duration_seconds, platform, config.min, config.max, config.step
            )));
        }

        Ok(Self {
            topic: topic.to_string(),
            style,
            platform,
            duration_seconds,
        })
    }
}

/// Script, caption and hashtags returned by one strategy request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedContent {
    pub script: String,
    pub caption: String,
    pub hashtags: Vec<String>,
}

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

// Configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

impl Config {
    pub fn from_env() -> crate::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from a variable lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> crate::Result<Self> {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let api_key = var("GEMINI_API_KEY")
            .or_else(|| var("API_KEY"))
            .ok_or_else(|| {
                Error::Config("GEMINI_API_KEY environment variable not set".to_string())
            })?;

        Ok(Self {
            api_key,
            model: var("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: var("GEMINI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        })
    }
}
