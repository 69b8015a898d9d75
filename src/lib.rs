//! Viral video strategy generator
//!
//! Turns a topic, platform, style and duration into a prompt for Gemini, then
//! validates the returned script, caption and hashtags.

pub mod ai;
pub mod app;
pub mod display;
pub mod error;
pub mod models;
pub mod prompts;

pub use error::{Error, Result};
