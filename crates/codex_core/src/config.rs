//! Editor configuration loading from environment variables.

use crate::constants::{
    DEFAULT_CARET_BLINK_SECS, DEFAULT_FONT_SIZE, DEFAULT_KEY_REPEAT_DELAY_FRAMES,
    DEFAULT_KEY_REPEAT_INTERVAL_FRAMES, DEFAULT_LINE_HEIGHT, DEFAULT_TEXT_PADDING,
};
use crate::error::ConfigError;
use crate::text_edit::KeyRepeatTimings;
use serde::Deserialize;
use std::env;
use std::str::FromStr;

/// Environment variable overriding [`EditorConfig::font_size`].
pub const ENV_FONT_SIZE: &str = "CODEX_FONT_SIZE";
/// Environment variable overriding [`EditorConfig::line_height`].
pub const ENV_LINE_HEIGHT: &str = "CODEX_LINE_HEIGHT";
/// Environment variable overriding [`EditorConfig::padding`].
pub const ENV_TEXT_PADDING: &str = "CODEX_TEXT_PADDING";
/// Environment variable overriding [`EditorConfig::caret_blink_period`].
pub const ENV_CARET_BLINK_SECS: &str = "CODEX_CARET_BLINK_SECS";
/// Environment variable overriding [`EditorConfig::key_repeat_delay_frames`].
pub const ENV_KEY_REPEAT_DELAY: &str = "CODEX_KEY_REPEAT_DELAY";
/// Environment variable overriding [`EditorConfig::key_repeat_interval_frames`].
pub const ENV_KEY_REPEAT_INTERVAL: &str = "CODEX_KEY_REPEAT_INTERVAL";

/// Runtime configuration shared by every text field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub font_size: u32,
    pub line_height: f32,
    pub padding: f32,
    /// Seconds between caret visibility toggles.
    pub caret_blink_period: f32,
    pub key_repeat_delay_frames: u32,
    pub key_repeat_interval_frames: u32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            line_height: DEFAULT_LINE_HEIGHT,
            padding: DEFAULT_TEXT_PADDING,
            caret_blink_period: DEFAULT_CARET_BLINK_SECS,
            key_repeat_delay_frames: DEFAULT_KEY_REPEAT_DELAY_FRAMES,
            key_repeat_interval_frames: DEFAULT_KEY_REPEAT_INTERVAL_FRAMES,
        }
    }
}

fn parse_value<T, F>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) if raw.trim().is_empty() => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { key, value: raw }),
    }
}

fn require_min_u32(key: &'static str, value: u32, min: u32) -> Result<u32, ConfigError> {
    if value < min {
        return Err(ConfigError::OutOfRange {
            key,
            value: value.to_string(),
            min: min.to_string(),
        });
    }
    Ok(value)
}

fn require_positive_f32(key: &'static str, value: f32) -> Result<f32, ConfigError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ConfigError::OutOfRange {
            key,
            value: value.to_string(),
            min: "a positive number".to_string(),
        });
    }
    Ok(value)
}

impl EditorConfig {
    /// Load configuration from environment variables.
    ///
    /// Invalid values are logged and the whole configuration falls back to
    /// defaults.
    ///
    /// # Returns
    /// A populated [`EditorConfig`].
    pub fn from_env() -> Self {
        match Self::try_from_lookup(|key| env::var(key).ok()) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("ignoring editor configuration from environment: {}", err);
                Self::default()
            }
        }
    }

    /// Build a configuration from an arbitrary key lookup.
    ///
    /// Missing or blank keys keep their defaults.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when a present value does not parse or is out
    /// of range.
    pub fn try_from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let font_size = parse_value(&lookup, ENV_FONT_SIZE, defaults.font_size)?;
        let line_height = parse_value(&lookup, ENV_LINE_HEIGHT, defaults.line_height)?;
        let padding = parse_value(&lookup, ENV_TEXT_PADDING, defaults.padding)?;
        let caret_blink_period =
            parse_value(&lookup, ENV_CARET_BLINK_SECS, defaults.caret_blink_period)?;
        let key_repeat_delay_frames = parse_value(
            &lookup,
            ENV_KEY_REPEAT_DELAY,
            defaults.key_repeat_delay_frames,
        )?;
        let key_repeat_interval_frames = parse_value(
            &lookup,
            ENV_KEY_REPEAT_INTERVAL,
            defaults.key_repeat_interval_frames,
        )?;

        if !padding.is_finite() || padding < 0.0 {
            return Err(ConfigError::OutOfRange {
                key: ENV_TEXT_PADDING,
                value: padding.to_string(),
                min: "0".to_string(),
            });
        }

        Ok(Self {
            font_size: require_min_u32(ENV_FONT_SIZE, font_size, 1)?,
            line_height: require_positive_f32(ENV_LINE_HEIGHT, line_height)?,
            padding,
            caret_blink_period: require_positive_f32(ENV_CARET_BLINK_SECS, caret_blink_period)?,
            key_repeat_delay_frames,
            key_repeat_interval_frames: require_min_u32(
                ENV_KEY_REPEAT_INTERVAL,
                key_repeat_interval_frames,
                1,
            )?,
        })
    }

    /// Key-repeat cadence derived from this configuration.
    pub fn key_repeat(&self) -> KeyRepeatTimings {
        KeyRepeatTimings {
            initial_delay_frames: self.key_repeat_delay_frames,
            interval_frames: self.key_repeat_interval_frames.max(1),
        }
    }
}
