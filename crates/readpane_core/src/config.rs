//! Configuration loading from environment variables.

use serde::Deserialize;
use std::env;
use std::path::PathBuf;
use tracing::warn;

/// Default initial window width in logical points.
pub const DEFAULT_WINDOW_WIDTH: f32 = 1100.0;
/// Default initial window height in logical points.
pub const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;

const MIN_WINDOW_DIM: f32 = 320.0;
const MAX_WINDOW_DIM: f32 = 8192.0;

/// Runtime configuration for ReadPane.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Optional path to a plain-text article; the built-in sample is used
    /// when unset or unreadable.
    pub article_path: Option<PathBuf>,
    pub window_width: f32,
    pub window_height: f32,
    /// Skip the panel slide animation (accessibility / test determinism).
    pub reduce_motion: bool,
}

/// Parse a boolean-like environment flag value.
///
/// # Supported Values
/// - Truthy: `1`, `true`, `yes`, `on`
/// - Falsy: `0`, `false`, `no`, `off`, empty string
///
/// Matching is case-insensitive and ignores surrounding whitespace.
///
/// # Returns
/// `Some(bool)` when the value is recognized, otherwise `None`.
pub fn parse_env_flag(value: &str) -> Option<bool> {
    let normalized = value.trim().to_ascii_lowercase();
    match normalized.as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "" | "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Read a boolean flag from the environment.
///
/// Missing or unrecognized values are treated as `false`.
pub fn env_flag_enabled(name: &str) -> bool {
    env::var(name)
        .ok()
        .and_then(|value| parse_env_flag(&value))
        .unwrap_or(false)
}

/// Parse a window dimension from the environment, keeping `default` for
/// missing, unparsable, or out-of-range values.
fn window_dim_from_env(name: &str, default: f32) -> f32 {
    let Ok(value) = env::var(name) else {
        return default;
    };
    match value.trim().parse::<f32>() {
        Ok(dim) if (MIN_WINDOW_DIM..=MAX_WINDOW_DIM).contains(&dim) => dim,
        _ => {
            warn!("ignoring invalid {}={:?}", name, value);
            default
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Returns
    /// A populated [`Config`] with defaults applied when env vars are
    /// missing or invalid.
    pub fn from_env() -> Self {
        Self {
            article_path: env::var("READPANE_ARTICLE")
                .ok()
                .filter(|value| !value.trim().is_empty())
                .map(PathBuf::from),
            window_width: window_dim_from_env("READPANE_WINDOW_WIDTH", DEFAULT_WINDOW_WIDTH),
            window_height: window_dim_from_env("READPANE_WINDOW_HEIGHT", DEFAULT_WINDOW_HEIGHT),
            reduce_motion: env_flag_enabled("READPANE_REDUCE_MOTION"),
        }
    }
}
