use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use crate::layout::font_size::{SizeThresholds, DEFAULT_DENSE_MIN_SCORE, DEFAULT_NORMAL_MIN_SCORE};

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// JSON file backing the theme preference.
    pub preferences_path: PathBuf,
    /// Directory the file exporter writes print-ready pages into.
    pub export_dir: PathBuf,
    pub size_thresholds: SizeThresholds,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            preferences_path: PathBuf::from(".cvforge/preferences.json"),
            export_dir: PathBuf::from("exports"),
            size_thresholds: SizeThresholds::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();

        let normal_min = parse_env("SIZE_NORMAL_MIN_SCORE", DEFAULT_NORMAL_MIN_SCORE)?;
        let dense_min = parse_env("SIZE_DENSE_MIN_SCORE", DEFAULT_DENSE_MIN_SCORE)?;
        if dense_min <= normal_min {
            bail!(
                "SIZE_DENSE_MIN_SCORE ({dense_min}) must be greater than SIZE_NORMAL_MIN_SCORE ({normal_min})"
            );
        }

        Ok(Config {
            port: parse_env("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            preferences_path: std::env::var("PREFERENCES_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.preferences_path),
            export_dir: std::env::var("EXPORT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.export_dir),
            size_thresholds: SizeThresholds {
                normal_min,
                dense_min,
            },
        })
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        Err(_) => Ok(default),
    }
}
