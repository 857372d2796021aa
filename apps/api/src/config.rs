use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::ats::profile::AtsProfile;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Fails at startup if a set variable is malformed.
#[derive(Debug, Clone)]
pub struct Config {
    /// Optional: without it every scan gets the fallback suggestion.
    pub gemini_api_key: Option<String>,
    /// JSON ATS profile replacing the reference catalogs.
    pub profile_path: Option<PathBuf>,
    pub max_upload_bytes: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            profile_path: None,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            port: DEFAULT_PORT,
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: optional_env("GEMINI_API_KEY"),
            profile_path: optional_env("ATS_PROFILE_PATH").map(PathBuf::from),
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
            port: parse_env("PORT", DEFAULT_PORT)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// The configured ATS profile, or the reference profile when none is set.
    pub fn load_profile(&self) -> Result<AtsProfile> {
        match &self.profile_path {
            Some(path) => AtsProfile::from_file(path)
                .with_context(|| format!("Failed to load ATS profile from {}", path.display())),
            None => Ok(AtsProfile::default()),
        }
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> Result<T> {
    match optional_env(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .ok()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        None => Ok(default),
    }
}
