// src/config/mod.rs
// Environment-based configuration, loaded once at startup and passed by reference

use std::str::FromStr;
use std::time::Duration;
use tracing::{Level, debug, warn};

use crate::http::DEFAULT_TIMEOUT;
use crate::llm::gemini::{DEFAULT_API_BASE, DEFAULT_MODEL};

pub const DEFAULT_OFFICIAL_EMAIL: &str = "student@chitkara.edu.in";

/// Answer provider settings
#[derive(Debug, Clone)]
pub struct AiConfig {
    /// Gemini/Google API key (GEMINI_API_KEY or GOOGLE_API_KEY)
    pub api_key: Option<String>,
    pub model: String,
    pub api_base: String,
    /// Bound on a single provider call
    pub timeout: Duration,
}

/// Process-wide, read-only configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    // ── Server
    pub host: String,
    pub port: u16,

    // ── Envelope
    pub official_email: String,

    // ── Answer provider
    pub ai: AiConfig,

    // ── Logging
    pub log_level: String,
}

/// Parse `key` from `lookup`, falling back to `default` when the key is
/// missing or unparseable. Trailing `# comments` and whitespace are ignored.
fn var_or<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let Some(val) = lookup(key) else {
        return default;
    };

    let clean_val = val.split('#').next().unwrap_or("").trim();
    match clean_val.parse::<T>() {
        Ok(parsed) => {
            debug!(key, value = clean_val, "Config value from environment");
            parsed
        }
        Err(_) => {
            warn!(key, value = %val, "Config value failed to parse, using default");
            default
        }
    }
}

/// Read a secret, treating blank values as unset
fn read_key<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
}

impl AppConfig {
    /// Load from the process environment (after `.env`, if any, was applied)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let timeout_secs: u64 = var_or(&lookup, "AI_TIMEOUT_SECS", DEFAULT_TIMEOUT.as_secs());

        Self {
            host: var_or(&lookup, "HOST", "0.0.0.0".to_string()),
            port: var_or(&lookup, "PORT", 8080),
            official_email: var_or(&lookup, "OFFICIAL_EMAIL", DEFAULT_OFFICIAL_EMAIL.to_string()),
            ai: AiConfig {
                api_key: read_key(&lookup, "GEMINI_API_KEY")
                    .or_else(|| read_key(&lookup, "GOOGLE_API_KEY")),
                model: var_or(&lookup, "GEMINI_MODEL", DEFAULT_MODEL.to_string()),
                api_base: var_or(&lookup, "GEMINI_API_BASE", DEFAULT_API_BASE.to_string()),
                timeout: Duration::from_secs(timeout_secs.max(1)),
            },
            log_level: var_or(&lookup, "LOG_LEVEL", "info".to_string()),
        }
    }

    /// Get server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Tracing level for the configured `log_level`
    pub fn tracing_level(&self) -> Level {
        parse_level(&self.log_level)
    }
}

/// Level name to tracing level; unknown or missing names mean INFO
pub fn parse_level(name: &str) -> Level {
    Level::from_str(name.trim()).unwrap_or(Level::INFO)
}

/// `LOG_LEVEL` read ahead of the full config so the subscriber is installed
/// before any config parse warning is emitted
pub fn log_level_from_env() -> Level {
    parse_level(&std::env::var("LOG_LEVEL").unwrap_or_default())
}
