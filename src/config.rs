//! Application Configuration
//!
//! Read from `app.config.json`, embedded at compile time. Missing keys take
//! their defaults; a malformed file falls back to `AppConfig::default()`.

use leptos::prelude::*;
use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::controller::IdPolicy;
use crate::error::AppError;
use crate::i18n::Language;

const EMBEDDED_CONFIG: &str = include_str!("../app.config.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Language shown on first render
    pub default_language: Language,
    /// Prefix for money columns, e.g. "Rs."
    pub currency_prefix: String,
    /// How long a toast stays on screen
    pub toast_timeout_ms: u32,
    pub id_policy: IdPolicy,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_language: Language::Urdu,
            currency_prefix: "Rs.".to_string(),
            toast_timeout_ms: 3000,
            id_policy: IdPolicy::Positional,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Embedded config, or defaults if it does not parse
    pub fn load() -> Self {
        Self::from_json(EMBEDDED_CONFIG).unwrap_or_else(|err| {
            log::warn!("[config] {}, using defaults", err);
            Self::default()
        })
    }

    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}

/// Get the config from context
pub fn use_config() -> AppConfig {
    expect_context::<AppConfig>()
}
