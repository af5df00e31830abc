//! Optional RON configuration for the binary.
//!
//! Every field has a default, so a file only needs the values it changes:
//!
//! ```text
//! (item_class: "list-chapter", fetch: (request_timeout_secs: 60))
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};
use toc_engine::{
    FetchSettings, DEFAULT_CONTENT_CONTAINER_ID, DEFAULT_TITLE_CLASS, DEFAULT_TOC_ITEM_CLASS,
};
use toc_logging::toc_info;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub item_class: String,
    pub title_class: String,
    pub content_id: String,
    pub fetch: FetchConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            item_class: DEFAULT_TOC_ITEM_CLASS.to_string(),
            title_class: DEFAULT_TITLE_CLASS.to_string(),
            content_id: DEFAULT_CONTENT_CONTAINER_ID.to_string(),
            fetch: FetchConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub redirect_limit: usize,
    pub max_bytes: u64,
    pub allowed_content_types: Vec<String>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        let settings = FetchSettings::default();
        Self {
            connect_timeout_secs: settings.connect_timeout.as_secs(),
            request_timeout_secs: settings.request_timeout.as_secs(),
            redirect_limit: settings.redirect_limit,
            max_bytes: settings.max_bytes,
            allowed_content_types: settings.allowed_content_types,
        }
    }
}

impl FetchConfig {
    pub fn to_settings(&self) -> FetchSettings {
        FetchSettings {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            redirect_limit: self.redirect_limit,
            max_bytes: self.max_bytes,
            allowed_content_types: self.allowed_content_types.clone(),
        }
    }
}

/// Load the config file, or the defaults when no path is given.
pub fn load(path: Option<&Path>) -> anyhow::Result<AppConfig> {
    let Some(path) = path else {
        return Ok(AppConfig::default());
    };
    let content = fs::read_to_string(path)
        .with_context(|| format!("read config file: {}", path.display()))?;
    let config = parse(&content).with_context(|| format!("parse config file: {}", path.display()))?;
    toc_info!("Loaded configuration from {:?}", path);
    Ok(config)
}

pub fn parse(content: &str) -> anyhow::Result<AppConfig> {
    Ok(ron::from_str(content)?)
}
