//! Preview settings from the environment.
//!
//! `CHATLIST_CONFIG` points at a JSON config file, the other variables
//! override single values. Bad values are logged and ignored.

use std::env;
use std::path::PathBuf;

use tracing::warn;

const DEFAULT_WIDTH: usize = 48;
const MIN_WIDTH: usize = 20;

/// How each state is written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewSettings {
    pub config_path: Option<PathBuf>,
    pub chat_count: Option<usize>,
    pub width: usize,
    pub format: OutputFormat,
}

impl Default for PreviewSettings {
    fn default() -> Self {
        Self {
            config_path: None,
            chat_count: None,
            width: DEFAULT_WIDTH,
            format: OutputFormat::default(),
        }
    }
}

impl PreviewSettings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build settings from any variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut settings = Self::default();

        if let Some(path) = lookup("CHATLIST_CONFIG").filter(|p| !p.is_empty()) {
            settings.config_path = Some(PathBuf::from(path));
        }

        if let Some(raw) = lookup("CHATLIST_CHAT_COUNT") {
            match raw.trim().parse::<usize>() {
                Ok(count) => settings.chat_count = Some(count),
                Err(e) => warn!("Ignoring CHATLIST_CHAT_COUNT={:?}: {}", raw, e),
            }
        }

        if let Some(raw) = lookup("CHATLIST_WIDTH") {
            match raw.trim().parse::<usize>() {
                Ok(width) if width >= MIN_WIDTH => settings.width = width,
                Ok(width) => warn!(
                    "Ignoring CHATLIST_WIDTH={}: must be at least {}",
                    width, MIN_WIDTH
                ),
                Err(e) => warn!("Ignoring CHATLIST_WIDTH={:?}: {}", raw, e),
            }
        }

        if let Some(raw) = lookup("CHATLIST_OUTPUT") {
            match raw.trim().to_ascii_lowercase().as_str() {
                "text" => settings.format = OutputFormat::Text,
                "json" => settings.format = OutputFormat::Json,
                _ => warn!("Ignoring CHATLIST_OUTPUT={:?}: expected text or json", raw),
            }
        }

        settings
    }
}
