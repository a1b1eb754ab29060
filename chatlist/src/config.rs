//! Configuration for mock data generation and the load sequence.
//!
//! Every struct here validates with garde before it reaches the provider or
//! the controller. Missing fields fall back to the prototype's defaults.

use std::ops::{Range, RangeInclusive};
use std::path::Path;

use garde::Validate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Validation constants
const MAX_USER_NAME_LENGTH: usize = 100;
const MAX_FILTER_LENGTH: usize = 32;
const MAX_AVATAR_URL_LENGTH: usize = 2048;
const MAX_PLACEHOLDER_DATE_LENGTH: usize = 64;
const MAX_WORDS: usize = 200;
const MAX_CHAT_COUNT: usize = 1000;

pub const DEFAULT_CHAT_COUNT: usize = 10;

const DEFAULT_AVATARS: &[&str] = &[
    "https://firebasestorage.googleapis.com/v0/b/imagepets-82fe7.appspot.com/o/WhatsApp%20Image%202025-03-24%20at%2014.27.06.jpeg?alt=media&token=feaf84ac-3ba7-4752-8e23-0d1f7b7b0a05",
    "https://firebasestorage.googleapis.com/v0/b/imagepets-82fe7.appspot.com/o/WhatsApp%20Image%202025-03-24%20at%2014.27.07%20(1).jpeg?alt=media&token=88e790bd-8155-4d03-915e-4c74ce69f73e",
    "https://firebasestorage.googleapis.com/v0/b/imagepets-82fe7.appspot.com/o/WhatsApp%20Image%202025-03-24%20at%2014.27.07.jpeg?alt=media&token=855b8357-1102-45d5-b5af-bafc0a912348",
    "https://firebasestorage.googleapis.com/v0/b/imagepets-82fe7.appspot.com/o/pastor-alemao-filhote.png?alt=media&token=1e01c1bd-ae19-46e5-b66e-7747f7d0c200",
    "https://firebasestorage.googleapis.com/v0/b/imagepets-82fe7.appspot.com/o/scottish-fold-cat-kitten-sitting-isolated-transparent-photo-png.webp?alt=media&token=008bd8c6-8cfc-4fe1-971a-841f5a9e811a",
    "https://firebasestorage.googleapis.com/v0/b/imagepets-82fe7.appspot.com/o/scottish-fold-cat-kitten-sitting-isolated-transparent-photo-png.webp?alt=media&token=008bd8c6-8cfc-4fe1-971a-841f5a9e811a",
    "https://firebasestorage.googleapis.com/v0/b/imagepets-82fe7.appspot.com/o/scottish-fold-cat-kitten-sitting-isolated-transparent-photo-png.webp?alt=media&token=008bd8c6-8cfc-4fe1-971a-841f5a9e811a",
];

/// Custom validation for avatar URLs
fn validate_avatar_url(value: &str, _ctx: &()) -> garde::Result {
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(())
    } else {
        Err(garde::Error::new("Avatar URL must use http or https"))
    }
}

/// Custom validation for word ranges
fn validate_word_range(value: &WordRange, _ctx: &()) -> garde::Result {
    if value.min == 0 {
        return Err(garde::Error::new("Word range must start at 1 or more"));
    }
    if value.min > value.max {
        return Err(garde::Error::new("Word range min exceeds max"));
    }
    if value.max > MAX_WORDS {
        return Err(garde::Error::new(format!(
            "Word range too wide (max {} words)",
            MAX_WORDS
        )));
    }
    Ok(())
}

/// Custom validation for the load delay
fn validate_delay_range(value: &DelayRange, _ctx: &()) -> garde::Result {
    if value.min >= value.max {
        return Err(garde::Error::new("Delay min must be below max"));
    }
    Ok(())
}

/// What the avatar pool does once every URL has been handed out
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum AvatarExhaustion {
    /// Start another shuffled pass over the pool
    #[default]
    Reshuffle,
    /// Leave the remaining chats without an avatar
    Placeholder,
}

/// Inclusive word-count range for placeholder text
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct WordRange {
    pub min: usize,
    pub max: usize,
}

impl WordRange {
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    pub fn as_range(&self) -> RangeInclusive<usize> {
        self.min..=self.max
    }
}

/// Half-open delay range in milliseconds
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct DelayRange {
    pub min: u64,
    pub max: u64,
}

impl DelayRange {
    pub const fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    pub fn as_range(&self) -> Range<u64> {
        self.min..self.max
    }
}

/// Values the mock provider draws from
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Validate)]
#[garde(context(()))]
#[serde(default)]
pub struct MockDataConfig {
    #[garde(length(min = 1, max = MAX_USER_NAME_LENGTH))]
    pub current_user: String,
    #[garde(length(min = 1, max = MAX_USER_NAME_LENGTH))]
    pub peer_user: String,
    #[garde(inner(length(min = 1, max = MAX_FILTER_LENGTH)))]
    pub filters: Vec<String>,
    #[garde(inner(length(max = MAX_AVATAR_URL_LENGTH), custom(validate_avatar_url)))]
    pub avatars: Vec<String>,
    #[garde(skip)]
    pub avatar_exhaustion: AvatarExhaustion,
    #[garde(length(max = MAX_PLACEHOLDER_DATE_LENGTH))]
    pub placeholder_date: String,
    #[garde(skip)]
    pub unread_count: u32,
    #[garde(custom(validate_word_range))]
    pub name_words: WordRange,
    #[garde(custom(validate_word_range))]
    pub text_words: WordRange,
}

impl Default for MockDataConfig {
    fn default() -> Self {
        Self {
            current_user: "Joao".to_string(),
            peer_user: "Pepzin".to_string(),
            filters: vec!["All".to_string(), "Unread".to_string(), "Groups".to_string()],
            avatars: DEFAULT_AVATARS.iter().map(|s| s.to_string()).collect(),
            avatar_exhaustion: AvatarExhaustion::default(),
            placeholder_date: "21/21/4241".to_string(),
            unread_count: 2,
            name_words: WordRange::new(1, 9),
            text_words: WordRange::new(1, 14),
        }
    }
}

/// Timing and size of the one-shot load
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Validate)]
#[garde(context(()))]
#[serde(default)]
pub struct LoadConfig {
    #[garde(custom(validate_delay_range))]
    pub delay_ms: DelayRange,
    #[garde(range(max = MAX_CHAT_COUNT))]
    pub chat_count: usize,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            delay_ms: DelayRange::new(1000, 3000),
            chat_count: DEFAULT_CHAT_COUNT,
        }
    }
}

/// Top-level configuration file
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default, Validate)]
#[garde(context(()))]
#[serde(default)]
pub struct ChatListConfig {
    #[garde(dive)]
    pub mock: MockDataConfig,
    #[garde(dive)]
    pub load: LoadConfig,
}

impl ChatListConfig {
    /// Parse and validate a JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate_input()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }
}

/// Helper trait to convert garde validation errors into [`Error`]
pub trait ValidateExt {
    fn validate_input(&self) -> Result<()>;
}

impl<T: Validate<Context = ()>> ValidateExt for T {
    fn validate_input(&self) -> Result<()> {
        self.validate().map_err(|e| Error::InvalidConfig(e.to_string()))
    }
}
