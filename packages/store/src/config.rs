//! # Application configuration: `alphablog.toml`
//!
//! Optional TOML file tuning how posts are listed and measured. On desktop it
//! lives next to the persisted data (filename: [`BlogConfig::filename`] =
//! `"alphablog.toml"`); the web build always uses the defaults.
//!
//! ## Structure
//!
//! ```toml
//! [listing]
//! page_size = 6          # posts per page on the list view
//! popular_tags = 10      # tags offered by the tag filter
//! featured = 3           # posts shown on the home page
//!
//! [reading]
//! words_per_minute = 200
//!
//! [related]
//! limit = 3              # related posts under a post
//! ```
//!
//! Every section and key has a default, so a missing or empty file is
//! equivalent to [`BlogConfig::default`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::query::{DEFAULT_PAGE_SIZE, DEFAULT_RELATED_LIMIT, WORDS_PER_MINUTE};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Top-level configuration stored in `alphablog.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BlogConfig {
    #[serde(default)]
    pub listing: ListingConfig,
    #[serde(default)]
    pub reading: ReadingConfig,
    #[serde(default)]
    pub related: RelatedConfig,
}

/// Post list configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ListingConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_popular_tags")]
    pub popular_tags: usize,
    #[serde(default = "default_featured")]
    pub featured: usize,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_popular_tags() -> usize {
    10
}

fn default_featured() -> usize {
    3
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            popular_tags: default_popular_tags(),
            featured: default_featured(),
        }
    }
}

/// Read-time estimation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReadingConfig {
    #[serde(default = "default_words_per_minute")]
    pub words_per_minute: u32,
}

fn default_words_per_minute() -> u32 {
    WORDS_PER_MINUTE
}

impl Default for ReadingConfig {
    fn default() -> Self {
        Self {
            words_per_minute: default_words_per_minute(),
        }
    }
}

/// Related posts under a post.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RelatedConfig {
    #[serde(default = "default_related_limit")]
    pub limit: usize,
}

fn default_related_limit() -> usize {
    DEFAULT_RELATED_LIMIT
}

impl Default for RelatedConfig {
    fn default() -> Self {
        Self {
            limit: default_related_limit(),
        }
    }
}

impl BlogConfig {
    /// Builder method to set the list page size.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.listing.page_size = page_size;
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "alphablog.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = BlogConfig::from_toml("").unwrap();
        assert_eq!(config, BlogConfig::default());
        assert_eq!(config.listing.page_size, 6);
        assert_eq!(config.reading.words_per_minute, 200);
        assert_eq!(config.related.limit, 3);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config = BlogConfig::from_toml("[listing]\npage_size = 12\n").unwrap();
        assert_eq!(config.listing.page_size, 12);
        assert_eq!(config.listing.popular_tags, 10);
        assert_eq!(config.reading, ReadingConfig::default());
    }

    #[test]
    fn test_config_roundtrip() {
        let config = BlogConfig::default().with_page_size(9);
        let text = config.to_toml().unwrap();
        assert_eq!(BlogConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let err = BlogConfig::from_toml("[listing]\npage_size = \"many\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
