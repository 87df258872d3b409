//! Reconciler configuration
//!
//! Every field has a default, so an empty TOML document is a valid
//! configuration.
//!
//! ```toml
//! container_name = "Changelog"
//! max_width = 600.0
//! home_delay_ms = 1500
//!
//! [fonts.primary.regular]
//! family = "Inter"
//! style = "Regular"
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::{ChangelogError, Result};
use crate::model::FontTiers;

pub const DEFAULT_CONTAINER_NAME: &str = "Changelog";
pub const DEFAULT_HEADER_TITLE: &str = "Changelog";
pub const DEFAULT_FOOTER_TEXT: &str = "Changelog Plugin | Inter UX";
pub const DEFAULT_DISPLAY_NAME: &str = "Unknown User";
pub const DEFAULT_MAX_WIDTH: f32 = 600.0;
pub const DEFAULT_HOME_DELAY_MS: u64 = 1500;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// Reserved frame name identifying the container on a page
    pub container_name: String,
    pub header_title: String,
    pub footer_text: String,
    /// Fixed width of the container and its entries
    pub max_width: f32,
    /// Delay before the follow-up `navigate-home` message
    pub home_delay_ms: u64,
    /// Display name used when the platform reports no user
    pub default_user_name: String,
    pub fonts: FontTiers,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            container_name: DEFAULT_CONTAINER_NAME.to_string(),
            header_title: DEFAULT_HEADER_TITLE.to_string(),
            footer_text: DEFAULT_FOOTER_TEXT.to_string(),
            max_width: DEFAULT_MAX_WIDTH,
            home_delay_ms: DEFAULT_HOME_DELAY_MS,
            default_user_name: DEFAULT_DISPLAY_NAME.to_string(),
            fonts: FontTiers::default(),
        }
    }
}

impl ChangelogConfig {
    /// Parse and validate a TOML document
    ///
    /// # Errors
    /// `Config` when the document does not parse or fails validation.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: ChangelogConfig =
            toml::from_str(source).map_err(|e| ChangelogError::Config {
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file
    ///
    /// # Errors
    /// `Config` when the file cannot be read or is invalid.
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path).map_err(|e| ChangelogError::Config {
            message: format!("cannot read {}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&source)
    }

    /// # Errors
    /// `Config` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if self.container_name.trim().is_empty() {
            return Err(config_error("container_name must not be blank"));
        }
        if self.default_user_name.trim().is_empty() {
            return Err(config_error("default_user_name must not be blank"));
        }
        if !(self.max_width.is_finite() && self.max_width > 0.0) {
            return Err(config_error("max_width must be a positive number"));
        }
        Ok(())
    }

    pub fn home_delay(&self) -> Duration {
        Duration::from_millis(self.home_delay_ms)
    }

    /// Name to display for `name`, substituting the default for blanks
    pub fn display_name<'a>(&'a self, name: &'a str) -> &'a str {
        if name.trim().is_empty() {
            &self.default_user_name
        } else {
            name
        }
    }
}

fn config_error(message: &str) -> ChangelogError {
    ChangelogError::Config {
        message: message.to_string(),
    }
}
