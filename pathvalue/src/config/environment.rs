//! Environment variable handling for configuration overrides.
//!
//! This module provides support for PATHVALUE_* environment variables that
//! override the detected formatting configuration.

use std::env;

use crate::config::schema::{FormatConfig, PathStyle};
use crate::error::{Error, Result};

/// Name of the variable that forces a rendering style.
pub const STYLE_VAR: &str = "PATHVALUE_STYLE";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use pathvalue::{EnvironmentConfig, FormatConfig};
///
/// let mut config = FormatConfig::detect();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if `PATHVALUE_STYLE` is set to something other than
    /// `posix` or `windows`.
    pub fn apply_overrides(config: &mut FormatConfig) -> Result<()> {
        if let Ok(value) = env::var(STYLE_VAR) {
            config.style = Self::parse_style(&value)?;
            log::debug!("{STYLE_VAR} overrides path style to {}", config.style);
        }

        Ok(())
    }

    fn parse_style(value: &str) -> Result<PathStyle> {
        value.parse().map_err(|_| Error::Validation {
            field: STYLE_VAR.into(),
            message: format!("Must be 'posix' or 'windows', got '{value}'"),
        })
    }
}
