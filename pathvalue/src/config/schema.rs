//! Configuration schema definitions.
//!
//! This module defines the rendering style of a path and the small
//! configuration record that carries the "is this a POSIX environment"
//! signal to the formatting calls.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Textual convention used when rendering a path.
///
/// # Examples
///
/// ```
/// use pathvalue::PathStyle;
///
/// assert_eq!(PathStyle::Posix.directory_separator(), '/');
/// assert_eq!(PathStyle::Windows.path_list_separator(), ';');
/// assert_eq!("WINDOWS".parse::<PathStyle>().unwrap(), PathStyle::Windows);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PathStyle {
    /// Forward slashes, a single `/` root.
    Posix,
    /// Backslashes, drive letters and `\name` roots.
    Windows,
}

impl PathStyle {
    /// The style of the platform this crate was compiled for.
    #[must_use]
    pub const fn native() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Posix
        }
    }

    /// Whether this is the POSIX style.
    #[must_use]
    pub const fn is_posix(self) -> bool {
        matches!(self, Self::Posix)
    }

    /// Separator placed between directory levels.
    #[must_use]
    pub const fn directory_separator(self) -> char {
        match self {
            Self::Posix => '/',
            Self::Windows => '\\',
        }
    }

    /// Separator placed between entries of a `PATH`-like list.
    #[must_use]
    pub const fn path_list_separator(self) -> char {
        match self {
            Self::Posix => ':',
            Self::Windows => ';',
        }
    }
}

impl Default for PathStyle {
    fn default() -> Self {
        Self::native()
    }
}

impl fmt::Display for PathStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Posix => write!(f, "posix"),
            Self::Windows => write!(f, "windows"),
        }
    }
}

impl FromStr for PathStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "posix" => Ok(Self::Posix),
            "windows" => Ok(Self::Windows),
            _ => Err(Error::Validation {
                field: "style".into(),
                message: format!("unknown path style '{s}', expected posix or windows"),
            }),
        }
    }
}

/// Formatting configuration threaded into environmental rendering.
///
/// Resolve it once (see [`FormatConfig::load`]) and hand it to the calls
/// that need a default style.
///
/// # Examples
///
/// ```
/// use pathvalue::{FormatConfig, PathStyle};
///
/// let config = FormatConfig::from_yaml("style: windows").unwrap();
/// assert_eq!(config.style, PathStyle::Windows);
/// assert_eq!(config.resolve(Some(PathStyle::Posix)), PathStyle::Posix);
/// assert_eq!(config.resolve(None), PathStyle::Windows);
/// ```
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FormatConfig {
    /// Style used when the caller does not ask for one explicitly.
    #[serde(default)]
    pub style: PathStyle,
}

impl FormatConfig {
    /// Configuration with an explicit default style.
    #[must_use]
    pub const fn new(style: PathStyle) -> Self {
        Self { style }
    }

    /// Configuration matching the compile-time platform.
    #[must_use]
    pub const fn detect() -> Self {
        Self::new(PathStyle::native())
    }

    /// Parse a configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the YAML is malformed or has
    /// unknown fields.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Platform detection followed by environment variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if `PATHVALUE_STYLE` holds an unknown style.
    pub fn load() -> Result<Self> {
        let mut config = Self::detect();
        super::EnvironmentConfig::apply_overrides(&mut config)?;
        Ok(config)
    }

    /// Pick the explicit override if given, the configured style otherwise.
    #[must_use]
    pub fn resolve(&self, explicit: Option<PathStyle>) -> PathStyle {
        explicit.unwrap_or(self.style)
    }

    /// Whether the configured environment is POSIX-style.
    #[must_use]
    pub const fn is_posix(&self) -> bool {
        self.style.is_posix()
    }
}
