//! Error types for the pathvalue library.
//!
//! Every failure is a caller-input problem: there is nothing transient to
//! retry. Errors are built with `thiserror` and carry the POSIX rendering of
//! the paths involved.

use thiserror::Error;

/// Result type alias for operations that may fail with a pathvalue error.
///
/// # Examples
///
/// ```
/// use pathvalue::{PathValue, Result};
///
/// fn tidy(raw: &str) -> Result<PathValue> {
///     PathValue::parse(raw).normalize()
/// }
///
/// assert!(tidy("/a/./b").is_ok());
/// assert!(tidy("/..").is_err());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the pathvalue library.
#[derive(Debug, Error)]
pub enum Error {
    /// `unroot` was given a root with more segments than the path itself.
    #[error("root {root} is longer than path {path}")]
    RootLongerThanPath {
        /// The path being unrooted.
        path: String,
        /// The supplied root.
        root: String,
    },

    /// `unroot` was given a root whose segments are not a prefix of the path.
    #[error("{path} is not a subpath of {root}")]
    NotASubpath {
        /// The path being unrooted.
        path: String,
        /// The supplied root.
        root: String,
    },

    /// Normalizing a rooted path would climb above its root.
    #[error("cannot navigate above the root of {path}")]
    NavigationAboveRoot {
        /// The path that escapes its root.
        path: String,
    },

    /// A configuration value failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A configuration document could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),
}

impl Error {
    /// Check if the error was raised by normalizing past a root.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathvalue::PathValue;
    ///
    /// let err = PathValue::parse("/a/../..").normalize().unwrap_err();
    /// assert!(err.is_navigation_above_root());
    /// ```
    #[must_use]
    pub fn is_navigation_above_root(&self) -> bool {
        matches!(self, Self::NavigationAboveRoot { .. })
    }

    /// Check if the error was raised by an `unroot` call with a bad root.
    #[must_use]
    pub fn is_invalid_unroot(&self) -> bool {
        matches!(
            self,
            Self::RootLongerThanPath { .. } | Self::NotASubpath { .. }
        )
    }
}
