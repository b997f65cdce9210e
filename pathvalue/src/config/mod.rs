//! Formatting configuration for pathvalue.
//!
//! A [`PathValue`](crate::PathValue) never reads process-wide state. The
//! "is this a POSIX environment" signal lives in a [`FormatConfig`] that the
//! caller resolves once and passes to the environmental formatting calls.
//!
//! # Configuration Precedence
//!
//! Highest to lowest:
//!
//! 1. An explicit [`PathStyle`] handed to a formatting call
//! 2. The `PATHVALUE_STYLE` environment variable (via [`FormatConfig::load`])
//! 3. A YAML document (via [`FormatConfig::from_yaml`])
//! 4. Platform detection ([`PathStyle::native`])
//!
//! # Examples
//!
//! ```
//! use pathvalue::{FormatConfig, PathStyle, PathValue};
//!
//! let config = FormatConfig::new(PathStyle::Windows);
//! let path = PathValue::parse("/c/users/me");
//!
//! assert_eq!(path.to_environmental_path(&config, None), "c:\\users\\me");
//! assert_eq!(
//!     path.to_environmental_path(&config, Some(PathStyle::Posix)),
//!     "/c/users/me"
//! );
//! ```

pub mod environment;
pub mod schema;

pub use environment::EnvironmentConfig;
pub use schema::{FormatConfig, PathStyle};
