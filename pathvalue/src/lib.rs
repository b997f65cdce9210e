#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pathvalue
//!
//! A platform-agnostic file path value type.
//!
//! This library parses path strings into segments, resolves `.` and `..`,
//! composes and relativizes paths, and renders them in POSIX or Windows
//! form. It never touches the filesystem.
//!
//! ## Core Types
//!
//! - [`PathValue`]: the immutable path value
//! - [`PathStyle`] and [`FormatConfig`]: rendering style and the environment
//!   signal used as its default
//! - [`Error`] and [`Result`]: Error handling types
//!
//! ## Examples
//!
//! ```
//! use pathvalue::{PathStyle, PathValue};
//!
//! let path = PathValue::parse("/home/me/./docs/../notes.TXT");
//! assert!(path.is_rooted());
//!
//! let normalized = path.normalize().unwrap();
//! assert_eq!(normalized.to_posix_path(), "/home/me/notes.TXT");
//! assert_eq!(normalized.extension(PathStyle::Posix).as_deref(), Some("txt"));
//! assert_eq!(normalized, path);
//! ```

pub mod config;
pub mod error;
pub mod path;

// Re-export key types at crate root for convenience
pub use config::{EnvironmentConfig, FormatConfig, PathStyle};
pub use error::{Error, Result};
pub use path::PathValue;
