//! Platform-agnostic path values.
//!
//! This module provides [`PathValue`], a path parsed into segments that can
//! be normalized, composed and rendered in POSIX or Windows form without
//! touching the filesystem.
//!
//! # Key Concepts
//!
//! ## Parsing
//!
//! `/`, `\` and `:` all separate segments, so the same value can be built
//! from `C:\work\src`, `/C/work/src` or `C:/work/src`. A path is *rooted*
//! when its text starts with a separator or a drive letter.
//!
//! ## Normalization
//!
//! Normalization drops `.` segments and lets every `..` cancel the segment
//! to its left. A rooted path may not climb above its root; an unrooted
//! path keeps unmatched `..` segments at its front.
//!
//! ## Composition
//!
//! - [`PathValue::append`] concatenates segments literally
//! - [`PathValue::navigate`] behaves like `cd`, then normalizes
//! - [`PathValue::unroot`] strips a known prefix
//! - [`PathValue::relative_to`] finds the way from one path to another
//!
//! # Examples
//!
//! ```
//! use pathvalue::{PathStyle, PathValue};
//!
//! let project = PathValue::parse("C:\\work\\project");
//! let source = project.navigate(&PathValue::parse("src\\..\\lib\\mod.RS")).unwrap();
//!
//! assert_eq!(source.to_windows_path(), "C:\\work\\project\\lib\\mod.RS");
//! assert_eq!(source.to_posix_path(), "/C/work/project/lib/mod.RS");
//! assert_eq!(source.extension(PathStyle::Windows).as_deref(), Some("rs"));
//!
//! let inner = source.unroot(&project).unwrap();
//! assert_eq!(inner.to_posix_path(), "lib/mod.RS");
//! ```

pub mod extension;
pub mod format;
pub mod normalize;
pub mod relationship;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use types::{PathValue, SEPARATORS};
