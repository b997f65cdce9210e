//! The path value type and its parser.
//!
//! A [`PathValue`] is an immutable list of segments plus two flags recorded
//! at parse time. Every transformation lives in a sibling module and returns
//! a fresh value.

use std::convert::Infallible;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Characters that delimit segments. They never appear inside a segment.
pub const SEPARATORS: [char; 3] = ['/', '\\', ':'];

pub(crate) const CURRENT_DIR: &str = ".";
pub(crate) const PARENT_DIR: &str = "..";

/// A parsed, platform-agnostic file path.
///
/// Equality and hashing use the normalized POSIX rendering, so paths that
/// only differ by `.` or resolvable `..` segments compare equal.
///
/// # Examples
///
/// ```
/// use pathvalue::PathValue;
///
/// let path = PathValue::parse("C:\\work\\src\\..\\docs");
/// assert!(path.is_rooted());
/// assert_eq!(path.segments(), ["C", "work", "src", "..", "docs"]);
///
/// assert_eq!(PathValue::parse("a/./b"), PathValue::parse("a/b"));
/// assert_eq!(PathValue::parse("a/../a/b"), PathValue::parse("a\\b"));
/// ```
#[derive(Debug, Clone)]
pub struct PathValue {
    segments: Vec<String>,
    rooted: bool,
    empty: bool,
}

impl PathValue {
    /// Parse a path string. Any input is accepted.
    ///
    /// The input is split on `/`, `\` and `:` with empty pieces discarded.
    /// It is rooted when it starts with `/` or `\`, or when its second
    /// character is `:` (a drive letter such as `C:`).
    ///
    /// # Examples
    ///
    /// ```
    /// use pathvalue::PathValue;
    ///
    /// assert_eq!(PathValue::parse("a//b").segments(), ["a", "b"]);
    /// assert_eq!(PathValue::parse("a:b").segments(), ["a", "b"]);
    /// assert!(PathValue::parse("/x").is_rooted());
    /// assert!(!PathValue::parse("x/y").is_rooted());
    /// assert!(PathValue::parse("   ").is_empty());
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let segments = raw
            .split(SEPARATORS)
            .filter(|token| !token.is_empty())
            .map(str::to_owned)
            .collect();

        let mut chars = raw.chars();
        let first = chars.next();
        let second = chars.next();
        let rooted = matches!(first, Some('/' | '\\')) || second == Some(':');

        Self {
            segments,
            rooted,
            empty: raw.trim().is_empty(),
        }
    }

    /// The empty path, standing in for a missing input.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            segments: Vec::new(),
            rooted: false,
            empty: true,
        }
    }

    pub(crate) fn from_parts(segments: Vec<String>, rooted: bool) -> Self {
        Self {
            segments,
            rooted,
            empty: false,
        }
    }

    pub(crate) fn with_segments(&self, segments: Vec<String>) -> Self {
        Self {
            segments,
            rooted: self.rooted,
            empty: self.empty,
        }
    }

    /// The segments in left-to-right order.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the original input carried a root marker.
    #[must_use]
    pub fn is_rooted(&self) -> bool {
        self.rooted
    }

    /// Whether the original input was empty or whitespace.
    ///
    /// This is independent of the segment count: `"/"` has no segments but
    /// is not empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.empty
    }

    /// The final segment, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathvalue::PathValue;
    ///
    /// assert_eq!(PathValue::parse("a/b/c.txt").last_element(), Some("c.txt"));
    /// assert_eq!(PathValue::parse("/").last_element(), None);
    /// ```
    #[must_use]
    pub fn last_element(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    fn comparison_key(&self) -> String {
        match self.normalize() {
            Ok(normalized) => normalized.to_posix_path(),
            Err(_) => self.to_posix_path(),
        }
    }
}

impl Default for PathValue {
    fn default() -> Self {
        Self::empty()
    }
}

impl PartialEq for PathValue {
    fn eq(&self, other: &Self) -> bool {
        self.comparison_key() == other.comparison_key()
    }
}

impl Eq for PathValue {}

impl Hash for PathValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.comparison_key().hash(state);
    }
}

impl fmt::Display for PathValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_posix_path())
    }
}

impl FromStr for PathValue {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl Serialize for PathValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_posix_path())
    }
}

impl<'de> Deserialize<'de> for PathValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}
