//! Normalization and composition.
//!
//! This module resolves `.` and `..` segments and composes paths either by
//! plain concatenation ([`PathValue::append`]) or with `cd`-like navigation
//! semantics ([`PathValue::navigate`]).

use std::collections::VecDeque;

use crate::error::{Error, Result};
use crate::path::types::{PathValue, CURRENT_DIR, PARENT_DIR};

impl PathValue {
    /// Resolve `.` and `..` segments.
    ///
    /// Segments are scanned from last to first. Each `..` cancels the next
    /// ordinary segment to its left. On an unrooted path any `..` left over
    /// is kept as leading `..` segments.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NavigationAboveRoot`] if the path is rooted and has
    /// more `..` segments than it can cancel.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathvalue::PathValue;
    ///
    /// let resolved = PathValue::parse("/a/./b/../c").normalize().unwrap();
    /// assert_eq!(resolved.to_posix_path(), "/a/c");
    ///
    /// let resolved = PathValue::parse("../a/../../b").normalize().unwrap();
    /// assert_eq!(resolved.to_posix_path(), "../../b");
    ///
    /// assert!(PathValue::parse("/..").normalize().is_err());
    /// ```
    pub fn normalize(&self) -> Result<PathValue> {
        let mut resolved = VecDeque::with_capacity(self.len());
        let mut pending_up = 0usize;

        for segment in self.segments().iter().rev() {
            match segment.as_str() {
                CURRENT_DIR => {}
                PARENT_DIR => pending_up += 1,
                _ if pending_up > 0 => pending_up -= 1,
                _ => resolved.push_front(segment.clone()),
            }
        }

        if pending_up > 0 {
            if self.is_rooted() {
                log::debug!("{self} climbs {pending_up} level(s) above its root");
                return Err(Error::NavigationAboveRoot {
                    path: self.to_posix_path(),
                });
            }
            for _ in 0..pending_up {
                resolved.push_front(PARENT_DIR.to_string());
            }
        }

        Ok(self.with_segments(resolved.into()))
    }

    /// Concatenate two paths without interpreting `.` or `..`.
    ///
    /// An empty `self` yields `other` unchanged. Otherwise the result keeps
    /// the rootedness of `self`, even when `other` is rooted.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathvalue::PathValue;
    ///
    /// let dir = PathValue::parse("/srv/www");
    /// let joined = dir.append(&PathValue::parse("../index.html"));
    /// assert_eq!(joined.to_posix_path(), "/srv/www/../index.html");
    /// ```
    #[must_use]
    pub fn append(&self, other: &PathValue) -> PathValue {
        if self.is_empty() {
            return other.clone();
        }

        let mut segments = Vec::with_capacity(self.len() + other.len());
        segments.extend_from_slice(self.segments());
        segments.extend_from_slice(other.segments());
        PathValue::from_parts(segments, self.is_rooted())
    }

    /// Move from `self` to `nav` the way a shell `cd` would.
    ///
    /// A rooted `nav` replaces `self` entirely. Otherwise `nav` is appended
    /// to `self`. Either way the result is normalized.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NavigationAboveRoot`] if the combined path climbs
    /// above a root.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathvalue::PathValue;
    ///
    /// let cwd = PathValue::parse("/home/me/src");
    /// let moved = cwd.navigate(&PathValue::parse("../docs")).unwrap();
    /// assert_eq!(moved.to_posix_path(), "/home/me/docs");
    ///
    /// let moved = cwd.navigate(&PathValue::parse("/tmp/./x")).unwrap();
    /// assert_eq!(moved.to_posix_path(), "/tmp/x");
    /// ```
    pub fn navigate(&self, nav: &PathValue) -> Result<PathValue> {
        if nav.is_rooted() {
            log::trace!("{nav} is rooted, replacing {self}");
            return nav.normalize();
        }

        let mut segments = Vec::with_capacity(self.len() + nav.len());
        segments.extend_from_slice(self.segments());
        segments.extend_from_slice(nav.segments());
        PathValue::from_parts(segments, self.is_rooted()).normalize()
    }
}
