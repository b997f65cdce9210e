//! Relationships between two paths.
//!
//! This module strips a known root off a path ([`PathValue::unroot`]) and
//! computes the relative path leading from one path to another
//! ([`PathValue::relative_to`]). Segments are compared literally and
//! case-sensitively.

use crate::error::{Error, Result};
use crate::path::types::{PathValue, PARENT_DIR};

/// Number of leading segments the two paths have in common.
fn common_prefix_len(a: &[String], b: &[String]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

impl PathValue {
    /// Remove `root` from the front of `self`.
    ///
    /// The result is unrooted and holds the segments of `self` that follow
    /// `root`.
    ///
    /// # Errors
    ///
    /// - [`Error::RootLongerThanPath`] if `root` has more segments than `self`
    /// - [`Error::NotASubpath`] if the segments of `root` are not a prefix of
    ///   those of `self`
    ///
    /// # Examples
    ///
    /// ```
    /// use pathvalue::PathValue;
    ///
    /// let full = PathValue::parse("/srv/www/site/index.html");
    /// let rest = full.unroot(&PathValue::parse("/srv/www")).unwrap();
    /// assert_eq!(rest.to_posix_path(), "site/index.html");
    /// assert!(!rest.is_rooted());
    /// ```
    pub fn unroot(&self, root: &PathValue) -> Result<PathValue> {
        if root.len() > self.len() {
            log::debug!("cannot unroot {self}: root {root} is longer");
            return Err(Error::RootLongerThanPath {
                path: self.to_posix_path(),
                root: root.to_posix_path(),
            });
        }

        let common = common_prefix_len(self.segments(), root.segments());
        if common < root.len() {
            log::debug!("cannot unroot {self}: segment {common} differs from {root}");
            return Err(Error::NotASubpath {
                path: self.to_posix_path(),
                root: root.to_posix_path(),
            });
        }

        Ok(PathValue::from_parts(
            self.segments()[root.len()..].to_vec(),
            false,
        ))
    }

    /// Compute the relative path that leads from `source` to `self`.
    ///
    /// The last segment of `source` is treated as a file, so only the
    /// directories above it are climbed. Pass a path with a trailing file
    /// name (or a placeholder) when `source` denotes a directory.
    ///
    /// Special cases:
    ///
    /// - two single-segment paths: `self` is returned unchanged
    /// - no common prefix: a rooted `self` is returned unchanged, an
    ///   unrooted one is navigated to from `source`
    /// - `source` is a prefix of `self`: the remaining segments of `self`
    ///
    /// # Errors
    ///
    /// Returns [`Error::NavigationAboveRoot`] only when there is no common
    /// prefix and navigating from `source` to `self` climbs above a root.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathvalue::PathValue;
    ///
    /// let target = PathValue::parse("/a/b/c");
    /// let source = PathValue::parse("/a/x/y");
    /// assert_eq!(target.relative_to(&source).unwrap().to_posix_path(), "../b/c");
    ///
    /// let source = PathValue::parse("/a/b");
    /// assert_eq!(target.relative_to(&source).unwrap().to_posix_path(), "c");
    /// ```
    pub fn relative_to(&self, source: &PathValue) -> Result<PathValue> {
        if self.len() == 1 && source.len() == 1 {
            return Ok(self.clone());
        }

        let common = common_prefix_len(self.segments(), source.segments());

        if common == 0 {
            if self.is_rooted() {
                return Ok(self.clone());
            }
            return source.navigate(self);
        }

        let descent = &self.segments()[common..];
        if common == source.len() {
            return Ok(PathValue::from_parts(descent.to_vec(), false));
        }

        let ascents = source.len() - common - 1;
        let mut segments = Vec::with_capacity(ascents + descent.len());
        segments.extend(std::iter::repeat(PARENT_DIR.to_string()).take(ascents));
        segments.extend_from_slice(descent);
        log::trace!("{self} from {source}: {ascents} ascent(s), {} descent(s)", descent.len());

        Ok(PathValue::from_parts(segments, false))
    }
}
