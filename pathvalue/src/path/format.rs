//! Rendering paths as text.

use crate::config::{FormatConfig, PathStyle};
use crate::path::types::PathValue;

impl PathValue {
    /// Render with forward slashes, exactly as the segments stand.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathvalue::PathValue;
    ///
    /// assert_eq!(PathValue::parse("\\a\\.\\b").to_posix_path(), "/a/./b");
    /// assert_eq!(PathValue::parse("C:\\a").to_posix_path(), "/C/a");
    /// assert_eq!(PathValue::parse("a\\b").to_posix_path(), "a/b");
    /// ```
    #[must_use]
    pub fn to_posix_path(&self) -> String {
        let joined = self.segments().join("/");
        if self.is_rooted() {
            format!("/{joined}")
        } else {
            joined
        }
    }

    /// Render with backslashes after normalizing.
    ///
    /// A rooted path whose first segment is a single character starts with
    /// a drive (`C:`), any other rooted path starts with `\name`. A rooted
    /// path that cannot be normalized is rendered from its raw segments.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathvalue::PathValue;
    ///
    /// assert_eq!(PathValue::parse("/c/users/../me").to_windows_path(), "c:\\me");
    /// assert_eq!(PathValue::parse("/server/share").to_windows_path(), "\\server\\share");
    /// assert_eq!(PathValue::parse("a/./b").to_windows_path(), "a\\b");
    /// ```
    #[must_use]
    pub fn to_windows_path(&self) -> String {
        let view = self.rendered_view(PathStyle::Windows);
        let segments = view.segments();

        if !self.is_rooted() {
            return segments.join("\\");
        }

        let Some((first, rest)) = segments.split_first() else {
            return "\\".to_string();
        };

        let mut rendered = if first.chars().count() == 1 {
            format!("{first}:")
        } else {
            format!("\\{first}")
        };
        for segment in rest {
            rendered.push('\\');
            rendered.push_str(segment);
        }
        rendered
    }

    /// The segments a rendering in `style` is built from: the raw segments
    /// for POSIX, the normalized ones for Windows.
    pub(crate) fn rendered_view(&self, style: PathStyle) -> PathValue {
        match style {
            PathStyle::Posix => self.clone(),
            PathStyle::Windows => self.normalize().unwrap_or_else(|err| {
                log::debug!("rendering {self} without normalization: {err}");
                self.clone()
            }),
        }
    }

    /// Render in the requested style.
    #[must_use]
    pub fn to_path_string(&self, style: PathStyle) -> String {
        match style {
            PathStyle::Posix => self.to_posix_path(),
            PathStyle::Windows => self.to_windows_path(),
        }
    }

    /// Render in `explicit` style if given, otherwise in the style of the
    /// configured environment.
    #[must_use]
    pub fn to_environmental_path(
        &self,
        config: &FormatConfig,
        explicit: Option<PathStyle>,
    ) -> String {
        self.to_path_string(config.resolve(explicit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_posix_rooted_and_unrooted() {
        assert_eq!(PathValue::parse("/a/b").to_posix_path(), "/a/b");
        assert_eq!(PathValue::parse("a/b/").to_posix_path(), "a/b");
        assert_eq!(PathValue::parse("/").to_posix_path(), "/");
        assert_eq!(PathValue::parse("").to_posix_path(), "");
    }

    #[test]
    fn test_posix_does_not_normalize() {
        assert_eq!(PathValue::parse("a/../b").to_posix_path(), "a/../b");
        assert_eq!(PathValue::parse("/..").to_posix_path(), "/..");
    }

    #[test]
    fn test_windows_drive_letter() {
        assert_eq!(PathValue::parse("C:\\a\\b").to_windows_path(), "C:\\a\\b");
        assert_eq!(PathValue::parse("c:/").to_windows_path(), "c:");
        assert_eq!(PathValue::parse("/d/x").to_windows_path(), "d:\\x");
    }

    #[test]
    fn test_windows_unc_style_root() {
        assert_eq!(
            PathValue::parse("\\\\server\\share\\f").to_windows_path(),
            "\\server\\share\\f"
        );
        assert_eq!(PathValue::parse("/usr/bin").to_windows_path(), "\\usr\\bin");
    }

    #[test]
    fn test_windows_normalizes() {
        assert_eq!(PathValue::parse("a/./b/../c").to_windows_path(), "a\\c");
        assert_eq!(PathValue::parse("../a").to_windows_path(), "..\\a");
        assert_eq!(PathValue::parse("/x/..").to_windows_path(), "\\");
    }

    #[test]
    fn test_windows_falls_back_when_above_root() {
        assert_eq!(PathValue::parse("/..").to_windows_path(), "\\..");
    }

    #[test]
    fn test_to_path_string() {
        let path = PathValue::parse("/ab/./c");
        assert_eq!(path.to_path_string(PathStyle::Posix), "/ab/./c");
        assert_eq!(path.to_path_string(PathStyle::Windows), "\\ab\\c");

        let drive = PathValue::parse("/a/./b");
        assert_eq!(drive.to_path_string(PathStyle::Windows), "a:\\b");
    }

    #[test]
    fn test_environmental_path_uses_config_then_override() {
        let path = PathValue::parse("x/y");
        let windows = FormatConfig::new(PathStyle::Windows);
        let posix = FormatConfig::new(PathStyle::Posix);

        assert_eq!(path.to_environmental_path(&windows, None), "x\\y");
        assert_eq!(path.to_environmental_path(&posix, None), "x/y");
        assert_eq!(path.to_environmental_path(&windows, Some(PathStyle::Posix)), "x/y");
        assert_eq!(path.to_environmental_path(&posix, Some(PathStyle::Windows)), "x\\y");
    }
}
