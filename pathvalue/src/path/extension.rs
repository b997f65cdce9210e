//! File name and extension accessors.
//!
//! Extension detection works on the rendered path string of the requested
//! style: a path has an extension when the last `.` of the string comes
//! after its last separator. None of these accessors fail.

use crate::config::PathStyle;
use crate::path::types::PathValue;

fn last_separator(rendered: &str) -> Option<usize> {
    rendered.rfind(['/', '\\'])
}

/// The raw (case-preserved) extension of a rendered path, if any.
fn raw_extension(rendered: &str) -> Option<&str> {
    let dot = rendered.rfind('.')?;
    match last_separator(rendered) {
        Some(separator) if separator > dot => None,
        _ => Some(&rendered[dot + 1..]),
    }
}

impl PathValue {
    /// Whether the final segment carries an extension.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathvalue::{PathStyle, PathValue};
    ///
    /// assert!(PathValue::parse("a/b.txt").has_extension(PathStyle::Posix));
    /// assert!(!PathValue::parse("a.d/b").has_extension(PathStyle::Posix));
    /// ```
    #[must_use]
    pub fn has_extension(&self, style: PathStyle) -> bool {
        raw_extension(&self.to_path_string(style)).is_some()
    }

    /// The lower-cased extension, without its dot.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathvalue::{PathStyle, PathValue};
    ///
    /// let path = PathValue::parse("c:\\yourmum.TXT");
    /// assert_eq!(path.extension(PathStyle::Windows).as_deref(), Some("txt"));
    ///
    /// let path = PathValue::parse("c:\\dir.with.dot\\file");
    /// assert_eq!(path.extension(PathStyle::Windows), None);
    /// ```
    #[must_use]
    pub fn extension(&self, style: PathStyle) -> Option<String> {
        raw_extension(&self.to_path_string(style)).map(str::to_lowercase)
    }

    /// The last segment with its extension removed.
    ///
    /// The segment is taken from the same view the `style` rendering uses,
    /// so a Windows-style name is read after normalization.
    #[must_use]
    pub fn file_name_without_extension(&self, style: PathStyle) -> Option<String> {
        let view = self.rendered_view(style);
        let last = view.last_element()?;
        let rendered = self.to_path_string(style);

        let stem = raw_extension(&rendered)
            .and_then(|ext| last.strip_suffix(ext))
            .and_then(|rest| rest.strip_suffix('.'))
            .unwrap_or(last);
        Some(stem.to_string())
    }

    /// The last segment, with the extension lower-cased.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathvalue::{PathStyle, PathValue};
    ///
    /// for raw in ["a/b/is.la", "a\\b\\is.la", "\\a/b\\is.la/"] {
    ///     let path = PathValue::parse(raw);
    ///     assert_eq!(path.file_name_with_extension(PathStyle::Posix).as_deref(), Some("is.la"));
    /// }
    /// ```
    #[must_use]
    pub fn file_name_with_extension(&self, style: PathStyle) -> Option<String> {
        let stem = self.file_name_without_extension(style)?;
        Some(match self.extension(style) {
            Some(ext) => format!("{stem}.{ext}"),
            None => stem,
        })
    }

    /// The rendered path without its final segment and the separator
    /// before it. Empty when there is no separator.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathvalue::{PathStyle, PathValue};
    ///
    /// let path = PathValue::parse("/var/log/syslog");
    /// assert_eq!(path.directory_name(PathStyle::Posix), "/var/log");
    /// assert_eq!(path.directory_name(PathStyle::Windows), "\\var\\log");
    /// ```
    #[must_use]
    pub fn directory_name(&self, style: PathStyle) -> String {
        let rendered = self.to_path_string(style);
        match last_separator(&rendered) {
            Some(separator) => rendered[..separator].to_string(),
            None => String::new(),
        }
    }

    /// Append `.ext` to the last segment unless the path already has that
    /// extension (compared case-insensitively). A leading dot on `ext` is
    /// ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathvalue::{PathStyle, PathValue};
    ///
    /// let path = PathValue::parse("out/report");
    /// let with_ext = path.ensure_extension("pdf", PathStyle::Posix);
    /// assert_eq!(with_ext.to_posix_path(), "out/report.pdf");
    ///
    /// let again = with_ext.ensure_extension(".PDF", PathStyle::Posix);
    /// assert_eq!(again.to_posix_path(), "out/report.pdf");
    /// ```
    #[must_use]
    pub fn ensure_extension(&self, ext: &str, style: PathStyle) -> PathValue {
        let ext = ext.strip_prefix('.').unwrap_or(ext);
        if self
            .extension(style)
            .is_some_and(|current| current == ext.to_lowercase())
        {
            return self.clone();
        }

        let mut segments = self.segments().to_vec();
        match segments.last_mut() {
            Some(last) => {
                last.push('.');
                last.push_str(ext);
            }
            None => segments.push(format!(".{ext}")),
        }
        PathValue::from_parts(segments, self.is_rooted())
    }
}
