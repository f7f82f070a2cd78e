//! Path composition functions.
//!
//! This module builds path strings out of smaller pieces:
//! - [`join`] concatenates an ordered sequence of components with single
//!   separators
//! - [`format`] assembles a path from the named elements of a
//!   [`PathElements`] value
//!
//! Both functions are total: malformed or empty inputs degrade to empty or
//! partial output rather than failing.

use serde::{Deserialize, Serialize};

/// Builds a path string by joining components, adding directory separators
/// where necessary.
///
/// The first element seeds the result verbatim, so a bare root `"/"` keeps
/// the result rooted. Every subsequent element is stripped of one leading
/// and one trailing separator; elements that are empty after stripping
/// contribute nothing, so the result never contains doubled separators.
///
/// # Examples
///
/// ```
/// use pathstr::join;
///
/// let path = join(&["/", "var/www", "/", "", "website", "robots.txt"]);
/// assert_eq!(path, "/var/www/website/robots.txt");
///
/// assert_eq!(join(&["assets", "icons"]), "assets/icons");
/// assert_eq!(join::<&str>(&[]), "");
/// ```
#[must_use]
pub fn join<S: AsRef<str>>(components: &[S]) -> String {
    let Some((first, rest)) = components.split_first() else {
        return String::new();
    };

    let mut result = first.as_ref().to_string();

    for comp in rest {
        let comp = comp.as_ref();
        let comp = comp.strip_prefix('/').unwrap_or(comp);
        let comp = comp.strip_suffix('/').unwrap_or(comp);

        if comp.is_empty() {
            continue;
        }

        if !result.is_empty() && !result.ends_with('/') {
            result.push('/');
        }

        result.push_str(comp);
    }

    result
}

/// Named elements of a path, consumed by [`format`].
///
/// All three elements are optional; a default value formats to the empty
/// string. The struct derives `Serialize`/`Deserialize` so element mappings
/// can come straight out of manifests or job descriptions.
///
/// # Examples
///
/// ```
/// use pathstr::PathElements;
///
/// let elements = PathElements::new()
///     .with_dir("assets/icons")
///     .with_base("settings.png");
/// assert_eq!(elements.dir.as_deref(), Some("assets/icons"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathElements {
    /// Directory portion, e.g. `/var/home`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<String>,

    /// Base name, e.g. `readme.txt`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,

    /// File extension without the leading dot, e.g. `txt`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ext: Option<String>,
}

impl PathElements {
    /// Create an empty set of path elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathstr::{format, PathElements};
    ///
    /// assert_eq!(format(&PathElements::new()), "");
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the directory element.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathstr::PathElements;
    ///
    /// let elements = PathElements::new().with_dir("/var/home");
    /// assert_eq!(elements.dir.as_deref(), Some("/var/home"));
    /// ```
    #[must_use]
    pub fn with_dir(mut self, dir: impl Into<String>) -> Self {
        self.dir = Some(dir.into());
        self
    }

    /// Set the base-name element.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathstr::PathElements;
    ///
    /// let elements = PathElements::new().with_base("logo");
    /// assert_eq!(elements.base.as_deref(), Some("logo"));
    /// ```
    #[must_use]
    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = Some(base.into());
        self
    }

    /// Set the extension element (without the leading dot).
    ///
    /// # Examples
    ///
    /// ```
    /// use pathstr::PathElements;
    ///
    /// let elements = PathElements::new().with_ext("svg");
    /// assert_eq!(elements.ext.as_deref(), Some("svg"));
    /// ```
    #[must_use]
    pub fn with_ext(mut self, ext: impl Into<String>) -> Self {
        self.ext = Some(ext.into());
        self
    }
}

/// Builds a path from the named elements of a path.
///
/// Starts from the `dir` element if present, joins the `base` element onto
/// it, and appends the `ext` element introduced by a literal `.`. An ext
/// value that itself begins with `/` is not treated as an extension and is
/// appended untouched, without the introducing dot.
///
/// # Examples
///
/// ```
/// use pathstr::{format, PathElements};
///
/// let elements = PathElements::new()
///     .with_dir("assets/icons")
///     .with_base("settings.png");
/// assert_eq!(format(&elements), "assets/icons/settings.png");
///
/// let elements = PathElements::new().with_base("logo").with_ext("svg");
/// assert_eq!(format(&elements), "logo.svg");
///
/// assert_eq!(format(&PathElements::new()), "");
/// ```
#[must_use]
pub fn format(elements: &PathElements) -> String {
    let mut path = elements.dir.clone().unwrap_or_default();

    if let Some(base) = &elements.base {
        path = join(&[path.as_str(), base.as_str()]);
    }

    if let Some(ext) = &elements.ext {
        if ext.starts_with('/') {
            path.push_str(ext);
        } else {
            path.push('.');
            path.push_str(ext);
        }
    }

    path
}
