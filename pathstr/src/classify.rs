//! Absolute/relative path classification.
//!
//! Classification is total: every string, including the empty string, is
//! either absolute or relative, never both and never neither.

/// Returns `true` if the path is an absolute path.
///
/// A path is absolute when it starts with the separator `/` or with `~`
/// (the home-directory shorthand is treated as absolute by convention).
///
/// # Examples
///
/// ```
/// use pathstr::is_absolute;
///
/// assert!(is_absolute("/var/logs/test"));
/// assert!(is_absolute("~/Documents"));
/// assert!(!is_absolute("logs/test"));
/// assert!(!is_absolute(""));
/// ```
#[must_use]
pub fn is_absolute(path: &str) -> bool {
    path.starts_with('/') || path.starts_with('~')
}

/// Returns `true` if the path is a relative path.
///
/// This is the exact logical negation of [`is_absolute`].
///
/// # Examples
///
/// ```
/// use pathstr::is_relative;
///
/// assert!(is_relative("logs/test"));
/// assert!(is_relative("../assets/sfx"));
/// assert!(!is_relative("/var/logs/test"));
/// ```
#[must_use]
pub fn is_relative(path: &str) -> bool {
    !is_absolute(path)
}
