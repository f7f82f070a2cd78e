//! Error types for the pathstr library.
//!
//! The path algebra itself is total and never fails. These types exist for
//! the fallible probe surface, using `thiserror` for ergonomic error
//! handling.

use thiserror::Error;

/// Result type alias for probe operations that may fail.
///
/// # Examples
///
/// ```
/// use pathstr::Result;
///
/// fn example_probe() -> Result<bool> {
///     Ok(true)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the pathstr library.
///
/// Only the fallible probe functions produce these; every path algebra
/// operation is total over arbitrary strings.
#[derive(Debug, Error)]
pub enum Error {
    /// No entry exists at the given path.
    #[error("path not found: {path}")]
    PathNotFound {
        /// The path that was not found.
        path: String,
    },

    /// The entry could not be inspected due to missing permissions.
    #[error("permission denied: {path}")]
    PermissionDenied {
        /// The path that could not be accessed.
        path: String,
    },

    /// An I/O error occurred while querying filesystem metadata.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if error indicates a path does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathstr::Error;
    ///
    /// let err = Error::PathNotFound { path: "/nonexistent".to_string() };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PathNotFound { .. })
    }

    /// Check if error is permission-related.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathstr::Error;
    ///
    /// let err = Error::PermissionDenied { path: "/restricted".to_string() };
    /// assert!(err.is_permission_denied());
    /// ```
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_not_found_error() {
        let err = Error::PathNotFound {
            path: "/missing/entry".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("path not found"));
        assert!(display.contains("/missing/entry"));
    }

    #[test]
    fn test_permission_denied_error() {
        let err = Error::PermissionDenied {
            path: "/restricted".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("permission denied"));
        assert!(display.contains("/restricted"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
        let err: Error = io_err.into();
        let display = format!("{err}");
        assert!(display.contains("I/O error"));
        assert!(display.contains("disk on fire"));
    }

    #[test]
    fn test_error_predicates() {
        let not_found = Error::PathNotFound {
            path: "/a".to_string(),
        };
        assert!(not_found.is_not_found());
        assert!(!not_found.is_permission_denied());

        let denied = Error::PermissionDenied {
            path: "/b".to_string(),
        };
        assert!(denied.is_permission_denied());
        assert!(!denied.is_not_found());
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<bool> {
            Err(Error::PathNotFound {
                path: "/test".to_string(),
            })
        }

        assert!(returns_result().is_err());
    }
}
