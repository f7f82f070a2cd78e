//! Filesystem probes.
//!
//! The only part of the library that touches the host: thin wrappers over
//! `std::fs` metadata queries. The boolean predicates are total — an
//! inaccessible path is reported as nonexistent, with the suppressed error
//! logged at debug level. Callers that must distinguish "absent" from
//! "inaccessible" use the fallible surface ([`try_exists`], [`entry_kind`])
//! instead.
//!
//! All queries follow symlinks, so a dangling symlink does not exist as far
//! as these probes are concerned.

use std::fmt;
use std::fs;
use std::io::ErrorKind;

use crate::error::{Error, Result};

/// Kind of an existing filesystem entry.
///
/// `Other` covers entries that are neither regular files nor directories
/// (sockets, FIFOs, device nodes), keeping [`is_file`] and [`is_dir`]
/// mutually exclusive without forcing every special file into one of the
/// two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// A regular file.
    File,
    /// A directory.
    Directory,
    /// Anything else the host filesystem can hold.
    Other,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => write!(f, "file"),
            Self::Directory => write!(f, "directory"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// Checks whether a path (file or directory) exists.
///
/// An inaccessible path is treated as nonexistent.
///
/// # Examples
///
/// ```
/// use pathstr::exists;
///
/// assert!(!exists("/definitely/not/here"));
/// ```
#[must_use]
pub fn exists(path: &str) -> bool {
    match fs::metadata(path) {
        Ok(_) => true,
        Err(err) => {
            log_suppressed("exists", path, &err);
            false
        }
    }
}

/// Checks whether a path is a regular file.
///
/// Returns `false` for a nonexistent or inaccessible path, and for any
/// existing entry that is not a regular file.
///
/// # Examples
///
/// ```
/// use pathstr::is_file;
///
/// assert!(!is_file("/definitely/not/here"));
/// ```
#[must_use]
pub fn is_file(path: &str) -> bool {
    match fs::metadata(path) {
        Ok(metadata) => metadata.is_file(),
        Err(err) => {
            log_suppressed("is_file", path, &err);
            false
        }
    }
}

/// Checks whether a path is a directory.
///
/// Returns `false` for a nonexistent or inaccessible path, and for any
/// existing entry that is not a directory.
///
/// # Examples
///
/// ```
/// use pathstr::is_dir;
///
/// assert!(!is_dir("/definitely/not/here"));
/// ```
#[must_use]
pub fn is_dir(path: &str) -> bool {
    match fs::metadata(path) {
        Ok(metadata) => metadata.is_dir(),
        Err(err) => {
            log_suppressed("is_dir", path, &err);
            false
        }
    }
}

/// Checks whether a path exists, surfacing failures.
///
/// Unlike [`exists`], `Ok(false)` is returned only for a genuinely missing
/// entry.
///
/// # Errors
///
/// Returns an error if:
/// - Permission is denied (`PermissionDenied`)
/// - Any other I/O error occurs
///
/// # Examples
///
/// ```
/// use pathstr::try_exists;
///
/// assert!(!try_exists("/definitely/not/here").unwrap());
/// ```
pub fn try_exists(path: &str) -> Result<bool> {
    match fs::metadata(path) {
        Ok(_) => Ok(true),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
        Err(err) if err.kind() == ErrorKind::PermissionDenied => Err(Error::PermissionDenied {
            path: path.to_string(),
        }),
        Err(err) => Err(Error::Io(err)),
    }
}

/// Classifies an existing filesystem entry.
///
/// # Errors
///
/// Returns an error if:
/// - The path does not exist (`PathNotFound`)
/// - Permission is denied (`PermissionDenied`)
/// - Any other I/O error occurs
///
/// # Examples
///
/// ```no_run
/// use pathstr::{entry_kind, EntryKind};
///
/// assert_eq!(entry_kind("/tmp").unwrap(), EntryKind::Directory);
/// ```
pub fn entry_kind(path: &str) -> Result<EntryKind> {
    match fs::metadata(path) {
        Ok(metadata) => {
            if metadata.is_file() {
                Ok(EntryKind::File)
            } else if metadata.is_dir() {
                Ok(EntryKind::Directory)
            } else {
                Ok(EntryKind::Other)
            }
        }
        Err(err) if err.kind() == ErrorKind::NotFound => Err(Error::PathNotFound {
            path: path.to_string(),
        }),
        Err(err) if err.kind() == ErrorKind::PermissionDenied => Err(Error::PermissionDenied {
            path: path.to_string(),
        }),
        Err(err) => Err(Error::Io(err)),
    }
}

/// Records a metadata failure the boolean predicates swallow.
fn log_suppressed(operation: &str, path: &str, err: &std::io::Error) {
    if err.kind() != ErrorKind::NotFound {
        log::debug!("{operation}({path}): treating inaccessible path as nonexistent: {err}");
    }
}
