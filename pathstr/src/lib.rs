#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pathstr
//!
//! Pure string-level manipulation of POSIX-style (`/`-separated) filesystem
//! paths.
//!
//! The library derives and constructs the syntactic components of a path —
//! directory, base name, extension — and classifies paths as absolute or
//! relative, all without touching storage. The only operations that query
//! the host are the thin probes in [`probe`].
//!
//! ## Core Operations
//!
//! - Composition: [`join`], [`format`] (with [`PathElements`])
//! - Decomposition: [`split`], [`basename`], [`dirname`], [`extname`]
//! - Classification: [`is_absolute`], [`is_relative`]
//! - Probes: [`exists`], [`is_file`], [`is_dir`]
//!
//! Every algebra operation is total: no input string produces an error, and
//! inputs without a recognizable component yield an absent or empty value
//! instead.
//!
//! ## Examples
//!
//! ```
//! use pathstr::{basename, dirname, extname, is_absolute, join, split};
//!
//! let path = join(&["/", "var/www", "website", "robots.txt"]);
//! assert_eq!(path, "/var/www/website/robots.txt");
//!
//! assert_eq!(split(&path), vec!["/", "var", "www", "website", "robots.txt"]);
//! assert_eq!(basename(&path), "robots.txt");
//! assert_eq!(dirname(&path), "/var/www/website");
//! assert_eq!(extname(&path), Some("txt"));
//! assert!(is_absolute(&path));
//! ```

pub mod classify;
pub mod compose;
pub mod decompose;
pub mod error;
pub mod probe;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export the full operation set at the crate root for convenience
pub use classify::{is_absolute, is_relative};
pub use compose::{format, join, PathElements};
pub use decompose::{basename, basename_without_ext, dirname, extname, split};
pub use error::{Error, Result};
pub use probe::{entry_kind, exists, is_dir, is_file, try_exists, EntryKind};

/// The path separator this library understands.
///
/// # Examples
///
/// ```
/// assert_eq!(pathstr::SEPARATOR, '/');
/// ```
pub const SEPARATOR: char = '/';
