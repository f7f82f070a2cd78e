//! Path decomposition functions.
//!
//! This module takes path strings apart:
//! - [`split`] breaks a path into its ordered components
//! - [`basename`] and [`basename_without_ext`] isolate the final component
//! - [`dirname`] isolates the parent directory portion
//! - [`extname`] isolates the extension of the final component
//!
//! Every function is total over arbitrary strings and returns borrowed
//! slices of its input where the result is a substring. The separator `/`
//! and the extension marker `.` are single-byte scalars, so slicing at
//! their byte offsets never lands inside a multi-byte character.

/// Returns all components of a given path.
///
/// A leading `/` is preserved as a standalone root marker at the start of
/// the result, and a trailing `/` (on paths longer than one character) as a
/// standalone marker at the end. Empty segments produced by consecutive
/// separators are discarded.
///
/// # Examples
///
/// ```
/// use pathstr::split;
///
/// assert_eq!(
///     split("/storage/images/0001.jpg"),
///     vec!["/", "storage", "images", "0001.jpg"]
/// );
/// assert_eq!(split("/"), vec!["/"]);
/// assert_eq!(split(""), Vec::<&str>::new());
/// ```
#[must_use]
pub fn split(path: &str) -> Vec<&str> {
    let mut result = Vec::new();

    if path.starts_with('/') {
        result.push("/");
    }

    result.extend(path.split('/').filter(|segment| !segment.is_empty()));

    if path.len() > 1 && path.ends_with('/') {
        result.push("/");
    }

    result
}

/// Returns the last component (base name) of the given path.
///
/// When the path contains no separator, the whole path is its own base
/// name. A path ending in a separator has an empty base name.
///
/// # Examples
///
/// ```
/// use pathstr::basename;
///
/// assert_eq!(basename("/var/home/user/readme.txt"), "readme.txt");
/// assert_eq!(basename("readme.txt"), "readme.txt");
/// assert_eq!(basename(""), "");
/// ```
#[must_use]
pub fn basename(path: &str) -> &str {
    final_component(path)
}

/// Returns the base name of the path with an expected extension removed.
///
/// The comparison value carries no leading dot and is matched exactly,
/// case-sensitively, against the component's actual extension. On a match
/// the extension and its preceding dot are stripped; otherwise the full
/// final component is returned unchanged.
///
/// # Examples
///
/// ```
/// use pathstr::basename_without_ext;
///
/// assert_eq!(basename_without_ext("data/readme.txt", "txt"), "readme");
/// assert_eq!(basename_without_ext("data/readme.txt", "md"), "readme.txt");
/// ```
#[must_use]
pub fn basename_without_ext<'a>(path: &'a str, ext: &str) -> &'a str {
    let base = final_component(path);

    if extname(base) == Some(ext) {
        if let Some(boundary) = extension_boundary(base) {
            return &base[..boundary];
        }
    }

    base
}

/// Returns the parent directory of a path.
///
/// A path without any separator has no parent and yields the empty string.
/// When the only separator is the leading one, or the path is exactly the
/// root, the parent is the root itself.
///
/// # Examples
///
/// ```
/// use pathstr::dirname;
///
/// assert_eq!(dirname("/var/home/user/readme.txt"), "/var/home/user");
/// assert_eq!(dirname("/"), "/");
/// assert_eq!(dirname("/test"), "/");
/// assert_eq!(dirname("test"), "");
/// ```
#[must_use]
pub fn dirname(path: &str) -> &str {
    match path.rfind('/') {
        None => "",
        Some(0) => "/",
        Some(index) => &path[..index],
    }
}

/// Returns the extension of a path, without the period.
///
/// The extension is searched for within the final component only, as the
/// substring after the last `.` that is not the component's first
/// character. A component without such a dot has no extension, and so does
/// a dotfile with a sole leading dot. A trailing dot leaves an empty
/// candidate, which is reported as absent.
///
/// # Examples
///
/// ```
/// use pathstr::extname;
///
/// assert_eq!(extname("data.bin.gz"), Some("gz"));
/// assert_eq!(extname("data"), None);
/// assert_eq!(extname(".bashrc"), None);
/// ```
#[must_use]
pub fn extname(path: &str) -> Option<&str> {
    let name = final_component(path);
    let boundary = extension_boundary(name)?;
    let ext = &name[boundary + 1..];

    if ext.is_empty() {
        None
    } else {
        Some(ext)
    }
}

/// Everything after the last separator, or the whole string without one.
fn final_component(path: &str) -> &str {
    match path.rfind('/') {
        Some(index) => &path[index + 1..],
        None => path,
    }
}

/// Byte offset of the dot introducing the component's extension, if any.
///
/// The component's first character is never a boundary: a dot there marks a
/// dotfile, not an extension.
fn extension_boundary(component: &str) -> Option<usize> {
    let mut chars = component.char_indices();
    chars.next()?;

    let rest = chars.as_str();
    let offset = component.len() - rest.len();

    rest.rfind('.').map(|index| offset + index)
}
