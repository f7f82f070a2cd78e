//! Property-based tests across the whole path algebra.
//!
//! Note: the individual modules already carry inline property tests for
//! their own functions. This suite covers the cross-function invariants —
//! round-tripping, complementarity, and classification totality — at a
//! raised case count.

use crate::classify::{is_absolute, is_relative};
use crate::compose::{join, PathElements};
use crate::decompose::{basename, basename_without_ext, dirname, extname, split};
use proptest::prelude::*;

// Strategy for generating separator-free, dot-free path components
fn component_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,20}"
}

// Final components with an optional extension, e.g. "data" or "data.gz"
fn filename_strategy() -> impl Strategy<Value = String> {
    (component_strategy(), prop::option::of("[a-z0-9]{1,5}")).prop_map(|(stem, ext)| match ext {
        Some(ext) => format!("{stem}.{ext}"),
        None => stem,
    })
}

// Paths with single separators and no trailing separator; optionally rooted
fn clean_path_strategy() -> impl Strategy<Value = String> {
    (
        any::<bool>(),
        prop::collection::vec(component_strategy(), 0..6),
        filename_strategy(),
    )
        .prop_map(|(rooted, dirs, filename)| {
            let mut parts = dirs;
            parts.push(filename);
            let body = parts.join("/");
            if rooted {
                format!("/{body}")
            } else {
                body
            }
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Splitting and rejoining a clean path reproduces it exactly
    #[test]
    fn join_split_round_trip(path in clean_path_strategy()) {
        let rebuilt = join(&split(&path));
        prop_assert_eq!(rebuilt, path);
    }

    // split output never contains a component with an embedded separator
    #[test]
    fn split_components_are_atomic(path in "[a-z0-9/._-]{0,40}") {
        for component in split(&path) {
            prop_assert!(component == "/" || !component.contains('/'));
        }
    }

    // dirname + separator + basename reconstructs any clean path
    #[test]
    fn dirname_basename_reconstruct(path in clean_path_strategy()) {
        if !path.contains('/') {
            // No parent to reconstruct from
            prop_assert_eq!(dirname(&path), "");
            return Ok(());
        }

        let dir = dirname(&path);
        let base = basename(&path);
        let rebuilt = if dir.ends_with('/') {
            format!("{dir}{base}")
        } else {
            format!("{dir}/{base}")
        };
        prop_assert_eq!(rebuilt, path);
    }

    // An extension reported by extname strips cleanly via basename_without_ext
    #[test]
    fn extname_strips_consistently(path in clean_path_strategy()) {
        if let Some(ext) = extname(&path) {
            let full = basename(&path);
            let stripped = basename_without_ext(&path, ext);
            prop_assert_eq!(format!("{stripped}.{ext}"), full);
        }
    }

    // Classification is total and mutually exclusive for every string
    #[test]
    fn classification_total(path in ".{0,40}") {
        prop_assert_eq!(is_absolute(&path), !is_relative(&path));
    }

    // format never produces doubled separators from clean elements
    #[test]
    fn format_no_doubled_separators(
        dir in component_strategy(),
        base in component_strategy(),
        ext in "[a-z0-9]{1,5}",
    ) {
        let elements = PathElements::new()
            .with_dir(dir)
            .with_base(base)
            .with_ext(ext);
        prop_assert!(!crate::compose::format(&elements).contains("//"));
    }

    // format output round-trips through decomposition for clean elements
    #[test]
    fn format_decomposes_back(
        dir in component_strategy(),
        stem in component_strategy(),
        ext in "[a-z0-9]{1,5}",
    ) {
        let elements = PathElements::new()
            .with_dir(dir.clone())
            .with_base(stem.clone())
            .with_ext(ext.clone());
        let path = crate::compose::format(&elements);

        prop_assert_eq!(dirname(&path), dir.as_str());
        prop_assert_eq!(extname(&path), Some(ext.as_str()));
        prop_assert_eq!(basename_without_ext(&path, &ext), stem.as_str());
    }
}
