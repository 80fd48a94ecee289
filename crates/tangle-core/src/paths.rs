/*
 * paths.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Display paths for emitted source attributes.
 */

//! Display paths for emitted source attributes.

use std::path::Path;

/// Project-relative display form of `path` for the source-file attribute.
///
/// Strips the project root prefix, keeping the separator that follows it,
/// so `/work/app/components/hi.gjs` under root `/work/app` becomes
/// `/components/hi.gjs`. Paths outside the root are returned unchanged;
/// which files get annotated at all is the host build tool's decision, not
/// this crate's.
pub fn project_relative(path: &Path, project_root: &Path) -> String {
    let path = path.to_string_lossy();
    let root = project_root.to_string_lossy();

    match path.strip_prefix(root.as_ref()) {
        Some(rest) if !rest.is_empty() => rest.to_string(),
        _ => path.into_owned(),
    }
}
