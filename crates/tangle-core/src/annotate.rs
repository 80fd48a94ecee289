/*
 * annotate.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Per-file annotation pass: parser spans to source-position attributes.
 */

//! Per-file annotation pass: parser spans to source-position attributes.
//!
//! A [`SourcePass`] covers one traversal of one file by the host build
//! tool. For each node the traversal visits, [`SourcePass::annotate`]
//! matches the node's originating unit to a region, resolves the region's
//! anchor, remaps the node's span into file coordinates, and produces the
//! attribute values the host attaches to the rendered element.
//!
//! Consumption bookkeeping stays with the caller: it knows when the last
//! element of a unit has been visited, and signals that through
//! [`SourcePass::retire_region`] so a later identical-content region can
//! match.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tangle_source_map::{TemplateSpan, anchor_in_str, remap};

use crate::cache::ParseCache;
use crate::error::Result;
use crate::matcher::match_region;
use crate::paths::project_relative;

/// Attribute name for the project-relative source path.
pub const SOURCE_FILE_ATTR: &str = "data-source-file";
/// Attribute name for the 1-indexed source line.
pub const SOURCE_LINE_ATTR: &str = "data-source-line";
/// Attribute name for the 1-indexed source column.
pub const SOURCE_COLUMN_ATTR: &str = "data-source-column";

/// Attribute values for one annotated element.
///
/// `line` is 1-indexed as-is; `column` is the internal 0-indexed column
/// plus one, since the attributes are read by people comparing against
/// their editor. Both are stringified for direct attribute emission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceAttrs {
    /// Value for [`SOURCE_FILE_ATTR`]
    pub file: String,
    /// Value for [`SOURCE_LINE_ATTR`]
    pub line: String,
    /// Value for [`SOURCE_COLUMN_ATTR`]
    pub column: String,
}

/// A successful annotation: the attributes plus which region matched.
///
/// The region index feeds the caller's per-region element worklist; once
/// that worklist drains, the caller passes the index back through
/// [`SourcePass::retire_region`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    /// Attribute values to attach to the element
    pub attrs: SourceAttrs,
    /// Index of the matched region within the file's region list
    pub region: usize,
}

/// One file's annotation pass over a shared [`ParseCache`].
#[derive(Debug)]
pub struct SourcePass<'a> {
    cache: &'a mut ParseCache,
    path: PathBuf,
    display_path: String,
    expected_regions: usize,
}

impl<'a> SourcePass<'a> {
    /// Start a pass over `path`, loading its text and regions.
    ///
    /// `project_root` only shapes the emitted source-file attribute; it is
    /// not used to decide whether the file is processed.
    pub fn begin(
        cache: &'a mut ParseCache,
        path: impl Into<PathBuf>,
        project_root: &Path,
    ) -> Result<Self> {
        let path = path.into();
        let expected_regions = cache.regions(&path)?.len();
        let display_path = project_relative(&path, project_root);

        tracing::debug!(
            path = %display_path,
            regions = expected_regions,
            "starting annotation pass"
        );

        Ok(SourcePass {
            cache,
            path,
            display_path,
            expected_regions,
        })
    }

    /// Number of regions the preprocessor found in this file.
    pub fn expected_regions(&self) -> usize {
        self.expected_regions
    }

    /// Annotate one node.
    ///
    /// `span` is the node's position relative to its template's own text;
    /// `unit_source` is the parser's back-reference to the source text of
    /// the unit the node came from. Returns `Ok(None)` when the file has no
    /// regions or no region matches — the node is left unannotated and the
    /// traversal continues.
    pub fn annotate(
        &mut self,
        span: TemplateSpan,
        unit_source: &str,
    ) -> Result<Option<Annotation>> {
        if self.expected_regions == 0 {
            return Ok(None);
        }

        let regions = self.cache.regions(&self.path)?;
        let Some(region) = match_region(regions, unit_source) else {
            tracing::debug!(path = %self.display_path, "no region matches node unit, skipping");
            return Ok(None);
        };
        let content_start = regions[region].content_range.start_byte;

        let text = self.cache.file_text(&self.path)?;
        let anchor = anchor_in_str(text, content_start)?;
        let mapped = remap(anchor, span);

        Ok(Some(Annotation {
            attrs: SourceAttrs {
                file: self.display_path.clone(),
                line: mapped.line.to_string(),
                column: (mapped.column + 1).to_string(),
            },
            region,
        }))
    }

    /// Mark a region as fully consumed.
    ///
    /// Called by the traversal once every element of the region's unit has
    /// been visited. Single-region files are left alone: with nothing else
    /// to disambiguate, clearing would only force a pointless re-extract.
    pub fn retire_region(&mut self, region: usize) {
        if self.expected_regions > 1 {
            self.cache.clear_region(&self.path, region);
        }
    }
}
