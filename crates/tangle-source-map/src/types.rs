//! Core types for template coordinate remapping

use serde::{Deserialize, Serialize};

/// A span reported by the template parser, relative to one template's own text.
///
/// Lines are 1-indexed and columns are 0-indexed, counted in characters
/// rather than bytes. Editors typically display 1-indexed columns, so a
/// position compared against an editor will look one column off; the +1
/// belongs to whoever emits a human-facing value, not to these types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateSpan {
    /// Start line (1-indexed)
    pub line: usize,
    /// Start column (0-indexed, in characters)
    pub column: usize,
    /// End line (1-indexed)
    pub end_line: usize,
    /// End column (0-indexed, in characters)
    pub end_column: usize,
}

/// A span translated into host-file coordinates.
///
/// Same indexing convention as [`TemplateSpan`]: 1-indexed lines,
/// 0-indexed character columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSpan {
    /// Start line (1-indexed)
    pub line: usize,
    /// Start column (0-indexed, in characters)
    pub column: usize,
    /// End line (1-indexed)
    pub end_line: usize,
    /// End column (0-indexed, in characters)
    pub end_column: usize,
}

/// The file-relative position of a template's first content character.
///
/// Derived from the template's byte content-range; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Anchor {
    /// Line of the first content character (1-indexed)
    pub line: usize,
    /// Column of the first content character (0-indexed, in characters)
    pub column: usize,
}
