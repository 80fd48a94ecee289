//! Coordinate remapping for embedded templates
//!
//! This crate converts positions reported by a template parser (relative to
//! one embedded template's own text) into absolute positions in the host
//! file. It accounts for byte-vs-character offset mismatches and for the
//! column correction that only applies on a template's first line.
//!
//! # Overview
//!
//! The core types are:
//! - [`Anchor`]: The file-relative position of a template's first content character
//! - [`TemplateSpan`]: A parser-reported span, relative to the template's own text
//! - [`FileSpan`]: The same span translated into host-file coordinates
//!
//! # Example
//!
//! ```rust
//! use tangle_source_map::{anchor_at, remap, TemplateSpan};
//!
//! let source = b"class C {\n  <template>\n    <div>Hi</div>\n  </template>\n}";
//!
//! // The template's inner content starts right after `<template>`.
//! let anchor = anchor_at(source, 22).unwrap();
//! assert_eq!(anchor.line, 2);
//! assert_eq!(anchor.column, 12);
//!
//! // The parser reports the <div> element relative to the template text.
//! let span = TemplateSpan {
//!     line: 2,
//!     column: 4,
//!     end_line: 2,
//!     end_column: 17,
//! };
//! let mapped = remap(anchor, span);
//! assert_eq!(mapped.line, 3);
//! assert_eq!(mapped.column, 4);
//! ```

pub mod anchor;
pub mod remap;
pub mod types;

// Re-export main types
pub use anchor::{AnchorError, anchor_at, anchor_in_str};
pub use remap::remap;
pub use types::{Anchor, FileSpan, TemplateSpan};
