//! Source annotation for embedded templates
//!
//! This crate tracks where templates embedded in host files begin and
//! annotates parser-reported nodes with their absolute source positions.
//! Template parsing itself is delegated to an external preprocessor behind
//! the [`TemplateExtractor`] trait; this crate owns everything around it.
//!
//! # Architecture
//!
//! The engine is organized around these key types:
//!
//! - [`ParseCache`] - Per-file cache of decoded text and extracted regions,
//!   invalidated by modification time
//! - [`Region`] - One embedded template's contents and byte content-range
//! - [`SourcePass`] - Per-file annotation pass turning parser spans into
//!   `data-source-*` attribute values
//!
//! # Example
//!
//! ```ignore
//! use tangle_core::{ParseCache, SourcePass};
//! use tangle_source_map::TemplateSpan;
//!
//! let mut cache = ParseCache::new(Box::new(extractor));
//! let mut pass = SourcePass::begin(&mut cache, "/app/components/hi.gjs", project_root)?;
//!
//! // For each node the host traversal visits:
//! if let Some(annotation) = pass.annotate(span, node_unit_source)? {
//!     // attach annotation.attrs to the node
//! }
//! ```

pub mod annotate;
pub mod cache;
pub mod error;
pub mod extractor;
pub mod matcher;
pub mod paths;
pub mod region;

// Re-export commonly used types
pub use annotate::{
    Annotation, SOURCE_COLUMN_ATTR, SOURCE_FILE_ATTR, SOURCE_LINE_ATTR, SourceAttrs, SourcePass,
};
pub use cache::ParseCache;
pub use error::{Result, TangleError};
pub use extractor::TemplateExtractor;
pub use matcher::match_region;
pub use paths::project_relative;
pub use region::{ContentRange, Region};
