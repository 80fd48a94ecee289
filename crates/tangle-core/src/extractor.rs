/*
 * extractor.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Seam to the external template preprocessor.
 */

//! Seam to the external template preprocessor.
//!
//! Template parsing is not this crate's job. The host build tool brings a
//! preprocessor that knows the embedding syntax; the engine only requires
//! that it behaves as a pure function from file text to regions.

use crate::region::Region;

/// Extracts embedded template regions from host-file text.
///
/// Implementations must return regions in document order and must be pure:
/// the same source yields the same regions. The cache relies on this to
/// re-extract from cached text without consulting the preprocessor's own
/// state.
pub trait TemplateExtractor {
    /// Extract every embedded template from `source`.
    ///
    /// A file with no embedded templates yields an empty vector; that is a
    /// normal outcome, not an error.
    fn extract(&self, source: &str) -> Vec<Region>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::ContentRange;

    struct FixedExtractor;

    impl TemplateExtractor for FixedExtractor {
        fn extract(&self, source: &str) -> Vec<Region> {
            if source.is_empty() {
                Vec::new()
            } else {
                vec![Region::new(
                    source,
                    ContentRange {
                        start_byte: 0,
                        end_byte: source.len() - 1,
                    },
                )]
            }
        }
    }

    #[test]
    fn test_trait_object_dispatch() {
        let extractor: Box<dyn TemplateExtractor> = Box::new(FixedExtractor);
        let regions = extractor.extract("abc");
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].contents(), "abc");
    }

    #[test]
    fn test_no_templates_is_empty() {
        let extractor: Box<dyn TemplateExtractor> = Box::new(FixedExtractor);
        assert!(extractor.extract("").is_empty());
    }
}
