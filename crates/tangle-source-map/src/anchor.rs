//! Anchor resolution: locating a template's first content character
//!
//! Given the full file text and the byte offset where an embedded template's
//! inner content begins, compute the 1-indexed line and 0-indexed column of
//! that position within the file.

use crate::types::Anchor;
use thiserror::Error;

/// Errors from anchor resolution.
///
/// These are the only runtime-checked input validations in the engine;
/// everything downstream is pure arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnchorError {
    /// The content-start offset points past the end of the source, or is not
    /// a character boundary of the decoded text.
    #[error("content start {offset} is not a valid position in a {len}-byte source")]
    OutOfBounds {
        /// The offending content-start offset
        offset: usize,
        /// Length of the source in bytes
        len: usize,
    },

    /// The bytes preceding the content start are not valid UTF-8.
    #[error("source is not valid UTF-8 (decodable up to byte {valid_up_to})")]
    InvalidUtf8 {
        /// Number of bytes that decoded cleanly before the failure
        valid_up_to: usize,
    },
}

/// Resolve the anchor of a template whose inner content starts at
/// `content_start` bytes into `source`.
///
/// Decodes the byte prefix `[0, content_start)` as UTF-8 and counts the
/// lines it spans. Columns are measured in characters of the last line
/// fragment, so multi-byte characters count as a single column unit.
///
/// Content starting at byte 0 anchors at line 1, column 0.
///
/// # Example
///
/// ```
/// use tangle_source_map::anchor_at;
///
/// let anchor = anchor_at(b"one\ntwo <template>inner", 18).unwrap();
/// assert_eq!(anchor.line, 2);
/// assert_eq!(anchor.column, 14);
/// ```
pub fn anchor_at(source: &[u8], content_start: usize) -> Result<Anchor, AnchorError> {
    let prefix = source
        .get(..content_start)
        .ok_or(AnchorError::OutOfBounds {
            offset: content_start,
            len: source.len(),
        })?;

    let prefix = std::str::from_utf8(prefix).map_err(|e| AnchorError::InvalidUtf8 {
        valid_up_to: e.valid_up_to(),
    })?;

    Ok(anchor_of_prefix(prefix))
}

/// Resolve an anchor from already-decoded text.
///
/// Same contract as [`anchor_at`]; `content_start` is still a byte offset
/// and must fall on a character boundary.
pub fn anchor_in_str(source: &str, content_start: usize) -> Result<Anchor, AnchorError> {
    let prefix = source
        .get(..content_start)
        .ok_or(AnchorError::OutOfBounds {
            offset: content_start,
            len: source.len(),
        })?;

    Ok(anchor_of_prefix(prefix))
}

fn anchor_of_prefix(prefix: &str) -> Anchor {
    let mut fragments = prefix.split('\n');
    // split always yields at least one fragment, even for an empty prefix
    let last = fragments.next_back().unwrap_or("");

    Anchor {
        line: fragments.count() + 1,
        column: last.chars().count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_at_byte_zero() {
        let anchor = anchor_at(b"<div></div>", 0).unwrap();
        assert_eq!(anchor.line, 1);
        assert_eq!(anchor.column, 0);
    }

    #[test]
    fn test_empty_source() {
        let anchor = anchor_at(b"", 0).unwrap();
        assert_eq!(anchor.line, 1);
        assert_eq!(anchor.column, 0);
    }

    #[test]
    fn test_single_line_prefix() {
        // 14 characters before the content start, no newlines
        let anchor = anchor_at(b"let x = tag! {content}", 14).unwrap();
        assert_eq!(anchor.line, 1);
        assert_eq!(anchor.column, 14);
    }

    #[test]
    fn test_line_is_newline_count_plus_one() {
        let source = b"a\nb\nc\nd content";
        // 3 newlines precede offset 6, so the anchor is on line 4
        let anchor = anchor_at(source, 6).unwrap();
        assert_eq!(anchor.line, 4);
        assert_eq!(anchor.column, 0);
    }

    #[test]
    fn test_prefix_ending_in_newline() {
        let anchor = anchor_at(b"line one\n", 9).unwrap();
        assert_eq!(anchor.line, 2);
        assert_eq!(anchor.column, 0);
    }

    #[test]
    fn test_multibyte_characters_count_once() {
        // "café " is 6 bytes but 5 characters
        let source = "café <template>x".as_bytes();
        let anchor = anchor_at(source, 16).unwrap();
        assert_eq!(anchor.line, 1);
        assert_eq!(anchor.column, 15);
    }

    #[test]
    fn test_multibyte_on_earlier_line() {
        // Multi-byte characters on earlier lines must not affect the column
        let source = "// café résumé\nlet t = <t>x".as_bytes();
        let content_start = source.len() - 1;
        let anchor = anchor_at(source, content_start).unwrap();
        assert_eq!(anchor.line, 2);
        assert_eq!(anchor.column, 11);
    }

    #[test]
    fn test_out_of_bounds_offset() {
        let err = anchor_at(b"short", 99).unwrap_err();
        assert_eq!(err, AnchorError::OutOfBounds { offset: 99, len: 5 });
    }

    #[test]
    fn test_invalid_utf8_prefix() {
        let source = [b'o', b'k', 0xff, 0xfe, b'x'];
        let err = anchor_at(&source, 4).unwrap_err();
        assert_eq!(err, AnchorError::InvalidUtf8 { valid_up_to: 2 });
    }

    #[test]
    fn test_invalid_utf8_after_content_start_is_ignored() {
        let source = [b'a', b'\n', b'b', 0xff, 0xfe];
        let anchor = anchor_at(&source, 2).unwrap();
        assert_eq!(anchor.line, 2);
        assert_eq!(anchor.column, 0);
    }

    #[test]
    fn test_anchor_in_str_matches_byte_version() {
        let source = "one\ntwo <template>inner";
        let from_str = anchor_in_str(source, 18).unwrap();
        let from_bytes = anchor_at(source.as_bytes(), 18).unwrap();
        assert_eq!(from_str, from_bytes);
    }

    #[test]
    fn test_anchor_in_str_rejects_non_boundary_offset() {
        // Offset 1 lands inside the two-byte 'é'
        let err = anchor_in_str("é", 1).unwrap_err();
        assert_eq!(err, AnchorError::OutOfBounds { offset: 1, len: 2 });
    }
}
