//! Error types for tangle-core

use tangle_source_map::AnchorError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TangleError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("anchor resolution failed: {0}")]
    Anchor(#[from] AnchorError),
}

pub type Result<T> = std::result::Result<T, TangleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: TangleError = io_err.into();
        assert!(matches!(err, TangleError::Io(_)));
    }

    #[test]
    fn test_anchor_error_conversion() {
        let err: TangleError = AnchorError::OutOfBounds { offset: 9, len: 3 }.into();
        let msg = format!("{}", err);
        assert!(msg.contains("anchor resolution failed"));
        assert!(msg.contains('9'));
    }
}
