use thiserror::Error;

/// Errors raised while converting between coordinates, indices and masks
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BitboardError {
    #[error("invalid coordinate {0:?}: expected a file a-h followed by a rank 1-8")]
    InvalidCoordinate(String),

    #[error("square index {0} is out of range, must be 0-63")]
    IndexOutOfRange(u32),

    #[error("unknown starting mask {0:?}")]
    UnknownMask(String),
}
