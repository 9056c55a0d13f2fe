use std::fmt;

/// Board renderer construction error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoardError {
    /// A grid dimension was zero.
    InvalidDimension { xrows: usize, yrows: usize },
    /// The viewport is not square (or is empty), so cells could not be square.
    AspectMismatch { width: f32, height: f32 },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidDimension { xrows, yrows } => {
                write!(f, "invalid board dimensions {xrows}x{yrows}: both must be positive")
            }
            BoardError::AspectMismatch { width, height } => {
                write!(f, "viewport {width}x{height} must be square and non-empty")
            }
        }
    }
}

impl std::error::Error for BoardError {}
