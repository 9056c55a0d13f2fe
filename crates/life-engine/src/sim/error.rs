use std::fmt;

/// Engine construction error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimError {
    /// A grid dimension was zero.
    InvalidDimension { xrows: usize, yrows: usize },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::InvalidDimension { xrows, yrows } => {
                write!(f, "invalid grid dimensions {xrows}x{yrows}: both must be positive")
            }
        }
    }
}

impl std::error::Error for SimError {}
