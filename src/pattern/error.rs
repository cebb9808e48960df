// Tue Jan 13 2026 - Alex

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    Range,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("Pattern size did not match mask size: {pattern} != {mask}")]
    LengthMismatch { pattern: usize, mask: usize },
    #[error("Unable to find unused byte value in the provided pattern")]
    NoUnusedByte,
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

impl PatternError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NoUnusedByte => ErrorKind::Range,
            Self::LengthMismatch { .. } | Self::InvalidPattern(_) | Self::InvalidConfig(_) => {
                ErrorKind::InvalidArgument
            }
        }
    }
}
