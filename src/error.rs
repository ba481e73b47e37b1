// std imports
use std::io;

// third-party imports
use config::ConfigError;
use thiserror::Error;

/// Error is an error which may occur in the application.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("failed to load configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    InvalidPattern(#[from] InvalidPatternError),
    #[error("file {filename:?} not found")]
    FileNotFound { filename: String },
}

impl Error {
    /// Returns true if the error is caused by the reader of our output going away.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::Io(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }
}

/// InvalidPatternError is an error which occurs when a search pattern is empty or blank.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Pattern format: '<pattern>' {pattern:?}")]
pub struct InvalidPatternError {
    pub pattern: String,
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests;
