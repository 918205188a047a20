//! Error types for OxiBWT operations.
//!
//! Every failure is scoped to a single call: errors are detected before any
//! work is done and returned to the caller, never recovered or logged away.

use std::io;
use thiserror::Error;

/// The main error type for OxiBWT operations.
#[derive(Debug, Error)]
pub enum BwtError {
    /// The input cannot be processed by the requested operation
    /// (sentinel inside a forward input, empty inverse input).
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Description of the problem.
        message: String,
    },

    /// The sequence handed to the inverse transform is not a valid
    /// Burrows-Wheeler output.
    #[error("Malformed transform: {message}")]
    MalformedTransform {
        /// Description of the problem.
        message: String,
    },

    /// A symbol lies outside the configured alphabet.
    #[error("Symbol {symbol:#04x} at position {position} is outside the alphabet")]
    EncodingError {
        /// The offending symbol.
        symbol: u8,
        /// Position of the symbol in the input.
        position: usize,
    },

    /// I/O error while reading sequences from an external source.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for OxiBWT operations.
pub type Result<T> = std::result::Result<T, BwtError>;

impl BwtError {
    /// Create an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create a malformed transform error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedTransform {
            message: message.into(),
        }
    }

    /// Create an encoding error.
    pub fn encoding(symbol: u8, position: usize) -> Self {
        Self::EncodingError { symbol, position }
    }

    /// Whether this error was caused by the caller's input rather than I/O.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, Self::Io(_))
    }
}
