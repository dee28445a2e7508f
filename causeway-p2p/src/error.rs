//! P2P error types.

use std::io;
use thiserror::Error;

/// P2P-specific errors.
#[derive(Debug, Error)]
pub enum P2pError {
    /// I/O error during network operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Invalid network magic bytes.
    #[error("Invalid network magic: expected {expected:?}, got {actual:?}")]
    InvalidMagic { expected: [u8; 4], actual: [u8; 4] },

    /// Header failed validation for a reason other than magic or size.
    #[error("Invalid message header: command {command:?}")]
    InvalidHeader { command: String },

    /// Message exceeds maximum allowed size.
    #[error("Message too large: {size} bytes (max: {max})")]
    MessageTooLarge { size: usize, max: usize },

    /// Command token does not fit the fixed-width header field.
    #[error("Command too long: {0:?}")]
    CommandTooLong(String),
}

/// Result type for P2P operations.
pub type P2pResult<T> = Result<T, P2pError>;
