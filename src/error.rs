//! Error types for rubify library.

use std::io;
use thiserror::Error;

/// Result type alias for rubify operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for rubify library.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error while reading the source text or writing the HTML document.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The source text is not valid UTF-8.
    #[error("Text encoding error: {0}")]
    Encoding(String),
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Error::Encoding(err.to_string())
    }
}

impl From<std::str::Utf8Error> for Error {
    fn from(err: std::str::Utf8Error) -> Self {
        Error::Encoding(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_utf8_maps_to_encoding() {
        let err: Error = String::from_utf8(vec![0xE3, 0x81]).unwrap_err().into();
        assert!(matches!(err, Error::Encoding(_)));
        assert!(err.to_string().starts_with("Text encoding error"));
    }

    #[test]
    fn test_io_error_message() {
        let err: Error = io::Error::new(io::ErrorKind::NotFound, "b1.txt").into();
        assert_eq!(err.to_string(), "I/O error: b1.txt");
    }
}
