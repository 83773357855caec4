//! Error types for JSON parsing and value conversion.
//!
//! The comparison engine itself is total: given two [`Value`](crate::Value)
//! trees and a [`DiffOptions`](crate::DiffOptions) record it always produces
//! an edit list and never fails. Errors only arise at the boundaries:
//!
//! - **Parse errors**: input text is not valid JSON (with line/column)
//! - **I/O errors**: reading from a `Read` source failed
//! - **Conversion errors**: a Rust value could not be represented as JSON
//!
//! ## Examples
//!
//! ```rust
//! use json_deep_diff::{from_str, Error, Value};
//!
//! let result: Result<Value, Error> = from_str("{\"unterminated\": ");
//! assert!(result.is_err());
//!
//! if let Err(err) = result {
//!     eprintln!("Parse error: {}", err);
//!     // Error messages include line and column information
//! }
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors this crate can produce.
///
/// [`Error::Parse`] is the only kind the diff entry points surface; the
/// remaining variants belong to the I/O and serializer seams.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// Input text was not valid JSON
    #[error("invalid JSON at line {line}, column {column}: {message}")]
    Parse {
        line: usize,
        column: usize,
        message: String,
    },

    /// IO error while reading input
    #[error("IO error: {0}")]
    Io(String),

    /// Generic message (conversion failures, serializer seam)
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates a parse error with line and column information.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_deep_diff::Error;
    ///
    /// let err = Error::parse(3, 14, "expected `,` or `}`");
    /// assert!(err.to_string().contains("line 3"));
    /// ```
    pub fn parse(line: usize, column: usize, message: &str) -> Self {
        Error::Parse {
            line,
            column,
            message: message.to_string(),
        }
    }

    /// Creates an I/O error for reader failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates a generic error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_deep_diff::Error;
    ///
    /// let err = Error::custom("map keys must be strings");
    /// assert!(err.to_string().contains("map keys"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            Error::Io(err.to_string())
        } else {
            Error::Parse {
                line: err.line(),
                column: err.column(),
                message: err.to_string(),
            }
        }
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
