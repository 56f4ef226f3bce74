//! Error types for reading JSON input and producing XML output.
//!
//! The transcoder itself is total over [`Value`](crate::Value): every value
//! kind has a defined XML mapping, so conversion never fails. Errors only
//! arise at the edges:
//!
//! - **Parse errors**: malformed or empty JSON text
//! - **Fetch errors**: a remote JSON source failed or answered with a non-2xx status
//! - **File read errors**: a local JSON file could not be read or parsed
//! - **Malformed XML**: the pretty-printer was handed text that is not well-formed
//! - **Conversion errors**: anything unexpected while formatting output
//!
//! ## Examples
//!
//! ```rust
//! use json2xml::{from_str, Error};
//!
//! let result = from_str("{\"broken\": ");
//! assert!(matches!(result, Err(Error::Parse(_))));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents every failure the crate can report.
///
/// Payloads are plain strings so the error stays `Clone`.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// Malformed or empty JSON text
    #[error("input is not a proper JSON string: {0}")]
    Parse(String),

    /// Remote JSON could not be fetched or decoded
    #[error("URL is not returning correct response: {0}")]
    Fetch(String),

    /// Local JSON file could not be read or decoded
    #[error("invalid JSON file {path}: {msg}")]
    FileRead { path: String, msg: String },

    /// Input handed to the pretty-printer is not well-formed XML
    #[error("malformed XML: {0}")]
    MalformedXml(String),

    /// Unexpected failure while producing output
    #[error("invalid data: {0}")]
    Conversion(String),

    /// IO error while writing output
    #[error("IO error: {0}")]
    Io(String),

    /// Custom error raised through serde
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a parse error for malformed JSON text.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json2xml::Error;
    ///
    /// let err = Error::parse("EOF while parsing an object");
    /// assert!(err.to_string().contains("not a proper JSON string"));
    /// ```
    pub fn parse<T: fmt::Display>(msg: T) -> Self {
        Error::Parse(msg.to_string())
    }

    /// Creates a fetch error for remote JSON sources.
    pub fn fetch<T: fmt::Display>(msg: T) -> Self {
        Error::Fetch(msg.to_string())
    }

    /// Creates a file read error naming the offending path.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json2xml::Error;
    ///
    /// let err = Error::file_read("data.json", "No such file or directory");
    /// assert!(err.to_string().contains("data.json"));
    /// ```
    pub fn file_read<P: fmt::Display, T: fmt::Display>(path: P, msg: T) -> Self {
        Error::FileRead {
            path: path.to_string(),
            msg: msg.to_string(),
        }
    }

    /// Creates a malformed XML error (pretty-printer input).
    pub fn malformed_xml<T: fmt::Display>(msg: T) -> Self {
        Error::MalformedXml(msg.to_string())
    }

    /// Creates a conversion error.
    pub fn conversion<T: fmt::Display>(msg: T) -> Self {
        Error::Conversion(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
