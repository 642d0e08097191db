//! Error types for working with converted documents.
//!
//! The conversion itself is total: [`crate::build`] accepts any sequence of
//! string pairs and always produces a document, so no error variant exists for
//! it. Errors arise only afterwards, when extracting typed values out of a
//! [`crate::Value`] tree.
//!
//! ## Examples
//!
//! ```rust
//! use props2json::Value;
//! use std::convert::TryFrom;
//!
//! let value = Value::from("not a number");
//! let result = i64::try_from(value);
//! assert!(result.is_err());
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors produced by this crate.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// A typed extraction found a value of the wrong kind
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    /// Custom error
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Creates a type mismatch error for a failed typed extraction.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use props2json::Error;
    ///
    /// let err = Error::type_mismatch("integer", "string");
    /// assert!(err.to_string().contains("expected integer"));
    /// ```
    pub fn type_mismatch(expected: &str, found: &str) -> Self {
        Error::TypeMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use props2json::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
