//! Configuration options for the properties-to-document conversion.
//!
//! This module provides [`Options`], the two flags recognized by the converter:
//!
//! - `raw-data`: suppress type inference, every value stays a string
//! - `hierarchical`: split keys on `.` and build nested objects
//!
//! Both default to `false`, so the default conversion is flat and typed.
//!
//! ## Examples
//!
//! ```rust
//! use props2json::{to_document, Options};
//!
//! let pairs = vec![("server.port".to_string(), "8080".to_string())];
//!
//! // Nested objects from dotted keys
//! let options = Options::new().with_hierarchical(true);
//! let doc = to_document(pairs.clone(), &options);
//!
//! // Verbatim string values
//! let options = Options::new().with_raw_data(true);
//! let doc = to_document(pairs, &options);
//! ```
//!
//! `Options` also deserializes from the wire-level option object used by
//! configuration stores, where the keys are kebab-cased and optional:
//!
//! ```rust
//! use props2json::Options;
//!
//! let options: Options = serde_json::from_str(r#"{"raw-data": true}"#).unwrap();
//! assert!(options.raw_data);
//! assert!(!options.hierarchical);
//! ```

use serde::{Deserialize, Serialize};

/// Conversion options for building a document from property pairs.
///
/// # Examples
///
/// ```rust
/// use props2json::Options;
///
/// // Defaults: flat structure, typed scalars
/// let options = Options::new();
/// assert!(!options.raw_data);
/// assert!(!options.hierarchical);
///
/// // Custom configuration
/// let options = Options::new()
///     .with_raw_data(true)
///     .with_hierarchical(true);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Options {
    /// When `true`, every value is kept as its original string and no
    /// boolean/number inference is attempted.
    pub raw_data: bool,
    /// When `true`, dot-separated key segments become nested objects instead
    /// of one flat key.
    pub hierarchical: bool,
}

impl Options {
    /// Creates default options (flat structure, typed scalars).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use props2json::Options;
    ///
    /// let options = Options::new();
    /// assert!(!options.raw_data);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether values are kept as verbatim strings.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use props2json::Options;
    ///
    /// let options = Options::new().with_raw_data(true);
    /// assert!(options.raw_data);
    /// ```
    #[must_use]
    pub fn with_raw_data(mut self, raw_data: bool) -> Self {
        self.raw_data = raw_data;
        self
    }

    /// Sets whether dotted keys are expanded into nested objects.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use props2json::Options;
    ///
    /// let options = Options::new().with_hierarchical(true);
    /// assert!(options.hierarchical);
    /// ```
    #[must_use]
    pub fn with_hierarchical(mut self, hierarchical: bool) -> Self {
        self.hierarchical = hierarchical;
        self
    }
}
