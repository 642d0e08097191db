//! # props2json
//!
//! Convert parsed `.properties` key/value pairs into a JSON-like document tree.
//!
//! ## What does it do?
//!
//! The classic properties format is flat: one `key=value` per line. Many of
//! those files encode structure in the keys themselves (`server.http.port`),
//! and most values are really numbers or booleans written as text. This crate
//! takes the ordered `(key, value)` pairs a properties parser produces and
//! folds them into a structured document:
//!
//! - **Hierarchical mode** splits keys on `.` and builds nested objects
//! - **Type inference** turns `"true"`/`"8080"`/`"3.5"` into booleans and
//!   numbers (or keeps everything verbatim in raw-data mode)
//!
//! The conversion is a pure function over its input: no I/O, no shared state,
//! and it cannot fail — typing falls back to strings, structural collisions
//! resolve by later-key-wins.
//!
//! ## Scope
//!
//! This crate does not parse the properties grammar itself (escapes, line
//! continuations, `key:value` forms). Pair your favorite properties parser
//! with it, or feed it pairs from any other flat key/value source.
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! props2json = "0.1"
//! ```
//!
//! ### Basic Conversion
//!
//! ```rust
//! use props2json::{to_document, doc, Options};
//!
//! // Pairs as produced by an upstream properties parser, in file order
//! let pairs = vec![
//!     ("server.host".to_string(), "localhost".to_string()),
//!     ("server.port".to_string(), "8080".to_string()),
//!     ("debug".to_string(), "true".to_string()),
//! ];
//!
//! let options = Options::new().with_hierarchical(true);
//! let document = to_document(pairs, &options);
//!
//! assert_eq!(
//!     document,
//!     doc!({
//!         "server": {
//!             "host": "localhost",
//!             "port": 8080
//!         },
//!         "debug": true
//!     })
//! );
//! ```
//!
//! ### Forwarding as JSON
//!
//! The document tree implements [`serde::Serialize`], so handing it to any
//! serde sink works directly:
//!
//! ```rust
//! use props2json::{to_document, Options};
//!
//! let pairs = vec![("n".to_string(), "1".to_string())];
//! let document = to_document(pairs, &Options::new());
//!
//! let json = serde_json::to_string(&document).unwrap();
//! assert_eq!(json, r#"{"n":1}"#);
//! ```
//!
//! ## Examples
//!
//! See the `demos/` directory for runnable examples:
//!
//! - **`flat.rs`** - flat conversion with typed scalars
//! - **`hierarchical.rs`** - dotted keys becoming nested objects
//!
//! Run any example with: `cargo run --example <name>`

pub mod builder;
pub mod error;
pub mod macros;
pub mod map;
pub mod options;
pub mod value;

pub use builder::{build, infer_scalar};
pub use error::{Error, Result};
pub use map::PropMap;
pub use options::Options;
pub use value::{Number, Value};

/// Converts an ordered sequence of property pairs into a document tree.
///
/// This is [`build`] with the root wrapped as a [`Value::Object`], which is
/// the shape callers forward to serializers or configuration consumers.
///
/// # Examples
///
/// ```rust
/// use props2json::{to_document, Options};
///
/// let pairs = vec![("greeting".to_string(), "hello".to_string())];
/// let document = to_document(pairs, &Options::new());
/// assert!(document.is_object());
/// ```
#[must_use]
pub fn to_document<I>(pairs: I, options: &Options) -> Value
where
    I: IntoIterator<Item = (String, String)>,
{
    Value::Object(build(pairs, options))
}
