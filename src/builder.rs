//! The core conversion: an ordered sequence of property pairs folded into a
//! document tree.
//!
//! [`build`] is a pure function. It never fails: scalar typing falls back to
//! the original string on any parse failure, and structural collisions during
//! hierarchical nesting resolve by overwrite, so every well-formed pair
//! sequence yields a document.
//!
//! ## Examples
//!
//! ```rust
//! use props2json::{build, Options, Value, Number};
//!
//! let pairs = vec![
//!     ("server.host".to_string(), "localhost".to_string()),
//!     ("server.port".to_string(), "8080".to_string()),
//! ];
//!
//! let doc = build(pairs, &Options::new().with_hierarchical(true));
//! let server = doc.get("server").and_then(|v| v.as_object()).unwrap();
//! assert_eq!(server.get("port"), Some(&Value::Number(Number::Integer(8080))));
//! ```

use crate::{Number, Options, PropMap, Value};

/// Folds an ordered sequence of `(key, value)` string pairs into a document.
///
/// The returned map is the root object of the document. In flat mode
/// (`hierarchical` off) each distinct input key becomes one top-level entry,
/// the full key string used verbatim, dots included. In hierarchical mode each
/// key is split on `.` and the segments become nested objects, the final
/// segment holding the value.
///
/// Later pairs win: a repeated key overwrites the earlier value, and in
/// hierarchical mode a key that needs an object where a scalar sits (or the
/// reverse) replaces whatever is there.
///
/// Values are typed unless `raw_data` is set: `true`/`false` (any case)
/// become booleans, integral and decimal text becomes numbers, everything
/// else stays a string.
///
/// # Examples
///
/// ```rust
/// use props2json::{build, Options, Value};
///
/// let pairs = vec![("flag".to_string(), "true".to_string())];
///
/// let doc = build(pairs.clone(), &Options::new());
/// assert_eq!(doc.get("flag"), Some(&Value::Bool(true)));
///
/// let doc = build(pairs, &Options::new().with_raw_data(true));
/// assert_eq!(doc.get("flag"), Some(&Value::String("true".to_string())));
/// ```
#[must_use]
pub fn build<I>(pairs: I, options: &Options) -> PropMap
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut root = PropMap::new();
    for (key, raw) in pairs {
        let value = if options.raw_data {
            Value::String(raw)
        } else {
            infer_scalar(&raw)
        };
        if options.hierarchical {
            insert_nested(&mut root, &key, value);
        } else {
            root.insert(key, value);
        }
    }
    root
}

/// Types a raw property value, in order: boolean, integer, decimal, string.
///
/// Booleans match `true`/`false` case-insensitively. Numbers follow the
/// standard textual grammar; text that only parses to a non-finite float
/// (`"inf"`, `"NaN"`) is not treated as numeric. Anything else is returned as
/// the original string, so this function is total.
///
/// # Examples
///
/// ```rust
/// use props2json::{infer_scalar, Value, Number};
///
/// assert_eq!(infer_scalar("TRUE"), Value::Bool(true));
/// assert_eq!(infer_scalar("42"), Value::Number(Number::Integer(42)));
/// assert_eq!(infer_scalar("3.5"), Value::Number(Number::Float(3.5)));
/// assert_eq!(infer_scalar("hello"), Value::String("hello".to_string()));
/// ```
#[must_use]
pub fn infer_scalar(raw: &str) -> Value {
    if let Some(b) = try_parse_bool(raw) {
        return Value::Bool(b);
    }
    if let Some(n) = try_parse_number(raw) {
        return Value::Number(n);
    }
    Value::String(raw.to_string())
}

fn try_parse_bool(raw: &str) -> Option<bool> {
    if raw.eq_ignore_ascii_case("true") {
        Some(true)
    } else if raw.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

fn try_parse_number(raw: &str) -> Option<Number> {
    if let Ok(i) = raw.parse::<i64>() {
        return Some(Number::Integer(i));
    }
    match raw.parse::<f64>() {
        // f64 parsing accepts "inf" and "NaN"; those stay strings.
        Ok(f) if f.is_finite() => Some(Number::Float(f)),
        _ => None,
    }
}

/// Walks/creates nested objects for all segments but the last, then stores
/// the value under the final segment. Any non-object value sitting where an
/// intermediate segment needs an object is replaced by a fresh empty object.
fn insert_nested(root: &mut PropMap, key: &str, value: Value) {
    let mut segments = key.split('.');
    // split always yields at least one segment, even for an empty key
    let mut current = segments.next().unwrap_or_default();
    let mut node = root;
    for next in segments {
        let slot = node
            .entry(current.to_string())
            .or_insert_with(|| Value::Object(PropMap::new()));
        if !slot.is_object() {
            *slot = Value::Object(PropMap::new());
        }
        match slot.as_object_mut() {
            Some(inner) => node = inner,
            None => unreachable!("slot was just made an object"),
        }
        current = next;
    }
    node.insert(current.to_string(), value);
}
