//! # json2xml
//!
//! Converts JSON-like values into XML documents.
//!
//! Two output grammars are supported:
//!
//! - **Default dialect**: mapping keys become element names, list members
//!   become `<item>` elements, and every element can carry a `type`
//!   attribute (`str`, `int`, `float`, `bool`, `null`, `dict`, `list`).
//! - **XPath 3.1 dialect**: the `json-to-xml` mapping of the XPath and XQuery
//!   Functions 3.1 recommendation (`<map>`, `<array>`, `<string key="..">`, ...).
//!
//! Output is deterministic: mapping keys are always emitted in sorted order,
//! whatever order the input had.
//!
//! ## Quick Start
//!
//! ```rust
//! use json2xml::{from_str, convert_to_xml, XmlOptions};
//!
//! let value = from_str(r#"{"mock": "payload"}"#).unwrap();
//! let options = XmlOptions::new().with_attr_type(false);
//!
//! assert_eq!(
//!     convert_to_xml(&value, Some(&options)),
//!     r#"<?xml version="1.0" encoding="UTF-8" ?><root><mock>payload</mock></root>"#
//! );
//! ```
//!
//! ### Typed data
//!
//! Anything that implements `Serialize` converts without going through JSON
//! text:
//!
//! ```rust
//! use serde::Serialize;
//! use json2xml::{to_string_with_options, XmlOptions};
//!
//! #[derive(Serialize)]
//! struct Bike {
//!     colors: Vec<&'static str>,
//! }
//!
//! let bike = Bike { colors: vec!["blue", "green"] };
//! let options = XmlOptions::new().with_root(false).with_attr_type(false);
//! assert_eq!(
//!     to_string_with_options(&bike, options).unwrap(),
//!     "<colors><item>blue</item><item>green</item></colors>"
//! );
//! ```
//!
//! ### Literal values
//!
//! ```rust
//! use json2xml::{value, convert_to_xml, XmlOptions};
//!
//! let data = value!({"name": "John", "age": 30, "active": true});
//! let xml = convert_to_xml(&data, Some(&XmlOptions::xpath()));
//! assert!(xml.contains(r#"<number key="age">30</number>"#));
//! ```
//!
//! ### Meta keys
//!
//! In the default dialect a nested mapping can use `@attrs`, `@val` and
//! `@flat` to control its own element; see [`encode`].
//!
//! ## Errors
//!
//! Conversion itself never fails. Reading JSON and pretty-printing return
//! [`Result`]; see [`Error`].

pub mod converter;
pub mod document;
pub mod encode;
pub mod error;
pub mod escape;
pub mod ids;
pub mod macros;
pub mod map;
pub mod name;
pub mod options;
pub mod pretty;
pub mod read;
pub mod ser;
pub mod value;
pub mod xpath;

pub use converter::Json2Xml;
pub use document::{dict_to_xml, dict_to_xml_with_ids};
pub use error::{Error, Result};
pub use map::Map;
pub use options::{Dialect, Namespace, XmlOptions};
pub use pretty::pretty_print;
pub use ser::ValueSerializer;
pub use value::{Number, Value};

use serde::Serialize;
use std::io;

/// Crate version, as published.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Converts `value` to XML, using default options when `options` is `None`.
///
/// Every value produces output here: `{}` and `[]` give an empty root
/// element and null gives one empty item. Use [`Json2Xml::to_xml`], which
/// returns `Ok(None)` for all three, when empty input should mean no
/// document at all.
///
/// # Examples
///
/// ```rust
/// use json2xml::{convert_to_xml, value};
///
/// let xml = convert_to_xml(&value!({"a": 1}), None);
/// assert!(xml.ends_with(r#"<root><a type="int">1</a></root>"#));
/// ```
#[must_use]
pub fn convert_to_xml(value: &Value, options: Option<&XmlOptions>) -> String {
    match options {
        Some(options) => dict_to_xml(value, options),
        None => dict_to_xml(value, &XmlOptions::default()),
    }
}

/// Serialize any `T: Serialize` to an XML string with default options.
///
/// Like [`convert_to_xml`], an empty or unit value still yields a document;
/// the no-document case belongs to [`Json2Xml::to_xml`].
///
/// # Examples
///
/// ```rust
/// use json2xml::to_string;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let xml = to_string(&Point { x: 1, y: 2 }).unwrap();
/// assert!(xml.contains(r#"<x type="int">1</x>"#));
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be represented as a [`Value`]
/// (for example a map with non-string keys).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, XmlOptions::default())
}

/// Serialize any `T: Serialize` to an indented XML string.
///
/// # Errors
///
/// Returns an error if the value cannot be represented as a [`Value`], or
/// [`Error::Conversion`] if indentation fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_pretty<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let xml = to_string(value)?;
    pretty_print(&xml).map_err(Error::conversion)
}

/// Serialize any `T: Serialize` to an XML string with custom options.
///
/// # Errors
///
/// Returns an error if the value cannot be represented as a [`Value`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: XmlOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let value = to_value(value)?;
    Ok(dict_to_xml(&value, &options))
}

/// Convert any `T: Serialize` to a [`Value`].
///
/// # Examples
///
/// ```rust
/// use json2xml::{to_value, Value};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value: Value = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert!(value.is_object());
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}

/// Serialize any `T: Serialize` as XML into a writer.
///
/// # Examples
///
/// ```rust
/// use json2xml::to_writer;
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &vec![1, 2]).unwrap();
/// assert!(buffer.starts_with(b"<?xml"));
/// ```
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    to_writer_with_options(writer, value, XmlOptions::default())
}

/// Serialize any `T: Serialize` as XML into a writer with custom options.
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(mut writer: W, value: &T, options: XmlOptions) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let xml = to_string_with_options(value, options)?;
    writer
        .write_all(xml.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

/// Parse JSON text into a [`Value`].
///
/// # Examples
///
/// ```rust
/// use json2xml::from_str;
///
/// let value = from_str(r#"{"x": 1, "y": [true, null]}"#).unwrap();
/// assert!(value.is_object());
/// ```
///
/// # Errors
///
/// Returns [`Error::Parse`] for empty or malformed input.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str(s: &str) -> Result<Value> {
    read::read_from_string(s)
}

/// Parse JSON bytes into a [`Value`].
///
/// # Errors
///
/// Returns [`Error::Parse`] for empty or malformed input.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice(v: &[u8]) -> Result<Value> {
    read::read_from_slice(v)
}

/// Parse JSON from an I/O stream into a [`Value`].
///
/// # Examples
///
/// ```rust
/// use json2xml::from_reader;
/// use std::io::Cursor;
///
/// let value = from_reader(Cursor::new(b"[1, 2, 3]")).unwrap();
/// assert_eq!(value.as_array().map(Vec::len), Some(3));
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails and [`Error::Parse`] for empty or
/// malformed input.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R>(reader: R) -> Result<Value>
where
    R: io::Read,
{
    read::read_from_reader(reader)
}
