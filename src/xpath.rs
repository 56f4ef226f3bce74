//! XPath 3.1 `json-to-xml` transcoder.
//!
//! Every node becomes `<map>`, `<array>`, `<string>`, `<number>`,
//! `<boolean>` or `<null/>`. Mapping members carry their key in a `key`
//! attribute; list members and the document root carry none. Options other
//! than the dialect itself are ignored, and `@attrs`/`@val`/`@flat` are
//! ordinary keys here.
//!
//! ```rust
//! use json2xml::value;
//! use json2xml::xpath::convert_to_xpath31;
//!
//! let xml = convert_to_xpath31(&value!({"tags": ["a", 1]}), None);
//! assert_eq!(
//!     xml,
//!     r#"<map><array key="tags"><string>a</string><number>1</number></array></map>"#
//! );
//! ```

use crate::escape::push_escaped;
use crate::Value;

/// Converts `value` to an XPath 3.1 fragment, tagging it with `key` if given.
#[must_use]
pub fn convert_to_xpath31(value: &Value, key: Option<&str>) -> String {
    let mut out = String::with_capacity(128);
    write_xpath31(&mut out, value, key);
    out
}

/// Appends the fragment produced by [`convert_to_xpath31`] to `out`.
pub fn write_xpath31(out: &mut String, value: &Value, key: Option<&str>) {
    let tag = value.xpath_tag();
    out.push('<');
    out.push_str(tag);
    if let Some(key) = key {
        out.push_str(" key=\"");
        push_escaped(out, key);
        out.push('"');
    }

    match value {
        Value::Null => {
            out.push_str("/>");
            return;
        }
        Value::Object(map) => {
            out.push('>');
            for (k, v) in map.sorted_iter() {
                write_xpath31(out, v, Some(k));
            }
        }
        Value::Array(items) => {
            out.push('>');
            for item in items {
                write_xpath31(out, item, None);
            }
        }
        other => {
            out.push('>');
            push_escaped(out, &other.text());
        }
    }

    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
