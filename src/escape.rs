//! Text escaping, CDATA wrapping and attribute rendering.

use crate::Value;
use std::collections::BTreeMap;

/// Attributes of one element, rendered in key order.
pub type Attrs = BTreeMap<String, Value>;

/// Escapes the five XML special characters in a single pass.
///
/// Already-escaped input is escaped again (`&amp;` becomes `&amp;amp;`).
///
/// # Examples
///
/// ```rust
/// use json2xml::escape::escape_xml;
///
/// assert_eq!(escape_xml("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
/// assert_eq!(escape_xml("&lt;"), "&amp;lt;");
/// ```
#[must_use]
pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + s.len() / 8);
    push_escaped(&mut out, s);
    out
}

/// Appends `s` to `out`, escaping as [`escape_xml`] does.
#[inline]
pub fn push_escaped(out: &mut String, s: &str) {
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}

/// Wraps text in a CDATA section, splitting any embedded `]]>`.
///
/// # Examples
///
/// ```rust
/// use json2xml::escape::wrap_cdata;
///
/// assert_eq!(wrap_cdata("test"), "<![CDATA[test]]>");
/// assert_eq!(wrap_cdata("a]]>b"), "<![CDATA[a]]]]><![CDATA[>b]]>");
/// ```
#[must_use]
pub fn wrap_cdata(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 12);
    push_cdata(&mut out, s);
    out
}

/// Appends `s` to `out` as a CDATA section.
pub fn push_cdata(out: &mut String, s: &str) {
    out.push_str("<![CDATA[");
    out.push_str(&s.replace("]]>", "]]]]><![CDATA[>"));
    out.push_str("]]>");
}

/// Renders attributes as ` k1="v1" k2="v2"`, sorted by key.
///
/// Empty input renders as the empty string, with no leading space.
///
/// # Examples
///
/// ```rust
/// use json2xml::escape::{make_attr_string, Attrs};
/// use json2xml::Value;
///
/// let mut attrs = Attrs::new();
/// assert_eq!(make_attr_string(&attrs), "");
///
/// attrs.insert("type".to_string(), Value::from("str"));
/// attrs.insert("id".to_string(), Value::from(123));
/// assert_eq!(make_attr_string(&attrs), r#" id="123" type="str""#);
/// ```
#[must_use]
pub fn make_attr_string(attrs: &Attrs) -> String {
    let mut out = String::new();
    push_attrs(&mut out, attrs);
    out
}

/// Appends the rendered attributes of [`make_attr_string`] to `out`.
pub fn push_attrs(out: &mut String, attrs: &Attrs) {
    for (key, value) in attrs {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        push_escaped(out, &attr_text(value));
        out.push('"');
    }
}

fn attr_text(value: &Value) -> String {
    match value {
        Value::Array(_) | Value::Object(_) => value.to_string(),
        other => other.text().into_owned(),
    }
}
