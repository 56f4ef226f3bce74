//! XML element name validation and repair.

use crate::escape::{escape_xml, Attrs};
use crate::Value;

/// Marker suffix that flattens a list into its parent.
pub const FLAT_MARKER: &str = "@flat";

/// Element name used when a key cannot be repaired.
pub const FALLBACK_NAME: &str = "key";

/// Checks whether `key` is a legal XML element name.
///
/// A legal name is non-empty, starts with a letter or underscore, and
/// continues with letters, digits, `-`, `_`, `.` or namespace colons.
/// Letters and digits are the XML 1.0 `NameStartChar` and `NameChar`
/// ranges, so superscripts and most symbols are rejected.
///
/// # Examples
///
/// ```rust
/// use json2xml::name::key_is_valid_xml;
///
/// assert!(key_is_valid_xml("my-key"));
/// assert!(key_is_valid_xml("ns:key"));
/// assert!(!key_is_valid_xml("1invalid"));
/// assert!(!key_is_valid_xml("key with space"));
/// assert!(!key_is_valid_xml("k\u{b2}"));
/// assert!(!key_is_valid_xml(""));
/// ```
#[must_use]
pub fn key_is_valid_xml(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) if first != ':' && is_name_start_char(first) => {}
        _ => return false,
    }
    chars.all(is_name_char)
}

fn is_name_start_char(c: char) -> bool {
    matches!(c,
        ':' | 'A'..='Z' | '_' | 'a'..='z'
        | '\u{C0}'..='\u{D6}'
        | '\u{D8}'..='\u{F6}'
        | '\u{F8}'..='\u{2FF}'
        | '\u{370}'..='\u{37D}'
        | '\u{37F}'..='\u{1FFF}'
        | '\u{200C}'..='\u{200D}'
        | '\u{2070}'..='\u{218F}'
        | '\u{2C00}'..='\u{2FEF}'
        | '\u{3001}'..='\u{D7FF}'
        | '\u{F900}'..='\u{FDCF}'
        | '\u{FDF0}'..='\u{FFFD}'
        | '\u{10000}'..='\u{EFFFF}')
}

fn is_name_char(c: char) -> bool {
    is_name_start_char(c)
        || matches!(c,
            '-' | '.' | '0'..='9' | '\u{B7}'
            | '\u{300}'..='\u{36F}'
            | '\u{203F}'..='\u{2040}')
}

/// Returns a legal element name for `key`, recording the original in
/// `attrs["name"]` when no repair works.
///
/// Repairs are tried in order: escaped key as-is, `n` prefix for all-digit
/// keys, spaces to underscores, tolerance of namespace colons and the
/// `@flat` marker. Otherwise the element is named `key`.
///
/// # Examples
///
/// ```rust
/// use json2xml::escape::Attrs;
/// use json2xml::name::make_valid_xml_name;
/// use json2xml::Value;
///
/// let mut attrs = Attrs::new();
/// assert_eq!(make_valid_xml_name("123", &mut attrs), "n123");
/// assert_eq!(make_valid_xml_name("invalid key", &mut attrs), "invalid_key");
/// assert_eq!(make_valid_xml_name("list@flat", &mut attrs), "list@flat");
/// assert!(attrs.is_empty());
///
/// assert_eq!(make_valid_xml_name("/invalid/path", &mut attrs), "key");
/// assert_eq!(attrs.get("name"), Some(&Value::from("/invalid/path")));
/// ```
pub fn make_valid_xml_name(key: &str, attrs: &mut Attrs) -> String {
    let key = escape_xml(key);

    if key_is_valid_xml(&key) {
        return key;
    }

    if !key.is_empty() && key.bytes().all(|b| b.is_ascii_digit()) {
        tracing::trace!(key = %key, "prefixing numeric element name");
        return format!("n{}", key);
    }

    let underscored = key.replace(' ', "_");
    if key_is_valid_xml(&underscored) {
        return underscored;
    }

    let cleaned = key.replace(':', "").replace(FLAT_MARKER, "");
    if key_is_valid_xml(&cleaned) {
        return key;
    }

    tracing::trace!(key = %key, "moving invalid element name into name attribute");
    attrs.insert("name".to_string(), Value::String(key));
    FALLBACK_NAME.to_string()
}

/// Splits a trailing `@flat` marker off `name`.
///
/// # Examples
///
/// ```rust
/// use json2xml::name::strip_flat_marker;
///
/// assert_eq!(strip_flat_marker("list@flat"), ("list", true));
/// assert_eq!(strip_flat_marker("list"), ("list", false));
/// ```
#[must_use]
pub fn strip_flat_marker(name: &str) -> (&str, bool) {
    match name.strip_suffix(FLAT_MARKER) {
        Some(stripped) => (stripped, true),
        None => (name, false),
    }
}
