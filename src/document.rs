//! Document assembly: prolog, root wrapper and namespaces.
//!
//! This is the dialect selector. The default dialect wraps the encoded value
//! in `custom_root` when `root` is set; the XPath 3.1 dialect always attaches
//! the `xpath-functions` namespace to the outermost element.
//!
//! Namespaces are only ever attached to the root wrapper, so they are dropped
//! when `root` is false. The bare fragment produced in that case has no
//! prolog either.

use crate::encode::Encoder;
use crate::escape::push_escaped;
use crate::ids::{IdGenerator, RandomIds};
use crate::options::{Dialect, Namespace};
use crate::xpath::write_xpath31;
use crate::{Value, XmlOptions};
use indexmap::IndexMap;

/// Prolog emitted at the start of every full document.
pub const XML_PROLOG: &str = r#"<?xml version="1.0" encoding="UTF-8" ?>"#;

/// Namespace of the XPath 3.1 `json-to-xml` vocabulary.
pub const XPATH_FUNCTIONS_NS: &str = "http://www.w3.org/2005/xpath-functions";

/// Renders namespace declarations for the root element.
///
/// # Examples
///
/// ```rust
/// use indexmap::IndexMap;
/// use json2xml::document::namespace_string;
/// use json2xml::Namespace;
///
/// let mut namespaces = IndexMap::new();
/// namespaces.insert("xmlns".to_string(), Namespace::uri("http://example.com/"));
/// namespaces.insert("ns1".to_string(), Namespace::uri("http://example.com/ns1"));
/// assert_eq!(
///     namespace_string(&namespaces),
///     r#" xmlns="http://example.com/" xmlns:ns1="http://example.com/ns1""#
/// );
/// ```
#[must_use]
pub fn namespace_string(namespaces: &IndexMap<String, Namespace>) -> String {
    let mut out = String::new();
    for (prefix, namespace) in namespaces {
        match (prefix.as_str(), namespace) {
            (
                "xsi",
                Namespace::Xsi {
                    schema_instance,
                    schema_location,
                },
            ) => {
                if let Some(uri) = schema_instance {
                    push_declaration(&mut out, "xmlns:xsi", uri);
                }
                if let Some(location) = schema_location {
                    push_declaration(&mut out, "xsi:schemaLocation", location);
                }
            }
            ("xsi", Namespace::Uri(_)) => {
                tracing::debug!("ignoring plain URI on xsi prefix");
            }
            ("xmlns", Namespace::Uri(uri)) => push_declaration(&mut out, "xmlns", uri),
            (_, Namespace::Uri(uri)) => {
                push_declaration(&mut out, &format!("xmlns:{}", prefix), uri);
            }
            (_, Namespace::Xsi { .. }) => {
                tracing::debug!(prefix = %prefix, "ignoring schema namespace on non-xsi prefix");
            }
        }
    }
    out
}

fn push_declaration(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    push_escaped(out, value);
    out.push('"');
}

/// Converts `value` into an XML document, drawing ids from a fresh
/// [`RandomIds`].
///
/// # Examples
///
/// ```rust
/// use json2xml::document::dict_to_xml;
/// use json2xml::{value, XmlOptions};
///
/// let options = XmlOptions::new().with_attr_type(false);
/// assert_eq!(
///     dict_to_xml(&value!({"mock": "payload"}), &options),
///     r#"<?xml version="1.0" encoding="UTF-8" ?><root><mock>payload</mock></root>"#
/// );
/// ```
#[must_use]
pub fn dict_to_xml(value: &Value, options: &XmlOptions) -> String {
    let mut ids = RandomIds::new();
    dict_to_xml_with_ids(value, options, &mut ids)
}

/// Converts `value` into an XML document with an explicit id source.
pub fn dict_to_xml_with_ids(
    value: &Value,
    options: &XmlOptions,
    ids: &mut dyn IdGenerator,
) -> String {
    tracing::debug!(
        dialect = options.dialect.as_str(),
        root = options.root,
        "converting value to XML"
    );

    match options.dialect {
        Dialect::XPath31 => xpath_document(value),
        Dialect::Dicttoxml => {
            let mut encoder = Encoder::new(options, ids);
            encoder.convert(value, &options.custom_root);
            let content = encoder.into_inner();

            if !options.root {
                if !options.xml_namespaces.is_empty() {
                    tracing::debug!("root disabled, namespaces dropped");
                }
                return content;
            }

            let namespaces = namespace_string(&options.xml_namespaces);
            let root = &options.custom_root;
            let mut out = String::with_capacity(
                XML_PROLOG.len() + namespaces.len() + content.len() + 2 * root.len() + 5,
            );
            out.push_str(XML_PROLOG);
            out.push('<');
            out.push_str(root);
            out.push_str(&namespaces);
            out.push('>');
            out.push_str(&content);
            out.push_str("</");
            out.push_str(root);
            out.push('>');
            out
        }
    }
}

fn xpath_document(value: &Value) -> String {
    let mut content = String::with_capacity(128);
    write_xpath31(&mut content, value, None);

    let namespace = format!(" xmlns=\"{}\"", XPATH_FUNCTIONS_NS);
    let mut out = String::with_capacity(XML_PROLOG.len() + namespace.len() + content.len() + 12);
    out.push_str(XML_PROLOG);

    let spliced = ["<map", "<array"]
        .iter()
        .find_map(|open| content.strip_prefix(open).map(|rest| (open, rest)));
    match spliced {
        Some((open, rest)) => {
            out.push_str(open);
            out.push_str(&namespace);
            out.push_str(rest);
        }
        None => {
            out.push_str("<map");
            out.push_str(&namespace);
            out.push('>');
            out.push_str(&content);
            out.push_str("</map>");
        }
    }
    out
}
