//! Default dialect transcoder.
//!
//! The [`Encoder`] walks a [`Value`] and writes dicttoxml-style elements into
//! a string buffer. Mapping keys become element names (repaired when they are
//! not legal XML names), list members become item elements, and each
//! element can carry a `type` attribute naming the value kind.
//!
//! ## Meta keys
//!
//! A mapping nested inside another mapping or a list may steer its own
//! element through three reserved keys:
//!
//! - `@attrs`: a mapping whose entries replace the element's attributes
//! - `@val`: the content to emit instead of the remaining keys
//! - `@flat`: when `true`, the wrapping element is dropped
//!
//! ```rust
//! use json2xml::encode::Encoder;
//! use json2xml::ids::RandomIds;
//! use json2xml::{value, XmlOptions};
//!
//! let options = XmlOptions::new().with_attr_type(false);
//! let mut ids = RandomIds::new();
//! let mut encoder = Encoder::new(&options, &mut ids);
//!
//! encoder.convert(&value!({"bike": ["blue", "green"]}), "root");
//! assert_eq!(
//!     encoder.into_inner(),
//!     "<bike><item>blue</item><item>green</item></bike>"
//! );
//! ```
//!
//! Recursion depth follows the nesting depth of the input; the host stack is
//! the only limit.

use crate::escape::{push_attrs, push_cdata, push_escaped, Attrs};
use crate::ids::IdGenerator;
use crate::name::{make_valid_xml_name, strip_flat_marker};
use crate::{Map, Value, XmlOptions};

const ATTRS_KEY: &str = "@attrs";
const VAL_KEY: &str = "@val";
const FLAT_KEY: &str = "@flat";

/// Writes the default XML dialect into an internal buffer.
pub struct Encoder<'a> {
    output: String,
    options: &'a XmlOptions,
    ids: &'a mut dyn IdGenerator,
}

impl<'a> Encoder<'a> {
    pub fn new(options: &'a XmlOptions, ids: &'a mut dyn IdGenerator) -> Self {
        Encoder {
            output: String::with_capacity(256),
            options,
            ids,
        }
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    /// Encodes `value` as the content of an element named `parent`.
    ///
    /// Mappings and lists are expanded in place; a bare primitive becomes a
    /// single item element.
    pub fn convert(&mut self, value: &Value, parent: &str) {
        match value {
            Value::Object(map) => self.convert_dict(map, parent),
            Value::Array(items) => self.convert_list(items, parent),
            Value::Null => {
                let name = self.options.item_name(parent);
                self.convert_none(&name, Attrs::new());
            }
            Value::Bool(b) => {
                let name = self.options.item_name(parent);
                self.convert_bool(&name, *b, Attrs::new());
            }
            other => {
                let name = self.options.item_name(parent);
                self.convert_kv(&name, other, Attrs::new());
            }
        }
    }

    /// Encodes every entry of `map` in sorted key order.
    pub fn convert_dict(&mut self, map: &Map, parent: &str) {
        self.convert_entries(map.sorted_iter(), parent);
    }

    fn convert_entries<'v>(
        &mut self,
        entries: impl Iterator<Item = (&'v String, &'v Value)>,
        parent: &str,
    ) {
        for (key, value) in entries {
            let mut attrs = Attrs::new();
            if self.options.ids {
                attrs.insert("id".to_string(), Value::String(self.ids.unique_id(parent)));
            }
            let key = make_valid_xml_name(key, &mut attrs);

            match value {
                Value::Object(inner) => self.dict_to_xml_str(inner, attrs, &key, false, parent),
                Value::Array(items) => self.list_to_xml_str(items, attrs, &key),
                Value::Null => self.convert_none(&key, attrs),
                Value::Bool(b) => self.convert_bool(&key, *b, attrs),
                other => self.convert_kv(&key, other, attrs),
            }
        }
    }

    /// Encodes the members of a list whose element is `parent`.
    pub fn convert_list(&mut self, items: &[Value], parent: &str) {
        let item_name = self.options.item_name(parent);
        let (item_name, _) = strip_flat_marker(&item_name);

        for item in items {
            let attrs = Attrs::new();
            match item {
                Value::Object(inner) => self.dict_to_xml_str(inner, attrs, item_name, true, parent),
                Value::Array(nested) => self.list_to_xml_str(nested, attrs, item_name),
                Value::Null => self.convert_none(item_name, attrs),
                Value::Bool(b) => self.convert_bool(item_name, *b, attrs),
                other => {
                    let name = if self.options.item_wrap {
                        item_name
                    } else {
                        parent
                    };
                    self.convert_kv(name, other, attrs);
                }
            }
        }
    }

    /// Encodes a nested mapping, honouring its meta keys.
    fn dict_to_xml_str(
        &mut self,
        item: &Map,
        mut attrs: Attrs,
        item_name: &str,
        parent_is_list: bool,
        parent: &str,
    ) {
        let options = self.options;
        if options.attr_type {
            attrs.insert("type".to_string(), Value::from("dict"));
        }

        let custom = match item.get(ATTRS_KEY) {
            Some(Value::Object(custom)) => Some(custom),
            _ => None,
        };
        let attrs: Attrs = match custom {
            Some(custom) => custom
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
            None => attrs,
        };
        let flat = matches!(item.get(FLAT_KEY), Some(Value::Bool(true)));

        let wrapper: Option<(&str, Option<&Attrs>)> = if parent_is_list && options.list_headers {
            let header_attrs = (!attrs.is_empty() && !options.item_wrap).then_some(&attrs);
            Some((parent, header_attrs))
        } else if flat || (parent_is_list && !options.item_wrap) {
            None
        } else {
            Some((item_name, Some(&attrs)))
        };

        if let Some((name, attrs)) = wrapper {
            self.open_tag(name, attrs);
        }

        match item.get(VAL_KEY) {
            Some(val) if val.is_primitive() => push_escaped(&mut self.output, &val.text()),
            Some(val) => self.convert(val, item_name),
            None => {
                let has_custom = custom.is_some();
                let rest = item
                    .sorted_iter()
                    .filter(|(k, _)| k.as_str() != FLAT_KEY && !(has_custom && k.as_str() == ATTRS_KEY));
                self.convert_entries(rest, item_name);
            }
        }

        if let Some((name, _)) = wrapper {
            self.close_tag(name);
        }
    }

    /// Encodes a list nested under the element `item_name`.
    fn list_to_xml_str(&mut self, items: &[Value], mut attrs: Attrs, item_name: &str) {
        let options = self.options;
        if options.attr_type {
            attrs.insert("type".to_string(), Value::from("list"));
        }

        let (name, flat) = strip_flat_marker(item_name);
        let first_is_primitive = items.first().is_some_and(Value::is_primitive);
        let bare = flat || (first_is_primitive && !options.item_wrap) || options.list_headers;

        if !bare {
            self.open_tag(name, Some(&attrs));
        }
        self.convert_list(items, name);
        if !bare {
            self.close_tag(name);
        }
    }

    /// Encodes a number, string, timestamp or bytes leaf.
    pub fn convert_kv(&mut self, key: &str, value: &Value, mut attrs: Attrs) {
        let key = make_valid_xml_name(key, &mut attrs);
        if self.options.attr_type {
            attrs.insert("type".to_string(), Value::from(value.xml_type()));
        }

        self.open_tag(&key, Some(&attrs));
        if self.options.cdata {
            push_cdata(&mut self.output, &value.text());
        } else {
            push_escaped(&mut self.output, &value.text());
        }
        self.close_tag(&key);
    }

    pub fn convert_bool(&mut self, key: &str, value: bool, mut attrs: Attrs) {
        let key = make_valid_xml_name(key, &mut attrs);
        if self.options.attr_type {
            attrs.insert("type".to_string(), Value::from("bool"));
        }

        self.open_tag(&key, Some(&attrs));
        self.output.push_str(if value { "true" } else { "false" });
        self.close_tag(&key);
    }

    /// Null renders as an empty element pair, never self-closed.
    pub fn convert_none(&mut self, key: &str, mut attrs: Attrs) {
        let key = make_valid_xml_name(key, &mut attrs);
        if self.options.attr_type {
            attrs.insert("type".to_string(), Value::from("null"));
        }

        self.open_tag(&key, Some(&attrs));
        self.close_tag(&key);
    }

    #[inline]
    fn open_tag(&mut self, name: &str, attrs: Option<&Attrs>) {
        self.output.push('<');
        self.output.push_str(name);
        if let Some(attrs) = attrs {
            push_attrs(&mut self.output, attrs);
        }
        self.output.push('>');
    }

    #[inline]
    fn close_tag(&mut self, name: &str) {
        self.output.push_str("</");
        self.output.push_str(name);
        self.output.push('>');
    }
}
