//! Configuration options for XML conversion.
//!
//! - [`XmlOptions`]: every knob the transcoder reads
//! - [`Dialect`]: default dicttoxml-style output or XPath 3.1 `json-to-xml`
//! - [`Namespace`]: namespace declarations attached to the root wrapper
//!
//! ## Examples
//!
//! ```rust
//! use json2xml::{Namespace, XmlOptions};
//!
//! let options = XmlOptions::new()
//!     .with_custom_root("catalog")
//!     .with_attr_type(false)
//!     .with_item_name_fn(|parent| format!("{}_item", parent))
//!     .with_namespace("xmlns", Namespace::uri("http://example.com/catalog"));
//!
//! assert_eq!(options.item_name("book"), "book_item");
//! ```

use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// Computes the element name for list members from the parent element name.
pub type ItemNameFn = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Output grammar.
///
/// # Examples
///
/// ```rust
/// use json2xml::Dialect;
///
/// assert_eq!(Dialect::default(), Dialect::Dicttoxml);
/// assert_eq!(Dialect::XPath31.as_str(), "xpath31");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Dialect {
    /// `<key type="..">value</key>` elements with item wrapping and meta keys
    #[default]
    Dicttoxml,
    /// XPath 3.1 `json-to-xml` mapping (`<map>`, `<array>`, `<string key="..">`)
    XPath31,
}

impl Dialect {
    /// Returns a short identifier for logging.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Dialect::Dicttoxml => "dicttoxml",
            Dialect::XPath31 => "xpath31",
        }
    }
}

/// A namespace declaration value.
///
/// Plain prefixes carry a URI. The reserved `xsi` prefix carries the schema
/// instance URI and an optional schema location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Namespace {
    Uri(String),
    Xsi {
        schema_instance: Option<String>,
        schema_location: Option<String>,
    },
}

impl Namespace {
    /// Creates a URI namespace value.
    pub fn uri(uri: impl Into<String>) -> Self {
        Namespace::Uri(uri.into())
    }

    /// Creates an `xsi` namespace value.
    pub fn xsi(schema_instance: Option<&str>, schema_location: Option<&str>) -> Self {
        Namespace::Xsi {
            schema_instance: schema_instance.map(str::to_string),
            schema_location: schema_location.map(str::to_string),
        }
    }
}

/// Returns `"item"` for any parent element.
#[must_use]
pub fn default_item_name(_parent: &str) -> String {
    "item".to_string()
}

/// Configuration for a conversion call.
///
/// Options are immutable during a conversion; clone and adjust with the
/// `with_*` builders.
///
/// # Examples
///
/// ```rust
/// use json2xml::{Dialect, XmlOptions};
///
/// let options = XmlOptions::default();
/// assert!(options.root);
/// assert_eq!(options.custom_root, "root");
/// assert!(options.attr_type);
/// assert!(options.item_wrap);
/// assert_eq!(options.dialect, Dialect::Dicttoxml);
/// ```
#[derive(Clone)]
pub struct XmlOptions {
    /// Wrap the output in a root element named `custom_root`
    pub root: bool,
    pub custom_root: String,
    /// Attach a random `id` attribute to mapping members
    pub ids: bool,
    /// Attach a `type` attribute naming the value kind
    pub attr_type: bool,
    /// Wrap list members in item elements instead of repeating the parent tag
    pub item_wrap: bool,
    pub item_name_fn: ItemNameFn,
    /// Wrap text content in CDATA sections instead of escaping it
    pub cdata: bool,
    /// Namespace declarations for the root element, in insertion order
    pub xml_namespaces: IndexMap<String, Namespace>,
    /// Repeat the parent tag around every mapping inside a list
    pub list_headers: bool,
    pub dialect: Dialect,
}

impl Default for XmlOptions {
    fn default() -> Self {
        XmlOptions {
            root: true,
            custom_root: "root".to_string(),
            ids: false,
            attr_type: true,
            item_wrap: true,
            item_name_fn: Arc::new(default_item_name),
            cdata: false,
            xml_namespaces: IndexMap::new(),
            list_headers: false,
            dialect: Dialect::default(),
        }
    }
}

impl fmt::Debug for XmlOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("XmlOptions")
            .field("root", &self.root)
            .field("custom_root", &self.custom_root)
            .field("ids", &self.ids)
            .field("attr_type", &self.attr_type)
            .field("item_wrap", &self.item_wrap)
            .field("cdata", &self.cdata)
            .field("xml_namespaces", &self.xml_namespaces)
            .field("list_headers", &self.list_headers)
            .field("dialect", &self.dialect)
            .finish_non_exhaustive()
    }
}

impl XmlOptions {
    /// Creates the default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options selecting the XPath 3.1 dialect.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json2xml::{Dialect, XmlOptions};
    ///
    /// assert_eq!(XmlOptions::xpath().dialect, Dialect::XPath31);
    /// ```
    #[must_use]
    pub fn xpath() -> Self {
        XmlOptions {
            dialect: Dialect::XPath31,
            ..Default::default()
        }
    }

    /// Element name for members of a list whose element is `parent`.
    #[must_use]
    pub fn item_name(&self, parent: &str) -> String {
        (self.item_name_fn)(parent)
    }

    #[must_use]
    pub fn with_root(mut self, root: bool) -> Self {
        self.root = root;
        self
    }

    #[must_use]
    pub fn with_custom_root(mut self, name: impl Into<String>) -> Self {
        self.custom_root = name.into();
        self
    }

    #[must_use]
    pub fn with_ids(mut self, ids: bool) -> Self {
        self.ids = ids;
        self
    }

    #[must_use]
    pub fn with_attr_type(mut self, attr_type: bool) -> Self {
        self.attr_type = attr_type;
        self
    }

    #[must_use]
    pub fn with_item_wrap(mut self, item_wrap: bool) -> Self {
        self.item_wrap = item_wrap;
        self
    }

    /// Sets the function naming list members.
    ///
    /// A name ending in `@flat` suppresses the list wrapper; the marker itself
    /// is stripped from the item name.
    #[must_use]
    pub fn with_item_name_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.item_name_fn = Arc::new(f);
        self
    }

    #[must_use]
    pub fn with_cdata(mut self, cdata: bool) -> Self {
        self.cdata = cdata;
        self
    }

    /// Adds a namespace declaration.
    ///
    /// The prefix `xmlns` declares the default namespace; `xsi` expects a
    /// [`Namespace::Xsi`] value.
    #[must_use]
    pub fn with_namespace(mut self, prefix: impl Into<String>, namespace: Namespace) -> Self {
        self.xml_namespaces.insert(prefix.into(), namespace);
        self
    }

    #[must_use]
    pub fn with_list_headers(mut self, list_headers: bool) -> Self {
        self.list_headers = list_headers;
        self
    }

    #[must_use]
    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// Selects the XPath 3.1 dialect when `xpath` is true.
    #[must_use]
    pub fn with_xpath_format(self, xpath: bool) -> Self {
        self.with_dialect(if xpath {
            Dialect::XPath31
        } else {
            Dialect::Dicttoxml
        })
    }
}
