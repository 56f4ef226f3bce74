//! High-level converter with the defaults of the command-line tool.

use crate::document::dict_to_xml;
use crate::pretty::pretty_print;
use crate::{Error, Result, Value, XmlOptions};

/// Builder that turns one [`Value`] into an XML document.
///
/// Defaults: wrapper `"all"`, root on, pretty-printing on, `type`
/// attributes on, item wrapping on, default dialect, no CDATA, no list
/// headers.
///
/// # Examples
///
/// ```rust
/// use json2xml::{value, Json2Xml};
///
/// let xml = Json2Xml::new(value!({"login": "mojombo"}))
///     .with_pretty(false)
///     .with_attr_type(false)
///     .to_xml()
///     .unwrap()
///     .unwrap();
/// assert_eq!(
///     xml,
///     r#"<?xml version="1.0" encoding="UTF-8" ?><all><login>mojombo</login></all>"#
/// );
///
/// assert!(Json2Xml::new(value!({})).to_xml().unwrap().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct Json2Xml {
    data: Value,
    wrapper: String,
    root: bool,
    pretty: bool,
    attr_type: bool,
    item_wrap: bool,
    xpath: bool,
    cdata: bool,
    list_headers: bool,
}

impl Json2Xml {
    pub fn new(data: Value) -> Self {
        Json2Xml {
            data,
            wrapper: "all".to_string(),
            root: true,
            pretty: true,
            attr_type: true,
            item_wrap: true,
            xpath: false,
            cdata: false,
            list_headers: false,
        }
    }

    /// Sets the root element name.
    #[must_use]
    pub fn with_wrapper(mut self, wrapper: impl Into<String>) -> Self {
        self.wrapper = wrapper.into();
        self
    }

    #[must_use]
    pub fn with_root(mut self, root: bool) -> Self {
        self.root = root;
        self
    }

    #[must_use]
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
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

    #[must_use]
    pub fn with_xpath_format(mut self, xpath: bool) -> Self {
        self.xpath = xpath;
        self
    }

    #[must_use]
    pub fn with_cdata(mut self, cdata: bool) -> Self {
        self.cdata = cdata;
        self
    }

    #[must_use]
    pub fn with_list_headers(mut self, list_headers: bool) -> Self {
        self.list_headers = list_headers;
        self
    }

    /// Options handed to the transcoder.
    #[must_use]
    pub fn options(&self) -> XmlOptions {
        XmlOptions::new()
            .with_root(self.root)
            .with_custom_root(self.wrapper.clone())
            .with_attr_type(self.attr_type)
            .with_item_wrap(self.item_wrap)
            .with_cdata(self.cdata)
            .with_list_headers(self.list_headers)
            .with_xpath_format(self.xpath)
    }

    /// Converts the data.
    ///
    /// Null, an empty mapping and an empty list have no document and yield
    /// `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Conversion`] if pretty-printing fails.
    pub fn to_xml(&self) -> Result<Option<String>> {
        if self.data.is_null() || self.data.is_empty_container() {
            tracing::debug!("no document for empty input");
            return Ok(None);
        }

        let xml = dict_to_xml(&self.data, &self.options());
        if !self.pretty {
            return Ok(Some(xml));
        }

        pretty_print(&xml)
            .map(Some)
            .map_err(Error::conversion)
    }

    /// Like [`to_xml`](Self::to_xml), returning bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Conversion`] if pretty-printing fails.
    pub fn to_xml_bytes(&self) -> Result<Option<Vec<u8>>> {
        Ok(self.to_xml()?.map(String::into_bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value;

    #[test]
    fn test_defaults() {
        let options = Json2Xml::new(Value::Null).options();
        assert!(options.root);
        assert_eq!(options.custom_root, "all");
        assert!(options.attr_type);
        assert!(options.item_wrap);
        assert!(!options.cdata);
        assert_eq!(options.dialect, crate::Dialect::Dicttoxml);
    }

    #[test]
    fn test_empty_inputs_have_no_document() {
        assert!(Json2Xml::new(Value::Null).to_xml().unwrap().is_none());
        assert!(Json2Xml::new(value!([])).to_xml().unwrap().is_none());
        assert!(Json2Xml::new(value!({})).to_xml_bytes().unwrap().is_none());
    }

    #[test]
    fn test_pretty_output() {
        let xml = Json2Xml::new(value!({"login": "mojombo", "id": 1}))
            .to_xml()
            .unwrap()
            .unwrap();
        assert_eq!(
            xml,
            concat!(
                "<?xml version=\"1.0\" encoding=\"UTF-8\" ?>\n",
                "<all>\n",
                "  <id type=\"int\">1</id>\n",
                "  <login type=\"str\">mojombo</login>\n",
                "</all>"
            )
        );
    }

    #[test]
    fn test_pretty_keeps_empty_and_blank_values() {
        let xml = Json2Xml::new(value!({"e": null, "s": "", "w": " ", "l": []}))
            .to_xml()
            .unwrap()
            .unwrap();
        assert_eq!(
            xml,
            concat!(
                "<?xml version=\"1.0\" encoding=\"UTF-8\" ?>\n",
                "<all>\n",
                "  <e type=\"null\"></e>\n",
                "  <l type=\"list\"></l>\n",
                "  <s type=\"str\"></s>\n",
                "  <w type=\"str\"> </w>\n",
                "</all>"
            )
        );
    }

    #[test]
    fn test_pretty_without_root_inserts_declaration() {
        let xml = Json2Xml::new(value!({"login": "mojombo"}))
            .with_root(false)
            .to_xml()
            .unwrap()
            .unwrap();
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"));
        assert!(!xml.contains("<all>"));
    }

    #[test]
    fn test_custom_wrapper_and_flags() {
        let xml = Json2Xml::new(value!({"tags": ["a & b"]}))
            .with_wrapper("test")
            .with_pretty(false)
            .with_attr_type(false)
            .with_cdata(true)
            .to_xml()
            .unwrap()
            .unwrap();
        assert!(xml.contains("<test><tags><item><![CDATA[a & b]]></item></tags></test>"));
    }

    #[test]
    fn test_xpath_mode() {
        let xml = Json2Xml::new(value!({"a": 1}))
            .with_xpath_format(true)
            .with_pretty(false)
            .to_xml()
            .unwrap()
            .unwrap();
        assert!(xml.contains(r#"<map xmlns="http://www.w3.org/2005/xpath-functions">"#));
    }

    #[test]
    fn test_pretty_scalar() {
        let xml = Json2Xml::new(Value::from("hello"))
            .with_attr_type(false)
            .to_xml()
            .unwrap()
            .unwrap();
        assert!(xml.contains("<all>\n  <item>hello</item>\n</all>"));
    }
}
