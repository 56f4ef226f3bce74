use json2xml::xpath::convert_to_xpath31;
use json2xml::{convert_to_xml, from_str, pretty_print, value, Json2Xml, Value, XmlOptions};

const NS_MAP: &str = r#"<map xmlns="http://www.w3.org/2005/xpath-functions">"#;

fn xpath(json: &str) -> String {
    convert_to_xml(&from_str(json).unwrap(), Some(&XmlOptions::xpath()))
}

#[test]
fn test_person_object() {
    let xml = xpath(r#"{"name":"John","age":30,"active":true}"#);
    assert!(xml.contains(NS_MAP));
    assert!(xml.contains(r#"<string key="name">John</string>"#));
    assert!(xml.contains(r#"<number key="age">30</number>"#));
    assert!(xml.contains(r#"<boolean key="active">true</boolean>"#));
    assert!(xml.ends_with("</map>"));
}

#[test]
fn test_full_document_exact() {
    let xml = xpath(r#"{"tags":["a",null],"n":{"x":1.5}}"#);
    assert_eq!(
        xml,
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8" ?>"#,
            r#"<map xmlns="http://www.w3.org/2005/xpath-functions">"#,
            r#"<map key="n"><number key="x">1.5</number></map>"#,
            r#"<array key="tags"><string>a</string><null/></array>"#,
            "</map>"
        )
    );
}

#[test]
fn test_top_level_array() {
    let xml = xpath("[1, 2]");
    assert!(xml.contains(
        r#"<array xmlns="http://www.w3.org/2005/xpath-functions"><number>1</number><number>2</number></array>"#
    ));
}

#[test]
fn test_top_level_scalars_wrapped() {
    for (json, inner) in [
        ("42", "<number>42</number>"),
        ("\"hi\"", "<string>hi</string>"),
        ("false", "<boolean>false</boolean>"),
        ("null", "<null/>"),
    ] {
        let xml = xpath(json);
        assert!(
            xml.ends_with(&format!("{}{}</map>", NS_MAP, inner)),
            "unexpected output for {}: {}",
            json,
            xml
        );
    }
}

#[test]
fn test_options_other_than_dialect_ignored() {
    let options = XmlOptions::xpath()
        .with_attr_type(false)
        .with_cdata(true)
        .with_ids(true)
        .with_item_wrap(false);
    let data = value!({"s": "a<b", "l": [1]});
    assert_eq!(
        convert_to_xml(&data, Some(&options)),
        convert_to_xml(&data, Some(&XmlOptions::xpath()))
    );
    assert!(convert_to_xml(&data, Some(&options)).contains(r#"<string key="s">a&lt;b</string>"#));
}

#[test]
fn test_meta_keys_not_interpreted() {
    let data = value!({"x": {"@attrs": {"a": 1}, "@flat": true}});
    assert_eq!(
        convert_to_xpath31(&data, None),
        concat!(
            r#"<map><map key="x">"#,
            r#"<map key="@attrs"><number key="a">1</number></map>"#,
            r#"<boolean key="@flat">true</boolean>"#,
            "</map></map>"
        )
    );
}

#[test]
fn test_special_characters_in_keys() {
    let data = value!({"a&b": "<x>"});
    assert_eq!(
        convert_to_xpath31(&data, None),
        r#"<map><string key="a&amp;b">&lt;x&gt;</string></map>"#
    );
}

#[test]
fn test_pretty_xpath_document() {
    let xml = Json2Xml::new(value!({"a": [true]}))
        .with_xpath_format(true)
        .to_xml()
        .unwrap()
        .unwrap();
    assert_eq!(
        xml,
        concat!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\" ?>\n",
            "<map xmlns=\"http://www.w3.org/2005/xpath-functions\">\n",
            "  <array key=\"a\">\n",
            "    <boolean>true</boolean>\n",
            "  </array>\n",
            "</map>"
        )
    );
    assert!(pretty_print(&xml).is_ok());
}

#[test]
fn test_bytes_as_string() {
    let xml = convert_to_xpath31(&Value::Bytes(vec![b'o', b'k']), Some("raw"));
    assert_eq!(xml, r#"<string key="raw">ok</string>"#);
}
