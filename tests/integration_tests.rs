use json2xml::ids::IdGenerator;
use json2xml::{
    convert_to_xml, dict_to_xml_with_ids, from_str, pretty_print, to_string_with_options, value,
    Error, Json2Xml, Namespace, Value, XmlOptions,
};
use serde::Serialize;

const PROLOG: &str = r#"<?xml version="1.0" encoding="UTF-8" ?>"#;

#[derive(Serialize)]
struct Product {
    sku: String,
    price: f64,
    quantity: u32,
}

#[derive(Serialize)]
struct Order {
    order_id: u32,
    items: Vec<Product>,
    note: Option<String>,
}

struct Sequential(u32);

impl IdGenerator for Sequential {
    fn next_in(&mut self, start: u32, _end: u32) -> u32 {
        self.0 += 1;
        start + self.0
    }
}

fn plain() -> XmlOptions {
    XmlOptions::new().with_attr_type(false)
}

fn parse(json: &str) -> Value {
    from_str(json).unwrap()
}

#[test]
fn test_mock_payload_exact() {
    let xml = convert_to_xml(&parse(r#"{"mock":"payload"}"#), Some(&plain()));
    assert_eq!(
        xml,
        format!("{}<root><mock>payload</mock></root>", PROLOG)
    );
}

#[test]
fn test_bike_item_wrap() {
    let data = parse(r#"{"bike":["blue","green"]}"#);
    let options = plain().with_root(false);
    assert_eq!(
        convert_to_xml(&data, Some(&options)),
        "<bike><item>blue</item><item>green</item></bike>"
    );
    assert_eq!(
        convert_to_xml(&data, Some(&options.with_item_wrap(false))),
        "<bike>blue</bike><bike>green</bike>"
    );
}

#[test]
fn test_keys_sorted_regardless_of_input_order() {
    let xml = convert_to_xml(&parse(r#"{"z":1,"a":2,"m":3}"#), Some(&plain()));
    let a = xml.find("<a>").unwrap();
    let m = xml.find("<m>").unwrap();
    let z = xml.find("<z>").unwrap();
    assert!(a < m && m < z);
}

#[test]
fn test_invalid_keys() {
    let xml = convert_to_xml(
        &parse(r#"{"123":"x","/invalid/path":"y"}"#),
        Some(&plain().with_root(false)),
    );
    assert_eq!(
        xml,
        r#"<key name="/invalid/path">y</key><n123>x</n123>"#
    );
}

#[test]
fn test_non_name_characters_relocated() {
    let xml = convert_to_xml(&value!({"k²": 1, "名前": 2}), Some(&plain()));
    assert_eq!(
        xml,
        format!(
            "{}<root><key name=\"k²\">1</key><名前>2</名前></root>",
            PROLOG
        )
    );
}

#[test]
fn test_type_attributes() {
    let data = parse(r#"{"s":"a","i":1,"f":1.1,"b":true,"n":null,"l":[],"d":{}}"#);
    let xml = convert_to_xml(&data, Some(&XmlOptions::new().with_root(false)));
    assert_eq!(
        xml,
        concat!(
            r#"<b type="bool">true</b>"#,
            r#"<d type="dict"></d>"#,
            r#"<f type="float">1.1</f>"#,
            r#"<i type="int">1</i>"#,
            r#"<l type="list"></l>"#,
            r#"<n type="null"></n>"#,
            r#"<s type="str">a</s>"#
        )
    );
}

#[test]
fn test_meta_keys_together() {
    let data = parse(
        r#"{
            "flat_parent": {"child": {"@flat": true, "x": 1}},
            "valued": {"@val": "v", "ignored": 1},
            "attributed": {"@attrs": {"a": "1", "b": "2"}, "inner": "i"}
        }"#,
    );
    let xml = convert_to_xml(&data, Some(&XmlOptions::new().with_root(false)));
    assert!(xml.contains(r#"<flat_parent type="dict"><x type="int">1</x></flat_parent>"#));
    assert!(xml.contains(r#"<valued type="dict">v</valued>"#));
    assert!(xml.contains(r#"<attributed a="1" b="2"><inner type="str">i</inner></attributed>"#));
}

#[test]
fn test_escaped_values_and_cdata() {
    let data = parse(r#"{"html":"<b>bold</b> & \"quoted\""}"#);
    assert!(convert_to_xml(&data, Some(&plain()))
        .contains("<html>&lt;b&gt;bold&lt;/b&gt; &amp; &quot;quoted&quot;</html>"));
    assert!(convert_to_xml(&data, Some(&plain().with_cdata(true)))
        .contains(r#"<html><![CDATA[<b>bold</b> & "quoted"]]></html>"#));
}

#[test]
fn test_namespaces_only_with_root() {
    let options = plain()
        .with_namespace("xmlns", Namespace::uri("http://example.com/"))
        .with_namespace("ns1", Namespace::uri("http://example.com/ns1"));
    let with_root = convert_to_xml(&value!({"a": 1}), Some(&options));
    assert!(with_root.contains(
        r#"<root xmlns="http://example.com/" xmlns:ns1="http://example.com/ns1">"#
    ));

    let without_root = convert_to_xml(&value!({"a": 1}), Some(&options.with_root(false)));
    assert_eq!(without_root, "<a>1</a>");
}

#[test]
fn test_ids_are_deterministic_with_injected_source() {
    let options = plain().with_ids(true);
    let data = value!({"person": {"name": "Ann"}});
    let xml = dict_to_xml_with_ids(&data, &options, &mut Sequential(0));
    assert_eq!(
        xml,
        format!(
            "{}<root><person id=\"root_100001\"><name id=\"person_100002\">Ann</name></person></root>",
            PROLOG
        )
    );
}

#[test]
fn test_struct_with_list_of_structs() {
    let order = Order {
        order_id: 7,
        items: vec![
            Product {
                sku: "W-1".to_string(),
                price: 2.5,
                quantity: 2,
            },
            Product {
                sku: "G-2".to_string(),
                price: 10.0,
                quantity: 1,
            },
        ],
        note: None,
    };
    let xml = to_string_with_options(&order, plain().with_custom_root("order")).unwrap();
    assert_eq!(
        xml,
        format!(
            "{}<order><items>{}{}</items><note></note><order_id>7</order_id></order>",
            PROLOG,
            "<item><price>2.5</price><quantity>2</quantity><sku>W-1</sku></item>",
            "<item><price>10</price><quantity>1</quantity><sku>G-2</sku></item>"
        )
    );
}

#[test]
fn test_list_headers() {
    let data = parse(r#"{"person":[{"name":"a"},{"name":"b"}]}"#);
    let xml = convert_to_xml(&data, Some(&plain().with_root(false).with_list_headers(true)));
    assert_eq!(
        xml,
        "<person><name>a</name></person><person><name>b</name></person>"
    );
}

#[test]
fn test_empty_top_level_has_no_document() {
    for json in ["{}", "[]", "null"] {
        let result = Json2Xml::new(parse(json)).to_xml().unwrap();
        assert!(result.is_none(), "{} should produce no document", json);
    }
}

#[test]
fn test_empty_containers_convert_without_error() {
    assert_eq!(
        convert_to_xml(&value!({}), Some(&plain())),
        format!("{}<root></root>", PROLOG)
    );
    assert_eq!(
        convert_to_xml(&value!([]), Some(&plain().with_root(false))),
        ""
    );
}

#[test]
fn test_pretty_print_malformed() {
    assert!(matches!(
        pretty_print("<unclosed"),
        Err(Error::MalformedXml(_))
    ));
}

#[test]
fn test_converter_pretty_document() {
    let xml = Json2Xml::new(parse(r#"{"login":"mojombo","id":1,"site_admin":false}"#))
        .with_wrapper("user")
        .with_attr_type(false)
        .to_xml()
        .unwrap()
        .unwrap();
    assert_eq!(
        xml,
        concat!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\" ?>\n",
            "<user>\n",
            "  <id>1</id>\n",
            "  <login>mojombo</login>\n",
            "  <site_admin>false</site_admin>\n",
            "</user>"
        )
    );
}

#[test]
fn test_parse_errors() {
    assert!(matches!(from_str(""), Err(Error::Parse(_))));
    assert!(matches!(from_str("{invalid"), Err(Error::Parse(_))));
}

#[test]
fn test_unicode_passthrough() {
    let xml = convert_to_xml(&parse(r#"{"greeting":"héllo 世界"}"#), Some(&plain()));
    assert!(xml.contains("<greeting>héllo 世界</greeting>"));
}
