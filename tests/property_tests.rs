//! Property-based tests for escaping, CDATA, name repair and conversion.

use json2xml::escape::{escape_xml, wrap_cdata};
use json2xml::name::{key_is_valid_xml, make_valid_xml_name};
use json2xml::xpath::convert_to_xpath31;
use json2xml::{convert_to_xml, pretty_print, Map, Value, XmlOptions};
use proptest::prelude::*;

fn unescape(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

fn arb_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        (-1.0e6f64..1.0e6).prop_map(Value::from),
        ".{0,12}".prop_map(Value::from),
    ]
}

// Mixes legal name characters with digits, spaces, colons and symbols
// that XML does not allow in names.
fn arb_key() -> impl Strategy<Value = String> {
    "[a-zA-Z_0-9 :\\-.é²½×&<]{0,6}"
}

fn arb_value() -> impl Strategy<Value = Value> {
    arb_leaf().prop_recursive(4, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::vec((arb_key(), inner), 0..6)
                .prop_map(|entries| Value::Object(entries.into_iter().collect::<Map>())),
        ]
    })
}

proptest! {
    #[test]
    fn prop_escape_leaves_no_specials(s in ".*") {
        let escaped = escape_xml(&s);
        prop_assert!(!escaped.contains('<'));
        prop_assert!(!escaped.contains('>'));
        prop_assert!(!escaped.contains('"'));
        prop_assert!(!escaped.contains('\''));
    }

    #[test]
    fn prop_escape_is_reversible(s in ".*") {
        prop_assert_eq!(unescape(&escape_xml(&s)), s);
    }

    #[test]
    fn prop_cdata_is_one_valid_section_chain(s in ".*") {
        let wrapped = wrap_cdata(&s);
        prop_assert!(wrapped.starts_with("<![CDATA["));
        prop_assert!(wrapped.ends_with("]]>"));
        let inner = &wrapped["<![CDATA[".len()..wrapped.len() - "]]>".len()];
        // every terminator inside is immediately reopened
        for (i, _) in inner.match_indices("]]>") {
            prop_assert!(inner[i + 3..].starts_with("<![CDATA["));
        }
        let content = inner.replace("]]><![CDATA[", "");
        prop_assert_eq!(content, s);
    }

    #[test]
    fn prop_repaired_names_are_valid(key in ".{0,16}") {
        let mut attrs = json2xml::escape::Attrs::new();
        let name = make_valid_xml_name(&key, &mut attrs);
        let check = name.replace(':', "").replace("@flat", "");
        prop_assert!(key_is_valid_xml(&check) || name == "key");
    }

    #[test]
    fn prop_symbol_keys_never_become_names(key in "[a-z][a-z²³¹¼½¾×÷]{0,5}") {
        let mut attrs = json2xml::escape::Attrs::new();
        let name = make_valid_xml_name(&key, &mut attrs);
        let has_symbol = key.chars().any(|c| "²³¹¼½¾×÷".contains(c));
        if has_symbol {
            prop_assert_eq!(name, "key");
            prop_assert_eq!(attrs.get("name"), Some(&Value::from(key.as_str())));
        } else {
            prop_assert_eq!(name, key);
        }
    }

    #[test]
    fn prop_default_dialect_pretty_prints(value in arb_value()) {
        let xml = convert_to_xml(&value, None);
        prop_assert!(pretty_print(&xml).is_ok(), "not well-formed: {}", xml);
    }

    #[test]
    fn prop_cdata_output_pretty_prints(value in arb_value()) {
        let options = XmlOptions::new().with_cdata(true).with_ids(true);
        let xml = convert_to_xml(&value, Some(&options));
        prop_assert!(pretty_print(&xml).is_ok(), "not well-formed: {}", xml);
    }

    #[test]
    fn prop_xpath_output_pretty_prints(value in arb_value()) {
        let xml = convert_to_xml(&value, Some(&XmlOptions::xpath()));
        prop_assert!(pretty_print(&xml).is_ok(), "not well-formed: {}", xml);
    }

    #[test]
    fn prop_output_ignores_insertion_order(
        entries in prop::collection::btree_map("[a-z]{1,6}", any::<i32>(), 0..8)
    ) {
        let forward: Map = entries.iter().map(|(k, v)| (k.clone(), Value::from(*v))).collect();
        let backward: Map = entries.iter().rev().map(|(k, v)| (k.clone(), Value::from(*v))).collect();
        prop_assert_eq!(
            convert_to_xml(&Value::Object(forward.clone()), None),
            convert_to_xml(&Value::Object(backward.clone()), None)
        );
        prop_assert_eq!(
            convert_to_xpath31(&Value::Object(forward), None),
            convert_to_xpath31(&Value::Object(backward), None)
        );
    }
}
