//! Customizing output with XmlOptions and meta keys.
//!
//! Run with: cargo run --example custom_options

use json2xml::ids::RandomIds;
use json2xml::{dict_to_xml, dict_to_xml_with_ids, pretty_print, value, Namespace, XmlOptions};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let data = value!({
        "bike": ["blue", "green"],
        "price": {"@attrs": {"currency": "EUR"}, "@val": 120},
        "parts@flat": ["frame", "wheel"]
    });

    println!("Defaults:");
    println!("{}\n", pretty_print(&dict_to_xml(&data, &XmlOptions::new()))?);

    println!("No types, repeated parent tags:");
    let options = XmlOptions::new()
        .with_attr_type(false)
        .with_item_wrap(false)
        .with_custom_root("shop");
    println!("{}\n", dict_to_xml(&data, &options));

    println!("Custom item names and CDATA:");
    let options = XmlOptions::new()
        .with_attr_type(false)
        .with_cdata(true)
        .with_item_name_fn(|parent| format!("{}_entry", parent));
    println!("{}\n", dict_to_xml(&value!({"notes": ["a < b", "c & d"]}), &options));

    println!("Namespaces and reproducible ids:");
    let options = XmlOptions::new()
        .with_ids(true)
        .with_namespace("xmlns", Namespace::uri("http://example.com/shop"))
        .with_namespace(
            "xsi",
            Namespace::xsi(
                Some("http://www.w3.org/2001/XMLSchema-instance"),
                Some("http://example.com/shop shop.xsd"),
            ),
        );
    let mut ids = RandomIds::seeded(7);
    let xml = dict_to_xml_with_ids(&value!({"name": "Wheels & Steers"}), &options, &mut ids);
    println!("{}", pretty_print(&xml)?);

    Ok(())
}
