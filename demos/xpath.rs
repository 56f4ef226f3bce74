//! XPath 3.1 json-to-xml output.
//!
//! Run with: cargo run --example xpath

use json2xml::{from_str, Json2Xml};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let value = from_str(
        r#"{"name": "John", "age": 30, "active": true, "tags": ["a", null], "address": {"city": "Oslo"}}"#,
    )?;

    if let Some(xml) = Json2Xml::new(value).with_xpath_format(true).to_xml()? {
        println!("{}", xml);
    }
    Ok(())
}
