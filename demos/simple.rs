//! Converting JSON text and typed data to XML.
//!
//! Run with: cargo run --example simple

use json2xml::{from_str, to_string, Json2Xml};
use serde::Serialize;
use std::error::Error;

#[derive(Serialize)]
struct User {
    login: String,
    id: u32,
    site_admin: bool,
    followers: Vec<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let value = from_str(r#"{"login": "mojombo", "id": 1, "site_admin": false}"#)?;
    if let Some(xml) = Json2Xml::new(value).to_xml()? {
        println!("From JSON text:\n{}\n", xml);
    }

    let user = User {
        login: "octocat".to_string(),
        id: 583231,
        site_admin: false,
        followers: vec!["alice".to_string(), "bob".to_string()],
    };
    println!("From a struct:\n{}", to_string(&user)?);

    Ok(())
}
