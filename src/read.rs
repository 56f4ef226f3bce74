//! JSON input sources: strings, bytes, readers, files and URLs.
//!
//! Every reader parses with `serde_json` straight into [`Value`], keeping
//! object members in document order.

use crate::{Error, Result, Value};
use std::io::Read;
use std::path::Path;

/// Parses JSON text.
///
/// # Errors
///
/// Returns [`Error::Parse`] for empty or malformed input.
///
/// # Examples
///
/// ```rust
/// use json2xml::read::read_from_string;
///
/// let value = read_from_string(r#"{"login": "mojombo", "id": 1}"#).unwrap();
/// assert_eq!(value.as_object().unwrap().len(), 2);
/// assert!(read_from_string("").is_err());
/// ```
pub fn read_from_string(json: &str) -> Result<Value> {
    read_from_slice(json.as_bytes())
}

/// Parses JSON bytes.
///
/// # Errors
///
/// Returns [`Error::Parse`] for empty or malformed input.
pub fn read_from_slice(json: &[u8]) -> Result<Value> {
    if json.iter().all(u8::is_ascii_whitespace) {
        return Err(Error::parse("empty input"));
    }
    tracing::debug!(bytes = json.len(), "parsing JSON input");
    serde_json::from_slice(json).map_err(Error::parse)
}

/// Reads `reader` to the end and parses the result.
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails and [`Error::Parse`] for empty or
/// malformed input.
pub fn read_from_reader<R: Read>(mut reader: R) -> Result<Value> {
    let mut buf = Vec::new();
    reader
        .read_to_end(&mut buf)
        .map_err(|e| Error::io(&e.to_string()))?;
    read_from_slice(&buf)
}

/// Reads and parses a JSON file.
///
/// # Errors
///
/// Returns [`Error::FileRead`] naming `path` if the file cannot be read or
/// does not hold valid JSON.
pub fn read_from_json_file<P: AsRef<Path>>(path: P) -> Result<Value> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "reading JSON file");

    let bytes = std::fs::read(path).map_err(|e| Error::file_read(path.display(), e))?;
    serde_json::from_slice(&bytes).map_err(|e| Error::file_read(path.display(), e))
}

/// Fetches JSON from `url` with a blocking GET, appending `params` to the
/// query string.
///
/// # Errors
///
/// Returns [`Error::Fetch`] on network failure, any status other than
/// `200 OK`, or a body that is not valid JSON.
#[cfg(feature = "http")]
pub fn read_from_url(url: &str, params: &[(&str, &str)]) -> Result<Value> {
    tracing::debug!(url = %url, params = params.len(), "fetching JSON");

    let client = reqwest::blocking::Client::new();
    let response = client
        .get(url)
        .query(params)
        .send()
        .map_err(|e| Error::fetch(format!("failed to GET {}: {}", url, e)))?;

    let status = response.status();
    if status != reqwest::StatusCode::OK {
        return Err(Error::fetch(format!("status {} for {}", status, url)));
    }

    let body = response.bytes().map_err(Error::fetch)?;
    tracing::debug!(bytes = body.len(), "received JSON body");
    serde_json::from_slice(&body).map_err(Error::fetch)
}
