//! Re-indents XML text with two spaces per nesting level.
//!
//! The input is streamed through a `quick-xml` reader and written back with
//! an indenting writer. Element text is kept byte for byte: text, entity
//! references and CDATA sections inside one element are gathered into a
//! single text run so no indentation is inserted into content.
//!
//! ```rust
//! use json2xml::pretty::pretty_print;
//!
//! let xml = r#"<?xml version="1.0" encoding="UTF-8" ?><root><child>value</child></root>"#;
//! let pretty = pretty_print(xml).unwrap();
//! assert_eq!(
//!     pretty,
//!     "<?xml version=\"1.0\" encoding=\"UTF-8\" ?>\n<root>\n  <child>value</child>\n</root>"
//! );
//! ```

use crate::{Error, Result};
use quick_xml::events::{BytesText, Event};
use quick_xml::{Reader, Writer};

/// Declaration inserted when the input has none.
pub const DEFAULT_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Pretty-prints `xml`, keeping its declaration or inserting
/// [`DEFAULT_DECLARATION`], followed by a newline.
///
/// # Errors
///
/// Returns [`Error::MalformedXml`] if the input is not well-formed, including
/// elements left open at the end of input and input without any element.
pub fn pretty_print(xml: &str) -> Result<String> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(false);

    let mut writer = Writer::new_with_indent(Vec::with_capacity(xml.len() * 2), b' ', 2);
    let mut pending: Vec<u8> = Vec::new();
    let mut depth: usize = 0;
    let mut seen_element = false;
    let mut has_declaration = false;
    let mut just_opened = false;

    loop {
        let event = reader.read_event().map_err(|e| {
            Error::malformed_xml(format!("{} at position {}", e, reader.error_position()))
        })?;

        match event {
            Event::Eof => break,
            Event::Text(text) => {
                pending.extend_from_slice(&text);
                continue;
            }
            Event::GeneralRef(reference) => {
                pending.push(b'&');
                pending.extend_from_slice(&reference);
                pending.push(b';');
                continue;
            }
            Event::CData(cdata) => {
                pending.extend_from_slice(b"<![CDATA[");
                pending.extend_from_slice(&cdata);
                pending.extend_from_slice(b"]]>");
                continue;
            }
            _ => {}
        }

        // Text that is an element's only child is content, even when blank.
        let only_child = just_opened && matches!(event, Event::End(_));
        flush_text(&mut writer, &mut pending, only_child)?;

        match &event {
            Event::Decl(_) => has_declaration = true,
            Event::Start(_) => {
                depth += 1;
                seen_element = true;
            }
            Event::End(_) => depth = depth.saturating_sub(1),
            Event::Empty(_) => seen_element = true,
            _ => {}
        }

        just_opened = matches!(event, Event::Start(_));
        writer.write_event(event).map_err(Error::conversion)?;
    }

    if depth > 0 {
        return Err(Error::malformed_xml(format!(
            "{} element(s) left unclosed at end of input",
            depth
        )));
    }
    if !seen_element {
        return Err(Error::malformed_xml("document has no root element"));
    }
    flush_text(&mut writer, &mut pending, false)?;

    let body = String::from_utf8(writer.into_inner()).map_err(Error::conversion)?;
    tracing::trace!(bytes = body.len(), "pretty-printed XML");

    if has_declaration {
        Ok(body)
    } else {
        Ok(format!("{}\n{}", DEFAULT_DECLARATION, body))
    }
}

/// Writes the gathered text run. Blank runs are indentation and dropped
/// unless `keep_blank` is set; a kept run, even an empty one, also stops the
/// writer from breaking the line before the following end tag.
fn flush_text(
    writer: &mut Writer<Vec<u8>>,
    pending: &mut Vec<u8>,
    keep_blank: bool,
) -> Result<()> {
    if !keep_blank && pending.iter().all(u8::is_ascii_whitespace) {
        pending.clear();
        return Ok(());
    }

    let text = std::str::from_utf8(pending).map_err(Error::malformed_xml)?;
    writer
        .write_event(Event::Text(BytesText::from_escaped(text)))
        .map_err(Error::conversion)?;
    pending.clear();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indents_nested_elements() {
        let xml = "<root><a><b>1</b></a><c>2</c></root>";
        assert_eq!(
            pretty_print(xml).unwrap(),
            concat!(
                "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
                "<root>\n",
                "  <a>\n",
                "    <b>1</b>\n",
                "  </a>\n",
                "  <c>2</c>\n",
                "</root>"
            )
        );
    }

    #[test]
    fn test_keeps_existing_declaration() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8" ?><root/>"#;
        let pretty = pretty_print(xml).unwrap();
        assert!(pretty.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\" ?>\n"));
        assert_eq!(pretty.matches("<?xml").count(), 1);
    }

    #[test]
    fn test_text_with_entities_untouched() {
        let xml = "<root><t>Wheels &amp; Steers</t><u>&lt;x&gt;</u></root>";
        let pretty = pretty_print(xml).unwrap();
        assert!(pretty.contains("<t>Wheels &amp; Steers</t>"));
        assert!(pretty.contains("<u>&lt;x&gt;</u>"));
    }

    #[test]
    fn test_cdata_untouched() {
        let xml = "<root><t><![CDATA[a < b]]></t></root>";
        let pretty = pretty_print(xml).unwrap();
        assert!(pretty.contains("  <t><![CDATA[a < b]]></t>"));
    }

    #[test]
    fn test_empty_and_blank_elements_stay_inline() {
        let pretty = pretty_print("<r><e></e><w> </w><n><c></c></n></r>").unwrap();
        assert_eq!(
            pretty,
            concat!(
                "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
                "<r>\n",
                "  <e></e>\n",
                "  <w> </w>\n",
                "  <n>\n",
                "    <c></c>\n",
                "  </n>\n",
                "</r>"
            )
        );
    }

    #[test]
    fn test_indentation_between_children_dropped() {
        let pretty = pretty_print("<r>\n    <a>1</a>\n    <b>2</b>\n</r>").unwrap();
        assert!(pretty.ends_with("<r>\n  <a>1</a>\n  <b>2</b>\n</r>"));
    }

    #[test]
    fn test_unclosed_tag_is_error() {
        assert!(matches!(
            pretty_print("<unclosed"),
            Err(Error::MalformedXml(_))
        ));
    }

    #[test]
    fn test_open_element_at_eof_is_error() {
        assert!(matches!(
            pretty_print("<root><a></a>"),
            Err(Error::MalformedXml(_))
        ));
    }

    #[test]
    fn test_mismatched_end_is_error() {
        assert!(matches!(
            pretty_print("<a><b></a>"),
            Err(Error::MalformedXml(_))
        ));
    }

    #[test]
    fn test_empty_input_is_error() {
        assert!(matches!(pretty_print(""), Err(Error::MalformedXml(_))));
    }
}
