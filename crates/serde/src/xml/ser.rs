//! XML saving: typed model to [`XmlElement`] tree to text.
//!
//! Output format:
//!
//! - `<?xml version="1.0" encoding="utf-8"?>` followed by the root on the next line
//! - one tab per depth level, LF line endings, UTF-8 without BOM, no trailing newline
//! - childless elements as `<tag attr="v" />`, text-only elements inline
//! - root namespace declarations taken from the original document when one is given,
//!   and none at all otherwise

use std::io::Write;
use std::path::Path;

use modforge_xml_mapping::{XmlAttribute, XmlElement, XmlNode, XmlRoot, write_root};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use tracing::debug;

use super::de::read_root_namespaces;
use super::utils::{
    INDENT_CHAR, XML_DECLARATION_ENCODING, XML_DECLARATION_VERSION, escape_attribute,
    escape_text, sanitize_comment,
};
use crate::error::{Result, SerdeError};

/// Streams an [`XmlElement`] tree to quick-xml events.
pub struct XmlSerializer<W: Write> {
    writer: Writer<W>,
}

impl<W: Write> XmlSerializer<W> {
    /// Creates a serializer using tab indentation.
    pub fn new(writer: W) -> Self {
        Self {
            writer: Writer::new_with_indent(writer, INDENT_CHAR, 1),
        }
    }

    /// Writes the XML declaration followed by the root element.
    pub fn write_document(&mut self, root: &XmlElement) -> Result<()> {
        self.writer.write_event(Event::Decl(BytesDecl::new(
            XML_DECLARATION_VERSION,
            Some(XML_DECLARATION_ENCODING),
            None,
        )))?;
        self.write_element(root)
    }

    /// Writes one element and its subtree.
    pub fn write_element(&mut self, element: &XmlElement) -> Result<()> {
        let content = start_tag_content(element);
        let name_len = element.name.len();

        if element.children.is_empty() {
            let start = BytesStart::from_content(format!("{} ", content), name_len);
            self.writer.write_event(Event::Empty(start))?;
            return Ok(());
        }

        self.writer
            .write_event(Event::Start(BytesStart::from_content(content, name_len)))?;

        for child in &element.children {
            match child {
                XmlNode::Element(child) => self.write_element(child)?,
                XmlNode::Text(text) => {
                    self.writer
                        .write_event(Event::Text(BytesText::from_escaped(escape_text(text))))?;
                }
                XmlNode::Comment(comment) => {
                    self.writer.write_event(Event::Comment(BytesText::from_escaped(
                        sanitize_comment(comment),
                    )))?;
                }
            }
        }

        self.writer
            .write_event(Event::End(BytesEnd::new(element.name.as_str())))?;
        Ok(())
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

/// Builds the raw start-tag content: name followed by pre-escaped attributes.
fn start_tag_content(element: &XmlElement) -> String {
    let mut content = element.name.clone();
    for attribute in &element.attributes {
        content.push(' ');
        content.push_str(&attribute.name);
        content.push_str("=\"");
        content.push_str(&escape_attribute(&attribute.value));
        content.push('"');
    }
    content
}

/// Renders an element tree as a complete document.
pub fn to_document_vec(root: &XmlElement) -> Result<Vec<u8>> {
    let mut serializer = XmlSerializer::new(Vec::new());
    serializer.write_document(root)?;
    Ok(serializer.into_inner())
}

/// Renders an element tree as a complete document string.
pub fn to_document_string(root: &XmlElement) -> Result<String> {
    let bytes = to_document_vec(root)?;
    String::from_utf8(bytes).map_err(|e| {
        SerdeError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })
}

/// Replaces the root's namespace declarations with those of `original`.
///
/// Declarations from the original come first, in their original order. Without an
/// original document the root carries no declarations.
pub fn apply_root_namespaces(root: &mut XmlElement, original: Option<&str>) -> Result<()> {
    let namespaces = match original {
        Some(xml) => read_root_namespaces(xml)?,
        None => Vec::new(),
    };

    let mut attributes: Vec<XmlAttribute> = namespaces;
    attributes.extend(
        root.attributes
            .drain(..)
            .filter(|attribute| !attribute.is_namespace_declaration()),
    );
    root.attributes = attributes;
    Ok(())
}

/// Builds the root element for `value`, with namespaces reused from `original`.
pub fn to_xml_element<T: XmlRoot>(value: &T, original: Option<&str>) -> Result<XmlElement> {
    let mut root = write_root(value)?;
    apply_root_namespaces(&mut root, original)?;
    Ok(root)
}

/// Saves a model to an XML string.
///
/// When `original` is given, the root namespace declarations of that document are
/// reused verbatim; otherwise none are written.
///
/// # Examples
///
/// ```ignore
/// use modforge_serde::xml::{from_xml_str, to_xml_string};
/// use modforge_model::domain::AttributesDo;
///
/// let attributes: AttributesDo = from_xml_str(&xml)?;
/// let saved = to_xml_string(&attributes, Some(&xml))?;
/// ```
pub fn to_xml_string<T: XmlRoot>(value: &T, original: Option<&str>) -> Result<String> {
    to_document_string(&to_xml_element(value, original)?)
}

/// Saves a model to XML bytes.
pub fn to_xml_vec<T: XmlRoot>(value: &T, original: Option<&str>) -> Result<Vec<u8>> {
    to_document_vec(&to_xml_element(value, original)?)
}

/// Saves a model to a file.
///
/// The document is written to a temporary file in the destination directory and moved
/// into place, so readers never observe a partial file.
pub fn to_xml_path<T: XmlRoot>(
    value: &T,
    path: impl AsRef<Path>,
    original: Option<&str>,
) -> Result<()> {
    let bytes = to_xml_vec(value, original)?;
    write_atomic(path.as_ref(), &bytes)
}

/// Async variant of [`to_xml_path`], run on the blocking thread pool.
pub async fn to_xml_path_async<T>(
    value: T,
    path: impl AsRef<Path>,
    original: Option<String>,
) -> Result<()>
where
    T: XmlRoot + Send,
{
    let path = path.as_ref().to_path_buf();
    tokio::task::spawn_blocking(move || to_xml_path(&value, &path, original.as_deref())).await?
}

/// Writes `bytes` to `path` through a temporary file persisted over the destination.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = tempfile::NamedTempFile::new_in(directory)?;
    file.write_all(bytes)?;
    file.flush()?;
    file.persist(path).map_err(|e| SerdeError::Io(e.error))?;

    debug!(path = %path.display(), bytes = bytes.len(), "wrote file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_element_uses_spaced_self_closing_form() {
        let root = XmlElement::new("a").with_attribute("x", "1");
        let xml = to_document_string(&root).unwrap();
        assert_eq!(xml, "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<a x=\"1\" />");
    }

    #[test]
    fn test_nested_elements_are_tab_indented() {
        let root = XmlElement::new("a").with_child(
            XmlElement::new("b").with_child(XmlElement::new("c")),
        );
        let xml = to_document_string(&root).unwrap();
        assert_eq!(
            xml,
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<a>\n\t<b>\n\t\t<c />\n\t</b>\n</a>"
        );
    }

    #[test]
    fn test_text_written_inline_and_escaped() {
        let root = XmlElement::new("a").with_child(XmlElement::new("Doc").with_text("x < y & z"));
        let xml = to_document_string(&root).unwrap();
        assert!(xml.ends_with("<a>\n\t<Doc>x &lt; y &amp; z</Doc>\n</a>"), "{xml}");
    }

    #[test]
    fn test_attribute_values_escaped() {
        let root = XmlElement::new("a").with_attribute("v", "\"q\"\n");
        let xml = to_document_string(&root).unwrap();
        assert!(xml.ends_with("<a v=\"&quot;q&quot;&#xA;\" />"), "{xml}");
    }

    #[test]
    fn test_apply_root_namespaces() {
        let mut root = XmlElement::new("a")
            .with_attribute("xmlns:stale", "urn:stale")
            .with_attribute("id", "1");
        let original = r#"<a xmlns:xsd="http://www.w3.org/2001/XMLSchema" id="1"/>"#;
        apply_root_namespaces(&mut root, Some(original)).unwrap();

        let names: Vec<_> = root.attributes.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["xmlns:xsd", "id"]);

        apply_root_namespaces(&mut root, None).unwrap();
        let names: Vec<_> = root.attributes.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["id"]);
    }
}
