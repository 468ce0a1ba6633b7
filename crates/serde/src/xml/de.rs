//! XML loading: text to [`XmlElement`] tree to typed model.
//!
//! Parsing runs over quick-xml events and builds an owned tree. Text, CDATA and entity
//! references are accumulated into one text node until the next markup event; text
//! that is only whitespace is dropped as insignificant. Comments are kept in the tree
//! so the equivalence oracle can see them, but mapped models never read them.

use std::path::Path;

use modforge_xml_mapping::{XmlAttribute, XmlElement, XmlNode, XmlRoot, read_model};
use quick_xml::Reader;
use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};
use tracing::debug;

use super::utils::{line_and_column, strip_bom};
use crate::error::{Result, SerdeError};

/// Parses a complete document and returns its root element.
///
/// # Errors
///
/// [`SerdeError::Parse`] for malformed markup, a missing root, several roots, text
/// outside the root, or elements left unclosed at end of input.
pub fn parse_document(xml: &str) -> Result<XmlElement> {
    DocumentParser::new(xml).parse()
}

/// Reads only the namespace declarations of the root element.
///
/// Returns them in document order. A document without a root yields an empty list.
pub fn read_root_namespaces(xml: &str) -> Result<Vec<XmlAttribute>> {
    let source = strip_bom(xml);
    let mut reader = Reader::from_str(source);

    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) | Ok(Event::Empty(start)) => {
                let attributes = read_attributes(&start, source, &reader)?;
                return Ok(attributes
                    .into_iter()
                    .filter(XmlAttribute::is_namespace_declaration)
                    .collect());
            }
            Ok(Event::Eof) => return Ok(Vec::new()),
            Ok(_) => continue,
            Err(e) => return Err(parse_error(source, reader.error_position(), e)),
        }
    }
}

/// Loads a model from an XML string.
///
/// # Errors
///
/// [`SerdeError::Argument`] when `xml` is empty or whitespace, [`SerdeError::Parse`]
/// when it is malformed, and [`SerdeError::RootMismatch`] when the root element is not
/// `T::ROOT`.
///
/// # Examples
///
/// ```ignore
/// use modforge_serde::xml::from_xml_str;
/// use modforge_model::domain::AttributesDo;
///
/// let attributes: AttributesDo = from_xml_str(&xml)?;
/// ```
pub fn from_xml_str<T: XmlRoot>(xml: &str) -> Result<T> {
    if strip_bom(xml).trim().is_empty() {
        return Err(SerdeError::Argument(
            "XML content must not be empty".to_string(),
        ));
    }

    let root = parse_document(xml)?;
    from_xml_element(&root)
}

/// Maps an already parsed root element onto a model.
pub fn from_xml_element<T: XmlRoot>(root: &XmlElement) -> Result<T> {
    if root.name != T::ROOT {
        return Err(SerdeError::RootMismatch {
            expected: T::ROOT,
            found: root.name.clone(),
        });
    }
    Ok(read_model(root)?)
}

/// Loads a model from a file.
///
/// # Errors
///
/// [`SerdeError::NotFound`] when the path does not exist, plus everything
/// [`from_xml_str`] reports.
pub fn from_xml_path<T: XmlRoot>(path: impl AsRef<Path>) -> Result<T> {
    let xml = read_xml_file(path.as_ref())?;
    from_xml_str(&xml)
}

/// Reads a file as text, mapping a missing path to [`SerdeError::NotFound`].
pub fn read_xml_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(SerdeError::NotFound {
            path: path.to_path_buf(),
        });
    }
    debug!(path = %path.display(), "reading XML file");
    Ok(std::fs::read_to_string(path)?)
}

/// Async variant of [`from_xml_path`], run on the blocking thread pool.
pub async fn from_xml_path_async<T>(path: impl AsRef<Path>) -> Result<T>
where
    T: XmlRoot + Send,
{
    let path = path.as_ref().to_path_buf();
    tokio::task::spawn_blocking(move || from_xml_path::<T>(&path)).await?
}

/// Async variant of [`from_xml_str`], run on the blocking thread pool.
pub async fn from_xml_str_async<T>(xml: impl Into<String>) -> Result<T>
where
    T: XmlRoot + Send,
{
    let xml = xml.into();
    tokio::task::spawn_blocking(move || from_xml_str::<T>(&xml)).await?
}

struct DocumentParser<'a> {
    source: &'a str,
    reader: Reader<&'a [u8]>,
    stack: Vec<XmlElement>,
    root: Option<XmlElement>,
    text: String,
}

impl<'a> DocumentParser<'a> {
    fn new(xml: &'a str) -> Self {
        let source = strip_bom(xml);
        let mut reader = Reader::from_str(source);
        reader.config_mut().trim_text(false);
        Self {
            source,
            reader,
            stack: Vec::new(),
            root: None,
            text: String::new(),
        }
    }

    fn parse(mut self) -> Result<XmlElement> {
        loop {
            let event = match self.reader.read_event() {
                Ok(event) => event,
                Err(e) => {
                    return Err(parse_error(self.source, self.reader.error_position(), e));
                }
            };

            match event {
                Event::Start(start) => {
                    self.flush_text()?;
                    let element = self.open_element(&start)?;
                    self.stack.push(element);
                }
                Event::Empty(start) => {
                    self.flush_text()?;
                    let element = self.open_element(&start)?;
                    self.attach(element)?;
                }
                Event::End(_) => {
                    self.flush_text()?;
                    match self.stack.pop() {
                        Some(element) => self.attach(element)?,
                        None => return Err(self.error("closing tag without an open element")),
                    }
                }
                Event::Text(text) => {
                    let raw = String::from_utf8_lossy(text.as_ref());
                    let value = unescape(&raw).map_err(|e| self.error(e.to_string()))?;
                    self.text.push_str(&value);
                }
                Event::CData(data) => {
                    self.text.push_str(&String::from_utf8_lossy(data.as_ref()));
                }
                Event::GeneralRef(reference) => {
                    let name = String::from_utf8_lossy(reference.as_ref()).into_owned();
                    let reference = format!("&{};", name);
                    let value = unescape(&reference)
                        .map_err(|e| self.error(format!("unresolved reference &{};: {}", name, e)))?;
                    self.text.push_str(&value);
                }
                Event::Comment(comment) => {
                    self.flush_text()?;
                    if let Some(parent) = self.stack.last_mut() {
                        let body = String::from_utf8_lossy(comment.as_ref()).into_owned();
                        parent.children.push(XmlNode::Comment(body));
                    }
                }
                Event::Decl(_) | Event::PI(_) | Event::DocType(_) => {
                    self.flush_text()?;
                }
                Event::Eof => break,
            }
        }

        self.flush_text()?;
        if let Some(open) = self.stack.last() {
            return Err(self.error(format!("unexpected end of document, <{}> is not closed", open.name)));
        }
        self.root
            .take()
            .ok_or_else(|| self.error("document has no root element"))
    }

    fn open_element(&self, start: &BytesStart<'_>) -> Result<XmlElement> {
        if self.stack.is_empty() && self.root.is_some() {
            return Err(self.error("document has more than one root element"));
        }
        let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
        let attributes = read_attributes(start, self.source, &self.reader)?;
        Ok(XmlElement {
            name,
            attributes,
            children: Vec::new(),
        })
    }

    fn attach(&mut self, element: XmlElement) -> Result<()> {
        match self.stack.last_mut() {
            Some(parent) => parent.children.push(XmlNode::Element(element)),
            None => self.root = Some(element),
        }
        Ok(())
    }

    fn flush_text(&mut self) -> Result<()> {
        if self.text.is_empty() {
            return Ok(());
        }
        let text = std::mem::take(&mut self.text);
        if text.trim().is_empty() {
            return Ok(());
        }
        match self.stack.last_mut() {
            Some(parent) => {
                parent.children.push(XmlNode::Text(text));
                Ok(())
            }
            None => Err(self.error("text content outside the root element")),
        }
    }

    fn error(&self, message: impl Into<String>) -> SerdeError {
        let offset = usize::try_from(self.reader.buffer_position()).unwrap_or(usize::MAX);
        let (line, column) = line_and_column(self.source, offset);
        SerdeError::Parse {
            line,
            column,
            message: message.into(),
        }
    }
}

fn read_attributes(
    start: &BytesStart<'_>,
    source: &str,
    reader: &Reader<&[u8]>,
) -> Result<Vec<XmlAttribute>> {
    let mut attributes = Vec::new();
    for attribute in start.attributes() {
        let attribute = attribute
            .map_err(|e| parse_error(source, reader.buffer_position(), quick_xml::Error::from(e)))?;
        let name = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
        let raw = String::from_utf8_lossy(&attribute.value);
        let value = unescape(&raw).map_err(|e| {
            parse_error(source, reader.buffer_position(), quick_xml::Error::from(e))
        })?;
        attributes.push(XmlAttribute::new(name, value));
    }
    Ok(attributes)
}

fn parse_error(source: &str, position: u64, error: quick_xml::Error) -> SerdeError {
    let offset = usize::try_from(position).unwrap_or(usize::MAX);
    let (line, column) = line_and_column(source, offset);
    SerdeError::Parse {
        line,
        column,
        message: error.to_string(),
    }
}
