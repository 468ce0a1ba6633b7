//! Owned XML tree shared by the loader, the writer and the mapping walkers.
//!
//! The tree keeps exactly what the mapping layer and the equivalence oracle need:
//! element names, attributes in document order, and element/text/comment children in
//! document order. Whitespace-only text between elements is not represented.

/// A single `name="value"` pair. The value is stored unescaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlAttribute {
    pub name: String,
    pub value: String,
}

impl XmlAttribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Returns `true` for `xmlns` and `xmlns:prefix` declarations.
    pub fn is_namespace_declaration(&self) -> bool {
        is_namespace_declaration(&self.name)
    }
}

/// Returns `true` when an attribute name declares a namespace.
pub fn is_namespace_declaration(name: &str) -> bool {
    name == "xmlns" || name.starts_with("xmlns:")
}

/// Strips a `prefix:` from a qualified name.
pub fn local_name(name: &str) -> &str {
    name.rsplit_once(':').map_or(name, |(_, local)| local)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlNode {
    Element(XmlElement),
    Text(String),
    Comment(String),
}

impl XmlNode {
    pub fn as_element(&self) -> Option<&XmlElement> {
        match self {
            XmlNode::Element(element) => Some(element),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct XmlElement {
    pub name: String,
    pub attributes: Vec<XmlAttribute>,
    pub children: Vec<XmlNode>,
}

impl XmlElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Builder-style attribute append, keeping insertion order.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push(XmlAttribute::new(name, value));
        self
    }

    pub fn with_child(mut self, child: XmlElement) -> Self {
        self.children.push(XmlNode::Element(child));
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(XmlNode::Text(text.into()));
        self
    }

    pub fn local_name(&self) -> &str {
        local_name(&self.name)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attribute| attribute.name == name)
            .map(|attribute| attribute.value.as_str())
    }

    /// Namespace declarations carried by this element, in document order.
    pub fn namespace_declarations(&self) -> impl Iterator<Item = &XmlAttribute> {
        self.attributes
            .iter()
            .filter(|attribute| attribute.is_namespace_declaration())
    }

    pub fn elements(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(XmlNode::as_element)
    }

    pub fn elements_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlElement> {
        self.elements().filter(move |element| element.name == name)
    }

    pub fn first_element(&self, name: &str) -> Option<&XmlElement> {
        self.elements().find(|element| element.name == name)
    }

    /// Concatenated text children, or `None` when the element holds no text at all.
    pub fn text(&self) -> Option<String> {
        let mut text: Option<String> = None;
        for child in &self.children {
            if let XmlNode::Text(value) = child {
                text.get_or_insert_with(String::new).push_str(value);
            }
        }
        text
    }

    /// Returns `true` when the element carries anything beyond namespace declarations:
    /// a regular attribute, a child element, or text.
    pub fn has_content(&self) -> bool {
        self.attributes
            .iter()
            .any(|attribute| !attribute.is_namespace_declaration())
            || self
                .children
                .iter()
                .any(|child| matches!(child, XmlNode::Element(_) | XmlNode::Text(_)))
    }
}
