//! Structural equivalence of XML documents.
//!
//! Two documents are equivalent when their element trees match top-down:
//!
//! | Part | Rule |
//! |------|------|
//! | element names | local names compared exactly |
//! | attributes | compared as a set by default, or as a sequence when order matters |
//! | attribute values | exact, or numerically equal within `1e-4` when both are numbers |
//! | children | compared in order; comments take part unless ignored |
//! | text | exact, or whitespace-normalized when requested |
//!
//! [`find_difference`] reports where the first mismatch is; [`are_elements_equivalent`]
//! and [`are_structurally_equal`] only answer yes or no.

use std::collections::HashMap;
use std::fmt;

use modforge_xml_mapping::{XmlAttribute, XmlElement, XmlModel, XmlNode, write_model};

use super::de::parse_document;
use super::utils::{normalize_whitespace, values_equal};
use crate::error::Result;

/// Switches controlling what the comparison ignores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompareOptions {
    /// Drop comment nodes before comparing children.
    pub ignore_comments: bool,
    /// Collapse whitespace in text nodes and drop text that becomes empty.
    pub ignore_whitespace: bool,
    /// Compare attributes as an unordered set.
    pub ignore_attribute_order: bool,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            ignore_comments: false,
            ignore_whitespace: false,
            ignore_attribute_order: true,
        }
    }
}

impl CompareOptions {
    /// Options used to check saved files against their source: comments are not
    /// round-tripped, everything else is strict.
    pub fn round_trip() -> Self {
        Self {
            ignore_comments: true,
            ..Self::default()
        }
    }
}

/// What differed at a given path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DifferenceKind {
    ElementName { expected: String, found: String },
    AttributeCount { expected: usize, found: usize },
    MissingAttribute { name: String },
    AttributeName { expected: String, found: String },
    AttributeValue { name: String, expected: String, found: String },
    ChildCount { expected: usize, found: usize },
    NodeKind { expected: &'static str, found: &'static str },
    Text { expected: String, found: String },
    Comment { expected: String, found: String },
}

/// First mismatch found between two trees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Difference {
    /// Slash-separated element path with 1-based child positions, e.g. `/base/definitions[1]`.
    pub path: String,
    pub kind: DifferenceKind,
}

impl fmt::Display for Difference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.path)?;
        match &self.kind {
            DifferenceKind::ElementName { expected, found } => {
                write!(f, "element <{}> differs from <{}>", found, expected)
            }
            DifferenceKind::AttributeCount { expected, found } => {
                write!(f, "{} attributes, expected {}", found, expected)
            }
            DifferenceKind::MissingAttribute { name } => write!(f, "attribute `{}` missing", name),
            DifferenceKind::AttributeName { expected, found } => {
                write!(f, "attribute `{}` found where `{}` expected", found, expected)
            }
            DifferenceKind::AttributeValue {
                name,
                expected,
                found,
            } => write!(f, "attribute `{}` is {:?}, expected {:?}", name, found, expected),
            DifferenceKind::ChildCount { expected, found } => {
                write!(f, "{} child nodes, expected {}", found, expected)
            }
            DifferenceKind::NodeKind { expected, found } => {
                write!(f, "{} found where {} expected", found, expected)
            }
            DifferenceKind::Text { expected, found } => {
                write!(f, "text {:?}, expected {:?}", found, expected)
            }
            DifferenceKind::Comment { expected, found } => {
                write!(f, "comment {:?}, expected {:?}", found, expected)
            }
        }
    }
}

/// Compares two XML documents given as text.
///
/// # Errors
///
/// Returns [`SerdeError::Parse`](crate::SerdeError::Parse) when either document is malformed.
///
/// # Examples
///
/// ```ignore
/// use modforge_serde::xml::{CompareOptions, are_structurally_equal};
///
/// let same = are_structurally_equal("<a x='1' y='2'/>", "<a y='2' x='1'/>", &CompareOptions::default())?;
/// assert!(same);
/// ```
pub fn are_structurally_equal(expected: &str, actual: &str, options: &CompareOptions) -> Result<bool> {
    Ok(find_document_difference(expected, actual, options)?.is_none())
}

/// Parses both documents and reports their first difference.
pub fn find_document_difference(
    expected: &str,
    actual: &str,
    options: &CompareOptions,
) -> Result<Option<Difference>> {
    let expected = parse_document(expected)?;
    let actual = parse_document(actual)?;
    Ok(find_difference(&expected, &actual, options))
}

/// Compares two parsed element trees.
pub fn are_elements_equivalent(expected: &XmlElement, actual: &XmlElement, options: &CompareOptions) -> bool {
    find_difference(expected, actual, options).is_none()
}

/// Compares two models by rendering both through their descriptors.
pub fn models_equivalent<T: XmlModel>(expected: &T, actual: &T, options: &CompareOptions) -> Result<bool> {
    let expected = write_model(expected, "model")?;
    let actual = write_model(actual, "model")?;
    Ok(are_elements_equivalent(&expected, &actual, options))
}

/// Walks both trees in lock-step and returns the first difference.
pub fn find_difference(
    expected: &XmlElement,
    actual: &XmlElement,
    options: &CompareOptions,
) -> Option<Difference> {
    let path = format!("/{}", expected.name);
    compare_elements(expected, actual, options, &path)
}

fn compare_elements(
    expected: &XmlElement,
    actual: &XmlElement,
    options: &CompareOptions,
    path: &str,
) -> Option<Difference> {
    let difference = |kind| Some(Difference { path: path.to_string(), kind });

    if expected.local_name() != actual.local_name() {
        return difference(DifferenceKind::ElementName {
            expected: expected.name.clone(),
            found: actual.name.clone(),
        });
    }

    if let Some(kind) = compare_attributes(&expected.attributes, &actual.attributes, options) {
        return difference(kind);
    }

    let expected_children = significant_children(expected, options);
    let actual_children = significant_children(actual, options);
    if expected_children.len() != actual_children.len() {
        return difference(DifferenceKind::ChildCount {
            expected: expected_children.len(),
            found: actual_children.len(),
        });
    }

    for (position, (left, right)) in expected_children.iter().zip(&actual_children).enumerate() {
        match (left, right) {
            (Child::Element(left), Child::Element(right)) => {
                let child_path = format!("{}/{}[{}]", path, left.name, position + 1);
                if let Some(found) = compare_elements(left, right, options, &child_path) {
                    return Some(found);
                }
            }
            (Child::Text(left), Child::Text(right)) => {
                if left != right {
                    return difference(DifferenceKind::Text {
                        expected: left.clone(),
                        found: right.clone(),
                    });
                }
            }
            (Child::Comment(left), Child::Comment(right)) => {
                if left != right {
                    return difference(DifferenceKind::Comment {
                        expected: left.to_string(),
                        found: right.to_string(),
                    });
                }
            }
            (left, right) => {
                return difference(DifferenceKind::NodeKind {
                    expected: left.kind(),
                    found: right.kind(),
                });
            }
        }
    }

    None
}

fn compare_attributes(
    expected: &[XmlAttribute],
    actual: &[XmlAttribute],
    options: &CompareOptions,
) -> Option<DifferenceKind> {
    if expected.len() != actual.len() {
        return Some(DifferenceKind::AttributeCount {
            expected: expected.len(),
            found: actual.len(),
        });
    }

    if options.ignore_attribute_order {
        let actual: HashMap<&str, &str> = actual
            .iter()
            .map(|a| (a.name.as_str(), a.value.as_str()))
            .collect();
        for attribute in expected {
            match actual.get(attribute.name.as_str()) {
                None => {
                    return Some(DifferenceKind::MissingAttribute {
                        name: attribute.name.clone(),
                    });
                }
                Some(value) if !values_equal(&attribute.value, value) => {
                    return Some(DifferenceKind::AttributeValue {
                        name: attribute.name.clone(),
                        expected: attribute.value.clone(),
                        found: value.to_string(),
                    });
                }
                Some(_) => {}
            }
        }
        return None;
    }

    for (left, right) in expected.iter().zip(actual) {
        if left.name != right.name {
            return Some(DifferenceKind::AttributeName {
                expected: left.name.clone(),
                found: right.name.clone(),
            });
        }
        if !values_equal(&left.value, &right.value) {
            return Some(DifferenceKind::AttributeValue {
                name: left.name.clone(),
                expected: left.value.clone(),
                found: right.value.clone(),
            });
        }
    }
    None
}

enum Child<'a> {
    Element(&'a XmlElement),
    Text(String),
    Comment(&'a str),
}

impl Child<'_> {
    fn kind(&self) -> &'static str {
        match self {
            Child::Element(_) => "element",
            Child::Text(_) => "text",
            Child::Comment(_) => "comment",
        }
    }
}

fn significant_children<'a>(element: &'a XmlElement, options: &CompareOptions) -> Vec<Child<'a>> {
    element
        .children
        .iter()
        .filter_map(|child| match child {
            XmlNode::Element(element) => Some(Child::Element(element)),
            XmlNode::Comment(_) if options.ignore_comments => None,
            XmlNode::Comment(comment) => Some(Child::Comment(comment.as_str())),
            XmlNode::Text(text) if options.ignore_whitespace => {
                let normalized = normalize_whitespace(text);
                (!normalized.is_empty()).then_some(Child::Text(normalized))
            }
            XmlNode::Text(text) => Some(Child::Text(text.clone())),
        })
        .collect()
}
