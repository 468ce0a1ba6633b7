//! Per-type field tables describing how a mapped type lays out as XML.
//!
//! A [`Descriptor`] is an ordered list of [`FieldDescriptor`]s. Declaration order is
//! the order attributes and child elements are written back, so it must follow the
//! source convention of the schema being mapped.
//!
//! Descriptors are built once per type through [`Descriptor::builder`] and cached in a
//! static (see [`impl_xml_model!`](crate::impl_xml_model)). The builder only records
//! problems; [`Descriptor::validate`] reports them, and every read or write of the
//! type calls it first.

use std::collections::HashSet;
use std::fmt;

use tracing::debug;

use crate::error::{MappingError, Result};
use crate::model::{XmlModel, is_populated, read_model, write_model};
use crate::node::{XmlAttribute, XmlElement, XmlNode};
use crate::presence::Presence;

type Get<T, V> = fn(&T) -> &V;
type GetMut<T, V> = fn(&mut T) -> &mut V;

/// How a field is laid out in XML.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// `name="value"` on the element itself.
    Attribute,
    /// Character content of the element itself.
    Text,
    /// Child element whose content is plain text: `<Documentation>...</Documentation>`.
    TextElement,
    /// Single nested mapped child.
    Element,
    /// Repeated direct children sharing one tag.
    Collection,
    /// Container child holding repeated items: `<definitions><def/>...</definitions>`.
    WrappedCollection { item: &'static str },
}

impl FieldKind {
    pub fn is_child(&self) -> bool {
        !matches!(self, FieldKind::Attribute | FieldKind::Text)
    }

    /// Kinds for which only the first matching child is read.
    pub fn is_single(&self) -> bool {
        matches!(
            self,
            FieldKind::TextElement | FieldKind::Element | FieldKind::WrappedCollection { .. }
        )
    }
}

/// Emission predicate deciding whether an optional field is written on save.
///
/// Defaults: attributes and inner text use [`Emit::NonEmpty`]; text elements, single
/// elements and wrapped collections use [`Emit::Present`]. Plain collections always write
/// each item, so an empty one writes nothing.
pub enum Emit<T> {
    /// Emit when the value has at least one populated leaf. For a nested element this
    /// ignores presence: a present-but-empty element is skipped.
    NonEmpty,
    /// Emit when the construct was present in the source, even if empty.
    Present,
    /// Custom predicate over the owning instance.
    When(fn(&T) -> bool),
}

impl<T> Clone for Emit<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Emit<T> {}

impl<T> fmt::Debug for Emit<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Emit::NonEmpty => f.write_str("NonEmpty"),
            Emit::Present => f.write_str("Present"),
            Emit::When(_) => f.write_str("When(..)"),
        }
    }
}

/// Typed access to nested mapped children of `T`.
trait NestedAccess<T>: Send + Sync {
    fn read(&self, target: &mut T, element: &XmlElement) -> Result<()>;
    fn write(&self, source: &T, tag: &'static str, out: &mut Vec<XmlNode>) -> Result<()>;
    fn is_present(&self, source: &T) -> bool;
    fn is_populated(&self, source: &T) -> bool;
}

struct ElementAccess<T, U> {
    get: Get<T, Presence<U>>,
    get_mut: GetMut<T, Presence<U>>,
}

impl<T: 'static, U: XmlModel> NestedAccess<T> for ElementAccess<T, U> {
    fn read(&self, target: &mut T, element: &XmlElement) -> Result<()> {
        *(self.get_mut)(target) = if element.has_content() {
            Presence::Value(read_model::<U>(element)?)
        } else {
            Presence::Empty
        };
        Ok(())
    }

    fn write(&self, source: &T, tag: &'static str, out: &mut Vec<XmlNode>) -> Result<()> {
        let element = match (self.get)(source) {
            Presence::Value(value) => write_model(value, tag)?,
            Presence::Empty | Presence::Absent => XmlElement::new(tag),
        };
        out.push(XmlNode::Element(element));
        Ok(())
    }

    fn is_present(&self, source: &T) -> bool {
        (self.get)(source).is_present()
    }

    fn is_populated(&self, source: &T) -> bool {
        (self.get)(source).value().is_some_and(is_populated)
    }
}

struct CollectionAccess<T, U> {
    get: Get<T, Vec<U>>,
    get_mut: GetMut<T, Vec<U>>,
}

impl<T: 'static, U: XmlModel> NestedAccess<T> for CollectionAccess<T, U> {
    fn read(&self, target: &mut T, element: &XmlElement) -> Result<()> {
        let item = read_model::<U>(element)?;
        (self.get_mut)(target).push(item);
        Ok(())
    }

    fn write(&self, source: &T, tag: &'static str, out: &mut Vec<XmlNode>) -> Result<()> {
        for item in (self.get)(source) {
            out.push(XmlNode::Element(write_model(item, tag)?));
        }
        Ok(())
    }

    fn is_present(&self, source: &T) -> bool {
        !(self.get)(source).is_empty()
    }

    fn is_populated(&self, source: &T) -> bool {
        !(self.get)(source).is_empty()
    }
}

struct WrappedAccess<T, U> {
    item: &'static str,
    get: Get<T, Presence<Vec<U>>>,
    get_mut: GetMut<T, Presence<Vec<U>>>,
}

impl<T: 'static, U: XmlModel> NestedAccess<T> for WrappedAccess<T, U> {
    fn read(&self, target: &mut T, element: &XmlElement) -> Result<()> {
        let mut items = Vec::new();
        for child in element.elements() {
            if child.name == self.item {
                items.push(read_model::<U>(child)?);
            } else {
                debug!(
                    container = %element.name,
                    element = %child.name,
                    "skipping unmapped element"
                );
            }
        }
        *(self.get_mut)(target) = if items.is_empty() {
            Presence::Empty
        } else {
            Presence::Value(items)
        };
        Ok(())
    }

    fn write(&self, source: &T, tag: &'static str, out: &mut Vec<XmlNode>) -> Result<()> {
        let mut wrapper = XmlElement::new(tag);
        for item in (self.get)(source).items() {
            wrapper
                .children
                .push(XmlNode::Element(write_model(item, self.item)?));
        }
        out.push(XmlNode::Element(wrapper));
        Ok(())
    }

    fn is_present(&self, source: &T) -> bool {
        (self.get)(source).is_present()
    }

    fn is_populated(&self, source: &T) -> bool {
        (self.get)(source).len() > 0
    }
}

enum Access<T> {
    Scalar {
        get: Get<T, Option<String>>,
        get_mut: GetMut<T, Option<String>>,
    },
    Nested(Box<dyn NestedAccess<T>>),
}

/// One entry of a [`Descriptor`].
pub struct FieldDescriptor<T> {
    tag: &'static str,
    kind: FieldKind,
    emit: Emit<T>,
    access: Access<T>,
}

impl<T> FieldDescriptor<T> {
    /// XML name of the attribute or child element. Empty for [`FieldKind::Text`].
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn emit(&self) -> Emit<T> {
        self.emit
    }

    /// Returns `true` when the field was present in the source (or has been set since).
    pub fn is_present(&self, source: &T) -> bool {
        match &self.access {
            Access::Scalar { get, .. } => get(source).is_some(),
            Access::Nested(nested) => nested.is_present(source),
        }
    }

    /// Returns `true` when the field holds at least one non-empty leaf value.
    pub fn is_populated(&self, source: &T) -> bool {
        match &self.access {
            Access::Scalar { get, .. } => get(source).as_deref().is_some_and(|v| !v.is_empty()),
            Access::Nested(nested) => nested.is_populated(source),
        }
    }

    /// Evaluates the emission predicate for this field.
    pub fn should_emit(&self, source: &T) -> bool {
        if self.kind == FieldKind::Collection {
            return true;
        }
        match self.emit {
            Emit::NonEmpty => self.is_populated(source),
            Emit::Present => self.is_present(source),
            Emit::When(predicate) => predicate(source),
        }
    }

    pub(crate) fn read_value(&self, target: &mut T, value: &str) {
        if let Access::Scalar { get_mut, .. } = &self.access {
            *get_mut(target) = Some(value.to_string());
        }
    }

    pub(crate) fn read_child(&self, target: &mut T, element: &XmlElement) -> Result<()> {
        match &self.access {
            Access::Scalar { get_mut, .. } => {
                *get_mut(target) = Some(element.text().unwrap_or_default());
                Ok(())
            }
            Access::Nested(nested) => nested.read(target, element),
        }
    }

    pub(crate) fn write_attribute(&self, source: &T) -> Option<XmlAttribute> {
        match &self.access {
            Access::Scalar { get, .. } => Some(XmlAttribute::new(
                self.tag,
                get(source).as_deref().unwrap_or_default(),
            )),
            Access::Nested(_) => None,
        }
    }

    pub(crate) fn write_child(&self, source: &T, out: &mut Vec<XmlNode>) -> Result<()> {
        match (&self.access, self.kind) {
            (Access::Scalar { get, .. }, FieldKind::Text) => {
                if let Some(text) = get(source).as_deref().filter(|t| !t.is_empty()) {
                    out.push(XmlNode::Text(text.to_string()));
                }
                Ok(())
            }
            (Access::Scalar { get, .. }, _) => {
                let mut element = XmlElement::new(self.tag);
                if let Some(text) = get(source).as_deref().filter(|t| !t.is_empty()) {
                    element.children.push(XmlNode::Text(text.to_string()));
                }
                out.push(XmlNode::Element(element));
                Ok(())
            }
            (Access::Nested(nested), _) => nested.write(source, self.tag, out),
        }
    }
}

impl<T> fmt::Debug for FieldDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("tag", &self.tag)
            .field("kind", &self.kind)
            .field("emit", &self.emit)
            .finish()
    }
}

/// Ordered field table for a mapped type.
pub struct Descriptor<T> {
    type_name: &'static str,
    fields: Vec<FieldDescriptor<T>>,
    problem: Option<String>,
}

impl<T: 'static> Descriptor<T> {
    pub fn builder() -> DescriptorBuilder<T> {
        DescriptorBuilder {
            type_name: std::any::type_name::<T>(),
            fields: Vec::new(),
            problems: Vec::new(),
        }
    }
}

impl<T> Descriptor<T> {
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn fields(&self) -> &[FieldDescriptor<T>] {
        &self.fields
    }

    /// Reports the first problem found while the table was built.
    pub fn validate(&self) -> Result<()> {
        match &self.problem {
            Some(reason) => Err(MappingError::Inconsistent {
                type_name: self.type_name,
                reason: reason.clone(),
            }),
            None => Ok(()),
        }
    }

    pub fn attribute_field(&self, name: &str) -> Option<&FieldDescriptor<T>> {
        self.fields
            .iter()
            .find(|field| field.kind == FieldKind::Attribute && field.tag == name)
    }

    /// Position and descriptor of the child field mapped to `name`.
    pub fn child_field(&self, name: &str) -> Option<(usize, &FieldDescriptor<T>)> {
        self.fields
            .iter()
            .enumerate()
            .find(|(_, field)| field.kind.is_child() && field.tag == name)
    }

    pub fn text_field(&self) -> Option<&FieldDescriptor<T>> {
        self.fields.iter().find(|field| field.kind == FieldKind::Text)
    }
}

impl<T> fmt::Debug for Descriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Descriptor")
            .field("type_name", &self.type_name)
            .field("fields", &self.fields)
            .field("problem", &self.problem)
            .finish()
    }
}

/// Builder collecting fields in declaration order.
///
/// ```ignore
/// Descriptor::<DefDo>::builder()
///     .attribute("name", |m| &m.name, |m| &mut m.name)
///     .attribute("val", |m| &m.value, |m| &mut m.value)
///     .build()
/// ```
pub struct DescriptorBuilder<T> {
    type_name: &'static str,
    fields: Vec<FieldDescriptor<T>>,
    problems: Vec<String>,
}

impl<T: 'static> DescriptorBuilder<T> {
    fn push(mut self, tag: &'static str, kind: FieldKind, emit: Emit<T>, access: Access<T>) -> Self {
        self.fields.push(FieldDescriptor {
            tag,
            kind,
            emit,
            access,
        });
        self
    }

    pub fn attribute(
        self,
        tag: &'static str,
        get: Get<T, Option<String>>,
        get_mut: GetMut<T, Option<String>>,
    ) -> Self {
        self.push(
            tag,
            FieldKind::Attribute,
            Emit::NonEmpty,
            Access::Scalar { get, get_mut },
        )
    }

    pub fn text(self, get: Get<T, Option<String>>, get_mut: GetMut<T, Option<String>>) -> Self {
        self.push(
            "",
            FieldKind::Text,
            Emit::NonEmpty,
            Access::Scalar { get, get_mut },
        )
    }

    pub fn text_element(
        self,
        tag: &'static str,
        get: Get<T, Option<String>>,
        get_mut: GetMut<T, Option<String>>,
    ) -> Self {
        self.push(
            tag,
            FieldKind::TextElement,
            Emit::Present,
            Access::Scalar { get, get_mut },
        )
    }

    pub fn element<U: XmlModel>(
        self,
        tag: &'static str,
        get: Get<T, Presence<U>>,
        get_mut: GetMut<T, Presence<U>>,
    ) -> Self {
        self.push(
            tag,
            FieldKind::Element,
            Emit::Present,
            Access::Nested(Box::new(ElementAccess { get, get_mut })),
        )
    }

    pub fn collection<U: XmlModel>(
        self,
        tag: &'static str,
        get: Get<T, Vec<U>>,
        get_mut: GetMut<T, Vec<U>>,
    ) -> Self {
        self.push(
            tag,
            FieldKind::Collection,
            Emit::NonEmpty,
            Access::Nested(Box::new(CollectionAccess { get, get_mut })),
        )
    }

    pub fn wrapped<U: XmlModel>(
        self,
        tag: &'static str,
        item: &'static str,
        get: Get<T, Presence<Vec<U>>>,
        get_mut: GetMut<T, Presence<Vec<U>>>,
    ) -> Self {
        self.push(
            tag,
            FieldKind::WrappedCollection { item },
            Emit::Present,
            Access::Nested(Box::new(WrappedAccess { item, get, get_mut })),
        )
    }

    /// Overrides the emission predicate of the most recently declared field.
    pub fn emit(mut self, emit: Emit<T>) -> Self {
        match self.fields.last_mut() {
            Some(field) => field.emit = emit,
            None => self
                .problems
                .push("emission policy declared before any field".to_string()),
        }
        self
    }

    pub fn build(mut self) -> Descriptor<T> {
        self.check();
        Descriptor {
            type_name: self.type_name,
            fields: self.fields,
            problem: self.problems.into_iter().next(),
        }
    }

    fn check(&mut self) {
        let mut attributes = HashSet::new();
        let mut children = HashSet::new();
        let mut text_fields = 0;

        for field in &self.fields {
            match field.kind {
                FieldKind::Text => {
                    text_fields += 1;
                    continue;
                }
                FieldKind::WrappedCollection { item } if item.is_empty() => {
                    self.problems
                        .push(format!("wrapped collection <{}> has an empty item tag", field.tag));
                }
                _ => {}
            }

            if field.tag.is_empty() {
                self.problems
                    .push(format!("{:?} field declared with an empty tag", field.kind));
            } else if field.kind == FieldKind::Attribute {
                if !attributes.insert(field.tag) {
                    self.problems
                        .push(format!("attribute `{}` is mapped twice", field.tag));
                }
            } else if !children.insert(field.tag) {
                self.problems
                    .push(format!("child element <{}> is mapped twice", field.tag));
            }
        }

        if text_fields > 1 {
            self.problems
                .push(format!("{} text fields declared, at most one allowed", text_fields));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct Sample {
        id: Option<String>,
        name: Option<String>,
    }

    #[test]
    fn test_builder_keeps_declaration_order() {
        let descriptor = Descriptor::<Sample>::builder()
            .attribute("id", |m| &m.id, |m| &mut m.id)
            .attribute("name", |m| &m.name, |m| &mut m.name)
            .build();

        let tags: Vec<_> = descriptor.fields().iter().map(|f| f.tag()).collect();
        assert_eq!(tags, vec!["id", "name"]);
        assert!(descriptor.validate().is_ok());
    }

    #[test]
    fn test_duplicate_attribute_is_inconsistent() {
        let descriptor = Descriptor::<Sample>::builder()
            .attribute("id", |m| &m.id, |m| &mut m.id)
            .attribute("id", |m| &m.name, |m| &mut m.name)
            .build();

        let err = descriptor.validate().unwrap_err();
        assert!(err.to_string().contains("attribute `id` is mapped twice"));
    }

    #[test]
    fn test_attribute_and_child_may_share_a_tag() {
        let descriptor = Descriptor::<Sample>::builder()
            .attribute("name", |m| &m.id, |m| &mut m.id)
            .text_element("name", |m| &m.name, |m| &mut m.name)
            .build();
        assert!(descriptor.validate().is_ok());
    }

    #[test]
    fn test_two_text_fields_are_inconsistent() {
        let descriptor = Descriptor::<Sample>::builder()
            .text(|m| &m.id, |m| &mut m.id)
            .text(|m| &m.name, |m| &mut m.name)
            .build();
        assert!(descriptor.validate().is_err());
    }

    #[test]
    fn test_emit_before_field_is_inconsistent() {
        let descriptor = Descriptor::<Sample>::builder()
            .emit(Emit::Present)
            .attribute("id", |m| &m.id, |m| &mut m.id)
            .build();
        assert!(descriptor.validate().is_err());
    }

    #[test]
    fn test_attribute_emission_policies() {
        let descriptor = Descriptor::<Sample>::builder()
            .attribute("id", |m| &m.id, |m| &mut m.id)
            .attribute("name", |m| &m.name, |m| &mut m.name)
            .emit(Emit::Present)
            .build();

        let sample = Sample {
            id: Some(String::new()),
            name: Some(String::new()),
        };
        let fields = descriptor.fields();
        assert!(!fields[0].should_emit(&sample));
        assert!(fields[1].should_emit(&sample));
        assert!(!fields[1].should_emit(&Sample::default()));
    }

    #[test]
    fn test_text_element_defaults_to_presence() {
        let descriptor = Descriptor::<Sample>::builder()
            .text_element("name", |m| &m.name, |m| &mut m.name)
            .build();

        let field = &descriptor.fields()[0];
        assert!(matches!(field.emit(), Emit::Present));
        assert!(field.should_emit(&Sample {
            name: Some(String::new()),
            ..Default::default()
        }));
        assert!(!field.should_emit(&Sample::default()));
    }
}
