use tracing::debug;

use crate::descriptor::{Descriptor, FieldKind};
use crate::error::Result;
use crate::node::{XmlElement, XmlNode};

/// A type that maps to an XML element through a static [`Descriptor`].
pub trait XmlModel: Default + 'static {
    fn descriptor() -> &'static Descriptor<Self>;
}

/// A mapped type that can stand as a document root.
pub trait XmlRoot: XmlModel {
    /// Element name of the document root.
    const ROOT: &'static str;
}

/// Builds a `T` from an element.
///
/// Attributes and children are matched against the descriptor by exact name. Anything
/// unmapped is skipped and logged at `debug` level. For single-valued children the first
/// occurrence wins.
pub fn read_model<T: XmlModel>(element: &XmlElement) -> Result<T> {
    let descriptor = T::descriptor();
    descriptor.validate()?;

    let mut model = T::default();

    for attribute in &element.attributes {
        if attribute.is_namespace_declaration() {
            continue;
        }
        match descriptor.attribute_field(&attribute.name) {
            Some(field) => field.read_value(&mut model, &attribute.value),
            None => debug!(
                element = %element.name,
                attribute = %attribute.name,
                "skipping unmapped attribute"
            ),
        }
    }

    let mut seen = vec![false; descriptor.fields().len()];
    let mut text: Option<String> = None;

    for child in &element.children {
        match child {
            XmlNode::Element(child) => match descriptor.child_field(&child.name) {
                Some((index, field)) => {
                    if field.kind().is_single() && seen[index] {
                        debug!(
                            element = %element.name,
                            child = %child.name,
                            "ignoring repeated occurrence of single-valued element"
                        );
                        continue;
                    }
                    seen[index] = true;
                    field.read_child(&mut model, child)?;
                }
                None => debug!(
                    element = %element.name,
                    child = %child.name,
                    "skipping unmapped element"
                ),
            },
            XmlNode::Text(value) => text.get_or_insert_with(String::new).push_str(value),
            XmlNode::Comment(_) => {}
        }
    }

    if let Some(text) = text {
        match descriptor.text_field() {
            Some(field) => field.read_value(&mut model, &text),
            None => debug!(element = %element.name, "skipping unmapped text content"),
        }
    }

    Ok(model)
}

/// Renders `value` as an element named `tag`.
///
/// Attributes come first in declaration order, then children (and text) in declaration
/// order. Each optional field is consulted through its emission predicate.
pub fn write_model<T: XmlModel>(value: &T, tag: &str) -> Result<XmlElement> {
    let descriptor = T::descriptor();
    descriptor.validate()?;

    let mut element = XmlElement::new(tag);
    for field in descriptor.fields() {
        if field.kind() != FieldKind::Attribute || !field.should_emit(value) {
            continue;
        }
        if let Some(attribute) = field.write_attribute(value) {
            element.attributes.push(attribute);
        }
    }

    for field in descriptor.fields() {
        if field.kind() == FieldKind::Attribute || !field.should_emit(value) {
            continue;
        }
        field.write_child(value, &mut element.children)?;
    }

    Ok(element)
}

/// Renders a root model under its own root tag.
pub fn write_root<T: XmlRoot>(value: &T) -> Result<XmlElement> {
    write_model(value, T::ROOT)
}

/// Returns `true` when any field of `value` holds a populated leaf: a non-empty attribute
/// or text, a nested element with populated content, or a non-empty collection.
pub fn is_populated<T: XmlModel>(value: &T) -> bool {
    T::descriptor()
        .fields()
        .iter()
        .any(|field| field.is_populated(value))
}

/// Implements [`XmlModel`] for a type with a descriptor built once and cached.
///
/// ```ignore
/// impl_xml_model!(DefDo, |builder| builder
///     .attribute("name", |m| &m.name, |m| &mut m.name)
///     .attribute("val", |m| &m.value, |m| &mut m.value));
/// ```
#[macro_export]
macro_rules! impl_xml_model {
    ($ty:ty, $fields:expr) => {
        impl $crate::XmlModel for $ty {
            fn descriptor() -> &'static $crate::Descriptor<Self> {
                static DESCRIPTOR: $crate::Lazy<$crate::Descriptor<$ty>> =
                    $crate::Lazy::new(|| {
                        let fields: fn(
                            $crate::DescriptorBuilder<$ty>,
                        ) -> $crate::DescriptorBuilder<$ty> = $fields;
                        fields($crate::Descriptor::<$ty>::builder()).build()
                    });
                &DESCRIPTOR
            }
        }
    };
}
