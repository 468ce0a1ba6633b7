//! # Modforge XML Mapping
//!
//! Declarative attribute/element mapping for typed game configuration XML.
//!
//! Each mapped type implements [`XmlModel`] by supplying a static [`Descriptor`]: an
//! ordered table stating, per field, whether it is an attribute, text, a nested element
//! or a collection, its tag name, and when it is emitted on save. The generic walkers
//! [`read_model`] and [`write_model`] turn an [`XmlElement`] tree into a typed value and
//! back without any per-type code.
//!
//! ## Presence
//!
//! Optional child elements are held as [`Presence`], which separates an element missing
//! from the source from one that was present but empty. Attributes are `Option<String>`:
//! `None` when missing, `Some("")` when present with an empty value.
//!
//! ## Example
//!
//! ```ignore
//! use modforge_xml_mapping::{impl_xml_model, Presence, XmlRoot};
//!
//! #[derive(Debug, Default)]
//! pub struct DefDo {
//!     pub name: Option<String>,
//!     pub value: Option<String>,
//! }
//!
//! impl_xml_model!(DefDo, |builder| builder
//!     .attribute("name", |m| &m.name, |m| &mut m.name)
//!     .attribute("val", |m| &m.value, |m| &mut m.value));
//! ```

pub mod descriptor;
pub mod error;
pub mod model;
pub mod node;
pub mod presence;

pub use descriptor::{Descriptor, DescriptorBuilder, Emit, FieldDescriptor, FieldKind};
pub use error::{MappingError, Result};
pub use model::{XmlModel, XmlRoot, is_populated, read_model, write_model, write_root};
pub use node::{XmlAttribute, XmlElement, XmlNode, is_namespace_declaration, local_name};
pub use presence::Presence;

#[doc(hidden)]
pub use once_cell::sync::Lazy;
