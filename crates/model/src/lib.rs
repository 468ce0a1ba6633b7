//! Typed models for Bannerlord game configuration XML.
//!
//! Each supported schema has three parts:
//!
//! - a domain object in [`domain`] that maps to the XML through a cached descriptor and
//!   keeps enough presence information to save a file back the way it was loaded,
//! - a transfer object in [`transfer`] with serde support and plain defaults,
//! - a [`Transfer`] implementation in [`mapping`] converting between the two.
//!
//! [`SchemaKind`] lists the supported schemas and [`DirectoryDiscovery`] finds them in a
//! module directory.
//!
//! ```ignore
//! use modforge_model::domain::AttributesDo;
//! use modforge_serde::{from_xml_str, to_xml_string};
//!
//! let attributes: AttributesDo = from_xml_str(&xml)?;
//! let saved = to_xml_string(&attributes, Some(&xml))?;
//! ```

pub mod discovery;
pub mod domain;
pub mod mapping;
pub mod naming;
pub mod schema;
pub mod serde_helpers;
pub mod transfer;

pub use discovery::{Complexity, DirectoryDiscovery, FileDiscovery, UnadaptedFile};
pub use mapping::{Transfer, to_do, to_do_list, to_dto, to_dto_list};
pub use naming::convert_to_model_name;
pub use schema::SchemaKind;
