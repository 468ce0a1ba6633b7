//! # Modforge Serialization Module
//!
//! Typed load/save engine for game configuration XML, plus the structural equivalence
//! oracle used to verify that a load/save cycle changed nothing.
//!
//! ## Features
//!
//! - **Typed loading**: any [`XmlRoot`](modforge_xml_mapping::XmlRoot) model can be read
//!   from a string or a file, synchronously or on the tokio blocking pool.
//! - **Faithful saving**: tab indentation, LF line endings, UTF-8 without BOM, attribute
//!   and element order taken from the model's descriptor, root namespace declarations
//!   reused from the original document.
//! - **Equivalence oracle**: order-aware tree comparison with numeric tolerance for
//!   attribute values.
//! - **JSON**: `serde_json` wrappers for transfer objects.
//!
//! ## Examples
//!
//! ```ignore
//! use modforge_serde::{from_xml_path, to_xml_path};
//! use modforge_model::domain::AttributesDo;
//!
//! let original = std::fs::read_to_string("attributes.xml")?;
//! let attributes: AttributesDo = from_xml_path("attributes.xml")?;
//! to_xml_path(&attributes, "attributes.xml", Some(&original))?;
//! ```

pub mod error;
pub mod json;
pub mod xml;

// Re-export common types and functions
pub use error::{Result, SerdeError};

pub use json::{from_json_path, from_json_str, to_json_path, to_json_string_pretty, to_json_vec};

pub use xml::{
    CompareOptions, are_structurally_equal, from_xml_path, from_xml_path_async, from_xml_str,
    from_xml_str_async, to_xml_path, to_xml_path_async, to_xml_string, to_xml_vec,
};
