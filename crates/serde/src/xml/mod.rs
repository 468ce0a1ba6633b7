//! Typed XML load/save for game configuration files.
//!
//! ## Architecture
//!
//! Loading and saving both go through an owned element tree
//! ([`XmlElement`](modforge_xml_mapping::XmlElement)):
//!
//! - **Loading**: quick-xml events are folded into a tree ([`parse_document`]), and the
//!   tree is mapped onto a model through its descriptor
//!   ([`read_model`](modforge_xml_mapping::read_model)).
//! - **Saving**: the model is rendered back to a tree in descriptor order, the root
//!   namespace declarations of the original document are applied, and the tree is
//!   written as quick-xml events with tab indentation.
//! - **Comparison**: two trees are walked in lock-step ([`find_difference`]).
//!
//! ## Round trip
//!
//! ```ignore
//! use modforge_serde::xml::{CompareOptions, are_structurally_equal, from_xml_str, to_xml_string};
//! use modforge_model::domain::CombatParametersDo;
//!
//! let model: CombatParametersDo = from_xml_str(&original)?;
//! let saved = to_xml_string(&model, Some(&original))?;
//! assert!(are_structurally_equal(&original, &saved, &CompareOptions::round_trip())?);
//! ```
//!
//! ## Known limitation
//!
//! Comments are parsed (so the oracle can compare them) but are not part of any model,
//! so a load/save cycle drops them.

pub mod compare;
pub mod de;
pub mod ser;
pub mod utils;

pub use compare::{
    CompareOptions, Difference, DifferenceKind, are_elements_equivalent, are_structurally_equal,
    find_difference, find_document_difference, models_equivalent,
};
pub use de::{
    from_xml_element, from_xml_path, from_xml_path_async, from_xml_str, from_xml_str_async,
    parse_document, read_root_namespaces, read_xml_file,
};
pub use ser::{
    XmlSerializer, apply_root_namespaces, to_document_string, to_document_vec, to_xml_element,
    to_xml_path, to_xml_path_async, to_xml_string, to_xml_vec, write_atomic,
};
