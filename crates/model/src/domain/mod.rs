//! Domain objects: one edit-oriented type per XML schema.
//!
//! Every attribute is held as the raw `Option<String>` read from the file so that a
//! save writes back exactly what was loaded; typed accessors parse on demand. Optional
//! child elements use [`Presence`](modforge_xml_mapping::Presence) so that an empty
//! element and a missing one stay distinct.

pub mod attributes;
pub mod banner_icons;
pub mod combat_parameters;
pub mod item_modifiers;
pub mod skills;

pub use attributes::{AttributeDataDo, AttributesDo};
pub use banner_icons::{
    BackgroundDo, BannerColorsDo, BannerIconDataDo, BannerIconGroupDo, BannerIconsDo,
    ColorEntryDo, IconDo,
};
pub use combat_parameters::{
    CombatParameterDo, CombatParametersDo, CustomCollisionCapsuleDo, DefDo,
};
pub use item_modifiers::{ItemModifierDo, ItemModifiersDo};
pub use skills::{AttributeModifierDo, SkillDataDo, SkillsDo};

use std::str::FromStr;

/// Parses an attribute value, treating missing or unparsable text as `None`.
pub(crate) fn parse_attr<T: FromStr>(value: &Option<String>) -> Option<T> {
    value.as_deref().and_then(|v| v.trim().parse().ok())
}

/// Parses `true`/`false` in any letter case.
pub(crate) fn parse_bool_attr(value: &Option<String>) -> Option<bool> {
    match value.as_deref().map(str::trim) {
        Some(v) if v.eq_ignore_ascii_case("true") => Some(true),
        Some(v) if v.eq_ignore_ascii_case("false") => Some(false),
        _ => None,
    }
}

pub(crate) fn format_attr<T: ToString>(value: Option<T>) -> Option<String> {
    value.map(|v| v.to_string())
}

/// Emission rule for identifier-like attributes: skip when blank.
pub(crate) fn has_text(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}
