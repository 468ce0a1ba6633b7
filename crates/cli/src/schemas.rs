//! Per-schema dispatch from a [`SchemaKind`] to its typed model.

use modforge_model::domain::{
    AttributesDo, BannerIconsDo, CombatParametersDo, ItemModifiersDo, SkillsDo,
};
use modforge_model::{SchemaKind, Transfer};
use modforge_serde::xml::{from_xml_str, to_xml_string};
use modforge_serde::{Result, to_json_string_pretty};
use modforge_xml_mapping::XmlRoot;
use serde::Serialize;

macro_rules! with_schema {
    ($kind:expr, $func:ident($($arg:expr),*)) => {
        match $kind {
            SchemaKind::Attributes => $func::<AttributesDo>($($arg),*),
            SchemaKind::BannerIcons => $func::<BannerIconsDo>($($arg),*),
            SchemaKind::CombatParameters => $func::<CombatParametersDo>($($arg),*),
            SchemaKind::ItemModifiers => $func::<ItemModifiersDo>($($arg),*),
            SchemaKind::Skills => $func::<SkillsDo>($($arg),*),
        }
    };
}

/// Loads `xml` as `kind` and saves it again with the original's namespaces.
pub fn round_trip(kind: SchemaKind, xml: &str) -> Result<String> {
    with_schema!(kind, round_trip_as(xml))
}

/// Loads `xml` as `kind` and renders its transfer object as pretty JSON.
pub fn export_json(kind: SchemaKind, xml: &str) -> Result<String> {
    with_schema!(kind, export_json_as(xml))
}

fn round_trip_as<T: XmlRoot>(xml: &str) -> Result<String> {
    let model: T = from_xml_str(xml)?;
    to_xml_string(&model, Some(xml))
}

fn export_json_as<T>(xml: &str) -> Result<String>
where
    T: XmlRoot + Transfer,
    T::Dto: Serialize,
{
    let model: T = from_xml_str(xml)?;
    to_json_string_pretty(&model.to_dto())
}
