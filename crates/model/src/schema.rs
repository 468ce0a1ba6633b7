//! Registry of the schemas with a complete DO/DTO/mapper set.

use std::fmt;
use std::path::Path;

use modforge_xml_mapping::XmlRoot;

use crate::domain::{AttributesDo, BannerIconsDo, CombatParametersDo, ItemModifiersDo, SkillsDo};
use crate::naming::convert_to_model_name;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SchemaKind {
    Attributes,
    BannerIcons,
    CombatParameters,
    ItemModifiers,
    Skills,
}

impl SchemaKind {
    pub const ALL: [SchemaKind; 5] = [
        SchemaKind::Attributes,
        SchemaKind::BannerIcons,
        SchemaKind::CombatParameters,
        SchemaKind::ItemModifiers,
        SchemaKind::Skills,
    ];

    pub fn model_name(self) -> &'static str {
        match self {
            SchemaKind::Attributes => "Attributes",
            SchemaKind::BannerIcons => "BannerIcons",
            SchemaKind::CombatParameters => "CombatParameters",
            SchemaKind::ItemModifiers => "ItemModifiers",
            SchemaKind::Skills => "Skills",
        }
    }

    /// Canonical file name inside a module's `ModuleData` directory.
    pub fn file_name(self) -> &'static str {
        match self {
            SchemaKind::Attributes => "attributes.xml",
            SchemaKind::BannerIcons => "banner_icons.xml",
            SchemaKind::CombatParameters => "combat_parameters.xml",
            SchemaKind::ItemModifiers => "item_modifiers.xml",
            SchemaKind::Skills => "skills.xml",
        }
    }

    /// Root element name. Two schemas share `base`, so files are resolved by name.
    pub fn root_tag(self) -> &'static str {
        match self {
            SchemaKind::Attributes => AttributesDo::ROOT,
            SchemaKind::BannerIcons => BannerIconsDo::ROOT,
            SchemaKind::CombatParameters => CombatParametersDo::ROOT,
            SchemaKind::ItemModifiers => ItemModifiersDo::ROOT,
            SchemaKind::Skills => SkillsDo::ROOT,
        }
    }

    pub fn from_model_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.model_name() == name)
    }

    /// Resolves a path or bare file name through the naming convention.
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let file_name = path.as_ref().file_name()?.to_str()?;
        Self::from_model_name(&convert_to_model_name(file_name))
    }
}

impl fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.model_name())
    }
}
