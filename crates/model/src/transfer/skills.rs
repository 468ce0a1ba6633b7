use serde::{Deserialize, Serialize};

use crate::serde_helpers::null_as_default;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillsDto {
    #[serde(deserialize_with = "null_as_default")]
    pub skills: Vec<SkillDataDto>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillDataDto {
    pub id: String,
    pub name: String,
    pub modifiers: Option<Vec<AttributeModifierDto>>,
    pub documentation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AttributeModifierDto {
    pub attrib_code: String,
    pub modification: String,
    pub value: String,
}
