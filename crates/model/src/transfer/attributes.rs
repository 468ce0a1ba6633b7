use serde::{Deserialize, Serialize};

use crate::serde_helpers::null_as_default;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AttributesDto {
    #[serde(deserialize_with = "null_as_default")]
    pub attributes: Vec<AttributeDataDto>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AttributeDataDto {
    pub id: String,
    pub name: String,
    pub source: String,
    pub documentation: String,
}
