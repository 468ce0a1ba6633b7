use serde::{Deserialize, Serialize};

use crate::serde_helpers::null_as_default;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BannerIconsDto {
    #[serde(rename = "type")]
    pub kind: String,
    pub banner_icon_data: Option<BannerIconDataDto>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BannerIconDataDto {
    #[serde(deserialize_with = "null_as_default")]
    pub icon_groups: Vec<BannerIconGroupDto>,
    pub banner_colors: Option<BannerColorsDto>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BannerIconGroupDto {
    pub id: String,
    pub name: String,
    pub is_pattern: String,
    #[serde(deserialize_with = "null_as_default")]
    pub backgrounds: Vec<BackgroundDto>,
    #[serde(deserialize_with = "null_as_default")]
    pub icons: Vec<IconDto>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BackgroundDto {
    pub id: String,
    pub mesh_name: String,
    pub is_base_background: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IconDto {
    pub id: String,
    pub material_name: String,
    pub texture_index: String,
    pub is_reserved: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BannerColorsDto {
    #[serde(deserialize_with = "null_as_default")]
    pub colors: Vec<ColorEntryDto>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColorEntryDto {
    pub id: String,
    pub hex: String,
    pub player_can_choose_for_background: String,
    pub player_can_choose_for_sigil: String,
}
