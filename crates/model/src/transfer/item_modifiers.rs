use serde::{Deserialize, Serialize};

use crate::serde_helpers::null_as_default;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemModifiersDto {
    #[serde(deserialize_with = "null_as_default")]
    pub modifiers: Vec<ItemModifierDto>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemModifierDto {
    pub modifier_group: String,
    pub id: String,
    pub name: String,
    pub loot_drop_score: String,
    pub production_drop_score: String,
    pub damage: String,
    pub speed: String,
    pub missile_speed: String,
    pub price_factor: String,
    pub quality: String,
    pub hit_points: String,
    pub horse_speed: String,
    pub stack_count: String,
    pub armor: String,
    pub maneuver: String,
    pub charge_damage: String,
    pub horse_hit_points: String,
}
