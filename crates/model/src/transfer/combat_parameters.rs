use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CombatParametersDto {
    #[serde(rename = "type")]
    pub kind: String,
    pub definitions: Option<Vec<DefDto>>,
    pub combat_parameters: Option<Vec<CombatParameterDto>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DefDto {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CombatParameterDto {
    pub id: String,
    pub collision_check_starting_percent: String,
    pub collision_damage_starting_percent: String,
    pub collision_check_ending_percent: String,
    pub vertical_rot_limit_multiplier_up: String,
    pub vertical_rot_limit_multiplier_down: String,
    pub left_rider_rot_limit: String,
    pub left_rider_min_rot_limit: String,
    pub right_rider_rot_limit: String,
    pub right_rider_min_rot_limit: String,
    pub rider_look_down_limit: String,
    pub left_ladder_rot_limit: String,
    pub right_ladder_rot_limit: String,
    pub weapon_offset: String,
    pub collision_radius: String,
    pub alternative_attack_cooldown_period: String,
    pub hit_bone_index: String,
    pub shoulder_hit_bone_index: String,
    pub look_slope_blend_factor_up_limit: String,
    pub look_slope_blend_factor_down_limit: String,
    pub look_slope_blend_speed_factor: String,
    pub custom_collision_capsule: Option<CustomCollisionCapsuleDto>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomCollisionCapsuleDto {
    pub p1: String,
    pub p2: String,
    pub r: String,
}
