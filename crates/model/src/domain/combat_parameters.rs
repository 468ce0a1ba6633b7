//! `combat_parameters.xml`: engine combat tuning.
//!
//! ```xml
//! <base type="combat_parameters">
//! 	<definitions>
//! 		<def name="hit_bone_index" val="0" />
//! 	</definitions>
//! 	<combat_parameters>
//! 		<combat_parameter id="human" collision_radius="0.4">
//! 			<custom_collision_capsule p1="0, 0, 0.5" p2="0, 0, 1.6" r="0.4" />
//! 		</combat_parameter>
//! 	</combat_parameters>
//! </base>
//! ```
//!
//! Both containers keep their presence: a file with `<definitions />` saves it back,
//! a file without one does not gain it.

use modforge_xml_mapping::{Presence, XmlRoot, impl_xml_model};

use super::{format_attr, parse_attr};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CombatParametersDo {
    pub kind: Option<String>,
    pub definitions: Presence<Vec<DefDo>>,
    pub combat_parameters: Presence<Vec<CombatParameterDo>>,
}

impl_xml_model!(CombatParametersDo, |builder| builder
    .attribute("type", |m| &m.kind, |m| &mut m.kind)
    .wrapped("definitions", "def", |m| &m.definitions, |m| &mut m.definitions)
    .wrapped(
        "combat_parameters",
        "combat_parameter",
        |m| &m.combat_parameters,
        |m| &mut m.combat_parameters,
    ));

impl XmlRoot for CombatParametersDo {
    const ROOT: &'static str = "base";
}

impl CombatParametersDo {
    pub fn find(&self, id: &str) -> Option<&CombatParameterDo> {
        self.combat_parameters
            .items()
            .iter()
            .find(|parameter| parameter.id.as_deref() == Some(id))
    }

    pub fn definition(&self, name: &str) -> Option<&DefDo> {
        self.definitions
            .items()
            .iter()
            .find(|def| def.name.as_deref() == Some(name))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DefDo {
    pub name: Option<String>,
    pub value: Option<String>,
}

impl_xml_model!(DefDo, |builder| builder
    .attribute("name", |m| &m.name, |m| &mut m.name)
    .attribute("val", |m| &m.value, |m| &mut m.value));

impl DefDo {
    pub fn value_f32(&self) -> Option<f32> {
        parse_attr(&self.value)
    }

    pub fn value_i32(&self) -> Option<i32> {
        parse_attr(&self.value)
    }

    pub fn set_value_f32(&mut self, value: Option<f32>) {
        self.value = format_attr(value);
    }

    pub fn set_value_i32(&mut self, value: Option<i32>) {
        self.value = format_attr(value);
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CombatParameterDo {
    pub id: Option<String>,
    pub collision_check_starting_percent: Option<String>,
    pub collision_damage_starting_percent: Option<String>,
    pub collision_check_ending_percent: Option<String>,
    pub vertical_rot_limit_multiplier_up: Option<String>,
    pub vertical_rot_limit_multiplier_down: Option<String>,
    pub left_rider_rot_limit: Option<String>,
    pub left_rider_min_rot_limit: Option<String>,
    pub right_rider_rot_limit: Option<String>,
    pub right_rider_min_rot_limit: Option<String>,
    pub rider_look_down_limit: Option<String>,
    pub left_ladder_rot_limit: Option<String>,
    pub right_ladder_rot_limit: Option<String>,
    pub weapon_offset: Option<String>,
    pub collision_radius: Option<String>,
    pub alternative_attack_cooldown_period: Option<String>,
    pub hit_bone_index: Option<String>,
    pub shoulder_hit_bone_index: Option<String>,
    pub look_slope_blend_factor_up_limit: Option<String>,
    pub look_slope_blend_factor_down_limit: Option<String>,
    pub look_slope_blend_speed_factor: Option<String>,
    pub custom_collision_capsule: Presence<CustomCollisionCapsuleDo>,
}

impl_xml_model!(CombatParameterDo, |builder| builder
    .attribute("id", |m| &m.id, |m| &mut m.id)
    .attribute(
        "collision_check_starting_percent",
        |m| &m.collision_check_starting_percent,
        |m| &mut m.collision_check_starting_percent,
    )
    .attribute(
        "collision_damage_starting_percent",
        |m| &m.collision_damage_starting_percent,
        |m| &mut m.collision_damage_starting_percent,
    )
    .attribute(
        "collision_check_ending_percent",
        |m| &m.collision_check_ending_percent,
        |m| &mut m.collision_check_ending_percent,
    )
    .attribute(
        "vertical_rot_limit_multiplier_up",
        |m| &m.vertical_rot_limit_multiplier_up,
        |m| &mut m.vertical_rot_limit_multiplier_up,
    )
    .attribute(
        "vertical_rot_limit_multiplier_down",
        |m| &m.vertical_rot_limit_multiplier_down,
        |m| &mut m.vertical_rot_limit_multiplier_down,
    )
    .attribute(
        "left_rider_rot_limit",
        |m| &m.left_rider_rot_limit,
        |m| &mut m.left_rider_rot_limit,
    )
    .attribute(
        "left_rider_min_rot_limit",
        |m| &m.left_rider_min_rot_limit,
        |m| &mut m.left_rider_min_rot_limit,
    )
    .attribute(
        "right_rider_rot_limit",
        |m| &m.right_rider_rot_limit,
        |m| &mut m.right_rider_rot_limit,
    )
    .attribute(
        "right_rider_min_rot_limit",
        |m| &m.right_rider_min_rot_limit,
        |m| &mut m.right_rider_min_rot_limit,
    )
    .attribute(
        "rider_look_down_limit",
        |m| &m.rider_look_down_limit,
        |m| &mut m.rider_look_down_limit,
    )
    .attribute(
        "left_ladder_rot_limit",
        |m| &m.left_ladder_rot_limit,
        |m| &mut m.left_ladder_rot_limit,
    )
    .attribute(
        "right_ladder_rot_limit",
        |m| &m.right_ladder_rot_limit,
        |m| &mut m.right_ladder_rot_limit,
    )
    .attribute("weapon_offset", |m| &m.weapon_offset, |m| &mut m.weapon_offset)
    .attribute(
        "collision_radius",
        |m| &m.collision_radius,
        |m| &mut m.collision_radius,
    )
    .attribute(
        "alternative_attack_cooldown_period",
        |m| &m.alternative_attack_cooldown_period,
        |m| &mut m.alternative_attack_cooldown_period,
    )
    .attribute("hit_bone_index", |m| &m.hit_bone_index, |m| &mut m.hit_bone_index)
    .attribute(
        "shoulder_hit_bone_index",
        |m| &m.shoulder_hit_bone_index,
        |m| &mut m.shoulder_hit_bone_index,
    )
    .attribute(
        "look_slope_blend_factor_up_limit",
        |m| &m.look_slope_blend_factor_up_limit,
        |m| &mut m.look_slope_blend_factor_up_limit,
    )
    .attribute(
        "look_slope_blend_factor_down_limit",
        |m| &m.look_slope_blend_factor_down_limit,
        |m| &mut m.look_slope_blend_factor_down_limit,
    )
    .attribute(
        "look_slope_blend_speed_factor",
        |m| &m.look_slope_blend_speed_factor,
        |m| &mut m.look_slope_blend_speed_factor,
    )
    .element(
        "custom_collision_capsule",
        |m| &m.custom_collision_capsule,
        |m| &mut m.custom_collision_capsule,
    ));

impl CombatParameterDo {
    pub fn collision_radius_f32(&self) -> Option<f32> {
        parse_attr(&self.collision_radius)
    }

    pub fn hit_bone_index_i32(&self) -> Option<i32> {
        parse_attr(&self.hit_bone_index)
    }

    pub fn shoulder_hit_bone_index_i32(&self) -> Option<i32> {
        parse_attr(&self.shoulder_hit_bone_index)
    }

    pub fn set_collision_radius_f32(&mut self, value: Option<f32>) {
        self.collision_radius = format_attr(value);
    }
}

/// Capsule endpoints are comma-separated vectors and stay as text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomCollisionCapsuleDo {
    pub p1: Option<String>,
    pub p2: Option<String>,
    pub r: Option<String>,
}

impl_xml_model!(CustomCollisionCapsuleDo, |builder| builder
    .attribute("p1", |m| &m.p1, |m| &mut m.p1)
    .attribute("p2", |m| &m.p2, |m| &mut m.p2)
    .attribute("r", |m| &m.r, |m| &mut m.r));

impl CustomCollisionCapsuleDo {
    pub fn radius(&self) -> Option<f32> {
        parse_attr(&self.r)
    }
}
