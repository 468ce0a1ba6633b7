use super::{
    Transfer, element_to_do, element_to_dto, text_to_do, text_to_dto, wrapped_to_do,
    wrapped_to_dto,
};
use crate::domain::{CombatParameterDo, CombatParametersDo, CustomCollisionCapsuleDo, DefDo};
use crate::transfer::{CombatParameterDto, CombatParametersDto, CustomCollisionCapsuleDto, DefDto};

impl Transfer for CombatParametersDo {
    type Dto = CombatParametersDto;

    fn to_dto(&self) -> CombatParametersDto {
        CombatParametersDto {
            kind: text_to_dto(&self.kind),
            definitions: wrapped_to_dto(&self.definitions),
            combat_parameters: wrapped_to_dto(&self.combat_parameters),
        }
    }

    fn from_dto(dto: &CombatParametersDto) -> Self {
        Self {
            kind: text_to_do(&dto.kind),
            definitions: wrapped_to_do(&dto.definitions),
            combat_parameters: wrapped_to_do(&dto.combat_parameters),
        }
    }
}

impl Transfer for DefDo {
    type Dto = DefDto;

    fn to_dto(&self) -> DefDto {
        DefDto {
            name: text_to_dto(&self.name),
            value: text_to_dto(&self.value),
        }
    }

    fn from_dto(dto: &DefDto) -> Self {
        Self {
            name: text_to_do(&dto.name),
            value: text_to_do(&dto.value),
        }
    }
}

impl Transfer for CombatParameterDo {
    type Dto = CombatParameterDto;

    fn to_dto(&self) -> CombatParameterDto {
        CombatParameterDto {
            id: text_to_dto(&self.id),
            collision_check_starting_percent: text_to_dto(&self.collision_check_starting_percent),
            collision_damage_starting_percent: text_to_dto(&self.collision_damage_starting_percent),
            collision_check_ending_percent: text_to_dto(&self.collision_check_ending_percent),
            vertical_rot_limit_multiplier_up: text_to_dto(&self.vertical_rot_limit_multiplier_up),
            vertical_rot_limit_multiplier_down: text_to_dto(
                &self.vertical_rot_limit_multiplier_down,
            ),
            left_rider_rot_limit: text_to_dto(&self.left_rider_rot_limit),
            left_rider_min_rot_limit: text_to_dto(&self.left_rider_min_rot_limit),
            right_rider_rot_limit: text_to_dto(&self.right_rider_rot_limit),
            right_rider_min_rot_limit: text_to_dto(&self.right_rider_min_rot_limit),
            rider_look_down_limit: text_to_dto(&self.rider_look_down_limit),
            left_ladder_rot_limit: text_to_dto(&self.left_ladder_rot_limit),
            right_ladder_rot_limit: text_to_dto(&self.right_ladder_rot_limit),
            weapon_offset: text_to_dto(&self.weapon_offset),
            collision_radius: text_to_dto(&self.collision_radius),
            alternative_attack_cooldown_period: text_to_dto(
                &self.alternative_attack_cooldown_period,
            ),
            hit_bone_index: text_to_dto(&self.hit_bone_index),
            shoulder_hit_bone_index: text_to_dto(&self.shoulder_hit_bone_index),
            look_slope_blend_factor_up_limit: text_to_dto(&self.look_slope_blend_factor_up_limit),
            look_slope_blend_factor_down_limit: text_to_dto(
                &self.look_slope_blend_factor_down_limit,
            ),
            look_slope_blend_speed_factor: text_to_dto(&self.look_slope_blend_speed_factor),
            custom_collision_capsule: element_to_dto(&self.custom_collision_capsule),
        }
    }

    fn from_dto(dto: &CombatParameterDto) -> Self {
        Self {
            id: text_to_do(&dto.id),
            collision_check_starting_percent: text_to_do(&dto.collision_check_starting_percent),
            collision_damage_starting_percent: text_to_do(&dto.collision_damage_starting_percent),
            collision_check_ending_percent: text_to_do(&dto.collision_check_ending_percent),
            vertical_rot_limit_multiplier_up: text_to_do(&dto.vertical_rot_limit_multiplier_up),
            vertical_rot_limit_multiplier_down: text_to_do(&dto.vertical_rot_limit_multiplier_down),
            left_rider_rot_limit: text_to_do(&dto.left_rider_rot_limit),
            left_rider_min_rot_limit: text_to_do(&dto.left_rider_min_rot_limit),
            right_rider_rot_limit: text_to_do(&dto.right_rider_rot_limit),
            right_rider_min_rot_limit: text_to_do(&dto.right_rider_min_rot_limit),
            rider_look_down_limit: text_to_do(&dto.rider_look_down_limit),
            left_ladder_rot_limit: text_to_do(&dto.left_ladder_rot_limit),
            right_ladder_rot_limit: text_to_do(&dto.right_ladder_rot_limit),
            weapon_offset: text_to_do(&dto.weapon_offset),
            collision_radius: text_to_do(&dto.collision_radius),
            alternative_attack_cooldown_period: text_to_do(&dto.alternative_attack_cooldown_period),
            hit_bone_index: text_to_do(&dto.hit_bone_index),
            shoulder_hit_bone_index: text_to_do(&dto.shoulder_hit_bone_index),
            look_slope_blend_factor_up_limit: text_to_do(&dto.look_slope_blend_factor_up_limit),
            look_slope_blend_factor_down_limit: text_to_do(&dto.look_slope_blend_factor_down_limit),
            look_slope_blend_speed_factor: text_to_do(&dto.look_slope_blend_speed_factor),
            custom_collision_capsule: element_to_do(&dto.custom_collision_capsule),
        }
    }
}

impl Transfer for CustomCollisionCapsuleDo {
    type Dto = CustomCollisionCapsuleDto;

    fn to_dto(&self) -> CustomCollisionCapsuleDto {
        CustomCollisionCapsuleDto {
            p1: text_to_dto(&self.p1),
            p2: text_to_dto(&self.p2),
            r: text_to_dto(&self.r),
        }
    }

    fn from_dto(dto: &CustomCollisionCapsuleDto) -> Self {
        Self {
            p1: text_to_do(&dto.p1),
            p2: text_to_do(&dto.p2),
            r: text_to_do(&dto.r),
        }
    }
}
