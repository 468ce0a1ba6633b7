use super::{Transfer, list_to_do, list_to_dto, text_to_do, text_to_dto};
use crate::domain::{ItemModifierDo, ItemModifiersDo};
use crate::transfer::{ItemModifierDto, ItemModifiersDto};

impl Transfer for ItemModifiersDo {
    type Dto = ItemModifiersDto;

    fn to_dto(&self) -> ItemModifiersDto {
        ItemModifiersDto {
            modifiers: list_to_dto(&self.modifiers),
        }
    }

    fn from_dto(dto: &ItemModifiersDto) -> Self {
        Self {
            modifiers: list_to_do(&dto.modifiers),
        }
    }
}

impl Transfer for ItemModifierDo {
    type Dto = ItemModifierDto;

    fn to_dto(&self) -> ItemModifierDto {
        ItemModifierDto {
            modifier_group: text_to_dto(&self.modifier_group),
            id: text_to_dto(&self.id),
            name: text_to_dto(&self.name),
            loot_drop_score: text_to_dto(&self.loot_drop_score),
            production_drop_score: text_to_dto(&self.production_drop_score),
            damage: text_to_dto(&self.damage),
            speed: text_to_dto(&self.speed),
            missile_speed: text_to_dto(&self.missile_speed),
            price_factor: text_to_dto(&self.price_factor),
            quality: text_to_dto(&self.quality),
            hit_points: text_to_dto(&self.hit_points),
            horse_speed: text_to_dto(&self.horse_speed),
            stack_count: text_to_dto(&self.stack_count),
            armor: text_to_dto(&self.armor),
            maneuver: text_to_dto(&self.maneuver),
            charge_damage: text_to_dto(&self.charge_damage),
            horse_hit_points: text_to_dto(&self.horse_hit_points),
        }
    }

    fn from_dto(dto: &ItemModifierDto) -> Self {
        Self {
            modifier_group: text_to_do(&dto.modifier_group),
            id: text_to_do(&dto.id),
            name: text_to_do(&dto.name),
            loot_drop_score: text_to_do(&dto.loot_drop_score),
            production_drop_score: text_to_do(&dto.production_drop_score),
            damage: text_to_do(&dto.damage),
            speed: text_to_do(&dto.speed),
            missile_speed: text_to_do(&dto.missile_speed),
            price_factor: text_to_do(&dto.price_factor),
            quality: text_to_do(&dto.quality),
            hit_points: text_to_do(&dto.hit_points),
            horse_speed: text_to_do(&dto.horse_speed),
            stack_count: text_to_do(&dto.stack_count),
            armor: text_to_do(&dto.armor),
            maneuver: text_to_do(&dto.maneuver),
            charge_damage: text_to_do(&dto.charge_damage),
            horse_hit_points: text_to_do(&dto.horse_hit_points),
        }
    }
}
