//! `item_modifiers.xml`: quality modifiers applied to crafted and looted items.
//!
//! Identifier-like attributes (`modifier_group`, `id`, `name`, `quality`) are skipped on
//! save when blank, numeric ones when empty.

use modforge_xml_mapping::{Emit, XmlRoot, impl_xml_model};

use super::{format_attr, has_text, parse_attr};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemModifiersDo {
    pub modifiers: Vec<ItemModifierDo>,
}

impl_xml_model!(ItemModifiersDo, |builder| builder
    .collection("ItemModifier", |m| &m.modifiers, |m| &mut m.modifiers));

impl XmlRoot for ItemModifiersDo {
    const ROOT: &'static str = "ItemModifiers";
}

impl ItemModifiersDo {
    /// Modifiers belonging to one `modifier_group`, in file order.
    pub fn group<'a>(&'a self, group: &'a str) -> impl Iterator<Item = &'a ItemModifierDo> {
        self.modifiers
            .iter()
            .filter(move |modifier| modifier.modifier_group.as_deref() == Some(group))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemModifierDo {
    pub modifier_group: Option<String>,
    pub id: Option<String>,
    pub name: Option<String>,
    pub loot_drop_score: Option<String>,
    pub production_drop_score: Option<String>,
    pub damage: Option<String>,
    pub speed: Option<String>,
    pub missile_speed: Option<String>,
    pub price_factor: Option<String>,
    pub quality: Option<String>,
    pub hit_points: Option<String>,
    pub horse_speed: Option<String>,
    pub stack_count: Option<String>,
    pub armor: Option<String>,
    pub maneuver: Option<String>,
    pub charge_damage: Option<String>,
    pub horse_hit_points: Option<String>,
}

impl_xml_model!(ItemModifierDo, |builder| builder
    .attribute("modifier_group", |m| &m.modifier_group, |m| &mut m.modifier_group)
    .emit(Emit::When(|m| has_text(&m.modifier_group)))
    .attribute("id", |m| &m.id, |m| &mut m.id)
    .emit(Emit::When(|m| has_text(&m.id)))
    .attribute("name", |m| &m.name, |m| &mut m.name)
    .emit(Emit::When(|m| has_text(&m.name)))
    .attribute("loot_drop_score", |m| &m.loot_drop_score, |m| &mut m.loot_drop_score)
    .attribute(
        "production_drop_score",
        |m| &m.production_drop_score,
        |m| &mut m.production_drop_score,
    )
    .attribute("damage", |m| &m.damage, |m| &mut m.damage)
    .attribute("speed", |m| &m.speed, |m| &mut m.speed)
    .attribute("missile_speed", |m| &m.missile_speed, |m| &mut m.missile_speed)
    .attribute("price_factor", |m| &m.price_factor, |m| &mut m.price_factor)
    .attribute("quality", |m| &m.quality, |m| &mut m.quality)
    .emit(Emit::When(|m| has_text(&m.quality)))
    .attribute("hit_points", |m| &m.hit_points, |m| &mut m.hit_points)
    .attribute("horse_speed", |m| &m.horse_speed, |m| &mut m.horse_speed)
    .attribute("stack_count", |m| &m.stack_count, |m| &mut m.stack_count)
    .attribute("armor", |m| &m.armor, |m| &mut m.armor)
    .attribute("maneuver", |m| &m.maneuver, |m| &mut m.maneuver)
    .attribute("charge_damage", |m| &m.charge_damage, |m| &mut m.charge_damage)
    .attribute("horse_hit_points", |m| &m.horse_hit_points, |m| &mut m.horse_hit_points));

impl ItemModifierDo {
    pub fn loot_drop_score_i32(&self) -> Option<i32> {
        parse_attr(&self.loot_drop_score)
    }

    pub fn production_drop_score_i32(&self) -> Option<i32> {
        parse_attr(&self.production_drop_score)
    }

    pub fn damage_i32(&self) -> Option<i32> {
        parse_attr(&self.damage)
    }

    pub fn speed_i32(&self) -> Option<i32> {
        parse_attr(&self.speed)
    }

    pub fn missile_speed_i32(&self) -> Option<i32> {
        parse_attr(&self.missile_speed)
    }

    pub fn price_factor_f32(&self) -> Option<f32> {
        parse_attr(&self.price_factor)
    }

    pub fn hit_points_i32(&self) -> Option<i32> {
        parse_attr(&self.hit_points)
    }

    pub fn horse_speed_f32(&self) -> Option<f32> {
        parse_attr(&self.horse_speed)
    }

    pub fn stack_count_i32(&self) -> Option<i32> {
        parse_attr(&self.stack_count)
    }

    pub fn armor_i32(&self) -> Option<i32> {
        parse_attr(&self.armor)
    }

    pub fn maneuver_f32(&self) -> Option<f32> {
        parse_attr(&self.maneuver)
    }

    pub fn charge_damage_f32(&self) -> Option<f32> {
        parse_attr(&self.charge_damage)
    }

    pub fn horse_hit_points_f32(&self) -> Option<f32> {
        parse_attr(&self.horse_hit_points)
    }

    pub fn set_damage_i32(&mut self, value: Option<i32>) {
        self.damage = format_attr(value);
    }

    pub fn set_price_factor_f32(&mut self, value: Option<f32>) {
        self.price_factor = format_attr(value);
    }
}
