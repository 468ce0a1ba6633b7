//! `banner_icons.xml`: banner icon groups and the color palette.

use modforge_xml_mapping::{Presence, XmlRoot, impl_xml_model};

use super::{format_attr, parse_attr, parse_bool_attr};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BannerIconsDo {
    pub kind: Option<String>,
    pub banner_icon_data: Presence<BannerIconDataDo>,
}

impl_xml_model!(BannerIconsDo, |builder| builder
    .attribute("type", |m| &m.kind, |m| &mut m.kind)
    .element("BannerIconData", |m| &m.banner_icon_data, |m| &mut m.banner_icon_data));

impl XmlRoot for BannerIconsDo {
    const ROOT: &'static str = "base";
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BannerIconDataDo {
    pub icon_groups: Vec<BannerIconGroupDo>,
    pub banner_colors: Presence<BannerColorsDo>,
}

impl_xml_model!(BannerIconDataDo, |builder| builder
    .collection("BannerIconGroup", |m| &m.icon_groups, |m| &mut m.icon_groups)
    .element("BannerColors", |m| &m.banner_colors, |m| &mut m.banner_colors));

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BannerIconGroupDo {
    pub id: Option<String>,
    pub name: Option<String>,
    pub is_pattern: Option<String>,
    pub backgrounds: Vec<BackgroundDo>,
    pub icons: Vec<IconDo>,
}

impl_xml_model!(BannerIconGroupDo, |builder| builder
    .attribute("id", |m| &m.id, |m| &mut m.id)
    .attribute("name", |m| &m.name, |m| &mut m.name)
    .attribute("is_pattern", |m| &m.is_pattern, |m| &mut m.is_pattern)
    .collection("Background", |m| &m.backgrounds, |m| &mut m.backgrounds)
    .collection("Icon", |m| &m.icons, |m| &mut m.icons));

impl BannerIconGroupDo {
    pub fn id_i32(&self) -> Option<i32> {
        parse_attr(&self.id)
    }

    pub fn is_pattern_bool(&self) -> Option<bool> {
        parse_bool_attr(&self.is_pattern)
    }

    pub fn set_is_pattern_bool(&mut self, value: Option<bool>) {
        self.is_pattern = format_attr(value);
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BackgroundDo {
    pub id: Option<String>,
    pub mesh_name: Option<String>,
    pub is_base_background: Option<String>,
}

impl_xml_model!(BackgroundDo, |builder| builder
    .attribute("id", |m| &m.id, |m| &mut m.id)
    .attribute("mesh_name", |m| &m.mesh_name, |m| &mut m.mesh_name)
    .attribute(
        "is_base_background",
        |m| &m.is_base_background,
        |m| &mut m.is_base_background,
    ));

impl BackgroundDo {
    pub fn id_i32(&self) -> Option<i32> {
        parse_attr(&self.id)
    }

    pub fn is_base_background_bool(&self) -> Option<bool> {
        parse_bool_attr(&self.is_base_background)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct IconDo {
    pub id: Option<String>,
    pub material_name: Option<String>,
    pub texture_index: Option<String>,
    pub is_reserved: Option<String>,
}

impl_xml_model!(IconDo, |builder| builder
    .attribute("id", |m| &m.id, |m| &mut m.id)
    .attribute("material_name", |m| &m.material_name, |m| &mut m.material_name)
    .attribute("texture_index", |m| &m.texture_index, |m| &mut m.texture_index)
    .attribute("is_reserved", |m| &m.is_reserved, |m| &mut m.is_reserved));

impl IconDo {
    pub fn id_i32(&self) -> Option<i32> {
        parse_attr(&self.id)
    }

    pub fn texture_index_i32(&self) -> Option<i32> {
        parse_attr(&self.texture_index)
    }

    pub fn is_reserved_bool(&self) -> Option<bool> {
        parse_bool_attr(&self.is_reserved)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BannerColorsDo {
    pub colors: Vec<ColorEntryDo>,
}

impl_xml_model!(BannerColorsDo, |builder| builder
    .collection("Color", |m| &m.colors, |m| &mut m.colors));

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorEntryDo {
    pub id: Option<String>,
    pub hex: Option<String>,
    pub player_can_choose_for_background: Option<String>,
    pub player_can_choose_for_sigil: Option<String>,
}

impl_xml_model!(ColorEntryDo, |builder| builder
    .attribute("id", |m| &m.id, |m| &mut m.id)
    .attribute("hex", |m| &m.hex, |m| &mut m.hex)
    .attribute(
        "player_can_choose_for_background",
        |m| &m.player_can_choose_for_background,
        |m| &mut m.player_can_choose_for_background,
    )
    .attribute(
        "player_can_choose_for_sigil",
        |m| &m.player_can_choose_for_sigil,
        |m| &mut m.player_can_choose_for_sigil,
    ));

impl ColorEntryDo {
    pub fn id_i32(&self) -> Option<i32> {
        parse_attr(&self.id)
    }

    pub fn player_can_choose_for_background_bool(&self) -> Option<bool> {
        parse_bool_attr(&self.player_can_choose_for_background)
    }

    pub fn player_can_choose_for_sigil_bool(&self) -> Option<bool> {
        parse_bool_attr(&self.player_can_choose_for_sigil)
    }
}
