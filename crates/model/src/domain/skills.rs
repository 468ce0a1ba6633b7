//! `skills.xml`: skill definitions in the .NET array layout.
//!
//! The root usually carries `xmlns:xsi` and `xmlns:xsd` declarations; they are not part
//! of the model and are restored from the original document on save.

use modforge_xml_mapping::{Presence, XmlRoot, impl_xml_model};

use super::{format_attr, parse_attr};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillsDo {
    pub skills: Vec<SkillDataDo>,
}

impl_xml_model!(SkillsDo, |builder| builder
    .collection("SkillData", |m| &m.skills, |m| &mut m.skills));

impl XmlRoot for SkillsDo {
    const ROOT: &'static str = "ArrayOfSkillData";
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillDataDo {
    pub id: Option<String>,
    pub name: Option<String>,
    /// `<Modifiers />` in the source loads as `Presence::Empty` and is written back.
    pub modifiers: Presence<Vec<AttributeModifierDo>>,
    pub documentation: Option<String>,
}

impl_xml_model!(SkillDataDo, |builder| builder
    .attribute("id", |m| &m.id, |m| &mut m.id)
    .attribute("Name", |m| &m.name, |m| &mut m.name)
    .wrapped("Modifiers", "AttributeModifier", |m| &m.modifiers, |m| &mut m.modifiers)
    .text_element("Documentation", |m| &m.documentation, |m| &mut m.documentation));

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeModifierDo {
    pub attrib_code: Option<String>,
    pub modification: Option<String>,
    pub value: Option<String>,
}

impl_xml_model!(AttributeModifierDo, |builder| builder
    .attribute("AttribCode", |m| &m.attrib_code, |m| &mut m.attrib_code)
    .attribute("Modification", |m| &m.modification, |m| &mut m.modification)
    .attribute("Value", |m| &m.value, |m| &mut m.value));

impl AttributeModifierDo {
    pub fn value_f32(&self) -> Option<f32> {
        parse_attr(&self.value)
    }

    pub fn set_value_f32(&mut self, value: Option<f32>) {
        self.value = format_attr(value);
    }
}
