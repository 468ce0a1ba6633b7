//! `attributes.xml`: character attribute definitions.
//!
//! ```xml
//! <Attributes>
//! 	<Attribute id="AgentHitPoints" name="HitPoints" source="Character">
//! 		<Documentation>...</Documentation>
//! 	</Attribute>
//! </Attributes>
//! ```

use modforge_xml_mapping::{XmlRoot, impl_xml_model};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributesDo {
    pub attributes: Vec<AttributeDataDo>,
}

impl_xml_model!(AttributesDo, |builder| builder
    .collection("Attribute", |m| &m.attributes, |m| &mut m.attributes));

impl XmlRoot for AttributesDo {
    const ROOT: &'static str = "Attributes";
}

impl AttributesDo {
    pub fn find(&self, id: &str) -> Option<&AttributeDataDo> {
        self.attributes
            .iter()
            .find(|attribute| attribute.id.as_deref() == Some(id))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeDataDo {
    pub id: Option<String>,
    pub name: Option<String>,
    pub source: Option<String>,
    pub documentation: Option<String>,
}

impl_xml_model!(AttributeDataDo, |builder| builder
    .attribute("id", |m| &m.id, |m| &mut m.id)
    .attribute("name", |m| &m.name, |m| &mut m.name)
    .attribute("source", |m| &m.source, |m| &mut m.source)
    .text_element("Documentation", |m| &m.documentation, |m| &mut m.documentation));
