use modforge_serde::xml::{
    CompareOptions, are_structurally_equal, find_document_difference, from_xml_path,
    from_xml_path_async, from_xml_str, from_xml_str_async, models_equivalent, to_xml_path,
    to_xml_path_async, to_xml_string,
};
use modforge_serde::{Result, SerdeError};
use modforge_xml_mapping::{Presence, XmlRoot, impl_xml_model};

#[derive(Debug, Default, Clone, PartialEq)]
struct Modifier {
    code: Option<String>,
    value: Option<String>,
}

impl_xml_model!(Modifier, |builder| builder
    .attribute("AttribCode", |m| &m.code, |m| &mut m.code)
    .attribute("Value", |m| &m.value, |m| &mut m.value));

#[derive(Debug, Default, Clone, PartialEq)]
struct Skill {
    id: Option<String>,
    name: Option<String>,
    modifiers: Presence<Vec<Modifier>>,
    documentation: Option<String>,
}

impl_xml_model!(Skill, |builder| builder
    .attribute("id", |m| &m.id, |m| &mut m.id)
    .attribute("Name", |m| &m.name, |m| &mut m.name)
    .wrapped("Modifiers", "AttributeModifier", |m| &m.modifiers, |m| &mut m.modifiers)
    .text_element("Documentation", |m| &m.documentation, |m| &mut m.documentation));

#[derive(Debug, Default, Clone, PartialEq)]
struct SkillList {
    skills: Vec<Skill>,
}

impl_xml_model!(SkillList, |builder| builder
    .collection("SkillData", |m| &m.skills, |m| &mut m.skills));

impl XmlRoot for SkillList {
    const ROOT: &'static str = "ArrayOfSkillData";
}

const SKILLS: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<ArrayOfSkillData xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xmlns:xsd="http://www.w3.org/2001/XMLSchema">
	<SkillData id="OneHanded" Name="One Handed">
		<Modifiers>
			<AttributeModifier AttribCode="Vigor" Value="1.0" />
		</Modifiers>
		<Documentation>Swing &amp; thrust</Documentation>
	</SkillData>
	<SkillData id="Riding" Name="Riding">
		<Modifiers />
	</SkillData>
</ArrayOfSkillData>"#;

#[test]
fn test_load_from_string() -> Result<()> {
    let skills: SkillList = from_xml_str(SKILLS)?;

    assert_eq!(skills.skills.len(), 2);
    let one_handed = &skills.skills[0];
    assert_eq!(one_handed.name.as_deref(), Some("One Handed"));
    assert_eq!(one_handed.modifiers.len(), 1);
    assert_eq!(one_handed.documentation.as_deref(), Some("Swing & thrust"));
    assert!(skills.skills[1].modifiers.is_empty());

    Ok(())
}

#[test]
fn test_save_is_byte_identical_with_original_namespaces() -> Result<()> {
    let skills: SkillList = from_xml_str(SKILLS)?;
    let saved = to_xml_string(&skills, Some(SKILLS))?;
    println!("XML output:\n{}", saved);

    assert_eq!(saved, SKILLS);
    Ok(())
}

#[test]
fn test_save_without_original_has_no_namespaces() -> Result<()> {
    let skills: SkillList = from_xml_str(SKILLS)?;
    let saved = to_xml_string(&skills, None)?;

    assert!(saved.contains("\n<ArrayOfSkillData>\n"));
    assert!(!saved.contains("xmlns"));
    Ok(())
}

#[test]
fn test_output_format() -> Result<()> {
    let skills = SkillList {
        skills: vec![Skill {
            id: Some("Bow".to_string()),
            ..Default::default()
        }],
    };
    let saved = to_xml_string(&skills, None)?;

    assert_eq!(
        saved,
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<ArrayOfSkillData>\n\t<SkillData id=\"Bow\" />\n</ArrayOfSkillData>"
    );
    assert!(!saved.contains('\r'));
    assert!(!saved.starts_with('\u{feff}'));
    Ok(())
}

#[test]
fn test_round_trip_idempotence() -> Result<()> {
    let skills = SkillList {
        skills: vec![Skill {
            id: Some("Athletics".to_string()),
            name: Some("Athletics".to_string()),
            modifiers: Presence::Value(vec![Modifier {
                code: Some("Endurance".to_string()),
                value: Some("2".to_string()),
            }]),
            documentation: Some("Run <fast>".to_string()),
        }],
    };

    let saved = to_xml_string(&skills, None)?;
    let reloaded: SkillList = from_xml_str(&saved)?;

    assert_eq!(reloaded, skills);
    assert!(models_equivalent(&reloaded, &skills, &CompareOptions::default())?);
    Ok(())
}

#[test]
fn test_fidelity_ignores_comments_and_unknown_content() -> Result<()> {
    let original = r#"<ArrayOfSkillData>
  <!-- generated -->
  <SkillData id="Bow" Name="Bow" />
</ArrayOfSkillData>"#;
    let skills: SkillList = from_xml_str(original)?;
    let saved = to_xml_string(&skills, Some(original))?;

    assert!(are_structurally_equal(original, &saved, &CompareOptions::round_trip())?);
    assert!(!are_structurally_equal(original, &saved, &CompareOptions::default())?);
    Ok(())
}

#[test]
fn test_unknown_content_is_skipped() -> Result<()> {
    let xml = r#"<ArrayOfSkillData><Future x="1"/><SkillData id="Bow" color="red"><Extra/></SkillData></ArrayOfSkillData>"#;
    let skills: SkillList = from_xml_str(xml)?;

    assert_eq!(skills.skills.len(), 1);
    assert_eq!(skills.skills[0].id.as_deref(), Some("Bow"));

    let saved = to_xml_string(&skills, None)?;
    let difference = find_document_difference(xml, &saved, &CompareOptions::default())?;
    assert!(difference.is_some());
    Ok(())
}

#[test]
fn test_load_errors() {
    assert!(matches!(
        from_xml_str::<SkillList>(""),
        Err(SerdeError::Argument(_))
    ));
    assert!(matches!(
        from_xml_str::<SkillList>("  \n\t"),
        Err(SerdeError::Argument(_))
    ));
    assert!(matches!(
        from_xml_str::<SkillList>("<ArrayOfSkillData><SkillData></ArrayOfSkillData>"),
        Err(SerdeError::Parse { .. })
    ));
    assert!(matches!(
        from_xml_str::<SkillList>("<Attributes />"),
        Err(SerdeError::RootMismatch { expected: "ArrayOfSkillData", .. })
    ));
    assert!(matches!(
        from_xml_path::<SkillList>("/definitely/not/here/skills.xml"),
        Err(SerdeError::NotFound { .. })
    ));
}

#[test]
fn test_file_round_trip() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("skills.xml");
    std::fs::write(&path, SKILLS)?;

    let skills: SkillList = from_xml_path(&path)?;
    to_xml_path(&skills, &path, Some(SKILLS))?;

    assert_eq!(std::fs::read_to_string(&path)?, SKILLS);
    let leftovers = std::fs::read_dir(dir.path())?.count();
    assert_eq!(leftovers, 1);
    Ok(())
}

#[tokio::test]
async fn test_async_load_and_save() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("skills.xml");

    let skills: SkillList = from_xml_str_async(SKILLS).await?;
    to_xml_path_async(skills.clone(), &path, Some(SKILLS.to_string())).await?;

    let reloaded: SkillList = from_xml_path_async(&path).await?;
    assert_eq!(reloaded, skills);

    let missing = from_xml_path_async::<SkillList>(dir.path().join("missing.xml")).await;
    assert!(matches!(missing, Err(SerdeError::NotFound { .. })));
    Ok(())
}
