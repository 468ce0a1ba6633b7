use std::fs;
use std::path::Path;

use modforge::{
    check_file, compare_files, compare_options, export_file, round_trip_files, verify_directory,
};
use modforge_model::SchemaKind;
use modforge_serde::xml::CompareOptions;

const ATTRIBUTES: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<Attributes>
	<!-- hit points -->
	<Attribute id="AgentHitPoints" name="HitPoints" source="Character">
		<Documentation>Maximum hit points.</Documentation>
	</Attribute>
</Attributes>"#;

const SKILLS: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<ArrayOfSkillData xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xmlns:xsd="http://www.w3.org/2001/XMLSchema">
	<SkillData id="Riding" Name="Riding">
		<Modifiers />
	</SkillData>
</ArrayOfSkillData>"#;

const ITEM_MODIFIERS_WITH_UNKNOWN: &str = r#"<ItemModifiers>
	<ItemModifier id="fine" name="Fine">
		<Unmapped />
	</ItemModifier>
</ItemModifiers>"#;

const MALFORMED: &str = r#"<base type="combat_parameters"><definitions>"#;

fn write(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).unwrap();
}

#[test]
fn test_check_file_reports_equivalence() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "skills.xml", SKILLS);

    let report = check_file(&dir.path().join("skills.xml"), &CompareOptions::round_trip()).unwrap();
    assert_eq!(report.kind, SchemaKind::Skills);
    assert!(report.is_equivalent());
    assert_eq!(report.saved, SKILLS);
}

#[test]
fn test_check_file_rejects_unsupported_names() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "looknfeel.xml", "<base />");

    let err = check_file(&dir.path().join("looknfeel.xml"), &CompareOptions::round_trip())
        .unwrap_err();
    assert!(err.to_string().contains("no supported model"));
}

#[test]
fn test_round_trip_files_writes_clean_results() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "attributes.xml", ATTRIBUTES);
    write(dir.path(), "item_modifiers.xml", ITEM_MODIFIERS_WITH_UNKNOWN);
    let files = vec![
        dir.path().join("attributes.xml"),
        dir.path().join("item_modifiers.xml"),
        dir.path().join("skills.xml"),
    ];

    let summary = round_trip_files(&files, true);

    assert_eq!(summary.passed(), 1);
    assert_eq!(summary.failed(), 2);
    assert!(!summary.is_success());
    assert_eq!(summary.errors.len(), 1);
    assert!(summary.errors[0].0.ends_with("skills.xml"));

    let attributes = summary
        .reports
        .iter()
        .find(|r| r.kind == SchemaKind::Attributes)
        .unwrap();
    assert!(attributes.written);
    let rewritten = fs::read_to_string(dir.path().join("attributes.xml")).unwrap();
    assert!(!rewritten.contains("<!--"));
    assert!(rewritten.contains("\t\t<Documentation>Maximum hit points.</Documentation>"));

    let modifiers = summary
        .reports
        .iter()
        .find(|r| r.kind == SchemaKind::ItemModifiers)
        .unwrap();
    assert!(!modifiers.is_equivalent());
    assert!(!modifiers.written);
    assert_eq!(
        fs::read_to_string(dir.path().join("item_modifiers.xml")).unwrap(),
        ITEM_MODIFIERS_WITH_UNKNOWN
    );

    let output = summary.to_string();
    assert!(output.contains("DIFF"));
    assert!(output.contains("ERROR"));
    assert!(output.ends_with("1 passed, 2 failed\n"));
}

#[test]
fn test_compare_files_uses_options() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "a.xml", r#"<a x="1" y="2"><!-- c --><b /></a>"#);
    write(dir.path(), "b.xml", r#"<a y="2" x="1.0"><b /></a>"#);
    let a = dir.path().join("a.xml");
    let b = dir.path().join("b.xml");

    let strict = compare_files(&a, &b, &compare_options(false, false, false)).unwrap();
    assert!(strict.is_some());

    let relaxed = compare_files(&a, &b, &compare_options(true, false, false)).unwrap();
    assert!(relaxed.is_none());

    let ordered = compare_files(&a, &b, &compare_options(true, false, true)).unwrap();
    assert!(ordered.is_some());

    assert!(compare_files(&a, &dir.path().join("missing.xml"), &CompareOptions::default()).is_err());
}

#[test]
fn test_export_file() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "skills.xml", SKILLS);
    let out = dir.path().join("skills.json");

    let json = export_file(&dir.path().join("skills.xml"), Some(&out)).unwrap();

    assert!(json.contains("\"modifiers\": []"));
    assert_eq!(fs::read_to_string(&out).unwrap(), json);
}

#[tokio::test]
async fn test_verify_directory_continues_past_failures() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "attributes.xml", ATTRIBUTES);
    write(dir.path(), "skills.xml", SKILLS);
    write(dir.path(), "combat_parameters.xml", MALFORMED);
    write(dir.path(), "looknfeel.xml", "<base />");
    fs::create_dir(dir.path().join("Multiplayer")).unwrap();
    write(&dir.path().join("Multiplayer"), "item_modifiers.xml", ITEM_MODIFIERS_WITH_UNKNOWN);

    let summary = verify_directory(dir.path(), 2).await.unwrap();

    assert_eq!(summary.reports.len(), 3);
    assert_eq!(summary.passed(), 2);
    assert_eq!(summary.errors.len(), 1);
    assert!(summary.errors[0].0.ends_with("combat_parameters.xml"));
    assert_eq!(summary.failed(), 2);
    assert!(!summary.is_success());
}

#[tokio::test]
async fn test_verify_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let result = verify_directory(&dir.path().join("absent"), 4).await;
    assert!(result.is_err());
}
