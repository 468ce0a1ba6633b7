use modforge_xml_mapping::{
    Emit, MappingError, Presence, XmlElement, XmlNode, XmlRoot, impl_xml_model, is_populated,
    read_model, write_model, write_root,
};

#[derive(Debug, Default, Clone, PartialEq)]
struct Def {
    name: Option<String>,
    value: Option<String>,
}

impl_xml_model!(Def, |builder| builder
    .attribute("name", |m| &m.name, |m| &mut m.name)
    .attribute("val", |m| &m.value, |m| &mut m.value));

#[derive(Debug, Default, Clone, PartialEq)]
struct Capsule {
    p1: Option<String>,
    r: Option<String>,
}

impl_xml_model!(Capsule, |builder| builder
    .attribute("p1", |m| &m.p1, |m| &mut m.p1)
    .attribute("r", |m| &m.r, |m| &mut m.r));

#[derive(Debug, Default, Clone, PartialEq)]
struct Entry {
    id: Option<String>,
    note: Option<String>,
    capsule: Presence<Capsule>,
    documentation: Option<String>,
}

impl_xml_model!(Entry, |builder| builder
    .attribute("id", |m| &m.id, |m| &mut m.id)
    .attribute("note", |m| &m.note, |m| &mut m.note)
    .emit(Emit::Present)
    .element("capsule", |m| &m.capsule, |m| &mut m.capsule)
    .text_element("Documentation", |m| &m.documentation, |m| &mut m.documentation));

#[derive(Debug, Default, Clone, PartialEq)]
struct Root {
    kind: Option<String>,
    definitions: Presence<Vec<Def>>,
    entries: Vec<Entry>,
}

impl_xml_model!(Root, |builder| builder
    .attribute("type", |m| &m.kind, |m| &mut m.kind)
    .wrapped("definitions", "def", |m| &m.definitions, |m| &mut m.definitions)
    .collection("entry", |m| &m.entries, |m| &mut m.entries));

impl XmlRoot for Root {
    const ROOT: &'static str = "base";
}

#[derive(Debug, Default, Clone, PartialEq)]
struct Shape {
    capsule: Presence<Capsule>,
}

impl_xml_model!(Shape, |builder| builder
    .element("capsule", |m| &m.capsule, |m| &mut m.capsule)
    .emit(Emit::NonEmpty));

#[derive(Debug, Default)]
struct Broken {
    a: Option<String>,
    b: Option<String>,
}

impl_xml_model!(Broken, |builder| builder
    .attribute("x", |m| &m.a, |m| &mut m.a)
    .attribute("x", |m| &m.b, |m| &mut m.b));

fn sample() -> XmlElement {
    XmlElement::new("base")
        .with_attribute("xmlns:xsi", "http://www.w3.org/2001/XMLSchema-instance")
        .with_attribute("type", "combat_parameters")
        .with_child(
            XmlElement::new("definitions")
                .with_child(XmlElement::new("def").with_attribute("name", "a").with_attribute("val", "1"))
                .with_child(XmlElement::new("def").with_attribute("name", "b").with_attribute("val", "2")),
        )
        .with_child(
            XmlElement::new("entry")
                .with_attribute("id", "first")
                .with_attribute("unknown", "ignored")
                .with_child(XmlElement::new("capsule").with_attribute("p1", "0,0,1"))
                .with_child(XmlElement::new("Documentation").with_text("hello")),
        )
        .with_child(XmlElement::new("mystery"))
        .with_child(XmlElement::new("entry").with_attribute("id", "second").with_attribute("note", ""))
}

#[test]
fn test_read_model_maps_fields() {
    let root: Root = read_model(&sample()).unwrap();

    assert_eq!(root.kind.as_deref(), Some("combat_parameters"));
    assert_eq!(root.definitions.len(), 2);
    assert_eq!(root.definitions.items()[1].value.as_deref(), Some("2"));
    assert_eq!(root.entries.len(), 2);

    let first = &root.entries[0];
    assert_eq!(first.id.as_deref(), Some("first"));
    assert_eq!(first.note, None);
    assert_eq!(
        first.capsule.value().and_then(|c| c.p1.as_deref()),
        Some("0,0,1")
    );
    assert_eq!(first.documentation.as_deref(), Some("hello"));

    let second = &root.entries[1];
    assert_eq!(second.note.as_deref(), Some(""));
    assert!(second.capsule.is_absent());
}

#[test]
fn test_round_trip_preserves_order_and_presence() {
    let root: Root = read_model(&sample()).unwrap();
    let written = write_root(&root).unwrap();

    let tags: Vec<_> = written.elements().map(|e| e.name.as_str()).collect();
    assert_eq!(tags, vec!["definitions", "entry", "entry"]);

    let second = written.elements_named("entry").nth(1).unwrap();
    assert_eq!(second.attribute("note"), Some(""));
    assert!(second.children.is_empty());

    let reread: Root = read_model(&written).unwrap();
    assert_eq!(reread, root);
}

#[test]
fn test_empty_wrapper_is_kept() {
    let source = XmlElement::new("base").with_child(XmlElement::new("definitions"));
    let root: Root = read_model(&source).unwrap();
    assert!(root.definitions.is_empty());

    let written = write_root(&root).unwrap();
    let definitions = written.first_element("definitions").unwrap();
    assert!(definitions.children.is_empty());

    let absent: Root = read_model(&XmlElement::new("base")).unwrap();
    assert!(absent.definitions.is_absent());
    assert!(write_root(&absent).unwrap().children.is_empty());
}

#[test]
fn test_empty_element_is_present_but_empty() {
    let source = XmlElement::new("entry").with_child(XmlElement::new("capsule"));
    let entry: Entry = read_model(&source).unwrap();
    assert!(entry.capsule.is_empty());

    let written = write_model(&entry, "entry").unwrap();
    assert_eq!(written.first_element("capsule"), Some(&XmlElement::new("capsule")));
}

#[test]
fn test_empty_text_element_is_kept() {
    let source = XmlElement::new("entry")
        .with_attribute("id", "a")
        .with_child(XmlElement::new("Documentation"));
    let entry: Entry = read_model(&source).unwrap();
    assert_eq!(entry.documentation.as_deref(), Some(""));

    let written = write_model(&entry, "entry").unwrap();
    assert_eq!(written, source);

    let without: Entry = read_model(&XmlElement::new("entry").with_attribute("id", "a")).unwrap();
    let written = write_model(&without, "entry").unwrap();
    assert!(written.first_element("Documentation").is_none());
}

#[test]
fn test_element_written_only_when_populated() {
    let empty = Shape {
        capsule: Presence::Empty,
    };
    let written = write_model(&empty, "shape").unwrap();
    assert!(written.children.is_empty());

    let blank = Shape {
        capsule: Presence::Value(Capsule::default()),
    };
    assert!(write_model(&blank, "shape").unwrap().children.is_empty());

    let populated = Shape {
        capsule: Presence::Value(Capsule {
            r: Some("0.4".to_string()),
            ..Default::default()
        }),
    };
    let written = write_model(&populated, "shape").unwrap();
    assert_eq!(
        written.first_element("capsule").and_then(|c| c.attribute("r")),
        Some("0.4")
    );
}

#[test]
fn test_empty_attribute_dropped_by_default_policy() {
    let entry = Entry {
        id: Some(String::new()),
        ..Default::default()
    };
    let written = write_model(&entry, "entry").unwrap();
    assert!(written.attributes.is_empty());
}

#[test]
fn test_first_single_element_wins() {
    let source = XmlElement::new("entry")
        .with_child(XmlElement::new("Documentation").with_text("one"))
        .with_child(XmlElement::new("Documentation").with_text("two"));
    let entry: Entry = read_model(&source).unwrap();
    assert_eq!(entry.documentation.as_deref(), Some("one"));
}

#[test]
fn test_text_element_written_inline() {
    let entry = Entry {
        documentation: Some("body".to_string()),
        ..Default::default()
    };
    let written = write_model(&entry, "entry").unwrap();
    let documentation = written.first_element("Documentation").unwrap();
    assert_eq!(documentation.children, vec![XmlNode::Text("body".to_string())]);
}

#[test]
fn test_is_populated() {
    assert!(!is_populated(&Entry::default()));
    assert!(!is_populated(&Entry {
        id: Some(String::new()),
        capsule: Presence::Empty,
        ..Default::default()
    }));
    assert!(is_populated(&Entry {
        capsule: Presence::Value(Capsule {
            r: Some("0.5".to_string()),
            ..Default::default()
        }),
        ..Default::default()
    }));
}

#[test]
fn test_inconsistent_descriptor_fails_on_use() {
    let err = read_model::<Broken>(&XmlElement::new("broken")).unwrap_err();
    assert!(matches!(err, MappingError::Inconsistent { .. }));

    let err = write_model(&Broken::default(), "broken").unwrap_err();
    assert!(err.to_string().contains("mapped twice"));
}
