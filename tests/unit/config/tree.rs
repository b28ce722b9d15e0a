use super::*;

fn sample() -> ConfigTree {
    ConfigTree::new()
        .with_section(Section::new("text").with("words", "a,b"))
        .with_section(
            Section::new("text.a")
                .with("a", "Hello")
                .with("位置", "10,20"),
        )
}

#[test]
fn section_name_is_plain_concatenation() {
    assert_eq!(section_name("text", "a"), "text.a");
    assert_eq!(section_name("text", "a.b"), "text.a.b");
    assert_eq!(section_name("image", "校长"), "image.校长");
}

#[test]
fn dotted_names_are_not_traversed() {
    let tree = sample();
    assert!(tree.section("text.a").is_ok());
    // "text" exists, but "text.b" is not derived from it.
    assert!(matches!(
        tree.section("text.b"),
        Err(DiplomaError::MissingSection(name)) if name == "text.b"
    ));
}

#[test]
fn missing_section_reads_as_empty_when_lenient() {
    let tree = sample();
    let s = tree.section_or_empty("text.zzz");
    assert!(s.is_empty());
    assert_eq!(s.key("anything"), None);
}

#[test]
fn keys_preserve_declaration_order() {
    let tree = sample();
    let keys = tree.section("text.a").unwrap().keys().collect::<Vec<_>>();
    assert_eq!(keys, vec!["a", "位置"]);
}

#[test]
fn insert_replaces_value_in_place() {
    let mut s = Section::new("s").with("k1", "v1").with("k2", "v2");
    s.insert("k1", "v3");
    assert_eq!(s.key("k1"), Some("v3"));
    assert_eq!(s.keys().collect::<Vec<_>>(), vec!["k1", "k2"]);
}

#[test]
fn pushing_same_section_twice_merges_keys() {
    let mut tree = sample();
    tree.push(Section::new("text").with("字体大小", "24"));
    assert_eq!(tree.len(), 2);
    let text = tree.section("text").unwrap();
    assert_eq!(text.key("words"), Some("a,b"));
    assert_eq!(text.key("字体大小"), Some("24"));
}
