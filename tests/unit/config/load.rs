use std::path::PathBuf;

use super::*;

const SAMPLE: &str = "\
[text]
字体 = simkai.ttf
字体大小 = 24
words = name，school,name

[text.name]
name = 张三
位置 = 120,200

[text.school]
school = 第一中学
位置 = 300,400
字体 = C:\\Windows\\Fonts\\simhei.ttf
";

#[test]
fn parses_sections_and_keys() {
    let tree = parse_config(SAMPLE).unwrap();
    let names = tree.section_names().collect::<Vec<_>>();
    assert_eq!(names, vec!["text", "text.name", "text.school"]);

    let text = tree.section("text").unwrap();
    assert_eq!(text.key("字体"), Some("simkai.ttf"));
    assert_eq!(text.key("字体大小"), Some("24"));
    assert_eq!(text.key("words"), Some("name，school,name"));

    let name = tree.section("text.name").unwrap();
    assert_eq!(name.key("name"), Some("张三"));
    assert_eq!(name.keys().collect::<Vec<_>>(), vec!["name", "位置"]);
}

#[test]
fn backslashes_are_kept_verbatim() {
    let tree = parse_config(SAMPLE).unwrap();
    assert_eq!(
        tree.section("text.school").unwrap().key("字体"),
        Some("C:\\Windows\\Fonts\\simhei.ttf")
    );
}

#[test]
fn byte_order_mark_is_ignored() {
    let tree = parse_config("\u{feff}[text]\nwords = a\n").unwrap();
    assert_eq!(tree.section("text").unwrap().key("words"), Some("a"));
}

#[test]
fn missing_file_is_config_missing() {
    let path = PathBuf::from("target/unit_config_load/definitely-missing.ini");
    let err = load_config(&path).unwrap_err();
    assert!(matches!(err, DiplomaError::ConfigMissing(p) if p == path));
}

#[test]
fn malformed_file_is_config_read() {
    let dir = PathBuf::from("target").join("unit_config_load");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("broken.ini");
    std::fs::write(&path, "[text\nwords = a\n").unwrap();

    let err = load_config(&path).unwrap_err();
    assert!(matches!(err, DiplomaError::ConfigRead(_)), "{err}");
}
