//! Parser tests over real ECSchema documents.

use ecschema::base::SourcePos;
use ecschema::syntax::{NodeKind, ParsedNode, parse};
use rstest::rstest;

use crate::helpers::source_fixtures::*;

fn find_element<'a>(node: &'a ParsedNode, name: &str) -> Option<&'a ParsedNode> {
    if node.is_element() && node.name() == Some(name) {
        return Some(node);
    }
    node.children.iter().find_map(|child| find_element(child, name))
}

#[rstest]
#[case("ECSchema", 1, 2)]
#[case("ECSchemaReference", 2, 4)]
#[case("ECEntityClass", 3, 4)]
#[case("BaseClass", 4, 6)]
#[case("ECProperty", 5, 6)]
#[case("HiddenClass", 7, 8)]
#[case("ECEnumeration", 10, 4)]
#[case("ECEnumerator", 11, 6)]
fn test_element_names_start_after_angle_bracket(
    #[case] name: &str,
    #[case] line: u32,
    #[case] column: u32,
) {
    let document = parse(PLANT_SCHEMA).unwrap();
    let element = find_element(&document, name).unwrap();
    assert_eq!(element.start, SourcePos::new(line, column), "position of {name}");
}

#[test]
fn test_attribute_name_and_value_positions() {
    let document = parse(PLANT_SCHEMA).unwrap();
    let class = find_element(&document, "ECEntityClass").unwrap();

    let names: Vec<_> = class.attributes.iter().map(|a| a.name()).collect();
    assert_eq!(names, vec![Some("typeName"), Some("modifier")]);

    let type_name = &class.attributes[0];
    assert_eq!(type_name.kind, NodeKind::Attribute);
    assert_eq!(type_name.start, SourcePos::new(3, 18));
    assert_eq!(type_name.value.as_deref(), Some("Pipe"));
    assert_eq!(type_name.value_start, Some(SourcePos::new(3, 28)));
}

#[test]
fn test_text_content_is_kept() {
    let document = parse(PLANT_SCHEMA).unwrap();
    let base = find_element(&document, "BaseClass").unwrap();
    assert_eq!(base.children.len(), 1);
    assert_eq!(base.children[0].kind, NodeKind::Text);
    assert_eq!(base.children[0].value.as_deref(), Some("Equipment"));
}

#[test]
fn test_duplicate_attributes_are_not_a_parse_error() {
    let document = parse(SCHEMA_DUPLICATE_VERSION).unwrap();
    let root = document.root_element().unwrap();
    let versions = root
        .attributes
        .iter()
        .filter(|a| a.name() == Some("version"))
        .count();
    assert_eq!(versions, 2);
}

#[rstest]
#[case::unclosed(MALFORMED_SCHEMA)]
#[case::mismatched("<ECSchema></ECEntityClass>")]
#[case::two_roots("<ECSchema/><ECSchema/>")]
#[case::empty("")]
#[case::bad_attribute("<ECSchema alias=dm/>")]
fn test_malformed_documents_fail(#[case] source: &str) {
    let err = parse(source).unwrap_err();
    assert!(!err.message.is_empty());
    assert!(err.line >= 1);
}
