//! Hover, completion and quick-fix tests.

use ecschema::base::SourcePos;
use ecschema::grammar::ecschema_3_2;
use ecschema::ide::{
    CompletionKind, child_element_completions, goto_definition, hover,
    remove_duplicate_attribute_fixes, root_attribute_completions, root_attribute_diagnostics,
};
use ecschema::syntax::parse;
use rstest::rstest;

use crate::helpers::source_fixtures::*;

// =============================================================================
// HOVER
// =============================================================================

#[rstest]
#[case::root(1, 4, "**ECSchema**")]
#[case::class(3, 6, "**ECEntityClass**")]
#[case::enumerator(11, 9, "**ECEnumerator**")]
#[case::attribute_name(3, 20, "`typeName` (string, required)")]
#[case::attribute_value(5, 32, "`propertyName` (string, required)")]
fn test_hover_shows_grammar_description(
    #[case] line: u32,
    #[case] column: u32,
    #[case] expected: &str,
) {
    let document = parse(PLANT_SCHEMA).unwrap();
    let result = hover(&document, SourcePos::new(line, column), ecschema_3_2()).unwrap();
    assert!(
        result.contents.starts_with(expected),
        "Hover should start with {expected}. Got: {}",
        result.contents
    );
}

#[test]
fn test_hover_on_opaque_custom_attribute_is_empty() {
    let document = parse(PLANT_SCHEMA).unwrap();
    assert!(hover(&document, SourcePos::new(7, 10), ecschema_3_2()).is_none());
}

// =============================================================================
// GOTO DEFINITION
// =============================================================================

#[rstest]
#[case::root_name(1, 5, true)]
#[case::root_attribute(1, 31, true)]
#[case::class_name(3, 6, false)]
#[case::class_attribute(3, 20, false)]
fn test_goto_resolves_root_tag_only(
    #[case] line: u32,
    #[case] column: u32,
    #[case] found: bool,
) {
    let document = parse(PLANT_SCHEMA).unwrap();
    let result = goto_definition(&document, SourcePos::new(line, column), ecschema_3_2());
    assert_eq!(!result.is_empty(), found);
    if found {
        let target = &result.targets[0];
        assert_eq!((target.start_line, target.start_col, target.end_col), (0, 1, 9));
    }
}

// =============================================================================
// COMPLETION
// =============================================================================

#[test]
fn test_missing_alias_is_offered() {
    let document = parse(SCHEMA_MISSING_ALIAS).unwrap();
    let items = root_attribute_completions(&document, ecschema_3_2());

    assert_eq!(items.len(), 1);
    assert_eq!(&*items[0].label, "alias");
    assert_eq!(items[0].kind, CompletionKind::Attribute);
    assert_eq!(
        items[0].documentation.as_deref(),
        Some("The alias of the schema.")
    );
}

#[test]
fn test_complete_root_offers_nothing() {
    let document = parse(MINIMAL_SCHEMA).unwrap();
    assert!(root_attribute_completions(&document, ecschema_3_2()).is_empty());
}

#[test]
fn test_entity_class_children() {
    let labels: Vec<_> = child_element_completions("ECEntityClass", ecschema_3_2())
        .into_iter()
        .map(|item| item.label)
        .collect();
    assert!(labels.iter().any(|l| &**l == "ECProperty"));
    assert!(labels.iter().any(|l| &**l == "BaseClass"));
    assert!(!labels.iter().any(|l| &**l == "ECEnumerator"));
}

// =============================================================================
// CODE ACTIONS
// =============================================================================

#[test]
fn test_duplicate_version_fix_deletes_second_occurrence() {
    let document = parse(SCHEMA_DUPLICATE_VERSION).unwrap();
    let diagnostics = root_attribute_diagnostics(&document, ecschema_3_2());
    let actions = remove_duplicate_attribute_fixes(&document, &diagnostics);

    assert_eq!(actions.len(), 1);
    let edit = &actions[0].edits[0];
    assert_eq!((edit.start_line, edit.start_col), (0, 50));
    assert_eq!((edit.end_line, edit.end_col), (0, 62));

    let line = SCHEMA_DUPLICATE_VERSION;
    let fixed = format!(
        "{}{}",
        &line[..edit.start_col as usize],
        &line[edit.end_col as usize..]
    );
    let reparsed = parse(&fixed).unwrap();
    assert!(root_attribute_diagnostics(&reparsed, ecschema_3_2()).is_empty());
}
