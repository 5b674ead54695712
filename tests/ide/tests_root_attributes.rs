//! Root attribute checks on ECSchema documents.

use ecschema::grammar::ecschema_3_2;
use ecschema::ide::{Severity, check_root_attributes, codes, root_attribute_diagnostics, walk};
use ecschema::syntax::parse;
use rstest::rstest;

use crate::helpers::diagnostic_helpers::*;
use crate::helpers::source_fixtures::*;

#[test]
fn test_complete_root_has_no_findings() {
    let document = parse(MINIMAL_SCHEMA).unwrap();
    assert!(root_attribute_diagnostics(&document, ecschema_3_2()).is_empty());
}

#[test]
fn test_missing_alias_is_one_warning_and_walk_is_unaffected() {
    let document = parse(SCHEMA_MISSING_ALIAS).unwrap();
    let diagnostics = root_attribute_diagnostics(&document, ecschema_3_2());

    assert_eq!(messages(&diagnostics), vec!["missing attribute: `alias`"]);
    assert_eq!(diagnostics[0].severity, Severity::Warning);
    assert!(diagnostics[0].has_code(codes::MISSING_ATTRIBUTE));

    let result = walk(&document, ecschema_3_2());
    assert_eq!(result.tokens.len(), 2);
    assert!(result.diagnostics.is_empty());
}

#[test]
fn test_duplicate_version_points_at_second_occurrence() {
    let diagnostics = errors_from_source(SCHEMA_DUPLICATE_VERSION);

    assert_eq!(messages(&diagnostics), vec!["duplicate attribute: `version`"]);
    let diagnostic = &diagnostics[0];
    assert!(diagnostic.has_code(codes::DUPLICATE_ATTRIBUTE));
    assert_eq!(
        (diagnostic.start_line, diagnostic.start_col, diagnostic.end_col),
        (0, 51, 58)
    );
}

#[test]
fn test_bare_root_misses_every_required_attribute() {
    let document = parse("<ECSchema/>").unwrap();
    let diagnostics = root_attribute_diagnostics(&document, ecschema_3_2());
    let expected: Vec<_> = ecschema_3_2()
        .root_rule()
        .required_attributes()
        .map(|name| format!("missing attribute: `{name}`"))
        .collect();
    assert_eq!(messages(&diagnostics), expected);
}

#[rstest]
#[case(r#"<Schema a="1" a="2"/>"#, &[], 1)]
#[case(r#"<Schema a="1" a="2" b="3" b="4"/>"#, &[], 2)]
#[case(r#"<Schema a="1"/>"#, &["a", "b", "c"], 2)]
#[case(r#"<Schema a="1" a="1"/>"#, &["b"], 2)]
fn test_finding_counts(#[case] source: &str, #[case] required: &[&str], #[case] expected: usize) {
    let document = parse(source).unwrap();
    let root = document.root_element().unwrap();
    let diagnostics = check_root_attributes(root, required.iter().copied());
    assert_eq!(diagnostics.len(), expected);
}
