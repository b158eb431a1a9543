//! Integration tests for the extract-then-reconcile pipeline.
//!
//! Drives the library end to end on a realistic rules page fixture: parse
//! the markup, extract the catalog, reconcile against a config, and render
//! the report.

use std::path::Path;

use eslint_audit::catalog::{extract_catalog, DEPRECATED_SECTION, ES6_SECTION, REMOVED_SECTION};
use eslint_audit::config::{parse_config, EslintConfig};
use eslint_audit::markup::Document;
use eslint_audit::reconcile::{reconcile, write_report, FindingKind};

/// A trimmed-down rules index page with every shape the extractor handles:
/// 4-column category tables with markers, an environment-gated section, a
/// nested table, 2-column deprecated/removed tables, and a malformed row.
const RULES_PAGE: &str = r#"
<html><body>
<h1>Rules</h1>
<h2>Possible Errors</h2>
<p>These rules relate to possible syntax or logic errors.</p>
<table>
  <tr><th></th><th></th><th>Rule</th><th>Description</th></tr>
  <tr>
    <td><span title="recommended">recommended</span></td>
    <td></td>
    <td><a href="no-unused-vars">no-unused-vars</a></td>
    <td>disallow unused variables</td>
  </tr>
  <tr>
    <td><span title="recommended">recommended</span></td>
    <td><span title="fixable">fixable</span></td>
    <td><a href="no-extra-semi">no-extra-semi</a></td>
    <td>disallow unnecessary semicolons</td>
  </tr>
</table>
<h2>ECMAScript 6</h2>
<table>
  <tr>
    <td><span title="recommended">recommended</span></td>
    <td></td>
    <td><a href="constructor-super">constructor-super</a></td>
    <td>require super() calls in constructors</td>
  </tr>
</table>
<h2>Deprecated</h2>
<table>
  <tr><td>no-new-object</td><td>(no replacement)</td></tr>
  <tr><td>three</td><td>cell</td><td>row</td></tr>
  <tr><td>lines-around-directive</td><td>padding-line-between-statements</td></tr>
</table>
<h2>Removed</h2>
<div>
  <table>
    <tr><td>no-catch-shadow</td><td>no-shadow</td></tr>
    <tr><td>lines-around-directive</td><td>padding-line-between-statements</td></tr>
  </table>
</div>
</body></html>
"#;

fn config(json: &str) -> EslintConfig {
    parse_config(json, Path::new("/test/.eslintrc.json")).unwrap()
}

fn audit(page: &str, config_json: &str) -> Vec<eslint_audit::reconcile::Finding> {
    let cfg = config(config_json);
    let doc = Document::parse(page);
    let catalog = extract_catalog(&doc, &cfg);
    reconcile(&catalog, &cfg)
}

#[test]
fn deprecated_rule_without_replacement_is_flagged() {
    let findings = audit(
        RULES_PAGE,
        r#"{
            "parserOptions": {},
            "env": {},
            "extends": [],
            "plugins": [],
            "rules": {"no-new-object": "error"}
        }"#,
    );

    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].kind, FindingKind::Outdated);
    assert_eq!(findings[0].rule_id, "no-new-object");
    assert_eq!(findings[0].replacement, None);
}

#[test]
fn removed_rule_is_flagged_with_its_replacement() {
    let findings = audit(
        RULES_PAGE,
        r#"{
            "parserOptions": {},
            "env": {},
            "extends": [],
            "plugins": [],
            "rules": {"no-catch-shadow": "warn"}
        }"#,
    );

    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].replacement.as_deref(), Some("no-shadow"));
}

#[test]
fn redundant_recommended_only_with_the_preset() {
    let with_preset = audit(
        RULES_PAGE,
        r#"{
            "parserOptions": {},
            "env": {},
            "extends": ["eslint:recommended"],
            "plugins": [],
            "rules": {"no-unused-vars": "error"}
        }"#,
    );
    assert_eq!(with_preset.len(), 1);
    assert_eq!(with_preset[0].kind, FindingKind::RedundantRecommended);

    let without_preset = audit(
        RULES_PAGE,
        r#"{
            "parserOptions": {},
            "env": {},
            "extends": ["airbnb"],
            "plugins": [],
            "rules": {"no-unused-vars": "error"}
        }"#,
    );
    assert!(without_preset.is_empty());
}

#[test]
fn rule_listed_in_both_sections_is_flagged_twice() {
    let findings = audit(
        RULES_PAGE,
        r#"{
            "parserOptions": {},
            "env": {},
            "extends": [],
            "plugins": [],
            "rules": {"lines-around-directive": "error"}
        }"#,
    );

    assert_eq!(findings.len(), 2);
    assert!(findings
        .iter()
        .all(|f| f.rule_id == "lines-around-directive"));
}

#[test]
fn es6_gating_hides_the_section_entirely() {
    let gated_off = audit(
        RULES_PAGE,
        r#"{
            "parserOptions": {},
            "env": {"es6": false},
            "extends": ["eslint:recommended"],
            "plugins": [],
            "rules": {"constructor-super": "error"}
        }"#,
    );
    assert!(gated_off.is_empty());

    let gated_on = audit(
        RULES_PAGE,
        r#"{
            "parserOptions": {},
            "env": {"es6": true},
            "extends": ["eslint:recommended"],
            "plugins": [],
            "rules": {"constructor-super": "error"}
        }"#,
    );
    assert_eq!(gated_on.len(), 1);
    assert_eq!(gated_on[0].kind, FindingKind::RedundantRecommended);
}

#[test]
fn healthy_rules_produce_no_findings() {
    let findings = audit(
        RULES_PAGE,
        r#"{
            "parserOptions": {},
            "env": {"es6": true},
            "extends": ["eslint:recommended"],
            "plugins": [],
            "rules": {"eqeqeq": "error", "curly": ["error", "all"]}
        }"#,
    );
    assert!(findings.is_empty());
}

#[test]
fn malformed_row_does_not_disturb_its_table() {
    let cfg = config(
        r#"{
            "parserOptions": {},
            "env": {},
            "extends": [],
            "plugins": [],
            "rules": {}
        }"#,
    );
    let doc = Document::parse(RULES_PAGE);
    let catalog = extract_catalog(&doc, &cfg);

    let deprecated = catalog.section(DEPRECATED_SECTION).unwrap();
    assert_eq!(deprecated.len(), 2);
    assert!(deprecated.get("no-new-object").is_some());
    assert!(deprecated.get("lines-around-directive").is_some());
    assert!(deprecated.get("three").is_none());
}

#[test]
fn fixable_set_is_extracted_alongside_recommended() {
    let cfg = config(
        r#"{
            "parserOptions": {},
            "env": {},
            "extends": [],
            "plugins": [],
            "rules": {}
        }"#,
    );
    let doc = Document::parse(RULES_PAGE);
    let catalog = extract_catalog(&doc, &cfg);

    assert!(catalog.fixable.contains("no-extra-semi"));
    assert!(!catalog.fixable.contains("no-unused-vars"));
    assert!(catalog.recommended.contains("no-extra-semi"));
    assert!(catalog.recommended.contains("no-unused-vars"));
}

#[test]
fn missing_required_section_skips_that_check_only() {
    // A page with Deprecated but no Removed section.
    let page = r#"
        <h2>Possible Errors</h2>
        <table>
          <tr>
            <td><span title="recommended">recommended</span></td>
            <td></td>
            <td>no-unused-vars</td>
            <td>disallow unused variables</td>
          </tr>
        </table>
        <h2>Deprecated</h2>
        <table><tr><td>no-new-object</td><td>(no replacement)</td></tr></table>
    "#;

    let findings = audit(
        page,
        r#"{
            "parserOptions": {},
            "env": {},
            "extends": ["eslint:recommended"],
            "plugins": [],
            "rules": {"no-new-object": "error", "no-unused-vars": "error"}
        }"#,
    );

    assert_eq!(findings.len(), 2);
    assert_eq!(findings[0].kind, FindingKind::Outdated);
    assert_eq!(findings[1].kind, FindingKind::RedundantRecommended);
}

#[test]
fn findings_are_ordered_deprecated_then_removed_then_recommended() {
    let findings = audit(
        RULES_PAGE,
        r#"{
            "parserOptions": {},
            "env": {},
            "extends": ["eslint:recommended"],
            "plugins": [],
            "rules": {
                "no-new-object": "error",
                "no-catch-shadow": "error",
                "no-unused-vars": "error"
            }
        }"#,
    );

    let ids: Vec<&str> = findings.iter().map(|f| f.rule_id.as_str()).collect();
    assert_eq!(ids, vec!["no-new-object", "no-catch-shadow", "no-unused-vars"]);
}

#[test]
fn report_renders_all_findings_and_summary() {
    let findings = audit(
        RULES_PAGE,
        r#"{
            "parserOptions": {},
            "env": {},
            "extends": ["eslint:recommended"],
            "plugins": [],
            "rules": {
                "no-new-object": "error",
                "no-catch-shadow": "error",
                "no-unused-vars": "error"
            }
        }"#,
    );

    let mut out = Vec::new();
    write_report(&findings, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("Remove rule \"no-new-object\""));
    assert!(text.contains("No replacement is available"));
    assert!(text.contains("Replace it with rule \"no-shadow\""));
    assert!(text.contains("Rule \"no-unused-vars\" is already enabled"));
    assert!(text.contains("Found 3 issue(s)."));
}

#[test]
fn entire_catalog_survives_a_second_extraction() {
    let cfg = config(
        r#"{
            "parserOptions": {},
            "env": {"es6": true},
            "extends": [],
            "plugins": [],
            "rules": {}
        }"#,
    );
    let doc = Document::parse(RULES_PAGE);

    let first = extract_catalog(&doc, &cfg);
    let second = extract_catalog(&doc, &cfg);

    assert_eq!(first.recommended, second.recommended);
    assert_eq!(first.fixable, second.fixable);
    assert_eq!(
        first.sections().count(),
        second.sections().count()
    );
    assert!(first.section(ES6_SECTION).is_some());
    assert!(first.section(REMOVED_SECTION).is_some());
}
