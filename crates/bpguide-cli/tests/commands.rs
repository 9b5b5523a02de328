//! Integration tests for the `sections` and `check` commands.

use bpguide_cli::commands::{findings_table, run_check, section_rows};
use bpguide_model::{Guide, Severity, audit};

#[test]
fn shipped_tables_have_warnings_but_no_errors() {
    let report = audit(&Guide::builtin());
    assert_eq!(report.error_count(), 0);

    let mut orphans: Vec<_> = report.by_code("BP002").map(|f| f.subject.as_str()).collect();
    orphans.sort_unstable();
    assert_eq!(
        orphans,
        [
            "data-connectors",
            "document-control",
            "line-item-bp",
            "reporting-analytics"
        ]
    );
    assert!(
        report
            .by_code("BP002")
            .all(|f| f.severity == Severity::Warning)
    );
}

#[test]
fn findings_table_lists_every_finding() {
    let report = audit(&Guide::builtin());
    let rendered = findings_table(&report).to_string();
    for finding in &report.findings {
        assert!(rendered.contains(finding.code));
    }
}

#[test]
fn section_listing_snapshot() {
    insta::assert_json_snapshot!(section_rows(&Guide::builtin()));
}

#[test]
fn check_command_passes_on_shipped_content() {
    let has_errors = run_check().expect("check runs");
    assert!(!has_errors);
}
