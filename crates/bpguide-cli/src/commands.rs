//! Subcommand implementations.

use std::collections::HashSet;
use std::path::PathBuf;

use anyhow::{Context, Result};
use bpguide_model::{AuditReport, Guide, Severity, audit};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};
use serde::Serialize;
use tracing::{error, info, info_span, warn};

use crate::cli::{RenderArgs, SectionsArgs};
use crate::render::write_documents;

// =============================================================================
// RENDER
// =============================================================================

pub fn run_render(args: &RenderArgs) -> Result<Vec<PathBuf>> {
    let guide = Guide::builtin();
    let ids = render_ids(&guide, args);
    let span = info_span!("render", out_dir = %args.out_dir.display(), documents = ids.len() + 1);
    let _guard = span.enter();

    let written = write_documents(&guide, &args.out_dir, &ids)
        .with_context(|| format!("render documents into {}", args.out_dir.display()))?;
    info!(count = written.len(), "render complete");
    Ok(written)
}

/// Section ids to render, in sidebar order unless given explicitly.
///
/// Explicit ids are deduplicated and keep their first position.
pub fn render_ids(guide: &Guide<'_>, args: &RenderArgs) -> Vec<String> {
    let mut ids: Vec<String> = if args.sections.is_empty() {
        guide
            .sections
            .iter()
            .map(|section| section.id.to_string())
            .collect()
    } else {
        args.sections.clone()
    };
    if args.all {
        ids.extend(guide.orphan_content_ids().into_iter().map(str::to_string));
    }

    let mut seen = HashSet::new();
    ids.retain(|id| seen.insert(id.clone()));
    ids
}

// =============================================================================
// SECTIONS
// =============================================================================

/// One line of the sections listing. Empty categories get a row with no
/// section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionRow<'a> {
    pub category: &'a str,
    pub id: Option<&'a str>,
    pub title: Option<&'a str>,
    pub has_content: bool,
}

pub fn section_rows<'a>(guide: &Guide<'a>) -> Vec<SectionRow<'a>> {
    let mut rows = Vec::new();
    for group in guide.navigation_groups() {
        if group.is_empty() {
            rows.push(SectionRow {
                category: group.category.title,
                id: None,
                title: None,
                has_content: false,
            });
        }
        for section in group.sections {
            rows.push(SectionRow {
                category: group.category.title,
                id: Some(section.id.as_str()),
                title: Some(section.title),
                has_content: guide.content(section.id.as_str()).is_some(),
            });
        }
    }
    rows
}

pub fn sections_table(guide: &Guide<'_>) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Category", "Section", "Id", "Content"]);
    apply_table_style(&mut table);
    for row in section_rows(guide) {
        table.add_row(vec![
            row.category,
            row.title.unwrap_or("-"),
            row.id.unwrap_or("-"),
            if row.id.is_none() {
                "-"
            } else if row.has_content {
                "yes"
            } else {
                "placeholder"
            },
        ]);
    }
    table
}

pub fn run_sections(args: &SectionsArgs) -> Result<()> {
    let guide = Guide::builtin();
    if args.json {
        let json = serde_json::to_string_pretty(&guide.navigation_groups())
            .context("serialize navigation groups")?;
        println!("{json}");
    } else {
        println!("{}", sections_table(&guide));
    }
    Ok(())
}

// =============================================================================
// CHECK
// =============================================================================

pub fn findings_table(report: &AuditReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Severity", "Code", "Subject", "Message"]);
    apply_table_style(&mut table);
    for finding in &report.findings {
        table.add_row(vec![
            finding.severity.as_str(),
            finding.code,
            finding.subject.as_str(),
            finding.message.as_str(),
        ]);
    }
    table
}

/// Lint the shipped tables. Returns whether any error was found.
pub fn run_check() -> Result<bool> {
    let report = audit(&Guide::builtin());
    for finding in &report.findings {
        match finding.severity {
            Severity::Error => {
                error!(code = finding.code, subject = %finding.subject, "{}", finding.message);
            }
            Severity::Warning => {
                warn!(code = finding.code, subject = %finding.subject, "{}", finding.message);
            }
            Severity::Note => {
                info!(code = finding.code, subject = %finding.subject, "{}", finding.message);
            }
        }
    }

    if !report.findings.is_empty() {
        println!("{}", findings_table(&report));
    }
    println!(
        "{} error(s), {} warning(s)",
        report.error_count(),
        report.warning_count()
    );
    Ok(report.has_errors())
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn args(sections: &[&str], all: bool) -> RenderArgs {
        RenderArgs {
            out_dir: PathBuf::from("site"),
            sections: sections.iter().map(|s| (*s).to_string()).collect(),
            all,
        }
    }

    #[test]
    fn default_render_covers_every_sidebar_section() {
        let guide = Guide::builtin();
        let ids = render_ids(&guide, &args(&[], false));
        assert_eq!(ids.len(), guide.sections.len());
        assert_eq!(ids[0], "introduction");
    }

    #[test]
    fn all_adds_orphan_bodies() {
        let guide = Guide::builtin();
        let ids = render_ids(&guide, &args(&[], true));
        assert_eq!(ids.len(), guide.sections.len() + 4);
        assert!(ids.iter().any(|id| id == "line-item-bp"));
    }

    #[test]
    fn explicit_ids_are_deduplicated_in_order() {
        let guide = Guide::builtin();
        let ids = render_ids(&guide, &args(&["contact", "nope", "contact"], false));
        assert_eq!(ids, ["contact", "nope"]);
    }

    #[test]
    fn empty_category_still_listed() {
        let rows = section_rows(&Guide::builtin());
        assert!(
            rows.iter()
                .any(|row| row.category == "Advanced Topics" && row.id.is_none())
        );
        assert_eq!(rows.len(), 15);
    }
}
