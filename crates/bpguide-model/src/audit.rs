//! Consistency checks over the guide's tables.

use std::collections::HashSet;

use serde::Serialize;

use crate::content::Block;
use crate::registry::Guide;
use crate::section::DEFAULT_SECTION;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Note,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Note => "note",
        }
    }
}

/// One problem found in the tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub severity: Severity,
    /// Stable rule code, e.g. `BP002`.
    pub code: &'static str,
    /// The id or entry the finding is about.
    pub subject: String,
    pub message: String,
}

/// Every finding for one set of tables.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AuditReport {
    pub findings: Vec<Finding>,
}

impl AuditReport {
    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    pub fn by_code<'a>(&'a self, code: &'a str) -> impl Iterator<Item = &'a Finding> + 'a {
        self.findings.iter().filter(move |f| f.code == code)
    }

    fn count(&self, severity: Severity) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == severity)
            .count()
    }

    fn push(
        &mut self,
        severity: Severity,
        code: &'static str,
        subject: impl Into<String>,
        message: String,
    ) {
        self.findings.push(Finding {
            severity,
            code,
            subject: subject.into(),
            message,
        });
    }
}

/// Lint `guide`.
///
/// | Code  | Severity | Rule |
/// |-------|----------|------|
/// | BP001 | error    | section ids are unique |
/// | BP002 | warning  | every content body is reachable from a section |
/// | BP003 | note     | section has no body and shows the placeholder |
/// | BP004 | note     | category has no sections |
/// | BP005 | error    | cards do not nest |
/// | BP006 | error    | FAQ entries have a question and an answer |
/// | BP007 | error    | testimonials have a name and a quote |
/// | BP008 | error    | the start section exists |
/// | BP009 | error    | content ids are unique |
pub fn audit(guide: &Guide<'_>) -> AuditReport {
    let mut report = AuditReport::default();

    let mut seen = HashSet::new();
    for section in guide.sections {
        if !seen.insert(section.id.as_str()) {
            report.push(
                Severity::Error,
                "BP001",
                section.id.as_str(),
                format!("section id '{}' is declared more than once", section.id),
            );
        }
    }

    let mut seen = HashSet::new();
    for id in guide.content_ids() {
        if !seen.insert(id) {
            report.push(
                Severity::Error,
                "BP009",
                id,
                format!("content id '{id}' is declared more than once; only the first is shown"),
            );
        }
    }

    for id in guide.orphan_content_ids() {
        report.push(
            Severity::Warning,
            "BP002",
            id,
            format!("content '{id}' is not referenced by any section and cannot be reached from the sidebar"),
        );
    }

    for section in guide.sections_without_content() {
        report.push(
            Severity::Note,
            "BP003",
            section.id.as_str(),
            format!("'{}' has no content yet and shows the placeholder", section.title),
        );
    }

    for group in guide.navigation_groups() {
        if group.is_empty() {
            report.push(
                Severity::Note,
                "BP004",
                group.category.key.key(),
                format!("category '{}' has no sections", group.category.title),
            );
        }
    }

    for entry in guide.content {
        let nested = entry.body.blocks.iter().any(|block| match block {
            Block::Card { blocks, .. } => blocks.iter().any(Block::is_card),
            _ => false,
        });
        if nested {
            report.push(
                Severity::Error,
                "BP005",
                entry.id,
                format!("content '{}' nests a card inside a card", entry.id),
            );
        }
    }

    for (index, faq) in guide.faqs.iter().enumerate() {
        if faq.question.trim().is_empty() || faq.answer.trim().is_empty() {
            report.push(
                Severity::Error,
                "BP006",
                format!("faq[{index}]"),
                "FAQ entry needs both a question and an answer".to_string(),
            );
        }
    }

    for (index, testimonial) in guide.testimonials.iter().enumerate() {
        if testimonial.name.trim().is_empty() || testimonial.quote.trim().is_empty() {
            report.push(
                Severity::Error,
                "BP007",
                format!("testimonial[{index}]"),
                "testimonial needs both a name and a quote".to_string(),
            );
        }
    }

    if guide.section(DEFAULT_SECTION.as_str()).is_none() {
        report.push(
            Severity::Error,
            "BP008",
            DEFAULT_SECTION.as_str(),
            format!("start section '{DEFAULT_SECTION}' is not in the section table"),
        );
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::CategoryKey;
    use crate::community::Faq;
    use crate::icon::Icon;
    use crate::section::Section;

    #[test]
    fn shipped_tables_have_only_orphan_warnings() {
        let report = audit(&Guide::builtin());
        assert!(!report.has_errors(), "{:?}", report.findings);
        assert_eq!(report.warning_count(), 4);
        assert_eq!(report.by_code("BP004").count(), 1);
    }

    #[test]
    fn duplicate_and_missing_entries_are_errors() {
        static SECTIONS_WITH_DUPLICATE: [Section; 2] = [
            Section::new("glossary", "Glossary", Icon::FileText, CategoryKey::Introduction),
            Section::new("glossary", "Glossary", Icon::FileText, CategoryKey::Introduction),
        ];
        static BLANK_FAQ: [Faq; 1] = [Faq {
            question: "Why?",
            answer: " ",
        }];
        let guide = Guide {
            sections: &SECTIONS_WITH_DUPLICATE,
            faqs: &BLANK_FAQ,
            ..Guide::builtin()
        };
        let report = audit(&guide);
        let codes: Vec<_> = report
            .findings
            .iter()
            .filter(|f| f.severity == Severity::Error)
            .map(|f| f.code)
            .collect();
        assert_eq!(codes, ["BP001", "BP006", "BP008"]);
    }
}
