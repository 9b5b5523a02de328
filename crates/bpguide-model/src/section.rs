//! Section identifiers and the section table.

use std::borrow::{Borrow, Cow};
use std::fmt;

use serde::Serialize;

use crate::category::CategoryKey;
use crate::icon::Icon;

/// Identifier of a navigable section.
///
/// Any string is a valid identifier. Ids that match nothing in the registry
/// resolve to a placeholder view instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SectionId(Cow<'static, str>);

impl SectionId {
    /// Wrap a static id without allocating.
    pub const fn from_static(id: &'static str) -> Self {
        Self(Cow::Borrowed(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SectionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for SectionId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for SectionId {
    fn from(id: &'static str) -> Self {
        Self::from_static(id)
    }
}

impl From<String> for SectionId {
    fn from(id: String) -> Self {
        Self(Cow::Owned(id))
    }
}

impl From<&SectionId> for SectionId {
    fn from(id: &SectionId) -> Self {
        id.clone()
    }
}

impl PartialEq<str> for SectionId {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for SectionId {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

/// Section the guide opens on.
pub const DEFAULT_SECTION: SectionId = SectionId::from_static("introduction");

/// Display metadata for one navigable section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub id: SectionId,
    pub title: &'static str,
    pub icon: Icon,
    pub category: CategoryKey,
}

impl Section {
    pub const fn new(
        id: &'static str,
        title: &'static str,
        icon: Icon,
        category: CategoryKey,
    ) -> Self {
        Self {
            id: SectionId::from_static(id),
            title,
            icon,
            category,
        }
    }
}

/// Every section, in sidebar order.
pub static SECTIONS: [Section; 14] = [
    Section::new(
        "introduction",
        "Welcome to the Guide",
        Icon::BookOpen,
        CategoryKey::Introduction,
    ),
    Section::new(
        "glossary",
        "Glossary",
        Icon::FileText,
        CategoryKey::Introduction,
    ),
    Section::new(
        "setup",
        "Initial Setup",
        Icon::Settings,
        CategoryKey::GettingStarted,
    ),
    Section::new(
        "navigation",
        "Navigating Unifier",
        Icon::MapPin,
        CategoryKey::GettingStarted,
    ),
    Section::new(
        "costManagement",
        "Cost Management",
        Icon::DollarSign,
        CategoryKey::CoreFeatures,
    ),
    Section::new(
        "documentControl",
        "Document Control",
        Icon::FileText,
        CategoryKey::CoreFeatures,
    ),
    Section::new(
        "collaboration",
        "Team Collaboration",
        Icon::Users,
        CategoryKey::CoreFeatures,
    ),
    Section::new(
        "customReports",
        "Custom Reports",
        Icon::BarChart,
        CategoryKey::Reporting,
    ),
    Section::new(
        "dashboards",
        "Dashboards",
        Icon::Sparkles,
        CategoryKey::Reporting,
    ),
    Section::new(
        "restApi",
        "REST API",
        Icon::Zap,
        CategoryKey::Integrations,
    ),
    Section::new(
        "dataConnectors",
        "Data Connectors",
        Icon::Building,
        CategoryKey::Integrations,
    ),
    Section::new(
        "contact",
        "Contact & Contribute",
        Icon::Send,
        CategoryKey::Community,
    ),
    Section::new(
        "support",
        "Getting Support",
        Icon::HelpCircle,
        CategoryKey::Community,
    ),
    Section::new(
        "forum",
        "Community Forum",
        Icon::MessageSquare,
        CategoryKey::Community,
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_and_owned_ids_compare_equal() {
        let owned = SectionId::from("glossary".to_string());
        assert_eq!(owned, SectionId::from_static("glossary"));
        assert_eq!(owned, "glossary");
    }

    #[test]
    fn borrowed_runtime_ids_convert_without_static_lifetime() {
        fn select(id: &str) -> SectionId {
            SectionId::from(id.to_owned())
        }
        let from_borrowed = select(&String::from("support"));
        assert_eq!(SectionId::from(&from_borrowed), from_borrowed);
        assert_eq!(from_borrowed, "support");
    }

    #[test]
    fn section_ids_serialize_as_plain_strings() {
        let json = serde_json::to_string(&SECTIONS[0]).expect("serialize section");
        assert!(json.contains(r#""id":"introduction""#));
        assert!(json.contains(r#""category":"introduction""#));
        assert!(json.contains(r#""icon":"book-open""#));
    }
}
