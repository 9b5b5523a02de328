//! Category registry.
//!
//! Categories group sections in the sidebar. Their order is the declaration
//! order of [`CATEGORIES`], never alphabetical.

use serde::Serialize;

use crate::icon::Tone;

/// Fixed set of navigation groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CategoryKey {
    Introduction,
    GettingStarted,
    CoreFeatures,
    AdvancedTopics,
    Reporting,
    Integrations,
    Community,
}

impl CategoryKey {
    /// Stable camelCase key.
    pub fn key(self) -> &'static str {
        match self {
            Self::Introduction => "introduction",
            Self::GettingStarted => "gettingStarted",
            Self::CoreFeatures => "coreFeatures",
            Self::AdvancedTopics => "advancedTopics",
            Self::Reporting => "reporting",
            Self::Integrations => "integrations",
            Self::Community => "community",
        }
    }
}

/// Display metadata for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    pub key: CategoryKey,
    pub title: &'static str,
    pub tone: Tone,
}

/// Every category, in sidebar order.
pub static CATEGORIES: [Category; 7] = [
    Category {
        key: CategoryKey::Introduction,
        title: "Introduction",
        tone: Tone::Purple,
    },
    Category {
        key: CategoryKey::GettingStarted,
        title: "Getting Started",
        tone: Tone::Green,
    },
    Category {
        key: CategoryKey::CoreFeatures,
        title: "Core Features",
        tone: Tone::Blue,
    },
    Category {
        key: CategoryKey::AdvancedTopics,
        title: "Advanced Topics",
        tone: Tone::Red,
    },
    Category {
        key: CategoryKey::Reporting,
        title: "Reporting & Analytics",
        tone: Tone::Yellow,
    },
    Category {
        key: CategoryKey::Integrations,
        title: "Integrations",
        tone: Tone::Indigo,
    },
    Category {
        key: CategoryKey::Community,
        title: "Community & Support",
        tone: Tone::Pink,
    },
];

/// Look up a category's display metadata.
pub fn category(key: CategoryKey) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_key_has_a_category() {
        for category in &CATEGORIES {
            assert_eq!(super::category(category.key), Some(category));
        }
    }

    #[test]
    fn categories_keep_declaration_order() {
        let keys: Vec<_> = CATEGORIES.iter().map(|c| c.key.key()).collect();
        assert_eq!(
            keys,
            [
                "introduction",
                "gettingStarted",
                "coreFeatures",
                "advancedTopics",
                "reporting",
                "integrations",
                "community"
            ]
        );
    }
}
