//! Static HTML export.
//!
//! A document is the guide as it looks in a given [`GuideState`]: header,
//! sidebar and the resolved main pane. Every document carries the full
//! sidebar and links its entries to sibling documents, so a directory of
//! them behaves like the live guide.

mod blocks;
mod svg;

use std::fs;
use std::path::{Path, PathBuf};

use askama::Template;
use bpguide_model::{GUIDE_TITLE, Guide, GuideState, Rendered, SIDEBAR_CREDIT};
use thiserror::Error;
use tracing::{debug, info};

pub use blocks::{BlockView, FaqView, FeatureCardView, IconView, PlaceholderView};

/// File name of the document for the initial state.
pub const INDEX_FILE: &str = "index.html";

/// Errors producing documents.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template rendering failed: {0}")]
    Template(#[from] askama::Error),
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("section id '{0}' cannot be used as a file name")]
    UnsafeId(String),
    #[error("section id '{0}' would overwrite {INDEX_FILE}")]
    ReservedId(String),
}

// =============================================================================
// TEMPLATE
// =============================================================================

/// One sidebar link.
#[derive(Debug, Clone, PartialEq)]
pub struct NavLink<'a> {
    pub title: &'a str,
    pub href: String,
    pub icon: IconView,
    pub active: bool,
}

/// One sidebar group.
#[derive(Debug, Clone, PartialEq)]
pub struct NavGroup<'a> {
    pub title: &'a str,
    pub color: String,
    pub links: Vec<NavLink<'a>>,
}

#[derive(Template)]
#[template(path = "page.html")]
pub struct PageTemplate<'a> {
    pub document_title: String,
    pub guide_title: &'static str,
    pub credit: &'static str,
    pub sidebar_open: bool,
    pub scrolled: bool,
    pub groups: Vec<NavGroup<'a>>,
    pub blocks: Vec<BlockView<'a>>,
}

impl<'a> PageTemplate<'a> {
    pub fn new(guide: &Guide<'a>, state: &GuideState) -> Self {
        let navigation = &state.navigation;
        let active = navigation.active_section().as_str();

        let groups = guide
            .navigation_groups()
            .into_iter()
            .map(|group| NavGroup {
                title: group.category.title,
                color: group.category.tone.swatch().hex(),
                links: group
                    .sections
                    .into_iter()
                    .map(|section| NavLink {
                        title: section.title,
                        href: document_name(section.id.as_str()),
                        icon: section.icon.into(),
                        active: navigation.is_active(section.id.as_str()),
                    })
                    .collect(),
            })
            .collect();

        let blocks = match guide.resolve(active) {
            Rendered::Body(body) => blocks::body_views(guide, body, &state.disclosure),
            Rendered::Placeholder(placeholder) => blocks::placeholder_views(placeholder),
        };

        let document_title = match guide.section(active) {
            Some(section) => format!("{} - {GUIDE_TITLE}", section.title),
            None => GUIDE_TITLE.to_string(),
        };

        Self {
            document_title,
            guide_title: GUIDE_TITLE,
            credit: SIDEBAR_CREDIT,
            sidebar_open: navigation.sidebar_open(),
            scrolled: state.scroll.is_scrolled(),
            groups,
            blocks,
        }
    }
}

// =============================================================================
// DOCUMENTS
// =============================================================================

/// File name of the document showing `id`.
pub fn document_name(id: &str) -> String {
    format!("{id}.html")
}

/// Whether `id` is safe to use as a file stem.
pub fn is_safe_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Render the document for `state`.
pub fn render_page(guide: &Guide<'_>, state: &GuideState) -> Result<String, RenderError> {
    debug!(section = %state.navigation.active_section(), "rendering page");
    Ok(PageTemplate::new(guide, state).render()?)
}

/// Write `index.html` and one document per id into `out_dir`.
///
/// Returns the written paths in write order.
pub fn write_documents(
    guide: &Guide<'_>,
    out_dir: &Path,
    ids: &[String],
) -> Result<Vec<PathBuf>, RenderError> {
    if let Some(bad) = ids.iter().find(|id| !is_safe_id(id)) {
        return Err(RenderError::UnsafeId(bad.clone()));
    }
    if let Some(reserved) = ids.iter().find(|id| document_name(id) == INDEX_FILE) {
        return Err(RenderError::ReservedId(reserved.clone()));
    }

    fs::create_dir_all(out_dir).map_err(|source| RenderError::Io {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(ids.len() + 1);
    let documents = std::iter::once((INDEX_FILE.to_string(), GuideState::default())).chain(
        ids.iter()
            .map(|id| (document_name(id), GuideState::at(id.clone()))),
    );

    for (name, state) in documents {
        let html = render_page(guide, &state)?;
        let path = out_dir.join(name);
        fs::write(&path, html).map_err(|source| RenderError::Io {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), "wrote document");
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn safe_ids_are_plain_file_stems() {
        assert!(is_safe_id("costManagement"));
        assert!(is_safe_id("line-item-bp"));
        assert!(!is_safe_id(""));
        assert!(!is_safe_id("../etc"));
        assert!(!is_safe_id("a/b"));
    }

    #[test]
    fn only_the_active_link_is_marked() {
        let guide = Guide::builtin();
        let page = PageTemplate::new(&guide, &GuideState::at("glossary"));
        let active: Vec<_> = page
            .groups
            .iter()
            .flat_map(|g| g.links.iter())
            .filter(|l| l.active)
            .map(|l| l.href.as_str())
            .collect();
        assert_eq!(active, ["glossary.html"]);
        assert_eq!(page.document_title, "Glossary - Oracle Unifier BP Guide");
    }

    #[test]
    fn unsafe_ids_are_rejected_before_writing() {
        let dir = tempfile::tempdir().expect("temp dir");
        let out = dir.path().join("site");
        let result = write_documents(&Guide::builtin(), &out, &["../x".to_string()]);
        assert!(matches!(result, Err(RenderError::UnsafeId(id)) if id == "../x"));
        assert!(!out.exists());
    }

    #[test]
    fn index_id_cannot_replace_the_start_document() {
        let dir = tempfile::tempdir().expect("temp dir");
        let out = dir.path().join("site");
        let ids = ["glossary".to_string(), "index".to_string()];
        let result = write_documents(&Guide::builtin(), &out, &ids);
        assert!(matches!(result, Err(RenderError::ReservedId(id)) if id == "index"));
        assert!(!out.exists());
    }
}
