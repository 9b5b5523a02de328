//! Content tables and UI state machines for the Unifier BP Guide.
//!
//! Both the desktop viewer and the document exporter are thin shells over
//! this crate: they look sections up through [`Guide`], hold a [`GuideState`]
//! and draw whatever [`Guide::resolve`] returns for the active section.

pub mod audit;
pub mod category;
pub mod chart;
pub mod community;
pub mod contact;
pub mod content;
pub mod disclosure;
pub mod icon;
pub mod navigation;
pub mod registry;
pub mod scroll;
pub mod section;
pub mod state;

pub use audit::{AuditReport, Finding, Severity, audit};
pub use category::{CATEGORIES, Category, CategoryKey, category};
pub use chart::{
    Axis, BAR_RADIUS, BUDGET_VS_ACTUAL, BarChart, BarSeries, COST_DISTRIBUTION, ChartKind,
    DONUT_BORDER, DONUT_BORDER_WIDTH, DonutSegment, DonutSlice, donut_segments, format_thousands,
};
pub use community::{FAQS, Faq, TESTIMONIALS, Testimonial};
pub use contact::{ContactField, ContactForm, ContactIssue, SubmitOutcome};
pub use content::{
    Block, CONTENT, ContentBody, ContentEntry, FeatureCard, Item, Placeholder, Rendered, Table,
};
pub use disclosure::DisclosureState;
pub use icon::{Icon, Swatch, Tone};
pub use navigation::{
    NavigationEffect, NavigationState, SIDEBAR_BREAKPOINT, SidebarPresentation, Viewport,
};
pub use registry::{Guide, NavigationGroup, resolve_content, sections_by_category};
pub use scroll::{SCROLL_THRESHOLD, ScrollState};
pub use section::{DEFAULT_SECTION, SECTIONS, Section, SectionId};
pub use state::GuideState;

/// Title shown in the header and window title.
pub const GUIDE_TITLE: &str = "Oracle Unifier BP Guide";

/// Credit line at the foot of the sidebar.
pub const SIDEBAR_CREDIT: &str = "Created by Ahmed Hamada";
