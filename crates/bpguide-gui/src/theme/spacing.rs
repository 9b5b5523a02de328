//! Spacing constants for consistent layout throughout the application.
//!
//! All spacing values are in pixels (f32) and follow a consistent scale.

// =============================================================================
// SPACING SCALE
// =============================================================================

/// Extra small spacing - tight gaps between related elements
pub const SPACING_XS: f32 = 4.0;

/// Small spacing - icon margins, list item gaps
pub const SPACING_SM: f32 = 8.0;

/// Medium spacing - default padding, standard gaps
pub const SPACING_MD: f32 = 16.0;

/// Large spacing - card padding, major gaps
pub const SPACING_LG: f32 = 24.0;

/// Extra large spacing - page margins, grid gaps
pub const SPACING_XL: f32 = 32.0;

/// Double extra large spacing - hero sections
pub const SPACING_XXL: f32 = 48.0;

// =============================================================================
// BORDER RADIUS
// =============================================================================

/// Small radius - nav items, inputs
pub const BORDER_RADIUS_SM: f32 = 6.0;

/// Medium radius - buttons, code blocks
pub const BORDER_RADIUS_MD: f32 = 8.0;

/// Large radius - accordion items
pub const BORDER_RADIUS_LG: f32 = 12.0;

/// Extra large radius - content cards
pub const BORDER_RADIUS_XL: f32 = 16.0;

/// Full/pill radius - avatars, round icon wells
pub const BORDER_RADIUS_FULL: f32 = 9999.0;

// =============================================================================
// COMPONENT SIZES
// =============================================================================

/// Sidebar and header icons
pub const ICON_SIZE_MD: f32 = 20.0;

/// Header menu button icon
pub const ICON_SIZE_LG: f32 = 24.0;

/// Feature card icons
pub const ICON_SIZE_XL: f32 = 28.0;

/// Placeholder icon
pub const ICON_SIZE_HERO: f32 = 60.0;

/// Testimonial avatar diameter
pub const AVATAR_SIZE: f32 = 96.0;

/// Chart drawing area height
pub const CHART_HEIGHT: f32 = 320.0;

// =============================================================================
// LAYOUT
// =============================================================================

/// Fixed header height
pub const HEADER_HEIGHT: f32 = 64.0;

/// Sidebar width
pub const SIDEBAR_WIDTH: f32 = 288.0;

/// Widest the readable content column gets
pub const CONTENT_MAX_WIDTH: f32 = 1152.0;

/// Contact form column width
pub const FORM_MAX_WIDTH: f32 = 768.0;
