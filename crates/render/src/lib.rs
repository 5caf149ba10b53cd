#![deny(missing_docs)]
//! cmsview rendering: the section renderer set, theme CSS emission,
//! font loading, and preview document assembly.
//!
//! Everything renders from normalized data (see `cmsview-core`); the
//! renderers in this crate are pure over `(data, theme)` apart from the
//! footer's documented copyright-year clock read.

/// Preview document assemblers and the collection registration table.
pub mod document;
/// Font-loading collaborator (stylesheet links, fallback families).
pub mod fonts;
/// HTML node tree and writer.
pub mod html;
/// Markdown collaborator wrapper.
pub mod markdown;
/// Mobile menu rendering with explicit open state.
pub mod menu;
/// Section renderer set.
pub mod sections;
/// Theme CSS custom-property emission.
pub mod theme_css;

pub use document::{
    PageData, PreviewVariant, REGISTRATIONS, RenderedDocument, error_document, loading_document,
    page_data, page_document, render_phase, universal_document, variant_for_collection,
};
pub use fonts::{FALLBACK_FAMILIES, font_links, stylesheet_url_v1, stylesheet_url_v2};
pub use html::{Element, Node, fragment_to_html, raw, text};
pub use menu::{MenuState, render_mobile_menu};
pub use sections::{compose_background, gradient_css, render_section, theme_gradient_css};
pub use theme_css::{SITE_STYLESHEET, theme_css};
