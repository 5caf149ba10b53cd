//! Preview document assembly.
//!
//! A document is built in one pass: resolve the theme, normalize and
//! render every section, then serialize the whole tree. Nothing is
//! written until every section has rendered (or been skipped), so a
//! pass never mixes stale and fresh sections: the swap is all-or-nothing
//! at the section-list granularity.

use crate::fonts::font_links;
use crate::html::{Element, Node, raw};
use crate::markdown;
use crate::menu::{MenuState, render_mobile_menu};
use crate::sections::render_section;
use crate::theme_css::theme_css;
use cmsview_core::{
    AssetResolver, EntrySource, Phase, RenderDiagnostics, RenderWarning, SNAPSHOT_PATH,
    SectionData, SectionKind, SiteFooterData, SiteHeaderData, Snapshot, ThemeContext,
    entry_section_path, normalize, resolve_string, resolve_theme,
};
use serde_json::{Value, json};

/// Footer tagline used by the page variant, which has no footer payload
/// of its own.
const PAGE_FOOTER_TAGLINE: &str = "A professional website built with a modern CMS";

/// Preview template variants the host can register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewVariant {
    /// Full site preview driven by the snapshot's section layout.
    Universal,
    /// Single page: header, page body, footer.
    Page,
}

/// Host collection identifiers and the variant previewing each.
pub const REGISTRATIONS: [(&str, PreviewVariant); 7] = [
    ("theme", PreviewVariant::Universal),
    ("home", PreviewVariant::Page),
    ("about", PreviewVariant::Page),
    ("services", PreviewVariant::Page),
    ("contact", PreviewVariant::Page),
    ("blog", PreviewVariant::Page),
    ("config", PreviewVariant::Page),
];

/// Looks up the preview variant registered for a collection.
pub fn variant_for_collection(collection: &str) -> Option<PreviewVariant> {
    REGISTRATIONS
        .iter()
        .find(|(name, _)| *name == collection)
        .map(|(_, variant)| *variant)
}

/// A rendered preview document plus the non-fatal warnings gathered
/// while assembling it.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedDocument {
    /// Serialized HTML.
    pub html: String,
    /// Sections skipped, assets missing.
    pub diagnostics: RenderDiagnostics,
}

/// Editor data consumed by the page variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageData {
    /// Page title.
    pub title: String,
    /// Optional lead paragraph; empty when not set.
    pub description: String,
    /// Markdown body.
    pub body: String,
}

/// Normalizes the page-level entry fields.
pub fn page_data(entry: &dyn EntrySource) -> PageData {
    PageData {
        title: resolve_string(entry.get(&["title"]), None, "Page Title"),
        description: resolve_string(entry.get(&["description"]), None, ""),
        body: resolve_string(entry.get(&["body"]), None, ""),
    }
}

/// Renders the document for the current orchestrator phase.
pub fn render_phase(
    phase: &Phase,
    entry: &dyn EntrySource,
    assets: &dyn AssetResolver,
    menu: MenuState,
    variant: PreviewVariant,
) -> RenderedDocument {
    match phase {
        Phase::Loading => RenderedDocument {
            html: loading_document(),
            diagnostics: RenderDiagnostics::new(),
        },
        Phase::Error(message) => RenderedDocument {
            html: error_document(message),
            diagnostics: RenderDiagnostics::new(),
        },
        Phase::Ready(snapshot) => match variant {
            PreviewVariant::Universal => universal_document(entry, snapshot, assets, menu),
            PreviewVariant::Page => page_document(entry, snapshot, assets),
        },
    }
}

/// Renders the universal preview: every section the snapshot layout
/// names, in order, with editor overrides merged in per section.
///
/// Unknown section types and keys without payloads are skipped with a
/// diagnostic; they never blank the surrounding document.
pub fn universal_document(
    entry: &dyn EntrySource,
    snapshot: &Snapshot,
    assets: &dyn AssetResolver,
    menu: MenuState,
) -> RenderedDocument {
    let theme = resolve_theme(entry, snapshot, assets);
    let mut diagnostics = RenderDiagnostics::new();

    let mut section_nodes = Vec::new();
    for key in snapshot.sections() {
        let Some(payload) = snapshot.section_payload(key) else {
            log::debug!("layout lists section '{key}' without a payload, skipping");
            diagnostics.push(RenderWarning::MissingSectionPayload { key: key.clone() });
            continue;
        };
        let Some(kind_name) = payload.get("type").and_then(Value::as_str) else {
            log::debug!("section '{key}' has no type field, skipping");
            diagnostics.push(RenderWarning::MissingSectionPayload { key: key.clone() });
            continue;
        };
        let Some(kind) = SectionKind::parse(kind_name) else {
            log::warn!("no renderer registered for section type '{kind_name}', skipping '{key}'");
            diagnostics.push(RenderWarning::UnknownSectionKind {
                key: key.clone(),
                kind: kind_name.to_string(),
            });
            continue;
        };

        let editor_value = editor_override(kind, entry, &theme);
        let data = normalize(kind, editor_value.as_ref(), Some(payload), assets);
        if let Some(node) = render_section(&data, &theme, &mut diagnostics) {
            section_nodes.push(node);
        }
    }

    let mut container = Element::new("div").class("preview-container");
    if theme.analytics.enabled && !theme.analytics.ga4_id.is_empty() {
        container = container.child(analytics_badge(&theme));
    }
    container = container
        .children(section_nodes)
        .children(render_mobile_menu(&theme.navigation, menu));

    RenderedDocument {
        html: document_shell(&theme, container),
        diagnostics,
    }
}

/// Renders the page preview: site header, page header and markdown
/// body, site footer.
pub fn page_document(
    entry: &dyn EntrySource,
    snapshot: &Snapshot,
    assets: &dyn AssetResolver,
) -> RenderedDocument {
    let theme = resolve_theme(entry, snapshot, assets);
    let mut diagnostics = RenderDiagnostics::new();
    let page = page_data(entry);

    let header = SectionData::SiteHeader(SiteHeaderData {
        title: theme.site_title.clone(),
        logo: theme.logo.clone(),
        navigation: theme.navigation.clone(),
        show_mobile_menu: false,
    });
    let footer = SectionData::SiteFooter(SiteFooterData {
        site_title: theme.site_title.clone(),
        description: PAGE_FOOTER_TAGLINE.to_string(),
        navigation: theme.navigation.clone(),
    });

    let mut page_header = Element::new("div")
        .class("page-header")
        .child(Element::new("h1").class("page-title").text(page.title.clone()));
    if !page.description.is_empty() {
        page_header = page_header.child(
            Element::new("p")
                .class("page-description")
                .text(page.description.clone()),
        );
    }

    let main = Element::new("main").child(
        Element::new("div").class("single-page").child(
            Element::new("div")
                .class("container")
                .child(page_header)
                .child(
                    Element::new("div")
                        .class("page-content")
                        .child(raw(markdown::to_html(&page.body))),
                ),
        ),
    );

    let mut container = Element::new("div").class("preview-container");
    if let Some(node) = render_section(&header, &theme, &mut diagnostics) {
        container = container.child(node);
    }
    container = container.child(main);
    if let Some(node) = render_section(&footer, &theme, &mut diagnostics) {
        container = container.child(node);
    }

    RenderedDocument {
        html: document_shell(&theme, container),
        diagnostics,
    }
}

/// Placeholder document shown while a fetch is outstanding.
pub fn loading_document() -> String {
    placeholder("#666", "⚡", &[centered_line("Loading preview...")])
}

/// Placeholder document shown after a fetch or validation failure.
/// Includes the underlying cause and a hint about the snapshot file.
pub fn error_document(message: &str) -> String {
    placeholder(
        "#dc2626",
        "⚠️",
        &[
            Element::new("div")
                .attr("style", "margin-bottom: 0.5rem; font-weight: 600;")
                .text("Failed to load preview")
                .into(),
            Element::new("div")
                .attr("style", "font-size: 0.875rem; opacity: 0.7;")
                .text(format!("Error: {message}"))
                .into(),
            Element::new("div")
                .attr("style", "font-size: 0.875rem; margin-top: 1rem;")
                .text(format!(
                    "Make sure the site server is running and {SNAPSHOT_PATH} exists"
                ))
                .into(),
        ],
    )
}

fn centered_line(message: &str) -> Node {
    Element::new("div").text(message).into()
}

fn placeholder(color: &str, glyph: &str, lines: &[Node]) -> String {
    let node: Node = Element::new("div")
        .attr(
            "style",
            format!(
                "display: flex; align-items: center; justify-content: center; height: 400px; font-family: Inter, sans-serif; color: {color}; text-align: center; padding: 2rem;"
            ),
        )
        .child(
            Element::new("div")
                .child(
                    Element::new("div")
                        .attr("style", "margin-bottom: 1rem; font-size: 2rem;")
                        .text(glyph),
                )
                .children(lines.to_vec()),
        )
        .into();
    node.to_html()
}

fn document_shell(theme: &ThemeContext, container: Element) -> String {
    let root: Node = Element::new("div")
        .children(font_links(&theme.font))
        .child(Element::new("style").child(raw(theme_css(theme))))
        .child(container)
        .into();
    root.to_html()
}

fn analytics_badge(theme: &ThemeContext) -> Element {
    Element::new("div")
        .attr(
            "style",
            "position: fixed; top: 10px; right: 10px; background: #10b981; color: white; padding: 8px 12px; border-radius: 4px; font-size: 12px; font-weight: 600; z-index: 9999; box-shadow: 0 2px 4px rgba(0,0,0,0.1);",
        )
        .text(format!("📊 Analytics: {}", theme.analytics.ga4_id))
}

/// Editor-side value for one section of the universal preview.
///
/// The header has no section of its own in the entry form; it is fed
/// the resolved theme's branding and navigation instead, overriding
/// whatever branding the snapshot payload carries.
fn editor_override(
    kind: SectionKind,
    entry: &dyn EntrySource,
    theme: &ThemeContext,
) -> Option<Value> {
    if kind == SectionKind::SiteHeader {
        return Some(json!({
            "title": theme.site_title,
            "logo": theme.logo,
            "navigation": theme.navigation,
            "show_mobile_menu": true,
        }));
    }
    entry_section_path(kind)
        .and_then(|path| entry.get(path))
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cmsview_core::{EmptyEntry, FetchError, JsonEntry, PassthroughAssets, PreviewError};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn snapshot(body: &str) -> Snapshot {
        Snapshot::parse(body).unwrap()
    }

    const HEADER_ONLY: &str = r#"{
        "theme": { "font": "Inter" },
        "navigation": [{ "name": "Home", "url": "/" }],
        "layout": { "sections": ["header"], "header": { "type": "site-header" } }
    }"#;

    #[test]
    fn header_only_snapshot_renders_one_nav_link_and_nothing_else() {
        let doc = universal_document(
            &EmptyEntry,
            &snapshot(HEADER_ONLY),
            &PassthroughAssets,
            MenuState::closed(),
        );

        assert!(doc.html.contains(r#"<header class="site-header">"#));
        assert_eq!(doc.html.matches(r#"class="nav-link""#).count(), 1);
        assert!(doc.html.contains(">Home</a>"));
        // No sections beyond the header.
        assert!(!doc.html.contains("<section"));
        assert!(!doc.diagnostics.has_warnings());
    }

    #[test]
    fn unknown_section_kind_skips_that_section_only() {
        let doc = universal_document(
            &EmptyEntry,
            &snapshot(
                r#"{
                    "navigation": [{ "name": "Home", "url": "/" }],
                    "layout": {
                        "sections": ["header", "widget", "cta"],
                        "header": { "type": "site-header" },
                        "widget": { "type": "parallax-section" },
                        "cta": { "type": "cta-section", "enabled": true, "title": "Go" }
                    }
                }"#,
            ),
            &PassthroughAssets,
            MenuState::closed(),
        );

        // Siblings of the unknown section are intact.
        assert!(doc.html.contains(r#"<header class="site-header">"#));
        assert!(doc.html.contains(r#"class="cta-section cta-primary""#));
        assert_eq!(
            doc.diagnostics.warnings,
            vec![RenderWarning::UnknownSectionKind {
                key: "widget".to_string(),
                kind: "parallax-section".to_string(),
            }]
        );
    }

    #[test]
    fn section_key_without_payload_is_skipped_with_a_diagnostic() {
        let doc = universal_document(
            &EmptyEntry,
            &snapshot(r#"{ "layout": { "sections": ["ghost", "header"], "header": { "type": "site-header" } } }"#),
            &PassthroughAssets,
            MenuState::closed(),
        );

        assert!(doc.html.contains("site-header"));
        assert_eq!(
            doc.diagnostics.warnings,
            vec![RenderWarning::MissingSectionPayload {
                key: "ghost".to_string(),
            }]
        );
    }

    #[test]
    fn disabled_hero_leaves_no_hero_markup() {
        let entry = JsonEntry::new(json!({ "hero": { "enabled": false } }));
        let doc = universal_document(
            &entry,
            &snapshot(
                r#"{
                    "layout": {
                        "sections": ["header", "hero"],
                        "header": { "type": "site-header" },
                        "hero": { "type": "enhanced-hero", "enabled": true, "title": "Hi" }
                    }
                }"#,
            ),
            &PassthroughAssets,
            MenuState::closed(),
        );

        assert!(!doc.html.contains("hero-title"));
        assert!(!doc.html.contains(r#"class="hero"#));
        assert!(doc.html.contains("site-header"));
    }

    #[test]
    fn editor_gradient_reaches_the_hero_style() {
        let entry = JsonEntry::new(json!({
            "hero": {
                "background": {
                    "type": "gradient",
                    "gradient": { "style": "linear-lr", "color1": "#111", "color2": "#222" }
                }
            }
        }));
        let doc = universal_document(
            &entry,
            &snapshot(
                r#"{ "layout": { "sections": ["hero"], "hero": { "type": "enhanced-hero", "title": "Hi" } } }"#,
            ),
            &PassthroughAssets,
            MenuState::closed(),
        );

        assert!(
            doc.html
                .contains("background: linear-gradient(to right, #111, #222);")
        );
        assert!(!doc.html.contains("#667eea"));
    }

    #[test]
    fn editor_primary_color_propagates_into_css_custom_property() {
        let entry = JsonEntry::new(json!({ "colors": { "primary": "#abc123" } }));
        let doc = universal_document(
            &entry,
            &snapshot(HEADER_ONLY),
            &PassthroughAssets,
            MenuState::closed(),
        );

        assert!(doc.html.contains("--primary: #abc123;"));
    }

    #[test]
    fn theme_font_drives_the_stylesheet_links() {
        let entry = JsonEntry::new(json!({ "typography": { "font": "Space Grotesk" } }));
        let doc = universal_document(
            &entry,
            &snapshot(HEADER_ONLY),
            &PassthroughAssets,
            MenuState::closed(),
        );

        assert!(doc.html.contains("css2?family=Space%20Grotesk"));
        assert!(doc.html.contains("--font-family: 'Space Grotesk', sans-serif;"));
    }

    #[test]
    fn analytics_badge_requires_enabled_and_id() {
        let entry = JsonEntry::new(json!({
            "analytics": { "enabled": true, "ga4_id": "G-TEST123" }
        }));
        let doc = universal_document(
            &entry,
            &snapshot(HEADER_ONLY),
            &PassthroughAssets,
            MenuState::closed(),
        );
        assert!(doc.html.contains("📊 Analytics: G-TEST123"));

        let entry = JsonEntry::new(json!({ "analytics": { "enabled": true } }));
        let doc = universal_document(
            &entry,
            &snapshot(HEADER_ONLY),
            &PassthroughAssets,
            MenuState::closed(),
        );
        assert!(!doc.html.contains("📊 Analytics"));
    }

    #[test]
    fn open_menu_state_is_reflected_in_the_document() {
        let mut menu = MenuState::closed();
        menu.toggle();
        let doc = universal_document(&EmptyEntry, &snapshot(HEADER_ONLY), &PassthroughAssets, menu);
        assert!(doc.html.contains("mobile-menu-panel active"));
    }

    #[test]
    fn page_document_renders_markdown_body_between_header_and_footer() {
        let entry = JsonEntry::new(json!({
            "title": "Services",
            "description": "What we do",
            "body": "## Consulting\n\nWe help teams ship."
        }));
        let doc = page_document(&entry, &snapshot(HEADER_ONLY), &PassthroughAssets);

        assert!(doc.html.contains(r#"<h1 class="page-title">Services</h1>"#));
        assert!(doc.html.contains(r#"<p class="page-description">What we do</p>"#));
        assert!(doc.html.contains("<h2>Consulting</h2>"));
        let header_pos = doc.html.find("site-header").unwrap();
        let body_pos = doc.html.find("Consulting").unwrap();
        let footer_pos = doc.html.find("site-footer").unwrap();
        assert!(header_pos < body_pos && body_pos < footer_pos);
    }

    #[test]
    fn page_document_defaults_title_and_omits_empty_description() {
        let doc = page_document(&EmptyEntry, &snapshot(HEADER_ONLY), &PassthroughAssets);
        assert!(doc.html.contains(r#"<h1 class="page-title">Page Title</h1>"#));
        assert!(!doc.html.contains("page-description"));
    }

    #[test]
    fn registration_table_maps_collections_to_variants() {
        assert_eq!(
            variant_for_collection("theme"),
            Some(PreviewVariant::Universal)
        );
        assert_eq!(variant_for_collection("about"), Some(PreviewVariant::Page));
        assert_eq!(variant_for_collection("blog"), Some(PreviewVariant::Page));
        assert_eq!(variant_for_collection("unregistered"), None);
    }

    #[test]
    fn phase_rendering_covers_loading_error_and_ready() {
        let loading = render_phase(
            &Phase::Loading,
            &EmptyEntry,
            &PassthroughAssets,
            MenuState::closed(),
            PreviewVariant::Universal,
        );
        assert!(loading.html.contains("Loading preview..."));

        let error = PreviewError::Fetch(FetchError::Status { status: 503 }).to_string();
        let errored = render_phase(
            &Phase::Error(error),
            &EmptyEntry,
            &PassthroughAssets,
            MenuState::closed(),
            PreviewVariant::Universal,
        );
        assert!(errored.html.contains("Failed to load preview"));
        assert!(errored.html.contains("HTTP 503"));
        assert!(errored.html.contains("/cms-data.json"));

        let ready = render_phase(
            &Phase::Ready(snapshot(HEADER_ONLY)),
            &EmptyEntry,
            &PassthroughAssets,
            MenuState::closed(),
            PreviewVariant::Universal,
        );
        assert!(ready.html.contains("preview-container"));
    }
}
