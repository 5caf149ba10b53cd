//! Section renderer set.
//!
//! One renderer per [`SectionKind`], dispatched through an exhaustive
//! match: adding a kind without a renderer is a compile error, not a
//! runtime hole. Renderers return `None` to skip a section; that is
//! the documented policy for disabled sections and for content-optional
//! sections with nothing to show, never an error.

/// Enhanced hero background compositing.
pub mod background;
mod render;

use crate::html::Node;
use cmsview_core::{RenderDiagnostics, SectionData, ThemeContext};

pub use background::{HeroBackdrop, compose_background, gradient_css, theme_gradient_css};
pub use render::render_site_footer_with_year;

/// Renders one normalized section, or skips it.
///
/// Pure over `(data, theme)` except for the footer's copyright year.
/// Non-fatal conditions (a hero image reference that resolved to
/// nothing, say) are recorded on `diagnostics` and never abort the
/// section, let alone its siblings.
pub fn render_section(
    data: &SectionData,
    theme: &ThemeContext,
    diagnostics: &mut RenderDiagnostics,
) -> Option<Node> {
    match data {
        SectionData::SiteHeader(data) => Some(render::render_site_header(data)),
        SectionData::Hero(data) => render::render_hero(data),
        SectionData::FeaturesGrid(data) => render::render_features_grid(data),
        SectionData::PageContent(data) => render::render_page_content(data),
        SectionData::SiteFooter(data) => Some(render::render_site_footer(data)),
        SectionData::EnhancedHero(data) => render::render_enhanced_hero(data, theme, diagnostics),
        SectionData::EnhancedFeatures(data) => render::render_enhanced_features(data),
        SectionData::About(data) => render::render_about(data),
        SectionData::Cta(data) => render::render_cta(data),
        SectionData::Testimonials(data) => render::render_testimonials(data),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cmsview_core::{AnalyticsSettings, PassthroughAssets, SectionKind, normalize};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn theme() -> ThemeContext {
        ThemeContext {
            bg: "#ffffff".to_string(),
            text: "#333333".to_string(),
            primary: "#2563eb".to_string(),
            accent: "#10b981".to_string(),
            font: "Inter".to_string(),
            site_title: "Your Site".to_string(),
            logo: None,
            navigation: Vec::new(),
            analytics: AnalyticsSettings {
                enabled: false,
                ga4_id: String::new(),
                cookie_consent: true,
                track_external_links: true,
                track_downloads: true,
                enhanced_ecommerce: false,
                debug_mode: false,
            },
        }
    }

    fn render_normalized(kind: SectionKind, payload: serde_json::Value) -> Option<String> {
        let data = normalize(kind, None, Some(&payload), &PassthroughAssets);
        let mut diagnostics = RenderDiagnostics::new();
        render_section(&data, &theme(), &mut diagnostics).map(|node| node.to_html())
    }

    #[test]
    fn header_renders_navigation_links() {
        let html = render_normalized(
            SectionKind::SiteHeader,
            json!({
                "title": "Acme",
                "navigation": [
                    { "name": "Home", "url": "/" },
                    { "name": "Docs", "url": "/docs/" }
                ]
            }),
        )
        .unwrap();

        assert!(html.starts_with(r#"<header class="site-header">"#));
        assert!(html.contains(r##"<a class="site-title" href="#">Acme</a>"##));
        assert!(html.contains(r##"<a class="nav-link" href="#" title="Home">Home</a>"##));
        assert!(html.contains(r#"title="Docs""#));
        // No toggle unless the mobile menu is requested.
        assert!(!html.contains("mobile-menu-toggle"));
    }

    #[test]
    fn header_logo_and_toggle_are_optional() {
        let html = render_normalized(
            SectionKind::SiteHeader,
            json!({ "title": "Acme", "logo": "/logo.svg", "show_mobile_menu": true }),
        )
        .unwrap();

        assert!(html.contains(r#"<img class="logo" src="/logo.svg" alt="Acme Logo" />"#));
        assert!(html.contains(r#"<button class="mobile-menu-toggle" aria-label="Toggle menu">"#));
    }

    #[test]
    fn disabled_hero_renders_nothing() {
        assert_eq!(
            render_normalized(SectionKind::EnhancedHero, json!({ "enabled": false })),
            None
        );
        assert_eq!(
            render_normalized(SectionKind::Hero, json!({ "enabled": false })),
            None
        );
    }

    #[test]
    fn enhanced_hero_composites_exactly_one_background() {
        let html = render_normalized(
            SectionKind::EnhancedHero,
            json!({
                "enabled": true,
                "title": "Build faster",
                "subtitle": "Ship today",
                "background": {
                    "type": "gradient",
                    "gradient": { "style": "linear-lr", "color1": "#111", "color2": "#222" }
                }
            }),
        )
        .unwrap();

        assert!(html.contains(r#"class="hero hero-gradient""#));
        assert!(html.contains("background: linear-gradient(to right, #111, #222);"));
        assert!(!html.contains("hero-video"));
        assert!(!html.contains("background-image"));
        assert!(html.contains(r#"<h1 class="hero-title">Build faster</h1>"#));
        assert!(html.contains(r#"<h2 class="hero-subtitle">Ship today</h2>"#));
        // Default primary button text comes from normalization.
        assert!(html.contains(">Get Started</a>"));
    }

    #[test]
    fn basic_features_grid_skips_when_empty() {
        assert_eq!(
            render_normalized(
                SectionKind::FeaturesGrid,
                json!({ "enabled": true, "items": [] })
            ),
            None
        );
    }

    #[test]
    fn basic_features_grid_numbers_untitled_items() {
        let html = render_normalized(
            SectionKind::FeaturesGrid,
            json!({ "enabled": true, "title": "", "items": [{}, { "title": "Named" }] }),
        )
        .unwrap();

        assert!(html.contains("<h3>Feature 1</h3>"));
        assert!(html.contains("<h3>Named</h3>"));
        // Empty grid title leaves the heading out entirely.
        assert!(!html.contains("section-title"));
    }

    #[test]
    fn enhanced_features_render_links_with_arrow() {
        let html = render_normalized(
            SectionKind::EnhancedFeatures,
            json!({
                "enabled": true,
                "title": "Why us",
                "items": [
                    { "icon": "🚀", "title": "Fast", "description": "Quick.", "link": { "text": "More" } }
                ]
            }),
        )
        .unwrap();

        assert!(html.contains(r#"<div class="feature-icon">🚀</div>"#));
        assert!(html.contains(r##"<a class="feature-link" href="#">More →</a>"##));
    }

    #[test]
    fn page_content_skips_when_empty_and_passes_markup_through() {
        assert_eq!(render_normalized(SectionKind::PageContent, json!({})), None);

        let html = render_normalized(
            SectionKind::PageContent,
            json!({ "content": "<h2>Hello</h2>" }),
        )
        .unwrap();
        assert!(html.contains(r#"<div class="page-content"><h2>Hello</h2></div>"#));
    }

    #[test]
    fn footer_copyright_uses_the_given_year() {
        let data = normalize(
            SectionKind::SiteFooter,
            None,
            Some(&json!({
                "site_title": "Acme",
                "navigation": [{ "name": "Home", "url": "/" }]
            })),
            &PassthroughAssets,
        );
        let cmsview_core::SectionData::SiteFooter(ref footer) = data else {
            panic!("wrong variant");
        };

        let html = render_site_footer_with_year(footer, 2031).to_html();
        assert!(html.contains("© 2031 Acme. All rights reserved."));
        assert!(html.contains("<h4>Quick Links</h4>"));
        assert!(html.contains("<h4>Contact</h4>"));
    }

    #[test]
    fn about_section_degrades_without_image() {
        let html = render_normalized(
            SectionKind::About,
            json!({
                "enabled": true,
                "title": "About Us",
                "content": "<p>Since 2009.</p>",
                "cta": { "text": "Meet the team" }
            }),
        )
        .unwrap();

        assert!(html.contains(r#"<div class="about-description"><p>Since 2009.</p></div>"#));
        assert!(html.contains(">Meet the team</a>"));
        assert!(!html.contains("about-image"));
    }

    #[test]
    fn cta_background_style_reaches_the_class_list() {
        let html = render_normalized(
            SectionKind::Cta,
            json!({ "enabled": true, "background": "accent", "title": "Go" }),
        )
        .unwrap();

        assert!(html.contains(r#"class="cta-section cta-accent""#));
    }

    #[test]
    fn testimonials_render_quotes_and_optional_photos() {
        let html = render_normalized(
            SectionKind::Testimonials,
            json!({
                "enabled": true,
                "items": [
                    { "quote": "Great team", "name": "Ada", "title": "CTO", "photo": "/ada.jpg" },
                    { "quote": "Would hire again", "name": "Grace" }
                ]
            }),
        )
        .unwrap();

        assert!(html.contains("\"Great team\""));
        assert!(html.contains(r#"<img class="testimonial-photo" src="/ada.jpg" alt="Ada" />"#));
        assert!(html.contains(r#"<span class="testimonial-title">CTO</span>"#));
        // The second author has no photo and no role.
        assert_eq!(html.matches("testimonial-photo").count(), 1);
        assert_eq!(html.matches("testimonial-title").count(), 1);
    }

    #[test]
    fn renderer_output_is_stable_for_equal_input() {
        let payload = json!({
            "enabled": true,
            "title": "Build faster",
            "background": { "type": "gradient" }
        });
        let a = render_normalized(SectionKind::EnhancedHero, payload.clone()).unwrap();
        let b = render_normalized(SectionKind::EnhancedHero, payload).unwrap();
        assert_eq!(a, b);
    }
}
