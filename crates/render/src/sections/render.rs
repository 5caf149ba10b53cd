//! Section renderer implementations.
//!
//! Each renderer is total over its normalized data: no absence checks
//! beyond the section's `enabled` gate and the documented empty-content
//! skips. Content-bearing strings that normalized to empty simply leave
//! their element out.
//!
//! Renderers are pure over `(data, theme)` with one documented
//! exception: the footer's copyright year reads the clock at invocation
//! time.

use super::background::compose_background;
use crate::html::{Element, Node, raw};
use chrono::Datelike;
use cmsview_core::{
    AboutData, CtaData, EnhancedHeroData, FeaturesData, HeroData, PageContentData,
    RenderDiagnostics, SiteFooterData, SiteHeaderData, TestimonialsData, ThemeContext,
};

fn container() -> Element {
    Element::new("div").class("container")
}

pub(crate) fn render_site_header(data: &SiteHeaderData) -> Node {
    let mut logo_section = Element::new("div").class("logo-section");
    if let Some(logo) = &data.logo {
        logo_section = logo_section.child(
            Element::new("img")
                .class("logo")
                .attr("src", logo.clone())
                .attr("alt", format!("{} Logo", data.title)),
        );
    }
    logo_section = logo_section.child(
        Element::new("a")
            .class("site-title")
            .attr("href", "#")
            .text(data.title.clone()),
    );

    let nav = Element::new("nav").class("main-nav").children(
        data.navigation.iter().map(|item| {
            Element::new("a")
                .class("nav-link")
                .attr("href", "#")
                .attr("title", item.name.clone())
                .text(item.name.clone())
                .into()
        }),
    );

    let mut content = Element::new("div")
        .class("header-content")
        .child(logo_section)
        .child(nav);
    if data.show_mobile_menu {
        content = content.child(
            Element::new("button")
                .class("mobile-menu-toggle")
                .attr("aria-label", "Toggle menu")
                .child(Element::new("span"))
                .child(Element::new("span"))
                .child(Element::new("span")),
        );
    }

    Element::new("header")
        .class("site-header")
        .child(container().child(content))
        .into()
}

pub(crate) fn render_hero(data: &HeroData) -> Option<Node> {
    if !data.enabled {
        return None;
    }

    let mut content = Element::new("div")
        .class("hero-content")
        .child(Element::new("h1").class("hero-title").text(data.title.clone()));
    if !data.subtitle.is_empty() {
        content = content.child(
            Element::new("p")
                .class("hero-subtitle")
                .text(data.subtitle.clone()),
        );
    }
    if !data.button.text.is_empty() {
        content = content.child(
            Element::new("a")
                .class("btn btn-primary")
                .attr("href", "#")
                .text(data.button.text.clone()),
        );
    }

    Some(
        Element::new("section")
            .class("hero")
            .child(container().child(content))
            .into(),
    )
}

/// Simple grid: skips when disabled or when there is nothing to show.
pub(crate) fn render_features_grid(data: &FeaturesData) -> Option<Node> {
    if !data.enabled || data.items.is_empty() {
        return None;
    }

    let grid = Element::new("div").class("features-grid").children(
        data.items.iter().enumerate().map(|(index, item)| {
            let mut tile = Element::new("div").class("feature-item");
            if !item.icon.is_empty() {
                tile = tile.child(Element::new("div").class("feature-icon").text(item.icon.clone()));
            }
            let title = if item.title.is_empty() {
                format!("Feature {}", index + 1)
            } else {
                item.title.clone()
            };
            tile = tile.child(Element::new("h3").text(title));
            if !item.description.is_empty() {
                tile = tile.child(Element::new("p").text(item.description.clone()));
            }
            tile.into()
        }),
    );

    let mut inner = container();
    if !data.title.is_empty() {
        inner = inner.child(Element::new("h2").class("section-title").text(data.title.clone()));
    }

    Some(
        Element::new("section")
            .class("features")
            .child(inner.child(grid))
            .into(),
    )
}

/// Long-form content: skips when there is no markup to insert.
pub(crate) fn render_page_content(data: &PageContentData) -> Option<Node> {
    if data.content.is_empty() {
        return None;
    }

    Some(
        Element::new("section")
            .class("content")
            .child(
                container().child(
                    Element::new("div")
                        .class("page-content")
                        .child(raw(data.content.clone())),
                ),
            )
            .into(),
    )
}

pub(crate) fn render_site_footer(data: &SiteFooterData) -> Node {
    // The one sanctioned wall-clock read: the copyright line shows the
    // year the preview was rendered.
    render_site_footer_with_year(data, chrono::Local::now().year())
}

/// Footer body for a fixed year; the public entry point supplies the
/// current year.
pub fn render_site_footer_with_year(data: &SiteFooterData, year: i32) -> Node {
    let mut about = Element::new("div")
        .class("footer-section")
        .child(Element::new("h3").text(data.site_title.clone()));
    if !data.description.is_empty() {
        about = about.child(Element::new("p").text(data.description.clone()));
    }

    let quick_links = Element::new("div")
        .class("footer-section")
        .child(Element::new("h4").text("Quick Links"))
        .child(Element::new("ul").children(data.navigation.iter().map(|item| {
            Element::new("li")
                .child(Element::new("a").attr("href", "#").text(item.name.clone()))
                .into()
        })));

    let contact = Element::new("div")
        .class("footer-section")
        .child(Element::new("h4").text("Contact"))
        .child(Element::new("p").text("Get in touch with us for more information."));

    Element::new("footer")
        .class("site-footer")
        .child(
            container()
                .child(
                    Element::new("div")
                        .class("footer-content")
                        .child(about)
                        .child(quick_links)
                        .child(contact),
                )
                .child(
                    Element::new("div").class("footer-bottom").child(
                        Element::new("p").text(format!(
                            "© {year} {}. All rights reserved.",
                            data.site_title
                        )),
                    ),
                ),
        )
        .into()
}

pub(crate) fn render_enhanced_hero(
    data: &EnhancedHeroData,
    theme: &ThemeContext,
    diagnostics: &mut RenderDiagnostics,
) -> Option<Node> {
    if !data.enabled {
        return None;
    }

    let backdrop = compose_background(&data.background, theme, diagnostics);
    let style = format!(
        "{} position: relative; min-height: 100vh; display: flex; align-items: center; justify-content: center; text-align: center; color: white; overflow: hidden;",
        backdrop.style
    );

    let mut content = Element::new("div")
        .class("hero-content")
        .attr(
            "style",
            "position: relative; z-index: 2; max-width: 800px; margin: 0 auto; padding: 2rem;",
        )
        .child(Element::new("h1").class("hero-title").text(data.title.clone()));
    if !data.subtitle.is_empty() {
        content = content.child(
            Element::new("h2")
                .class("hero-subtitle")
                .text(data.subtitle.clone()),
        );
    }
    if !data.description.is_empty() {
        content = content.child(
            Element::new("div")
                .class("hero-description")
                .child(raw(data.description.clone())),
        );
    }

    let mut buttons = Element::new("div").class("hero-buttons");
    if !data.primary_button.text.is_empty() {
        buttons = buttons.child(
            Element::new("a")
                .class(format!("btn btn-{}", data.primary_button.style))
                .attr("href", "#")
                .text(data.primary_button.text.clone()),
        );
    }
    if !data.secondary_button.text.is_empty() {
        buttons = buttons.child(
            Element::new("a")
                .class(format!("btn btn-{}", data.secondary_button.style))
                .attr("href", "#")
                .text(data.secondary_button.text.clone()),
        );
    }
    content = content.child(buttons);

    Some(
        Element::new("section")
            .class(format!("hero hero-{}", backdrop.class_suffix))
            .attr("style", style.trim_start())
            .children(backdrop.layers)
            .child(container().child(content))
            .into(),
    )
}

pub(crate) fn render_enhanced_features(data: &FeaturesData) -> Option<Node> {
    if !data.enabled {
        return None;
    }

    let mut header = Element::new("div")
        .class("section-header")
        .child(Element::new("h2").class("section-title").text(data.title.clone()));
    if !data.subtitle.is_empty() {
        header = header.child(
            Element::new("p")
                .class("section-subtitle")
                .text(data.subtitle.clone()),
        );
    }

    let grid = Element::new("div").class("features-grid").children(
        data.items.iter().map(|item| {
            let mut tile = Element::new("div")
                .class("feature-item")
                .child(Element::new("div").class("feature-icon").text(item.icon.clone()))
                .child(Element::new("h3").class("feature-title").text(item.title.clone()))
                .child(
                    Element::new("p")
                        .class("feature-description")
                        .text(item.description.clone()),
                );
            if let Some(link) = &item.link
                && !link.text.is_empty()
            {
                tile = tile.child(
                    Element::new("a")
                        .class("feature-link")
                        .attr("href", "#")
                        .text(format!("{} →", link.text)),
                );
            }
            tile.into()
        }),
    );

    Some(
        Element::new("section")
            .class("features")
            .child(container().child(header).child(grid))
            .into(),
    )
}

pub(crate) fn render_about(data: &AboutData) -> Option<Node> {
    if !data.enabled {
        return None;
    }

    let mut text_column = Element::new("div")
        .class("about-text")
        .child(Element::new("h2").class("section-title").text(data.title.clone()))
        .child(
            Element::new("div")
                .class("about-description")
                .child(raw(data.content.clone())),
        );
    if !data.cta.text.is_empty() {
        text_column = text_column.child(
            Element::new("a")
                .class("btn btn-primary")
                .attr("href", "#")
                .text(data.cta.text.clone()),
        );
    }

    let mut content = Element::new("div").class("about-content").child(text_column);
    if !data.image.is_empty() {
        content = content.child(
            Element::new("div").class("about-image").child(
                Element::new("img")
                    .attr("src", data.image.clone())
                    .attr("alt", data.title.clone()),
            ),
        );
    }

    Some(
        Element::new("section")
            .class("about")
            .child(container().child(content))
            .into(),
    )
}

pub(crate) fn render_cta(data: &CtaData) -> Option<Node> {
    if !data.enabled {
        return None;
    }

    let mut content = Element::new("div")
        .class("cta-content")
        .child(Element::new("h2").class("cta-title").text(data.title.clone()));
    if !data.subtitle.is_empty() {
        content = content.child(
            Element::new("p")
                .class("cta-subtitle")
                .text(data.subtitle.clone()),
        );
    }

    let mut buttons = Element::new("div").class("cta-buttons");
    if !data.primary_button.text.is_empty() {
        buttons = buttons.child(
            Element::new("a")
                .class("btn btn-primary")
                .attr("href", "#")
                .text(data.primary_button.text.clone()),
        );
    }
    if !data.secondary_button.text.is_empty() {
        buttons = buttons.child(
            Element::new("a")
                .class("btn btn-secondary")
                .attr("href", "#")
                .text(data.secondary_button.text.clone()),
        );
    }
    content = content.child(buttons);

    Some(
        Element::new("section")
            .class(format!("cta-section cta-{}", data.background))
            .child(container().child(content))
            .into(),
    )
}

pub(crate) fn render_testimonials(data: &TestimonialsData) -> Option<Node> {
    if !data.enabled {
        return None;
    }

    let grid = Element::new("div").class("testimonials-grid").children(
        data.items.iter().map(|item| {
            let mut author = Element::new("div").class("testimonial-author");
            if !item.photo.is_empty() {
                author = author.child(
                    Element::new("img")
                        .class("testimonial-photo")
                        .attr("src", item.photo.clone())
                        .attr("alt", item.name.clone()),
                );
            }
            let mut info = Element::new("div").class("testimonial-info").child(
                Element::new("strong")
                    .class("testimonial-name")
                    .text(item.name.clone()),
            );
            if !item.title.is_empty() {
                info = info.child(
                    Element::new("span")
                        .class("testimonial-title")
                        .text(item.title.clone()),
                );
            }

            Element::new("div")
                .class("testimonial-item")
                .child(
                    Element::new("blockquote")
                        .class("testimonial-quote")
                        .text(format!("\"{}\"", item.quote)),
                )
                .child(author.child(info))
                .into()
        }),
    );

    Some(
        Element::new("section")
            .class("testimonials")
            .child(
                container()
                    .child(Element::new("h2").class("section-title").text(data.title.clone()))
                    .child(grid),
            )
            .into(),
    )
}
