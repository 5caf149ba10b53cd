//! Per-section normalizers.
//!
//! `normalize` reconciles the in-progress editor value and the
//! published default into one complete, renderable record. Resolution
//! is per field (see [`crate::resolve`]); the hardcoded fallbacks live
//! here, next to the record they complete. List elements are normalized
//! individually: the chosen list's elements receive literal fallbacks
//! for whatever fields they omit, but lists themselves are never merged
//! across sources.

use crate::assets::AssetResolver;
use crate::resolve::{field, resolve_asset, resolve_bool, resolve_f64, resolve_list, resolve_string};
use crate::section::{
    AboutData, Background, ButtonData, CtaData, EnhancedHeroData, FeatureItem, FeaturesData,
    GradientBackground, GradientStyle, HeroData, ImageBackground, NavigationItem, PageContentData,
    SectionData, SectionKind, SiteFooterData, SiteHeaderData, StyledButtonData, TestimonialItem,
    TestimonialsData, VideoBackground,
};
use serde_json::Value;

/// Produces the complete, type-consistent record for one section.
///
/// `editor` is the raw in-progress value for this section (absent when
/// the entry does not cover it), `published` the section's default from
/// the snapshot. Either side may be missing, malformed, or partial; the
/// result is always total.
pub fn normalize(
    kind: SectionKind,
    editor: Option<&Value>,
    published: Option<&Value>,
    assets: &dyn AssetResolver,
) -> SectionData {
    match kind {
        SectionKind::SiteHeader => {
            SectionData::SiteHeader(normalize_site_header(editor, published, assets))
        }
        SectionKind::Hero => SectionData::Hero(normalize_hero(editor, published)),
        SectionKind::FeaturesGrid => {
            SectionData::FeaturesGrid(normalize_features(editor, published))
        }
        SectionKind::PageContent => {
            SectionData::PageContent(normalize_page_content(editor, published))
        }
        SectionKind::SiteFooter => {
            SectionData::SiteFooter(normalize_site_footer(editor, published))
        }
        SectionKind::EnhancedHero => {
            SectionData::EnhancedHero(normalize_enhanced_hero(editor, published, assets))
        }
        SectionKind::EnhancedFeatures => {
            SectionData::EnhancedFeatures(normalize_features(editor, published))
        }
        SectionKind::About => SectionData::About(normalize_about(editor, published, assets)),
        SectionKind::Cta => SectionData::Cta(normalize_cta(editor, published)),
        SectionKind::Testimonials => {
            SectionData::Testimonials(normalize_testimonials(editor, published, assets))
        }
    }
}

/// Entry path carrying the editor's override for a section kind, or
/// `None` for kinds the editor form has no direct field for.
///
/// The hero and features paths are shared between the simple and
/// enhanced kinds; the layout decides which renderer consumes them.
pub fn entry_section_path(kind: SectionKind) -> Option<&'static [&'static str]> {
    match kind {
        SectionKind::Hero | SectionKind::EnhancedHero => Some(&["hero"]),
        SectionKind::FeaturesGrid | SectionKind::EnhancedFeatures => Some(&["features"]),
        SectionKind::About => Some(&["about"]),
        SectionKind::Cta => Some(&["cta_section"]),
        SectionKind::Testimonials => Some(&["testimonials"]),
        SectionKind::SiteHeader | SectionKind::PageContent | SectionKind::SiteFooter => None,
    }
}

fn normalize_site_header(
    editor: Option<&Value>,
    published: Option<&Value>,
    assets: &dyn AssetResolver,
) -> SiteHeaderData {
    SiteHeaderData {
        title: resolve_string(field(editor, "title"), field(published, "title"), "Your Site"),
        logo: resolve_asset(field(editor, "logo"), field(published, "logo"), assets),
        navigation: normalize_navigation(field(editor, "navigation"), field(published, "navigation")),
        show_mobile_menu: resolve_bool(
            field(editor, "show_mobile_menu"),
            field(published, "show_mobile_menu"),
            false,
        ),
    }
}

fn normalize_hero(editor: Option<&Value>, published: Option<&Value>) -> HeroData {
    HeroData {
        enabled: resolve_bool(field(editor, "enabled"), field(published, "enabled"), true),
        title: resolve_string(
            field(editor, "title"),
            field(published, "title"),
            "Welcome to Your Website",
        ),
        subtitle: resolve_string(field(editor, "subtitle"), field(published, "subtitle"), ""),
        button: normalize_button(field(editor, "button"), field(published, "button"), "", "/"),
    }
}

fn normalize_features(editor: Option<&Value>, published: Option<&Value>) -> FeaturesData {
    let items = resolve_list(field(editor, "items"), field(published, "items"))
        .iter()
        .map(normalize_feature_item)
        .collect();

    FeaturesData {
        enabled: resolve_bool(field(editor, "enabled"), field(published, "enabled"), true),
        title: resolve_string(field(editor, "title"), field(published, "title"), "Key Features"),
        subtitle: resolve_string(field(editor, "subtitle"), field(published, "subtitle"), ""),
        items,
    }
}

fn normalize_feature_item(item: &Value) -> FeatureItem {
    let item = Some(item);
    FeatureItem {
        icon: resolve_string(field(item, "icon"), None, "⭐"),
        title: resolve_string(field(item, "title"), None, ""),
        description: resolve_string(field(item, "description"), None, ""),
        link: field(item, "link").map(|link| normalize_button(Some(link), None, "", "/")),
    }
}

fn normalize_page_content(editor: Option<&Value>, published: Option<&Value>) -> PageContentData {
    PageContentData {
        content: resolve_string(field(editor, "content"), field(published, "content"), ""),
    }
}

fn normalize_site_footer(editor: Option<&Value>, published: Option<&Value>) -> SiteFooterData {
    SiteFooterData {
        site_title: resolve_string(
            field(editor, "site_title"),
            field(published, "site_title"),
            "Your Site",
        ),
        description: resolve_string(
            field(editor, "description"),
            field(published, "description"),
            "",
        ),
        navigation: normalize_navigation(field(editor, "navigation"), field(published, "navigation")),
    }
}

fn normalize_enhanced_hero(
    editor: Option<&Value>,
    published: Option<&Value>,
    assets: &dyn AssetResolver,
) -> EnhancedHeroData {
    EnhancedHeroData {
        enabled: resolve_bool(field(editor, "enabled"), field(published, "enabled"), true),
        title: resolve_string(
            field(editor, "title"),
            field(published, "title"),
            "Welcome to Your Website",
        ),
        subtitle: resolve_string(field(editor, "subtitle"), field(published, "subtitle"), ""),
        description: resolve_string(
            field(editor, "description"),
            field(published, "description"),
            "",
        ),
        primary_button: normalize_styled_button(
            field(editor, "primary_button"),
            field(published, "primary_button"),
            "Get Started",
            "/",
            "primary",
        ),
        secondary_button: normalize_styled_button(
            field(editor, "secondary_button"),
            field(published, "secondary_button"),
            "",
            "/",
            "secondary",
        ),
        background: normalize_background(
            field(editor, "background"),
            field(published, "background"),
            assets,
        ),
    }
}

fn normalize_about(
    editor: Option<&Value>,
    published: Option<&Value>,
    assets: &dyn AssetResolver,
) -> AboutData {
    AboutData {
        enabled: resolve_bool(field(editor, "enabled"), field(published, "enabled"), false),
        title: resolve_string(field(editor, "title"), field(published, "title"), "About Us"),
        content: resolve_string(field(editor, "content"), field(published, "content"), ""),
        image: resolve_asset(field(editor, "image"), field(published, "image"), assets)
            .unwrap_or_default(),
        cta: normalize_button(field(editor, "cta"), field(published, "cta"), "", "/about/"),
    }
}

fn normalize_cta(editor: Option<&Value>, published: Option<&Value>) -> CtaData {
    CtaData {
        enabled: resolve_bool(field(editor, "enabled"), field(published, "enabled"), false),
        background: resolve_string(
            field(editor, "background"),
            field(published, "background"),
            "primary",
        ),
        title: resolve_string(
            field(editor, "title"),
            field(published, "title"),
            "Ready to Get Started?",
        ),
        subtitle: resolve_string(field(editor, "subtitle"), field(published, "subtitle"), ""),
        primary_button: normalize_button(
            field(editor, "primary_button"),
            field(published, "primary_button"),
            "Get Started",
            "/contact/",
        ),
        secondary_button: normalize_button(
            field(editor, "secondary_button"),
            field(published, "secondary_button"),
            "",
            "/about/",
        ),
    }
}

fn normalize_testimonials(
    editor: Option<&Value>,
    published: Option<&Value>,
    assets: &dyn AssetResolver,
) -> TestimonialsData {
    let items = resolve_list(field(editor, "items"), field(published, "items"))
        .iter()
        .map(|item| normalize_testimonial_item(item, assets))
        .collect();

    TestimonialsData {
        enabled: resolve_bool(field(editor, "enabled"), field(published, "enabled"), false),
        title: resolve_string(
            field(editor, "title"),
            field(published, "title"),
            "What Our Clients Say",
        ),
        items,
    }
}

fn normalize_testimonial_item(item: &Value, assets: &dyn AssetResolver) -> TestimonialItem {
    let item = Some(item);
    TestimonialItem {
        quote: resolve_string(field(item, "quote"), None, ""),
        name: resolve_string(field(item, "name"), None, ""),
        title: resolve_string(field(item, "title"), None, ""),
        photo: resolve_asset(field(item, "photo"), None, assets).unwrap_or_default(),
    }
}

pub(crate) fn normalize_navigation(
    editor: Option<&Value>,
    published: Option<&Value>,
) -> Vec<NavigationItem> {
    resolve_list(editor, published)
        .iter()
        .map(|item| {
            let item = Some(item);
            NavigationItem {
                name: resolve_string(field(item, "name"), None, ""),
                url: resolve_string(field(item, "url"), None, "/"),
            }
        })
        .collect()
}

fn normalize_button(
    editor: Option<&Value>,
    published: Option<&Value>,
    text_fallback: &str,
    url_fallback: &str,
) -> ButtonData {
    ButtonData {
        text: resolve_string(field(editor, "text"), field(published, "text"), text_fallback),
        url: resolve_string(field(editor, "url"), field(published, "url"), url_fallback),
    }
}

fn normalize_styled_button(
    editor: Option<&Value>,
    published: Option<&Value>,
    text_fallback: &str,
    url_fallback: &str,
    style_fallback: &str,
) -> StyledButtonData {
    StyledButtonData {
        text: resolve_string(field(editor, "text"), field(published, "text"), text_fallback),
        url: resolve_string(field(editor, "url"), field(published, "url"), url_fallback),
        style: resolve_string(
            field(editor, "style"),
            field(published, "style"),
            style_fallback,
        ),
    }
}

fn normalize_background(
    editor: Option<&Value>,
    published: Option<&Value>,
    assets: &dyn AssetResolver,
) -> Background {
    let kind = resolve_string(field(editor, "type"), field(published, "type"), "gradient");
    match kind.as_str() {
        "gradient" => {
            let editor = field(editor, "gradient");
            let published = field(published, "gradient");
            Background::Gradient(GradientBackground {
                style: GradientStyle::parse(&resolve_string(
                    field(editor, "style"),
                    field(published, "style"),
                    "linear-diagonal",
                )),
                color1: resolve_string(field(editor, "color1"), field(published, "color1"), "#667eea"),
                color2: resolve_string(field(editor, "color2"), field(published, "color2"), "#764ba2"),
                color3: resolve_string(field(editor, "color3"), field(published, "color3"), ""),
            })
        }
        "image" => {
            let editor = field(editor, "image");
            let published = field(published, "image");
            Background::Image(ImageBackground {
                src: resolve_asset(field(editor, "src"), field(published, "src"), assets)
                    .unwrap_or_default(),
                position: resolve_string(
                    field(editor, "position"),
                    field(published, "position"),
                    "center center",
                ),
                size: resolve_string(field(editor, "size"), field(published, "size"), "cover"),
                overlay: resolve_bool(field(editor, "overlay"), field(published, "overlay"), true),
                overlay_opacity: resolve_f64(
                    field(editor, "overlay_opacity"),
                    field(published, "overlay_opacity"),
                    0.5,
                ),
            })
        }
        "video" => {
            let editor = field(editor, "video");
            let published = field(published, "video");
            Background::Video(VideoBackground {
                src: resolve_asset(field(editor, "src"), field(published, "src"), assets)
                    .unwrap_or_default(),
                poster: resolve_asset(field(editor, "poster"), field(published, "poster"), assets)
                    .unwrap_or_default(),
                autoplay: resolve_bool(field(editor, "autoplay"), field(published, "autoplay"), true),
                loop_playback: resolve_bool(field(editor, "loop"), field(published, "loop"), true),
                overlay: resolve_bool(field(editor, "overlay"), field(published, "overlay"), true),
                overlay_opacity: resolve_f64(
                    field(editor, "overlay_opacity"),
                    field(published, "overlay_opacity"),
                    0.6,
                ),
            })
        }
        _ => Background::Unsupported { kind },
    }
}
