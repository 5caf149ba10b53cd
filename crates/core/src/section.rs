//! Section data model.
//!
//! [`SectionKind`] is a closed set: adding a kind means adding a
//! variant here plus a normalizer and a renderer, and the exhaustive
//! matches in both force the update at compile time. The data structs
//! are the *normalized* shapes: after [`crate::normalize`] every field
//! is present (possibly empty or disabled), so renderers never branch
//! on absence beyond each section's `enabled` gate.

use serde::{Serialize, Serializer};

/// Closed set of section kinds the preview can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    /// Site header with logo, title and navigation.
    SiteHeader,
    /// Simple hero: title, subtitle, one button. Deprecated subset of
    /// [`SectionKind::EnhancedHero`] without background variants.
    Hero,
    /// Simple features grid. Deprecated subset of
    /// [`SectionKind::EnhancedFeatures`].
    FeaturesGrid,
    /// Long-form page content (pre-rendered markup).
    PageContent,
    /// Site footer with quick links and copyright line.
    SiteFooter,
    /// Hero with gradient/image/video background compositing.
    EnhancedHero,
    /// Features grid with subtitle and per-item links.
    EnhancedFeatures,
    /// About section with markup content, image and call-to-action.
    About,
    /// Call-to-action banner.
    Cta,
    /// Testimonial quotes grid.
    Testimonials,
}

impl SectionKind {
    /// Every kind, in registry order.
    pub const ALL: [SectionKind; 10] = [
        SectionKind::SiteHeader,
        SectionKind::Hero,
        SectionKind::FeaturesGrid,
        SectionKind::PageContent,
        SectionKind::SiteFooter,
        SectionKind::EnhancedHero,
        SectionKind::EnhancedFeatures,
        SectionKind::About,
        SectionKind::Cta,
        SectionKind::Testimonials,
    ];

    /// Parses a snapshot `type` string. Unknown strings yield `None`;
    /// callers skip the section and record a diagnostic.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "site-header" => Some(SectionKind::SiteHeader),
            "hero-section" => Some(SectionKind::Hero),
            "features-grid" => Some(SectionKind::FeaturesGrid),
            "page-content" => Some(SectionKind::PageContent),
            "site-footer" => Some(SectionKind::SiteFooter),
            "enhanced-hero" => Some(SectionKind::EnhancedHero),
            "enhanced-features" => Some(SectionKind::EnhancedFeatures),
            "about-section" => Some(SectionKind::About),
            "cta-section" => Some(SectionKind::Cta),
            "testimonials-section" => Some(SectionKind::Testimonials),
            _ => None,
        }
    }

    /// The wire name used in snapshot `type` fields.
    pub fn name(self) -> &'static str {
        match self {
            SectionKind::SiteHeader => "site-header",
            SectionKind::Hero => "hero-section",
            SectionKind::FeaturesGrid => "features-grid",
            SectionKind::PageContent => "page-content",
            SectionKind::SiteFooter => "site-footer",
            SectionKind::EnhancedHero => "enhanced-hero",
            SectionKind::EnhancedFeatures => "enhanced-features",
            SectionKind::About => "about-section",
            SectionKind::Cta => "cta-section",
            SectionKind::Testimonials => "testimonials-section",
        }
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One navigation link. Order within the list is display-significant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationItem {
    /// Visible label.
    pub name: String,
    /// Link target.
    pub url: String,
}

/// A plain link button (text + target).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ButtonData {
    /// Button label; an empty label means the button is not rendered.
    pub text: String,
    /// Link target.
    pub url: String,
}

/// A button with a style class suffix (`btn-primary`, `btn-outline`, …).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyledButtonData {
    /// Button label; an empty label means the button is not rendered.
    pub text: String,
    /// Link target.
    pub url: String,
    /// Style suffix appended to the `btn-` class.
    pub style: String,
}

/// Normalized site header data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteHeaderData {
    /// Site title shown next to the logo.
    pub title: String,
    /// Resolved logo URL, absent when no logo is configured.
    pub logo: Option<String>,
    /// Navigation links in display order.
    pub navigation: Vec<NavigationItem>,
    /// Whether the mobile menu toggle button is rendered.
    pub show_mobile_menu: bool,
}

/// Normalized simple hero data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeroData {
    /// Section gate.
    pub enabled: bool,
    /// Headline.
    pub title: String,
    /// Secondary line; empty when not configured.
    pub subtitle: String,
    /// Single call-to-action button.
    pub button: ButtonData,
}

/// One feature tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureItem {
    /// Icon glyph shown above the title.
    pub icon: String,
    /// Tile title; may be empty.
    pub title: String,
    /// Tile body text; may be empty.
    pub description: String,
    /// Optional "read more" link (enhanced grid only).
    pub link: Option<ButtonData>,
}

/// Normalized features grid data, shared by the simple and enhanced
/// grids (the simple renderer ignores `subtitle` and `link`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeaturesData {
    /// Section gate.
    pub enabled: bool,
    /// Grid heading.
    pub title: String,
    /// Grid subheading; empty when not configured.
    pub subtitle: String,
    /// Feature tiles in display order.
    pub items: Vec<FeatureItem>,
}

/// Normalized long-form content data. The markup is produced by the
/// markdown collaborator (or carried pre-rendered in the snapshot) and
/// inserted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageContentData {
    /// Pre-rendered markup; an empty string skips the section.
    pub content: String,
}

/// Normalized site footer data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteFooterData {
    /// Site title repeated in the footer and the copyright line.
    pub site_title: String,
    /// Short site description; empty when not configured.
    pub description: String,
    /// Quick links.
    pub navigation: Vec<NavigationItem>,
}

/// Normalized enhanced hero data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnhancedHeroData {
    /// Section gate.
    pub enabled: bool,
    /// Headline.
    pub title: String,
    /// Secondary headline; empty when not configured.
    pub subtitle: String,
    /// Pre-rendered markup below the headline; empty when not configured.
    pub description: String,
    /// Primary call-to-action.
    pub primary_button: StyledButtonData,
    /// Secondary call-to-action.
    pub secondary_button: StyledButtonData,
    /// Background layer selection.
    pub background: Background,
}

/// Normalized about-section data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AboutData {
    /// Section gate.
    pub enabled: bool,
    /// Heading.
    pub title: String,
    /// Pre-rendered markup body.
    pub content: String,
    /// Resolved image URL; empty when no image is configured.
    pub image: String,
    /// Call-to-action link.
    pub cta: ButtonData,
}

/// Normalized call-to-action banner data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CtaData {
    /// Section gate.
    pub enabled: bool,
    /// Background style name, appended to the `cta-` class.
    pub background: String,
    /// Heading.
    pub title: String,
    /// Subheading; empty when not configured.
    pub subtitle: String,
    /// Primary button.
    pub primary_button: ButtonData,
    /// Secondary button.
    pub secondary_button: ButtonData,
}

/// One testimonial quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestimonialItem {
    /// Quote body.
    pub quote: String,
    /// Author name.
    pub name: String,
    /// Author role or company; empty when not configured.
    pub title: String,
    /// Resolved photo URL; empty when no photo is configured.
    pub photo: String,
}

/// Normalized testimonials data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestimonialsData {
    /// Section gate.
    pub enabled: bool,
    /// Heading.
    pub title: String,
    /// Quotes in display order.
    pub items: Vec<TestimonialItem>,
}

/// A normalized section, tagged by kind.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionData {
    /// Site header.
    SiteHeader(SiteHeaderData),
    /// Simple hero.
    Hero(HeroData),
    /// Simple features grid.
    FeaturesGrid(FeaturesData),
    /// Long-form content.
    PageContent(PageContentData),
    /// Site footer.
    SiteFooter(SiteFooterData),
    /// Enhanced hero.
    EnhancedHero(EnhancedHeroData),
    /// Enhanced features grid.
    EnhancedFeatures(FeaturesData),
    /// About section.
    About(AboutData),
    /// Call-to-action banner.
    Cta(CtaData),
    /// Testimonials.
    Testimonials(TestimonialsData),
}

impl SectionData {
    /// The kind this data belongs to.
    pub fn kind(&self) -> SectionKind {
        match self {
            SectionData::SiteHeader(_) => SectionKind::SiteHeader,
            SectionData::Hero(_) => SectionKind::Hero,
            SectionData::FeaturesGrid(_) => SectionKind::FeaturesGrid,
            SectionData::PageContent(_) => SectionKind::PageContent,
            SectionData::SiteFooter(_) => SectionKind::SiteFooter,
            SectionData::EnhancedHero(_) => SectionKind::EnhancedHero,
            SectionData::EnhancedFeatures(_) => SectionKind::EnhancedFeatures,
            SectionData::About(_) => SectionKind::About,
            SectionData::Cta(_) => SectionKind::Cta,
            SectionData::Testimonials(_) => SectionKind::Testimonials,
        }
    }
}

/// Gradient direction formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum GradientStyle {
    /// `linear-gradient(to right, …)`.
    LinearLr,
    /// `linear-gradient(to bottom, …)`.
    LinearTb,
    /// `linear-gradient(135deg, …)`.
    LinearDiagonal,
    /// `radial-gradient(circle at center, …)`.
    RadialCenter,
    /// `radial-gradient(circle at top left, …)`.
    RadialCorner,
}

impl GradientStyle {
    /// Parses a wire style name. Unknown names take the diagonal
    /// formula, matching the renderer's catch-all.
    pub fn parse(name: &str) -> Self {
        match name {
            "linear-lr" => GradientStyle::LinearLr,
            "linear-tb" => GradientStyle::LinearTb,
            "linear-diagonal" => GradientStyle::LinearDiagonal,
            "radial-center" => GradientStyle::RadialCenter,
            "radial-corner" => GradientStyle::RadialCorner,
            _ => GradientStyle::LinearDiagonal,
        }
    }
}

/// Gradient background parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GradientBackground {
    /// Direction formula.
    pub style: GradientStyle,
    /// First color stop.
    pub color1: String,
    /// Second color stop.
    pub color2: String,
    /// Optional third stop; empty when the gradient has only two stops.
    pub color3: String,
}

/// Image background parameters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageBackground {
    /// Resolved image URL; empty when the reference was unusable.
    pub src: String,
    /// CSS `background-position` value.
    pub position: String,
    /// CSS `background-size` value.
    pub size: String,
    /// Whether a darkening overlay is composited above the image.
    pub overlay: bool,
    /// Overlay opacity in `0.0..=1.0`; `0` is explicit full transparency.
    pub overlay_opacity: f64,
}

/// Video background parameters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoBackground {
    /// Resolved video URL; empty when the reference was unusable.
    pub src: String,
    /// Resolved poster image URL; empty when not configured.
    pub poster: String,
    /// Whether the video starts playing automatically.
    pub autoplay: bool,
    /// Whether playback loops.
    #[serde(rename = "loop")]
    pub loop_playback: bool,
    /// Whether a darkening overlay is composited above the video.
    pub overlay: bool,
    /// Overlay opacity in `0.0..=1.0`.
    pub overlay_opacity: f64,
}

/// Hero background. Exactly one variant is active per hero, selected by
/// the snapshot's `type` discriminant. Unknown discriminants are
/// preserved so the renderer can apply its theme-colored fallback.
#[derive(Debug, Clone, PartialEq)]
pub enum Background {
    /// CSS gradient expression.
    Gradient(GradientBackground),
    /// Image layer with optional darkening overlay.
    Image(ImageBackground),
    /// Video layer with optional darkening overlay.
    Video(VideoBackground),
    /// Unrecognized discriminant; composited as a theme-colored gradient.
    Unsupported {
        /// The unrecognized `type` string.
        kind: String,
    },
}

// Serialized in the snapshot wire shape ({"type": ..., "<variant>": ...})
// so a normalized background re-normalizes to itself.
impl Serialize for Background {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(None)?;
        match self {
            Background::Gradient(gradient) => {
                map.serialize_entry("type", "gradient")?;
                map.serialize_entry("gradient", gradient)?;
            }
            Background::Image(image) => {
                map.serialize_entry("type", "image")?;
                map.serialize_entry("image", image)?;
            }
            Background::Video(video) => {
                map.serialize_entry("type", "video")?;
                map.serialize_entry("video", video)?;
            }
            Background::Unsupported { kind } => {
                map.serialize_entry("type", kind)?;
            }
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn kind_names_round_trip() {
        for kind in SectionKind::ALL {
            assert_eq!(SectionKind::parse(kind.name()), Some(kind));
        }
        assert_eq!(SectionKind::parse("parallax-section"), None);
    }

    #[test]
    fn gradient_style_parse_defaults_to_diagonal() {
        assert_eq!(GradientStyle::parse("linear-lr"), GradientStyle::LinearLr);
        assert_eq!(
            GradientStyle::parse("radial-corner"),
            GradientStyle::RadialCorner
        );
        assert_eq!(
            GradientStyle::parse("spiral"),
            GradientStyle::LinearDiagonal
        );
    }

    #[test]
    fn background_serializes_in_wire_shape() {
        let bg = Background::Gradient(GradientBackground {
            style: GradientStyle::LinearLr,
            color1: "#111".to_string(),
            color2: "#222".to_string(),
            color3: String::new(),
        });
        assert_eq!(
            serde_json::to_value(&bg).unwrap(),
            json!({
                "type": "gradient",
                "gradient": {
                    "style": "linear-lr",
                    "color1": "#111",
                    "color2": "#222",
                    "color3": ""
                }
            })
        );

        let bg = Background::Unsupported {
            kind: "parallax".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&bg).unwrap(),
            json!({ "type": "parallax" })
        );
    }

    #[test]
    fn video_serializes_loop_under_wire_name() {
        let bg = Background::Video(VideoBackground {
            src: "/v.mp4".to_string(),
            poster: String::new(),
            autoplay: true,
            loop_playback: false,
            overlay: true,
            overlay_opacity: 0.6,
        });
        let value = serde_json::to_value(&bg).unwrap();
        assert_eq!(value["video"]["loop"], json!(false));
    }
}
