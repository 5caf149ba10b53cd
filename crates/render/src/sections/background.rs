//! Enhanced hero background compositing.
//!
//! Exactly one background strategy is applied per hero: a gradient CSS
//! expression, an image layer, or a video layer (the latter two with an
//! optional darkening overlay). A hero whose discriminant is
//! unsupported, or whose image/video reference resolved to nothing,
//! falls back to a gradient built from the theme's primary and accent
//! colors.

use crate::html::{Element, Node};
use cmsview_core::{
    Background, GradientBackground, GradientStyle, ImageBackground, RenderDiagnostics,
    RenderWarning, ThemeContext, VideoBackground,
};

/// Composited background for one hero render.
#[derive(Debug, Clone, PartialEq)]
pub struct HeroBackdrop {
    /// Discriminant string appended to the `hero-` class.
    pub class_suffix: String,
    /// CSS declarations applied to the section element.
    pub style: String,
    /// Absolutely-positioned layer nodes rendered before the content.
    pub layers: Vec<Node>,
}

/// Builds the gradient CSS expression for a gradient background.
///
/// An empty third color is omitted from the expression, never
/// substituted.
pub fn gradient_css(gradient: &GradientBackground) -> String {
    let mut stops = format!("{}, {}", gradient.color1, gradient.color2);
    if !gradient.color3.is_empty() {
        stops.push_str(", ");
        stops.push_str(&gradient.color3);
    }

    match gradient.style {
        GradientStyle::LinearLr => format!("linear-gradient(to right, {stops})"),
        GradientStyle::LinearTb => format!("linear-gradient(to bottom, {stops})"),
        GradientStyle::LinearDiagonal => format!("linear-gradient(135deg, {stops})"),
        GradientStyle::RadialCenter => format!("radial-gradient(circle at center, {stops})"),
        GradientStyle::RadialCorner => format!("radial-gradient(circle at top left, {stops})"),
    }
}

/// The theme-colored fallback expression for unsupported backgrounds.
pub fn theme_gradient_css(theme: &ThemeContext) -> String {
    format!(
        "linear-gradient(135deg, {}, {})",
        theme.primary, theme.accent
    )
}

/// Selects and builds the one active background strategy.
pub fn compose_background(
    background: &Background,
    theme: &ThemeContext,
    diagnostics: &mut RenderDiagnostics,
) -> HeroBackdrop {
    match background {
        Background::Gradient(gradient) => HeroBackdrop {
            class_suffix: "gradient".to_string(),
            style: format!("background: {};", gradient_css(gradient)),
            layers: Vec::new(),
        },
        Background::Image(image) if !image.src.is_empty() => compose_image(image),
        Background::Video(video) if !video.src.is_empty() => compose_video(video),
        Background::Image(_) => {
            diagnostics.push(RenderWarning::MissingAssetReference {
                section: "enhanced-hero",
                field: "background.image.src",
            });
            theme_fallback("image", theme)
        }
        Background::Video(_) => {
            diagnostics.push(RenderWarning::MissingAssetReference {
                section: "enhanced-hero",
                field: "background.video.src",
            });
            theme_fallback("video", theme)
        }
        Background::Unsupported { kind } => {
            log::debug!("unsupported hero background type '{kind}', using theme gradient");
            theme_fallback(kind, theme)
        }
    }
}

fn theme_fallback(class_suffix: &str, theme: &ThemeContext) -> HeroBackdrop {
    HeroBackdrop {
        class_suffix: class_suffix.to_string(),
        style: format!("background: {};", theme_gradient_css(theme)),
        layers: Vec::new(),
    }
}

fn compose_image(image: &ImageBackground) -> HeroBackdrop {
    let style = format!(
        "background-image: url({}); background-position: {}; background-size: {}; background-repeat: no-repeat;",
        image.src, image.position, image.size
    );
    let layers = if image.overlay {
        vec![overlay_layer(image.overlay_opacity)]
    } else {
        Vec::new()
    };

    HeroBackdrop {
        class_suffix: "image".to_string(),
        style,
        layers,
    }
}

fn compose_video(video: &VideoBackground) -> HeroBackdrop {
    let mut player = Element::new("video")
        .flag("muted")
        .flag("playsinline")
        .attr(
            "style",
            "width: 100%; height: 100%; object-fit: cover; object-position: center;",
        );
    if video.autoplay {
        player = player.flag("autoplay");
    }
    if video.loop_playback {
        player = player.flag("loop");
    }
    player = player.child(
        Element::new("source")
            .attr("src", video.src.clone())
            .attr("type", "video/mp4"),
    );
    if !video.poster.is_empty() {
        player = player.child(
            Element::new("img")
                .attr("src", video.poster.clone())
                .attr("alt", "Hero background")
                .attr("style", "width: 100%; height: 100%; object-fit: cover;"),
        );
    }

    let mut layers = vec![
        Element::new("div")
            .class("hero-video")
            .attr(
                "style",
                "position: absolute; top: 0; left: 0; width: 100%; height: 100%; z-index: -2; overflow: hidden;",
            )
            .child(player)
            .into(),
    ];
    if video.overlay {
        layers.push(overlay_layer(video.overlay_opacity));
    }

    HeroBackdrop {
        class_suffix: "video".to_string(),
        style: String::new(),
        layers,
    }
}

fn overlay_layer(opacity: f64) -> Node {
    Element::new("div")
        .class("hero-overlay")
        .attr(
            "style",
            format!(
                "position: absolute; top: 0; left: 0; width: 100%; height: 100%; background: rgba(0, 0, 0, {opacity}); z-index: 1;"
            ),
        )
        .into()
}
