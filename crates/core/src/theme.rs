//! Theme resolution.
//!
//! The theme context is the cross-cutting presentation state shared by
//! every section renderer in one pass: colors, font, branding,
//! navigation, analytics. It is built once per render cycle with the
//! same three-tier precedence as section normalization and never
//! mutated afterwards.

use crate::assets::AssetResolver;
use crate::entry::EntrySource;
use crate::normalize::normalize_navigation;
use crate::resolve::{field, resolve_asset, resolve_bool, resolve_string};
use crate::section::NavigationItem;
use crate::snapshot::Snapshot;
use serde::Serialize;
use serde_json::Value;

/// Shared presentation context for one render pass. Read-only once
/// built; section renderers are pure over `(data, theme)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeContext {
    /// Page background color.
    pub bg: String,
    /// Body text color.
    pub text: String,
    /// Primary brand color.
    pub primary: String,
    /// Accent color.
    pub accent: String,
    /// Font family name.
    pub font: String,
    /// Site title used in header, footer and copyright line.
    pub site_title: String,
    /// Resolved logo URL, absent when no logo is configured.
    pub logo: Option<String>,
    /// Site navigation in display order.
    pub navigation: Vec<NavigationItem>,
    /// Analytics settings (previewed as a status badge only).
    pub analytics: AnalyticsSettings,
}

/// Normalized analytics configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyticsSettings {
    /// Master switch.
    pub enabled: bool,
    /// Measurement ID; empty when not configured.
    pub ga4_id: String,
    /// Whether a consent banner gates tracking.
    pub cookie_consent: bool,
    /// Whether outbound link clicks are tracked.
    pub track_external_links: bool,
    /// Whether file downloads are tracked.
    pub track_downloads: bool,
    /// Whether e-commerce events are tracked.
    pub enhanced_ecommerce: bool,
    /// Whether debug mode is on.
    pub debug_mode: bool,
}

/// Builds the theme context for one render pass.
///
/// Colors live under `colors.*` in the editor form but flat on the
/// snapshot theme; the font under `typography.font`; branding under
/// `branding.*`. Navigation prefers the editor's `nav` list, then the
/// snapshot theme's, then the snapshot's top-level navigation.
pub fn resolve_theme(
    entry: &dyn EntrySource,
    snapshot: &Snapshot,
    assets: &dyn AssetResolver,
) -> ThemeContext {
    ThemeContext {
        bg: resolve_string(
            entry.get(&["colors", "bg"]),
            snapshot.theme_field("bg"),
            "#ffffff",
        ),
        text: resolve_string(
            entry.get(&["colors", "text"]),
            snapshot.theme_field("text"),
            "#333333",
        ),
        primary: resolve_string(
            entry.get(&["colors", "primary"]),
            snapshot.theme_field("primary"),
            "#2563eb",
        ),
        accent: resolve_string(
            entry.get(&["colors", "accent"]),
            snapshot.theme_field("accent"),
            "#10b981",
        ),
        font: resolve_string(
            entry.get(&["typography", "font"]),
            snapshot.theme_field("font"),
            "Inter",
        ),
        site_title: resolve_string(
            entry.get(&["branding", "site_title"]),
            snapshot.theme_field("site_title"),
            "Your Site",
        ),
        logo: resolve_asset(
            entry.get(&["branding", "logo"]),
            snapshot.theme_field("logo"),
            assets,
        ),
        navigation: resolve_navigation(entry, snapshot),
        analytics: resolve_analytics(
            entry.get(&["analytics"]),
            snapshot.theme_field("analytics"),
        ),
    }
}

fn resolve_navigation(entry: &dyn EntrySource, snapshot: &Snapshot) -> Vec<NavigationItem> {
    let editor = entry.get(&["nav"]);
    let theme = snapshot.theme_field("nav");
    if editor.and_then(Value::as_array).is_some() || theme.and_then(Value::as_array).is_some() {
        normalize_navigation(editor, theme)
    } else {
        snapshot.navigation().to_vec()
    }
}

fn resolve_analytics(editor: Option<&Value>, published: Option<&Value>) -> AnalyticsSettings {
    AnalyticsSettings {
        enabled: resolve_bool(field(editor, "enabled"), field(published, "enabled"), false),
        ga4_id: resolve_string(field(editor, "ga4_id"), field(published, "ga4_id"), ""),
        cookie_consent: resolve_bool(
            field(editor, "cookie_consent"),
            field(published, "cookie_consent"),
            true,
        ),
        track_external_links: resolve_bool(
            field(editor, "track_external_links"),
            field(published, "track_external_links"),
            true,
        ),
        track_downloads: resolve_bool(
            field(editor, "track_downloads"),
            field(published, "track_downloads"),
            true,
        ),
        enhanced_ecommerce: resolve_bool(
            field(editor, "enhanced_ecommerce"),
            field(published, "enhanced_ecommerce"),
            false,
        ),
        debug_mode: resolve_bool(
            field(editor, "debug_mode"),
            field(published, "debug_mode"),
            false,
        ),
    }
}
