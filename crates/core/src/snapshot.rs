//! Snapshot document parsing and structural validation.
//!
//! The snapshot is the generated, read-only data document the preview
//! fetches to learn the site's published configuration:
//!
//! ```json
//! {
//!   "theme": { "bg": "#ffffff", "font": "Inter", ... },
//!   "navigation": [{ "name": "Home", "url": "/" }],
//!   "layout": {
//!     "sections": ["header", "hero"],
//!     "header": { "type": "site-header", ... },
//!     "hero": { "type": "enhanced-hero", ... }
//!   }
//! }
//! ```
//!
//! It is untrusted input: everything beyond the structural minimum
//! (a layout with a non-empty ordered section list) is handled
//! leniently, with missing pieces falling through to normalization
//! defaults.

use crate::error::StructureError;
use crate::normalize::normalize_navigation;
use crate::section::NavigationItem;
use serde_json::{Map, Value};

/// Parsed and structurally validated snapshot document.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Published theme defaults; an empty object when the snapshot
    /// carries none.
    theme: Value,
    /// Site navigation in display order.
    navigation: Vec<NavigationItem>,
    /// Ordered section keys.
    sections: Vec<String>,
    /// Per-key section payloads from the layout object.
    payloads: Map<String, Value>,
}

impl Snapshot {
    /// Parses a snapshot body, enforcing the structural minimum: a JSON
    /// object whose `layout` object names at least one section.
    pub fn parse(body: &str) -> Result<Self, StructureError> {
        let root: Value = serde_json::from_str(body)
            .map_err(|err| StructureError::Json(err.to_string()))?;
        let root = root.as_object().ok_or(StructureError::RootNotObject)?;

        let layout = root
            .get("layout")
            .and_then(Value::as_object)
            .ok_or(StructureError::MissingLayout)?;

        let sections: Vec<String> = layout
            .get("sections")
            .and_then(Value::as_array)
            .ok_or(StructureError::EmptySections)?
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect();
        if sections.is_empty() {
            return Err(StructureError::EmptySections);
        }

        let mut payloads = layout.clone();
        payloads.remove("sections");

        let theme = match root.get("theme") {
            Some(Value::Object(theme)) => Value::Object(theme.clone()),
            _ => Value::Object(Map::new()),
        };

        let navigation = normalize_navigation(root.get("navigation"), None);

        Ok(Self {
            theme,
            navigation,
            sections,
            payloads,
        })
    }

    /// Ordered section keys from the layout.
    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    /// Payload object for a section key, if the layout carries one.
    pub fn section_payload(&self, key: &str) -> Option<&Value> {
        self.payloads.get(key).filter(|v| v.is_object())
    }

    /// The published theme object.
    pub fn theme(&self) -> &Value {
        &self.theme
    }

    /// A field of the published theme, with JSON `null` as absent.
    pub fn theme_field(&self, key: &str) -> Option<&Value> {
        self.theme.get(key).filter(|v| !v.is_null())
    }

    /// Site navigation in display order.
    pub fn navigation(&self) -> &[NavigationItem] {
        &self.navigation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_a_minimal_snapshot() {
        let snapshot = Snapshot::parse(
            r#"{
                "theme": { "font": "Inter" },
                "navigation": [{ "name": "Home", "url": "/" }],
                "layout": { "sections": ["header"], "header": { "type": "site-header" } }
            }"#,
        )
        .unwrap();

        assert_eq!(snapshot.sections(), ["header".to_string()]);
        assert_eq!(
            snapshot.theme_field("font"),
            Some(&serde_json::json!("Inter"))
        );
        assert_eq!(
            snapshot.navigation(),
            [NavigationItem {
                name: "Home".to_string(),
                url: "/".to_string()
            }]
        );
        assert!(snapshot.section_payload("header").is_some());
        assert!(snapshot.section_payload("hero").is_none());
    }

    #[test]
    fn rejects_non_json_bodies() {
        match Snapshot::parse("<html>502 Bad Gateway</html>") {
            Err(StructureError::Json(_)) => {}
            other => panic!("expected Json error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_non_object_roots() {
        assert_eq!(
            Snapshot::parse("[1, 2, 3]"),
            Err(StructureError::RootNotObject)
        );
    }

    #[test]
    fn rejects_missing_layout() {
        assert_eq!(
            Snapshot::parse(r#"{ "theme": {} }"#),
            Err(StructureError::MissingLayout)
        );
    }

    #[test]
    fn rejects_empty_section_lists() {
        assert_eq!(
            Snapshot::parse(r#"{ "layout": { "sections": [] } }"#),
            Err(StructureError::EmptySections)
        );
        assert_eq!(
            Snapshot::parse(r#"{ "layout": {} }"#),
            Err(StructureError::EmptySections)
        );
        // Non-string entries don't count as section keys.
        assert_eq!(
            Snapshot::parse(r#"{ "layout": { "sections": [1, 2] } }"#),
            Err(StructureError::EmptySections)
        );
    }

    #[test]
    fn tolerates_missing_theme_and_navigation() {
        let snapshot = Snapshot::parse(
            r#"{ "layout": { "sections": ["footer"], "footer": { "type": "site-footer" } } }"#,
        )
        .unwrap();

        assert!(snapshot.navigation().is_empty());
        assert_eq!(snapshot.theme_field("font"), None);
    }

    #[test]
    fn navigation_elements_receive_defaults() {
        let snapshot = Snapshot::parse(
            r#"{
                "navigation": [{ "name": "Docs" }],
                "layout": { "sections": ["header"] }
            }"#,
        )
        .unwrap();

        assert_eq!(snapshot.navigation()[0].url, "/");
    }
}
