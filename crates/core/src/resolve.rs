//! Three-tier field resolution.
//!
//! Every normalized field is the result of the same precedence chain:
//! explicit editor value, then published default from the snapshot,
//! then a hardcoded fallback. The chain is applied per field, never per
//! record, so a section can mix editor values and defaults freely.
//!
//! Presence is explicit: `false`, `0` and `""` are legitimate editor
//! values and win over any default. Only an absent field (or JSON
//! `null`, or a value of the wrong type) falls through to the next
//! tier. Asset references are the one documented exception (an empty
//! reference means "no asset" and falls through, see [`resolve_asset`]).

use crate::assets::AssetResolver;
use serde_json::Value;

/// Looks up `key` inside an optional JSON object, for walking tiers
/// into nested records (`hero.primary_button.text` and the like).
pub(crate) fn field<'v>(value: Option<&'v Value>, key: &str) -> Option<&'v Value> {
    value.and_then(|v| v.get(key)).filter(|v| !v.is_null())
}

/// Resolves a string field: editor, then published, then `fallback`.
///
/// An explicit empty editor string survives; a non-string value in a
/// tier is treated as absent from that tier.
pub fn resolve_string(editor: Option<&Value>, published: Option<&Value>, fallback: &str) -> String {
    editor
        .and_then(Value::as_str)
        .or_else(|| published.and_then(Value::as_str))
        .unwrap_or(fallback)
        .to_string()
}

/// Resolves a boolean field with explicit-presence semantics: an
/// editor `false` is a decision, not an omission.
pub fn resolve_bool(editor: Option<&Value>, published: Option<&Value>, fallback: bool) -> bool {
    editor
        .and_then(Value::as_bool)
        .or_else(|| published.and_then(Value::as_bool))
        .unwrap_or(fallback)
}

/// Resolves a numeric field. `0` is a valid explicit value (e.g. a
/// fully transparent overlay) and is never replaced by a default.
pub fn resolve_f64(editor: Option<&Value>, published: Option<&Value>, fallback: f64) -> f64 {
    editor
        .and_then(Value::as_f64)
        .or_else(|| published.and_then(Value::as_f64))
        .unwrap_or(fallback)
}

/// Resolves an asset reference through the host resolver.
///
/// Each tier's reference is resolved independently and the first tier
/// yielding a usable URL wins. An empty reference counts as absent:
/// unlike plain strings, `""` here means "no asset configured", so it
/// falls through to the published default.
pub fn resolve_asset(
    editor: Option<&Value>,
    published: Option<&Value>,
    assets: &dyn AssetResolver,
) -> Option<String> {
    editor
        .and_then(Value::as_str)
        .and_then(|r| assets.resolve(r))
        .or_else(|| {
            published
                .and_then(Value::as_str)
                .and_then(|r| assets.resolve(r))
        })
}

/// Selects the source list for a list-valued field.
///
/// Lists are not merged element-by-element across tiers: the editor's
/// list, if present, fully replaces the published one, even when
/// empty. Elements of the chosen list are then normalized individually
/// against hardcoded fallbacks by the per-section normalizers.
pub fn resolve_list<'v>(editor: Option<&'v Value>, published: Option<&'v Value>) -> &'v [Value] {
    editor
        .and_then(Value::as_array)
        .or_else(|| published.and_then(Value::as_array))
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::PassthroughAssets;
    use serde_json::json;

    #[test]
    fn string_precedence() {
        let editor = json!("draft");
        let published = json!("published");
        assert_eq!(
            resolve_string(Some(&editor), Some(&published), "fallback"),
            "draft"
        );
        assert_eq!(
            resolve_string(None, Some(&published), "fallback"),
            "published"
        );
        assert_eq!(resolve_string(None, None, "fallback"), "fallback");
    }

    #[test]
    fn explicit_empty_string_survives() {
        let editor = json!("");
        let published = json!("published");
        assert_eq!(resolve_string(Some(&editor), Some(&published), "x"), "");
    }

    #[test]
    fn wrong_type_falls_through() {
        let editor = json!(42);
        let published = json!("published");
        assert_eq!(
            resolve_string(Some(&editor), Some(&published), "x"),
            "published"
        );
    }

    #[test]
    fn explicit_false_survives() {
        let editor = json!(false);
        let published = json!(true);
        assert!(!resolve_bool(Some(&editor), Some(&published), true));
        assert!(resolve_bool(None, Some(&published), false));
        assert!(resolve_bool(None, None, true));
    }

    #[test]
    fn explicit_zero_survives() {
        let editor = json!(0);
        let published = json!(0.5);
        assert_eq!(resolve_f64(Some(&editor), Some(&published), 0.5), 0.0);
        assert_eq!(resolve_f64(None, Some(&published), 0.9), 0.5);
        assert_eq!(resolve_f64(None, None, 0.6), 0.6);
    }

    #[test]
    fn empty_asset_reference_falls_through() {
        let editor = json!("");
        let published = json!("/images/uploads/a.png");
        assert_eq!(
            resolve_asset(Some(&editor), Some(&published), &PassthroughAssets).as_deref(),
            Some("/images/uploads/a.png")
        );
        assert_eq!(resolve_asset(None, None, &PassthroughAssets), None);
    }

    #[test]
    fn editor_list_replaces_default_even_when_empty() {
        let editor = json!([]);
        let published = json!([{ "name": "Home" }]);
        assert!(resolve_list(Some(&editor), Some(&published)).is_empty());
        assert_eq!(resolve_list(None, Some(&published)).len(), 1);
        assert!(resolve_list(None, None).is_empty());
    }

    #[test]
    fn field_walks_objects_and_skips_null() {
        let value = json!({ "button": { "text": "Go", "url": null } });
        let button = field(Some(&value), "button");
        assert_eq!(field(button, "text"), Some(&json!("Go")));
        assert!(field(button, "url").is_none());
        assert!(field(None, "text").is_none());
    }
}
