//! Asset resolver collaborator.
//!
//! Asset references in entry or snapshot data are either plain URLs
//! (used as-is) or host-managed upload paths needing resolution. The
//! normalizer accepts both forms through [`AssetResolver`] so renderers
//! never have to know which one they got.

/// Resolves an asset reference to a usable URL.
pub trait AssetResolver {
    /// Returns the URL for `reference`, or `None` when the reference is
    /// empty or cannot be resolved. An empty reference means "no asset
    /// configured" and is not an error.
    fn resolve(&self, reference: &str) -> Option<String>;
}

/// Uses references verbatim.
///
/// Suits snapshots whose asset paths are already site-absolute URLs.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughAssets;

impl AssetResolver for PassthroughAssets {
    fn resolve(&self, reference: &str) -> Option<String> {
        if reference.is_empty() {
            None
        } else {
            Some(reference.to_string())
        }
    }
}

/// Joins non-URL references onto a base path.
///
/// Absolute URLs and data URIs pass through untouched; anything else is
/// treated as an upload path relative to `base`.
#[derive(Debug, Clone)]
pub struct PrefixAssets {
    base: String,
}

impl PrefixAssets {
    /// Creates a resolver rooted at `base` (trailing slash optional).
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self { base }
    }
}

fn is_external(reference: &str) -> bool {
    reference.starts_with("http://")
        || reference.starts_with("https://")
        || reference.starts_with("data:")
}

impl AssetResolver for PrefixAssets {
    fn resolve(&self, reference: &str) -> Option<String> {
        if reference.is_empty() {
            return None;
        }
        if is_external(reference) {
            return Some(reference.to_string());
        }
        let relative = reference.trim_start_matches('/');
        Some(format!("{}/{}", self.base, relative))
    }
}
