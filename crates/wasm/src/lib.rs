//! Wasm surface for the host CMS admin bundle.
//!
//! The host registers one [`PreviewSession`] per preview pane and
//! drives it with three kinds of events: entry changes, fetch outcomes,
//! and menu toggles. The session owns the orchestrator state machine
//! and hands back a fully rendered document on every `render` call; the
//! host only swaps innerHTML and performs the fetches it is asked for.

use cmsview_core::{FetchError, JsonEntry, Orchestrator, PassthroughAssets};
use cmsview_render::{MenuState, PreviewVariant, REGISTRATIONS, render_phase, variant_for_collection};
use wasm_bindgen::prelude::*;

/// A fetch the host must perform. Echo `token` back with the outcome so
/// superseded requests can be discarded.
#[wasm_bindgen]
pub struct FetchTicket {
    token: u32,
    url: String,
}

#[wasm_bindgen]
impl FetchTicket {
    /// Request token for staleness checks.
    #[wasm_bindgen(getter)]
    pub fn token(&self) -> u32 {
        self.token
    }

    /// Snapshot URL including the cache-busting parameter.
    #[wasm_bindgen(getter)]
    pub fn url(&self) -> String {
        self.url.clone()
    }
}

/// One preview pane: orchestrator, current entry data, menu state.
#[wasm_bindgen]
pub struct PreviewSession {
    orchestrator: Orchestrator,
    entry: JsonEntry,
    menu: MenuState,
    variant: PreviewVariant,
    assets: PassthroughAssets,
}

#[wasm_bindgen]
impl PreviewSession {
    /// Creates a session for a registered collection.
    #[wasm_bindgen(constructor)]
    pub fn new(collection: &str) -> Result<PreviewSession, JsValue> {
        let variant = variant_for_collection(collection).ok_or_else(|| {
            JsValue::from_str(&format!(
                "no preview template registered for collection '{collection}'"
            ))
        })?;

        Ok(PreviewSession {
            orchestrator: Orchestrator::new(),
            entry: JsonEntry::default(),
            menu: MenuState::closed(),
            variant,
            assets: PassthroughAssets,
        })
    }

    /// The editor entry changed (or the pane just mounted). Stores the
    /// new entry data and returns the fetch the host must start.
    ///
    /// Entry data that fails to convert degrades to an empty entry so
    /// the preview falls back to published defaults instead of failing.
    pub fn entry_changed(&mut self, entry: JsValue) -> FetchTicket {
        self.entry = match serde_wasm_bindgen::from_value::<serde_json::Value>(entry) {
            Ok(value) => JsonEntry::new(value),
            Err(_) => JsonEntry::default(),
        };
        let request = self.orchestrator.entry_changed();
        FetchTicket {
            token: request.token,
            url: request.url,
        }
    }

    /// A fetch completed with a 2xx body.
    pub fn snapshot_loaded(&mut self, token: u32, body: &str) {
        self.orchestrator.snapshot_received(token, body);
    }

    /// A fetch failed with a non-2xx status or a network error.
    pub fn snapshot_failed(&mut self, token: u32, status: Option<u16>, message: Option<String>) {
        let error = match status {
            Some(status) => FetchError::Status { status },
            None => FetchError::Network(message.unwrap_or_else(|| "request failed".to_string())),
        };
        self.orchestrator.fetch_failed(token, error);
    }

    /// The host's fetch timer expired for `token`.
    pub fn fetch_timed_out(&mut self, token: u32) {
        self.orchestrator.fetch_timed_out(token);
    }

    /// Toggles the mobile menu.
    pub fn toggle_menu(&mut self) {
        self.menu.toggle();
    }

    /// Renders the document for the current phase. Always returns a
    /// complete document: loading or error placeholder, or the preview.
    pub fn render(&self) -> String {
        render_phase(
            self.orchestrator.phase(),
            &self.entry,
            &self.assets,
            self.menu,
            self.variant,
        )
        .html
    }
}

/// Recommended per-fetch timeout in milliseconds, for the host's timer.
#[wasm_bindgen]
pub fn fetch_timeout_ms() -> u32 {
    cmsview_core::FETCH_TIMEOUT.as_millis() as u32
}

/// Collection identifiers with a registered preview template, for the
/// host's one-time registration loop.
#[wasm_bindgen]
pub fn registered_collections() -> js_sys::Array {
    REGISTRATIONS
        .iter()
        .map(|(name, _)| JsValue::from_str(name))
        .collect()
}

#[cfg(test)]
mod tests {
    #[test]
    fn timeout_matches_the_core_recommendation() {
        assert_eq!(super::fetch_timeout_ms(), 8_000);
    }
}
