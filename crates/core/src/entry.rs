//! Editor entry collaborator.
//!
//! The host CMS owns the in-progress entry and its storage format; the
//! core only ever reads it through [`EntrySource`], a path-based
//! accessor with explicit absence. JSON `null` counts as absent so that
//! a host clearing a field behaves like a host that never set it.

use serde_json::Value;

/// Read-only accessor over the in-progress editor entry.
///
/// `path` addresses nested form data, e.g. `["colors", "primary"]`.
pub trait EntrySource {
    /// Returns the value at `path`, or `None` when any segment is absent.
    fn get(&self, path: &[&str]) -> Option<&Value>;
}

/// Entry backed by a JSON object (the CMS entry's `data` subtree).
#[derive(Debug, Clone, Default)]
pub struct JsonEntry {
    data: Value,
}

impl JsonEntry {
    /// Wraps an already-parsed entry data object.
    pub fn new(data: Value) -> Self {
        Self { data }
    }

    /// Parses entry data from a JSON string. Unparseable input yields an
    /// empty entry: a broken draft must degrade to defaults, not fail
    /// the whole preview.
    pub fn from_json(body: &str) -> Self {
        match serde_json::from_str(body) {
            Ok(data) => Self { data },
            Err(err) => {
                log::debug!("editor entry is not valid JSON, treating as empty: {err}");
                Self::default()
            }
        }
    }
}

impl EntrySource for JsonEntry {
    fn get(&self, path: &[&str]) -> Option<&Value> {
        let mut current = &self.data;
        for segment in path {
            current = current.get(segment)?;
        }
        if current.is_null() { None } else { Some(current) }
    }
}

/// Entry with no data; every lookup is absent.
///
/// Used by preview paths that render purely from the snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyEntry;

impl EntrySource for EmptyEntry {
    fn get(&self, _path: &[&str]) -> Option<&Value> {
        None
    }
}
