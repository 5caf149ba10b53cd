use thiserror::Error;

/// Fatal preview failures that move the orchestrator into its Error state.
///
/// Both variants are recoverable in the UI sense: the next entry-change
/// event issues a fresh fetch and the machine re-enters Loading.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PreviewError {
    /// Snapshot fetch failed at the transport level.
    #[error("failed to fetch snapshot: {0}")]
    Fetch(#[from] FetchError),
    /// Snapshot was fetched but its shape is unusable.
    #[error("invalid snapshot: {0}")]
    Structure(#[from] StructureError),
    /// No response arrived for the outstanding request within the bound.
    #[error("snapshot request timed out")]
    Timeout,
}

/// Transport-level fetch failures reported by the host.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// The server answered with a non-2xx status code.
    #[error("HTTP {status}")]
    Status {
        /// Response status code.
        status: u16,
    },
    /// The request never completed (DNS, connection reset, offline host).
    #[error("network error: {0}")]
    Network(String),
}

/// Structural validation failures for the snapshot document.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StructureError {
    /// The body was not parseable JSON.
    #[error("snapshot is not valid JSON: {0}")]
    Json(String),
    /// The top-level value was not an object.
    #[error("snapshot root must be an object")]
    RootNotObject,
    /// The `layout` object was missing or not an object.
    #[error("snapshot is missing the layout object")]
    MissingLayout,
    /// `layout.sections` was missing, not a list, or contained no keys.
    #[error("layout.sections must be a non-empty list of section keys")]
    EmptySections,
}

/// Non-fatal conditions recorded while assembling one render pass.
///
/// None of these abort the pass: the affected section (or asset) is
/// skipped and every sibling still renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderWarning {
    /// The layout named a section type with no registered renderer.
    UnknownSectionKind {
        /// Section key inside the layout object.
        key: String,
        /// The unrecognized type string.
        kind: String,
    },
    /// The layout's section list named a key with no payload object.
    MissingSectionPayload {
        /// Section key inside the layout object.
        key: String,
    },
    /// A section asked for an asset it has no usable reference for.
    /// The section renders without the asset.
    MissingAssetReference {
        /// Section kind name the asset belongs to.
        section: &'static str,
        /// Field the reference was expected in.
        field: &'static str,
    },
}

impl std::fmt::Display for RenderWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderWarning::UnknownSectionKind { key, kind } => {
                write!(
                    f,
                    "no renderer registered for section type '{kind}' (key '{key}')"
                )
            }
            RenderWarning::MissingSectionPayload { key } => {
                write!(f, "layout lists section '{key}' but carries no data for it")
            }
            RenderWarning::MissingAssetReference { section, field } => {
                write!(f, "{section}: no usable asset reference for '{field}'")
            }
        }
    }
}

/// Collection of non-fatal warnings gathered during one render pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderDiagnostics {
    /// Warnings in the order they were encountered.
    pub warnings: Vec<RenderWarning>,
}

impl RenderDiagnostics {
    /// Create an empty diagnostics collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a warning.
    pub fn push(&mut self, warning: RenderWarning) {
        self.warnings.push(warning);
    }

    /// Check whether any warnings were recorded.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Number of recorded warnings.
    pub fn count(&self) -> usize {
        self.warnings.len()
    }
}
