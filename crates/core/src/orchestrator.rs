//! Preview orchestrator state machine.
//!
//! The machine is event-driven and owns no timers or sockets: the host
//! performs the actual fetch and feeds the outcome back in. Each
//! entry-change event supersedes any in-flight request by bumping the
//! request token; a late response whose token is no longer the latest
//! is discarded before it can touch state, so out-of-order completions
//! never publish a stale snapshot.
//!
//! ```text
//!            entry_changed                entry_changed
//!   Ready ─────────────────▶ Loading ◀───────────────── Error
//!     ▲                        │  │                        ▲
//!     └── snapshot ok ─────────┘  └───── fetch/validation ─┘
//!                                        failure, timeout
//! ```

use crate::error::{FetchError, PreviewError};
use crate::snapshot::Snapshot;
use std::time::Duration;

/// Well-known path of the generated snapshot document.
pub const SNAPSHOT_PATH: &str = "/cms-data.json";

/// Recommended bound for one fetch attempt. The host drives the timer
/// and reports expiry through [`Orchestrator::fetch_timed_out`].
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(8);

/// Current phase of the preview.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    /// A fetch is outstanding; show the loading placeholder.
    Loading,
    /// The latest snapshot was committed; render from it.
    Ready(Snapshot),
    /// The latest fetch failed; show the message until the next edit.
    Error(String),
}

/// A fetch the host must perform on behalf of the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Token identifying this request; echo it back with the outcome.
    pub token: u32,
    /// Snapshot URL including the cache-busting query parameter.
    pub url: String,
}

/// Event-driven {Loading, Ready, Error} machine with stale-response
/// protection.
#[derive(Debug)]
pub struct Orchestrator {
    phase: Phase,
    latest: u32,
}

impl Default for Orchestrator {
    fn default() -> Self {
        Self::new()
    }
}

impl Orchestrator {
    /// Creates a machine with no request issued yet. The preview is
    /// considered loading until the first fetch resolves.
    pub fn new() -> Self {
        Self {
            phase: Phase::Loading,
            latest: 0,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// The committed snapshot, when in the Ready phase.
    pub fn snapshot(&self) -> Option<&Snapshot> {
        match self.phase() {
            Phase::Ready(snapshot) => Some(snapshot),
            _ => None,
        }
    }

    /// The user-visible failure message, when in the Error phase.
    pub fn error_message(&self) -> Option<&str> {
        match self.phase() {
            Phase::Error(message) => Some(message),
            _ => None,
        }
    }

    /// The editor entry changed (or the preview just mounted): enter
    /// Loading and issue a fresh fetch, superseding any in-flight one.
    pub fn entry_changed(&mut self) -> FetchRequest {
        self.latest += 1;
        self.phase = Phase::Loading;
        FetchRequest {
            token: self.latest,
            url: format!("{SNAPSHOT_PATH}?v={}", self.latest),
        }
    }

    /// A fetch completed with `body`. Returns `false` when the response
    /// was stale and discarded without touching state.
    pub fn snapshot_received(&mut self, token: u32, body: &str) -> bool {
        if !self.accepts(token) {
            return false;
        }
        self.phase = match Snapshot::parse(body) {
            Ok(snapshot) => Phase::Ready(snapshot),
            Err(err) => Phase::Error(PreviewError::Structure(err).to_string()),
        };
        true
    }

    /// A fetch failed at the transport level. Returns `false` when the
    /// failure belonged to a superseded request.
    pub fn fetch_failed(&mut self, token: u32, error: FetchError) -> bool {
        if !self.accepts(token) {
            return false;
        }
        self.phase = Phase::Error(PreviewError::Fetch(error).to_string());
        true
    }

    /// The host's timer expired for `token`. Only the latest request
    /// can time out, and only while still Loading.
    pub fn fetch_timed_out(&mut self, token: u32) -> bool {
        if token != self.latest || !matches!(self.phase(), Phase::Loading) {
            return false;
        }
        self.phase = Phase::Error(PreviewError::Timeout.to_string());
        true
    }

    fn accepts(&self, token: u32) -> bool {
        if token != self.latest {
            log::debug!(
                "discarding stale snapshot response (token {token}, latest {})",
                self.latest
            );
            return false;
        }
        true
    }
}
