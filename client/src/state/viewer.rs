//! Bundle loader state: the fetched bundle, version list, AI summary, and
//! the loading/error flags around them.
//!
//! DESIGN
//! ======
//! Loads run as detached browser tasks, so responses can arrive in any order.
//! Each request kind carries a monotonically increasing sequence number and a
//! response is applied only if its token is still the latest issued; the most
//! recently *started* load always wins, however the network orders replies.
//!
//! ERROR HANDLING
//! ==============
//! A failed bundle load is surfaced in `error` and hides the tabs. A failed
//! summary load just leaves the summary empty.

#[cfg(test)]
#[path = "viewer_test.rs"]
mod viewer_test;

use crate::net::types::{Bundle, VersionList};
use crate::util::version::to_dotted;

/// Identifies one issued request; compared on completion to drop stale replies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestToken(u64);

/// Everything the viewer page renders from the API.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewerState {
    /// A bundle request is in flight.
    pub loading: bool,
    /// Message of the last failed bundle load, cleared when a new load starts.
    pub error: Option<String>,
    pub bundle: Bundle,
    /// Dashed identifier of the bundle on screen.
    pub version: String,
    /// Selectable versions, dotted for display.
    pub versions: Vec<String>,
    pub summary: String,
    pub summary_loading: bool,
    bundle_seq: u64,
    summary_seq: u64,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self {
            loading: true,
            error: None,
            bundle: Bundle::default(),
            version: String::new(),
            versions: Vec::new(),
            summary: String::new(),
            summary_loading: false,
            bundle_seq: 0,
            summary_seq: 0,
        }
    }
}

impl ViewerState {
    /// Start the mount-time load of the latest bundle and the version list.
    pub fn begin_initial_load(&mut self) -> RequestToken {
        self.loading = true;
        self.error = None;
        self.next_bundle_token()
    }

    /// Apply the joined result of the initial bundle + version list requests.
    /// Returns `false` when the reply was superseded and ignored.
    pub fn finish_initial_load(&mut self, token: RequestToken, result: Result<(Bundle, VersionList), String>) -> bool {
        if token != RequestToken(self.bundle_seq) {
            return false;
        }
        match result {
            Ok((bundle, list)) => {
                self.version.clone_from(&bundle.version);
                self.bundle = bundle;
                self.versions = list.versions.iter().map(|v| to_dotted(v)).collect();
            }
            Err(message) => self.error = Some(message),
        }
        self.loading = false;
        true
    }

    /// Start loading a user-selected version. The summary on screen belongs to
    /// the old version, so it is cleared and any in-flight summary reply is
    /// invalidated.
    pub fn begin_version_load(&mut self) -> RequestToken {
        self.loading = true;
        self.error = None;
        self.summary.clear();
        self.summary_loading = true;
        self.summary_seq += 1;
        self.next_bundle_token()
    }

    /// Apply a version-switch reply. On failure the previous bundle stays in
    /// place behind the error message.
    pub fn finish_version_load(&mut self, token: RequestToken, dashed: &str, result: Result<Bundle, String>) -> bool {
        if token != RequestToken(self.bundle_seq) {
            return false;
        }
        match result {
            Ok(bundle) => {
                dashed.clone_into(&mut self.version);
                self.bundle = bundle;
            }
            Err(message) => self.error = Some(message),
        }
        self.loading = false;
        true
    }

    pub fn begin_summary(&mut self) -> RequestToken {
        self.summary_loading = true;
        self.summary_seq += 1;
        RequestToken(self.summary_seq)
    }

    /// Apply a summary reply; failures reset the summary to empty.
    pub fn finish_summary(&mut self, token: RequestToken, result: Result<String, String>) -> bool {
        if token != RequestToken(self.summary_seq) {
            return false;
        }
        self.summary = result.unwrap_or_default();
        self.summary_loading = false;
        true
    }

    /// Dotted version for the selector and document title.
    #[must_use]
    pub fn display_version(&self) -> String {
        to_dotted(&self.version)
    }

    /// Tabs are mounted only when no load is pending and none has failed.
    #[must_use]
    pub fn shows_tabs(&self) -> bool {
        !self.loading && self.error.is_none()
    }

    #[must_use]
    pub fn shows_tagline(&self) -> bool {
        !self.bundle.tagline.is_empty() || !self.summary.is_empty() || self.summary_loading
    }

    /// Text appended after the tagline, if any.
    #[must_use]
    pub fn tagline_suffix(&self) -> Option<String> {
        if self.summary_loading {
            Some("— Generating AI summary…".to_owned())
        } else if self.summary.is_empty() {
            None
        } else {
            Some(format!("— {}", self.summary))
        }
    }

    fn next_bundle_token(&mut self) -> RequestToken {
        self.bundle_seq += 1;
        RequestToken(self.bundle_seq)
    }
}
