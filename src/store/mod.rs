//! Backing stores for the schedule file and the synchronizer on top of them.

pub mod codec;
pub mod github;
pub mod local;
pub mod sync;

use crate::errors::AppResult;
use std::fmt;

pub use github::GithubStore;
pub use local::LocalFileStore;
pub use sync::{FetchOutcome, Synchronizer};

/// Opaque optimistic-concurrency token returned by a store on read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionMarker(String);

impl VersionMarker {
    pub fn new(token: impl Into<String>) -> Self {
        VersionMarker(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VersionMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Full hashes are noise in messages.
        let short: String = self.0.chars().take(10).collect();
        f.write_str(&short)
    }
}

/// Raw file content together with the marker it was read at.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub bytes: Vec<u8>,
    pub marker: VersionMarker,
}

/// A versioned file store holding the encoded schedule.
pub trait RemoteStore {
    /// Current content, or `None` if the file does not exist yet.
    fn read(&self) -> AppResult<Option<Snapshot>>;

    /// Replace the content if the store is still at `expected`.
    ///
    /// `expected == None` means "create": it must fail with
    /// [`AppError::Conflict`](crate::errors::AppError::Conflict) when the
    /// file already exists. A stale marker fails the same way.
    fn write(&self, bytes: &[u8], expected: Option<&VersionMarker>) -> AppResult<VersionMarker>;

    /// Short description for messages and the operation log.
    fn describe(&self) -> String;
}
