//! Fetch / conditional push of the whole record set.

use super::{RemoteStore, VersionMarker, codec};
use crate::errors::{AppError, AppResult};
use crate::models::RecordSet;

/// Result of loading the schedule at the start of a view.
///
/// A failed load never aborts the view: `records` is then empty, `marker` is
/// `None` and `error` says what went wrong so it can be shown to the user.
#[derive(Debug)]
pub struct FetchOutcome {
    pub records: RecordSet,
    pub marker: Option<VersionMarker>,
    pub error: Option<AppError>,
}

impl FetchOutcome {
    fn degraded(error: AppError) -> Self {
        Self {
            records: RecordSet::new(),
            marker: None,
            error: Some(error),
        }
    }

    /// The store has content that could not be decoded. Writing now would
    /// replace data nobody has seen, so mutating views must stop.
    pub fn is_unreadable(&self) -> bool {
        matches!(self.error, Some(AppError::Format(_)))
    }
}

pub struct Synchronizer {
    store: Box<dyn RemoteStore>,
}

impl Synchronizer {
    pub fn new(store: Box<dyn RemoteStore>) -> Self {
        Self { store }
    }

    pub fn describe(&self) -> String {
        self.store.describe()
    }

    pub fn fetch(&self) -> FetchOutcome {
        let snapshot = match self.store.read() {
            Ok(Some(s)) => s,
            Ok(None) => {
                return FetchOutcome::degraded(AppError::NotFound(format!(
                    "no schedule at {} yet; it will be created on first save",
                    self.store.describe()
                )));
            }
            Err(e) => return FetchOutcome::degraded(e),
        };

        match codec::decode(&snapshot.bytes) {
            Ok(records) => FetchOutcome {
                records,
                marker: Some(snapshot.marker),
                error: None,
            },
            Err(e) => FetchOutcome::degraded(e),
        }
    }

    /// Encode and write conditioned on `marker`; returns the new marker.
    pub fn push(&self, set: &RecordSet, marker: Option<&VersionMarker>) -> AppResult<VersionMarker> {
        let bytes = codec::encode(set)?;
        self.store.write(&bytes, marker)
    }
}
