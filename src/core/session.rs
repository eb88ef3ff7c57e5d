//! Per-session state: the password gate result and the version marker.

use crate::errors::{AppError, AppResult};
use crate::store::VersionMarker;

/// Created at the start of a session, passed into every view and operation,
/// cleared by [`Session::end`].
#[derive(Debug, Default)]
pub struct Session {
    authorized: bool,
    marker: Option<VersionMarker>,
}

impl Session {
    /// Run the password gate. With no configured password the gate is open.
    pub fn open(expected: Option<&str>, supplied: Option<&str>) -> Self {
        let authorized = match expected {
            None => true,
            Some(secret) => supplied == Some(secret),
        };
        Self {
            authorized,
            marker: None,
        }
    }

    pub fn is_authorized(&self) -> bool {
        self.authorized
    }

    pub fn require_authorized(&self) -> AppResult<()> {
        if self.authorized {
            Ok(())
        } else {
            Err(AppError::Unauthorized)
        }
    }

    /// Marker the next push must be conditioned on.
    pub fn marker(&self) -> Option<&VersionMarker> {
        self.marker.as_ref()
    }

    pub fn remember(&mut self, marker: Option<VersionMarker>) {
        self.marker = marker;
    }

    /// Logout: drop authorization and the marker.
    pub fn end(&mut self) {
        self.authorized = false;
        self.marker = None;
    }
}
