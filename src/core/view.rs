use crate::core::session::Session;
use crate::errors::{AppError, AppResult};
use crate::models::RecordSet;
use crate::store::Synchronizer;

/// The schedule as loaded at the start of one view.
#[derive(Debug)]
pub struct View {
    pub records: RecordSet,
    /// Why the load degraded to an empty schedule, if it did.
    pub warning: Option<AppError>,
    unreadable: bool,
}

impl View {
    /// Fetch the schedule and store the marker in the session.
    pub fn open(session: &mut Session, sync: &Synchronizer) -> AppResult<Self> {
        session.require_authorized()?;

        let outcome = sync.fetch();
        let unreadable = outcome.is_unreadable();
        session.remember(outcome.marker);

        Ok(Self {
            records: outcome.records,
            warning: outcome.error,
            unreadable,
        })
    }

    /// Mutating views refuse to run over content that failed to decode.
    pub fn ensure_writable(&self) -> AppResult<()> {
        if self.unreadable {
            let reason = self
                .warning
                .as_ref()
                .map(|e| e.to_string())
                .unwrap_or_default();
            return Err(AppError::Format(format!(
                "refusing to overwrite unreadable schedule ({reason})"
            )));
        }
        Ok(())
    }

    /// Push `working` and, only if the push succeeds, make it the view's set.
    ///
    /// On any failure (a conflict included) `working` is dropped and the
    /// view keeps what was loaded.
    pub fn commit(
        &mut self,
        session: &mut Session,
        sync: &Synchronizer,
        working: RecordSet,
    ) -> AppResult<()> {
        session.require_authorized()?;

        let marker = sync.push(&working, session.marker())?;
        session.remember(Some(marker));
        self.records = working;
        Ok(())
    }
}
