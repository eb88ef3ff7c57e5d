use crate::core::session::Session;
use crate::core::view::View;
use crate::errors::AppResult;
use crate::models::Record;
use crate::store::Synchronizer;

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Validate `record`, append it and push the whole schedule.
    ///
    /// Returns the entry as stored. On failure the view is left as loaded.
    pub fn apply(
        session: &mut Session,
        sync: &Synchronizer,
        view: &mut View,
        record: Record,
    ) -> AppResult<Record> {
        session.require_authorized()?;
        view.ensure_writable()?;

        let mut working = view.records.clone();
        let stored = working.insert(record)?.clone();

        view.commit(session, sync, working)?;
        Ok(stored)
    }
}
