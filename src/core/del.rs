use crate::core::session::Session;
use crate::core::view::View;
use crate::errors::AppResult;
use crate::models::Record;
use crate::store::Synchronizer;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Remove the entry at `position` (zero-based) and push. Returns it.
    pub fn apply(
        session: &mut Session,
        sync: &Synchronizer,
        view: &mut View,
        position: usize,
    ) -> AppResult<Record> {
        session.require_authorized()?;
        view.ensure_writable()?;

        let mut working = view.records.clone();
        let removed = working.remove(position)?;

        view.commit(session, sync, working)?;
        Ok(removed)
    }
}
