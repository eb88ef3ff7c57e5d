use crate::core::session::Session;
use crate::core::view::View;
use crate::errors::{AppError, AppResult};
use crate::models::Record;
use crate::store::Synchronizer;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// The replacement matched the stored entry; nothing was written.
    Unchanged,
    Updated { before: Record, after: Record },
}

/// High-level business logic for the `edit` command.
pub struct EditLogic;

impl EditLogic {
    /// Replace the entry at `position` (zero-based) in place and push.
    pub fn apply(
        session: &mut Session,
        sync: &Synchronizer,
        view: &mut View,
        position: usize,
        replacement: Record,
    ) -> AppResult<EditOutcome> {
        session.require_authorized()?;
        view.ensure_writable()?;

        let before = view
            .records
            .get(position)
            .cloned()
            .ok_or(AppError::OutOfRange {
                index: position,
                len: view.records.len(),
            })?;

        let mut working = view.records.clone();
        if !working.replace(position, replacement)? {
            return Ok(EditOutcome::Unchanged);
        }
        let after = working.as_slice()[position].clone();

        view.commit(session, sync, working)?;
        Ok(EditOutcome::Updated { before, after })
    }
}
