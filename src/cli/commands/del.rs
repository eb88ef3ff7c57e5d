use crate::cli::commands::{log_conflict, open_view, selector};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::DeleteLogic;
use crate::core::locator::locate;
use crate::core::log::oplog;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { key, index, id, yes } = &cli.command {
        let target = selector(key, index, id)?;
        let (mut session, sync, mut view) = open_view(cli, cfg)?;

        let position = locate(&view.records, &target)?;
        let record = view
            .records
            .get(position)
            .cloned()
            .ok_or(AppError::OutOfRange {
                index: position,
                len: view.records.len(),
            })?;

        //
        // Confirmation prompt
        //
        let prompt = format!(
            "Delete entry #{} '{}' ({}, {})? This action is irreversible.",
            position + 1,
            record.display_key(),
            record.category,
            record.time_range
        );

        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        //
        // Execute deletion
        //
        let removed = DeleteLogic::apply(&mut session, &sync, &mut view, position)
            .inspect_err(|e| log_conflict("del", &record.display_key(), e))?;

        success(format!("Entry '{}' has been deleted.", removed.display_key()));
        oplog(
            "del",
            &removed.display_key(),
            &format!("Entry {} deleted", removed.id),
        );

        session.end();
    }

    Ok(())
}
