use crate::cli::commands::{log_conflict, open_view, selector};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::choice::choose;
use crate::core::locator::locate;
use crate::core::log::oplog;
use crate::core::{EditLogic, EditOutcome};
use crate::errors::{AppError, AppResult};
use crate::models::{Record, TimeRange};
use crate::ui::messages::{info, success};

/// Edit a schedule entry in place.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        key,
        index,
        id,
        day,
        location,
        pick_location,
        vendor,
        category,
        pick_category,
        from,
        to,
        website,
        clear_website,
    } = &cli.command
    {
        let target = selector(key, index, id)?;
        let (mut session, sync, mut view) = open_view(cli, cfg)?;

        //
        // 1. Locate the entry
        //
        let position = locate(&view.records, &target)?;
        let current = view
            .records
            .get(position)
            .cloned()
            .ok_or(AppError::OutOfRange {
                index: position,
                len: view.records.len(),
            })?;

        //
        // 2. Build the replacement: given fields override, others are kept
        //
        let location = choose(
            "location",
            location.as_deref(),
            *pick_location,
            &view.records.known_locations(),
        )?
        .unwrap_or_else(|| current.location.clone());

        let category = choose(
            "category",
            category.as_deref(),
            *pick_category,
            &view.records.known_categories(),
        )?
        .unwrap_or_else(|| current.category.clone());

        let time_range = merge_time_range(&current.time_range, from.as_deref(), to.as_deref())?;

        let website = if *clear_website {
            String::new()
        } else {
            website.clone().unwrap_or_else(|| current.website.clone())
        };

        let replacement = Record {
            id: current.id.clone(),
            day: day.clone().unwrap_or_else(|| current.day.clone()),
            location,
            vendor_name: vendor.clone().unwrap_or_else(|| current.vendor_name.clone()),
            category,
            time_range,
            website,
        };

        //
        // 3. Replace + push
        //
        let outcome = EditLogic::apply(&mut session, &sync, &mut view, position, replacement)
            .inspect_err(|e| log_conflict("edit", &current.display_key(), e))?;

        match outcome {
            EditOutcome::Unchanged => info("No changes: the entry already has these values."),
            EditOutcome::Updated { before, after } => {
                success(format!("Entry updated: {}", after.display_key()));
                oplog(
                    "edit",
                    &before.display_key(),
                    &format!("Entry {} updated", after.id),
                );
            }
        }

        session.end();
    }

    Ok(())
}

/// Apply `--from` / `--to` on top of the stored range.
fn merge_time_range(current: &str, from: Option<&str>, to: Option<&str>) -> AppResult<String> {
    if from.is_none() && to.is_none() {
        return Ok(current.to_string());
    }

    let stored = TimeRange::parse(current).ok();
    let start = match (from, &stored) {
        (Some(f), _) => f.to_string(),
        (None, Some(r)) => r.start.format("%H:%M").to_string(),
        (None, None) => {
            return Err(AppError::Validation(format!(
                "stored time '{current}' is not valid, give both --from and --to"
            )));
        }
    };
    let end = match (to, &stored) {
        (Some(t), _) => t.to_string(),
        (None, Some(r)) => r.end.format("%H:%M").to_string(),
        (None, None) => {
            return Err(AppError::Validation(format!(
                "stored time '{current}' is not valid, give both --from and --to"
            )));
        }
    };

    Ok(TimeRange::from_parts(&start, &end)?.to_string())
}
