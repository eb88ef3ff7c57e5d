use crate::cli::commands::{log_conflict, open_view};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::AddLogic;
use crate::core::choice::choose;
use crate::core::log::oplog;
use crate::errors::AppResult;
use crate::models::{Record, TimeRange};
use crate::ui::messages::success;

/// Add a new schedule entry.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        day,
        location,
        pick_location,
        vendor,
        category,
        pick_category,
        from,
        to,
        website,
    } = &cli.command
    {
        //
        // 1. Load the schedule (also the source of the pickable values)
        //
        let (mut session, sync, mut view) = open_view(cli, cfg)?;

        //
        // 2. Resolve typed / picked values
        //
        let location = choose(
            "location",
            location.as_deref(),
            *pick_location,
            &view.records.known_locations(),
        )?
        .unwrap_or_default();

        let category = choose(
            "category",
            category.as_deref(),
            *pick_category,
            &view.records.known_categories(),
        )?
        .unwrap_or_default();

        let time_range = TimeRange::from_parts(from, to)?;

        let record = Record::new(
            day.as_str(),
            location,
            vendor.as_str(),
            category,
            time_range.to_string(),
            website.clone().unwrap_or_default(),
        );
        let key = record.display_key();

        //
        // 3. Insert + push
        //
        let stored = AddLogic::apply(&mut session, &sync, &mut view, record)
            .inspect_err(|e| log_conflict("add", &key, e))?;

        success(format!(
            "Entry added: {} ({}, {})",
            stored.display_key(),
            stored.category,
            stored.time_range
        ));
        oplog("add", &stored.display_key(), &format!("Entry {} added", stored.id));

        session.end();
    }

    Ok(())
}
