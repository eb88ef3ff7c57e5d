use crate::cli::commands::open_view;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::locator::{build_keys, shadowed};
use crate::errors::{AppError, AppResult};
use crate::models::{Record, RecordSet, Weekday};
use crate::utils::colors::{GREY, RESET};
use crate::utils::table::Table;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::List { day, today, keys } = &cli.command {
        let (mut session, _sync, view) = open_view(cli, cfg)?;

        let wanted = if *today {
            Some(Weekday::today())
        } else {
            match day {
                Some(d) => Some(
                    Weekday::parse(d)
                        .ok_or_else(|| AppError::Validation(format!("unknown day '{d}'")))?,
                ),
                None => None,
            }
        };

        if *keys {
            print_keys(&view.records, wanted);
        } else {
            print_overview(&view.records, wanted);
        }

        session.end();
    }
    Ok(())
}

fn matches_day(r: &Record, wanted: Option<Weekday>) -> bool {
    match wanted {
        None => true,
        Some(w) => Weekday::parse(&r.day) == Some(w),
    }
}

/// Grouped by day, then by location, both in order of first appearance.
fn print_overview(set: &RecordSet, wanted: Option<Weekday>) {
    println!("🌮 Foodtruck Wochenplan\n");

    if set.is_empty() {
        println!("No entries.");
        return;
    }

    let mut printed = false;
    for day in set.days() {
        let day_records: Vec<&Record> = set
            .iter()
            .filter(|r| r.day.trim() == day && matches_day(r, wanted))
            .collect();
        if day_records.is_empty() {
            continue;
        }
        printed = true;

        println!("📅 {}", day);

        let mut locations: Vec<&str> = Vec::new();
        for r in &day_records {
            let loc = r.location.trim();
            if !locations.contains(&loc) {
                locations.push(loc);
            }
        }

        for loc in locations {
            println!("  📍 Ort: {}", loc);

            let mut table = Table::new(["Foodtruck", "Küche", "Zeit", "Website"]);
            for r in day_records.iter().filter(|r| r.location.trim() == loc) {
                table.add_row(vec![
                    r.vendor_name.clone(),
                    r.category.clone(),
                    r.time_range.clone(),
                    r.website.clone(),
                ]);
            }

            for line in table.render().lines() {
                println!("    {}", line);
            }
            println!();
        }
    }

    if !printed {
        println!("No entries for this day.");
    }
}

/// Numbered selection keys; later duplicates are greyed out because a key
/// always selects its first occurrence.
fn print_keys(set: &RecordSet, wanted: Option<Weekday>) {
    let keys = build_keys(set);
    let dup = shadowed(&keys);

    let mut table = Table::new(["#", "ID", "Key"]);
    for (i, (r, key)) in set.iter().zip(&keys).enumerate() {
        if !matches_day(r, wanted) {
            continue;
        }
        let key = if dup.contains(&i) {
            format!("{GREY}{key} (same key as an earlier entry, use --index or --id){RESET}")
        } else {
            key.clone()
        };
        let id = if r.id.is_empty() {
            format!("{GREY}(none){RESET}")
        } else {
            r.id.to_string()
        };
        table.add_row(vec![(i + 1).to_string(), id, key]);
    }

    print!("{}", table.render());
}
