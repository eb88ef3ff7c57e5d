use crate::cli::commands::open_view;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;

/// Print the values already used for locations and categories, numbered for
/// `--pick-location` / `--pick-category`.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let (mut session, _sync, view) = open_view(cli, cfg)?;

    print_numbered("📍 Locations", &view.records.known_locations());
    println!();
    print_numbered("🍽️  Categories", &view.records.known_categories());

    session.end();
    Ok(())
}

fn print_numbered(title: &str, values: &[String]) {
    println!("{title}:");
    if values.is_empty() {
        println!("  (none yet)");
    }
    for (i, v) in values.iter().enumerate() {
        println!("  {:>2}. {}", i + 1, v);
    }
}
