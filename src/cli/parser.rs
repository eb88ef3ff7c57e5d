use clap::{ArgGroup, Parser, Subcommand};

/// Command-line interface definition for truckplan
/// CLI editor for the weekly food-truck schedule
#[derive(Parser)]
#[command(
    name = "truckplan",
    version = env!("CARGO_PKG_VERSION"),
    about = "Edit the weekly food-truck schedule (CSV file, optionally synced to GitHub)",
    long_about = None
)]
pub struct Cli {
    /// Use this local CSV file instead of the configured backend
    #[arg(global = true, long = "file", value_name = "PATH")]
    pub file: Option<String>,

    /// Password for the session gate (if one is configured)
    #[arg(
        global = true,
        long = "password",
        env = "TRUCKPLAN_PASSWORD",
        hide_env_values = true
    )]
    pub password: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and an empty schedule file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check the configuration for values that cannot work")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (falls back to $VISUAL, $EDITOR, then nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Show the weekly overview, grouped by day and location
    List {
        #[arg(long, help = "Only this day (Montag … Sonntag, or mon … sun)")]
        day: Option<String>,

        #[arg(long = "today", conflicts_with = "day", help = "Only today's entries")]
        today: bool,

        #[arg(long = "keys", help = "Print index, id and selection key of every entry")]
        keys: bool,
    },

    /// List the locations and categories already in use (numbers for --pick-*)
    Options,

    /// Add a new entry
    Add {
        #[arg(long, help = "Day (Montag … Sonntag)")]
        day: String,

        #[arg(long, help = "New location")]
        location: Option<String>,

        #[arg(long = "pick-location", value_name = "N", help = "Existing location number (see `options`)")]
        pick_location: Option<usize>,

        #[arg(long, help = "Food truck name")]
        vendor: String,

        #[arg(long, help = "New category / cuisine")]
        category: Option<String>,

        #[arg(long = "pick-category", value_name = "N", help = "Existing category number (see `options`)")]
        pick_category: Option<usize>,

        #[arg(long, value_name = "HH:MM", help = "Start time")]
        from: String,

        #[arg(long, value_name = "HH:MM", help = "End time")]
        to: String,

        #[arg(long, help = "Website (optional)")]
        website: Option<String>,
    },

    /// Edit an existing entry; omitted fields keep their value
    #[command(group(ArgGroup::new("target").required(true).args(["key", "index", "id"])))]
    Edit {
        #[arg(long, help = "Selection key \"Tag - Ort - Foodtruck\" (first match wins)")]
        key: Option<String>,

        #[arg(long, help = "Entry number as printed by `list --keys`")]
        index: Option<usize>,

        #[arg(long, help = "Entry id as printed by `list --keys`")]
        id: Option<String>,

        #[arg(long)]
        day: Option<String>,

        #[arg(long)]
        location: Option<String>,

        #[arg(long = "pick-location", value_name = "N")]
        pick_location: Option<usize>,

        #[arg(long)]
        vendor: Option<String>,

        #[arg(long)]
        category: Option<String>,

        #[arg(long = "pick-category", value_name = "N")]
        pick_category: Option<usize>,

        #[arg(long, value_name = "HH:MM")]
        from: Option<String>,

        #[arg(long, value_name = "HH:MM")]
        to: Option<String>,

        #[arg(long, conflicts_with = "clear_website")]
        website: Option<String>,

        #[arg(long = "clear-website", help = "Remove the website")]
        clear_website: bool,
    },

    /// Delete an entry
    #[command(group(ArgGroup::new("target").required(true).args(["key", "index", "id"])))]
    Del {
        #[arg(long)]
        key: Option<String>,

        #[arg(long)]
        index: Option<usize>,

        #[arg(long)]
        id: Option<String>,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Print the internal operation log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log")]
        print: bool,
    },
}
