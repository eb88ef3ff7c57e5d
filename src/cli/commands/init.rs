use crate::cli::parser::Cli;
use crate::config::{Backend, Config};
use crate::core::log::oplog;
use crate::errors::AppResult;
use crate::models::RecordSet;
use crate::store::{LocalFileStore, RemoteStore, codec};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - an empty local schedule file with the header row
pub fn handle(cli: &Cli) -> AppResult<()> {
    let data_path = Config::init_all(cli.file.clone(), cli.test)?;
    let cfg = Config::load()?;

    println!("⚙️  Initializing truckplan…");
    println!("📄 Config file : {}", Config::config_file().display());

    if cfg.backend == Backend::Github && cli.file.is_none() {
        println!(
            "☁️  Backend     : github ({}/{} {}@{})",
            cfg.github.owner, cfg.github.repo, cfg.github.path, cfg.github.branch
        );
        println!("ℹ️  The remote file is created on the first save.");
        return Ok(());
    }

    println!("🗂️  Schedule    : {}", data_path.display());

    if data_path.exists() {
        println!("✅ Schedule file already present, left untouched.");
    } else {
        let store = LocalFileStore::new(&data_path);
        store.write(&codec::encode(&RecordSet::new())?, None)?;
        println!("✅ Empty schedule created at {}", data_path.display());
    }

    oplog(
        "init",
        &data_path.to_string_lossy(),
        "Schedule initialized",
    );

    println!("🎉 truckplan initialization completed!");
    Ok(())
}
