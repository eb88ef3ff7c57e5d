#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use truckplan::models::{Record, RecordSet};
use truckplan::store::{LocalFileStore, Synchronizer};

/// The binary, with its config dir pointed at `home` and no password in the env.
pub fn tp(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("truckplan");
    cmd.env("TRUCKPLAN_HOME", home);
    cmd.env_remove("TRUCKPLAN_PASSWORD");
    cmd
}

/// Fresh config dir plus the path of a (not yet existing) schedule file in it.
pub fn setup_home() -> (TempDir, String) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let file = dir.path().join("data.csv").to_string_lossy().to_string();
    (dir, file)
}

pub fn temp_csv(dir: &TempDir, name: &str) -> PathBuf {
    let p = dir.path().join(name);
    fs::remove_file(&p).ok();
    p
}

pub fn local_sync(path: &Path) -> Synchronizer {
    Synchronizer::new(Box::new(LocalFileStore::new(path)))
}

pub fn record(day: &str, location: &str, vendor: &str, category: &str, time: &str) -> Record {
    Record::new(day, location, vendor, category, time, "")
}

/// Five entries, two of them sharing the key "Dienstag - Rathaus - Curry Bus".
pub fn sample_set() -> RecordSet {
    RecordSet::from(vec![
        record("Montag", "Marktplatz", "Taco Joe", "Mexican", "11:00-14:00"),
        record("Dienstag", "Rathaus", "Curry Bus", "Indian", "11:30-14:30"),
        record("Mittwoch", "Bahnhof", "Pasta Piccola", "Italian", "12:00-15:00"),
        record("Dienstag", "Rathaus", "Curry Bus", "Indian", "17:00-20:00"),
        record("Freitag", "Marktplatz", "Wurstwagen", "German", "10:00-13:00"),
    ])
}

/// Initialize the schedule via CLI and add one entry.
pub fn init_with_entry(home: &Path, file: &str) {
    tp(home)
        .args(["--file", file, "--test", "init"])
        .assert()
        .success();

    tp(home)
        .args([
            "--file",
            file,
            "add",
            "--day",
            "Montag",
            "--location",
            "Marktplatz",
            "--vendor",
            "Taco Joe",
            "--category",
            "Mexican",
            "--from",
            "11:00",
            "--to",
            "14:00",
            "--website",
            "https://tacojoe.example",
        ])
        .assert()
        .success();
}
