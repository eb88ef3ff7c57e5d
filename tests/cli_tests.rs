use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;
use truckplan::core::log::append;

mod common;
use common::{init_with_entry, setup_home, tp};

#[test]
fn test_init_creates_empty_schedule_with_header() {
    let (home, file) = setup_home();

    tp(home.path())
        .args(["--file", &file, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Empty schedule created"));

    let content = fs::read_to_string(&file).expect("read schedule");
    assert_eq!(content, "Tag,Ort,Foodtruck,Küche,Zeit,Website,ID\n");

    // A second init leaves the file alone.
    tp(home.path())
        .args(["--file", &file, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("left untouched"));
}

#[test]
fn test_add_then_list_overview() {
    let (home, file) = setup_home();
    init_with_entry(home.path(), &file);

    tp(home.path())
        .args(["--file", &file, "list"])
        .assert()
        .success()
        .stdout(contains("Montag"))
        .stdout(contains("Marktplatz"))
        .stdout(contains("Taco Joe"))
        .stdout(contains("11:00-14:00"))
        .stdout(contains("https://tacojoe.example"));

    let content = fs::read_to_string(&file).unwrap();
    assert!(content.contains("Montag,Marktplatz,Taco Joe,Mexican,11:00-14:00,https://tacojoe.example,"));
}

#[test]
fn test_list_keys_and_day_filter() {
    let (home, file) = setup_home();
    init_with_entry(home.path(), &file);

    tp(home.path())
        .args(["--file", &file, "list", "--keys"])
        .assert()
        .success()
        .stdout(contains("Montag - Marktplatz - Taco Joe"));

    tp(home.path())
        .args(["--file", &file, "list", "--day", "Dienstag"])
        .assert()
        .success()
        .stdout(contains("No entries for this day."))
        .stdout(contains("Taco Joe").not());

    tp(home.path())
        .args(["--file", &file, "list", "--day", "Feiertag"])
        .assert()
        .failure()
        .stderr(contains("unknown day"));
}

#[test]
fn test_add_missing_required_field_fails() {
    let (home, file) = setup_home();
    init_with_entry(home.path(), &file);
    let before = fs::read_to_string(&file).unwrap();

    tp(home.path())
        .args([
            "--file", &file, "add", "--day", "Montag", "--vendor", "Taco Joe", "--category",
            "Mexican", "--from", "11:00", "--to", "14:00",
        ])
        .assert()
        .failure()
        .stderr(contains("required fields are empty: location"));

    assert_eq!(fs::read_to_string(&file).unwrap(), before);
}

#[test]
fn test_add_with_picked_location_and_both_rejected() {
    let (home, file) = setup_home();
    init_with_entry(home.path(), &file);

    tp(home.path())
        .args(["--file", &file, "options"])
        .assert()
        .success()
        .stdout(contains("1. Marktplatz"))
        .stdout(contains("1. Mexican"));

    tp(home.path())
        .args([
            "--file",
            &file,
            "add",
            "--day",
            "Dienstag",
            "--pick-location",
            "1",
            "--vendor",
            "Curry Bus",
            "--category",
            "Indian",
            "--from",
            "11:30",
            "--to",
            "14:30",
        ])
        .assert()
        .success();

    assert!(
        fs::read_to_string(&file)
            .unwrap()
            .contains("Dienstag,Marktplatz,Curry Bus,Indian,11:30-14:30,,")
    );

    tp(home.path())
        .args([
            "--file",
            &file,
            "add",
            "--day",
            "Dienstag",
            "--location",
            "Bahnhof",
            "--pick-location",
            "1",
            "--vendor",
            "Curry Bus",
            "--category",
            "Indian",
            "--from",
            "11:30",
            "--to",
            "14:30",
        ])
        .assert()
        .failure()
        .stderr(contains("not both"));
}

#[test]
fn test_edit_by_index_and_key() {
    let (home, file) = setup_home();
    init_with_entry(home.path(), &file);

    tp(home.path())
        .args(["--file", &file, "edit", "--index", "1", "--vendor", "Taco Jane"])
        .assert()
        .success()
        .stdout(contains("Entry updated"));

    tp(home.path())
        .args([
            "--file",
            &file,
            "edit",
            "--key",
            "Montag - Marktplatz - Taco Jane",
            "--to",
            "15:00",
            "--clear-website",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&file).unwrap();
    assert!(content.contains("Montag,Marktplatz,Taco Jane,Mexican,11:00-15:00,,"));
    assert!(!content.contains("Taco Joe"));

    tp(home.path())
        .args(["--file", &file, "edit", "--index", "1", "--vendor", "Taco Jane"])
        .assert()
        .success()
        .stdout(contains("No changes"));
}

#[test]
fn test_edit_out_of_range_and_unknown_key() {
    let (home, file) = setup_home();
    init_with_entry(home.path(), &file);

    tp(home.path())
        .args(["--file", &file, "edit", "--index", "5", "--vendor", "X"])
        .assert()
        .failure()
        .stderr(contains("out of range"));

    tp(home.path())
        .args(["--file", &file, "del", "--key", "Sonntag - Nirgendwo - Niemand", "--yes"])
        .assert()
        .failure()
        .stderr(contains("not found"));
}

#[test]
fn test_delete_with_confirmation_flag() {
    let (home, file) = setup_home();
    init_with_entry(home.path(), &file);

    // No answer on stdin → cancelled.
    tp(home.path())
        .args(["--file", &file, "del", "--index", "1"])
        .assert()
        .success()
        .stdout(contains("Operation cancelled"));
    assert!(fs::read_to_string(&file).unwrap().contains("Taco Joe"));

    tp(home.path())
        .args(["--file", &file, "del", "--index", "1", "--yes"])
        .assert()
        .success()
        .stdout(contains("has been deleted"));

    assert_eq!(
        fs::read_to_string(&file).unwrap(),
        "Tag,Ort,Foodtruck,Küche,Zeit,Website,ID\n"
    );

    tp(home.path())
        .args(["--file", &file, "list"])
        .assert()
        .success()
        .stdout(contains("No entries."));
}

#[test]
fn test_password_gate() {
    let (home, file) = setup_home();
    init_with_entry(home.path(), &file);

    fs::write(home.path().join("truckplan.conf"), "password: geheim\n").unwrap();

    tp(home.path())
        .args(["--file", &file, "--password", "falsch", "list"])
        .assert()
        .failure()
        .stderr(contains("Access denied"));

    // Prompted, empty stdin.
    tp(home.path())
        .args(["--file", &file, "list"])
        .assert()
        .failure()
        .stderr(contains("Access denied"));

    tp(home.path())
        .env("TRUCKPLAN_PASSWORD", "geheim")
        .args(["--file", &file, "list"])
        .assert()
        .success()
        .stdout(contains("Taco Joe"));
}

#[test]
fn test_list_on_missing_file_is_usable() {
    let (home, file) = setup_home();

    tp(home.path())
        .args(["--file", &file, "list"])
        .assert()
        .success()
        .stdout(contains("created on first save"))
        .stdout(contains("No entries."));
}

#[test]
fn test_list_on_malformed_file_warns() {
    let (home, file) = setup_home();
    fs::write(&file, "foo,bar\n1,2\n").unwrap();

    tp(home.path())
        .args(["--file", &file, "list"])
        .assert()
        .success()
        .stdout(contains("Malformed schedule data"));

    tp(home.path())
        .args(["--file", &file, "del", "--index", "1", "--yes"])
        .assert()
        .failure();

    assert_eq!(fs::read_to_string(&file).unwrap(), "foo,bar\n1,2\n");
}

#[test]
fn test_operation_log_records_changes() {
    let (home, file) = setup_home();
    init_with_entry(home.path(), &file);

    tp(home.path())
        .args(["log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("add"))
        .stdout(contains("Montag - Marktplatz - Taco Joe"));
}

#[test]
fn test_edit_by_listed_id_on_file_without_id_column() {
    let (home, file) = setup_home();
    let raw = "Tag,Ort,Foodtruck,Küche,Zeit\nMontag,Marktplatz,Taco Joe,Mexican,11:00-14:00\n";
    fs::write(&file, raw).unwrap();

    let listed = tp(home.path())
        .args(["--file", &file, "list", "--keys"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let listed = String::from_utf8(listed).unwrap();

    let id = truckplan::store::codec::decode(raw.as_bytes())
        .unwrap()
        .get(0)
        .unwrap()
        .id
        .to_string();
    assert!(listed.contains(&id), "{listed}");

    tp(home.path())
        .args(["--file", &file, "edit", "--id", &id, "--vendor", "Taco Jane"])
        .assert()
        .success()
        .stdout(contains("Entry updated"));

    let content = fs::read_to_string(&file).unwrap();
    assert!(content.contains(&format!("Montag,Marktplatz,Taco Jane,Mexican,11:00-14:00,,{id}")));
}

#[test]
fn test_blank_id_is_not_selectable() {
    let (home, file) = setup_home();
    fs::write(
        &file,
        "Tag,Ort,Foodtruck,Küche,Zeit,Website,ID\nMontag,Marktplatz,Taco Joe,Mexican,11:00-14:00,,\n",
    )
    .unwrap();

    tp(home.path())
        .args(["--file", &file, "list", "--keys"])
        .assert()
        .success()
        .stdout(contains("(none)"));

    tp(home.path())
        .args(["--file", &file, "del", "--id", " ", "--yes"])
        .assert()
        .failure()
        .stderr(contains("--id must not be empty"));
}

#[test]
fn test_log_pads_by_operation_and_target_only() {
    let (home, _file) = setup_home();
    let log = home.path().join("truckplan.log.csv");
    let long_message = "x".repeat(80);

    append(&log, "add", "Montag - A - B", &long_message).unwrap();
    append(&log, "del", "Montag - A - B", &long_message).unwrap();

    tp(home.path())
        .args(["log", "--print"])
        .assert()
        .success()
        .stdout(contains(format!("(Montag - A - B) => {long_message}")));
}

#[cfg(unix)]
#[test]
fn test_config_edit_falls_back_to_env_editor() {
    let (home, _file) = setup_home();

    tp(home.path())
        .args(["config", "--edit", "--editor", "true"])
        .assert()
        .success()
        .stdout(contains("Configuration edited with 'true'"));

    tp(home.path())
        .env_remove("VISUAL")
        .env("EDITOR", "true")
        .args(["config", "--edit", "--editor", "no-such-editor-truckplan"])
        .assert()
        .success()
        .stdout(contains("Editor 'no-such-editor-truckplan' did not run"))
        .stdout(contains("Configuration edited with 'true'"));
}
