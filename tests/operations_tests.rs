mod common;
use common::{local_sync, record, sample_set, temp_csv};
use std::fs;
use truckplan::core::{AddLogic, DeleteLogic, EditLogic, EditOutcome, Session, View};
use truckplan::errors::AppError;

fn open(session: &mut Session, sync: &truckplan::store::Synchronizer) -> View {
    View::open(session, sync).expect("open view")
}

#[test]
fn test_gate_blocks_views_and_operations() {
    let dir = tempfile::tempdir().unwrap();
    let path = temp_csv(&dir, "gated.csv");
    let sync = local_sync(&path);
    sync.push(&sample_set(), None).unwrap();
    let before = fs::read(&path).unwrap();

    let mut denied = Session::open(Some("geheim"), Some("falsch"));
    assert!(!denied.is_authorized());
    assert!(matches!(
        View::open(&mut denied, &sync),
        Err(AppError::Unauthorized)
    ));

    let mut session = Session::open(Some("geheim"), Some("geheim"));
    let mut view = open(&mut session, &sync);
    session.end();

    let r = record("Montag", "Hafen", "Taco Joe", "Mexican", "11:00-14:00");
    assert!(matches!(
        AddLogic::apply(&mut session, &sync, &mut view, r),
        Err(AppError::Unauthorized)
    ));
    assert!(matches!(
        DeleteLogic::apply(&mut session, &sync, &mut view, 0),
        Err(AppError::Unauthorized)
    ));
    assert_eq!(fs::read(&path).unwrap(), before);
}

#[test]
fn test_no_password_configured_means_open_gate() {
    assert!(Session::open(None, None).is_authorized());
    assert!(Session::open(None, Some("anything")).is_authorized());
    assert!(!Session::open(Some("geheim"), None).is_authorized());
}

#[test]
fn test_add_appends_and_persists() {
    let dir = tempfile::tempdir().unwrap();
    let path = temp_csv(&dir, "add.csv");
    let sync = local_sync(&path);
    sync.push(&sample_set(), None).unwrap();

    let mut session = Session::open(None, None);
    let mut view = open(&mut session, &sync);
    let first_marker = session.marker().cloned();

    let r = record("Montag", "Marktplatz", "Taco Joe", "Mexican", "11:00-14:00");
    let stored = AddLogic::apply(&mut session, &sync, &mut view, r).expect("add");

    assert_ne!(session.marker().cloned(), first_marker);
    let reloaded = sync.fetch().records;
    assert_eq!(reloaded.len(), 6);
    assert_eq!(reloaded.get(5), Some(&stored));
    assert_eq!(view.records, reloaded);
}

#[test]
fn test_add_on_missing_file_creates_it() {
    let dir = tempfile::tempdir().unwrap();
    let path = temp_csv(&dir, "fresh.csv");
    let sync = local_sync(&path);

    let mut session = Session::open(None, None);
    let mut view = open(&mut session, &sync);
    assert!(matches!(view.warning, Some(AppError::NotFound(_))));

    let r = record("Montag", "Marktplatz", "Taco Joe", "Mexican", "11:00-14:00");
    AddLogic::apply(&mut session, &sync, &mut view, r).expect("add");

    assert!(path.exists());
    assert_eq!(sync.fetch().records.len(), 1);
}

#[test]
fn test_invalid_add_changes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = temp_csv(&dir, "invalid.csv");
    let sync = local_sync(&path);
    sync.push(&sample_set(), None).unwrap();
    let before = fs::read(&path).unwrap();

    let mut session = Session::open(None, None);
    let mut view = open(&mut session, &sync);

    let r = record("Montag", "", "Taco Joe", "Mexican", "11:00-14:00");
    assert!(matches!(
        AddLogic::apply(&mut session, &sync, &mut view, r),
        Err(AppError::Validation(_))
    ));
    assert_eq!(view.records.len(), 5);
    assert_eq!(fs::read(&path).unwrap(), before);
}

#[test]
fn test_conflict_discards_the_mutation() {
    let dir = tempfile::tempdir().unwrap();
    let path = temp_csv(&dir, "race.csv");
    let sync = local_sync(&path);
    sync.push(&sample_set(), None).unwrap();

    let mut alice = Session::open(None, None);
    let mut alice_view = open(&mut alice, &sync);
    let loaded = alice_view.records.clone();
    let mut bob = Session::open(None, None);
    let mut bob_view = open(&mut bob, &sync);

    DeleteLogic::apply(&mut bob, &sync, &mut bob_view, 0).expect("bob deletes");
    let winner = fs::read(&path).unwrap();

    let r = record("Sonntag", "Park", "Eiswagen", "Dessert", "13:00-18:00");
    let result = AddLogic::apply(&mut alice, &sync, &mut alice_view, r);

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(alice_view.records, loaded);
    assert_eq!(fs::read(&path).unwrap(), winner);

    // After a reload the same edit goes through.
    let mut alice_view = open(&mut alice, &sync);
    let r = record("Sonntag", "Park", "Eiswagen", "Dessert", "13:00-18:00");
    AddLogic::apply(&mut alice, &sync, &mut alice_view, r).expect("retry after reload");
    assert_eq!(sync.fetch().records.len(), 5);
}

#[test]
fn test_edit_identical_skips_push() {
    let dir = tempfile::tempdir().unwrap();
    let path = temp_csv(&dir, "same.csv");
    let sync = local_sync(&path);
    sync.push(&sample_set(), None).unwrap();
    let before = fs::read(&path).unwrap();

    let mut session = Session::open(None, None);
    let mut view = open(&mut session, &sync);
    let marker = session.marker().cloned();

    let same = view.records.get(2).unwrap().clone();
    let outcome = EditLogic::apply(&mut session, &sync, &mut view, 2, same).expect("edit");

    assert_eq!(outcome, EditOutcome::Unchanged);
    assert_eq!(session.marker().cloned(), marker);
    assert_eq!(fs::read(&path).unwrap(), before);
}

#[test]
fn test_edit_replaces_and_persists() {
    let dir = tempfile::tempdir().unwrap();
    let path = temp_csv(&dir, "edit.csv");
    let sync = local_sync(&path);
    sync.push(&sample_set(), None).unwrap();

    let mut session = Session::open(None, None);
    let mut view = open(&mut session, &sync);
    let id = view.records.get(0).unwrap().id.clone();

    let replacement = record("Montag", "Marktplatz", "Taco Jane", "Mexican", "11:00-15:00");
    match EditLogic::apply(&mut session, &sync, &mut view, 0, replacement).expect("edit") {
        EditOutcome::Updated { before, after } => {
            assert_eq!(before.vendor_name, "Taco Joe");
            assert_eq!(after.vendor_name, "Taco Jane");
            assert_eq!(after.id, id);
        }
        EditOutcome::Unchanged => panic!("expected an update"),
    }

    let reloaded = sync.fetch().records;
    assert_eq!(reloaded.get(0).unwrap().vendor_name, "Taco Jane");
    assert_eq!(reloaded.get(0).unwrap().id, id);
    assert_eq!(reloaded.len(), 5);
}

#[test]
fn test_edit_and_delete_out_of_range() {
    let dir = tempfile::tempdir().unwrap();
    let path = temp_csv(&dir, "range.csv");
    let sync = local_sync(&path);
    sync.push(&sample_set(), None).unwrap();

    let mut session = Session::open(None, None);
    let mut view = open(&mut session, &sync);

    let r = record("Montag", "A", "B", "C", "11:00-14:00");
    assert!(matches!(
        EditLogic::apply(&mut session, &sync, &mut view, 5, r),
        Err(AppError::OutOfRange { .. })
    ));
    assert!(matches!(
        DeleteLogic::apply(&mut session, &sync, &mut view, 42),
        Err(AppError::OutOfRange { .. })
    ));
}

#[test]
fn test_delete_persists_and_keeps_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = temp_csv(&dir, "delete.csv");
    let sync = local_sync(&path);
    let seed = sample_set();
    sync.push(&seed, None).unwrap();

    let mut session = Session::open(None, None);
    let mut view = open(&mut session, &sync);

    let removed = DeleteLogic::apply(&mut session, &sync, &mut view, 2).expect("delete");
    assert_eq!(removed.vendor_name, "Pasta Piccola");

    let reloaded = sync.fetch().records;
    let expected: Vec<_> = seed
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != 2)
        .map(|(_, r)| r.clone())
        .collect();
    assert_eq!(reloaded.as_slice(), expected.as_slice());
}

#[test]
fn test_unreadable_schedule_is_never_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let path = temp_csv(&dir, "garbage.csv");
    fs::write(&path, "foo,bar\n1,2\n").unwrap();

    let mut session = Session::open(None, None);
    let sync = local_sync(&path);
    let mut view = open(&mut session, &sync);
    assert!(matches!(view.warning, Some(AppError::Format(_))));

    let r = record("Montag", "Marktplatz", "Taco Joe", "Mexican", "11:00-14:00");
    assert!(matches!(
        AddLogic::apply(&mut session, &sync, &mut view, r),
        Err(AppError::Format(_))
    ));
    assert_eq!(fs::read_to_string(&path).unwrap(), "foo,bar\n1,2\n");
}

#[test]
fn test_edit_identical_on_free_text_row_leaves_file_alone() {
    let dir = tempfile::tempdir().unwrap();
    let path = temp_csv(&dir, "legacy.csv");
    let raw = "Tag,Ort,Foodtruck,Küche,Zeit,Website,ID\nmontag,Marktplatz,Taco Joe,Mexican,11:00 - 14:00,,abc\n";
    fs::write(&path, raw).unwrap();

    let sync = local_sync(&path);
    let mut session = Session::open(None, None);
    let mut view = open(&mut session, &sync);

    let current = view.records.get(0).unwrap().clone();
    let outcome = EditLogic::apply(&mut session, &sync, &mut view, 0, current).expect("edit");

    assert_eq!(outcome, EditOutcome::Unchanged);
    assert_eq!(fs::read_to_string(&path).unwrap(), raw);
}
