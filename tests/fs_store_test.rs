use std::fs;

use columns_filter::store::fs::FileStore;
use columns_filter::store::SessionStore;
use tempfile::TempDir;

fn setup() -> (TempDir, FileStore) {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path().to_path_buf());
    (dir, store)
}

#[test]
fn get_before_any_write_is_none() {
    let (_dir, store) = setup();
    assert_eq!(store.get("users-columns-filter-fields").unwrap(), None);
}

#[test]
fn set_then_get_round_trips() {
    let (_dir, store) = setup();
    let selection = vec!["name".to_string(), "email".to_string()];

    store.set("users-columns-filter-fields", &selection).unwrap();
    assert_eq!(
        store.get("users-columns-filter-fields").unwrap(),
        Some(selection)
    );
}

#[test]
fn set_overwrites_and_keeps_other_keys() {
    let (_dir, store) = setup();
    store.set("users-columns-filter-fields", &["name".to_string()]).unwrap();
    store
        .set("invoices-columns-filter-fields", &["total".to_string()])
        .unwrap();
    store
        .set("users-columns-filter-fields", &["email".to_string()])
        .unwrap();

    assert_eq!(
        store.get("users-columns-filter-fields").unwrap(),
        Some(vec!["email".to_string()])
    );
    assert_eq!(
        store.get("invoices-columns-filter-fields").unwrap(),
        Some(vec!["total".to_string()])
    );
}

#[test]
fn writes_leave_no_tmp_artifacts() {
    let (dir, store) = setup();
    store.set("users-columns-filter-fields", &["name".to_string()]).unwrap();

    assert!(dir.path().join("selections.json").exists());
    for entry in fs::read_dir(dir.path()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn selections_survive_a_new_store_over_the_same_root() {
    let (dir, store) = setup();
    store.set("users-columns-filter-fields", &["name".to_string()]).unwrap();

    let reopened = FileStore::new(dir.path().to_path_buf());
    assert_eq!(
        reopened.get("users-columns-filter-fields").unwrap(),
        Some(vec!["name".to_string()])
    );
}

#[test]
fn separate_roots_are_isolated() {
    let (_dir_a, session_a) = setup();
    let (_dir_b, session_b) = setup();

    session_a
        .set("users-columns-filter-fields", &["name".to_string()])
        .unwrap();
    assert_eq!(session_b.get("users-columns-filter-fields").unwrap(), None);
}

#[test]
fn corrupt_data_file_surfaces_as_serialization_error() {
    let (dir, store) = setup();
    fs::write(dir.path().join("selections.json"), "{not json").unwrap();

    assert!(store.get("users-columns-filter-fields").is_err());
}
