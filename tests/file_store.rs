mod common;

use std::fs;
use std::sync::Arc;

use common::{item, reference_items, ScriptedSource};
use stockroom::catalog::Catalog;
use stockroom::inventory::InventoryMachine;
use stockroom::model::ItemPatch;
use stockroom::store::{FileStore, PersistenceStore};
use tempfile::TempDir;

#[test]
fn test_set_get_clear() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileStore::new(temp_dir.path().join("nested/dir/items.json"));
    assert!(store.get().is_none());

    let items = vec![item("ITM-0001", 2.5, 4)];
    store.set(&items).unwrap();
    assert_eq!(store.get(), Some(items));

    store.clear().unwrap();
    assert!(store.get().is_none());
    // Clearing twice is fine.
    store.clear().unwrap();
}

#[test]
fn test_failed_replace_leaves_no_temp_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("items.json");
    // A non-empty directory in the way makes the final rename fail.
    fs::create_dir_all(path.join("occupied")).unwrap();
    let store = FileStore::new(path.clone());

    assert!(store.set(&[item("ITM-0001", 1.0, 1)]).is_err());
    assert!(!temp_dir.path().join("items.json.tmp").exists());
    assert!(path.is_dir());
}

#[test]
fn test_stored_format_is_json_array_with_camel_case_timestamp() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileStore::new(temp_dir.path().join("items.json"));
    store.set(&[item("ITM-0001", 2.5, 4)]).unwrap();

    let raw = fs::read_to_string(store.path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let first = &value.as_array().unwrap()[0];
    assert_eq!(first["id"], "ITM-0001");
    assert_eq!(first["category"], "Electronics");
    assert_eq!(first["stock"], 4);
    assert!(first["updatedAt"].as_str().unwrap().starts_with("2026-05-04T12:00:00"));
}

#[test]
fn test_corrupt_file_reads_as_absent() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("items.json");
    fs::write(&path, "{\"oops\": true}").unwrap();
    assert!(FileStore::new(path).get().is_none());
}

#[test]
fn test_default_path_uses_storage_key() {
    let path = FileStore::default_path();
    assert!(path.ends_with("stockroom/inventory_items_v1.json"));
}

#[tokio::test]
async fn test_edits_survive_a_new_session() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("items.json");
    let catalog = Catalog::from_items(reference_items());

    let mut first = InventoryMachine::new(
        FileStore::new(path.clone()),
        Arc::new(ScriptedSource::new(catalog.clone())),
        catalog.clone(),
    );
    first.load().await;
    first.save_item("ITM-0001", ItemPatch::new(9.99, 3).unwrap());
    drop(first);

    let mut second = InventoryMachine::new(
        FileStore::new(path.clone()),
        Arc::new(ScriptedSource::new(catalog.clone())),
        catalog,
    );
    second.load().await;
    let edited = second.state().item("ITM-0001").unwrap();
    assert_eq!(edited.price, 9.99);
    assert_eq!(edited.stock, 3);

    second.reset();
    assert!(!path.exists());
}
