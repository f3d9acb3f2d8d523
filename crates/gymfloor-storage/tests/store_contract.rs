//! The same contract checked against every `LayoutStore` implementation.

use gymfloor_core::{default_layout, FloorRect, Layout, Zone, ZoneType};
use gymfloor_storage::{InMemoryStore, JsonDirectoryStore, LayoutLibrary, LayoutStore};
use std::sync::Arc;
use tempfile::tempdir;

async fn check_contract(store: Arc<dyn LayoutStore>) {
    assert!(store.list_layouts().await.unwrap().is_empty());

    let first = Layout::new("gym-first", "First");
    let second = default_layout();
    store.create_layout(&first).await.unwrap();
    store.create_layout(&second).await.unwrap();

    let ids: Vec<String> = store
        .list_layouts()
        .await
        .unwrap()
        .into_iter()
        .map(|l| l.id)
        .collect();
    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&first.id) && ids.contains(&second.id));

    // Full replace: the saved zone list is exactly what was sent.
    let replaced = second.with_zone_added(Zone::new(
        "zone-extra",
        "Extra",
        ZoneType::Functional,
        FloorRect::new(10.0, 10.0, 50.0, 50.0),
        "#fff",
    ));
    let replaced = replaced.without_zone("zone-turf").unwrap();
    store.save_layout(&replaced).await.unwrap();
    let stored = store
        .list_layouts()
        .await
        .unwrap()
        .into_iter()
        .find(|l| l.id == second.id)
        .unwrap();
    assert_eq!(stored, replaced);

    store.delete_layout(&first.id).await.unwrap();
    assert_eq!(store.list_layouts().await.unwrap().len(), 1);
    assert!(store.delete_layout(&first.id).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn in_memory_store_contract() {
    check_contract(Arc::new(InMemoryStore::new())).await;
}

#[tokio::test]
async fn json_directory_store_contract() {
    let dir = tempdir().unwrap();
    check_contract(Arc::new(JsonDirectoryStore::new(dir.path().join("layouts")))).await;
}

#[tokio::test]
async fn library_survives_a_restart() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("layouts");

    let library = LayoutLibrary::new(Arc::new(JsonDirectoryStore::new(&path)));
    let mut layouts = library.load_all().await;
    assert_eq!(layouts.len(), 1);
    let edited = layouts.remove(0).with_name("Riverside");
    assert!(library.save(&edited).await);
    let created = library.new_layout().await;

    let reopened = LayoutLibrary::new(Arc::new(JsonDirectoryStore::new(&path)));
    let names: Vec<String> = reopened
        .load_all()
        .await
        .into_iter()
        .map(|l| l.name)
        .collect();
    assert!(names.contains(&"Riverside".to_string()));
    assert!(names.contains(&created.name));
}
