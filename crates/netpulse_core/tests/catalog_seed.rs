use netpulse_core::db::open_db;
use netpulse_core::{
    default_seed, CatalogError, MemorySlotStore, OperatorCatalog, OperatorRecord, SlotStore,
    SqliteSlotStore, DATA_SLOT_KEY,
};

#[test]
fn absent_slot_is_seeded_with_default_operators() {
    let store = MemorySlotStore::new();
    let catalog = OperatorCatalog::new(&store);

    assert!(catalog.initialize().unwrap());

    let raw = store.get(DATA_SLOT_KEY).unwrap().expect("slot written");
    let stored: Vec<OperatorRecord> = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored, default_seed());

    let records = catalog.records().unwrap();
    let expected = [
        ("1", "GLO"),
        ("2", "MTN"),
        ("3", "AIRTEL"),
        ("4", "9MOBILE"),
    ];
    assert_eq!(records.len(), expected.len());
    for (record, (id, operator)) in records.iter().zip(expected) {
        assert_eq!(record.id, id);
        assert_eq!(record.network_operator, operator);
    }
}

#[test]
fn second_initialize_is_a_noop() {
    let store = MemorySlotStore::new();
    let catalog = OperatorCatalog::new(&store);

    assert!(catalog.initialize().unwrap());
    let first_payload = store.get(DATA_SLOT_KEY).unwrap();

    assert!(!catalog.initialize().unwrap());
    assert_eq!(store.get(DATA_SLOT_KEY).unwrap(), first_payload);
}

#[test]
fn preexisting_payload_is_never_overwritten() {
    let store = MemorySlotStore::new();
    let custom = r#"[{"id":"9","network_operator":"CUSTOM"}]"#;
    store.set(DATA_SLOT_KEY, custom).unwrap();

    let catalog = OperatorCatalog::new(&store);
    assert!(!catalog.initialize().unwrap());
    assert_eq!(store.get(DATA_SLOT_KEY).unwrap().as_deref(), Some(custom));

    let records = catalog.records().unwrap();
    assert_eq!(records, vec![OperatorRecord::new("9", "CUSTOM")]);
}

#[test]
fn absent_slot_reads_as_empty() {
    let catalog = OperatorCatalog::new(MemorySlotStore::new());
    assert!(catalog.records().unwrap().is_empty());
}

#[test]
fn empty_string_reads_as_empty_but_blocks_seeding() {
    let store = MemorySlotStore::new();
    store.set(DATA_SLOT_KEY, "").unwrap();

    let catalog = OperatorCatalog::new(&store);
    assert!(catalog.records().unwrap().is_empty());

    assert!(!catalog.initialize().unwrap());
    assert_eq!(store.get(DATA_SLOT_KEY).unwrap().as_deref(), Some(""));
}

#[test]
fn malformed_payload_surfaces_format_error() {
    let store = MemorySlotStore::new();
    store.set(DATA_SLOT_KEY, "{not a record list").unwrap();

    let catalog = OperatorCatalog::new(&store);
    let err = catalog.records().unwrap_err();
    assert!(matches!(err, CatalogError::Format { slot, .. } if slot == DATA_SLOT_KEY));

    assert!(!catalog.initialize().unwrap());
    assert_eq!(
        store.get(DATA_SLOT_KEY).unwrap().as_deref(),
        Some("{not a record list")
    );
}

#[test]
fn seed_is_injectable_configuration() {
    let single_operator_seed = vec![
        OperatorRecord::new("1", "GLO"),
        OperatorRecord::new("2", "GLO"),
        OperatorRecord::new("3", "GLO"),
        OperatorRecord::new("4", "GLO"),
    ];
    let catalog =
        OperatorCatalog::with_seed(MemorySlotStore::new(), single_operator_seed.clone());

    assert!(catalog.initialize().unwrap());
    assert_eq!(catalog.records().unwrap(), single_operator_seed);
}

#[test]
fn seeded_catalog_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("netpulse.db");

    {
        let conn = open_db(&path).unwrap();
        let store = SqliteSlotStore::try_new(&conn).unwrap();
        let catalog = OperatorCatalog::new(store);
        assert!(catalog.initialize().unwrap());
    }

    let conn = open_db(&path).unwrap();
    let store = SqliteSlotStore::try_new(&conn).unwrap();
    let catalog = OperatorCatalog::new(store);

    assert!(!catalog.initialize().unwrap());
    assert_eq!(catalog.records().unwrap(), default_seed());
}
