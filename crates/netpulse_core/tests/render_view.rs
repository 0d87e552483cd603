use netpulse_core::{
    CatalogError, MemorySlotStore, OperatorCatalog, RecordContainer, RenderedRecord, SlotStore,
    TextContainer, DATA_SLOT_KEY,
};

fn stale_container() -> TextContainer {
    let mut container = TextContainer::new();
    container.append(RenderedRecord {
        id: "stale".to_string(),
        network_operator: "STALE".to_string(),
    });
    container
}

#[test]
fn render_without_data_clears_the_container() {
    let catalog = OperatorCatalog::new(MemorySlotStore::new());
    let mut container = stale_container();

    let appended = catalog.render_into(&mut container).unwrap();

    assert_eq!(appended, 0);
    assert!(container.items().is_empty());
}

#[test]
fn render_after_seeding_appends_one_item_per_record_in_order() {
    let catalog = OperatorCatalog::new(MemorySlotStore::new());
    catalog.initialize().unwrap();

    let mut container = TextContainer::new();
    let appended = catalog.render_into(&mut container).unwrap();

    assert_eq!(appended, 4);
    let expected = [
        ("1", "GLO"),
        ("2", "MTN"),
        ("3", "AIRTEL"),
        ("4", "9MOBILE"),
    ];
    for (item, (id, operator)) in container.items().iter().zip(expected) {
        assert_eq!(item.id, id);
        assert_eq!(item.network_operator, operator);
    }
    assert_eq!(container.lines()[0], "1 GLO");
}

#[test]
fn repeated_render_does_not_duplicate_items() {
    let catalog = OperatorCatalog::new(MemorySlotStore::new());
    catalog.initialize().unwrap();

    let mut container = TextContainer::new();
    catalog.render_into(&mut container).unwrap();
    catalog.render_into(&mut container).unwrap();

    assert_eq!(container.items().len(), 4);
}

#[test]
fn render_clears_before_surfacing_format_errors() {
    let store = MemorySlotStore::new();
    store.set(DATA_SLOT_KEY, "garbage").unwrap();

    let catalog = OperatorCatalog::new(&store);
    let mut container = stale_container();

    let err = catalog.render_into(&mut container).unwrap_err();
    assert!(matches!(err, CatalogError::Format { .. }));
    assert!(container.items().is_empty());
}
