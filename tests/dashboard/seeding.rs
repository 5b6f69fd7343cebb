use krishi_dashboard::{Crop, Idea, Product, Query, Record, RecordsExt};

use crate::support::{farmer_store, open};

#[test]
fn first_bootstrap_seeds_every_collection() {
    let dashboard = open(farmer_store());
    let store = dashboard.store();
    assert_eq!(store.records::<Crop>().count(), 2);
    assert_eq!(store.records::<Query>().count(), 1);
    assert_eq!(store.records::<Idea>().count(), 1);
    assert_eq!(store.records::<Product>().count(), 1);
    assert!(!store.records::<Query>().load_all()[0].is_pending());
}

#[test]
fn deleted_key_is_reseeded() {
    let dashboard = open(farmer_store());
    let store = dashboard.store().clone();
    store.remove(Crop::COLLECTION);
    drop(dashboard);

    let dashboard = open(store);
    let names: Vec<String> = dashboard
        .store()
        .records::<Crop>()
        .load_all()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, vec!["Wheat", "Rice"]);
}

#[test]
fn emptied_collection_stays_empty() {
    let dashboard = open(farmer_store());
    let store = dashboard.store().clone();
    store.records::<Crop>().replace_all(&[]);
    drop(dashboard);

    let dashboard = open(store);
    assert_eq!(dashboard.store().records::<Crop>().count(), 0);
    assert!(dashboard.store().contains(Crop::COLLECTION));
}

#[test]
fn malformed_collection_reads_as_empty() {
    let store = farmer_store();
    let key = store.key(Crop::COLLECTION);
    store.set_raw_item(&key, "{not json".into());

    let mut dashboard = open(store);
    assert_eq!(dashboard.store().records::<Crop>().count(), 0);

    crate::support::show(&mut dashboard, krishi_dashboard::ModuleId::Crops);
    assert!(dashboard.content().contains("No crops added yet."));
}
