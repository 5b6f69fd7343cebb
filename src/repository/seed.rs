//! Built-in records written on first run.

use chrono::NaiveDate;
use tracing::info;

use crate::model::{Crop, Idea, IdeaCategory, Product, Query, Season};
use crate::store::{JsonStore, KeyValueStore};
use crate::RecordsExt;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

pub fn seed_crops() -> Vec<Crop> {
    vec![
        Crop {
            id: 1,
            name: "Wheat".into(),
            season: Season::Rabi,
            sowing_date: date(2023, 11, 15),
            harvest_date: date(2024, 4, 10),
            fertilizer: Some("DAP, Urea".into()),
        },
        Crop {
            id: 2,
            name: "Rice".into(),
            season: Season::Kharif,
            sowing_date: date(2023, 6, 20),
            harvest_date: date(2023, 10, 25),
            fertilizer: Some("NPK".into()),
        },
    ]
}

pub fn seed_ideas() -> Vec<Idea> {
    vec![Idea {
        id: 1,
        title: "Drip Irrigation Hack".into(),
        category: IdeaCategory::WaterSaving,
        description: "Use old bottles for drip irrigation in small gardens.".into(),
        author: "Rajesh Kumar".into(),
    }]
}

pub fn seed_queries() -> Vec<Query> {
    vec![Query::resolved(
        1,
        "Yellow leaves in Wheat",
        date(2023, 12, 1),
        "It might be nitrogen deficiency. Apply Urea.",
    )]
}

pub fn seed_products() -> Vec<Product> {
    vec![Product {
        id: 1,
        name: "Organic Potatoes".into(),
        quantity: "500 kg".into(),
        price: "20/kg".into(),
        seller: "Rajesh Kumar".into(),
    }]
}

/// Seed every dashboard collection whose key is absent. Users are never
/// seeded. Returns how many collections were written.
pub fn seed_all<S: KeyValueStore>(store: &JsonStore<S>) -> usize {
    let written = [
        store.records::<Crop>().seed_if_absent(&seed_crops()),
        store.records::<Query>().seed_if_absent(&seed_queries()),
        store.records::<Idea>().seed_if_absent(&seed_ideas()),
        store.records::<Product>().seed_if_absent(&seed_products()),
    ]
    .into_iter()
    .filter(|written| *written)
    .count();

    if written > 0 {
        info!(collections = written, "seeded dashboard data");
    }
    written
}
