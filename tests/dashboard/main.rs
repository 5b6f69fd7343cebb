//! Dashboard integration tests: the full user flow, the expert-reply
//! simulation, rendering and seeding.

mod support;
mod queries;
mod rendering;
mod seeding;

use krishi_dashboard::{
    Crop, Dashboard, EventKind, FormData, InMemoryStore, ManualClock, ModuleId, RecordsExt,
    SessionManager, UserType,
};
use support::{clock, open, show};

fn crop_names(dashboard: &Dashboard<InMemoryStore, ManualClock>) -> Vec<String> {
    dashboard
        .store()
        .records::<Crop>()
        .load_all()
        .into_iter()
        .map(|c| c.name)
        .collect()
}

#[test]
fn register_login_add_and_delete_crops() {
    let store = support::store();
    support::register(&store, "A", "a@x.com", UserType::Farmer);

    let clock = clock();
    let sessions = SessionManager::new(&store, &clock);
    let duplicate = sessions.register(krishi_dashboard::NewUser {
        name: "Other".into(),
        email: "a@x.com".into(),
        password: "pw".into(),
        location: "Pune".into(),
        user_type: UserType::Buyer,
    });
    assert!(matches!(
        duplicate,
        Err(krishi_dashboard::AuthError::DuplicateEmail(_))
    ));
    sessions.authenticate("a@x.com", "secret").unwrap();

    let mut dashboard = open(store);
    show(&mut dashboard, ModuleId::Crops);

    dashboard.trigger("addCrop", EventKind::Click, FormData::new());
    dashboard.trigger(
        "addCropForm",
        EventKind::Submit,
        FormData::new()
            .with("c_name", "Maize")
            .with("c_season", "Kharif")
            .with("c_sow", "2024-06-01")
            .with("c_harv", "2024-09-15"),
    );
    assert_eq!(crop_names(&dashboard), vec!["Wheat", "Rice", "Maize"]);
    assert!(dashboard.content().contains("Maize"));

    dashboard.trigger("deleteCrop-1", EventKind::Click, FormData::new());
    assert_eq!(crop_names(&dashboard), vec!["Rice", "Maize"]);
    assert!(!dashboard.content().contains("deleteCrop-1\""));
}

#[test]
fn deleting_keeps_the_others_in_order() {
    let mut dashboard = open(support::farmer_store());
    for name in ["Maize", "Bajra", "Jowar"] {
        dashboard.add_crop(
            &FormData::new()
                .with("c_name", name)
                .with("c_season", "Zaid")
                .with("c_sow", "2024-03-01")
                .with("c_harv", "2024-05-30"),
        );
    }
    let before = dashboard.store().records::<Crop>().load_all();
    let target = before[2].id;

    dashboard.delete_crop(target);
    let after = dashboard.store().records::<Crop>().load_all();
    let expected: Vec<Crop> = before.into_iter().filter(|c| c.id != target).collect();
    assert_eq!(after, expected);
}

#[test]
fn deleting_unknown_crop_is_a_notice() {
    let mut dashboard = open(support::farmer_store());
    dashboard.delete_crop(42);
    assert_eq!(crop_names(&dashboard), vec!["Wheat", "Rice"]);
    assert_eq!(
        dashboard.banner().map(|b| b.kind),
        Some(krishi_dashboard::FeedbackKind::Notice)
    );
}

#[test]
fn ideas_and_products_carry_the_session_name() {
    let mut dashboard = open(support::farmer_store());
    show(&mut dashboard, ModuleId::Ideas);
    dashboard.trigger(
        "addIdeaForm",
        EventKind::Submit,
        FormData::new()
            .with("i_title", "Mulching")
            .with("i_cat", "Water Saving")
            .with("i_desc", "Straw mulch keeps soil moist."),
    );
    let ideas = dashboard.store().records::<krishi_dashboard::Idea>().load_all();
    assert_eq!(ideas.last().unwrap().author, "Asha");

    show(&mut dashboard, ModuleId::Market);
    dashboard.trigger(
        "addProductForm",
        EventKind::Submit,
        FormData::new()
            .with("p_name", "Onion")
            .with("p_qty", "200 kg")
            .with("p_price", "25"),
    );
    let products = dashboard
        .store()
        .records::<krishi_dashboard::Product>()
        .load_all();
    assert_eq!(products.last().unwrap().seller, "Asha");
    assert!(dashboard.content().contains("Onion"));
}

#[test]
fn export_produces_csv_download() {
    let mut dashboard = open(support::farmer_store());
    show(&mut dashboard, ModuleId::Crops);

    let effect = dashboard.trigger("exportCrops", EventKind::Click, FormData::new());
    let Some(krishi_dashboard::Effect::Download(export)) = effect else {
        panic!("expected a download, got {:?}", effect);
    };
    assert_eq!(export.filename, "my_crops.csv");
    let lines: Vec<&str> = export.content.lines().collect();
    assert_eq!(lines[0], "ID,Name,Season,SowingDate,HarvestDate");
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("1,Wheat,Rabi,"));
    assert!(export.data_uri().starts_with("data:text/csv;charset=utf-8;base64,"));
}

#[test]
fn logout_ends_the_session() {
    let mut dashboard = open(support::farmer_store());
    let effect = dashboard.trigger("logoutBtn", EventKind::Click, FormData::new());
    assert_eq!(
        effect,
        Some(krishi_dashboard::Effect::Redirect(krishi_dashboard::Page::Index))
    );

    let store = dashboard.store().clone();
    let again = Dashboard::bootstrap(
        store,
        krishi_dashboard::DashboardConfig::default(),
        clock(),
    );
    assert!(matches!(
        again,
        Err(krishi_dashboard::AuthError::NotAuthenticated)
    ));
}

#[test]
fn ids_stay_unique_across_sessions() {
    let maize = FormData::new()
        .with("c_name", "Maize")
        .with("c_season", "Kharif")
        .with("c_sow", "2024-06-01")
        .with("c_harv", "2024-09-15");
    let bajra = maize.clone().with("c_name", "Bajra");

    let mut first = open(support::farmer_store());
    first.add_crop(&maize);
    let store = first.store().clone();
    drop(first);

    // Same frozen clock, fresh generator.
    let mut second = open(store);
    second.add_crop(&bajra);

    let crops = second.store().records::<Crop>().load_all();
    let ids: Vec<u64> = crops.iter().map(|c| c.id).collect();
    assert_eq!(ids.len(), 4);
    assert_ne!(ids[2], ids[3]);

    second.delete_crop(ids[2]);
    assert_eq!(crop_names(&second), vec!["Wheat", "Rice", "Bajra"]);
}
