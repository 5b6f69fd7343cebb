use krishi_dashboard::{
    EventKind, FormData, InMemoryStore, Intent, Modal, ModuleId, ModuleRegistry, RenderContext, RenderTarget,
    UserType,
};

use crate::support::{farmer_store, login, open, register, show};

#[test]
fn rendering_twice_is_byte_identical() {
    let dashboard = open(farmer_store());
    let registry = ModuleRegistry::<InMemoryStore>::standard();

    for module in ModuleId::ALL {
        let ctx = RenderContext {
            store: dashboard.store(),
            user: dashboard.user(),
            active: &module,
            open_modal: None,
        };
        let first = registry.render(&module, &ctx);
        let second = registry.render(&module, &ctx);
        assert_eq!(first, second, "{} rendered differently", module);
    }
}

#[test]
fn rerendering_never_accumulates_bindings() {
    let mut dashboard = open(farmer_store());
    show(&mut dashboard, ModuleId::Crops);
    let bindings = dashboard.surface().bindings().len();

    for _ in 0..5 {
        dashboard.dispatch(Intent::OpenModal(Modal::AddCrop), FormData::new());
        dashboard.dispatch(Intent::CloseModal, FormData::new());
    }
    show(&mut dashboard, ModuleId::Crops);

    assert_eq!(dashboard.surface().bindings().len(), bindings);
    let export_bindings = dashboard
        .surface()
        .bindings()
        .iter()
        .filter(|b| b.element_id == "exportCrops")
        .count();
    assert_eq!(export_bindings, 1);
}

#[test]
fn unknown_module_shows_placeholder() {
    let mut dashboard = open(farmer_store());
    show(&mut dashboard, ModuleId::parse("weather"));
    assert_eq!(dashboard.content(), "<p>Module not found.</p>");
    assert!(dashboard.shell().content().contains(">Weather</h2>"));
}

#[test]
fn sidebar_links_navigate() {
    let mut dashboard = open(farmer_store());
    dashboard.trigger("nav-schemes", EventKind::Click, FormData::new());
    assert_eq!(dashboard.active_module(), &ModuleId::Schemes);
    assert!(dashboard.content().contains("Loading"));

    dashboard.run_until_idle();
    assert!(dashboard.content().contains("Soil Health Card Scheme"));
    assert!(dashboard
        .shell()
        .content()
        .contains("<a id=\"nav-schemes\" class=\"nav-link active\""));
}

#[test]
fn admin_link_depends_on_the_session() {
    let dashboard = open(farmer_store());
    assert!(!dashboard.shell().content().contains("nav-admin"));

    let store = farmer_store();
    register(&store, "Root", "admin@krishi.in", UserType::Farmer);
    login(&store, "admin@krishi.in");
    let mut dashboard = open(store);
    assert!(dashboard.shell().content().contains("nav-admin"));

    dashboard.trigger("nav-admin", EventKind::Click, FormData::new());
    dashboard.run_until_idle();
    assert!(dashboard.content().contains("admin@krishi.in"));
    assert!(dashboard.content().contains("a@x.com"));
}

#[test]
fn admin_module_is_reachable_without_the_link() {
    let mut dashboard = open(farmer_store());
    show(&mut dashboard, ModuleId::Admin);
    assert!(dashboard.content().contains("Total Users"));
}

#[test]
fn overview_counts_only_pending_queries() {
    let mut dashboard = open(farmer_store());
    assert!(dashboard
        .content()
        .contains("<h3>0</h3><p>Pending Queries</p>"));

    show(&mut dashboard, ModuleId::Queries);
    dashboard.ask_query(&FormData::new().with("q_title", "Leaf curl"));
    show(&mut dashboard, ModuleId::Overview);
    assert!(dashboard
        .content()
        .contains("<h3>1</h3><p>Pending Queries</p>"));
    assert!(dashboard.content().contains("<h3>2</h3><p>Active Crops</p>"));

    dashboard.trigger("viewAllQueries", EventKind::Click, FormData::new());
    assert_eq!(dashboard.active_module(), &ModuleId::Queries);
}

#[test]
fn user_text_is_escaped() {
    let mut dashboard = open(farmer_store());
    show(&mut dashboard, ModuleId::Crops);
    dashboard.add_crop(
        &FormData::new()
            .with("c_name", "<script>x</script>")
            .with("c_season", "Rabi")
            .with("c_sow", "2024-01-01")
            .with("c_harv", "2024-04-01"),
    );
    assert!(!dashboard.content().contains("<script>"));
    assert!(dashboard.content().contains("&lt;script&gt;x&lt;/script&gt;"));
}
