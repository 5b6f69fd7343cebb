use std::time::Duration;

use krishi_dashboard::{
    EventKind, FormData, InMemoryStore, JsonStore, ModuleId, NewQuery, Query, QueryStatus,
    Record, RecordsExt,
};

use crate::support::{farmer_store, open, show};

const REPLY: Duration = Duration::from_millis(3000);

fn ask(title: &str) -> FormData {
    FormData::new()
        .with("q_title", title)
        .with("q_desc", "Leaves curling since last week.")
}

fn query(store: &JsonStore<InMemoryStore>, id: u64) -> Query {
    store.records::<Query>().get(&id).unwrap()
}

#[test]
fn new_query_is_pending_then_resolved() {
    let mut dashboard = open(farmer_store());
    show(&mut dashboard, ModuleId::Queries);

    dashboard.trigger("addQueryForm", EventKind::Submit, ask("Leaf curl"));
    let id = dashboard.pending_query().unwrap();

    let fresh = query(dashboard.store(), id);
    assert_eq!(fresh.status(), QueryStatus::Pending);
    assert_eq!(fresh.response(), None);
    assert_eq!(
        dashboard.store().records::<Query>().load_all()[0].id,
        id,
        "new queries go first"
    );

    dashboard.tick(REPLY - Duration::from_millis(1));
    assert!(query(dashboard.store(), id).is_pending());

    dashboard.tick(Duration::from_millis(1));
    let answered = query(dashboard.store(), id);
    assert_eq!(answered.status(), QueryStatus::Resolved);
    assert!(!answered.response().unwrap().is_empty());
    assert!(dashboard.content().contains("Expert Answer"));
}

#[test]
fn newer_query_cancels_the_earlier_reply() {
    let mut dashboard = open(farmer_store());
    show(&mut dashboard, ModuleId::Queries);

    dashboard.ask_query(&ask("First"));
    let first = dashboard.pending_query().unwrap();
    dashboard.tick(Duration::from_millis(1000));
    dashboard.ask_query(&ask("Second"));
    let second = dashboard.pending_query().unwrap();
    assert_ne!(first, second);

    dashboard.run_until_idle();
    assert!(query(dashboard.store(), first).is_pending());
    assert_eq!(
        query(dashboard.store(), second).status(),
        QueryStatus::Resolved
    );
}

#[test]
fn reply_matches_by_id_not_position() {
    let mut dashboard = open(farmer_store());
    show(&mut dashboard, ModuleId::Queries);
    dashboard.ask_query(&ask("Mine"));
    let mine = dashboard.pending_query().unwrap();

    // Another tab raises a query directly, pushing ours off the front.
    let other_tab = dashboard.store().clone();
    let today = chrono::NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    other_tab.records::<Query>().prepend(Query::pending(
        7,
        NewQuery {
            title: "Theirs".into(),
            description: None,
        },
        today,
    ));

    dashboard.tick(REPLY);
    assert_eq!(query(dashboard.store(), mine).status(), QueryStatus::Resolved);
    assert!(query(dashboard.store(), 7).is_pending());
}

#[test]
fn navigating_away_leaves_the_query_pending() {
    let mut dashboard = open(farmer_store());
    show(&mut dashboard, ModuleId::Queries);
    dashboard.ask_query(&ask("Leaf curl"));
    let id = dashboard.pending_query().unwrap();

    show(&mut dashboard, ModuleId::Crops);
    let crops_view = dashboard.content().to_string();
    dashboard.run_until_idle();

    assert!(query(dashboard.store(), id).is_pending());
    assert_eq!(dashboard.pending_query(), None);
    assert_eq!(dashboard.content(), crops_view);
}

#[test]
fn stale_snapshot_from_another_tab_wins() {
    let mut dashboard = open(farmer_store());
    show(&mut dashboard, ModuleId::Queries);
    dashboard.ask_query(&ask("Leaf curl"));
    let id = dashboard.pending_query().unwrap();

    // Another tab read the collection while the query was still pending...
    let other_tab = dashboard.store().clone();
    let snapshot = other_tab.records::<Query>().load_all();

    dashboard.tick(REPLY);
    assert_eq!(query(dashboard.store(), id).status(), QueryStatus::Resolved);

    // ...and writes it back afterwards: the reply is lost.
    other_tab.records::<Query>().replace_all(&snapshot);
    assert!(query(dashboard.store(), id).is_pending());
}

#[test]
fn blank_subject_is_rejected() {
    let mut dashboard = open(farmer_store());
    show(&mut dashboard, ModuleId::Queries);
    let before = dashboard.store().records::<Query>().count();

    dashboard.trigger(
        "addQueryForm",
        EventKind::Submit,
        FormData::new().with("q_title", "   "),
    );
    assert_eq!(dashboard.store().records::<Query>().count(), before);
    assert_eq!(dashboard.pending_query(), None);
    assert!(dashboard.banner().is_some());
}

#[test]
fn returning_to_queries_does_not_reschedule_the_reply() {
    let mut dashboard = open(farmer_store());
    show(&mut dashboard, ModuleId::Queries);
    dashboard.ask_query(&ask("Leaf curl"));
    let id = dashboard.pending_query().unwrap();

    show(&mut dashboard, ModuleId::Overview);
    show(&mut dashboard, ModuleId::Queries);
    dashboard.tick(Duration::from_secs(60));

    assert!(query(dashboard.store(), id).is_pending());
    assert!(!dashboard.has_pending_tasks());
}

#[test]
fn locale_dated_queries_survive_a_new_question() {
    let store = farmer_store();
    store.set(
        Query::COLLECTION,
        &serde_json::json!([
            {"id": 1717236000000u64, "title": "Leaf spots", "status": "Pending", "date": "6/1/2024"},
            {"id": 1, "title": "Yellow leaves in Wheat", "status": "Resolved", "date": "2023-12-01",
             "response": "Apply nitrogen fertilizer."}
        ]),
    );

    let mut dashboard = open(store);
    assert_eq!(dashboard.store().records::<Query>().count(), 2);

    show(&mut dashboard, ModuleId::Queries);
    assert!(dashboard.content().contains("6/1/2024"));
    dashboard.ask_query(&ask("New"));

    let titles: Vec<String> = dashboard
        .store()
        .records::<Query>()
        .load_all()
        .into_iter()
        .map(|q| q.title)
        .collect();
    assert_eq!(titles, vec!["New", "Leaf spots", "Yellow leaves in Wheat"]);
}
