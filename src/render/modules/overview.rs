//! Overview: headline numbers, recent activity and the yield forecast.

use crate::model::{Crop, Query};
use crate::render::html::stat_card;
use crate::render::{Intent, ModuleId, RenderContext, View};
use crate::store::KeyValueStore;
use crate::RecordsExt;

/// Projected yield in quintals per acre, January to June.
const YIELD_FORECAST: [(&str, u32); 6] = [
    ("Jan", 12),
    ("Feb", 19),
    ("Mar", 15),
    ("Apr", 25),
    ("May", 22),
    ("Jun", 30),
];

pub fn render<S: KeyValueStore>(ctx: &RenderContext<'_, S>) -> View {
    let crops = ctx.store.records::<Crop>().load_all();
    let queries = ctx.store.records::<Query>().load_all();
    let pending = queries.iter().filter(|q| q.is_pending()).count();

    let mut view = View::new();
    view.push("<div class=\"stats-grid\">");
    view.push(&stat_card("\u{1f33e}", &crops.len().to_string(), "Active Crops"));
    view.push(&stat_card("\u{1f4ac}", &pending.to_string(), "Pending Queries"));
    view.push(&stat_card("\u{26c5}", "24\u{b0}C", "New Delhi, IN"));
    view.push("</div>");

    view.push("<div class=\"overview-grid\"><div class=\"card recent-activity\"><div class=\"card-head\"><h3>Recent Activity</h3><span id=\"viewAllQueries\" class=\"btn btn-secondary\">View All</span></div>");
    view.on_click("viewAllQueries", Intent::Navigate(ModuleId::Queries));
    view.push("<div class=\"activity\"><p class=\"activity-title\">System Update</p><p class=\"text-muted\">New PM-Kisan scheme details added. Check Schemes section.</p></div>");
    view.push("<div class=\"activity\"><p class=\"activity-title\">Query Resolved</p><p class=\"text-muted\">Expert replied to \"Fungal infection in rice\".</p></div></div>");

    view.push(&yield_chart());
    view.push("</div>");
    view
}

fn yield_chart() -> String {
    let max = YIELD_FORECAST.iter().map(|(_, v)| *v).max().unwrap_or(1).max(1);
    let bars: String = YIELD_FORECAST
        .iter()
        .map(|(month, value)| {
            format!(
                "<div class=\"bar\" style=\"height:{}%\" title=\"{}\"><span>{}</span></div>",
                value * 100 / max,
                value,
                month
            )
        })
        .collect();
    format!(
        "<div class=\"card\"><h3>Yield Forecast</h3><p class=\"text-muted\">Projected vs Actual (Qt/Acre)</p><div class=\"yield-chart\">{}</div></div>",
        bars
    )
}
