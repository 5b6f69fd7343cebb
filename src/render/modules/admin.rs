//! Admin panel: totals and the registered users table.
//!
//! Reachable by anyone who activates it; only the sidebar link is gated.

use crate::model::{Query, User};
use crate::render::html::{escape, stat_card};
use crate::render::{RenderContext, View};
use crate::store::KeyValueStore;
use crate::RecordsExt;

pub fn render<S: KeyValueStore>(ctx: &RenderContext<'_, S>) -> View {
    let users = ctx.store.records::<User>().load_all();
    let queries = ctx.store.records::<Query>().load_all();

    let mut view = View::from_markup(
        "<h3 class=\"text-danger\">Admin Panel</h3><p class=\"text-muted\">System Overview and User Management</p><div class=\"stats-grid\">",
    );
    view.push(&stat_card("\u{1f465}", &users.len().to_string(), "Total Users"));
    view.push(&stat_card("\u{2753}", &queries.len().to_string(), "Total Queries"));
    view.push("</div><div class=\"card\"><h4>Registered Farmers</h4><div class=\"table-container\"><table><thead><tr><th>Name</th><th>Email</th><th>Location</th><th>Type</th></tr></thead><tbody>");
    for user in &users {
        view.push(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape(&user.name),
            escape(&user.email),
            escape(&user.location),
            escape(user.user_type.as_str())
        ));
    }
    view.push("</tbody></table></div></div>");
    view
}
