//! Ask an Expert: query cards and the ask dialog.

use crate::model::{NewQuery, Query, QueryStatus};
use crate::render::form::{modal_form, Field};
use crate::render::html::escape;
use crate::render::{FormData, FormError, Intent, Modal, RenderContext, View};
use crate::store::KeyValueStore;
use crate::RecordsExt;

pub const FORM_ID: &str = "addQueryForm";

pub fn render<S: KeyValueStore>(ctx: &RenderContext<'_, S>) -> View {
    let queries = ctx.store.records::<Query>().load_all();

    let mut view = View::from_markup(
        "<div class=\"module-toolbar\"><div><h3>Ask an Expert</h3><p class=\"text-muted\">Get solutions for pests, diseases, etc.</p></div><button id=\"askQuery\" class=\"btn btn-primary\">+ Ask Question</button></div><div class=\"query-list\">",
    );
    view.on_click("askQuery", Intent::OpenModal(Modal::AskQuery));

    for query in &queries {
        view.push(&card(query));
    }
    if queries.is_empty() {
        view.push("<p>No queries yet.</p>");
    }
    view.push("</div>");

    view.extend(modal_form(
        Modal::AskQuery,
        ctx.open_modal == Some(Modal::AskQuery),
        "Raise a Query",
        FORM_ID,
        &[
            Field::Text {
                id: "q_title",
                label: "Subject",
                placeholder: Some("e.g. Yellow spots on leaves"),
                required: true,
            },
            Field::TextArea {
                id: "q_desc",
                label: "Description",
                rows: 4,
                placeholder: Some("Describe the issue..."),
            },
        ],
        "Submit",
        Intent::SubmitQuery,
    ));
    view
}

fn card(query: &Query) -> String {
    let status_class = match query.status() {
        QueryStatus::Resolved => "resolved",
        QueryStatus::Pending => "pending",
    };
    let date = escape(query.date.as_deref().unwrap_or("Today"));
    let answer = query
        .response()
        .map(|r| {
            format!(
                "<div class=\"expert-answer\"><strong>Expert Answer:</strong> {}</div>",
                escape(r)
            )
        })
        .unwrap_or_default();

    format!(
        "<div class=\"card query-card {}\" data-query-id=\"{}\"><div class=\"query-head\"><h4>{}</h4><span class=\"status-badge\">{}</span></div><p class=\"text-muted\">{}</p>{}</div>",
        status_class,
        query.id,
        escape(&query.title),
        query.status(),
        date,
        answer
    )
}

/// Read the ask-a-question form.
pub fn parse_form(form: &FormData) -> Result<NewQuery, FormError> {
    Ok(NewQuery {
        title: form.required("q_title")?.to_string(),
        description: form.optional("q_desc").map(str::to_string),
    })
}
