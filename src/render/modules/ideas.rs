//! Innovation corner: idea cards and the submit dialog.

use crate::model::{Idea, IdeaCategory, NewIdea};
use crate::render::form::{modal_form, Field};
use crate::render::html::escape;
use crate::render::{FormData, FormError, Intent, Modal, RenderContext, View};
use crate::store::KeyValueStore;
use crate::RecordsExt;

pub const FORM_ID: &str = "addIdeaForm";

const CATEGORIES: [&str; 4] = ["Water Saving", "Pest Control", "Equipment", "Organic Farming"];

pub fn render<S: KeyValueStore>(ctx: &RenderContext<'_, S>) -> View {
    let ideas = ctx.store.records::<Idea>().load_all();

    let mut view = View::from_markup(
        "<div class=\"module-toolbar\"><div><h3>Innovation Corner</h3><p class=\"text-muted\">Share farming tips and innovative ideas.</p></div><button id=\"submitIdea\" class=\"btn btn-primary\">+ Submit Idea</button></div><div class=\"features-grid\">",
    );
    view.on_click("submitIdea", Intent::OpenModal(Modal::SubmitIdea));

    if ideas.is_empty() {
        view.push("<p>No ideas submitted yet.</p>");
    }
    for idea in &ideas {
        view.push(&format!(
            "<div class=\"card idea-card\"><div class=\"idea-category\">{}</div><h3>{}</h3><p class=\"text-muted\">{}</p><div class=\"idea-author\">Submitted by: {}</div></div>",
            idea.category,
            escape(&idea.title),
            escape(&idea.description),
            escape(&idea.author)
        ));
    }
    view.push("</div>");

    view.extend(modal_form(
        Modal::SubmitIdea,
        ctx.open_modal == Some(Modal::SubmitIdea),
        "Submit an Idea",
        FORM_ID,
        &[
            Field::Text {
                id: "i_title",
                label: "Title",
                placeholder: None,
                required: true,
            },
            Field::Select {
                id: "i_cat",
                label: "Category",
                options: &CATEGORIES,
            },
            Field::TextArea {
                id: "i_desc",
                label: "Description",
                rows: 3,
                placeholder: None,
            },
        ],
        "Submit Idea",
        Intent::SubmitIdea,
    ));
    view
}

pub fn parse_form(form: &FormData) -> Result<NewIdea, FormError> {
    Ok(NewIdea {
        title: form.required("i_title")?.to_string(),
        category: form.parse::<IdeaCategory>("i_cat")?,
        description: form.required("i_desc")?.to_string(),
    })
}
