//! Crop management: table, add-crop dialog, deletion and CSV export.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::model::{Crop, NewCrop, Season};
use crate::render::form::{modal_form, Field};
use crate::render::html::escape;
use crate::render::{FormData, FormError, Intent, Modal, RenderContext, View};
use crate::store::KeyValueStore;
use crate::RecordsExt;

pub const FORM_ID: &str = "addCropForm";
pub const CSV_FILENAME: &str = "my_crops.csv";
pub const CSV_HEADER: &str = "ID,Name,Season,SowingDate,HarvestDate";

const SEASONS: [&str; 3] = ["Kharif", "Rabi", "Zaid"];

pub fn render<S: KeyValueStore>(ctx: &RenderContext<'_, S>) -> View {
    let crops = ctx.store.records::<Crop>().load_all();

    let mut view = View::from_markup(
        "<div class=\"module-toolbar\"><p class=\"text-muted\">Manage your farming activities and crop cycles.</p><div class=\"actions\"><button id=\"exportCrops\" class=\"btn btn-secondary\">\u{2b07} Export CSV</button><button id=\"addCrop\" class=\"btn btn-primary\">+ Add New Crop</button></div></div>",
    );
    view.on_click("exportCrops", Intent::ExportCrops);
    view.on_click("addCrop", Intent::OpenModal(Modal::AddCrop));

    view.push("<div class=\"table-container\"><table><thead><tr><th>Crop Name</th><th>Season</th><th>Sowing Date</th><th>Harv. Date</th><th>Action</th></tr></thead><tbody>");
    if crops.is_empty() {
        view.push("<tr><td colspan=\"5\" class=\"empty\">No crops added yet.</td></tr>");
    }
    for crop in &crops {
        let delete_id = format!("deleteCrop-{}", crop.id);
        view.push(&format!(
            "<tr><td class=\"crop-name\">{}</td><td><span class=\"season-badge\">{}</span></td><td>{}</td><td>{}</td><td><button id=\"{}\" class=\"btn btn-danger\">\u{1f5d1}\u{fe0f}</button></td></tr>",
            escape(&crop.name),
            crop.season,
            crop.sowing_date,
            crop.harvest_date,
            delete_id
        ));
        view.on_click(delete_id, Intent::DeleteCrop(crop.id));
    }
    view.push("</tbody></table></div>");

    view.extend(modal_form(
        Modal::AddCrop,
        ctx.open_modal == Some(Modal::AddCrop),
        "Add New Crop",
        FORM_ID,
        &[
            Field::Text {
                id: "c_name",
                label: "Crop Name",
                placeholder: None,
                required: true,
            },
            Field::Select {
                id: "c_season",
                label: "Season",
                options: &SEASONS,
            },
            Field::Date {
                id: "c_sow",
                label: "Sowing Date",
            },
            Field::Date {
                id: "c_harv",
                label: "Harvest Date",
            },
            Field::Text {
                id: "c_fert",
                label: "Fertilizer (optional)",
                placeholder: Some("e.g. DAP, Urea"),
                required: false,
            },
        ],
        "Save Crop",
        Intent::SubmitCrop,
    ));
    view
}

/// Read the add-crop form.
pub fn parse_form(form: &FormData) -> Result<NewCrop, FormError> {
    Ok(NewCrop {
        name: form.required("c_name")?.to_string(),
        season: form.parse::<Season>("c_season")?,
        sowing_date: form.parse("c_sow")?,
        harvest_date: form.parse("c_harv")?,
        fertilizer: form.optional("c_fert").map(str::to_string),
    })
}

/// A file the host should offer for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub filename: String,
    pub content: String,
}

impl CsvExport {
    /// `data:` URI suitable for a download link's `href`.
    pub fn data_uri(&self) -> String {
        format!(
            "data:text/csv;charset=utf-8;base64,{}",
            STANDARD.encode(self.content.as_bytes())
        )
    }
}

/// Header plus one row per crop in stored order. Nothing to export yields
/// `None`.
///
/// Field values are written verbatim: a name containing a comma or quote
/// produces a malformed row.
pub fn export_csv(crops: &[Crop]) -> Option<CsvExport> {
    if crops.is_empty() {
        return None;
    }
    let mut lines = Vec::with_capacity(crops.len() + 1);
    lines.push(CSV_HEADER.to_string());
    lines.extend(crops.iter().map(Crop::csv_row));
    Some(CsvExport {
        filename: CSV_FILENAME.to_string(),
        content: lines.join("\n"),
    })
}
