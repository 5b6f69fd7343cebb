//! Government schemes. Static content.

use crate::render::{RenderContext, View};
use crate::store::KeyValueStore;

const SCHEMES: [(&str, &str, &str); 3] = [
    (
        "PM-Kisan Samman Nidhi",
        "Financial benefit of Rs. 6000/- per year in three installments.",
        "Check Eligibility",
    ),
    (
        "Soil Health Card Scheme",
        "Government provides soil cards to farmers with crop-wise nutrient recommendations.",
        "Apply Now",
    ),
    (
        "Pradhan Mantri Fasal Bima Yojana",
        "Crop insurance scheme for yield protection.",
        "View Details",
    ),
];

pub fn render<S: KeyValueStore>(_ctx: &RenderContext<'_, S>) -> View {
    let mut view = View::from_markup(
        "<h3>Government Schemes</h3><p class=\"text-muted\">Latest support schemes for farmers.</p><div class=\"scheme-list\">",
    );
    for (name, summary, action) in SCHEMES {
        view.push(&format!(
            "<div class=\"card\"><h4>{}</h4><p class=\"text-muted\">{}</p><span class=\"btn btn-secondary\">{}</span></div>",
            name, summary, action
        ));
    }
    view.push("</div>");
    view
}
