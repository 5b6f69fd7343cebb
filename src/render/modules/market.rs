//! Direct marketing: produce listings and the list-produce dialog.

use crate::model::{NewProduct, Product};
use crate::render::form::{modal_form, Field};
use crate::render::html::escape;
use crate::render::{FormData, FormError, Intent, Modal, RenderContext, View};
use crate::store::KeyValueStore;
use crate::RecordsExt;

pub const FORM_ID: &str = "addProductForm";

pub fn render<S: KeyValueStore>(ctx: &RenderContext<'_, S>) -> View {
    let products = ctx.store.records::<Product>().load_all();

    let mut view = View::from_markup(
        "<div class=\"module-toolbar\"><div><h3>Direct Marketing</h3><p class=\"text-muted\">Sell your produce directly to buyers.</p></div><button id=\"listProduct\" class=\"btn btn-primary\">+ List New Produce</button></div><div class=\"features-grid products\">",
    );
    view.on_click("listProduct", Intent::OpenModal(Modal::ListProduct));

    for product in &products {
        view.push(&format!(
            "<div class=\"card product-card\"><div class=\"product-image\">\u{1f954}</div><h4>{}</h4><p class=\"price\">\u{20b9}{}</p><div class=\"text-muted\">Qty: {}</div><div class=\"text-muted\">Seller: {}</div><button class=\"btn btn-secondary\">Contact Seller</button></div>",
            escape(&product.name),
            escape(&product.price),
            escape(&product.quantity),
            escape(&product.seller)
        ));
    }
    view.push("</div>");

    view.extend(modal_form(
        Modal::ListProduct,
        ctx.open_modal == Some(Modal::ListProduct),
        "List Produce",
        FORM_ID,
        &[
            Field::Text {
                id: "p_name",
                label: "Produce Name",
                placeholder: None,
                required: true,
            },
            Field::Text {
                id: "p_qty",
                label: "Quantity (e.g. 100kg)",
                placeholder: None,
                required: true,
            },
            Field::Text {
                id: "p_price",
                label: "Price (e.g. 25/kg)",
                placeholder: None,
                required: true,
            },
        ],
        "List Item",
        Intent::SubmitProduct,
    ));
    view
}

pub fn parse_form(form: &FormData) -> Result<NewProduct, FormError> {
    Ok(NewProduct {
        name: form.required("p_name")?.to_string(),
        quantity: form.required("p_qty")?.to_string(),
        price: form.required("p_price")?.to_string(),
    })
}
