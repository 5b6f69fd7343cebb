use serde::{Deserialize, Serialize};

use crate::Record;

/// Produce listed for direct sale. Append-only.
///
/// Quantity and price are free text as typed by the seller ("500 kg",
/// "20/kg").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Record)]
#[record(collection = "products")]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub quantity: String,
    pub price: String,
    pub seller: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub quantity: String,
    pub price: String,
}

impl Product {
    pub fn from_input(id: u64, input: NewProduct, seller: &str) -> Self {
        Self {
            id,
            name: input.name,
            quantity: input.quantity,
            price: input.price,
            seller: seller.to_string(),
        }
    }
}
