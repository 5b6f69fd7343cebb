mod record;

use proc_macro::TokenStream;

/// Derive macro that implements `krishi_dashboard::Record` for an entity.
///
/// # Usage
///
/// ```ignore
/// #[derive(Clone, Serialize, Deserialize, Record)]
/// #[record(collection = "crops")]
/// pub struct Crop {
///     #[record(id)]
///     pub id: u64,
///     pub name: String,
/// }
/// ```
///
/// - `collection` names the store key the collection lives under. When
///   omitted it defaults to the snake_case struct name with an `s` suffix.
/// - `#[record(id)]` marks the identifying field. When omitted a field
///   named `id` is used. The field's type becomes `Record::Id`.
#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive_record(input)
}
