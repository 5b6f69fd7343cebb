//! Domain records: users, crops, expert queries, ideas and market listings.

mod crop;
mod idea;
mod product;
mod query;
mod user;

pub use crop::{Crop, CropId, NewCrop, Season};
pub use idea::{Idea, IdeaCategory, NewIdea};
pub use product::{NewProduct, Product};
pub use query::{NewQuery, Query, QueryStatus};
pub use user::{NewUser, User, UserType};

/// Parse error for the closed string enums (season, category).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

impl std::fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown {}: {}", self.kind, self.value)
    }
}

impl std::error::Error for UnknownVariant {}
