use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::UnknownVariant;
use crate::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IdeaCategory {
    #[serde(rename = "Water Saving")]
    WaterSaving,
    #[serde(rename = "Pest Control")]
    PestControl,
    Equipment,
    #[serde(rename = "Organic Farming")]
    OrganicFarming,
}

impl IdeaCategory {
    pub const ALL: [IdeaCategory; 4] = [
        IdeaCategory::WaterSaving,
        IdeaCategory::PestControl,
        IdeaCategory::Equipment,
        IdeaCategory::OrganicFarming,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IdeaCategory::WaterSaving => "Water Saving",
            IdeaCategory::PestControl => "Pest Control",
            IdeaCategory::Equipment => "Equipment",
            IdeaCategory::OrganicFarming => "Organic Farming",
        }
    }
}

impl fmt::Display for IdeaCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdeaCategory {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IdeaCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                kind: "idea category",
                value: s.to_string(),
            })
    }
}

/// A farming tip shared in the innovation corner. Append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Record)]
#[record(collection = "ideas")]
pub struct Idea {
    pub id: u64,
    pub title: String,
    pub category: IdeaCategory,
    pub description: String,
    /// Name of the submitting user at submission time.
    pub author: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIdea {
    pub title: String,
    pub category: IdeaCategory,
    pub description: String,
}

impl Idea {
    pub fn from_input(id: u64, input: NewIdea, author: &str) -> Self {
        Self {
            id,
            title: input.title,
            category: input.category,
            description: input.description,
            author: author.to_string(),
        }
    }
}
