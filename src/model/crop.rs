use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::UnknownVariant;
use crate::Record;

pub type CropId = u64;

/// Indian cropping season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Kharif,
    Rabi,
    Zaid,
}

impl Season {
    pub const ALL: [Season; 3] = [Season::Kharif, Season::Rabi, Season::Zaid];

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Kharif => "Kharif",
            Season::Rabi => "Rabi",
            Season::Zaid => "Zaid",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Season {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Season::ALL
            .into_iter()
            .find(|season| season.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                kind: "season",
                value: s.to_string(),
            })
    }
}

/// A crop cycle the farmer is tracking. Created and deleted, never edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Record)]
#[record(collection = "crops")]
#[serde(rename_all = "camelCase")]
pub struct Crop {
    pub id: CropId,
    pub name: String,
    pub season: Season,
    pub sowing_date: NaiveDate,
    pub harvest_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fertilizer: Option<String>,
}

impl Crop {
    pub fn from_input(id: CropId, input: NewCrop) -> Self {
        Self {
            id,
            name: input.name,
            season: input.season,
            sowing_date: input.sowing_date,
            harvest_date: input.harvest_date,
            fertilizer: input.fertilizer,
        }
    }

    /// One CSV row in export column order. Values are not quoted.
    pub fn csv_row(&self) -> String {
        format!(
            "{},{},{},{},{}",
            self.id, self.name, self.season, self.sowing_date, self.harvest_date
        )
    }
}

/// Add-crop form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCrop {
    pub name: String,
    pub season: Season,
    pub sowing_date: NaiveDate,
    pub harvest_date: NaiveDate,
    pub fertilizer: Option<String>,
}
