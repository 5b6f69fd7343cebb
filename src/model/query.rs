use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueryStatus {
    Pending,
    Resolved,
}

impl fmt::Display for QueryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryStatus::Pending => f.write_str("Pending"),
            QueryStatus::Resolved => f.write_str("Resolved"),
        }
    }
}

/// A question put to the experts.
///
/// `response` is present exactly when the status is `Resolved`; the only
/// transition is `Pending -> Resolved`, through [`Query::resolve`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Record)]
#[record(collection = "queries")]
pub struct Query {
    pub id: u64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    status: QueryStatus,
    /// Display date as stored. New queries use `YYYY-MM-DD`; older records
    /// may hold locale-formatted text such as `6/1/2024`, kept verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    response: Option<String>,
}

impl Query {
    /// A freshly asked, unanswered query.
    pub fn pending(id: u64, input: NewQuery, date: NaiveDate) -> Self {
        Self {
            id,
            title: input.title,
            description: input.description,
            status: QueryStatus::Pending,
            date: Some(date.to_string()),
            response: None,
        }
    }

    /// An already answered query (seed data).
    pub fn resolved(id: u64, title: &str, date: NaiveDate, response: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            description: None,
            status: QueryStatus::Resolved,
            date: Some(date.to_string()),
            response: Some(response.to_string()),
        }
    }

    pub fn status(&self) -> QueryStatus {
        self.status
    }

    pub fn response(&self) -> Option<&str> {
        self.response.as_deref()
    }

    pub fn is_pending(&self) -> bool {
        self.status == QueryStatus::Pending
    }

    /// Attach the expert answer. Returns false, leaving the query untouched,
    /// if it was already resolved.
    pub fn resolve(&mut self, response: impl Into<String>) -> bool {
        if !self.is_pending() {
            return false;
        }
        self.status = QueryStatus::Resolved;
        self.response = Some(response.into());
        true
    }
}

/// Ask-an-expert form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuery {
    pub title: String,
    pub description: Option<String>,
}
