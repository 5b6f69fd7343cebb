use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Record;

/// What kind of account a user registered as.
///
/// Persisted as a lowercase string. Values this build does not know about
/// are kept verbatim in `Other` rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum UserType {
    Farmer,
    Buyer,
    Expert,
    Admin,
    Other(String),
}

impl UserType {
    pub fn as_str(&self) -> &str {
        match self {
            UserType::Farmer => "farmer",
            UserType::Buyer => "buyer",
            UserType::Expert => "expert",
            UserType::Admin => "admin",
            UserType::Other(value) => value,
        }
    }
}

impl From<String> for UserType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "farmer" => UserType::Farmer,
            "buyer" => UserType::Buyer,
            "expert" => UserType::Expert,
            "admin" => UserType::Admin,
            _ => UserType::Other(value),
        }
    }
}

impl From<&str> for UserType {
    fn from(value: &str) -> Self {
        UserType::from(value.to_string())
    }
}

impl From<UserType> for String {
    fn from(value: UserType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A registered account. Never updated or deleted once stored.
///
/// The password is kept in clear text; the whole record doubles as the
/// session when copied under the current-user key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Record)]
#[record(collection = "users")]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub location: String,
    pub user_type: UserType,
    pub joined_date: DateTime<Utc>,
}

impl User {
    /// First character of the name, uppercased, for the avatar badge.
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

/// Registration form input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub location: String,
    pub user_type: UserType,
}
