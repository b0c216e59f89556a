//! Dining Table Model

use serde::{Deserialize, Serialize};

use super::string_or_number;

/// Table status as reported by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TableStatus {
    #[default]
    Available,
    Occupied,
    Reserved,
    #[serde(other)]
    Unknown,
}

/// Dining table entity (桌台)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiningTable {
    pub id: i64,
    #[serde(deserialize_with = "string_or_number")]
    pub number: String,
    pub capacity: i32,
    #[serde(default)]
    pub status: TableStatus,
}

/// Create dining table payload
///
/// Fields are forwarded as the user typed them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCreate {
    pub number: String,
    pub capacity: String,
}

/// Update dining table payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableUpdate {
    pub id: i64,
    pub number: String,
    pub capacity: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TableStatus>,
}

impl From<&DiningTable> for TableUpdate {
    fn from(table: &DiningTable) -> Self {
        Self {
            id: table.id,
            number: table.number.clone(),
            capacity: table.capacity.to_string(),
            status: Some(table.status),
        }
    }
}
