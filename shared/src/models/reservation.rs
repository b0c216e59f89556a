//! Reservation Model

use serde::{Deserialize, Serialize};

use super::DiningTable;

/// Reservation detail (预订) as returned by `GET /reserve/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: i64,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub customer_phone: Option<String>,
    #[serde(default)]
    pub branch_id: Option<i64>,
    #[serde(default)]
    pub branch_name: Option<String>,
    /// ISO 8601 local date-time
    #[serde(default)]
    pub reservation_time: Option<String>,
    #[serde(default)]
    pub number_of_people: Option<u32>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub tables: Vec<DiningTable>,
}
