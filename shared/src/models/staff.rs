//! Staff Model

use serde::{Deserialize, Serialize};

/// Staff role used when searching for branch manager candidates
pub const ROLE_BRANCH_MANAGER: &str = "BRANCH_MANAGER";

/// Staff account status used when searching for active staff
pub const STATUS_ACTIVE: &str = "ACTIVE";

/// Staff member as returned by `GET /staff/search`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffMember {
    pub id: i64,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub branch_id: Option<i64>,
}
