//! Branch Model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{DiningTable, Menu, WorkingHour};
use crate::error::UnknownVariant;

/// Branch status
///
/// `Deleted` is only ever read back: the backend soft-deletes branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BranchStatus {
    #[default]
    Active,
    Inactive,
    Deleted,
}

impl BranchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BranchStatus::Active => "ACTIVE",
            BranchStatus::Inactive => "INACTIVE",
            BranchStatus::Deleted => "DELETED",
        }
    }
}

impl fmt::Display for BranchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BranchStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ACTIVE" => Ok(BranchStatus::Active),
            "INACTIVE" => Ok(BranchStatus::Inactive),
            "DELETED" => Ok(BranchStatus::Deleted),
            _ => Err(UnknownVariant::new("branch status", s)),
        }
    }
}

/// Branch list entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchSummary {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub status: BranchStatus,
}

/// Branch information block, including the assigned manager
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchInfo {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub status: BranchStatus,
    #[serde(default)]
    pub manager_id: Option<i64>,
    #[serde(default)]
    pub manager_name: Option<String>,
    #[serde(default)]
    pub manager_email: Option<String>,
    #[serde(default)]
    pub manager_image: Option<String>,
}

/// Full branch as returned by `GET /branch/{id}` and by create/update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchDetail {
    pub branch_info: BranchInfo,
    #[serde(default)]
    pub working_hours: Vec<WorkingHour>,
    #[serde(default)]
    pub tables: Vec<DiningTable>,
    #[serde(default)]
    pub menus: Vec<Menu>,
}

impl BranchDetail {
    pub fn id(&self) -> i64 {
        self.branch_info.id
    }
}
