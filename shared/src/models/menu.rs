//! Menu Model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::UnknownVariant;

/// Menu type (菜单类型)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MenuType {
    Breakfast,
    Lunch,
    Dinner,
    Dessert,
}

impl MenuType {
    pub const ALL: [MenuType; 4] = [
        MenuType::Breakfast,
        MenuType::Lunch,
        MenuType::Dinner,
        MenuType::Dessert,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MenuType::Breakfast => "BREAKFAST",
            MenuType::Lunch => "LUNCH",
            MenuType::Dinner => "DINNER",
            MenuType::Dessert => "DESSERT",
        }
    }
}

impl fmt::Display for MenuType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MenuType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MenuType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownVariant::new("menu type", s))
    }
}

/// Menu entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Menu {
    pub id: i64,
    #[serde(rename = "type")]
    pub menu_type: MenuType,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub branch_id: Option<i64>,
}

/// Create menu payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuCreate {
    #[serde(rename = "type")]
    pub menu_type: MenuType,
}

/// Update menu payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuUpdate {
    pub id: i64,
    #[serde(rename = "type")]
    pub menu_type: MenuType,
}

impl From<&Menu> for MenuUpdate {
    fn from(menu: &Menu) -> Self {
        Self {
            id: menu.id,
            menu_type: menu.menu_type,
        }
    }
}
