//! Wire payloads built from a branch draft
//!
//! [`build_payload`] shapes a validated draft into [`BranchPayload`]. The
//! request envelopes ([`CreateBranchRequest`], [`UpdateBranchRequest`]) wrap
//! it in the structure the branch endpoints expect.
//!
//! Row filtering here is independent of [`crate::validation`]: incomplete
//! rows are dropped even if the caller skipped validation.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::draft::BranchDraft;
use crate::models::{
    BranchStatus, MenuCreate, MenuUpdate, TableCreate, TableUpdate, WorkingHour,
};

/// Normalize `HH:MM` to `HH:MM:SS`. Other lengths pass through unchanged.
pub fn normalize_time(time: &str) -> String {
    if time.len() == 5 {
        format!("{time}:00")
    } else {
        time.to_string()
    }
}

/// Branch data ready to be sent
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchPayload {
    pub name: String,
    pub location: String,
    /// Uploaded image URL, empty when no image was attached
    pub image: String,
    pub phone: String,
    pub manager_id: Option<i64>,
    pub status: BranchStatus,
    pub working_hours: Vec<WorkingHour>,
    pub tables: Vec<TableCreate>,
    pub menus: Vec<MenuCreate>,
}

/// Build the payload for `draft` with an already resolved image URL.
pub fn build_payload(draft: &BranchDraft, image_url: &str) -> BranchPayload {
    let working_hours = draft
        .working_hours
        .iter()
        .filter(|h| h.is_complete())
        .filter_map(|h| {
            Some(WorkingHour {
                id: None,
                day_of_week: h.day_of_week?,
                opening_time: normalize_time(&h.opening_time),
                closing_time: normalize_time(&h.closing_time),
            })
        })
        .collect();

    let tables = draft
        .tables
        .iter()
        .filter(|t| t.is_complete())
        .map(|t| TableCreate {
            number: t.number.clone(),
            capacity: t.capacity.clone(),
        })
        .collect();

    let menus = draft
        .menus
        .iter()
        .filter_map(|m| m.menu_type)
        .map(|menu_type| MenuCreate { menu_type })
        .collect();

    BranchPayload {
        name: draft.name.clone(),
        location: draft.location.clone(),
        image: image_url.to_string(),
        phone: draft.phone.clone(),
        manager_id: draft.manager_id,
        status: draft.status,
        working_hours,
        tables,
        menus,
    }
}

// =============================================================================
// Request envelopes
// =============================================================================

/// `branchInfo` block of create/update requests
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchInfoRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub location: String,
    pub image: String,
    pub phone: String,
    pub manager_id: Option<i64>,
    pub status: BranchStatus,
    pub working_hours: Vec<WorkingHour>,
}

impl BranchInfoRequest {
    fn from_payload(id: Option<i64>, payload: BranchPayload) -> (Self, Vec<TableCreate>, Vec<MenuCreate>) {
        let info = Self {
            id,
            name: payload.name,
            location: payload.location,
            image: payload.image,
            phone: payload.phone,
            manager_id: payload.manager_id,
            status: payload.status,
            working_hours: payload.working_hours,
        };
        (info, payload.tables, payload.menus)
    }
}

/// Rows to create
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Creates<T> {
    pub creates: Vec<T>,
}

/// Rows to create and existing rows to update
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowChanges<C, U> {
    pub creates: Vec<C>,
    pub updates: Vec<U>,
}

/// Body of `POST /branch`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBranchRequest {
    pub branch_info: BranchInfoRequest,
    /// Reserved by the backend, never filled by this client
    pub working_hours: Map<String, Value>,
    pub tables: Creates<TableCreate>,
    pub menus: Creates<MenuCreate>,
}

impl CreateBranchRequest {
    pub fn from_payload(payload: BranchPayload) -> Self {
        let (branch_info, tables, menus) = BranchInfoRequest::from_payload(None, payload);
        Self {
            branch_info,
            working_hours: Map::new(),
            tables: Creates { creates: tables },
            menus: Creates { creates: menus },
        }
    }

    /// JSON body with empty top-level values removed
    pub fn to_body(&self) -> Result<Value, serde_json::Error> {
        Ok(strip_empty_top_level(serde_json::to_value(self)?))
    }
}

/// Body of `PUT /branch/{id}`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBranchRequest {
    pub branch_info: BranchInfoRequest,
    pub working_hours: Map<String, Value>,
    pub tables: RowChanges<TableCreate, TableUpdate>,
    pub menus: RowChanges<MenuCreate, MenuUpdate>,
}

impl UpdateBranchRequest {
    /// Rows in `payload` become creates; use the `with_*_updates` setters for
    /// rows that already exist on the backend.
    pub fn new(branch_id: i64, payload: BranchPayload) -> Self {
        let (branch_info, tables, menus) = BranchInfoRequest::from_payload(Some(branch_id), payload);
        Self {
            branch_info,
            working_hours: Map::new(),
            tables: RowChanges {
                creates: tables,
                updates: Vec::new(),
            },
            menus: RowChanges {
                creates: menus,
                updates: Vec::new(),
            },
        }
    }

    pub fn with_table_updates(mut self, updates: Vec<TableUpdate>) -> Self {
        self.tables.updates = updates;
        self
    }

    pub fn with_menu_updates(mut self, updates: Vec<MenuUpdate>) -> Self {
        self.menus.updates = updates;
        self
    }

    pub fn branch_id(&self) -> i64 {
        self.branch_info.id.unwrap_or_default()
    }
}

/// Remove top-level keys whose value is null, `""` or `[]`.
///
/// Empty objects are kept. Non-object values are returned unchanged; nested
/// values are not touched.
pub fn strip_empty_top_level(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(_, v)| !is_empty_value(v))
                .collect(),
        ),
        other => other,
    }
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(_) | Value::Bool(_) | Value::Number(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::{MenuDraft, TableDraft, WorkingHourDraft};
    use crate::models::{DayOfWeek, MenuType};
    use serde_json::json;

    fn draft() -> BranchDraft {
        BranchDraft {
            name: "Harbor View".into(),
            location: "1 Pier Rd".into(),
            phone: "0912345678".into(),
            manager_id: Some(4),
            working_hours: vec![WorkingHourDraft::new(DayOfWeek::Monday, "09:00", "17:00")],
            tables: vec![TableDraft::new("1", "4")],
            menus: vec![MenuDraft::new(MenuType::Dinner)],
            ..Default::default()
        }
    }

    #[test]
    fn test_normalize_time() {
        assert_eq!(normalize_time("09:00"), "09:00:00");
        assert_eq!(normalize_time("09:00:30"), "09:00:30");
        assert_eq!(normalize_time(""), "");
    }

    #[test]
    fn test_working_hours_normalized() {
        let payload = build_payload(&draft(), "");
        assert_eq!(
            payload.working_hours,
            vec![WorkingHour {
                id: None,
                day_of_week: DayOfWeek::Monday,
                opening_time: "09:00:00".into(),
                closing_time: "17:00:00".into(),
            }]
        );
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value["workingHours"][0],
            json!({"dayOfWeek": "MONDAY", "openingTime": "09:00:00", "closingTime": "17:00:00"})
        );
    }

    #[test]
    fn test_incomplete_rows_dropped() {
        let mut d = draft();
        d.working_hours.push(WorkingHourDraft::default());
        d.tables.push(TableDraft::new("2", ""));
        d.menus.push(MenuDraft::default());

        let payload = build_payload(&d, "");
        assert_eq!(payload.working_hours.len(), 1);
        assert_eq!(payload.tables.len(), 1);
        assert_eq!(payload.menus.len(), 1);
    }

    #[test]
    fn test_image_url_threaded_through() {
        let payload = build_payload(&draft(), "https://cdn.example.com/b.png");
        assert_eq!(payload.image, "https://cdn.example.com/b.png");
        assert_eq!(payload.manager_id, Some(4));
        assert_eq!(payload.status, BranchStatus::Active);
    }

    #[test]
    fn test_create_request_body() {
        let request = CreateBranchRequest::from_payload(build_payload(&draft(), ""));
        let body = request.to_body().unwrap();

        assert_eq!(body.get("workingHours"), Some(&json!({})));
        assert_eq!(body["branchInfo"]["name"], "Harbor View");
        assert_eq!(body["branchInfo"]["image"], "");
        assert_eq!(body["branchInfo"]["managerId"], 4);
        assert_eq!(body["branchInfo"]["workingHours"][0]["openingTime"], "09:00:00");
        assert!(body["branchInfo"].get("id").is_none());
        assert_eq!(body["tables"], json!({"creates": [{"number": "1", "capacity": "4"}]}));
        assert_eq!(body["menus"], json!({"creates": [{"type": "DINNER"}]}));
    }

    #[test]
    fn test_update_request_body() {
        let request = UpdateBranchRequest::new(12, build_payload(&draft(), "img"))
            .with_table_updates(vec![TableUpdate {
                id: 3,
                number: "9".into(),
                capacity: "2".into(),
                status: None,
            }])
            .with_menu_updates(vec![MenuUpdate {
                id: 8,
                menu_type: MenuType::Lunch,
            }]);

        assert_eq!(request.branch_id(), 12);
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["branchInfo"]["id"], 12);
        assert_eq!(body["workingHours"], json!({}));
        assert_eq!(body["tables"]["updates"][0], json!({"id": 3, "number": "9", "capacity": "2"}));
        assert_eq!(body["menus"]["updates"][0], json!({"id": 8, "type": "LUNCH"}));
        assert_eq!(body["menus"]["creates"][0], json!({"type": "DINNER"}));
    }

    #[test]
    fn test_strip_empty_top_level() {
        let stripped = strip_empty_top_level(json!({
            "a": null,
            "b": "",
            "c": [],
            "d": {},
            "e": 0,
            "f": false,
            "g": {"inner": []},
            "h": "x",
        }));
        assert_eq!(
            stripped,
            json!({"d": {}, "e": 0, "f": false, "g": {"inner": []}, "h": "x"})
        );
        assert_eq!(strip_empty_top_level(json!([1])), json!([1]));
    }
}
