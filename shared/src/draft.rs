//! Branch form state
//!
//! [`BranchDraft`] holds the create-branch form exactly as typed. Nothing is
//! checked while editing; [`crate::validation`] runs on submit.
//!
//! [`BranchForm`] owns the draft behind an [`Arc`]. Every edit goes through
//! [`Arc::make_mut`], so a snapshot handed to an in-flight submission keeps
//! its contents while the user continues editing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::error::FormError;
use crate::models::{BranchStatus, DayOfWeek, MenuType};

/// Image picked by the user, not yet uploaded
#[derive(Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: None,
            bytes,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Debug for ImageFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageFile")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// One working hour row
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkingHourDraft {
    pub day_of_week: Option<DayOfWeek>,
    pub opening_time: String,
    pub closing_time: String,
}

impl WorkingHourDraft {
    pub fn new(
        day_of_week: DayOfWeek,
        opening_time: impl Into<String>,
        closing_time: impl Into<String>,
    ) -> Self {
        Self {
            day_of_week: Some(day_of_week),
            opening_time: opening_time.into(),
            closing_time: closing_time.into(),
        }
    }

    /// Day, opening and closing time are all set
    pub fn is_complete(&self) -> bool {
        self.day_of_week.is_some() && !self.opening_time.is_empty() && !self.closing_time.is_empty()
    }
}

/// One table row
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TableDraft {
    pub number: String,
    pub capacity: String,
}

impl TableDraft {
    pub fn new(number: impl Into<String>, capacity: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            capacity: capacity.into(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.number.is_empty() && !self.capacity.is_empty()
    }
}

/// One menu row
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuDraft {
    #[serde(rename = "type")]
    pub menu_type: Option<MenuType>,
}

impl MenuDraft {
    pub fn new(menu_type: MenuType) -> Self {
        Self {
            menu_type: Some(menu_type),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.menu_type.is_some()
    }
}

/// Create-branch form contents
///
/// The JSON form (camelCase) is what the CLI reads draft files from. The
/// image is attached separately and never serialized. Collections missing
/// from a file are empty, not the blank row a new form starts with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BranchDraft {
    pub name: String,
    pub location: String,
    #[serde(skip)]
    pub image_file: Option<ImageFile>,
    pub phone: String,
    pub manager_id: Option<i64>,
    pub status: BranchStatus,
    #[serde(default)]
    pub working_hours: Vec<WorkingHourDraft>,
    #[serde(default)]
    pub tables: Vec<TableDraft>,
    #[serde(default)]
    pub menus: Vec<MenuDraft>,
}

impl Default for BranchDraft {
    /// Blank form: one empty row in every collection
    fn default() -> Self {
        Self {
            name: String::new(),
            location: String::new(),
            image_file: None,
            phone: String::new(),
            manager_id: None,
            status: BranchStatus::Active,
            working_hours: vec![WorkingHourDraft::default()],
            tables: vec![TableDraft::default()],
            menus: vec![MenuDraft::default()],
        }
    }
}

impl BranchDraft {
    /// Number of rows in a nested collection
    pub fn row_count(&self, collection: RowCollection) -> usize {
        match collection {
            RowCollection::WorkingHours => self.working_hours.len(),
            RowCollection::Tables => self.tables.len(),
            RowCollection::Menus => self.menus.len(),
        }
    }

    pub fn has_image(&self) -> bool {
        self.image_file.is_some()
    }
}

/// Nested collections of a branch draft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowCollection {
    WorkingHours,
    Tables,
    Menus,
}

impl fmt::Display for RowCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RowCollection::WorkingHours => "working hours",
            RowCollection::Tables => "tables",
            RowCollection::Menus => "menus",
        })
    }
}

/// A single field replacement
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    Name(String),
    Location(String),
    Phone(String),
    Manager(Option<i64>),
    Status(BranchStatus),
    Image(Option<ImageFile>),
    DayOfWeek { index: usize, value: Option<DayOfWeek> },
    OpeningTime { index: usize, value: String },
    ClosingTime { index: usize, value: String },
    TableNumber { index: usize, value: String },
    TableCapacity { index: usize, value: String },
    MenuType { index: usize, value: Option<MenuType> },
}

impl FieldEdit {
    /// Row this edit targets, if it targets a nested row
    fn row(&self) -> Option<(RowCollection, usize)> {
        match *self {
            FieldEdit::DayOfWeek { index, .. }
            | FieldEdit::OpeningTime { index, .. }
            | FieldEdit::ClosingTime { index, .. } => Some((RowCollection::WorkingHours, index)),
            FieldEdit::TableNumber { index, .. } | FieldEdit::TableCapacity { index, .. } => {
                Some((RowCollection::Tables, index))
            }
            FieldEdit::MenuType { index, .. } => Some((RowCollection::Menus, index)),
            _ => None,
        }
    }
}

/// Form state holder for the create-branch form
#[derive(Debug, Clone, Default)]
pub struct BranchForm {
    draft: Arc<BranchDraft>,
}

impl BranchForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_draft(draft: BranchDraft) -> Self {
        Self {
            draft: Arc::new(draft),
        }
    }

    pub fn draft(&self) -> &BranchDraft {
        &self.draft
    }

    /// Immutable view of the current contents; later edits do not affect it
    pub fn snapshot(&self) -> Arc<BranchDraft> {
        Arc::clone(&self.draft)
    }

    /// Append a blank row. A new working hour reuses the previous row's times.
    pub fn add_row(&mut self, collection: RowCollection) {
        let draft = Arc::make_mut(&mut self.draft);
        match collection {
            RowCollection::WorkingHours => {
                let row = match draft.working_hours.last() {
                    Some(previous) => WorkingHourDraft {
                        day_of_week: None,
                        opening_time: previous.opening_time.clone(),
                        closing_time: previous.closing_time.clone(),
                    },
                    None => WorkingHourDraft::default(),
                };
                draft.working_hours.push(row);
            }
            RowCollection::Tables => draft.tables.push(TableDraft::default()),
            RowCollection::Menus => draft.menus.push(MenuDraft::default()),
        }
    }

    /// Remove the row at `index`. Returns `false` when there is no such row.
    pub fn remove_row(&mut self, collection: RowCollection, index: usize) -> bool {
        if index >= self.draft.row_count(collection) {
            return false;
        }
        let draft = Arc::make_mut(&mut self.draft);
        match collection {
            RowCollection::WorkingHours => {
                draft.working_hours.remove(index);
            }
            RowCollection::Tables => {
                draft.tables.remove(index);
            }
            RowCollection::Menus => {
                draft.menus.remove(index);
            }
        }
        true
    }

    /// Replace one field. Sibling rows are left untouched.
    pub fn set_field(&mut self, edit: FieldEdit) -> Result<(), FormError> {
        if let Some((collection, index)) = edit.row() {
            let len = self.draft.row_count(collection);
            if index >= len {
                return Err(FormError::RowOutOfRange {
                    collection,
                    index,
                    len,
                });
            }
        }

        let draft = Arc::make_mut(&mut self.draft);
        match edit {
            FieldEdit::Name(value) => draft.name = value,
            FieldEdit::Location(value) => draft.location = value,
            FieldEdit::Phone(value) => draft.phone = value,
            FieldEdit::Manager(value) => draft.manager_id = value,
            FieldEdit::Status(value) => draft.status = value,
            FieldEdit::Image(value) => draft.image_file = value,
            FieldEdit::DayOfWeek { index, value } => draft.working_hours[index].day_of_week = value,
            FieldEdit::OpeningTime { index, value } => {
                draft.working_hours[index].opening_time = value
            }
            FieldEdit::ClosingTime { index, value } => {
                draft.working_hours[index].closing_time = value
            }
            FieldEdit::TableNumber { index, value } => draft.tables[index].number = value,
            FieldEdit::TableCapacity { index, value } => draft.tables[index].capacity = value,
            FieldEdit::MenuType { index, value } => draft.menus[index].menu_type = value,
        }
        Ok(())
    }

    /// Days the working hour row at `index` may pick: days no other row uses,
    /// plus the row's own current day.
    pub fn available_days(&self, index: usize) -> Vec<DayOfWeek> {
        let hours = &self.draft.working_hours;
        let own = hours.get(index).and_then(|h| h.day_of_week);
        DayOfWeek::ALL
            .into_iter()
            .filter(|day| {
                own == Some(*day) || !hours.iter().any(|h| h.day_of_week == Some(*day))
            })
            .collect()
    }

    /// Menu types the menu row at `index` may pick
    pub fn available_menu_types(&self, index: usize) -> Vec<MenuType> {
        let menus = &self.draft.menus;
        let own = menus.get(index).and_then(|m| m.menu_type);
        MenuType::ALL
            .into_iter()
            .filter(|t| own == Some(*t) || !menus.iter().any(|m| m.menu_type == Some(*t)))
            .collect()
    }
}
