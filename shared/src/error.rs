//! Error types for branch drafts
//!
//! [`ValidationError`] is what the submit check reports. Its `Display`
//! output is the message shown to the user, so it stays stable.

use thiserror::Error;

use crate::draft::RowCollection;

/// First rule violated by a branch draft
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Branch Name cannot exceed {max} characters.")]
    NameTooLong { max: usize, actual: usize },

    #[error("Enter a valid phone number (10-15 digits).")]
    InvalidPhone,

    #[error("All working hours must have day, opening, and closing times.")]
    IncompleteWorkingHour { index: usize },

    #[error("Opening time must be earlier than closing time.")]
    OpeningNotBeforeClosing { index: usize },

    #[error("All tables must have a number and capacity.")]
    IncompleteTable { index: usize },

    #[error("Table capacity must be a valid positive number.")]
    InvalidCapacity { index: usize },

    #[error("All menus must have a type.")]
    MissingMenuType { index: usize },
}

impl ValidationError {
    /// Row that failed, for rules that check nested rows
    pub fn row(&self) -> Option<(RowCollection, usize)> {
        match *self {
            ValidationError::NameTooLong { .. } | ValidationError::InvalidPhone => None,
            ValidationError::IncompleteWorkingHour { index }
            | ValidationError::OpeningNotBeforeClosing { index } => {
                Some((RowCollection::WorkingHours, index))
            }
            ValidationError::IncompleteTable { index }
            | ValidationError::InvalidCapacity { index } => Some((RowCollection::Tables, index)),
            ValidationError::MissingMenuType { index } => Some((RowCollection::Menus, index)),
        }
    }
}

/// Form edit errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{collection} row {index} does not exist ({len} rows)")]
    RowOutOfRange {
        collection: RowCollection,
        index: usize,
        len: usize,
    },
}

/// A string that does not name any variant of an enum
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: {value:?}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownVariant {
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}
