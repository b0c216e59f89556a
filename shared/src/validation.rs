//! Submit-time validation of branch drafts
//!
//! Rules run in a fixed order and stop at the first failure:
//! name, phone, working hours, tables, menus. Later rows are not looked at
//! once one row fails.

use regex::Regex;
use std::sync::LazyLock;

use crate::draft::{BranchDraft, MenuDraft, TableDraft, WorkingHourDraft};
use crate::error::ValidationError;

// ── Limits ──────────────────────────────────────────────────────────

/// Branch names, counted in characters
pub const MAX_BRANCH_NAME_LEN: usize = 50;

/// Optional leading `+`, then 10 to 15 digits
pub const PHONE_PATTERN: &str = r"^\+?[0-9]{10,15}$";

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PHONE_PATTERN).expect("valid phone regex"));

// ── Rules ───────────────────────────────────────────────────────────

/// Check a draft before submission.
pub fn validate_draft(draft: &BranchDraft) -> Result<(), ValidationError> {
    validate_name(&draft.name)?;
    validate_phone(&draft.phone)?;
    validate_working_hours(&draft.working_hours)?;
    validate_tables(&draft.tables)?;
    validate_menus(&draft.menus)?;
    Ok(())
}

pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    let actual = name.chars().count();
    if actual > MAX_BRANCH_NAME_LEN {
        return Err(ValidationError::NameTooLong {
            max: MAX_BRANCH_NAME_LEN,
            actual,
        });
    }
    Ok(())
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if !is_valid_phone(phone) {
        return Err(ValidationError::InvalidPhone);
    }
    Ok(())
}

/// Every row complete, and opening strictly before closing.
///
/// Times are zero-padded 24h strings, so string order is time order.
pub fn validate_working_hours(hours: &[WorkingHourDraft]) -> Result<(), ValidationError> {
    for (index, hour) in hours.iter().enumerate() {
        if !hour.is_complete() {
            return Err(ValidationError::IncompleteWorkingHour { index });
        }
        if hour.opening_time >= hour.closing_time {
            return Err(ValidationError::OpeningNotBeforeClosing { index });
        }
    }
    Ok(())
}

pub fn validate_tables(tables: &[TableDraft]) -> Result<(), ValidationError> {
    for (index, table) in tables.iter().enumerate() {
        if !table.is_complete() {
            return Err(ValidationError::IncompleteTable { index });
        }
        match parse_capacity(&table.capacity) {
            Some(capacity) if capacity > 0.0 => {}
            _ => return Err(ValidationError::InvalidCapacity { index }),
        }
    }
    Ok(())
}

pub fn validate_menus(menus: &[MenuDraft]) -> Result<(), ValidationError> {
    match menus.iter().position(|m| !m.is_complete()) {
        Some(index) => Err(ValidationError::MissingMenuType { index }),
        None => Ok(()),
    }
}

/// Numeric value of a typed capacity. `NaN` and infinities are rejected.
fn parse_capacity(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
