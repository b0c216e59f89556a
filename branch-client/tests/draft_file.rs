// branch-client/tests/draft_file.rs

use std::fs;

use branch_client::ClientError;
use branch_client::draft_file::{load_draft, load_draft_with_image, load_image};
use shared::models::{BranchStatus, DayOfWeek, MenuType};
use shared::validate_draft;

const DRAFT: &str = r#"{
    "name": "Harbor View",
    "location": "1 Pier Rd",
    "phone": "0912345678",
    "managerId": 4,
    "status": "INACTIVE",
    "workingHours": [{"dayOfWeek": "MONDAY", "openingTime": "09:00", "closingTime": "17:00"}],
    "tables": [{"number": "1", "capacity": "4"}],
    "menus": [{"type": "LUNCH"}]
}"#;

#[test]
fn test_load_draft() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("draft.json");
    fs::write(&path, DRAFT).unwrap();

    let draft = load_draft(&path).unwrap();
    assert_eq!(draft.name, "Harbor View");
    assert_eq!(draft.manager_id, Some(4));
    assert_eq!(draft.status, BranchStatus::Inactive);
    assert_eq!(draft.working_hours[0].day_of_week, Some(DayOfWeek::Monday));
    assert_eq!(draft.menus[0].menu_type, Some(MenuType::Lunch));
    assert!(draft.image_file.is_none());
    assert!(validate_draft(&draft).is_ok());
}

#[test]
fn test_load_image_guesses_content_type() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("front.jpg");
    fs::write(&path, [0xff, 0xd8, 0xff]).unwrap();

    let image = load_image(&path).unwrap();
    assert_eq!(image.file_name, "front.jpg");
    assert_eq!(image.content_type.as_deref(), Some("image/jpeg"));
    assert_eq!(image.len(), 3);
}

#[test]
fn test_load_draft_with_image() {
    let dir = tempfile::tempdir().unwrap();
    let draft_path = dir.path().join("draft.json");
    let image_path = dir.path().join("logo.png");
    fs::write(&draft_path, DRAFT).unwrap();
    fs::write(&image_path, [0x89, 0x50]).unwrap();

    let draft = load_draft_with_image(&draft_path, Some(&image_path)).unwrap();
    assert!(draft.has_image());
}

#[test]
fn test_draft_without_collections_is_submittable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("minimal.json");
    fs::write(&path, r#"{"name": "Kiosk", "phone": "0912345678"}"#).unwrap();

    let draft = load_draft(&path).unwrap();
    assert!(draft.working_hours.is_empty());
    assert!(draft.tables.is_empty());
    assert!(draft.menus.is_empty());
    assert_eq!(validate_draft(&draft), Ok(()));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_draft(&dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, ClientError::Io(_)));
}
