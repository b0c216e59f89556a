//! Loading drafts and images from disk
//!
//! Draft files use the same camelCase JSON as the form:
//! ```json
//! {
//!   "name": "Harbor View",
//!   "location": "1 Pier Rd",
//!   "phone": "0912345678",
//!   "managerId": 4,
//!   "status": "ACTIVE",
//!   "workingHours": [{"dayOfWeek": "MONDAY", "openingTime": "09:00", "closingTime": "17:00"}],
//!   "tables": [{"number": "1", "capacity": "4"}],
//!   "menus": [{"type": "LUNCH"}]
//! }
//! ```
//!
//! `workingHours`, `tables` and `menus` may be left out; they load as empty.

use std::path::Path;

use crate::ClientResult;
use shared::{BranchDraft, ImageFile};

/// Read a draft from a JSON file
pub fn load_draft(path: &Path) -> ClientResult<BranchDraft> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Read an image and guess its content type from the extension
pub fn load_image(path: &Path) -> ClientResult<ImageFile> {
    let bytes = std::fs::read(path)?;
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("image")
        .to_string();

    let image = ImageFile::new(file_name, bytes);
    Ok(match mime_guess::from_path(path).first() {
        Some(mime) => image.with_content_type(mime.to_string()),
        None => image,
    })
}

/// Read a draft and attach an optional image to it
pub fn load_draft_with_image(path: &Path, image: Option<&Path>) -> ClientResult<BranchDraft> {
    let mut draft = load_draft(path)?;
    if let Some(image) = image {
        draft.image_file = Some(load_image(image)?);
    }
    Ok(draft)
}
