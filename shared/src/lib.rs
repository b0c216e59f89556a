//! Shared types for branch management
//!
//! Wire models, the create-branch form state, its submit-time validation
//! and the payload shaping used by `branch-client`. Nothing in this crate
//! performs I/O.

pub mod draft;
pub mod error;
pub mod models;
pub mod payload;
pub mod response;
pub mod validation;

// Re-exports
pub use draft::{
    BranchDraft, BranchForm, FieldEdit, ImageFile, MenuDraft, RowCollection, TableDraft,
    WorkingHourDraft,
};
pub use error::{FormError, UnknownVariant, ValidationError};
pub use payload::{BranchPayload, CreateBranchRequest, UpdateBranchRequest, build_payload};
pub use response::ApiResponse;
pub use validation::validate_draft;
