//! Branch Client - HTTP client for the branch management backend
//!
//! [`BranchApi`] wraps the REST endpoints over any [`HttpClient`];
//! [`BranchSubmitter`] runs the create-branch form through validation,
//! image upload and creation.

pub mod api;
pub mod config;
pub mod draft_file;
pub mod error;
pub mod http;
pub mod logger;
pub mod submission;
pub mod upload;

pub use api::BranchApi;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, NetworkHttpClient};
pub use submission::{
    BRANCH_LIST_ROUTE, BranchSubmitter, Navigator, SubmissionState, SubmitError,
};
pub use upload::{HttpImageUploader, ImageUploader};

// Re-export shared types for convenience
pub use shared::{ApiResponse, BranchDraft, BranchForm, ImageFile};
