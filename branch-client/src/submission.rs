//! Create-branch submission flow
//!
//! ```text
//! Idle ──submit──▶ Uploading ──url──▶ Submitting ──▶ Succeeded
//!   │   (image)                           │
//!   └──(no image)─────────────────────────┘
//! upload or create failure ──▶ Failed
//! ```
//!
//! `Failed` and `Succeeded` are resting states that observers can read;
//! the next `submit` starts again from `Idle`. Validation runs first and
//! never leaves `Idle`. Upload and creation are
//! chained sequentially; the upload URL is threaded into the payload. No
//! retries: a failure is returned and the caller resubmits.

use thiserror::Error;
use tokio::sync::watch;

use crate::{BranchApi, ClientError, HttpClient, ImageUploader};
use shared::models::BranchDetail;
use shared::{BranchDraft, CreateBranchRequest, ValidationError, build_payload, validate_draft};

/// Route shown after a branch is created
pub const BRANCH_LIST_ROUTE: &str = "/branch";

/// Where the user is sent after a successful submission
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: &str);
}

/// Navigator that goes nowhere
impl Navigator for () {
    fn navigate(&self, _route: &str) {}
}

/// Submission state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Uploading,
    Submitting,
    Succeeded {
        branch_id: i64,
    },
    Failed {
        message: String,
    },
}

impl SubmissionState {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, SubmissionState::Uploading | SubmissionState::Submitting)
    }
}

/// Why a submission did not produce a branch
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Failed to upload image: {0}")]
    Upload(#[source] ClientError),

    #[error("Failed to create branch: {0}")]
    Submission(#[source] ClientError),
}

/// Drives one create-branch form through upload and creation
pub struct BranchSubmitter<H, U, N = ()> {
    api: BranchApi<H>,
    uploader: U,
    navigator: N,
    state: watch::Sender<SubmissionState>,
}

impl<H: HttpClient, U: ImageUploader> BranchSubmitter<H, U, ()> {
    pub fn new(api: BranchApi<H>, uploader: U) -> Self {
        Self::with_navigator(api, uploader, ())
    }
}

impl<H: HttpClient, U: ImageUploader, N: Navigator> BranchSubmitter<H, U, N> {
    pub fn with_navigator(api: BranchApi<H>, uploader: U, navigator: N) -> Self {
        let (state, _) = watch::channel(SubmissionState::Idle);
        Self {
            api,
            uploader,
            navigator,
            state,
        }
    }

    pub fn api(&self) -> &BranchApi<H> {
        &self.api
    }

    /// Current state
    pub fn state(&self) -> SubmissionState {
        self.state.borrow().clone()
    }

    /// Watch state transitions
    pub fn subscribe(&self) -> watch::Receiver<SubmissionState> {
        self.state.subscribe()
    }

    fn transition(&self, next: SubmissionState) {
        tracing::debug!(from = ?*self.state.borrow(), to = ?next, "Submission state");
        self.state.send_replace(next);
    }

    /// Validate, upload the image if one is attached, then create the branch.
    ///
    /// The draft is only read; on failure the caller still has every value
    /// the user typed.
    pub async fn submit(&mut self, draft: &BranchDraft) -> Result<BranchDetail, SubmitError> {
        if self.state() != SubmissionState::Idle {
            self.transition(SubmissionState::Idle);
        }
        validate_draft(draft)?;

        let image_url = match &draft.image_file {
            Some(image) => {
                self.transition(SubmissionState::Uploading);
                match self.uploader.upload(image).await {
                    Ok(url) => {
                        tracing::info!(file = %image.file_name, url = %url, "Image uploaded");
                        url
                    }
                    Err(e) => return Err(self.fail(SubmitError::Upload(e))),
                }
            }
            None => String::new(),
        };

        self.transition(SubmissionState::Submitting);
        let request = CreateBranchRequest::from_payload(build_payload(draft, &image_url));
        match self.api.create_branch(&request).await {
            Ok(branch) => {
                self.transition(SubmissionState::Succeeded {
                    branch_id: branch.id(),
                });
                self.navigator.navigate(BRANCH_LIST_ROUTE);
                Ok(branch)
            }
            Err(e) => Err(self.fail(SubmitError::Submission(e))),
        }
    }

    fn fail(&self, error: SubmitError) -> SubmitError {
        tracing::warn!(error = %error, "Branch submission failed");
        self.transition(SubmissionState::Failed {
            message: error.to_string(),
        });
        error
    }
}
