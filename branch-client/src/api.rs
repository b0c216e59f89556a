//! Branch API
//!
//! Typed calls for the branch management endpoints. Every body comes back
//! wrapped in [`ApiResponse`]; the envelope is unwrapped here so callers
//! only see the data or a [`ClientError`].

use serde::Serialize;

use crate::{ClientError, ClientResult, HttpClient};
use shared::models::{
    BranchDetail, BranchSummary, Menu, ROLE_BRANCH_MANAGER, Reservation, STATUS_ACTIVE,
    StaffMember,
};
use shared::{ApiResponse, CreateBranchRequest, UpdateBranchRequest};

#[derive(Serialize)]
struct MenuQuery {
    #[serde(rename = "includeAll")]
    include_all: bool,
}

#[derive(Serialize)]
struct StaffSearchQuery {
    role: &'static str,
    status: &'static str,
}

/// Branch management API over an explicitly constructed HTTP client
#[derive(Debug, Clone)]
pub struct BranchApi<H> {
    http: H,
}

impl<H: HttpClient> BranchApi<H> {
    pub fn new(http: H) -> Self {
        Self { http }
    }

    pub fn http(&self) -> &H {
        &self.http
    }

    /// `GET /branches` (scoped to the authenticated staff member)
    pub async fn list_branches(&self) -> ClientResult<Vec<BranchSummary>> {
        let resp: ApiResponse<Vec<BranchSummary>> = self.http.get("/branches").await?;
        into_data(resp, "branches")
    }

    /// `GET /branch/{id}`
    pub async fn get_branch(&self, branch_id: i64) -> ClientResult<BranchDetail> {
        let resp: ApiResponse<BranchDetail> =
            self.http.get(&format!("/branch/{branch_id}")).await?;
        into_data(resp, "branch")
    }

    /// `GET /branch/{id}/menus?includeAll=`
    pub async fn branch_menus(&self, branch_id: i64, include_all: bool) -> ClientResult<Vec<Menu>> {
        let resp: ApiResponse<Vec<Menu>> = self
            .http
            .get_with_query(
                &format!("/branch/{branch_id}/menus"),
                &MenuQuery { include_all },
            )
            .await?;
        into_data(resp, "menus")
    }

    /// Active staff members who can manage a branch
    pub async fn branch_managers(&self) -> ClientResult<Vec<StaffMember>> {
        let query = StaffSearchQuery {
            role: ROLE_BRANCH_MANAGER,
            status: STATUS_ACTIVE,
        };
        let resp: ApiResponse<Vec<StaffMember>> =
            self.http.get_with_query("/staff/search", &query).await?;
        into_data(resp, "staff")
    }

    /// `POST /branch`
    pub async fn create_branch(&self, request: &CreateBranchRequest) -> ClientResult<BranchDetail> {
        let body = request.to_body()?;
        let resp: ApiResponse<BranchDetail> = self.http.post("/branch", &body).await?;
        let branch = into_data(resp, "created branch")?;
        tracing::info!(branch_id = branch.id(), name = %branch.branch_info.name, "Branch created");
        Ok(branch)
    }

    /// `PUT /branch/{id}`
    pub async fn update_branch(&self, request: &UpdateBranchRequest) -> ClientResult<BranchDetail> {
        let branch_id = request.branch_id();
        let resp: ApiResponse<BranchDetail> = self
            .http
            .put(&format!("/branch/{branch_id}"), request)
            .await?;
        let branch = into_data(resp, "updated branch")?;
        tracing::info!(branch_id, "Branch updated");
        Ok(branch)
    }

    /// `DELETE /branch/{id}` (the backend marks the branch as deleted)
    pub async fn delete_branch(&self, branch_id: i64) -> ClientResult<()> {
        let resp: ApiResponse<serde_json::Value> =
            self.http.delete(&format!("/branch/{branch_id}")).await?;
        check_success(&resp)?;
        tracing::info!(branch_id, "Branch deleted");
        Ok(())
    }

    /// `GET /reserve/{id}`
    pub async fn reservation(&self, reservation_id: i64) -> ClientResult<Reservation> {
        let resp: ApiResponse<Reservation> =
            self.http.get(&format!("/reserve/{reservation_id}")).await?;
        into_data(resp, "reservation")
    }
}

fn check_success<T>(resp: &ApiResponse<T>) -> ClientResult<()> {
    if resp.success {
        return Ok(());
    }
    Err(ClientError::Api {
        status: None,
        code: resp.code.unwrap_or_default(),
        message: resp
            .message
            .clone()
            .unwrap_or_else(|| "Unknown error".to_string()),
    })
}

fn into_data<T>(resp: ApiResponse<T>, what: &str) -> ClientResult<T> {
    check_success(&resp)?;
    resp.data
        .ok_or_else(|| ClientError::InvalidResponse(format!("Missing {what} data")))
}
