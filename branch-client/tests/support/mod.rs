// branch-client/tests/support/mod.rs
// In-memory HTTP client and uploader for integration tests

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use branch_client::{ClientError, ClientResult, HttpClient, ImageUploader, SubmissionState};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use shared::ImageFile;
use tokio::sync::watch;

/// One recorded call, in the order calls were made
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Upload {
        file_name: String,
        state: Option<SubmissionState>,
    },
    Http {
        method: &'static str,
        path: String,
        query: Option<Value>,
        body: Option<Value>,
        state: Option<SubmissionState>,
    },
}

impl Call {
    pub fn method(&self) -> &'static str {
        match self {
            Call::Upload { .. } => "UPLOAD",
            Call::Http { method, .. } => method,
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Call::Upload { .. } => "",
            Call::Http { path, .. } => path,
        }
    }

    pub fn query(&self) -> Option<&Value> {
        match self {
            Call::Http { query, .. } => query.as_ref(),
            Call::Upload { .. } => None,
        }
    }

    pub fn body(&self) -> Option<&Value> {
        match self {
            Call::Http { body, .. } => body.as_ref(),
            Call::Upload { .. } => None,
        }
    }

    pub fn state(&self) -> Option<&SubmissionState> {
        match self {
            Call::Upload { state, .. } | Call::Http { state, .. } => state.as_ref(),
        }
    }
}

/// Canned reply
#[derive(Debug, Clone)]
pub enum Reply {
    Json(Value),
    Api { status: u16, code: i32, message: String },
    NotFound,
}

impl Reply {
    pub fn ok(data: Value) -> Self {
        Reply::Json(json!({ "success": true, "data": data }))
    }

    pub fn api_error(status: u16, code: i32, message: &str) -> Self {
        Reply::Api {
            status,
            code,
            message: message.to_string(),
        }
    }

    fn into_result<T: DeserializeOwned>(self) -> ClientResult<T> {
        match self {
            Reply::Json(value) => Ok(serde_json::from_value(value)?),
            Reply::Api {
                status,
                code,
                message,
            } => Err(ClientError::Api {
                status: Some(status),
                code,
                message,
            }),
            Reply::NotFound => Err(ClientError::NotFound(String::new())),
        }
    }
}

/// Shared call log, so the HTTP client and uploader record into one sequence
pub type CallLog = Arc<Mutex<Vec<Call>>>;

pub fn call_log() -> CallLog {
    Arc::new(Mutex::new(Vec::new()))
}

/// Submission state receiver, installed once the submitter exists
pub type StateProbe = Arc<Mutex<Option<watch::Receiver<SubmissionState>>>>;

pub fn state_probe() -> StateProbe {
    Arc::new(Mutex::new(None))
}

fn observed(probe: &StateProbe) -> Option<SubmissionState> {
    probe.lock().unwrap().as_ref().map(|rx| rx.borrow().clone())
}

#[derive(Clone)]
pub struct MockHttp {
    log: CallLog,
    replies: Arc<Mutex<HashMap<(&'static str, String), VecDeque<Reply>>>>,
    state: StateProbe,
}

impl MockHttp {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            replies: Arc::new(Mutex::new(HashMap::new())),
            state: state_probe(),
        }
    }

    pub fn with_probe(mut self, probe: StateProbe) -> Self {
        self.state = probe;
        self
    }

    /// Queue a reply for `method path`
    pub fn reply(self, method: &'static str, path: &str, reply: Reply) -> Self {
        self.replies
            .lock()
            .unwrap()
            .entry((method, path.to_string()))
            .or_default()
            .push_back(reply);
        self
    }

    fn record<T: DeserializeOwned>(
        &self,
        method: &'static str,
        path: &str,
        query: Option<Value>,
        body: Option<Value>,
    ) -> ClientResult<T> {
        self.log.lock().unwrap().push(Call::Http {
            method,
            path: path.to_string(),
            query,
            body,
            state: observed(&self.state),
        });
        let reply = self
            .replies
            .lock()
            .unwrap()
            .get_mut(&(method, path.to_string()))
            .and_then(VecDeque::pop_front)
            .unwrap_or(Reply::NotFound);
        reply.into_result()
    }
}

#[async_trait]
impl HttpClient for MockHttp {
    async fn get<T: DeserializeOwned + Send>(&self, path: &str) -> ClientResult<T> {
        self.record("GET", path, None, None)
    }

    async fn get_with_query<T: DeserializeOwned + Send, Q: Serialize + Sync>(
        &self,
        path: &str,
        query: &Q,
    ) -> ClientResult<T> {
        let query = serde_json::to_value(query)?;
        self.record("GET", path, Some(query), None)
    }

    async fn post<T: DeserializeOwned + Send, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let body = serde_json::to_value(body)?;
        self.record("POST", path, None, Some(body))
    }

    async fn put<T: DeserializeOwned + Send, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let body = serde_json::to_value(body)?;
        self.record("PUT", path, None, Some(body))
    }

    async fn delete<T: DeserializeOwned + Send>(&self, path: &str) -> ClientResult<T> {
        self.record("DELETE", path, None, None)
    }

    fn token(&self) -> Option<&str> {
        None
    }
}

pub struct MockUploader {
    log: CallLog,
    result: Result<String, String>,
    state: StateProbe,
}

impl MockUploader {
    pub fn returning(log: CallLog, url: &str) -> Self {
        Self {
            log,
            result: Ok(url.to_string()),
            state: state_probe(),
        }
    }

    pub fn failing(log: CallLog, message: &str) -> Self {
        Self {
            log,
            result: Err(message.to_string()),
            state: state_probe(),
        }
    }

    pub fn with_probe(mut self, probe: StateProbe) -> Self {
        self.state = probe;
        self
    }
}

#[async_trait]
impl ImageUploader for MockUploader {
    async fn upload(&self, image: &ImageFile) -> ClientResult<String> {
        self.log.lock().unwrap().push(Call::Upload {
            file_name: image.file_name.clone(),
            state: observed(&self.state),
        });
        self.result.clone().map_err(ClientError::Internal)
    }
}

/// Minimal backend branch detail
pub fn branch_json(id: i64, name: &str) -> Value {
    json!({
        "branchInfo": {
            "id": id,
            "name": name,
            "location": "1 Pier Rd",
            "phone": "0912345678",
            "status": "ACTIVE"
        },
        "workingHours": [],
        "tables": [],
        "menus": []
    })
}

/// Records every route it is asked to open
#[derive(Clone, Default)]
pub struct RecordingNavigator {
    pub routes: Arc<Mutex<Vec<String>>>,
}

impl branch_client::Navigator for RecordingNavigator {
    fn navigate(&self, route: &str) {
        self.routes.lock().unwrap().push(route.to_string());
    }
}
