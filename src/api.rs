// API client module: the data-access layer for the customer-request
// workflow (registration, pending-list retrieval, document upload). Each
// operation is a single blocking HTTP round-trip against the backend, with
// every failure reduced to a benign default for the caller.

use anyhow::{Context, Result};
use log::{error, warn};
use reqwest::blocking::{multipart, Client};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::File;
use std::path::Path;
use std::thread;
use std::time::Duration;

use crate::config::AppConfig;

/// Simulated latency of the mock register call. Only there so demo UIs get a
/// believable spinner.
const MOCK_REGISTER_DELAY: Duration = Duration::from_millis(800);

/// A pending customer's video-production request as the backend returns it.
/// The shape is backend-owned and passed through untouched; this layer only
/// checks that the listing as a whole is a sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerRequest(Value);

impl CustomerRequest {
    /// Best-effort read of a well-known backend field. Absent or non-string
    /// fields read as `None`, never as an error.
    fn field(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(Value::as_str)
    }

    pub fn id(&self) -> Option<&str> {
        self.field("id")
    }

    pub fn customer_name(&self) -> Option<&str> {
        self.field("customerName")
    }

    pub fn phone_number(&self) -> Option<&str> {
        self.field("phoneNumber")
    }

    pub fn video_name(&self) -> Option<&str> {
        self.field("videoName")
    }

    pub fn status(&self) -> Option<&str> {
        self.field("status")
    }

    pub fn requested_at(&self) -> Option<&str> {
        self.field("requestedAt")
    }

    /// The raw backend record, for callers that want more than the
    /// well-known fields.
    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

/// JSON body for the create-request operation. Field names mirror the
/// backend expectations.
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RegisterPayload {
    pub name: String,
    pub phone: String,
    pub video_name: String,
}

/// The three operations the backend exposes to this client. Implementations
/// never surface an error type: a failed write reads as `false` and a failed
/// listing reads as empty, with the detail logged where it was detected.
pub trait CustomerApi {
    /// Create a customer request from three string fields. `true` only when
    /// the backend acknowledges success. No retry, no input validation:
    /// empty strings are passed through as-is.
    fn register_customer(&self, name: &str, phone: &str, video_name: &str) -> bool;

    /// Fetch the pending queue, in the backend's order. Empty on any
    /// failure; callers cannot tell "no pending requests" from "backend
    /// error", which is part of the existing contract.
    fn get_pending_requests(&self) -> Vec<CustomerRequest>;

    /// Send a file for the given request. The result is exactly the
    /// transport response's success status; the response body is never
    /// inspected.
    fn upload_document(&self, request_id: &str, file_path: &Path, phone_number: &str) -> bool;
}

/// Pick the data-access implementation once at startup, so no per-call
/// mock/live branching exists anywhere downstream.
pub fn client_for(config: &AppConfig) -> Result<Box<dyn CustomerApi>> {
    if config.use_mock_mode {
        Ok(Box::new(MockApi))
    } else {
        Ok(Box::new(LiveApi::new(config.api_base_url.clone())?))
    }
}

/// Live implementation: one blocking reqwest client, one base URL. No
/// timeout is configured beyond the transport's defaults.
pub struct LiveApi {
    client: Client,
    base_url: String,
}

impl LiveApi {
    pub fn new(base_url: String) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        Ok(LiveApi { client, base_url })
    }

    fn try_register(&self, payload: &RegisterPayload) -> Result<()> {
        let url = format!("{}/register-customer", self.base_url);
        let res = self
            .client
            .post(&url)
            .json(payload)
            .send()
            .context("Failed to send register request")?;
        if !res.status().is_success() {
            let status = res.status();
            let txt = res.text().unwrap_or_else(|_| "".into());
            anyhow::bail!("Register failed: {} - {}", status, txt);
        }
        Ok(())
    }

    fn try_get_pending(&self) -> Result<Value> {
        let url = format!("{}/get-pending", self.base_url);
        let res = self
            .client
            .get(&url)
            .send()
            .context("Failed to send pending-list request")?;
        if !res.status().is_success() {
            let status = res.status();
            let txt = res.text().unwrap_or_else(|_| "".into());
            anyhow::bail!("Pending fetch failed: {} - {}", status, txt);
        }
        res.json().context("Parsing pending list json")
    }

    fn try_upload(
        &self,
        request_id: &str,
        file_path: &Path,
        phone_number: &str,
    ) -> Result<StatusCode> {
        let url = format!("{}/upload-document", self.base_url);

        let file = File::open(file_path)
            .with_context(|| format!("Failed to open {}", file_path.display()))?;
        // The file's own name doubles as the videoName field.
        let file_name = file_path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("upload.bin")
            .to_string();
        let mime = mime_guess::from_path(file_path).first_or_octet_stream();

        let part = multipart::Part::reader(file)
            .file_name(file_name.clone())
            .mime_str(mime.essence_str())
            .context("Building upload file part")?;
        let form = multipart::Form::new()
            .part("file", part)
            .text("requestId", request_id.to_string())
            .text("phoneNumber", phone_number.to_string())
            .text("videoName", file_name);

        let res = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .context("Failed to send upload request")?;
        Ok(res.status())
    }
}

impl CustomerApi for LiveApi {
    fn register_customer(&self, name: &str, phone: &str, video_name: &str) -> bool {
        let payload = RegisterPayload {
            name: name.to_string(),
            phone: phone.to_string(),
            video_name: video_name.to_string(),
        };
        match self.try_register(&payload) {
            Ok(()) => true,
            Err(e) => {
                error!("register-customer: {:#}", e);
                false
            }
        }
    }

    fn get_pending_requests(&self) -> Vec<CustomerRequest> {
        match self.try_get_pending() {
            Ok(body) => sequence_or_empty(body),
            Err(e) => {
                error!("get-pending: {:#}", e);
                Vec::new()
            }
        }
    }

    fn upload_document(&self, request_id: &str, file_path: &Path, phone_number: &str) -> bool {
        match self.try_upload(request_id, file_path, phone_number) {
            Ok(status) if status.is_success() => true,
            Ok(status) => {
                error!("upload-document rejected with status {}", status);
                false
            }
            Err(e) => {
                error!("upload-document: {:#}", e);
                false
            }
        }
    }
}

/// Fallback rule for the pending listing: the backend contract is a JSON
/// array, and any other body shape on a 2xx response is treated as "no
/// data", not as an error the caller hears about.
fn sequence_or_empty(body: Value) -> Vec<CustomerRequest> {
    match body {
        Value::Array(items) => items.into_iter().map(CustomerRequest).collect(),
        _ => {
            warn!("get-pending returned a non-array body, treating as empty");
            Vec::new()
        }
    }
}

/// Offline implementation: canned results, no network I/O at all.
pub struct MockApi;

impl CustomerApi for MockApi {
    fn register_customer(&self, _name: &str, _phone: &str, _video_name: &str) -> bool {
        thread::sleep(MOCK_REGISTER_DELAY);
        true
    }

    fn get_pending_requests(&self) -> Vec<CustomerRequest> {
        Vec::new()
    }

    fn upload_document(&self, _request_id: &str, _file_path: &Path, _phone_number: &str) -> bool {
        // The path is not even opened.
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Instant;

    #[test]
    fn sequence_passes_arrays_through_in_order() {
        let body = json!([
            {"id": "a1", "customerName": "Alice"},
            {"id": "b2", "customerName": "Bob"}
        ]);
        let items = sequence_or_empty(body);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id(), Some("a1"));
        assert_eq!(items[1].customer_name(), Some("Bob"));
    }

    #[test]
    fn non_array_bodies_normalize_to_empty() {
        assert!(sequence_or_empty(json!({"error": "bad"})).is_empty());
        assert!(sequence_or_empty(Value::Null).is_empty());
        assert!(sequence_or_empty(json!("oops")).is_empty());
        assert!(sequence_or_empty(json!(42)).is_empty());
    }

    #[test]
    fn record_fields_read_best_effort() {
        let req = CustomerRequest(json!({
            "id": "abc",
            "customerName": "Alice",
            "status": 7
        }));
        assert_eq!(req.id(), Some("abc"));
        assert_eq!(req.customer_name(), Some("Alice"));
        // Non-string and absent fields both read as None.
        assert_eq!(req.status(), None);
        assert_eq!(req.video_name(), None);
    }

    #[test]
    fn register_payload_matches_backend_field_names() {
        let payload = RegisterPayload {
            name: "Alice".into(),
            phone: "555-0100".into(),
            video_name: "Birthday".into(),
        };
        let v = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            v,
            json!({"name": "Alice", "phone": "555-0100", "videoName": "Birthday"})
        );
    }

    #[test]
    fn mock_register_succeeds_after_simulated_delay() {
        let started = Instant::now();
        // Empty fields pass through like any other value.
        assert!(MockApi.register_customer("", "", ""));
        assert!(started.elapsed() >= MOCK_REGISTER_DELAY);
    }

    #[test]
    fn mock_pending_queue_is_empty() {
        assert!(MockApi.get_pending_requests().is_empty());
    }

    #[test]
    fn mock_upload_performs_no_io() {
        let missing = Path::new("/definitely/not/here.mp4");
        assert!(MockApi.upload_document("abc", missing, "555-0100"));
    }

    #[test]
    fn startup_selection_honors_mock_toggle() {
        let missing = Path::new("/definitely/not/here.mp4");

        let mock = client_for(&AppConfig {
            use_mock_mode: true,
            api_base_url: "/api".into(),
        })
        .unwrap();
        assert!(mock.upload_document("abc", missing, "555-0100"));

        // Live mode fails before any network traffic: the file doesn't open.
        let live = client_for(&AppConfig {
            use_mock_mode: false,
            api_base_url: "http://127.0.0.1:9".into(),
        })
        .unwrap();
        assert!(!live.upload_document("abc", missing, "555-0100"));
    }
}
