use crate::error::{Result, ScanError};
use crate::model::{ScanCollection, ScanRecord};
use crate::normalize::{normalize, normalize_records};
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

pub const DEFAULT_REMOTE_URL: &str = "http://localhost:3001";
pub const SCANS_PATH: &str = "/api/scans";

/// Client for the remote mirror served by `isbnscan-server`.
pub struct RemoteClient {
    client: Client,
    base_url: String,
}

impl RemoteClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn scans_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), SCANS_PATH)
    }

    /// Fetch the remote copy. The body is normalized like any other external
    /// input.
    pub async fn fetch(&self) -> Result<ScanCollection> {
        let url = self.scans_url();
        debug!("Fetching scans from {}", url);
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ScanError::Remote(format!("GET {} failed: {}", url, status)));
        }
        let body: Value = response.json().await?;
        Ok(normalize(&body))
    }

    /// Replace the remote copy with `items` and return what the server stored.
    pub async fn replace(&self, items: &[ScanRecord]) -> Result<ScanCollection> {
        let url = self.scans_url();
        let payload = normalize_records(items);
        debug!("Pushing {} scans to {}", payload.len(), url);
        let response = self.client.post(&url).json(&payload).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body: Value = response.json().await.unwrap_or(Value::Null);
            let reason = body
                .get("error")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| status.to_string());
            return Err(ScanError::Remote(reason));
        }
        let body: Value = response.json().await?;
        Ok(normalize(&body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scans_url_joins_cleanly() {
        assert_eq!(
            RemoteClient::new("http://localhost:3001/").scans_url(),
            "http://localhost:3001/api/scans"
        );
        assert_eq!(
            RemoteClient::new("http://h:1").scans_url(),
            "http://h:1/api/scans"
        );
    }
}
