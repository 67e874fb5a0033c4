//! HTTP client for the prediction endpoint.
//!
//! One request per call: the image goes out as `multipart/form-data` under the
//! `file` part and a [`Diagnosis`] comes back. No retries.

use std::{path::Path, time::Duration};

use reqwest::{
    multipart::{Form, Part},
    Client, StatusCode,
};
use thiserror::Error;
use tracing::{debug, instrument};
use url::Url;

use crate::{diagnosis::Diagnosis, APP_USER_AGENT};

/// Default prediction endpoint.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/predict";

/// Multipart part name the endpoint reads the image from.
pub const FILE_FIELD: &str = "file";

/// Maximum number of error body characters kept in a [`PredictError`].
const MAX_ERROR_CHARS: usize = 200;

#[derive(Debug, Error)]
pub enum PredictError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("server returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A selected image file, read into memory.
#[derive(Clone, PartialEq, Eq)]
pub struct Upload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for Upload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Upload")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl Upload {
    /// Content type is guessed from the file name.
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let content_type = mime_guess::from_path(&file_name)
            .first_or_octet_stream()
            .essence_str()
            .to_string();

        Self {
            file_name,
            content_type,
            bytes,
        }
    }

    /// Read `path` into an upload.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    pub async fn from_path(path: &Path) -> std::io::Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map_or_else(|| "upload".to_string(), |n| n.to_string_lossy().into_owned());

        Ok(Self::new(file_name, bytes))
    }
}

#[derive(Debug, Clone)]
pub struct PredictClient {
    http: Client,
    endpoint: Url,
}

impl PredictClient {
    /// Build a client for `endpoint`. Without `timeout` a request may wait
    /// forever on a hung server.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(endpoint: Url, timeout: Option<Duration>) -> Result<Self, PredictError> {
        let mut builder = Client::builder().user_agent(APP_USER_AGENT);

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            endpoint,
        })
    }

    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Send `upload` and decode the diagnosis.
    ///
    /// # Errors
    /// Returns an error on transport failure, non-2xx status, or a body that
    /// is not a diagnosis.
    #[instrument(skip(self, upload), fields(endpoint = %self.endpoint, file = %upload.file_name))]
    pub async fn predict(&self, upload: &Upload) -> Result<Diagnosis, PredictError> {
        let part = Part::bytes(upload.bytes.clone())
            .file_name(upload.file_name.clone())
            .mime_str(&upload.content_type)?;
        let form = Form::new().part(FILE_FIELD, part);

        let response = self
            .http
            .post(self.endpoint.clone())
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(PredictError::Status {
                status,
                body: truncate(&body),
            });
        }

        debug!("prediction response: {}", body);

        Ok(serde_json::from_str(&body)?)
    }
}

fn truncate(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.chars().count() > MAX_ERROR_CHARS {
        let mut out: String = trimmed.chars().take(MAX_ERROR_CHARS).collect();
        out.push_str("...");
        out
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_guesses_content_type() {
        assert_eq!(Upload::new("leaf.jpg", vec![1]).content_type, "image/jpeg");
        assert_eq!(Upload::new("leaf.PNG", vec![1]).content_type, "image/png");
        assert_eq!(
            Upload::new("leaf", vec![1]).content_type,
            "application/octet-stream"
        );
    }

    #[test]
    fn test_upload_debug_omits_bytes() {
        let upload = Upload::new("leaf.jpg", vec![0xde, 0xad]);
        let debug = format!("{upload:?}");
        assert!(debug.contains("leaf.jpg"));
        assert!(debug.contains("len: 2"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("  short \n"), "short");

        let long = "x".repeat(MAX_ERROR_CHARS + 10);
        let out = truncate(&long);
        assert_eq!(out.len(), MAX_ERROR_CHARS + 3);
        assert!(out.ends_with("..."));
    }

    #[tokio::test]
    async fn test_upload_from_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("leaf.png");
        tokio::fs::write(&path, b"png").await.expect("write");

        let upload = Upload::from_path(&path).await.expect("upload");
        assert_eq!(upload.file_name, "leaf.png");
        assert_eq!(upload.content_type, "image/png");
        assert_eq!(upload.bytes, b"png");
    }

    #[test]
    fn test_default_endpoint_parses() {
        let url = Url::parse(DEFAULT_ENDPOINT).expect("url");
        assert_eq!(url.path(), "/predict");
        assert_eq!(url.port(), Some(5000));
    }
}
