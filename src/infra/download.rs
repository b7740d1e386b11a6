//! HTTP download functionality
//!
//! Issues plain GET requests and streams the response body to disk. Bodies
//! are written verbatim whatever the status code; nothing is verified.

use futures::StreamExt;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::config::defaults;
use crate::error::DownloadError;

/// Download result containing file path and metadata
#[derive(Debug)]
pub struct DownloadResult {
    /// Path the body was written to
    pub path: PathBuf,
    /// HTTP status code of the response
    pub status: u16,
    /// Size in bytes
    pub size: u64,
    /// SHA256 checksum of the written content
    pub checksum: String,
}

/// HTTP client used for fetching raw files
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: reqwest::Client,
}

impl Fetcher {
    /// Create a new fetcher
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent(defaults::USER_AGENT)
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
        }
    }

    /// Send a GET request and return the response headers
    ///
    /// The body is not read until [`PendingDownload::save`] is called, so a
    /// request that fails here leaves no file behind.
    pub async fn get(&self, url: &str) -> Result<PendingDownload, DownloadError> {
        tracing::debug!("GET {url}");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| DownloadError::NetworkError {
                url: url.to_string(),
                error: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("{url} returned HTTP {status}; writing the body anyway");
        }

        Ok(PendingDownload {
            url: url.to_string(),
            response,
        })
    }
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new()
    }
}

/// A response whose body has not been consumed yet
#[derive(Debug)]
pub struct PendingDownload {
    url: String,
    response: reqwest::Response,
}

impl PendingDownload {
    /// HTTP status code of the response
    pub fn status(&self) -> u16 {
        self.response.status().as_u16()
    }

    /// Stream the body into `file`, which was opened at `dest`
    pub async fn save(self, mut file: File, dest: &Path) -> Result<DownloadResult, DownloadError> {
        let status = self.status();
        let url = self.url;
        let mut hasher = Sha256::new();
        let mut written: u64 = 0;
        let mut stream = self.response.bytes_stream();

        while let Some(chunk_result) = stream.next().await {
            let chunk = chunk_result.map_err(|e| DownloadError::NetworkError {
                url: url.clone(),
                error: e.to_string(),
            })?;

            file.write_all(&chunk)
                .await
                .map_err(|e| DownloadError::IoError {
                    path: dest.to_path_buf(),
                    error: e.to_string(),
                })?;

            hasher.update(&chunk);
            written += chunk.len() as u64;
        }

        file.flush().await.map_err(|e| DownloadError::IoError {
            path: dest.to_path_buf(),
            error: e.to_string(),
        })?;

        tracing::debug!("wrote {written} bytes to {}", dest.display());

        Ok(DownloadResult {
            path: dest.to_path_buf(),
            status,
            size: written,
            checksum: hex::encode(hasher.finalize()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tempfile::TempDir;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn fetch_to(url: &str, dest: &Path) -> Result<DownloadResult, DownloadError> {
        let pending = Fetcher::new().get(url).await?;
        let file = File::create(dest).await.unwrap();
        pending.save(file, dest).await
    }

    #[tokio::test]
    async fn test_save_writes_body_verbatim() {
        let mock_server = MockServer::start().await;
        let content = b"#pragma once\n\x00\xffbinary tail".to_vec();

        Mock::given(method("GET"))
            .and(path("/QArchive.hpp"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(content.clone()))
            .mount(&mock_server)
            .await;

        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("QArchive.hpp");

        let result = fetch_to(&format!("{}/QArchive.hpp", mock_server.uri()), &dest)
            .await
            .unwrap();

        assert_eq!(result.status, 200);
        assert_eq!(result.size, content.len() as u64);
        assert_eq!(
            result.checksum,
            "31e0f649130333d851a52204f335b9e61b1f6ff99adedd96c7a372f10a5d7400"
        );
        assert_eq!(std::fs::read(&dest).unwrap(), content);
    }

    #[tokio::test]
    async fn test_empty_body_digest() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/empty"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&mock_server)
            .await;

        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("empty");

        let result = fetch_to(&format!("{}/empty", mock_server.uri()), &dest)
            .await
            .unwrap();

        assert_eq!(result.size, 0);
        // Known SHA256 of the empty string
        assert_eq!(
            result.checksum,
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[tokio::test]
    async fn test_slow_response_is_waited_for() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/slow.hpp"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("// slow")
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&mock_server)
            .await;

        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("slow.hpp");

        let result = fetch_to(&format!("{}/slow.hpp", mock_server.uri()), &dest)
            .await
            .unwrap();

        assert_eq!(result.status, 200);
        assert_eq!(std::fs::read_to_string(&dest).unwrap(), "// slow");
    }

    #[tokio::test]
    async fn test_error_status_body_is_still_written() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_string("404: Not Found"))
            .mount(&mock_server)
            .await;

        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("missing");

        let result = fetch_to(&format!("{}/missing", mock_server.uri()), &dest)
            .await
            .unwrap();

        assert_eq!(result.status, 404);
        assert_eq!(std::fs::read_to_string(&dest).unwrap(), "404: Not Found");
    }

    #[tokio::test]
    async fn test_single_request_per_file() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/LICENSE"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&mock_server)
            .await;

        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("LICENSE");

        let result = fetch_to(&format!("{}/LICENSE", mock_server.uri()), &dest).await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().status, 500);
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        // Bind then drop a listener so the port is closed
        let uri = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            format!("http://{}", listener.local_addr().unwrap())
        };

        let err = Fetcher::new()
            .get(&format!("{uri}/QArchive.hpp"))
            .await
            .unwrap_err();

        match err {
            DownloadError::NetworkError { url, .. } => assert!(url.ends_with("/QArchive.hpp")),
            e => panic!("Expected NetworkError, got: {e:?}"),
        }
    }
}
