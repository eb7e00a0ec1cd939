//! Data Sources
//!
//! Resolves configured resource locations to text. An `http://` or
//! `https://` location is fetched with reqwest; anything else is read as a
//! local file, mirroring the original static deployment where both documents
//! sat next to the page. Single attempt, no retries: a failed fetch is logged
//! by the caller and the corresponding section simply does not render.

use std::time::Duration;

use thiserror::Error;

/// Errors from resolving a source location.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Request to {location} failed: {error}")]
    Http {
        location: String,
        error: reqwest::Error,
    },

    #[error("Source {location} returned status {status}")]
    Status { location: String, status: u16 },

    #[error("Failed to read {location}: {error}")]
    Io {
        location: String,
        error: std::io::Error,
    },
}

/// Fetcher for the profile and sheet documents.
#[derive(Debug, Clone)]
pub struct DataSource {
    client: reqwest::Client,
}

impl DataSource {
    /// Create a source with the given per-request timeout. The original page
    /// had none, but a server handler cannot be left hanging on a dead
    /// upstream; expiry renders the same empty section a hung fetch did.
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent(concat!("pullboard/", env!("CARGO_PKG_VERSION")))
                .timeout(timeout)
                .build()
                .unwrap(),
        }
    }

    /// Fetch a location as text.
    pub async fn fetch_text(&self, location: &str) -> Result<String, SourceError> {
        if location.starts_with("http://") || location.starts_with("https://") {
            self.fetch_remote(location).await
        } else {
            tokio::fs::read_to_string(location)
                .await
                .map_err(|error| SourceError::Io {
                    location: location.to_string(),
                    error,
                })
        }
    }

    async fn fetch_remote(&self, location: &str) -> Result<String, SourceError> {
        let wrap = |error| SourceError::Http {
            location: location.to_string(),
            error,
        };

        let response = self.client.get(location).send().await.map_err(wrap)?;

        if !response.status().is_success() {
            return Err(SourceError::Status {
                location: location.to_string(),
                status: response.status().as_u16(),
            });
        }

        response.text().await.map_err(wrap)
    }
}

impl Default for DataSource {
    fn default() -> Self {
        Self::new(Duration::from_secs(10))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_local_file_source() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Date,Banner\n2024-01-01,BannerA").unwrap();

        let source = DataSource::default();
        let body = source
            .fetch_text(file.path().to_str().unwrap())
            .await
            .unwrap();
        assert!(body.starts_with("Date,Banner"));
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let source = DataSource::default();
        let err = source
            .fetch_text("/nonexistent/pullboard/sheet.csv")
            .await
            .unwrap_err();
        assert!(matches!(err, SourceError::Io { .. }));
    }
}
