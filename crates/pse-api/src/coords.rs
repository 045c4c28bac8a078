//! Coordinate archive client.
//!
//! Raw structure coordinate files come from the public PDB archive, a
//! separate unauthenticated bulk-data source, not from the analysis service.

use reqwest::StatusCode;
use tracing::debug;

use crate::error::{ApiError, Result};

/// Default download URL of the reference structure archive.
pub const DEFAULT_ARCHIVE_URL: &str = "https://files.rcsb.org/download";

/// Client for downloading raw PDB coordinate files by id.
#[derive(Debug, Clone)]
pub struct CoordinateClient {
    http: reqwest::Client,
    base_url: String,
}

impl CoordinateClient {
    /// Create a client against the given archive URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Download the coordinate file for `pdb_id` as text.
    pub async fn fetch_structure(&self, pdb_id: &str) -> Result<String> {
        let url = format!("{}/{}.pdb", self.base_url, pdb_id.to_uppercase());
        debug!(%url, "downloading coordinates");
        let response = self.http.get(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(format!(
                "no coordinate file in the archive for {pdb_id}"
            )));
        }
        let response = response.error_for_status()?;
        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn archive_url_is_normalized() {
        let client = CoordinateClient::new("https://files.rcsb.org/download/");
        assert_eq!(client.base_url, "https://files.rcsb.org/download");
    }
}
