//! HTTP client for the analysis service.
//!
//! One thin wrapper per endpoint. Every payload goes through a shared
//! envelope check first: the service signals domain-level failures by
//! returning a JSON object with an `error` string, independent of the HTTP
//! status code.

use reqwest::header::USER_AGENT;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::error::{ApiError, Result};
use crate::types::{
    AdvancedAnalysis, AlignmentResult, GeneStructures, HealthStatus, MutationImpact,
    ReportResponse, SequenceComposition, StructureAnalysis, StructureInfo,
};

/// Default base URL of a locally running analysis service.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// User agent sent with every request.
const CLIENT_USER_AGENT: &str = concat!("protein-structure-explorer/", env!("CARGO_PKG_VERSION"));

/// Client for the analysis service.
///
/// Cheap to clone; clones share the underlying connection pool. No request
/// timeout is configured: a stuck request leaves its panel loading rather
/// than surfacing a spurious failure.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client against the given base URL (e.g.
    /// `http://localhost:8080/api`).
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Base URL this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_value(&self, path: &str, query: &[(&str, &str)]) -> Result<Value> {
        let url = format!("{}{path}", self.base_url);
        debug!(%url, "GET");
        let response = self
            .http
            .get(&url)
            .header(USER_AGENT, CLIENT_USER_AGENT)
            .query(query)
            .send()
            .await?;
        Ok(response.json().await?)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
        decode(self.get_value(path, query).await?)
    }

    /// `/health` — liveness probe, used once at startup.
    pub async fn health(&self) -> Result<HealthStatus> {
        self.get_json("/health", &[]).await
    }

    /// `/gene/structures` — PDB ids associated with a gene.
    pub async fn gene_structures(&self, gene_name: &str, species: &str) -> Result<GeneStructures> {
        self.get_json(
            "/gene/structures",
            &[("gene_name", gene_name), ("species", species)],
        )
        .await
    }

    /// `/pdb/info/{id}` — entry-level metadata.
    pub async fn structure_info(&self, pdb_id: &str) -> Result<StructureInfo> {
        self.get_json(&format!("/pdb/info/{pdb_id}"), &[]).await
    }

    /// `/pdb/analyze/{id}` — basic physicochemical analysis.
    pub async fn analyze(&self, pdb_id: &str) -> Result<StructureAnalysis> {
        self.get_json(&format!("/pdb/analyze/{pdb_id}"), &[]).await
    }

    /// `/pdb/analyze-advanced/{id}` — bonds, bridges, SASA, hydrophobicity.
    pub async fn analyze_advanced(&self, pdb_id: &str) -> Result<AdvancedAnalysis> {
        self.get_json(&format!("/pdb/analyze-advanced/{pdb_id}"), &[])
            .await
    }

    /// `/pdb/sequence-composition/{id}` — per-chain amino-acid statistics.
    pub async fn sequence_composition(&self, pdb_id: &str) -> Result<SequenceComposition> {
        self.get_json(&format!("/pdb/sequence-composition/{pdb_id}"), &[])
            .await
    }

    /// `/pdb/mutation` — point-mutation impact assessment.
    ///
    /// The mutation string (`A:K33E`) is validated by the service only.
    pub async fn mutation(&self, pdb_id: &str, mutation: &str) -> Result<MutationImpact> {
        self.get_json("/pdb/mutation", &[("pdb_id", pdb_id), ("mutation", mutation)])
            .await
    }

    /// `/pdb/align-uniprot/{id}` — chain alignment against a UniProt
    /// reference. Without an explicit id the service derives one from the
    /// structure's cross-references.
    pub async fn align_uniprot(
        &self,
        pdb_id: &str,
        uniprot_id: Option<&str>,
    ) -> Result<AlignmentResult> {
        let path = format!("/pdb/align-uniprot/{pdb_id}");
        match uniprot_id {
            Some(id) => self.get_json(&path, &[("uniprot_id", id)]).await,
            None => self.get_json(&path, &[]).await,
        }
    }

    /// `/report?gene_name=` — markdown report for a gene query.
    pub async fn report_for_gene(&self, gene_name: &str) -> Result<ReportResponse> {
        self.get_json("/report", &[("gene_name", gene_name)]).await
    }

    /// `/report?pdb_ids=` — markdown report for one or more structures.
    pub async fn report_for_structures(&self, pdb_ids: &[String]) -> Result<ReportResponse> {
        let query: Vec<(&str, &str)> = pdb_ids.iter().map(|id| ("pdb_ids", id.as_str())).collect();
        self.get_json("/report", &query).await
    }
}

/// Apply the error envelope check, then deserialize.
pub(crate) fn decode<T: DeserializeOwned>(value: Value) -> Result<T> {
    if let Some(message) = value.get("error").and_then(Value::as_str) {
        return Err(ApiError::Service {
            message: message.to_string(),
        });
    }
    Ok(serde_json::from_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GeneStructures;
    use serde_json::json;

    #[test]
    fn decode_maps_error_envelope_to_service_error() {
        let value = json!({"error": "invalid mutation format, expected A:K33E"});
        let result: Result<MutationImpact> = decode(value);
        match result {
            Err(ApiError::Service { message }) => assert!(message.contains("A:K33E")),
            other => panic!("expected service error, got {other:?}"),
        }
    }

    #[test]
    fn decode_passes_clean_payloads_through() {
        let value = json!({
            "gene_name": "TP53",
            "species": "human",
            "structures": ["1TUP", "2AC0"],
            "count": 2
        });
        let payload: GeneStructures = decode(value).unwrap();
        assert_eq!(payload.structures, vec!["1TUP", "2AC0"]);
        assert_eq!(payload.count, Some(2));
    }

    #[test]
    fn decode_reports_shape_mismatches() {
        let value = json!({"structures": "not-a-list"});
        let result: Result<GeneStructures> = decode(value);
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[test]
    fn base_url_is_normalized() {
        let client = ApiClient::new("http://localhost:8080/api/");
        assert_eq!(client.base_url(), "http://localhost:8080/api");
    }
}
