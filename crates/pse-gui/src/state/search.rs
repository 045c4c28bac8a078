//! Search orchestration state.
//!
//! A search resolves either a gene name into its candidate structure list or
//! a single PDB id into a one-entry list. Resolutions and the follow-up
//! per-candidate info fetches carry the search generation; a newer submit
//! supersedes everything still in flight. A failed resolution leaves the
//! previously shown candidates untouched.

use pse_api::types::StructureInfo;
use tracing::debug;

use crate::error::FetchError;
use crate::state::session::PanelState;

/// Species offered by the gene search selector.
pub const SPECIES: [&str; 3] = ["human", "mouse", "rat"];

/// What the search input is interpreted as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    /// Gene symbol, resolved via the gene-structures endpoint.
    #[default]
    Gene,
    /// Literal PDB id.
    PdbId,
}

impl SearchMode {
    pub const ALL: [Self; 2] = [Self::Gene, Self::PdbId];

    /// Display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Gene => "Gene",
            Self::PdbId => "PDB ID",
        }
    }
}

impl std::fmt::Display for SearchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A resolved search query, kept for report generation and the header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Structures associated with a gene.
    ByGene { name: String, species: String },
    /// A single structure by id.
    ByPdbId { id: String },
}

impl Query {
    /// Short description for the results header.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::ByGene { name, species } => format!("{name} ({species})"),
            Self::ByPdbId { id } => id.clone(),
        }
    }
}

/// One candidate row: the id plus its lazily fetched summary metadata.
#[derive(Debug)]
pub struct CandidateEntry {
    pub pdb_id: String,
    pub info: PanelState<StructureInfo>,
}

/// State of the search bar and the candidate list.
#[derive(Debug)]
pub struct SearchState {
    pub mode: SearchMode,
    pub input: String,
    /// Species for gene searches.
    pub species: String,
    /// Whether a resolution is in flight.
    pub in_flight: bool,
    generation: u64,
    /// The query behind the currently shown candidates.
    pub active_query: Option<Query>,
    pub candidates: Vec<CandidateEntry>,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            mode: SearchMode::default(),
            input: String::new(),
            species: SPECIES[0].to_string(),
            in_flight: false,
            generation: 0,
            active_query: None,
            candidates: Vec::new(),
        }
    }
}

impl SearchState {
    /// Fresh search state with the given species preselected.
    #[must_use]
    pub fn with_species(species: String) -> Self {
        Self {
            species,
            ..Self::default()
        }
    }

    /// Submit the current input.
    ///
    /// Returns the generation and query to resolve, or `None` for empty
    /// input. The candidate list is left as is until the resolution succeeds.
    pub fn submit(&mut self) -> Option<(u64, Query)> {
        let input = self.input.trim();
        if input.is_empty() {
            return None;
        }
        let query = match self.mode {
            SearchMode::Gene => Query::ByGene {
                name: input.to_string(),
                species: self.species.clone(),
            },
            SearchMode::PdbId => Query::ByPdbId {
                id: input.to_uppercase(),
            },
        };
        self.generation += 1;
        self.in_flight = true;
        Some((self.generation, query))
    }

    /// Generation of the latest submit.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Apply a resolution completion. On success the candidate list is
    /// replaced with loading rows; on failure it is left untouched. Returns
    /// `false` when the completion is stale.
    pub fn apply_candidates(
        &mut self,
        generation: u64,
        query: Query,
        result: &Result<Vec<String>, FetchError>,
    ) -> bool {
        if generation != self.generation {
            debug!(
                stale = generation,
                current = self.generation,
                "discarding candidates for a superseded search"
            );
            return false;
        }
        self.in_flight = false;
        if let Ok(ids) = result {
            self.active_query = Some(query);
            self.candidates = ids
                .iter()
                .map(|id| CandidateEntry {
                    pdb_id: id.clone(),
                    info: PanelState::Loading,
                })
                .collect();
        }
        true
    }

    /// Apply a per-candidate info completion. Stale completions and unknown
    /// ids are ignored.
    pub fn apply_candidate_info(
        &mut self,
        generation: u64,
        pdb_id: &str,
        result: Result<StructureInfo, FetchError>,
    ) -> bool {
        if generation != self.generation {
            debug!(
                pdb_id,
                stale = generation,
                current = self.generation,
                "discarding candidate info for a superseded search"
            );
            return false;
        }
        if let Some(entry) = self.candidates.iter_mut().find(|c| c.pdb_id == pdb_id) {
            entry.info = match result {
                Ok(info) => PanelState::Ready(info),
                Err(err) => PanelState::Failed(err),
            };
            true
        } else {
            false
        }
    }

    /// The gene name behind the shown candidates, if the active query is a
    /// gene search. Used to pick the report endpoint.
    #[must_use]
    pub fn active_gene(&self) -> Option<&str> {
        match &self.active_query {
            Some(Query::ByGene { name, .. }) => Some(name),
            _ => None,
        }
    }

    /// Ids of the shown candidates.
    #[must_use]
    pub fn candidate_ids(&self) -> Vec<String> {
        self.candidates.iter().map(|c| c.pdb_id.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok_ids(ids: &[&str]) -> Result<Vec<String>, FetchError> {
        Ok(ids.iter().map(ToString::to_string).collect())
    }

    #[test]
    fn empty_input_does_not_submit() {
        let mut search = SearchState::default();
        search.input = "   ".to_string();
        assert!(search.submit().is_none());
        assert!(!search.in_flight);
    }

    #[test]
    fn pdb_id_queries_are_uppercased() {
        let mut search = SearchState::default();
        search.mode = SearchMode::PdbId;
        search.input = "1tup".to_string();
        let (_, query) = search.submit().unwrap();
        assert_eq!(query, Query::ByPdbId { id: "1TUP".into() });
    }

    #[test]
    fn failed_resolution_keeps_prior_candidates() {
        let mut search = SearchState::default();
        search.input = "TP53".to_string();
        let (first, query) = search.submit().unwrap();
        assert!(search.apply_candidates(first, query, &ok_ids(&["1TUP", "2AC0"])));
        assert_eq!(search.candidates.len(), 2);

        search.input = "XYZZY".to_string();
        let (second, query) = search.submit().unwrap();
        let failure = Err(FetchError::NotFound("no structures found".into()));
        assert!(search.apply_candidates(second, query, &failure));

        // Prior results stay; the failure is reported out of band.
        assert_eq!(search.candidates.len(), 2);
        assert_eq!(search.active_gene(), Some("TP53"));
        assert!(!search.in_flight);
    }

    #[test]
    fn stale_resolution_is_dropped() {
        let mut search = SearchState::default();
        search.input = "TP53".to_string();
        let (first, first_query) = search.submit().unwrap();
        search.input = "BRCA1".to_string();
        let (second, second_query) = search.submit().unwrap();

        assert!(!search.apply_candidates(first, first_query, &ok_ids(&["1TUP"])));
        assert!(search.candidates.is_empty());

        assert!(search.apply_candidates(second, second_query, &ok_ids(&["1JM7"])));
        assert_eq!(search.candidate_ids(), vec!["1JM7"]);
    }

    #[test]
    fn candidate_info_lands_on_its_row() {
        let mut search = SearchState::default();
        search.input = "TP53".to_string();
        let (generation, query) = search.submit().unwrap();
        assert!(search.apply_candidates(generation, query, &ok_ids(&["1TUP", "2AC0"])));

        let info: StructureInfo =
            serde_json::from_str(r#"{"pdb_id":"2AC0","title":"Tetramer"}"#).unwrap();
        assert!(search.apply_candidate_info(generation, "2AC0", Ok(info)));
        assert!(search.candidates[0].info.is_loading());
        assert!(search.candidates[1].info.as_ready().is_some());
    }

    #[test]
    fn candidate_info_for_superseded_search_is_dropped() {
        let mut search = SearchState::default();
        search.input = "TP53".to_string();
        let (first, query) = search.submit().unwrap();
        assert!(search.apply_candidates(first, query, &ok_ids(&["1TUP"])));
        search.input = "BRCA1".to_string();
        let _ = search.submit().unwrap();

        let info: StructureInfo = serde_json::from_str(r#"{"pdb_id":"1TUP"}"#).unwrap();
        assert!(!search.apply_candidate_info(first, "1TUP", Ok(info)));
        assert!(search.candidates[0].info.is_loading());
    }
}
