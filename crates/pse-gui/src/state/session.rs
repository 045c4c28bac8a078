//! Structure session: the single live selection and its panels.
//!
//! `StructureSession` owns the "currently selected structure" shared by every
//! analysis panel. Selecting a structure bumps an internal generation
//! counter; each in-flight fetch carries the generation it was issued for and
//! its completion is applied only while that generation is still current.
//! Out-of-order completions of requests for different selections therefore
//! never interleave into one rendered view.

use pse_api::types::{
    AdvancedAnalysis, AlignmentResult, MutationImpact, SequenceComposition, StructureAnalysis,
    StructureInfo,
};
use tracing::debug;

use crate::error::FetchError;

/// Loading state of one independently fetched panel.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelState<T> {
    /// Nothing requested yet.
    Idle,
    /// Request in flight.
    Loading,
    /// Data arrived.
    Ready(T),
    /// The fetch failed; rendered inline in the panel only.
    Failed(FetchError),
}

// Not derived: `T` itself needs no `Default`.
impl<T> Default for PanelState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> PanelState<T> {
    /// Whether a request is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The payload, if data arrived.
    #[must_use]
    pub fn as_ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// The failure, if the fetch failed.
    #[must_use]
    pub fn as_failed(&self) -> Option<&FetchError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }

    fn from_result(result: Result<T, FetchError>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(err) => Self::Failed(err),
        }
    }
}

/// Overall session phase, driven by the structure-info fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    /// No structure selected yet.
    #[default]
    Idle,
    /// A structure is selected and its panels are loading.
    Loading,
    /// The selected structure's metadata arrived.
    Ready,
    /// The selected structure's metadata fetch failed.
    Failed,
}

/// Mutation panel: user input plus the latest per-selection result.
#[derive(Debug, Default)]
pub struct MutationPanel {
    /// Raw mutation string as typed (`A:K33E`); validated by the service only.
    pub input: String,
    /// Latest impact result for the current selection.
    pub result: PanelState<MutationImpact>,
}

/// Alignment panel: optional UniProt id plus the latest per-selection result.
#[derive(Debug, Default)]
pub struct AlignmentPanel {
    /// Optional UniProt accession; empty lets the service derive one.
    pub uniprot_input: String,
    /// Latest alignment result for the current selection.
    pub result: PanelState<AlignmentResult>,
}

/// State for the active structure selection and its dependent panels.
#[derive(Debug, Default)]
pub struct StructureSession {
    generation: u64,
    selection: Option<String>,
    /// Overall phase: `Idle -> Loading(id) -> Ready(id) | Failed(id)`.
    pub phase: SessionPhase,
    /// Entry metadata panel.
    pub info: PanelState<StructureInfo>,
    /// Basic analysis panel (counts, secondary structure).
    pub analysis: PanelState<StructureAnalysis>,
    /// Advanced analysis panel (bonds, bridges, SASA, hydrophobicity).
    pub advanced: PanelState<AdvancedAnalysis>,
    /// Sequence composition panel (drives the per-chain charts).
    pub composition: PanelState<SequenceComposition>,
    /// Mutation impact panel.
    pub mutation: MutationPanel,
    /// UniProt alignment panel.
    pub alignment: AlignmentPanel,
}

impl StructureSession {
    /// Make `pdb_id` the live selection.
    ///
    /// Synchronously transitions to `Loading`, resets every panel, and
    /// supersedes all fetches issued for earlier selections. Returns the new
    /// generation to tag this selection's fetches with.
    pub fn select(&mut self, pdb_id: &str) -> u64 {
        self.generation += 1;
        self.selection = Some(pdb_id.to_string());
        self.phase = SessionPhase::Loading;
        self.info = PanelState::Loading;
        self.analysis = PanelState::Loading;
        self.advanced = PanelState::Loading;
        self.composition = PanelState::Loading;
        // Panels are recreated in full per selection; keep what the user
        // typed, drop results that belong to the previous structure.
        self.mutation.result = PanelState::Idle;
        self.alignment.result = PanelState::Idle;
        self.generation
    }

    /// The live selection, or `None` before the first `select`.
    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    /// Generation of the live selection.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether a completion tagged with `generation` is still current.
    #[must_use]
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    /// Apply a structure-info completion. Returns `false` (and leaves all
    /// state untouched) when the completion is stale.
    pub fn apply_info(&mut self, generation: u64, result: Result<StructureInfo, FetchError>) -> bool {
        if !self.accept(generation, "structure info") {
            return false;
        }
        self.phase = match &result {
            Ok(_) => SessionPhase::Ready,
            Err(_) => SessionPhase::Failed,
        };
        self.info = PanelState::from_result(result);
        true
    }

    /// Apply a basic-analysis completion.
    pub fn apply_analysis(
        &mut self,
        generation: u64,
        result: Result<StructureAnalysis, FetchError>,
    ) -> bool {
        if !self.accept(generation, "analysis") {
            return false;
        }
        self.analysis = PanelState::from_result(result);
        true
    }

    /// Apply an advanced-analysis completion.
    pub fn apply_advanced(
        &mut self,
        generation: u64,
        result: Result<AdvancedAnalysis, FetchError>,
    ) -> bool {
        if !self.accept(generation, "advanced analysis") {
            return false;
        }
        self.advanced = PanelState::from_result(result);
        true
    }

    /// Apply a sequence-composition completion.
    pub fn apply_composition(
        &mut self,
        generation: u64,
        result: Result<SequenceComposition, FetchError>,
    ) -> bool {
        if !self.accept(generation, "sequence composition") {
            return false;
        }
        self.composition = PanelState::from_result(result);
        true
    }

    /// Apply a mutation-impact completion.
    pub fn apply_mutation(
        &mut self,
        generation: u64,
        result: Result<MutationImpact, FetchError>,
    ) -> bool {
        if !self.accept(generation, "mutation impact") {
            return false;
        }
        self.mutation.result = PanelState::from_result(result);
        true
    }

    /// Apply an alignment completion.
    pub fn apply_alignment(
        &mut self,
        generation: u64,
        result: Result<AlignmentResult, FetchError>,
    ) -> bool {
        if !self.accept(generation, "alignment") {
            return false;
        }
        self.alignment.result = PanelState::from_result(result);
        true
    }

    fn accept(&self, generation: u64, what: &str) -> bool {
        if self.is_current(generation) {
            return true;
        }
        debug!(
            what,
            stale = generation,
            current = self.generation,
            "discarding completion for a superseded selection"
        );
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(pdb_id: &str) -> StructureInfo {
        serde_json::from_str(&format!(r#"{{"pdb_id":"{pdb_id}","title":"t"}}"#)).unwrap()
    }

    #[test]
    fn select_resets_panels_and_bumps_generation() {
        let mut session = StructureSession::default();
        let first = session.select("1TUP");
        assert!(session.apply_info(first, Ok(info("1TUP"))));
        assert_eq!(session.phase, SessionPhase::Ready);

        let second = session.select("2AC0");
        assert!(second > first);
        assert_eq!(session.current(), Some("2AC0"));
        assert_eq!(session.phase, SessionPhase::Loading);
        assert!(session.info.is_loading());
        assert!(session.composition.is_loading());
    }

    #[test]
    fn stale_completions_are_dropped_unrendered() {
        let mut session = StructureSession::default();
        let first = session.select("1TUP");
        let second = session.select("2AC0");

        // The first selection's fetch resolves after the second select.
        assert!(!session.apply_info(first, Ok(info("1TUP"))));
        assert!(session.info.is_loading());
        assert_eq!(session.phase, SessionPhase::Loading);

        assert!(session.apply_info(second, Ok(info("2AC0"))));
        let rendered = session.info.as_ready().unwrap();
        assert_eq!(rendered.pdb_id.as_deref(), Some("2AC0"));
    }

    #[test]
    fn panel_failures_are_independent() {
        let mut session = StructureSession::default();
        let generation = session.select("1TUP");

        assert!(session.apply_info(generation, Ok(info("1TUP"))));
        assert!(session.apply_advanced(
            generation,
            Err(FetchError::Service("SASA computation failed".into()))
        ));

        // Advanced panel fails inline; siblings are untouched.
        assert!(session.advanced.as_failed().is_some());
        assert_eq!(session.phase, SessionPhase::Ready);
        assert!(session.analysis.is_loading());
    }

    #[test]
    fn reselection_clears_mutation_and_alignment_results() {
        let mut session = StructureSession::default();
        let generation = session.select("1TUP");
        session.mutation.input = "A:K33E".to_string();
        assert!(session.apply_mutation(
            generation,
            Err(FetchError::Service("invalid mutation".into()))
        ));

        let _ = session.select("2AC0");
        assert_eq!(session.mutation.result, PanelState::Idle);
        // Typed input survives the selection change.
        assert_eq!(session.mutation.input, "A:K33E");
    }
}
