//! Application messages.
//!
//! Every asynchronous completion carries the generation of the selection or
//! search it was issued for; the handlers drop stale completions before any
//! state is touched.

use std::path::PathBuf;

use pse_api::types::{
    AdvancedAnalysis, AlignmentResult, MutationImpact, SequenceComposition, StructureAnalysis,
    StructureInfo,
};

use crate::component::toast::ToastMessage;
use crate::error::FetchError;
use crate::state::search::{Query, SearchMode};
use crate::state::viewer::{ColorScheme, Representation};

/// Top-level application message.
#[derive(Debug, Clone)]
pub enum Message {
    // ====== SEARCH ======
    /// Search mode toggled between gene and PDB id.
    SearchModeChanged(SearchMode),
    /// Search input edited.
    SearchInputChanged(String),
    /// Species picked for gene searches.
    SpeciesSelected(String),
    /// Search submitted (button or Enter).
    SearchSubmitted,
    /// Candidate resolution settled.
    CandidatesResolved {
        generation: u64,
        query: Query,
        result: Result<Vec<String>, FetchError>,
    },
    /// Summary metadata for one candidate row settled.
    CandidateInfoFetched {
        generation: u64,
        pdb_id: String,
        result: Result<StructureInfo, FetchError>,
    },

    // ====== SELECTION / PANELS ======
    /// A candidate row was clicked.
    CandidateSelected(String),
    /// Structure metadata settled.
    InfoFetched {
        generation: u64,
        pdb_id: String,
        result: Result<StructureInfo, FetchError>,
    },
    /// Basic analysis settled.
    AnalysisFetched {
        generation: u64,
        result: Result<StructureAnalysis, FetchError>,
    },
    /// Advanced analysis settled.
    AdvancedFetched {
        generation: u64,
        result: Result<AdvancedAnalysis, FetchError>,
    },
    /// Sequence composition settled.
    CompositionFetched {
        generation: u64,
        pdb_id: String,
        result: Result<SequenceComposition, FetchError>,
    },

    // ====== VIEWER ======
    /// Representation picked in the viewer toolbar.
    RepresentationSelected(Representation),
    /// Color scheme picked in the viewer toolbar.
    ColorSchemeSelected(ColorScheme),
    /// Reset view button clicked.
    ViewerResetClicked,
    /// Coordinate download settled.
    CoordinatesFetched {
        generation: u64,
        pdb_id: String,
        result: Result<String, FetchError>,
    },

    // ====== MUTATION ======
    /// Mutation input edited.
    MutationInputChanged(String),
    /// Mutation analysis submitted.
    MutationSubmitted,
    /// Mutation impact settled.
    MutationFetched {
        generation: u64,
        result: Result<MutationImpact, FetchError>,
    },

    // ====== ALIGNMENT ======
    /// UniProt id input edited.
    UniprotInputChanged(String),
    /// Alignment submitted.
    AlignmentSubmitted,
    /// Alignment settled.
    AlignmentFetched {
        generation: u64,
        result: Result<AlignmentResult, FetchError>,
    },

    // ====== REPORT ======
    /// Generate report button clicked.
    ReportRequested,
    /// Report generation settled.
    ReportFetched {
        generation: u64,
        result: Result<String, FetchError>,
    },
    /// Export report button clicked.
    ExportReportClicked,
    /// Save dialog settled; `None` means cancelled.
    ExportPathSelected(Option<PathBuf>),
    /// Report file write settled.
    ReportExported(Result<PathBuf, String>),

    // ====== SHELL ======
    /// Open a URL in the system browser.
    OpenUrl(String),
    /// Startup liveness probe settled.
    HealthChecked(Result<(), FetchError>),
    /// Toast notification events.
    Toast(ToastMessage),
    /// No-op, used by tasks with nothing to report.
    Noop,
}
