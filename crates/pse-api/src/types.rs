//! Response types for the analysis service endpoints.
//!
//! Every nested field the service may omit is an `Option`; absence means
//! "not computed" or "unavailable", never an error by itself. Rendering code
//! is expected to degrade to an explicit unavailable marker.

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;

/// A value the backend reports either as a number or as fallback text
/// (typically `"N/A"` when a computation was skipped).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NumberOrText {
    /// Numeric value.
    Number(f64),
    /// Fallback text, usually `"N/A"`.
    Text(String),
}

impl NumberOrText {
    /// Numeric value, if this is a number.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }
}

impl fmt::Display for NumberOrText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => write!(f, "{n:.0}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

// =============================================================================
// HEALTH / SEARCH
// =============================================================================

/// `/health` response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HealthStatus {
    /// Liveness flag, `"ok"` when the service is up.
    pub status: Option<String>,
    /// Optional human-readable detail.
    pub message: Option<String>,
}

/// `/gene/structures` response: PDB ids associated with a gene.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeneStructures {
    pub gene_name: Option<String>,
    pub species: Option<String>,
    /// Candidate structure ids in the order the service ranked them.
    #[serde(default)]
    pub structures: Vec<String>,
    pub count: Option<usize>,
}

// =============================================================================
// STRUCTURE METADATA
// =============================================================================

/// `/pdb/info/{id}` response: entry-level metadata.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StructureInfo {
    pub pdb_id: Option<String>,
    pub title: Option<String>,
    /// Resolution in angstrom, or `"N/A"` for non-diffraction methods.
    pub resolution: Option<NumberOrText>,
    pub method: Option<String>,
    pub organism: Option<String>,
    pub release_date: Option<String>,
    /// Canonical one-letter sequence of the first polymer entity.
    pub sequence: Option<String>,
    pub length: Option<u64>,
}

/// Secondary structure summary inside [`StructureAnalysis`].
///
/// Counts fall back to `"N/A"` text when neither the annotation API nor DSSP
/// was available server-side.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SecondaryStructure {
    pub helix: Option<NumberOrText>,
    pub beta_sheet: Option<NumberOrText>,
    pub coil: Option<NumberOrText>,
    pub helix_pct: Option<f64>,
    pub beta_pct: Option<f64>,
    pub coil_pct: Option<f64>,
    pub source: Option<String>,
    pub note: Option<String>,
}

/// `/pdb/analyze/{id}` response: basic physicochemical analysis.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StructureAnalysis {
    pub pdb_id: Option<String>,
    pub num_chains: Option<u64>,
    pub num_residues: Option<u64>,
    pub num_atoms: Option<u64>,
    pub secondary_structure: Option<SecondaryStructure>,
}

// =============================================================================
// ADVANCED ANALYSIS
// =============================================================================

/// One disulfide bridge between two cysteines.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DisulfideBond {
    pub cys1: String,
    pub cys2: String,
    pub distance: f64,
}

/// Disulfide bond section of [`AdvancedAnalysis`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DisulfideBonds {
    pub count: Option<u64>,
    #[serde(default)]
    pub bonds: Vec<DisulfideBond>,
}

/// One salt bridge between a positive and a negative residue.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SaltBridge {
    pub positive: String,
    pub negative: String,
    pub distance: f64,
}

/// Salt bridge section of [`AdvancedAnalysis`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SaltBridges {
    pub count: Option<u64>,
    #[serde(default)]
    pub bridges: Vec<SaltBridge>,
}

/// Hydrogen bond statistics.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HydrogenBonds {
    pub backbone_hbonds: Option<NumberOrText>,
    pub total: Option<NumberOrText>,
    pub source: Option<String>,
    pub note: Option<String>,
}

/// Hydrophobic/hydrophilic residue ratio for one chain.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChainHydrophobicity {
    pub hydrophobic_count: Option<u64>,
    pub hydrophilic_count: Option<u64>,
    pub hydrophobic_ratio: Option<f64>,
    pub hydrophilic_ratio: Option<f64>,
}

/// `/pdb/analyze-advanced/{id}` response.
///
/// The per-chain SASA map may carry an `error` key instead of chain entries
/// when the server-side computation failed; values are therefore
/// [`NumberOrText`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AdvancedAnalysis {
    pub pdb_id: Option<String>,
    pub disulfide_bonds: Option<DisulfideBonds>,
    pub salt_bridges: Option<SaltBridges>,
    pub hydrogen_bonds: Option<HydrogenBonds>,
    pub sasa_per_chain: Option<BTreeMap<String, NumberOrText>>,
    pub hydrophobicity_per_chain: Option<BTreeMap<String, ChainHydrophobicity>>,
}

// =============================================================================
// SEQUENCE COMPOSITION
// =============================================================================

/// Residue category percentages for one chain.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CategoryStatistics {
    pub charged_positive: Option<u64>,
    pub charged_positive_pct: Option<f64>,
    pub charged_negative: Option<u64>,
    pub charged_negative_pct: Option<f64>,
    pub hydrophobic: Option<u64>,
    pub hydrophobic_pct: Option<f64>,
    pub polar_uncharged: Option<u64>,
    pub polar_uncharged_pct: Option<f64>,
    pub aromatic: Option<u64>,
    pub aromatic_pct: Option<f64>,
}

/// Amino-acid composition of one chain.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChainComposition {
    pub sequence: Option<String>,
    pub length: Option<u64>,
    /// Percentage per one-letter amino-acid code.
    #[serde(default)]
    pub amino_acid_percentages: BTreeMap<String, f64>,
    pub category_statistics: Option<CategoryStatistics>,
}

/// `/pdb/sequence-composition/{id}` response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SequenceComposition {
    pub pdb_id: Option<String>,
    #[serde(default)]
    pub chains: BTreeMap<String, ChainComposition>,
}

// =============================================================================
// MUTATION IMPACT
// =============================================================================

/// Physicochemical properties of one amino acid.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AminoAcidProperties {
    /// One-letter code.
    pub aa: String,
    pub name: Option<String>,
    pub charge: Option<f64>,
    /// Side-chain volume in cubic angstrom.
    pub volume: Option<f64>,
    pub hydrophobic: Option<bool>,
}

/// Wild-type to mutant property deltas.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MutationChanges {
    pub charge_change: Option<f64>,
    pub volume_change: Option<f64>,
    pub hydrophobicity_change: Option<bool>,
    pub polarity_change: Option<bool>,
}

/// Qualitative impact assessment computed by the service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImpactAssessment {
    pub score: Option<f64>,
    /// Qualitative level: `high`, `medium` or `low`. The service is the
    /// single source of truth for severity.
    pub level: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub reasons: Vec<String>,
}

/// What the structure file actually contains at the mutated position.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StructuralContext {
    pub found_residue: Option<String>,
    pub matches_wt: Option<bool>,
    pub position_valid: Option<bool>,
    pub secondary_structure: Option<String>,
    pub warning: Option<String>,
    pub error: Option<String>,
}

/// `/pdb/mutation` response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MutationImpact {
    pub mutation: Option<String>,
    pub pdb_id: Option<String>,
    pub wild_type: Option<AminoAcidProperties>,
    pub mutant: Option<AminoAcidProperties>,
    pub changes: Option<MutationChanges>,
    pub impact_assessment: Option<ImpactAssessment>,
    pub structural_context: Option<StructuralContext>,
}

// =============================================================================
// SEQUENCE ALIGNMENT
// =============================================================================

/// A reference-sequence region absent from the structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct MissingRegion {
    /// First missing residue (1-based, inclusive).
    pub start: u64,
    /// Last missing residue (inclusive).
    pub end: u64,
    /// Region length as reported by the service.
    pub length: u64,
}

/// Alignment statistics for one chain.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChainAlignment {
    pub pdb_length: Option<u64>,
    pub identity_percent: Option<f64>,
    pub coverage_percent: Option<f64>,
    #[serde(default)]
    pub missing_regions: Vec<MissingRegion>,
    pub alignment_score: Option<f64>,
}

/// `/pdb/align-uniprot/{id}` response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AlignmentResult {
    pub pdb_id: Option<String>,
    pub uniprot_id: Option<String>,
    pub uniprot_length: Option<u64>,
    #[serde(default)]
    pub chain_alignments: BTreeMap<String, ChainAlignment>,
}

// =============================================================================
// REPORT
// =============================================================================

/// `/report` response: a markdown report for the active query.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReportResponse {
    pub report: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_or_text_displays_integers_without_fraction() {
        assert_eq!(NumberOrText::Number(120.0).to_string(), "120");
        assert_eq!(NumberOrText::Number(2.1).to_string(), "2.1");
        assert_eq!(NumberOrText::Text("N/A".into()).to_string(), "N/A");
    }

    #[test]
    fn structure_info_accepts_text_resolution() {
        let info: StructureInfo = serde_json::from_str(
            r#"{"pdb_id":"1TUP","title":"Tumor suppressor","resolution":"N/A",
                "method":"SOLUTION NMR","organism":"Homo sapiens",
                "release_date":"1995-07-11"}"#,
        )
        .unwrap();
        assert_eq!(info.resolution, Some(NumberOrText::Text("N/A".into())));
        assert!(info.sequence.is_none());
    }

    #[test]
    fn analysis_parses_secondary_structure_fallback() {
        let analysis: StructureAnalysis = serde_json::from_str(
            r#"{"pdb_id":"1TUP","num_chains":3,"num_residues":587,"num_atoms":4562,
                "secondary_structure":{"helix":"N/A","beta_sheet":"N/A","coil":"N/A",
                                       "note":"DSSP unavailable"}}"#,
        )
        .unwrap();
        let ss = analysis.secondary_structure.unwrap();
        assert_eq!(ss.helix.unwrap().as_f64(), None);
        assert_eq!(analysis.num_atoms, Some(4562));
    }

    #[test]
    fn advanced_analysis_parses_sasa_error_entry() {
        let advanced: AdvancedAnalysis = serde_json::from_str(
            r#"{"pdb_id":"2AC0",
                "disulfide_bonds":{"count":1,"bonds":[{"cys1":"A:CYS22","cys2":"A:CYS96","distance":2.04}]},
                "salt_bridges":{"count":0,"bridges":[]},
                "hydrogen_bonds":{"backbone_hbonds":214,"total":230,"source":"PDBe"},
                "sasa_per_chain":{"error":"SASA computation failed"},
                "hydrophobicity_per_chain":{"A":{"hydrophobic_count":40,"hydrophilic_count":60,
                                                 "hydrophobic_ratio":40.0,"hydrophilic_ratio":60.0}}}"#,
        )
        .unwrap();
        let sasa = advanced.sasa_per_chain.unwrap();
        assert!(sasa.get("error").is_some_and(|v| v.as_f64().is_none()));
        assert_eq!(advanced.disulfide_bonds.unwrap().bonds.len(), 1);
    }

    #[test]
    fn mutation_impact_parses_full_payload() {
        let impact: MutationImpact = serde_json::from_str(
            r#"{"mutation":"A:K33E","pdb_id":"1TUP",
                "wild_type":{"aa":"K","name":"Lysine","charge":1,"volume":168.6,"hydrophobic":false},
                "mutant":{"aa":"E","name":"Glutamate","charge":-1,"volume":138.4,"hydrophobic":false},
                "changes":{"charge_change":-2,"volume_change":-30.2,
                           "hydrophobicity_change":false,"polarity_change":false},
                "impact_assessment":{"score":5,"level":"high",
                                     "description":"Likely disruptive","reasons":["charge flip"]},
                "structural_context":{"found_residue":"K","matches_wt":true,"position_valid":true}}"#,
        )
        .unwrap();
        let assessment = impact.impact_assessment.unwrap();
        assert_eq!(assessment.level.as_deref(), Some("high"));
        assert_eq!(impact.changes.unwrap().charge_change, Some(-2.0));
    }

    #[test]
    fn alignment_parses_missing_regions() {
        let alignment: AlignmentResult = serde_json::from_str(
            r#"{"pdb_id":"1TUP","uniprot_id":"P04637","uniprot_length":393,
                "chain_alignments":{"A":{"pdb_length":196,"identity_percent":49.9,
                                         "coverage_percent":49.9,
                                         "missing_regions":[{"start":1,"end":93,"length":93},
                                                            {"start":313,"end":393,"length":81}],
                                         "alignment_score":384.5}}}"#,
        )
        .unwrap();
        let chain = &alignment.chain_alignments["A"];
        assert_eq!(chain.missing_regions.len(), 2);
        assert_eq!(chain.missing_regions[0].end, 93);
    }
}
