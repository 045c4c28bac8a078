//! Search resolution tasks.

use iced::Task;
use pse_api::{ApiClient, ApiError};
use tracing::info;

use crate::error::FetchError;
use crate::message::Message;
use crate::state::search::Query;

/// Resolve a query into its candidate structure ids.
///
/// A gene search with an empty result list and a PDB id the service rejects
/// both surface as [`FetchError::NotFound`], so the UI reports "nothing
/// found" rather than a raw service error.
pub fn resolve_query(api: ApiClient, generation: u64, query: Query) -> Task<Message> {
    let task_query = query.clone();
    Task::perform(
        async move {
            match &task_query {
                Query::ByGene { name, species } => {
                    info!(gene = %name, %species, "resolving gene search");
                    let payload = api.gene_structures(name, species).await?;
                    if payload.structures.is_empty() {
                        return Err(ApiError::NotFound(format!(
                            "no structures found for gene {name}"
                        ))
                        .into());
                    }
                    Ok(payload.structures)
                }
                Query::ByPdbId { id } => {
                    info!(pdb_id = %id, "resolving PDB id search");
                    match api.structure_info(id).await {
                        Ok(_) => Ok(vec![id.clone()]),
                        // An unknown id is a rejection by the service, but to
                        // the user it is simply "not found".
                        Err(ApiError::Service { .. }) => Err(FetchError::NotFound(format!(
                            "no structure found with id {id}"
                        ))),
                        Err(err) => Err(err.into()),
                    }
                }
            }
        },
        move |result: Result<Vec<String>, FetchError>| Message::CandidatesResolved {
            generation,
            query: query.clone(),
            result,
        },
    )
}

/// Fan out one summary-metadata fetch per candidate id.
pub fn fetch_candidate_infos(api: &ApiClient, generation: u64, ids: &[String]) -> Task<Message> {
    Task::batch(ids.iter().map(|id| {
        let api = api.clone();
        let pdb_id = id.clone();
        let task_id = id.clone();
        Task::perform(
            async move { api.structure_info(&task_id).await.map_err(FetchError::from) },
            move |result| Message::CandidateInfoFetched {
                generation,
                pdb_id: pdb_id.clone(),
                result,
            },
        )
    }))
}
