//! Structure panel, mutation, alignment and health tasks.

use iced::Task;
use pse_api::ApiClient;
use tracing::info;

use crate::error::FetchError;
use crate::message::Message;

/// Fan out the four independent panel fetches for a freshly selected
/// structure. Each settles into its own message; none waits for a sibling.
pub fn fetch_structure_panels(api: &ApiClient, generation: u64, pdb_id: &str) -> Task<Message> {
    info!(pdb_id, "loading structure panels");
    Task::batch([
        fetch_info(api.clone(), generation, pdb_id.to_string()),
        fetch_analysis(api.clone(), generation, pdb_id.to_string()),
        fetch_advanced(api.clone(), generation, pdb_id.to_string()),
        fetch_composition(api.clone(), generation, pdb_id.to_string()),
    ])
}

fn fetch_info(api: ApiClient, generation: u64, pdb_id: String) -> Task<Message> {
    let id = pdb_id.clone();
    Task::perform(
        async move { api.structure_info(&id).await.map_err(FetchError::from) },
        move |result| Message::InfoFetched {
            generation,
            pdb_id: pdb_id.clone(),
            result,
        },
    )
}

fn fetch_analysis(api: ApiClient, generation: u64, pdb_id: String) -> Task<Message> {
    Task::perform(
        async move { api.analyze(&pdb_id).await.map_err(FetchError::from) },
        move |result| Message::AnalysisFetched { generation, result },
    )
}

fn fetch_advanced(api: ApiClient, generation: u64, pdb_id: String) -> Task<Message> {
    Task::perform(
        async move { api.analyze_advanced(&pdb_id).await.map_err(FetchError::from) },
        move |result| Message::AdvancedFetched { generation, result },
    )
}

fn fetch_composition(api: ApiClient, generation: u64, pdb_id: String) -> Task<Message> {
    let id = pdb_id.clone();
    Task::perform(
        async move {
            api.sequence_composition(&id)
                .await
                .map_err(FetchError::from)
        },
        move |result| Message::CompositionFetched {
            generation,
            pdb_id: pdb_id.clone(),
            result,
        },
    )
}

/// Fetch the impact assessment for one point mutation.
pub fn fetch_mutation(
    api: &ApiClient,
    generation: u64,
    pdb_id: &str,
    mutation: &str,
) -> Task<Message> {
    let api = api.clone();
    let pdb_id = pdb_id.to_string();
    let mutation = mutation.to_string();
    Task::perform(
        async move { api.mutation(&pdb_id, &mutation).await.map_err(FetchError::from) },
        move |result| Message::MutationFetched { generation, result },
    )
}

/// Fetch the UniProt alignment; `uniprot_id` is `None` when the service
/// should derive one.
pub fn fetch_alignment(
    api: &ApiClient,
    generation: u64,
    pdb_id: &str,
    uniprot_id: Option<&str>,
) -> Task<Message> {
    let api = api.clone();
    let pdb_id = pdb_id.to_string();
    let uniprot_id = uniprot_id.map(ToString::to_string);
    Task::perform(
        async move {
            api.align_uniprot(&pdb_id, uniprot_id.as_deref())
                .await
                .map_err(FetchError::from)
        },
        move |result| Message::AlignmentFetched { generation, result },
    )
}

/// Startup liveness probe.
pub fn check_health(api: &ApiClient) -> Task<Message> {
    let api = api.clone();
    Task::perform(
        async move { api.health().await.map(|_| ()).map_err(FetchError::from) },
        Message::HealthChecked,
    )
}
