//! Coordinate download task for the 3D viewer.

use iced::Task;
use pse_api::CoordinateClient;
use tracing::info;

use crate::error::FetchError;
use crate::message::Message;

/// Download the raw coordinate file for the viewer.
pub fn fetch_coordinates(coords: &CoordinateClient, generation: u64, pdb_id: &str) -> Task<Message> {
    info!(pdb_id, "loading viewer coordinates");
    let coords = coords.clone();
    let pdb_id = pdb_id.to_string();
    let id = pdb_id.clone();
    Task::perform(
        async move { coords.fetch_structure(&id).await.map_err(FetchError::from) },
        move |result| Message::CoordinatesFetched {
            generation,
            pdb_id: pdb_id.clone(),
            result,
        },
    )
}
