//! Report generation and export tasks.

use std::path::PathBuf;

use iced::Task;
use pse_api::ApiClient;
use tracing::info;

use crate::error::FetchError;
use crate::message::Message;
use crate::state::report::export_file_name;

/// What the report covers: the active gene, or an explicit structure list.
#[derive(Debug, Clone)]
pub enum ReportTarget {
    Gene(String),
    Structures(Vec<String>),
}

/// Ask the service to generate a markdown report.
pub fn fetch_report(api: &ApiClient, generation: u64, target: ReportTarget) -> Task<Message> {
    let api = api.clone();
    Task::perform(
        async move {
            let response = match &target {
                ReportTarget::Gene(gene) => {
                    info!(%gene, "generating gene report");
                    api.report_for_gene(gene).await
                }
                ReportTarget::Structures(ids) => {
                    info!(count = ids.len(), "generating structure report");
                    api.report_for_structures(ids).await
                }
            };
            response.map(|r| r.report).map_err(FetchError::from)
        },
        move |result| Message::ReportFetched { generation, result },
    )
}

/// Open the native save dialog, suggesting a dated file name.
pub fn pick_export_path() -> Task<Message> {
    Task::perform(
        async {
            rfd::AsyncFileDialog::new()
                .set_title("Export analysis report")
                .set_file_name(export_file_name())
                .add_filter("Markdown", &["md"])
                .save_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::ExportPathSelected,
    )
}

/// Write the report markdown to the chosen path.
pub fn write_report(path: PathBuf, text: String) -> Task<Message> {
    Task::perform(
        async move {
            tokio::task::spawn_blocking(move || {
                std::fs::write(&path, text)
                    .map(|()| path)
                    .map_err(|e| e.to_string())
            })
            .await
            .map_err(|e| e.to_string())?
        },
        Message::ReportExported,
    )
}
