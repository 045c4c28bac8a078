//! Root application state.

use pse_api::{ApiClient, CoordinateClient};

use crate::component::toast::ToastState;
use crate::state::charts::ChartRegistry;
use crate::state::report::ReportManager;
use crate::state::search::SearchState;
use crate::state::session::StructureSession;
use crate::state::settings::Settings;
use crate::state::viewer::ViewerController;

/// Everything the application knows, owned by the update loop.
pub struct AppState {
    /// Persisted user preferences.
    pub settings: Settings,
    /// Analysis service client; cloned into every fetch task.
    pub api: ApiClient,
    /// Coordinate archive client.
    pub coords: CoordinateClient,
    /// Search bar and candidate list.
    pub search: SearchState,
    /// Active structure selection and its panels.
    pub session: StructureSession,
    /// 3D viewer instance owner.
    pub viewer: ViewerController,
    /// Per-chain composition charts.
    pub charts: ChartRegistry,
    /// Generated report and export state.
    pub report: ReportManager,
    /// Transient notification, if one is showing.
    pub toast: Option<ToastState>,
    /// Result of the startup liveness probe; `None` until it settles.
    pub service_online: Option<bool>,
}

impl AppState {
    /// Build initial state from loaded settings.
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        let api = ApiClient::new(settings.api_base_url.clone());
        let coords = CoordinateClient::new(settings.coordinate_base_url.clone());
        let search = SearchState::with_species(settings.default_species.clone());
        Self {
            settings,
            api,
            coords,
            search,
            session: StructureSession::default(),
            viewer: ViewerController::default(),
            charts: ChartRegistry::default(),
            report: ReportManager::default(),
            toast: None,
            service_online: None,
        }
    }
}
