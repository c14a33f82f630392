use std::sync::Arc;

use tokio::sync::Mutex;

use crate::layout::{PageGeometry, SizingConfig};
use crate::prefs::store::PreferenceStore;
use crate::render::export::Exporter;
use crate::workspace::Workspace;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The single editing session. Handlers lock, mutate or snapshot, and release.
    pub workspace: Arc<Mutex<Workspace>>,
    pub sizing: Arc<SizingConfig>,
    /// Fixed export page: US letter, portrait, 0.5" margins.
    pub page_geometry: PageGeometry,
    /// Pluggable print/PDF hand-off. Default: FileExporter.
    pub exporter: Arc<dyn Exporter>,
    /// Theme preference persistence. Default: JsonFileStore.
    pub prefs: Arc<dyn PreferenceStore>,
}
