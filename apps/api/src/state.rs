use std::sync::Arc;

use crate::catalog::RoleCatalog;
use crate::config::Config;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// The catalog is read-only after startup, so unsynchronized concurrent
/// reads are safe. `generator` is `None` when no API key is configured;
/// every AI call then takes its deterministic fallback tier.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<RoleCatalog>,
    pub generator: Option<Arc<dyn TextGenerator>>,
    pub config: Config,
}

impl AppState {
    /// The generator as a trait-object borrow for the `ai` entry points.
    pub fn generator(&self) -> Option<&dyn TextGenerator> {
        self.generator.as_deref()
    }
}
