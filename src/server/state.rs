use std::sync::Arc;

use crate::catalog::{DefaultCatalog, LegacyPolicy};
use crate::config::Settings;
use crate::render::{RenderOptions, Renderer};
use crate::variables::{sample_values, SampleValues};

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub renderer: Arc<Renderer>,
    pub samples: Arc<SampleValues>,
    pub catalog: &'static DefaultCatalog,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        let renderer = Arc::new(Renderer::new(RenderOptions::from(&settings.renderer)));
        let samples = Arc::new(sample_values().with_overrides(&settings.preview.overrides()));

        Self {
            settings: Arc::new(settings),
            renderer,
            samples,
            catalog: DefaultCatalog::global(),
        }
    }

    pub fn legacy_policy(&self) -> LegacyPolicy {
        self.settings.catalog.legacy_policy
    }
}
