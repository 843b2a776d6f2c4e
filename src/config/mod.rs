mod settings;

pub use settings::{
    CatalogConfig, PreviewConfig, RendererConfig, SampleValueConfig, ServerConfig, Settings,
};
