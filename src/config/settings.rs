use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::collections::HashMap;
use std::env;

use crate::catalog::LegacyPolicy;
use crate::render::RenderOptions;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub renderer: RendererConfig,
    #[serde(default)]
    pub preview: PreviewConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub cors_origins: Vec<String>,
    /// Maximum accepted request body in bytes
    #[serde(default = "default_body_limit")]
    pub body_limit: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RendererConfig {
    /// Content column width in pixels
    #[serde(default = "default_content_width")]
    pub content_width: u32,
    #[serde(default = "default_font_family")]
    pub font_family: String,
    /// Page background, `#rrggbb`
    #[serde(default = "default_background_color")]
    pub background_color: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PreviewConfig {
    /// Per-deployment sample values, layered over the built-in ones
    #[serde(default)]
    pub sample_values: Vec<SampleValueConfig>,
}

/// One sample value override. Names are kept as values rather than keys
/// so their casing survives config key normalization.
#[derive(Debug, Clone, Deserialize)]
pub struct SampleValueConfig {
    pub name: String,
    pub value: String,
}

impl PreviewConfig {
    /// Overrides as a name/value map
    pub fn overrides(&self) -> HashMap<String, String> {
        self.sample_values
            .iter()
            .map(|s| (s.name.clone(), s.value.clone()))
            .collect()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    /// How stored records without block data are opened for editing
    #[serde(default)]
    pub legacy_policy: LegacyPolicy,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8082
}

fn default_body_limit() -> usize {
    1024 * 1024 // 1 MiB
}

fn default_content_width() -> u32 {
    RenderOptions::default().content_width
}

fn default_font_family() -> String {
    RenderOptions::default().font_family
}

fn default_background_color() -> String {
    RenderOptions::default().background_color
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        // Load .env file if exists
        let _ = dotenvy::dotenv();

        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let builder = Config::builder()
            // Start with default values
            .set_default("server.host", default_host())?
            .set_default("server.port", i64::from(default_port()))?
            .set_default("renderer.content_width", i64::from(default_content_width()))?
            .set_default("catalog.legacy_policy", "reset_to_default")?
            // Load config file if exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Load from environment variables
            // SERVER__HOST, SERVER__PORT, RENDERER__CONTENT_WIDTH, CATALOG__LEGACY_POLICY, etc.
            .add_source(
                Environment::default()
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(","),
            );

        builder.build()?.try_deserialize()
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: vec![],
            body_limit: default_body_limit(),
        }
    }
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            content_width: default_content_width(),
            font_family: default_font_family(),
            background_color: default_background_color(),
        }
    }
}

impl From<&RendererConfig> for RenderOptions {
    fn from(config: &RendererConfig) -> Self {
        RenderOptions {
            content_width: config.content_width,
            font_family: config.font_family.clone(),
            background_color: config.background_color.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let server = ServerConfig::default();
        assert_eq!(server.host, "0.0.0.0");
        assert_eq!(server.port, 8082);

        let settings = Settings::default();
        assert_eq!(settings.catalog.legacy_policy, LegacyPolicy::ResetToDefault);
        assert!(settings.preview.sample_values.is_empty());
    }

    #[test]
    fn test_preview_overrides_keep_name_case() {
        let preview = PreviewConfig {
            sample_values: vec![SampleValueConfig {
                name: "userName".to_string(),
                value: "Jane".to_string(),
            }],
        };

        let overrides = preview.overrides();
        assert_eq!(overrides.get("userName").map(String::as_str), Some("Jane"));
    }

    #[test]
    fn test_renderer_config_into_options() {
        let options = RenderOptions::from(&RendererConfig::default());
        assert_eq!(options, RenderOptions::default());
    }

    #[test]
    fn test_deserialize_sections() {
        let settings: Settings = Config::builder()
            .set_override("renderer.content_width", 640)
            .unwrap()
            .set_override("catalog.legacy_policy", "html_only")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.renderer.content_width, 640);
        assert_eq!(settings.catalog.legacy_policy, LegacyPolicy::HtmlOnly);
        assert!(settings.preview.sample_values.is_empty());
        assert_eq!(settings.server.port, 8082);
    }
}
