use config::Environment as EnvironmentSource;
use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub logging: LoggingSettings,
    pub upload: UploadSettings,
    pub extraction: ExtractionSettings,
    pub analysis: AnalysisSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadSettings {
    pub max_file_size_mb: usize,
}

impl UploadSettings {
    pub fn max_file_size_bytes(&self) -> usize {
        self.max_file_size_mb.saturating_mul(1024 * 1024)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExtractionSettings {
    pub max_image_pixels: u64,
    pub ocr_command: String,
    pub ocr_language: Option<String>,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisSettings {
    pub preview_chars: usize,
}

impl Settings {
    /// Defaults, then `appsettings.<environment>.toml` if present, then
    /// `APP__SECTION__KEY` environment variables.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        let file_name = environment.settings_file();

        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000_i64)?
            .set_default("logging.level", "info")?
            .set_default("logging.enable_json", false)?
            .set_default("upload.max_file_size_mb", 16_i64)?
            .set_default("extraction.max_image_pixels", 178_956_970_i64)?
            .set_default("extraction.ocr_command", "tesseract")?
            .set_default("extraction.timeout_secs", 120_i64)?
            .set_default("analysis.preview_chars", 500_i64)?
            .add_source(File::with_name(&file_name).required(false))
            .add_source(
                EnvironmentSource::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
