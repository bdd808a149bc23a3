mod environment;
mod settings;

pub use environment::{ENVIRONMENT_VAR, Environment};
pub use settings::{
    AnalysisSettings, ExtractionSettings, LoggingSettings, ServerSettings, Settings,
    UploadSettings,
};
