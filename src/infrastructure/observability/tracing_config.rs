use crate::presentation::config::{ENVIRONMENT_VAR, LoggingSettings};

/// Configuration for tracing initialization.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub environment: String,
    pub level: String,
    pub json_format: bool,
}

impl TracingConfig {
    pub fn from_settings(settings: &LoggingSettings, environment: impl Into<String>) -> Self {
        Self {
            environment: environment.into(),
            level: settings.level.clone(),
            json_format: settings.enable_json,
        }
    }

    /// Filter used when `RUST_LOG` is unset.
    pub fn default_filter(&self) -> String {
        format!("{level},sentilyze={level},tower_http=info", level = self.level)
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            environment: std::env::var(ENVIRONMENT_VAR).unwrap_or_else(|_| "local".to_string()),
            level: "info".to_string(),
            json_format: std::env::var("LOG_FORMAT")
                .map(|v| v.to_lowercase() == "json")
                .unwrap_or(false),
        }
    }
}
