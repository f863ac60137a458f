use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::AnalyzerError;

const ENV_PREFIX: &str = "REGION_ANALYZER";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    pub debug_overlay: bool,
    pub debug_dir: PathBuf,
    pub log_level: String,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            debug_overlay: cfg!(feature = "debug-overlay"),
            debug_dir: PathBuf::from("debug/"),
            log_level: "info".to_string(),
        }
    }
}

impl AnalyzerConfig {
    /// Layers an optional config file under `REGION_ANALYZER_*` environment
    /// variables. Missing keys fall back to [`AnalyzerConfig::default`].
    pub fn load(path: Option<&Path>) -> Result<Self, AnalyzerError> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(false));
        }
        let settings = builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    pub fn tracing_level(&self) -> tracing::Level {
        self.log_level
            .parse()
            .unwrap_or(tracing::Level::INFO)
    }
}
