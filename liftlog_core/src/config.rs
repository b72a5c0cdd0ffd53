//! Configuration file support for liftlog.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/liftlog/config.toml`.

use crate::vocabulary::Vocabulary;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub export: ExportConfig,

    #[serde(default)]
    pub metrics: MetricsConfig,

    #[serde(default)]
    pub projection: ProjectionConfig,

    #[serde(default)]
    pub vocabulary: VocabularyConfig,
}

/// Where training logs live
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_logs_dir")]
    pub logs_dir: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            logs_dir: default_logs_dir(),
        }
    }
}

/// Export output configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
        }
    }
}

/// Metric emission configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MetricsConfig {
    #[serde(default = "default_username")]
    pub username: String,

    /// JSONL file receiving metric records; stdout when unset
    #[serde(default)]
    pub output: Option<PathBuf>,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            username: default_username(),
            output: None,
        }
    }
}

/// Exercises covered by the statistics projector
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProjectionConfig {
    #[serde(default = "default_projected_exercises")]
    pub exercises: Vec<String>,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            exercises: default_projected_exercises(),
        }
    }
}

/// Additional exercise names accepted on top of the built-in vocabulary
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct VocabularyConfig {
    #[serde(default)]
    pub extra: Vec<String>,
}

// Default value functions
fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}

fn default_logs_dir() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| home_dir().join(".local/share"));
    base.join("liftlog").join("logs")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("target")
}

fn default_username() -> String {
    "lifter".into()
}

fn default_projected_exercises() -> Vec<String> {
    vec![
        "low bar squats".into(),
        "bench press".into(),
        "sumo deadlift".into(),
        "conventional deadlift".into(),
        "overhead press".into(),
    ]
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::debug!("No config at {:?}, using defaults", config_path);
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    ///
    /// Sections missing from the file take their defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| Error::Load {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&contents)?;
        tracing::debug!(
            "Loaded config from {:?} ({} extra exercises)",
            path,
            config.vocabulary.extra.len()
        );
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| home_dir().join(".config"));
        base.join("liftlog").join("config.toml")
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    /// The built-in vocabulary extended with `[vocabulary] extra`
    pub fn vocabulary(&self) -> Result<Vocabulary> {
        let vocabulary = Vocabulary::builtin().with_extra(self.vocabulary.extra.iter().cloned());
        let errors = vocabulary.validate();
        if !errors.is_empty() {
            return Err(Error::Config(errors.join("; ")));
        }
        Ok(vocabulary)
    }
}
