use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

/// File name of the per-project config, looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = ".provider-catalog.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data: DataConfig,
    pub search: SearchConfig,
    pub display: DisplayConfig,
}

impl Config {
    pub fn load(explicit_path: Option<&Path>, project_root: &Path) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("PC_CONFIG").ok().map(PathBuf::from));

        if let Some(path) = explicit {
            let patch = Self::load_patch(&path)?.ok_or_else(|| {
                CatalogError::MissingConfig(format!("config file {} not found", path.display()))
            })?;
            config.merge_patch(patch);
        } else {
            if let Some(global) = Self::load_global()? {
                config.merge_patch(global);
            }
            if let Some(project) = Self::load_patch(&project_root.join(PROJECT_CONFIG_FILE))? {
                config.merge_patch(project);
            }
        }

        config.apply_env_overrides()?;
        config.search.validate()?;

        Ok(config)
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        let Some(dir) = dirs::config_dir() else {
            return Ok(None);
        };
        Self::load_patch(&dir.join("provider-catalog/config.toml"))
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| CatalogError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw)
            .map_err(|err| CatalogError::Config(format!("parse config {}: {err}", path.display())))?;
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.data {
            self.data.merge(patch);
        }
        if let Some(patch) = patch.search {
            self.search.merge(patch);
        }
        if let Some(patch) = patch.display {
            self.display.merge(patch);
        }
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Some(value) = env_string("PC_DATA_PATH") {
            self.data.path = PathBuf::from(value);
        }

        if let Some(value) = env_f32("PC_SEARCH_NAME_BOOST")? {
            self.search.name_boost = value;
        }
        if let Some(value) = env_usize("PC_SEARCH_MIN_TERM_LENGTH")? {
            self.search.min_term_length = value;
        }
        if let Some(value) = env_usize("PC_SEARCH_MAX_TERM_LENGTH")? {
            self.search.max_term_length = value;
        }

        if let Some(value) = env_string("PC_DISPLAY_SINGULAR") {
            self.display.singular = value;
        }
        if let Some(value) = env_string("PC_DISPLAY_PLURAL") {
            self.display.plural = value;
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Dataset file: a JSON array of provider objects.
    pub path: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data/providers.json"),
        }
    }
}

impl DataConfig {
    fn merge(&mut self, patch: DataPatch) {
        if let Some(value) = patch.path {
            self.path = value;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Relevance boost applied to the provider name field.
    pub name_boost: f32,
    /// Shorter (trimmed, non-empty) terms are ignored.
    pub min_term_length: usize,
    /// Longer terms are truncated to this many characters.
    pub max_term_length: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            name_boost: 10.0,
            min_term_length: 3,
            max_term_length: 256,
        }
    }
}

impl SearchConfig {
    /// Term limits must leave room for a searchable term.
    fn validate(&self) -> Result<()> {
        if self.max_term_length == 0 || self.max_term_length < self.min_term_length {
            return Err(CatalogError::Config(format!(
                "search.max_term_length ({}) must be at least 1 and at least search.min_term_length ({})",
                self.max_term_length, self.min_term_length
            )));
        }
        Ok(())
    }

    fn merge(&mut self, patch: SearchPatch) {
        if let Some(value) = patch.name_boost {
            self.name_boost = value;
        }
        if let Some(value) = patch.min_term_length {
            self.min_term_length = value;
        }
        if let Some(value) = patch.max_term_length {
            self.max_term_length = value;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub singular: String,
    pub plural: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            singular: "Provider".to_string(),
            plural: "Providers".to_string(),
        }
    }
}

impl DisplayConfig {
    fn merge(&mut self, patch: DisplayPatch) {
        if let Some(value) = patch.singular {
            self.singular = value;
        }
        if let Some(value) = patch.plural {
            self.plural = value;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigPatch {
    pub data: Option<DataPatch>,
    pub search: Option<SearchPatch>,
    pub display: Option<DisplayPatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct DataPatch {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct SearchPatch {
    pub name_boost: Option<f32>,
    pub min_term_length: Option<usize>,
    pub max_term_length: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct DisplayPatch {
    pub singular: Option<String>,
    pub plural: Option<String>,
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn env_usize(key: &str) -> Result<Option<usize>> {
    match std::env::var(key) {
        Ok(value) => value.parse::<usize>().map(Some).map_err(|err| {
            CatalogError::Config(format!("invalid {key} value {value}: {err}"))
        }),
        Err(_) => Ok(None),
    }
}

fn env_f32(key: &str) -> Result<Option<f32>> {
    match std::env::var(key) {
        Ok(value) => value.parse::<f32>().map(Some).map_err(|err| {
            CatalogError::Config(format!("invalid {key} value {value}: {err}"))
        }),
        Err(_) => Ok(None),
    }
}
