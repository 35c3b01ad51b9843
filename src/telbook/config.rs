use crate::error::{Result, TelbookError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_FILE_NAME: &str = "phonebook.jsonl";
const DEFAULT_PAGE_SIZE: usize = 10;

/// Configuration for telbook, stored in the data directory as config.json.
/// Both settings are resolved once at startup; environment overrides
/// (`TELBOOK_FILE`, `TELBOOK_PAGE_SIZE`) are applied by the CLI on top.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TelbookConfig {
    /// Location of the phonebook file; defaults to the data directory.
    #[serde(default)]
    pub phonebook_path: Option<PathBuf>,

    /// Entries shown per page by show_entries.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for TelbookConfig {
    fn default() -> Self {
        Self {
            phonebook_path: None,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl TelbookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(TelbookError::Io)?;
        let config: TelbookConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(TelbookError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content).map_err(TelbookError::Io)?;
        Ok(())
    }

    /// The phonebook path, falling back to the default file in `data_dir`.
    pub fn resolved_path(&self, data_dir: &Path) -> PathBuf {
        self.phonebook_path
            .clone()
            .unwrap_or_else(|| data_dir.join(DEFAULT_FILE_NAME))
    }
}
