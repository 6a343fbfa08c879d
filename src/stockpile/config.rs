use crate::error::{StockError, Result};
use crate::model::NO_GROUP_LABEL;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "stockpile.json";
const DEFAULT_ITEMS_FILE: &str = "items.csv";
const DEFAULT_GROUPS_FILE: &str = "groups.csv";

/// Configuration for stockpile, stored in `stockpile.json` next to the data files
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StockConfig {
    /// Items table, relative to the data directory unless absolute
    #[serde(default = "default_items_file")]
    pub items_file: String,

    /// Groups table, relative to the data directory unless absolute
    #[serde(default = "default_groups_file")]
    pub groups_file: String,

    /// Label shown for items without a (resolvable) group
    #[serde(default = "default_missing_group_label")]
    pub missing_group_label: String,
}

fn default_items_file() -> String {
    DEFAULT_ITEMS_FILE.to_string()
}

fn default_groups_file() -> String {
    DEFAULT_GROUPS_FILE.to_string()
}

fn default_missing_group_label() -> String {
    NO_GROUP_LABEL.to_string()
}

impl Default for StockConfig {
    fn default() -> Self {
        Self {
            items_file: default_items_file(),
            groups_file: default_groups_file(),
            missing_group_label: default_missing_group_label(),
        }
    }
}

impl StockConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(StockError::Io)?;
        let config: StockConfig = serde_json::from_str(&content).map_err(StockError::Config)?;
        Ok(config)
    }

    pub fn items_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.items_file)
    }

    pub fn groups_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.groups_file)
    }
}
