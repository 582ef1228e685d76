//! # Dashboard Configuration
//!
//! Settings are kept in a single YAML file, `config.yaml`, inside the
//! platform configuration directory (`~/.config/sales-dashboard` on Linux).
//!
//! ```yaml
//! data_directory: /home/me/.local/share/sales-dashboard
//! export_directory: /home/me/Documents
//! currency_symbol: R
//! pdf_file_name: transactions.pdf
//! csv_file_name: transactions.csv
//! default_chart:
//!   period: monthly
//!   metric: sales
//!   kind: line
//! ```
//!
//! A missing file yields the defaults, which are then written out so the user
//! has something to edit. Unknown or missing keys fall back per field.

use anyhow::{anyhow, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use shared::ChartSelection;
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIRECTORY_NAME: &str = "sales-dashboard";
const CONFIG_FILE_NAME: &str = "config.yaml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Where `storage.json` lives
    pub data_directory: PathBuf,
    /// Where exported PDF/CSV files are written
    pub export_directory: PathBuf,
    /// Marker prefixed to every displayed or exported amount
    pub currency_symbol: String,
    pub pdf_file_name: String,
    pub csv_file_name: String,
    /// Chart drawn at startup
    pub default_chart: ChartSelection,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        let data_directory = dirs::data_dir()
            .map(|dir| dir.join(APP_DIRECTORY_NAME))
            .unwrap_or_else(|| PathBuf::from(APP_DIRECTORY_NAME));
        let export_directory = dirs::document_dir().unwrap_or_else(|| data_directory.clone());

        Self {
            data_directory,
            export_directory,
            currency_symbol: "R".to_string(),
            pdf_file_name: "transactions.pdf".to_string(),
            csv_file_name: "transactions.csv".to_string(),
            default_chart: ChartSelection::default(),
        }
    }
}

impl DashboardConfig {
    /// Default location of the configuration file
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow!("Could not determine configuration directory"))?;
        Ok(config_dir.join(APP_DIRECTORY_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load the config from the default location, creating it if missing
    pub fn load_or_create_default() -> Result<Self> {
        Self::load_or_create(Self::default_path()?)
    }

    /// Load the config at `path`, writing the defaults there first if the
    /// file does not exist yet
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if path.exists() {
            let yaml_content = fs::read_to_string(path)?;
            let config: DashboardConfig = serde_yaml::from_str(&yaml_content)
                .map_err(|e| anyhow!("Invalid configuration in {}: {}", path.display(), e))?;
            debug!("Loaded dashboard config from {:?}", path);
            Ok(config)
        } else {
            let config = DashboardConfig::default();
            config.save(path)?;
            info!("Created default dashboard config at {:?}", path);
            Ok(config)
        }
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let yaml_content = serde_yaml::to_string(self)?;
        fs::write(path, yaml_content)?;
        Ok(())
    }

    pub fn pdf_export_path(&self) -> PathBuf {
        self.export_directory.join(&self.pdf_file_name)
    }

    pub fn csv_export_path(&self) -> PathBuf {
        self.export_directory.join(&self.csv_file_name)
    }

    /// Config rooted entirely inside `base`, used by tests
    pub fn rooted_at<P: AsRef<Path>>(base: P) -> Self {
        let base = base.as_ref();
        Self {
            data_directory: base.join("data"),
            export_directory: base.join("exports"),
            ..Self::default()
        }
    }
}
