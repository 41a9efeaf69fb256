//! Grid configuration persistence
//!
//! Stores user preferences in `~/.config/csved/config.yaml`

use serde::{Deserialize, Serialize};

use crate::model::PAGE_SIZES;

/// Grid preferences that persist across sessions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    /// Rows per page (one of 10/20/30/40/50)
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_page_size() -> usize {
    PAGE_SIZES[0]
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

impl GridConfig {
    /// Load config from disk, or return defaults if not found
    ///
    /// An unrecognized persisted page size falls back to the default rather
    /// than propagating into the pager.
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        let config: Self = match std::fs::read_to_string(&path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        };

        if !PAGE_SIZES.contains(&config.page_size) {
            tracing::warn!(
                "Ignoring unrecognized page size {} from config",
                config.page_size
            );
            return Self::default();
        }
        config
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(&path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Update page size and save
    pub fn set_page_size(&mut self, page_size: usize) -> Result<(), String> {
        self.page_size = page_size;
        self.save()
    }
}
