//! # Widget Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. TOML Config File (highest priority)                                │
//! │     ~/.config/basket-widget/basket.toml (Linux)                        │
//! │     ~/Library/Application Support/com.basket.widget/basket.toml (macOS)│
//! │                                                                         │
//! │  2. Default Values (lowest priority)                                   │
//! │     In-memory storage under "basket", built-in menu, 5 s banners       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # basket.toml
//! [storage]
//! backend = "sqlite"      # memory | sqlite
//! key = "basket"
//! path = "/var/lib/basket/storage.db"
//!
//! [ui]
//! error_banner_secs = 5
//! reserved_notice = "Ghislain has taken the last ice cream bowl"
//!
//! # Optional: replaces the built-in menu entirely
//! [catalog]
//! reserved_addons = ["vanilla-ice-cream"]
//!
//! [[catalog.products]]
//! id = "apple"
//! name = "Apple"
//! icon = "🍏"
//! ```

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use basket_core::{Catalog, DEFAULT_STORAGE_KEY};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{ConfigError, ConfigResult};
use crate::notify::TracingNotifier;
use crate::storage::{BasketStorage, MemoryStorage, SqliteStorage};
use crate::store::BasketStore;

/// Popup text for the reserved add-on.
pub const DEFAULT_RESERVED_NOTICE: &str = "Ghislain has taken the last ice cream bowl";

/// How long an error banner stays up.
pub const DEFAULT_ERROR_BANNER_SECS: u64 = 5;

const SQLITE_FILE_NAME: &str = "storage.db";

// =============================================================================
// Storage Settings
// =============================================================================

/// Where the basket slot lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageBackend {
    /// Lost when the process exits.
    #[default]
    Memory,

    /// A SQLite file on disk.
    Sqlite,
}

/// Storage slot settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageSettings {
    #[serde(default)]
    pub backend: StorageBackend,

    /// Key the basket is stored under.
    #[serde(default = "default_key")]
    pub key: String,

    /// SQLite file. Defaults to the platform data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

fn default_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

impl Default for StorageSettings {
    fn default() -> Self {
        StorageSettings {
            backend: StorageBackend::default(),
            key: default_key(),
            path: None,
        }
    }
}

impl StorageSettings {
    /// Opens the configured slot.
    pub fn open(&self) -> ConfigResult<Box<dyn BasketStorage>> {
        match self.backend {
            StorageBackend::Memory => Ok(Box::new(MemoryStorage::new())),
            StorageBackend::Sqlite => {
                let path = self
                    .path
                    .clone()
                    .or_else(default_sqlite_path)
                    .ok_or(ConfigError::NoPath)?;
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                Ok(Box::new(SqliteStorage::open(&path, self.key.as_str())?))
            }
        }
    }
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("com", "basket", "widget")
}

fn default_sqlite_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().join(SQLITE_FILE_NAME))
}

// =============================================================================
// UI Settings
// =============================================================================

/// Settings the page layer reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiSettings {
    /// Seconds an error banner stays up before dismissing itself.
    #[serde(default = "default_error_banner_secs")]
    pub error_banner_secs: u64,

    /// Popup text when the reserved add-on is requested.
    #[serde(default = "default_reserved_notice")]
    pub reserved_notice: String,
}

fn default_error_banner_secs() -> u64 {
    DEFAULT_ERROR_BANNER_SECS
}

fn default_reserved_notice() -> String {
    DEFAULT_RESERVED_NOTICE.to_string()
}

impl Default for UiSettings {
    fn default() -> Self {
        UiSettings {
            error_banner_secs: default_error_banner_secs(),
            reserved_notice: default_reserved_notice(),
        }
    }
}

impl UiSettings {
    pub fn error_banner_duration(&self) -> Duration {
        Duration::from_secs(self.error_banner_secs)
    }
}

// =============================================================================
// Main Widget Configuration
// =============================================================================

/// Complete widget configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WidgetConfig {
    #[serde(default)]
    pub storage: StorageSettings,

    #[serde(default)]
    pub ui: UiSettings,

    /// Replaces the built-in menu when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<Catalog>,
}

impl WidgetConfig {
    /// Loads configuration from file, falling back to defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (basket.toml)
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading basket config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = Self::from_toml(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load basket config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Parses a TOML document.
    pub fn from_toml(contents: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> ConfigResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or(ConfigError::NoPath)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)?;

        info!(?path, "Basket config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.storage.key.trim().is_empty() {
            return Err(ConfigError::Invalid("storage.key must not be empty".into()));
        }

        if self.ui.error_banner_secs == 0 {
            return Err(ConfigError::Invalid(
                "ui.error_banner_secs must be greater than 0".into(),
            ));
        }

        if let Some(catalog) = &self.catalog {
            catalog.validate()?;
        }

        Ok(())
    }

    /// The configured catalog, or the built-in menu.
    pub fn catalog(&self) -> Arc<Catalog> {
        Arc::new(self.catalog.clone().unwrap_or_else(Catalog::default_menu))
    }

    /// A notifier that logs with the configured popup text.
    pub fn notifier(&self) -> TracingNotifier {
        TracingNotifier::new(self.ui.reserved_notice.clone())
    }

    /// Opens the configured storage and builds a store over it.
    pub fn build_store(&self) -> ConfigResult<BasketStore<Box<dyn BasketStorage>, TracingNotifier>> {
        let storage = self.storage.open()?;
        Ok(BasketStore::new(self.catalog(), storage, self.notifier()))
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join("basket.toml"))
    }
}
