//! User settings for the transfer pricing ledger
//!
//! Manages the storage key, export naming, header language and the
//! suggestion catalog shown when entering charges.

use serde::{Deserialize, Serialize};

use super::paths::PricingPaths;
use crate::error::PricingError;
use crate::export::HeaderLanguage;
use crate::storage::DEFAULT_STORAGE_KEY;

/// Suggested values for the charge form.
///
/// Values outside these lists are still accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub providers: Vec<String>,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub receivers: Vec<String>,
}

impl Default for Catalog {
    fn default() -> Self {
        fn owned(values: &[&str]) -> Vec<String> {
            values.iter().map(|v| v.to_string()).collect()
        }

        Self {
            providers: owned(&["IT แผนก", "HR แผนก", "การเงิน แผนก", "การตลาด แผนก"]),
            services: owned(&[
                "บริการ IT Support",
                "บริการจัดการทรัพยากรบุคคล",
                "บริการทางการเงิน",
                "บริการการตลาด",
                "บริการปรึกษา",
            ]),
            receivers: owned(&[
                "สำนักงานใหญ่",
                "สาขา A",
                "สาขา B",
                "สาขา C",
                "โรงงาน 1",
                "โรงงาน 2",
            ]),
        }
    }
}

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Key the record snapshot is stored under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// File name prefix for CSV exports
    #[serde(default = "default_export_prefix")]
    pub export_prefix: String,

    /// Language of the exported header row
    #[serde(default)]
    pub header_language: HeaderLanguage,

    /// Suggestions for the charge form
    #[serde(default)]
    pub catalog: Catalog,
}

fn default_schema_version() -> u32 {
    1
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_export_prefix() -> String {
    "transfer_pricing".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            storage_key: default_storage_key(),
            export_prefix: default_export_prefix(),
            header_language: HeaderLanguage::default(),
            catalog: Catalog::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or defaults if the file doesn't exist
    pub fn load_or_create(paths: &PricingPaths) -> Result<Self, PricingError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                PricingError::Io(format!("Failed to read settings file: {}", e))
            })?;

            serde_json::from_str(&contents).map_err(|e| {
                PricingError::Config(format!("Failed to parse settings file: {}", e))
            })
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &PricingPaths) -> Result<(), PricingError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            PricingError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| PricingError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
