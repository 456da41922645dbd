pub mod cache;
pub mod logging;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use arc_swap::ArcSwap;
use serde::{Deserialize, Serialize};

/// Tunables for the scoring engine. Loaded centrally and injected into the
/// engine; the engine itself never reads files or environment variables.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct StaffingOptions {
    /// How many candidates the suggestion view keeps after ranking.
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,
    /// Forward horizon, in days, for the year view's project utilization.
    #[serde(default = "default_utilization_horizon_days")]
    pub utilization_horizon_days: i64,
}

impl Default for StaffingOptions {
    fn default() -> Self {
        StaffingOptions {
            suggestion_limit: default_suggestion_limit(),
            utilization_horizon_days: default_utilization_horizon_days(),
        }
    }
}

fn default_suggestion_limit() -> usize {
    7
}

fn default_utilization_horizon_days() -> i64 {
    90
}

/// All configuration is loaded centrally here and handed to readers behind
/// an `ArcSwap`, so an embedder can swap in a reloaded snapshot without
/// tearing anything down. No stray configuration is read anywhere else.
#[derive(Default, Debug)]
pub struct SystemConfigurations {
    pub staffing: StaffingOptions,
}

impl SystemConfigurations {
    pub fn read_all_configs() -> Result<Arc<ArcSwap<SystemConfigurations>>> {
        let config_dir =
            dotenvy::var("ROSTRA_CONFIG_DIR").unwrap_or_else(|_| "./configuration".to_string());
        let staffing_path = PathBuf::from(config_dir).join("staffing_options.toml");

        // A missing file means defaults; a present but malformed file is a
        // deployment error and fails loudly.
        let staffing = match std::fs::read_to_string(&staffing_path) {
            Ok(contents) => toml::from_str(&contents).with_context(|| {
                format!(
                    "malformed staffing options at {}",
                    staffing_path.display()
                )
            })?,
            Err(_) => StaffingOptions::default(),
        };

        Ok(Arc::new(ArcSwap::new(Arc::new(SystemConfigurations {
            staffing,
        }))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_staffing_options_defaults() {
        let options = StaffingOptions::default();

        assert_eq!(options.suggestion_limit, 7);
        assert_eq!(options.utilization_horizon_days, 90);
    }

    #[test]
    fn test_staffing_options_from_toml_fills_missing_fields() {
        let options: StaffingOptions = toml::from_str("suggestion_limit = 5\n").unwrap();

        assert_eq!(options.suggestion_limit, 5);
        assert_eq!(options.utilization_horizon_days, 90);
    }

    #[test]
    fn test_staffing_options_from_empty_toml() {
        let options: StaffingOptions = toml::from_str("").unwrap();

        assert_eq!(options, StaffingOptions::default());
    }
}
