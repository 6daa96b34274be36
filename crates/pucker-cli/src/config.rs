use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::Path;

/// Sampling-campaign defaults loadable from a TOML file; command-line flags
/// override any value set here.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SamplingConfig {
    #[serde(default)]
    pub fivering: AxisConfig,
    #[serde(default)]
    pub peptide: AxisConfig,
    #[serde(default)]
    pub sixring: SphereConfig,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AxisConfig {
    /// Values per grid axis.
    pub interval: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SphereConfig {
    /// Approximate number of sphere points.
    pub amount: Option<usize>,
}

impl SamplingConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw).map_err(|e| {
            CliError::Config(format!("failed to parse '{}': {e}", path.display()))
        })
    }
}
