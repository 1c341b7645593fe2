use std::{fs, path::Path};

use repertree_core::{Side, TreeConfig};
use serde::{Deserialize, Serialize};

use crate::CorpusError;

const DEFAULT_REPERTOIRE_CONFIG_YAML: &str = include_str!("../config/repertoire.default.yaml");

/// Inclusive rating bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EloRange {
    pub min: u32,
    pub max: u32,
}

impl EloRange {
    pub fn new(min: u32, max: u32) -> Self {
        EloRange { min, max }
    }

    pub fn contains(&self, rating: u32) -> bool {
        (self.min..=self.max).contains(&rating)
    }
}

/// Everything that shapes one repertoire run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepertoireConfig {
    pub max_depth: u32,
    pub min_time: f64,
    pub min_probability: f64,
    pub opponent: Side,
    pub white_elo: EloRange,
    pub black_elo: EloRange,
    /// Off unless set; see [`TreeConfig::early_exit_min_visits`].
    pub early_exit_min_visits: Option<u64>,
}

impl Default for RepertoireConfig {
    fn default() -> Self {
        RepertoireConfig {
            max_depth: 25,
            min_time: 0.0,
            min_probability: 0.1,
            opponent: Side::Black,
            white_elo: EloRange::new(1800, 2500),
            black_elo: EloRange::new(1600, 2200),
            early_exit_min_visits: None,
        }
    }
}

impl RepertoireConfig {
    /// Parse a config from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CorpusError> {
        let config: RepertoireConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a config from a YAML file path.
    pub fn from_yaml_path(path: impl AsRef<Path>) -> Result<Self, CorpusError> {
        let yaml = fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    /// Return the default YAML config included with this crate.
    pub fn default_yaml() -> &'static str {
        DEFAULT_REPERTOIRE_CONFIG_YAML
    }

    /// Parse the default YAML config included with this crate.
    pub fn from_default_yaml() -> Result<Self, CorpusError> {
        Self::from_yaml_str(Self::default_yaml())
    }

    /// The side the repertoire is built for.
    pub fn player(&self) -> Side {
        self.opponent.opposite()
    }

    /// Thresholds handed to the position tree.
    pub fn tree_config(&self) -> TreeConfig {
        TreeConfig {
            min_probability: self.min_probability,
            early_exit_min_visits: self.early_exit_min_visits,
        }
    }

    pub fn validate(&self) -> Result<(), CorpusError> {
        if self.max_depth == 0 {
            return Err(CorpusError::InvalidConfig(
                "max_depth must be greater than 0".to_string(),
            ));
        }
        if !self.min_time.is_finite() || self.min_time < 0.0 {
            return Err(CorpusError::InvalidConfig(
                "min_time must be finite and >= 0".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.min_probability) {
            return Err(CorpusError::InvalidConfig(
                "min_probability must be within [0, 1]".to_string(),
            ));
        }
        for (side, range) in [("white", self.white_elo), ("black", self.black_elo)] {
            if range.min > range.max {
                return Err(CorpusError::InvalidConfig(format!(
                    "{side}_elo min {} is above max {}",
                    range.min, range.max
                )));
            }
        }
        Ok(())
    }
}
