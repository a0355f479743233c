//! Planner configuration, read from TOML files such as
//!
//! ```toml
//! cost-weight = 0.5
//! time-limit = "30s"
//! max-expansions = 100000
//! memory-limit-mb = 2048
//! ```

use crate::{search::SearchLimits, Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_cost_weight() -> f64 {
    1.
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct PlannerConfig {
    /// Weight of the accumulated reward in the evaluation, see
    /// [`crate::search::WeightedGreedy`].
    #[serde(default = "default_cost_weight")]
    pub cost_weight: f64,
    /// Wall-clock budget in humantime format, e.g. `"1m 30s"`.
    #[serde(default)]
    pub time_limit: Option<String>,
    #[serde(default)]
    pub max_expansions: Option<usize>,
    #[serde(default)]
    pub memory_limit_mb: Option<usize>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            cost_weight: default_cost_weight(),
            time_limit: None,
            max_expansions: None,
            memory_limit_mb: None,
        }
    }
}

impl PlannerConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            operation: format!("read planner config {}", path.display()),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn with_cost_weight(self, cost_weight: f64) -> Self {
        Self {
            cost_weight,
            ..self
        }
    }

    pub fn limits(&self) -> Result<SearchLimits> {
        let time_limit = self
            .time_limit
            .as_deref()
            .map(humantime::parse_duration)
            .transpose()
            .map_err(|e| Error::configuration(format!("invalid time limit: {}", e)))?;
        Ok(SearchLimits {
            time_limit,
            max_expansions: self.max_expansions,
            memory_limit_mb: self.memory_limit_mb,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{io::Write, time::Duration};

    #[test]
    fn empty_config_uses_defaults() {
        let config = PlannerConfig::from_toml_str("").unwrap();
        assert_eq!(config, PlannerConfig::default());
        assert_eq!(config.cost_weight, 1.);
        assert_eq!(config.limits().unwrap(), SearchLimits::unlimited());
    }

    #[test]
    fn full_config() {
        let config = PlannerConfig::from_toml_str(
            r#"
            cost-weight = 0.25
            time-limit = "1m 30s"
            max-expansions = 1000
            memory-limit-mb = 512
            "#,
        )
        .unwrap();
        assert_eq!(config.cost_weight, 0.25);
        let limits = config.limits().unwrap();
        assert_eq!(limits.time_limit, Some(Duration::from_secs(90)));
        assert_eq!(limits.max_expansions, Some(1000));
        assert_eq!(limits.memory_limit_mb, Some(512));
    }

    #[test]
    fn bad_time_limit_is_a_configuration_error() {
        let config = PlannerConfig::from_toml_str(r#"time-limit = "soon""#).unwrap();
        assert!(matches!(config.limits(), Err(Error::Configuration { .. })));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(matches!(
            PlannerConfig::from_toml_str("weight = 1.0"),
            Err(Error::Toml(_))
        ));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "cost-weight = 0.0").unwrap();
        let config = PlannerConfig::from_path(file.path()).unwrap();
        assert_eq!(config.cost_weight, 0.);

        let missing = file.path().with_extension("missing");
        assert!(matches!(
            PlannerConfig::from_path(&missing),
            Err(Error::Io { .. })
        ));
    }
}
