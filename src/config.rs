use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{OnPageError, Result};
use crate::{metric, HP};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// First-party hostnames. Links naming one of these count as internal.
    pub site_hosts: Vec<String>,
    pub schema_types: Vec<String>,
    pub weights: BTreeMap<String, f64>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            site_hosts: Vec::new(),
            schema_types: HP
                .default_schema_types
                .iter()
                .map(|t| t.to_string())
                .collect(),
            weights: BTreeMap::new(),
        }
    }
}

impl ScoringConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading scoring config: {}", path.display());
        let data = fs::read_to_string(path)?;
        Self::from_json_str(&data)
    }

    pub fn validate(&self) -> Result<()> {
        for (metric, weight) in &self.weights {
            check_weight(metric, *weight)?;
        }
        Ok(())
    }

    pub fn with_site_host(mut self, host: impl Into<String>) -> Self {
        self.site_hosts.push(host.into());
        self
    }

    pub fn with_weight(mut self, metric: impl Into<String>, weight: f64) -> Result<Self> {
        let metric = metric.into();
        check_weight(&metric, weight)?;
        self.weights.insert(metric, weight);
        Ok(self)
    }

    pub fn weight_for(&self, metric: &str) -> f64 {
        self.weights.get(metric).copied().unwrap_or(1.0)
    }
}

fn check_weight(name: &str, weight: f64) -> Result<()> {
    if !metric::SEO.contains(&name) && !metric::LLM.contains(&name) {
        return Err(OnPageError::Config(format!("unknown metric '{name}' in weights")));
    }
    if weight.is_finite() && weight > 0.0 && weight <= HP.max_metric_weight {
        Ok(())
    } else {
        Err(OnPageError::Config(format!(
            "weight for '{name}' must be in (0, {}], got {weight}",
            HP.max_metric_weight
        )))
    }
}
