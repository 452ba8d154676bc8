//! Intersection observer configuration
//!
//! The viewport is shrunk by the height of the fixed navigation bar at the
//! top and by a percentage at the bottom, so a section has to sit well
//! inside the visible area to register. Several thresholds are registered
//! so partial visibility keeps producing notifications.
//!
//! Hosts may override the defaults with TOML:
//!
//! ```
//! use portfolio_core::observer::ObserverConfig;
//!
//! # fn example() -> Result<(), portfolio_core::PortfolioError> {
//! let config = ObserverConfig::from_toml_str(r#"
//!     top_inset_px = 64
//!     thresholds = [0.0, 0.25, 0.5, 0.75]
//! "#)?;
//! assert_eq!(config.root_margin(), "-64px 0px -10% 0px");
//! # Ok(())
//! # }
//! ```

use crate::error::PortfolioError;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Root margin and thresholds handed to the intersection observer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObserverConfig {
    /// Space reserved for the fixed nav bar, in pixels (default: 80)
    #[serde(default = "default_top_inset_px")]
    pub top_inset_px: u32,
    /// Bottom inset as a percentage of the viewport height (default: 10)
    #[serde(default = "default_bottom_inset_percent")]
    pub bottom_inset_percent: f64,
    /// Visibility ratios that trigger a notification
    #[serde(default = "default_thresholds")]
    pub thresholds: Vec<f64>,
}

fn default_top_inset_px() -> u32 {
    80
}

fn default_bottom_inset_percent() -> f64 {
    10.0
}

fn default_thresholds() -> Vec<f64> {
    vec![0.0, 0.1, 0.2, 0.35, 0.5, 0.65]
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            top_inset_px: default_top_inset_px(),
            bottom_inset_percent: default_bottom_inset_percent(),
            thresholds: default_thresholds(),
        }
    }
}

impl ObserverConfig {
    /// Parse and validate a TOML configuration
    pub fn from_toml_str(s: &str) -> Result<Self, PortfolioError> {
        let config: ObserverConfig =
            toml::from_str(s).map_err(|e| PortfolioError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read observer config: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid observer config: {}", path.display()))
    }

    /// CSS `rootMargin` string, e.g. `"-80px 0px -10% 0px"`
    pub fn root_margin(&self) -> String {
        format!(
            "-{}px 0px -{}% 0px",
            self.top_inset_px,
            format_percent(self.bottom_inset_percent)
        )
    }

    pub fn validate(&self) -> Result<(), PortfolioError> {
        if self.thresholds.is_empty() {
            return Err(PortfolioError::InvalidConfig(
                "at least one threshold is required".to_string(),
            ));
        }

        for &t in &self.thresholds {
            if !(0.0..=1.0).contains(&t) {
                return Err(PortfolioError::InvalidConfig(format!(
                    "threshold {} is outside [0, 1]",
                    t
                )));
            }
        }

        if self.thresholds.windows(2).any(|w| w[0] >= w[1]) {
            return Err(PortfolioError::InvalidConfig(
                "thresholds must be strictly ascending".to_string(),
            ));
        }

        if !(0.0..100.0).contains(&self.bottom_inset_percent) {
            return Err(PortfolioError::InvalidConfig(format!(
                "bottom inset {}% is outside [0, 100)",
                self.bottom_inset_percent
            )));
        }

        Ok(())
    }
}

fn format_percent(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_root_margin() {
        assert_eq!(ObserverConfig::default().root_margin(), "-80px 0px -10% 0px");
    }

    #[test]
    fn test_default_thresholds() {
        let config = ObserverConfig::default();
        assert_eq!(config.thresholds, vec![0.0, 0.1, 0.2, 0.35, 0.5, 0.65]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = ObserverConfig::from_toml_str("").unwrap();
        assert_eq!(config, ObserverConfig::default());
    }

    #[test]
    fn test_fractional_bottom_inset() {
        let config = ObserverConfig::from_toml_str("bottom_inset_percent = 12.5").unwrap();
        assert_eq!(config.root_margin(), "-80px 0px -12.5% 0px");
    }

    #[test]
    fn test_rejects_unsorted_thresholds() {
        let err = ObserverConfig::from_toml_str("thresholds = [0.5, 0.2]").unwrap_err();
        assert!(matches!(err, PortfolioError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_out_of_range_threshold() {
        let err = ObserverConfig::from_toml_str("thresholds = [0.0, 1.5]").unwrap_err();
        assert!(matches!(err, PortfolioError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_empty_thresholds() {
        let err = ObserverConfig::from_toml_str("thresholds = []").unwrap_err();
        assert!(matches!(err, PortfolioError::InvalidConfig(_)));
    }

    #[test]
    fn test_malformed_toml() {
        let err = ObserverConfig::from_toml_str("thresholds = ").unwrap_err();
        assert!(matches!(err, PortfolioError::ConfigParse(_)));
    }

    #[test]
    fn test_from_missing_file() {
        let result = ObserverConfig::from_file("/nonexistent/observer.toml");
        assert!(result.is_err());
    }
}
