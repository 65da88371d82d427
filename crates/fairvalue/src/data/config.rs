//! User preferences stored in `~/.fairvalue/config.yaml`.

use fairvalue_core::ModelKind;
use fairvalue_core::config::DEFAULT_MARKET_PRICE;
use serde::Deserialize;

/// Root configuration. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Model used when `--model` is not given
    pub default_model: ModelKind,
    /// Share price to compare the fair value against, in $/share
    pub market_price: Option<f64>,
    /// Size of the position being priced, in millions of dollars
    pub position_millions: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_model: ModelKind::default(),
            market_price: None,
            position_millions: 1.0,
        }
    }
}

impl AppConfig {
    pub fn market_price(&self) -> f64 {
        self.market_price.unwrap_or(DEFAULT_MARKET_PRICE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config: AppConfig = serde_saphyr::from_str("market_price: 80.5\n").unwrap();
        assert_eq!(config.default_model, ModelKind::Consensus);
        assert_eq!(config.market_price(), 80.5);
        assert_eq!(config.position_millions, 1.0);
    }

    #[test]
    fn test_model_by_name() {
        let yaml = "default_model: interview\nposition_millions: 2.5\n";
        let config: AppConfig = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.default_model, ModelKind::Interview);
        assert_eq!(config.position_millions, 2.5);
        assert_eq!(config.market_price(), DEFAULT_MARKET_PRICE);
    }
}
