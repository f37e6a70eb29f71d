//! Settings for the quote service.
//!
//! Values come from environment variables, optionally pointing at a JSON
//! pricing configuration file:
//!
//! | variable                          | effect                                 |
//! |-----------------------------------|----------------------------------------|
//! | `GIGSHIELD_PRICING_CONFIG`        | path to a JSON `PricingConfig`         |
//! | `GIGSHIELD_BASE_RATE`             | overrides `base_rate`                  |
//! | `GIGSHIELD_MARKET_VOLATILITY`     | overrides `market_volatility`          |
//! | `GIGSHIELD_APPLY_RISK_ADJUSTMENT` | overrides `apply_risk_adjustment`      |
//! | `GIGSHIELD_HOST`                  | bind address (default `0.0.0.0`)       |
//! | `GIGSHIELD_PORT`                  | bind port (default `8080`)             |
//! | `GIGSHIELD_MAX_METRICS_AGE_SECS`  | pool metrics staleness (default 3600)  |

use anyhow::{Context, Result};
use chrono::TimeDelta;
use gigshield_domain::pricing::PricingConfig;
use rust_decimal::Decimal;
use std::path::Path;
use std::str::FromStr;

pub const ENV_PRICING_CONFIG: &str = "GIGSHIELD_PRICING_CONFIG";
pub const ENV_BASE_RATE: &str = "GIGSHIELD_BASE_RATE";
pub const ENV_MARKET_VOLATILITY: &str = "GIGSHIELD_MARKET_VOLATILITY";
pub const ENV_APPLY_RISK_ADJUSTMENT: &str = "GIGSHIELD_APPLY_RISK_ADJUSTMENT";
pub const ENV_HOST: &str = "GIGSHIELD_HOST";
pub const ENV_PORT: &str = "GIGSHIELD_PORT";
pub const ENV_MAX_METRICS_AGE_SECS: &str = "GIGSHIELD_MAX_METRICS_AGE_SECS";

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Pool metrics older than this are flagged stale.
    pub max_metrics_age: TimeDelta,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            max_metrics_age: TimeDelta::hours(1),
        }
    }
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Everything the service needs at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerConfig,
    pub pricing: PricingConfig,
}

impl Settings {
    /// Loads settings from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads settings using `lookup` to resolve variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut server = ServerConfig::default();
        if let Some(host) = lookup(ENV_HOST) {
            server.host = host;
        }
        if let Some(port) = lookup(ENV_PORT) {
            server.port = parse_var(ENV_PORT, &port)?;
        }
        if let Some(age) = lookup(ENV_MAX_METRICS_AGE_SECS) {
            server.max_metrics_age = parse_metrics_age(&age)?;
        }

        let base = match lookup(ENV_PRICING_CONFIG) {
            Some(path) => load_pricing_config(Path::new(&path))?,
            None => PricingConfig::default(),
        };
        let pricing = apply_pricing_overrides(base, &lookup)?;

        Ok(Self { server, pricing })
    }
}

/// Reads and validates a JSON pricing configuration. Missing fields take
/// the reference defaults.
pub fn load_pricing_config(path: &Path) -> Result<PricingConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read pricing config {}", path.display()))?;
    let config: PricingConfig = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse pricing config {}", path.display()))?;
    config.validate()?;
    Ok(config)
}

fn apply_pricing_overrides(
    mut config: PricingConfig,
    lookup: &impl Fn(&str) -> Option<String>,
) -> Result<PricingConfig> {
    if let Some(rate) = lookup(ENV_BASE_RATE) {
        config.base_rate = parse_var::<Decimal>(ENV_BASE_RATE, &rate)?;
    }
    if let Some(volatility) = lookup(ENV_MARKET_VOLATILITY) {
        config.market_volatility = parse_var::<Decimal>(ENV_MARKET_VOLATILITY, &volatility)?;
    }
    if let Some(apply) = lookup(ENV_APPLY_RISK_ADJUSTMENT) {
        config.apply_risk_adjustment = parse_var::<bool>(ENV_APPLY_RISK_ADJUSTMENT, &apply)?;
    }
    config.validate()?;
    Ok(config)
}

/// Seconds as a non-negative duration that fits the timestamp range.
fn parse_metrics_age(value: &str) -> Result<TimeDelta> {
    let secs = parse_var::<u64>(ENV_MAX_METRICS_AGE_SECS, value)?;
    i64::try_from(secs)
        .ok()
        .and_then(TimeDelta::try_seconds)
        .with_context(|| {
            format!("invalid value for {ENV_MAX_METRICS_AGE_SECS}: {secs} seconds is out of range")
        })
}

fn parse_var<T>(key: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value
        .trim()
        .parse::<T>()
        .with_context(|| format!("invalid value for {key}: {value:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_variables() {
        let settings = Settings::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(settings.server, ServerConfig::default());
        assert_eq!(settings.pricing, PricingConfig::default());
        assert_eq!(settings.server.bind_address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_overrides_apply() {
        let settings = Settings::from_lookup(lookup_from(&[
            (ENV_PORT, "9000"),
            (ENV_BASE_RATE, "12.5"),
            (ENV_MARKET_VOLATILITY, "1.10"),
            (ENV_APPLY_RISK_ADJUSTMENT, "true"),
            (ENV_MAX_METRICS_AGE_SECS, "60"),
        ]))
        .unwrap();
        assert_eq!(settings.server.port, 9000);
        assert_eq!(settings.server.max_metrics_age, TimeDelta::seconds(60));
        assert_eq!(settings.pricing.base_rate, dec!(12.5));
        assert_eq!(settings.pricing.market_volatility, dec!(1.10));
        assert!(settings.pricing.apply_risk_adjustment);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(Settings::from_lookup(lookup_from(&[(ENV_PORT, "eighty")])).is_err());
        assert!(Settings::from_lookup(lookup_from(&[(ENV_BASE_RATE, "-1")])).is_err());
        assert!(Settings::from_lookup(lookup_from(&[(ENV_APPLY_RISK_ADJUSTMENT, "yes")])).is_err());
    }

    #[test]
    fn test_metrics_age_out_of_range_is_rejected() {
        for age in ["18446744073709551615", "9300000000000000", "-5"] {
            let result = Settings::from_lookup(lookup_from(&[(ENV_MAX_METRICS_AGE_SECS, age)]));
            assert!(result.is_err(), "{age} should be rejected");
        }
    }

    #[test]
    fn test_metrics_age_upper_bound_is_accepted() {
        let settings =
            Settings::from_lookup(lookup_from(&[(ENV_MAX_METRICS_AGE_SECS, "86400000")])).unwrap();
        assert_eq!(settings.server.max_metrics_age, TimeDelta::days(1000));
    }

    #[test]
    fn test_load_pricing_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"base_rate":"20","risk_weights":{{"job_types":{{"design":"0.9"}}}}}}"#
        )
        .unwrap();

        let config = load_pricing_config(file.path()).unwrap();
        assert_eq!(config.base_rate, dec!(20));
        assert_eq!(config.market_volatility, dec!(1.05));
        assert_eq!(config.risk_weights.job_type_multiplier("design"), dec!(0.9));
        assert_eq!(config.risk_weights.job_type_multiplier("writing"), Decimal::ONE);
        // industries were not given and keep the reference table
        assert_eq!(config.risk_weights.industry_multiplier("finance"), dec!(1.30));
    }

    #[test]
    fn test_file_then_env_override() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"base_rate":"20"}}"#).unwrap();
        let path = file.path().to_string_lossy().to_string();

        let settings = Settings::from_lookup(lookup_from(&[
            (ENV_PRICING_CONFIG, path.as_str()),
            (ENV_BASE_RATE, "15"),
        ]))
        .unwrap();
        assert_eq!(settings.pricing.base_rate, dec!(15));
    }

    #[test]
    fn test_invalid_config_file_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"market_volatility":"0"}}"#).unwrap();
        assert!(load_pricing_config(file.path()).is_err());

        let missing = Path::new("/nonexistent/gigshield-pricing.json");
        assert!(load_pricing_config(missing).is_err());
    }
}
