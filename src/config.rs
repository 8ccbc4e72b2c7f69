use anyhow::{Context, Result};
use dotenvy::dotenv;
use serde::Deserialize;
use std::env;

use crate::models::room::RoomRates;

const CONFIG_PATH_ENV: &str = "CONFIG_PATH";

#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    pub db_path: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub rates: RoomRates,
}

fn default_log_level() -> String {
    "info".to_string()
}

pub fn create_test_config() -> Config {
    Config {
        db_path: "postgres://localhost/property-manager".to_string(),
        log_level: default_log_level(),
        rates: RoomRates::default(),
    }
}

pub fn parse_config(raw: &str) -> Result<Config> {
    toml::from_str(raw).context("invalid config file")
}

pub fn read_config() -> Result<Config> {
    dotenv().ok();
    let config_path =
        env::var(CONFIG_PATH_ENV).with_context(|| format!("{CONFIG_PATH_ENV} .env not set"))?;
    let raw = std::fs::read_to_string(&config_path)
        .with_context(|| format!("failed to read config from {config_path}"))?;
    parse_config(&raw)
}

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn defaults_apply_to_minimal_config() {
        let config = parse_config(r#"db_path = "postgres://db/units""#).unwrap();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.rates, RoomRates::default());
    }

    #[test]
    fn partial_rate_table_keeps_defaults() {
        let raw = r#"
            db_path = "postgres://db/units"
            log_level = "debug"

            [rates]
            bedroom = 7.5
        "#;
        let config = parse_config(raw).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.rates.bedroom, 7.5);
        assert_eq!(config.rates.kitchen, 5.0);
    }

    #[test]
    fn test_config_uses_uniform_rate() {
        let config = create_test_config();
        assert_eq!(config.rates, RoomRates::uniform(5.0));
    }

    #[test]
    fn missing_db_path_is_an_error() {
        assert!(parse_config("log_level = \"info\"").is_err());
    }
}
