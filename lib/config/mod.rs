use std::env;
use std::str::FromStr;

use thiserror::Error;

const LOG_LEVEL_VAR: &str = "BIKE_LANES_LOG_LEVEL";
const OUTPUT_VAR: &str = "BIKE_LANES_OUTPUT";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },
}

/// How command results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ();

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Default tracing level when `RUST_LOG` is unset.
    pub log_level: String,
    /// Output format used when `--output` is not given.
    pub output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            output: OutputFormat::Text,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Builds a config from an arbitrary variable source; unset variables keep defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(level) = lookup(LOG_LEVEL_VAR).filter(|level| !level.trim().is_empty()) {
            config.log_level = level.trim().to_string();
        }
        if let Some(raw) = lookup(OUTPUT_VAR) {
            config.output = raw.parse().map_err(|_| ConfigError::InvalidValue {
                var: OUTPUT_VAR,
                value: raw.clone(),
            })?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |var: &str| vars.get(var).cloned()
    }

    #[test]
    fn unset_variables_use_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).expect("defaults should load");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn variables_override_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            (LOG_LEVEL_VAR, "debug"),
            (OUTPUT_VAR, "JSON"),
        ]))
        .expect("config should load");

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn unknown_output_format_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[(OUTPUT_VAR, "yaml")]))
            .expect_err("yaml is not a supported output");

        assert_eq!(
            err,
            ConfigError::InvalidValue {
                var: OUTPUT_VAR,
                value: "yaml".to_string(),
            }
        );
    }
}
