//! # Shell Configuration
//!
//! Startup settings and the facility's initial layout.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`ZOO_*`)
//! 2. Config file (`zoo.toml`, or `--config PATH`)
//! 3. Defaults (this file)
//!
//! ## Example
//! ```toml
//! log_filter = "info,zoo=debug"
//! output = "text"
//! short_change = "refund"
//!
//! [fee]
//! pounds = 17
//! pence = 50
//!
//! [cash]
//! "10" = 1
//! "2" = 1
//!
//! [[areas]]
//! kind = "enclosure"
//! capacity = 4
//!
//! [[connections]]
//! from = 0
//! to = 1
//! ```
//!
//! Configuration is read once at startup and never changes afterwards.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use zoo_core::validation::{validate_capacity, validate_count, validate_fee_pounds, validate_pence};
use zoo_core::{AreaKind, Denomination, ShortChangePolicy};

/// Default log filter when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_LOG_FILTER: &str = "info,zoo=debug";

/// Shell configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShellConfig {
    /// `tracing` filter directives
    pub log_filter: String,

    /// How command responses are printed
    pub output: OutputFormat,

    /// What the ticket machine does when it can't make full change
    pub short_change: ShortChangePolicy,

    /// Entrance fee
    pub fee: FeeConfig,

    /// Initial ticket-machine stock, keyed by denomination (`"20"`, `"50p"`, ...)
    pub cash: BTreeMap<String, i64>,

    /// Areas created at startup. Ids are assigned in order from 1.
    pub areas: Vec<AreaConfig>,

    /// One-way paths opened at startup, after all areas exist.
    pub connections: Vec<ConnectionConfig>,
}

/// Output format for command responses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FeeConfig {
    pub pounds: i64,
    pub pence: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AreaConfig {
    /// `picnic`, `enclosure`, `aquarium` or `cage`
    pub kind: String,

    /// Only meaningful for habitats
    #[serde(default)]
    pub capacity: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConnectionConfig {
    pub from: u32,
    pub to: u32,
}

impl Default for ShellConfig {
    fn default() -> Self {
        ShellConfig {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            output: OutputFormat::Text,
            short_change: ShortChangePolicy::Refund,
            fee: FeeConfig::default(),
            cash: BTreeMap::new(),
            areas: Vec::new(),
            connections: Vec::new(),
        }
    }
}

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

impl ConfigError {
    fn invalid(field: impl Into<String>, reason: impl ToString) -> Self {
        ConfigError::InvalidValue {
            field: field.into(),
            reason: reason.to_string(),
        }
    }
}

impl ShellConfig {
    /// Loads configuration from file and environment, then validates it.
    ///
    /// An explicit `path` must exist. Without one, the platform default
    /// (see [`default_config_path`]) is used if present, and defaults
    /// otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => ShellConfig::from_file(path)?,
            None => match default_config_path() {
                Some(path) if path.is_file() => ShellConfig::from_file(&path)?,
                _ => {
                    debug!("No config file found, using defaults");
                    ShellConfig::default()
                }
            },
        };

        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "Config file loaded");
        Ok(config)
    }

    /// Applies `ZOO_*` overrides.
    ///
    /// ## Environment Variables
    /// - `ZOO_LOG`: log filter
    /// - `ZOO_OUTPUT`: `text` or `json`
    /// - `ZOO_SHORT_CHANGE`: `refund` or `accept_shortfall`
    /// - `ZOO_FEE`: entrance fee as `"17.50"`
    ///
    /// `lookup` stands in for `std::env::var` so tests stay hermetic.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(filter) = lookup("ZOO_LOG") {
            self.log_filter = filter;
        }

        if let Some(output) = lookup("ZOO_OUTPUT") {
            self.output = match output.trim().to_lowercase().as_str() {
                "text" => OutputFormat::Text,
                "json" => OutputFormat::Json,
                _ => return Err(ConfigError::invalid("ZOO_OUTPUT", "expected text or json")),
            };
        }

        if let Some(policy) = lookup("ZOO_SHORT_CHANGE") {
            self.short_change = match policy.trim().to_lowercase().as_str() {
                "refund" => ShortChangePolicy::Refund,
                "accept_shortfall" => ShortChangePolicy::AcceptShortfall,
                _ => {
                    return Err(ConfigError::invalid(
                        "ZOO_SHORT_CHANGE",
                        "expected refund or accept_shortfall",
                    ))
                }
            };
        }

        if let Some(fee) = lookup("ZOO_FEE") {
            self.fee = parse_fee(&fee).map_err(|reason| ConfigError::invalid("ZOO_FEE", reason))?;
        }

        Ok(())
    }

    /// Checks every value the facility will be built from.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_fee_pounds(self.fee.pounds).map_err(|e| ConfigError::invalid("fee.pounds", e))?;
        validate_pence(self.fee.pence).map_err(|e| ConfigError::invalid("fee.pence", e))?;
        self.cash_entries()?;

        for (i, area) in self.areas.iter().enumerate() {
            let field = format!("areas[{}]", i);
            let kind: AreaKind = area
                .kind
                .parse()
                .map_err(|e| ConfigError::invalid(&field, e))?;
            if kind == AreaKind::Entrance {
                return Err(ConfigError::invalid(
                    field,
                    "the entrance always exists as area 0",
                ));
            }
            validate_capacity(area.capacity).map_err(|e| ConfigError::invalid(&field, e))?;
        }

        Ok(())
    }

    /// The `[cash]` table as typed `(denomination, count)` pairs.
    pub fn cash_entries(&self) -> Result<Vec<(Denomination, u32)>, ConfigError> {
        self.cash
            .iter()
            .map(|(key, &count)| {
                let field = format!("cash.\"{}\"", key);
                let denomination: Denomination =
                    key.parse().map_err(|e| ConfigError::invalid(&field, e))?;
                let count = validate_count(count).map_err(|e| ConfigError::invalid(&field, e))?;
                Ok((denomination, count))
            })
            .collect()
    }
}

/// Platform config path, e.g. `~/.config/zoo/zoo.toml` on Linux.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("org", "zoo", "zoo").map(|dirs| dirs.config_dir().join("zoo.toml"))
}

/// Parses `"17.50"`, `"17.5"` or `"17"` into pounds and pence.
fn parse_fee(raw: &str) -> Result<FeeConfig, String> {
    let raw = raw.trim().trim_start_matches('£');
    let (pounds, pence) = match raw.split_once('.') {
        Some((pounds, pence)) => (pounds, pence),
        None => (raw, "0"),
    };

    let pounds: i64 = pounds
        .parse()
        .map_err(|_| format!("'{}' is not a whole number of pounds", pounds))?;
    if pence.is_empty() || pence.len() > 2 || !pence.chars().all(|c| c.is_ascii_digit()) {
        return Err(format!("'{}' is not a valid pence part", pence));
    }
    let pence: i64 = format!("{:0<2}", pence)
        .parse()
        .map_err(|_| format!("'{}' is not a valid pence part", pence))?;

    Ok(FeeConfig { pounds, pence })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn write_config(text: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(text.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = ShellConfig::default();
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
        assert_eq!(config.output, OutputFormat::Text);
        assert_eq!(config.short_change, ShortChangePolicy::Refund);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_full_file() {
        let file = write_config(
            r#"
            output = "json"
            short_change = "accept_shortfall"

            [fee]
            pounds = 17
            pence = 50

            [cash]
            "10" = 1
            "50p" = 2

            [[areas]]
            kind = "enclosure"
            capacity = 4

            [[areas]]
            kind = "picnic"

            [[connections]]
            from = 0
            to = 1
            "#,
        );

        let config = ShellConfig::load(Some(file.path())).unwrap();

        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.short_change, ShortChangePolicy::AcceptShortfall);
        assert_eq!(config.fee, FeeConfig { pounds: 17, pence: 50 });
        assert_eq!(
            config.cash_entries().unwrap(),
            vec![(Denomination::Note10, 1), (Denomination::Coin50p, 2)]
        );
        assert_eq!(config.areas.len(), 2);
        assert_eq!(config.areas[1].capacity, 0);
        assert_eq!(config.connections, vec![ConnectionConfig { from: 0, to: 1 }]);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ShellConfig::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_unknown_key_is_a_parse_error() {
        let file = write_config("colour = \"green\"\n");
        let err = ShellConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = ShellConfig::default();
        config.fee.pence = 100;
        assert!(config.validate().is_err());

        let mut config = ShellConfig::default();
        config.cash.insert("3".to_string(), 1);
        assert!(config.validate().is_err());

        let mut config = ShellConfig::default();
        config.cash.insert("20".to_string(), -1);
        assert!(config.validate().is_err());

        let mut config = ShellConfig::default();
        config.areas.push(AreaConfig {
            kind: "entrance".to_string(),
            capacity: 0,
        });
        assert!(config.validate().is_err());

        let mut config = ShellConfig::default();
        config.areas.push(AreaConfig {
            kind: "volcano".to_string(),
            capacity: 0,
        });
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = ShellConfig::default();
        config
            .apply_env(env(&[
                ("ZOO_LOG", "warn"),
                ("ZOO_OUTPUT", "JSON"),
                ("ZOO_SHORT_CHANGE", "accept_shortfall"),
                ("ZOO_FEE", "17.50"),
            ]))
            .unwrap();

        assert_eq!(config.log_filter, "warn");
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.short_change, ShortChangePolicy::AcceptShortfall);
        assert_eq!(config.fee, FeeConfig { pounds: 17, pence: 50 });
    }

    #[test]
    fn test_env_rejects_garbage() {
        let mut config = ShellConfig::default();
        assert!(config.apply_env(env(&[("ZOO_OUTPUT", "yaml")])).is_err());
        assert!(config.apply_env(env(&[("ZOO_FEE", "ten")])).is_err());
    }

    #[test]
    fn test_parse_fee() {
        assert_eq!(parse_fee("17.50").unwrap(), FeeConfig { pounds: 17, pence: 50 });
        assert_eq!(parse_fee("£5").unwrap(), FeeConfig { pounds: 5, pence: 0 });
        assert_eq!(parse_fee("3.5").unwrap(), FeeConfig { pounds: 3, pence: 50 });
        assert_eq!(parse_fee("0.05").unwrap(), FeeConfig { pounds: 0, pence: 5 });
        assert!(parse_fee("1.234").is_err());
        assert!(parse_fee("1.").is_err());
        assert!(parse_fee("abc").is_err());
    }
}
