//! Portal runtime configuration.
//!
//! Defaults are overridden by environment variables:
//! - `ROLECRM_EMPLOYEE_LIMIT`: directory ceiling for `add_employee`.
//! - `ROLECRM_LOGIN_DELAY_MS`: simulated network latency for login.
//! - `ROLECRM_DB_PATH`: SQLite file for durable session storage.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_EMPLOYEE_LIMIT: usize = 50;
pub const DEFAULT_LOGIN_DELAY: Duration = Duration::from_millis(500);

pub const ENV_EMPLOYEE_LIMIT: &str = "ROLECRM_EMPLOYEE_LIMIT";
pub const ENV_LOGIN_DELAY_MS: &str = "ROLECRM_LOGIN_DELAY_MS";
pub const ENV_DB_PATH: &str = "ROLECRM_DB_PATH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalConfig {
    pub employee_limit: usize,
    pub login_delay: Duration,
    /// `None` keeps the session in memory only.
    pub db_path: Option<PathBuf>,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            employee_limit: DEFAULT_EMPLOYEE_LIMIT,
            login_delay: DEFAULT_LOGIN_DELAY,
            db_path: None,
        }
    }
}

impl PortalConfig {
    /// Builds config from process environment on top of defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds config from an arbitrary variable lookup.
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let value = |name: &str| {
            lookup(name)
                .map(|raw| raw.trim().to_string())
                .filter(|raw| !raw.is_empty())
        };

        let mut config = Self::default();
        if let Some(raw) = value(ENV_EMPLOYEE_LIMIT) {
            config.employee_limit = parse_number(ENV_EMPLOYEE_LIMIT, &raw)?;
        }
        if let Some(raw) = value(ENV_LOGIN_DELAY_MS) {
            config.login_delay = Duration::from_millis(parse_number(ENV_LOGIN_DELAY_MS, &raw)?);
        }
        if let Some(raw) = value(ENV_DB_PATH) {
            config.db_path = Some(PathBuf::from(raw));
        }
        Ok(config)
    }

    /// Test-friendly config: no delay, in-memory storage.
    pub fn instant() -> Self {
        Self {
            login_delay: Duration::ZERO,
            ..Self::default()
        }
    }
}

/// Parses into the target width directly; out-of-range values are rejected.
fn parse_number<T: FromStr>(name: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.parse::<T>().map_err(|_| ConfigError::InvalidValue {
        name,
        value: raw.to_string(),
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidValue { name: &'static str, value: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue { name, value } => {
                write!(f, "{name} must be a non-negative integer, got `{value}`")
            }
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::{ConfigError, PortalConfig, DEFAULT_EMPLOYEE_LIMIT};
    use std::collections::HashMap;
    use std::path::PathBuf;
    use std::time::Duration;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let config = PortalConfig::from_lookup(lookup(&[])).expect("defaults");
        assert_eq!(config, PortalConfig::default());
        assert_eq!(config.employee_limit, DEFAULT_EMPLOYEE_LIMIT);
    }

    #[test]
    fn overrides_are_applied() {
        let config = PortalConfig::from_lookup(lookup(&[
            ("ROLECRM_EMPLOYEE_LIMIT", "3"),
            ("ROLECRM_LOGIN_DELAY_MS", " 0 "),
            ("ROLECRM_DB_PATH", "/tmp/rolecrm.sqlite3"),
        ]))
        .expect("overrides");
        assert_eq!(config.employee_limit, 3);
        assert_eq!(config.login_delay, Duration::ZERO);
        assert_eq!(config.db_path, Some(PathBuf::from("/tmp/rolecrm.sqlite3")));
    }

    #[test]
    fn invalid_numbers_are_rejected() {
        let err = PortalConfig::from_lookup(lookup(&[("ROLECRM_EMPLOYEE_LIMIT", "-1")]))
            .expect_err("negative limit must fail");
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                name: "ROLECRM_EMPLOYEE_LIMIT",
                value: "-1".to_string()
            }
        );
    }

    #[test]
    fn limit_beyond_platform_width_is_rejected() {
        let too_big = format!("{}0", usize::MAX);
        let err = PortalConfig::from_lookup(lookup(&[("ROLECRM_EMPLOYEE_LIMIT", &too_big)]))
            .expect_err("out-of-range limit must fail");
        assert!(matches!(
            err,
            ConfigError::InvalidValue { name: "ROLECRM_EMPLOYEE_LIMIT", .. }
        ));
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config =
            PortalConfig::from_lookup(lookup(&[("ROLECRM_DB_PATH", "  ")])).expect("blank");
        assert_eq!(config.db_path, None);
    }
}
