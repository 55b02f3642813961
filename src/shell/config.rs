// Runtime configuration read from the environment.
//
// Variables
// - ACTIVITIES_HOST: bind address, defaults to 0.0.0.0
// - ACTIVITIES_PORT: bind port, defaults to 8080
// - ACTIVITIES_STATIC_DIR: directory served under /static, defaults to ./static
// - ACTIVITIES_SEED_FILE: optional JSON file replacing the default activities

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use thiserror::Error;

pub const HOST_VAR: &str = "ACTIVITIES_HOST";
pub const PORT_VAR: &str = "ACTIVITIES_PORT";
pub const STATIC_DIR_VAR: &str = "ACTIVITIES_STATIC_DIR";
pub const SEED_FILE_VAR: &str = "ACTIVITIES_SEED_FILE";

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub static_dir: PathBuf,
    pub seed_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            seed_file: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let read = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = match read(HOST_VAR) {
            Some(value) => value.trim().parse::<IpAddr>().map_err(|_| ConfigError::Invalid {
                key: HOST_VAR,
                value,
            })?,
            None => defaults.host,
        };
        let port = match read(PORT_VAR) {
            Some(value) => value.trim().parse::<u16>().map_err(|_| ConfigError::Invalid {
                key: PORT_VAR,
                value,
            })?,
            None => defaults.port,
        };

        Ok(Self {
            host,
            port,
            static_dir: read(STATIC_DIR_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            seed_file: read(SEED_FILE_VAR).map(PathBuf::from),
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod app_config_tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[rstest]
    fn it_should_fall_back_to_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
    }

    #[rstest]
    fn it_should_read_every_variable() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (HOST_VAR, "127.0.0.1"),
            (PORT_VAR, "3000"),
            (STATIC_DIR_VAR, "/srv/www"),
            (SEED_FILE_VAR, "/etc/activities.json"),
        ]))
        .unwrap();

        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3000");
        assert_eq!(config.static_dir, PathBuf::from("/srv/www"));
        assert_eq!(config.seed_file, Some(PathBuf::from("/etc/activities.json")));
    }

    #[rstest]
    fn it_should_treat_blank_values_as_unset() {
        let config = AppConfig::from_lookup(lookup_from(&[(PORT_VAR, "  "), (SEED_FILE_VAR, "")]))
            .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.seed_file, None);
    }

    #[rstest]
    #[case::port_not_a_number(PORT_VAR, "eighty")]
    #[case::port_out_of_range(PORT_VAR, "70000")]
    #[case::host_not_an_ip(HOST_VAR, "localhost:80")]
    fn it_should_reject_invalid_values(#[case] key: &'static str, #[case] value: &str) {
        let result = AppConfig::from_lookup(lookup_from(&[(key, value)]));
        assert_eq!(
            result,
            Err(ConfigError::Invalid {
                key,
                value: value.to_string(),
            })
        );
    }
}
