//! Boot config: из окружения / from the environment
//!
//! Аргументы командной строки игнорируются, поэтому единственный
//! источник: переменные окружения.
//! Command-line arguments are ignored, so the environment is the only source.
//!
//!   BULB_LOG=debug   уровень лога / log level
//!   BULB_LOG=on      то же, что debug / same as debug
//!   BULB_LOG=off     без лога / no logging

use std::env;
use std::str::FromStr;

use log::LevelFilter;

pub const LOG_ENV: &str = "BULB_LOG";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootConfig {
    pub log_level: LevelFilter,
    /// Логируются после поднятия логгера / Logged once the logger is up
    pub warnings: Vec<String>,
}

impl Default for BootConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL,
            warnings: Vec::new(),
        }
    }
}

impl BootConfig {
    pub fn from_env() -> Self {
        match env::var(LOG_ENV) {
            Ok(raw) => Self::from_value(Some(&raw)),
            Err(env::VarError::NotPresent) => Self::default(),
            Err(env::VarError::NotUnicode(_)) => Self {
                warnings: vec![format!("{LOG_ENV} is not valid unicode, using {DEFAULT_LOG_LEVEL}")],
                ..Self::default()
            },
        }
    }

    pub fn from_value(raw: Option<&str>) -> Self {
        let raw = raw.map(str::trim).unwrap_or_default();
        if raw.is_empty() {
            return Self::default();
        }

        match parse_level(raw) {
            Some(log_level) => Self {
                log_level,
                warnings: Vec::new(),
            },
            None => Self {
                warnings: vec![format!(
                    "unknown {LOG_ENV} value {raw:?}, using {DEFAULT_LOG_LEVEL}"
                )],
                ..Self::default()
            },
        }
    }
}

fn parse_level(raw: &str) -> Option<LevelFilter> {
    if let Ok(level) = LevelFilter::from_str(raw) {
        return Some(level);
    }

    match raw.to_ascii_lowercase().as_str() {
        "1" | "on" | "true" | "yes" => Some(LevelFilter::Debug),
        "0" | "false" | "no" => Some(LevelFilter::Warn),
        _ => None,
    }
}
