//! # Environment Configuration
//!
//! Every setting is read straight from the process environment on each access.
//! There is no cached configuration object: changing `LOGLOCATION` between two
//! logging calls moves the second record to the new location.
//!
//! An unset or empty variable resolves to its default:
//!
//! | Variable      | Default      |
//! |---------------|--------------|
//! | `PROFILER`    | `false`      |
//! | `METRICS`     | `false`      |
//! | `LOGLOCATION` | `/var/log/`  |
//! | `APP_NAME`    | `boiler.log` |
//! | `LOGLEVEL`    | `DEBUG`      |
//!
//! Values are returned verbatim. Interpreting them (booleans, severity names) is
//! left to the consumer.

use crate::error::ConfigError;
use std::{env, path::PathBuf};

/// The settings understood by the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Setting {
    Profiler,
    Metrics,
    LogLocation,
    AppName,
    LogLevel,
}

impl Setting {
    pub const ALL: [Setting; 5] = [
        Setting::Profiler,
        Setting::Metrics,
        Setting::LogLocation,
        Setting::AppName,
        Setting::LogLevel,
    ];

    /// Name of the environment variable backing this setting.
    pub fn var_name(self) -> &'static str {
        match self {
            Setting::Profiler => "PROFILER",
            Setting::Metrics => "METRICS",
            Setting::LogLocation => "LOGLOCATION",
            Setting::AppName => "APP_NAME",
            Setting::LogLevel => "LOGLEVEL",
        }
    }

    /// Value used when the variable is unset or empty.
    pub fn default_value(self) -> &'static str {
        match self {
            Setting::Profiler | Setting::Metrics => "false",
            Setting::LogLocation => "/var/log/",
            Setting::AppName => "boiler.log",
            Setting::LogLevel => "DEBUG",
        }
    }

    /// Current value of the setting.
    pub fn resolve(self) -> String {
        match env::var(self.var_name()) {
            Ok(value) if !value.is_empty() => value,
            _ => self.default_value().to_string(),
        }
    }
}

pub fn profiler() -> String {
    Setting::Profiler.resolve()
}

pub fn metrics() -> String {
    Setting::Metrics.resolve()
}

pub fn log_location() -> String {
    Setting::LogLocation.resolve()
}

pub fn app_name() -> String {
    Setting::AppName.resolve()
}

pub fn log_level() -> String {
    Setting::LogLevel.resolve()
}

/// Full path of the log file: `LOGLOCATION` joined with `APP_NAME`.
pub fn log_path() -> PathBuf {
    PathBuf::from(log_location()).join(app_name())
}

/// Parse a boolean flag.
///
/// Accepts `1`, `t`, `T`, `TRUE`, `true`, `True` and their false counterparts
/// `0`, `f`, `F`, `FALSE`, `false`, `False`. Anything else is an error.
pub fn parse_flag(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        other => Err(ConfigError::InvalidFlag {
            var,
            value: other.to_string(),
        }),
    }
}

/// Resolve and parse a flag setting, reporting parse failures and treating them as off.
fn flag_enabled(setting: Setting) -> bool {
    match parse_flag(setting.var_name(), &setting.resolve()) {
        Ok(enabled) => enabled,
        Err(e) => {
            tracing::warn!("{e}");
            false
        }
    }
}

/// Whether `PROFILER` is switched on.
pub fn profiler_enabled() -> bool {
    flag_enabled(Setting::Profiler)
}

/// Whether `METRICS` is switched on.
pub fn metrics_enabled() -> bool {
    flag_enabled(Setting::Metrics)
}
