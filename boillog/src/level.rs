//! Severity names and their ordering.

use std::{fmt, str::FromStr};

/// A named logging level. Declaration order is rank order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Debug,
    Info,
    Warn,
    Error,
    /// Only meaningful as a configured minimum: suppresses every record.
    Disable,
}

/// Rank table. Index is the rank.
const RANKS: [(Severity, &str); 5] = [
    (Severity::Debug, "DEBUG"),
    (Severity::Info, "INFO"),
    (Severity::Warn, "WARN"),
    (Severity::Error, "ERROR"),
    (Severity::Disable, "DISABLE"),
];

impl Severity {
    pub fn rank(self) -> u8 {
        self as u8
    }

    pub fn as_str(self) -> &'static str {
        RANKS[self as usize].1
    }

    /// Case-insensitive lookup. `WARNING` is accepted for `WARN`.
    pub fn parse(name: &str) -> Option<Severity> {
        let upper = name.to_ascii_uppercase();
        if upper == "WARNING" {
            return Some(Severity::Warn);
        }
        RANKS
            .iter()
            .find(|(_, label)| *label == upper)
            .map(|(severity, _)| *severity)
    }

    /// Interpret a configured minimum. Unknown names fall back to `Debug`, so a
    /// typo in `LOGLEVEL` never hides records.
    pub fn minimum_from_config(name: &str) -> Severity {
        Severity::parse(name).unwrap_or(Severity::Debug)
    }

    /// Interpret the severity attached to a message. Unknown names are logged as `Info`.
    pub fn for_message(name: &str) -> Severity {
        Severity::parse(name).unwrap_or(Severity::Info)
    }
}

/// Whether a record at `message` passes the configured `minimum`.
pub fn allows(message: Severity, minimum: Severity) -> bool {
    minimum != Severity::Disable && message.rank() >= minimum.rank()
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown severity '{0}'")]
pub struct UnknownSeverity(pub String);

impl FromStr for Severity {
    type Err = UnknownSeverity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Severity::parse(s).ok_or_else(|| UnknownSeverity(s.to_string()))
    }
}
