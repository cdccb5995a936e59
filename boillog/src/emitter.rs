//! # Log Emitter
//!
//! Appends one formatted record per call to the file named by `LOGLOCATION` and
//! `APP_NAME`. The path is re-derived and the file re-opened on every call, so
//! external rotation or a changed environment takes effect immediately. The handle
//! lives only for the duration of the call.
//!
//! ## Filtering
//!
//! A record is written iff its severity rank is at least the rank of `LOGLEVEL`
//! and `LOGLEVEL` is not `DISABLE`. The optional stdout echo only ever copies a
//! record that passed the filter.
//!
//! ## Record layout
//!
//! ```text
//! [2024-05-01 12:00:00] [Task] hello
//! ```
//!
//! Each line is written with a single `write_all` on an `O_APPEND` handle, so
//! concurrent emitters never interleave partial lines.

use crate::{
    config,
    error::{EmitError, Result},
    level::{self, Severity},
    utils::timestamp,
};
use std::{
    borrow::Cow,
    fs::{self, OpenOptions},
    io::{self, Write},
    path::Path,
};

/// What happened to a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Written,
    /// Below the configured minimum, or logging is disabled.
    Filtered,
}

/// Log emitter. Holds presentation options only; all file settings come from the
/// environment at call time.
#[derive(Debug, Clone, Default)]
pub struct Emitter {
    stdout_echo: bool,
}

impl Emitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also print non-INFO records to stdout, tab-indented.
    pub fn with_stdout_echo(mut self, enabled: bool) -> Self {
        self.stdout_echo = enabled;
        self
    }

    pub fn stdout_echo(&self) -> bool {
        self.stdout_echo
    }

    /// Emit a record, reporting any failure on the diagnostic channel.
    pub fn emit(&self, label: &str, severity: &str, message: &str) {
        if let Err(e) = self.try_emit(label, severity, message) {
            tracing::error!("{e}");
        }
    }

    /// Emit a record and hand any failure back to the caller.
    pub fn try_emit(&self, label: &str, severity: &str, message: &str) -> Result<Outcome> {
        self.try_emit_to(label, severity, message, &mut io::stdout())
    }

    /// Like [`Emitter::try_emit`] but echoes to `echo` instead of stdout.
    ///
    /// A failed echo is reported on the diagnostic channel; the record still
    /// counts as written.
    pub fn try_emit_to(
        &self,
        label: &str,
        severity: &str,
        message: &str,
        echo: &mut impl Write,
    ) -> Result<Outcome> {
        let path = config::log_path();
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|source| EmitError::CreateDir {
                path: dir.to_path_buf(),
                source,
            })?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| EmitError::Open {
                path: path.clone(),
                source,
            })?;

        let severity = Severity::for_message(&severity.to_uppercase());
        let minimum = Severity::minimum_from_config(&config::log_level());
        if !level::allows(severity, minimum) {
            tracing::trace!(%severity, %minimum, "record filtered");
            return Ok(Outcome::Filtered);
        }

        let stamp = timestamp::format_current_time();
        let line = format_record(&stamp, label, message);
        write_line(&mut file, &path, &line)?;

        if self.stdout_echo
            && severity != Severity::Info
            && let Err(e) = writeln!(echo, "{}", format_echo(&stamp, severity, label, message))
        {
            tracing::warn!("failed to echo log record: {e}");
        }

        Ok(Outcome::Written)
    }
}

fn write_line(file: &mut impl Write, path: &Path, line: &str) -> Result<()> {
    file.write_all(line.as_bytes())
        .map_err(|source| EmitError::Write {
            path: path.to_path_buf(),
            source,
        })
}

/// Escape control characters so a record never spans more than one line.
pub fn escape_controls(s: &str) -> Cow<'_, str> {
    if !s.chars().any(char::is_control) {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        if c.is_control() {
            out.extend(c.escape_default());
        } else {
            out.push(c);
        }
    }
    Cow::Owned(out)
}

/// One file record, newline included.
pub fn format_record(stamp: &str, label: &str, message: &str) -> String {
    let label = escape_controls(label);
    let message = escape_controls(message);
    format!("[{stamp}] [{label}] {message}\n")
}

/// Human-readable stdout copy of a record.
pub fn format_echo(stamp: &str, severity: Severity, label: &str, message: &str) -> String {
    let label = escape_controls(label);
    let message = escape_controls(message);
    format!("\t[{stamp}] {severity} [{label}] {message}")
}

/// Emit with the default emitter (no stdout echo).
pub fn emit(label: &str, severity: &str, message: &str) {
    Emitter::default().emit(label, severity, message);
}

/// Alias of [`emit`].
pub fn log_it(label: &str, severity: &str, message: &str) {
    emit(label, severity, message);
}
