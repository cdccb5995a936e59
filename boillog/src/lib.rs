//! # boillog
//!
//! A small leveled file logger configured entirely through environment variables,
//! plus an elapsed-time helper for quick profiling.
//!
//! ## Modules
//!
//! - **`config`**: read-through accessors for `PROFILER`, `METRICS`, `LOGLOCATION`,
//!   `APP_NAME` and `LOGLEVEL`. Nothing is cached; every call consults the environment.
//! - **`level`**: the ordered `Severity` enumeration and its rank table.
//! - **`emitter`**: appends one `[timestamp] [label] message` line per call to the
//!   configured file, filtered by the configured minimum severity.
//! - **`timing`**: `track_time` and the `TaskTimer` guard.
//! - **`alloc`**: an opt-in counting global allocator feeding the `METRICS` output.
//! - **`utils`**: diagnostic-channel setup and timestamp formatting.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use boillog::{log_it, track_time};
//! use std::time::Instant;
//!
//! let start = Instant::now();
//! log_it("main", "info", "service starting");
//! let elapsed = track_time("main", start);
//! # let _ = elapsed;
//! ```
//!
//! Logging calls never fail from the caller's point of view. Problems such as an
//! unwritable log directory are reported through `tracing` and the call returns.
//! Install a subscriber with [`utils::logging::init_diagnostics`] to see them.

pub mod alloc;
pub mod config;
pub mod emitter;
pub mod error;
pub mod level;
pub mod timing;
pub mod utils;

pub use emitter::{Emitter, Outcome, emit, log_it};
pub use error::{ConfigError, EmitError};
pub use level::Severity;
pub use timing::{TaskTimer, track_time};
