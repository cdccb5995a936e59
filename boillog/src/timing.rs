//! # Timing Helper
//!
//! Measures how long a task took and, depending on `PROFILER` and `METRICS`,
//! prints the duration and the bytes allocated meanwhile. The measured duration is
//! always returned, whatever the flags say.
//!
//! Two styles are supported:
//!
//! ```rust,no_run
//! use boillog::{TaskTimer, track_time};
//! use std::time::Instant;
//!
//! // Explicit start instant.
//! let start = Instant::now();
//! let took = track_time("load", start);
//!
//! // Scope guard: reports when finished or dropped.
//! let timer = TaskTimer::start("parse");
//! let took = timer.finish();
//! ```
//!
//! Memory figures come from [`crate::alloc::CountingAllocator`] and read `0` unless
//! the binary installs it.

use crate::{alloc, config};
use std::{
    io::{self, Write},
    time::{Duration, Instant},
};

/// Flags and samples taken for one report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub elapsed: Duration,
    pub allocated: u64,
    pub profiler: bool,
    pub metrics: bool,
}

impl Report {
    /// Write the enabled lines to `out`.
    pub fn write_to(&self, task: &str, out: &mut impl Write) -> io::Result<()> {
        if self.profiler {
            writeln!(out, "{task} elapsed: {:?}", self.elapsed)?;
        }
        if self.metrics {
            writeln!(out, "Memory usage: {}", self.allocated)?;
        }
        Ok(())
    }
}

/// Elapsed time since `start`, printed to stdout when `PROFILER` is on.
pub fn track_time(task: &str, start: Instant) -> Duration {
    track_time_to(task, start, &mut io::stdout().lock())
}

/// Like [`track_time`] but writes the report to `out`.
pub fn track_time_to(task: &str, start: Instant, out: &mut impl Write) -> Duration {
    let alloc_start = alloc::total_allocated();
    let profiler = config::profiler_enabled();
    let metrics = config::metrics_enabled();
    let report = Report {
        elapsed: start.elapsed(),
        allocated: alloc::total_allocated().saturating_sub(alloc_start),
        profiler,
        metrics,
    };
    emit_report(task, &report, out);
    report.elapsed
}

fn emit_report(task: &str, report: &Report, out: &mut impl Write) {
    if let Err(e) = report.write_to(task, out) {
        tracing::warn!(task, "failed to print timing report: {e}");
    }
}

/// Times a scope. Reports on [`TaskTimer::finish`], or on drop if never finished.
#[derive(Debug)]
pub struct TaskTimer {
    task: String,
    start: Instant,
    alloc_start: u64,
    finished: bool,
}

impl TaskTimer {
    pub fn start(task: impl Into<String>) -> Self {
        Self {
            task: task.into(),
            start: Instant::now(),
            alloc_start: alloc::total_allocated(),
            finished: false,
        }
    }

    pub fn task(&self) -> &str {
        &self.task
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Stop the timer, print the report to stdout and return the duration.
    pub fn finish(self) -> Duration {
        self.finish_to(&mut io::stdout().lock())
    }

    /// Stop the timer and write the report to `out`.
    pub fn finish_to(mut self, out: &mut impl Write) -> Duration {
        self.finished = true;
        let report = self.sample();
        emit_report(&self.task, &report, out);
        report.elapsed
    }

    fn sample(&self) -> Report {
        Report {
            elapsed: self.start.elapsed(),
            allocated: alloc::total_allocated().saturating_sub(self.alloc_start),
            profiler: config::profiler_enabled(),
            metrics: config::metrics_enabled(),
        }
    }
}

impl Drop for TaskTimer {
    fn drop(&mut self) {
        if !self.finished {
            let report = self.sample();
            emit_report(&self.task, &report, &mut io::stdout().lock());
        }
    }
}
