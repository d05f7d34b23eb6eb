// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Environment-aware report logging with bounded in-memory history.
//!
//! Callers submit structured reports (a kind tag, an optional message, an
//! optional attached value). The facility timestamps them, retains them in a
//! bounded FIFO history, filters them against the active environment's
//! policy, and writes accepted reports to an output sink.
//!
//! This crate provides:
//! - [`ReportLog`] - The cloneable handle owning configuration, environment
//!   selection, history, and output
//! - [`History`] - The bounded FIFO retention buffer
//! - [`ReportSink`] / [`ConsoleSink`] / [`MemorySink`] - The output boundary
//! - [`Clock`] / [`SystemClock`] / [`FixedClock`] - The wall-clock boundary
//!
//! # Usage
//!
//! ```
//! use relog::{MemorySink, ReportContent, ReportLog, SystemClock};
//!
//! let sink = MemorySink::new();
//! let log = ReportLog::with_collaborators(SystemClock, sink.clone());
//!
//! // `prod` is active by default and is quiet; `dev` monitors everything.
//! log.set_active_environment(Some("dev"));
//! log.report(ReportContent::new().with_kind("error").with_message("disk full"))?;
//!
//! assert_eq!(sink.len(), 1);
//! assert_eq!(log.history_len(), 1);
//! # Ok::<(), relog::ReportError>(())
//! ```

pub mod clock;
pub mod history;
pub mod log;
pub mod sink;

pub use clock::{Clock, FixedClock, SystemClock};
pub use history::{History, DEFAULT_HISTORY_CAPACITY};
pub use log::ReportLog;
pub use sink::{ConsoleSink, MemorySink, ReportSink};

pub use relog_core::{
	Configuration, EnvironmentConfig, Report, ReportContent, ReportError, ReportKind, Result,
};
