// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The report log handle: configuration, filtering, retention, and output.

use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use relog_core::{Configuration, Report, ReportContent, ReportError, Result};

use crate::clock::{format_date, format_time, Clock, SystemClock};
use crate::history::History;
use crate::sink::{ConsoleSink, ReportSink};

/// Environment-aware report log with bounded in-memory history.
///
/// A cloneable handle over shared state. All operations are synchronous;
/// the history read-modify-write sequence runs under a single lock so FIFO
/// eviction holds even when the handle is shared across threads.
///
/// Every submitted report is retained in history regardless of the filter
/// outcome; only the write to the sink is gated by the active environment's
/// monitored kinds and quiet flag.
#[derive(Clone)]
pub struct ReportLog {
	inner: Arc<Inner>,
}

struct Inner {
	configuration: RwLock<Configuration>,
	environment: RwLock<String>,
	history: Mutex<History>,
	clock: Box<dyn Clock>,
	sink: Box<dyn ReportSink>,
}

impl ReportLog {
	/// A log with the built-in configuration table, the `prod` environment
	/// active, default history capacity, the system clock, and stdout output.
	pub fn new() -> Self {
		Self::with_collaborators(SystemClock, ConsoleSink)
	}

	/// A log with injected clock and sink. Configuration, environment, and
	/// capacity start at the same defaults as [`ReportLog::new`].
	pub fn with_collaborators(
		clock: impl Clock + 'static,
		sink: impl ReportSink + 'static,
	) -> Self {
		Self {
			inner: Arc::new(Inner {
				configuration: RwLock::new(Configuration::default()),
				environment: RwLock::new(Configuration::DEFAULT_ENVIRONMENT.to_string()),
				history: Mutex::new(History::with_default_capacity()),
				clock: Box::new(clock),
				sink: Box::new(sink),
			}),
		}
	}

	/// Replace the whole environment table. `None` or an empty mapping
	/// resets to the built-in defaults. No shape validation happens here:
	/// a missing entry for the active environment surfaces as
	/// [`ReportError::UnknownEnvironment`] on the next [`ReportLog::report`].
	pub fn set_configuration(&self, config: Option<Configuration>) {
		let config = match config {
			Some(config) if !config.is_empty() => config,
			_ => Configuration::default(),
		};
		tracing::debug!(environments = config.len(), "configuration replaced");
		*self.inner.configuration.write() = config;
	}

	/// Select the environment governing filtering and timestamp capture.
	/// `None` or an empty string resets to `prod`. The name is not checked
	/// against the configured table until the next report is filtered.
	pub fn set_active_environment(&self, name: Option<&str>) {
		let name = match name {
			Some(name) if !name.is_empty() => name.to_string(),
			_ => Configuration::DEFAULT_ENVIRONMENT.to_string(),
		};
		tracing::debug!(environment = %name, "active environment selected");
		*self.inner.environment.write() = name;
	}

	/// Change the history capacity. Zero is a no-op; shrinking below the
	/// current length never evicts retroactively.
	pub fn set_history_capacity(&self, max: usize) {
		if max == 0 {
			return;
		}
		self.inner.history.lock().set_capacity(max);
		tracing::debug!(capacity = max, "history capacity changed");
	}

	/// Submit a report.
	///
	/// The content is normalized into a canonical record (kind defaults to
	/// `info`; date/time captured from the clock now, gated by the active
	/// environment's policy), appended to history unconditionally, and then
	/// written to the sink if its kind is monitored and the environment is
	/// not quiet.
	///
	/// Fails only when the active environment has no configuration entry;
	/// in that case nothing is recorded.
	pub fn report(&self, content: ReportContent) -> Result<()> {
		let environment = self.inner.environment.read().clone();
		let config = self
			.inner
			.configuration
			.read()
			.environment(&environment)
			.cloned()
			.ok_or(ReportError::UnknownEnvironment(environment))?;

		let now = self.inner.clock.now();
		let date = config.log_date.then(|| format_date(&now));
		let time = config.log_time.then(|| format_time(&now));
		let report = content.normalize(date, time);

		self.inner.history.lock().push(report.clone());

		if config.monitors(&report.kind) && !config.quiet {
			self.emit(&report);
		}
		Ok(())
	}

	/// Replay every retained report to the sink, in insertion order,
	/// regardless of the current filter and quiet settings.
	pub fn print_history(&self) {
		let snapshot = self.inner.history.lock().snapshot();
		for report in &snapshot {
			self.emit(report);
		}
	}

	/// Snapshot of the retained reports, oldest first.
	pub fn history(&self) -> Vec<Report> {
		self.inner.history.lock().snapshot()
	}

	pub fn history_len(&self) -> usize {
		self.inner.history.lock().len()
	}

	pub fn history_capacity(&self) -> usize {
		self.inner.history.lock().capacity()
	}

	/// Drop all retained reports. Capacity is unchanged.
	pub fn clear_history(&self) {
		self.inner.history.lock().clear();
	}

	pub fn active_environment(&self) -> String {
		self.inner.environment.read().clone()
	}

	fn emit(&self, report: &Report) {
		self.inner.sink.write(&report.to_line(), report.attachment.as_ref());
	}
}

impl Default for ReportLog {
	fn default() -> Self {
		Self::new()
	}
}
