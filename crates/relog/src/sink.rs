// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Output sinks: where formatted report lines end up.

use std::io::Write;
use std::sync::Arc;

use parking_lot::Mutex;

/// Write-only destination for formatted reports.
///
/// Each write carries the formatted line plus the report's attachment, if
/// any, as a separate value. Fire-and-forget: the facility never checks
/// success.
pub trait ReportSink: Send + Sync {
	fn write(&self, line: &str, attachment: Option<&serde_json::Value>);
}

/// Sink that writes to stdout, one report per line. The attachment, when
/// present, is appended after the line separated by a space.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl ReportSink for ConsoleSink {
	fn write(&self, line: &str, attachment: Option<&serde_json::Value>) {
		let stdout = std::io::stdout();
		let mut out = stdout.lock();
		let _ = match attachment {
			Some(value) => writeln!(out, "{line} {value}"),
			None => writeln!(out, "{line}"),
		};
	}
}

/// Sink that captures every write in memory. Used by tests to assert on
/// exactly what reached the output boundary.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
	writes: Arc<Mutex<Vec<(String, Option<serde_json::Value>)>>>,
}

impl MemorySink {
	pub fn new() -> Self {
		Self::default()
	}

	/// All writes so far, in order: (line, attachment).
	pub fn writes(&self) -> Vec<(String, Option<serde_json::Value>)> {
		self.writes.lock().clone()
	}

	/// Just the formatted lines, in order.
	pub fn lines(&self) -> Vec<String> {
		self.writes.lock().iter().map(|(line, _)| line.clone()).collect()
	}

	pub fn len(&self) -> usize {
		self.writes.lock().len()
	}

	pub fn is_empty(&self) -> bool {
		self.writes.lock().is_empty()
	}

	pub fn clear(&self) {
		self.writes.lock().clear();
	}
}

impl ReportSink for MemorySink {
	fn write(&self, line: &str, attachment: Option<&serde_json::Value>) {
		self.writes.lock().push((line.to_string(), attachment.cloned()));
	}
}
