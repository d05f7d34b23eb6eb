// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Bounded, insertion-ordered retention buffer for reports.

use std::collections::VecDeque;

use relog_core::Report;

/// Default retention capacity.
pub const DEFAULT_HISTORY_CAPACITY: usize = 1000;

/// A ring buffer that retains the most recent reports.
///
/// Eviction is strict FIFO: when a push would exceed capacity, exactly the
/// single oldest-inserted surviving report is removed first. Order follows
/// insertion, never timestamps or kinds. Not internally synchronized; the
/// owning handle serializes access.
#[derive(Debug)]
pub struct History {
	entries: VecDeque<Report>,
	capacity: usize,
}

impl History {
	pub fn new(capacity: usize) -> Self {
		Self {
			entries: VecDeque::with_capacity(capacity.min(DEFAULT_HISTORY_CAPACITY)),
			capacity,
		}
	}

	pub fn with_default_capacity() -> Self {
		Self::new(DEFAULT_HISTORY_CAPACITY)
	}

	/// Append a report, evicting the single oldest entry first when at (or,
	/// after a capacity shrink, above) capacity.
	pub fn push(&mut self, report: Report) {
		if self.entries.len() >= self.capacity {
			self.entries.pop_front();
		}
		self.entries.push_back(report);
	}

	/// Change the retention capacity. Zero is a no-op, and shrinking below
	/// the current length never evicts retroactively; eviction resumes on
	/// the next push.
	pub fn set_capacity(&mut self, max: usize) {
		if max == 0 {
			return;
		}
		self.capacity = max;
	}

	pub fn iter(&self) -> impl Iterator<Item = &Report> {
		self.entries.iter()
	}

	pub fn snapshot(&self) -> Vec<Report> {
		self.entries.iter().cloned().collect()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn capacity(&self) -> usize {
		self.capacity
	}

	pub fn clear(&mut self) {
		self.entries.clear();
	}
}

impl Default for History {
	fn default() -> Self {
		Self::with_default_capacity()
	}
}
