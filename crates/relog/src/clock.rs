// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Wall-clock abstraction and timestamp rendering.

use chrono::{Datelike, Local, NaiveDateTime, Timelike};

/// Source of the current civil date and time.
///
/// Injected into the facility so tests can pin the clock; production code
/// uses [`SystemClock`].
pub trait Clock: Send + Sync {
	fn now(&self) -> NaiveDateTime;
}

/// The host's local wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
	fn now(&self) -> NaiveDateTime {
		Local::now().naive_local()
	}
}

/// A clock pinned to a single instant. Deterministic timestamps for tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(NaiveDateTime);

impl FixedClock {
	pub fn new(at: NaiveDateTime) -> Self {
		Self(at)
	}
}

impl Clock for FixedClock {
	fn now(&self) -> NaiveDateTime {
		self.0
	}
}

/// Render `day/month/year`, unpadded.
pub(crate) fn format_date(at: &NaiveDateTime) -> String {
	format!("{}/{}/{}", at.day(), at.month(), at.year())
}

/// Render `hour:minute:second`, unpadded.
pub(crate) fn format_time(at: &NaiveDateTime) -> String {
	format!("{}:{}:{}", at.hour(), at.minute(), at.second())
}
