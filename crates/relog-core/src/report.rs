// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Report types: the severity tag, the caller-facing content, and the
//! canonical record retained in history.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity tag of a report.
///
/// This is an open set, not a closed enum: environments may monitor arbitrary
/// tags. The tag is case-normalized to lowercase on construction so that
/// filtering is an exact string match.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ReportKind(String);

impl ReportKind {
	pub fn new(tag: impl AsRef<str>) -> Self {
		Self(tag.as_ref().trim().to_ascii_lowercase())
	}

	pub fn info() -> Self {
		Self::new("info")
	}

	pub fn debug() -> Self {
		Self::new("debug")
	}

	pub fn error() -> Self {
		Self::new("error")
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl Default for ReportKind {
	fn default() -> Self {
		Self::info()
	}
}

impl fmt::Display for ReportKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<String> for ReportKind {
	fn from(tag: String) -> Self {
		Self::new(tag)
	}
}

impl From<&str> for ReportKind {
	fn from(tag: &str) -> Self {
		Self::new(tag)
	}
}

impl From<ReportKind> for String {
	fn from(kind: ReportKind) -> Self {
		kind.0
	}
}

/// Caller-facing partial input to `report()`.
///
/// Every field is optional; missing fields are normalized rather than
/// rejected (kind defaults to `info`).
#[derive(Debug, Clone, Default)]
pub struct ReportContent {
	pub kind: Option<ReportKind>,
	pub message: Option<String>,
	pub attachment: Option<serde_json::Value>,
}

impl ReportContent {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_kind(mut self, kind: impl Into<ReportKind>) -> Self {
		self.kind = Some(kind.into());
		self
	}

	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}

	pub fn with_attachment(mut self, attachment: serde_json::Value) -> Self {
		self.attachment = Some(attachment);
		self
	}

	/// Merge this content over freshly computed timestamp fields into the
	/// canonical record. The timestamps are captured by the caller at
	/// submission time; the record never recomputes them.
	pub fn normalize(self, date: Option<String>, time: Option<String>) -> Report {
		Report {
			kind: self.kind.unwrap_or_default(),
			date,
			time,
			message: self.message,
			attachment: self.attachment,
		}
	}
}

/// A canonical report, immutable once appended to history.
///
/// `date` and `time` are pre-formatted strings (present only when the active
/// environment enabled them at submission time), so later reads always see
/// the values captured at the `report()` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
	pub kind: ReportKind,
	pub date: Option<String>,
	pub time: Option<String>,
	pub message: Option<String>,
	pub attachment: Option<serde_json::Value>,
}

impl Report {
	/// Render the single display line for this report.
	///
	/// Fixed order: date, time, the uppercased kind tag between `||`
	/// delimiters, then the labeled message. Absent fields contribute no text
	/// and no stray separators. The attachment is never part of the line; it
	/// travels to the sink as a separate argument.
	pub fn to_line(&self) -> String {
		let mut line = String::new();
		if let Some(date) = &self.date {
			line.push_str(date);
			line.push(' ');
		}
		if let Some(time) = &self.time {
			line.push_str(time);
			line.push(' ');
		}
		line.push_str("|| ");
		line.push_str(&self.kind.as_str().to_ascii_uppercase());
		line.push_str(" ||");
		if let Some(message) = &self.message {
			line.push_str(" Descrição: ");
			line.push_str(message);
		}
		line
	}
}
