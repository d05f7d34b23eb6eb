// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Per-environment reporting policy and the environment table.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::report::ReportKind;

/// Policy for one deployment environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentConfig {
	/// Kinds that pass the filter. Exact membership, no wildcards.
	pub monitored_kinds: BTreeSet<ReportKind>,
	/// Whether submitted reports capture the current date.
	pub log_date: bool,
	/// Whether submitted reports capture the current time.
	pub log_time: bool,
	/// Suppress accepted reports from the sink while still retaining them
	/// in history.
	pub quiet: bool,
}

impl EnvironmentConfig {
	pub fn new(monitored_kinds: impl IntoIterator<Item = ReportKind>) -> Self {
		Self {
			monitored_kinds: monitored_kinds.into_iter().collect(),
			log_date: true,
			log_time: true,
			quiet: false,
		}
	}

	pub fn with_log_date(mut self, log_date: bool) -> Self {
		self.log_date = log_date;
		self
	}

	pub fn with_log_time(mut self, log_time: bool) -> Self {
		self.log_time = log_time;
		self
	}

	pub fn with_quiet(mut self, quiet: bool) -> Self {
		self.quiet = quiet;
		self
	}

	/// Whether a report of the given kind passes this environment's filter.
	pub fn monitors(&self, kind: &ReportKind) -> bool {
		self.monitored_kinds.contains(kind)
	}
}

/// Mapping from environment name to its reporting policy.
///
/// Replaceable wholesale; `Default` is the built-in three-environment table
/// (`dev` most verbose and non-quiet, `prod` least verbose and quiet).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Configuration(BTreeMap<String, EnvironmentConfig>);

impl Configuration {
	/// Environment governing filtering when none has been selected.
	pub const DEFAULT_ENVIRONMENT: &'static str = "prod";

	/// An empty mapping. Every lookup fails until environments are added;
	/// use `Configuration::default()` for the built-in table.
	pub fn new() -> Self {
		Self(BTreeMap::new())
	}

	pub fn with_environment(mut self, name: impl Into<String>, config: EnvironmentConfig) -> Self {
		self.0.insert(name.into(), config);
		self
	}

	pub fn environment(&self, name: &str) -> Option<&EnvironmentConfig> {
		self.0.get(name)
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Names of the configured environments, in sorted order.
	pub fn environment_names(&self) -> impl Iterator<Item = &str> {
		self.0.keys().map(String::as_str)
	}
}

impl Default for Configuration {
	fn default() -> Self {
		Self::new()
			.with_environment(
				"dev",
				EnvironmentConfig::new([ReportKind::info(), ReportKind::debug(), ReportKind::error()]),
			)
			.with_environment(
				"hml",
				EnvironmentConfig::new([ReportKind::debug(), ReportKind::error()]),
			)
			.with_environment(
				"prod",
				EnvironmentConfig::new([ReportKind::error()]).with_quiet(true),
			)
	}
}

impl FromIterator<(String, EnvironmentConfig)> for Configuration {
	fn from_iter<I: IntoIterator<Item = (String, EnvironmentConfig)>>(iter: I) -> Self {
		Self(iter.into_iter().collect())
	}
}
