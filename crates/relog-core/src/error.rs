// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for the reporting facility.

use thiserror::Error;

/// Errors that can occur while submitting reports.
#[derive(Debug, Error)]
pub enum ReportError {
	/// The active environment name has no entry in the configuration mapping.
	///
	/// This indicates the deployed environment selector and the supplied
	/// configuration are out of sync. It surfaces at the next `report()` call
	/// rather than being treated as "accept nothing".
	#[error("no configuration entry for active environment: {0}")]
	UnknownEnvironment(String),
}

/// Result type for reporting operations.
pub type Result<T> = std::result::Result<T, ReportError>;
