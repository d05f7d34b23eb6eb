// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Core types for the relog reporting facility.
//!
//! This crate provides:
//! - [`ReportKind`] - An open-set, case-normalized severity tag
//! - [`ReportContent`] / [`Report`] - Caller input and the canonical record
//! - [`EnvironmentConfig`] / [`Configuration`] - Per-environment policy and
//!   the name→policy table with the built-in `dev`/`hml`/`prod` defaults
//! - [`ReportError`] - The error taxonomy
//!
//! The types here are pure data: no I/O, no clocks, no interior mutability.
//! The facility that drives them lives in the `relog` crate.

pub mod config;
pub mod error;
pub mod report;

pub use config::{Configuration, EnvironmentConfig};
pub use error::{ReportError, Result};
pub use report::{Report, ReportContent, ReportKind};
