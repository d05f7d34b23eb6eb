// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! End-to-end tests for the report lifecycle pipeline: normalization,
//! bounded retention, environment filtering, and formatted output.

use chrono::{NaiveDate, NaiveDateTime};
use relog::{
	Configuration, EnvironmentConfig, FixedClock, MemorySink, ReportContent, ReportKind, ReportLog,
};

fn jan_2_2024_03_04_05() -> NaiveDateTime {
	NaiveDate::from_ymd_opt(2024, 1, 2)
		.unwrap()
		.and_hms_opt(3, 4, 5)
		.unwrap()
}

fn log_with_sink() -> (ReportLog, MemorySink) {
	let sink = MemorySink::new();
	let log = ReportLog::with_collaborators(FixedClock::new(jan_2_2024_03_04_05()), sink.clone());
	(log, sink)
}

fn errors_only(quiet: bool) -> Configuration {
	Configuration::new().with_environment(
		"test",
		EnvironmentConfig::new([ReportKind::error()])
			.with_log_date(false)
			.with_log_time(false)
			.with_quiet(quiet),
	)
}

#[test]
fn fifo_eviction_keeps_last_n_in_order() {
	let (log, _sink) = log_with_sink();
	log.set_active_environment(Some("dev"));
	log.set_history_capacity(5);

	for n in 1..=8 {
		log.report(ReportContent::new().with_message(format!("msg {n}"))).unwrap();
	}

	let messages: Vec<_> = log
		.history()
		.into_iter()
		.map(|r| r.message.unwrap())
		.collect();
	assert_eq!(messages, ["msg 4", "msg 5", "msg 6", "msg 7", "msg 8"]);
}

#[test]
fn filter_passes_only_monitored_kinds() {
	let (log, sink) = log_with_sink();
	log.set_configuration(Some(errors_only(false)));
	log.set_active_environment(Some("test"));

	log.report(ReportContent::new().with_kind("debug").with_message("ignored")).unwrap();
	assert!(sink.is_empty());

	log.report(ReportContent::new().with_kind("error").with_message("seen")).unwrap();
	assert_eq!(sink.lines(), ["|| ERROR || Descrição: seen"]);
}

#[test]
fn quiet_retains_but_suppresses_output() {
	let (log, sink) = log_with_sink();
	log.set_configuration(Some(errors_only(true)));
	log.set_active_environment(Some("test"));

	log.report(ReportContent::new().with_kind("error").with_message("silent")).unwrap();

	assert!(sink.is_empty());
	assert_eq!(log.history_len(), 1);
	assert_eq!(log.history()[0].message.as_deref(), Some("silent"));
}

#[test]
fn timestamp_gating_follows_environment_policy() {
	let (log, _sink) = log_with_sink();
	let config = Configuration::new()
		.with_environment(
			"bare",
			EnvironmentConfig::new([ReportKind::info()])
				.with_log_date(false)
				.with_log_time(false),
		)
		.with_environment("stamped", EnvironmentConfig::new([ReportKind::info()]));
	log.set_configuration(Some(config));

	log.set_active_environment(Some("bare"));
	log.report(ReportContent::new()).unwrap();
	log.set_active_environment(Some("stamped"));
	log.report(ReportContent::new()).unwrap();

	let history = log.history();
	assert_eq!(history[0].date, None);
	assert_eq!(history[0].time, None);
	assert_eq!(history[1].date.as_deref(), Some("2/1/2024"));
	assert_eq!(history[1].time.as_deref(), Some("3:4:5"));
}

#[test]
fn print_history_replays_everything_in_order() {
	let (log, sink) = log_with_sink();
	log.set_configuration(Some(errors_only(true)));
	log.set_active_environment(Some("test"));

	// None of these reach the sink live: debug is filtered, error is quiet.
	log.report(ReportContent::new().with_kind("debug").with_message("one")).unwrap();
	log.report(ReportContent::new().with_kind("error").with_message("two")).unwrap();
	log.report(
		ReportContent::new()
			.with_kind("error")
			.with_message("three")
			.with_attachment(serde_json::json!([1, 2, 3])),
	)
	.unwrap();
	assert!(sink.is_empty());

	log.print_history();

	let writes = sink.writes();
	assert_eq!(writes.len(), 3);
	assert_eq!(writes[0].0, "|| DEBUG || Descrição: one");
	assert_eq!(writes[1].0, "|| ERROR || Descrição: two");
	assert_eq!(writes[2].0, "|| ERROR || Descrição: three");
	assert_eq!(writes[2].1, Some(serde_json::json!([1, 2, 3])));

	// Replay is read-only.
	assert_eq!(log.history_len(), 3);
}

#[test]
fn dev_error_formats_the_expected_line() {
	let (log, sink) = log_with_sink();
	log.set_active_environment(Some("dev"));

	log.report(ReportContent::new().with_kind("error").with_message("disk full")).unwrap();

	let writes = sink.writes();
	assert_eq!(writes.len(), 1);
	assert_eq!(writes[0].0, "2/1/2024 3:4:5 || ERROR || Descrição: disk full");
	assert_eq!(writes[0].1, None);
}

#[test]
fn capacity_one_keeps_only_the_latest() {
	let (log, _sink) = log_with_sink();
	log.set_active_environment(Some("dev"));
	log.set_history_capacity(1);

	log.report(ReportContent::new().with_message("a")).unwrap();
	log.report(ReportContent::new().with_message("b")).unwrap();

	let history = log.history();
	assert_eq!(history.len(), 1);
	assert_eq!(history[0].message.as_deref(), Some("b"));
}

#[test]
fn default_environment_is_quiet_prod() {
	let (log, sink) = log_with_sink();

	// info is not monitored by prod; error is monitored but prod is quiet.
	log.report(ReportContent::new().with_message("invisible")).unwrap();
	log.report(ReportContent::new().with_kind("error").with_message("also invisible")).unwrap();
	assert!(sink.is_empty());

	// Both are still retrievable through the replay path.
	log.print_history();
	assert_eq!(sink.len(), 2);
	assert_eq!(log.history_len(), 2);
}
