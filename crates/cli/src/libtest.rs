// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Translation of libtest JSON event lines into service messages.
//!
//! Input is the line stream produced by
//! `cargo test -- -Z unstable-options --format json`. Lines that are not
//! recognizable events (human-readable output, partial writes) pass
//! through to the sink unchanged, in order.

use std::io::Write;
use std::time::Duration;

use serde::Deserialize;
use tcm_core::Clock;
use tcm_report::{EmitError, TestReporter};
use tracing::warn;

/// One line of libtest JSON output.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Record {
    Suite {
        event: Event,
    },
    Test {
        event: Event,
        name: String,
        #[serde(default)]
        stdout: Option<String>,
        #[serde(default)]
        exec_time: Option<f64>,
        #[serde(default)]
        message: Option<String>,
    },
    Bench,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Event {
    Started,
    Ok,
    Failed,
    Ignored,
    Timeout,
    #[serde(other)]
    Unknown,
}

/// Streams libtest output into a [`TestReporter`], wrapping the run in a
/// single named suite.
pub struct Translator<C: Clock, W: Write> {
    suite_name: String,
    reporter: TestReporter<C, W>,
    suite_open: bool,
}

impl<C: Clock, W: Write> Translator<C, W> {
    pub fn new(suite_name: impl Into<String>, reporter: TestReporter<C, W>) -> Self {
        Self {
            suite_name: suite_name.into(),
            reporter,
            suite_open: false,
        }
    }

    /// Process one input line: translate it if it parses as a libtest
    /// event, otherwise pass it through verbatim.
    pub fn line(&mut self, line: &str) -> Result<(), EmitError> {
        let trimmed = line.trim_start();
        if !trimmed.starts_with('{') {
            writeln!(self.reporter.sink_mut(), "{line}")?;
            return Ok(());
        }
        match serde_json::from_str::<Record>(trimmed) {
            Ok(record) => self.apply(record),
            Err(error) => {
                warn!(%error, "unrecognized libtest event line, passing through");
                writeln!(self.reporter.sink_mut(), "{line}")?;
                Ok(())
            }
        }
    }

    fn apply(&mut self, record: Record) -> Result<(), EmitError> {
        match record {
            Record::Suite { event: Event::Started } => {
                self.reporter.test_suite_started(&self.suite_name)?;
                self.suite_open = true;
            }
            Record::Suite { .. } => {
                if self.suite_open {
                    self.suite_open = false;
                    self.reporter.test_suite_finished(&self.suite_name)?;
                }
            }
            Record::Test {
                event,
                name,
                stdout,
                exec_time,
                message,
            } => match event {
                Event::Started => self.reporter.test_started(&name)?,
                Event::Ok => self
                    .reporter
                    .test_finished(&name, duration_from(exec_time))?,
                Event::Failed => {
                    self.reporter
                        .test_failed(&name, "test failed", stdout.as_deref().unwrap_or(""))?;
                    self.reporter
                        .test_finished(&name, duration_from(exec_time))?;
                }
                Event::Timeout => {
                    self.reporter.test_failed(&name, "test timed out", "")?;
                    self.reporter
                        .test_finished(&name, duration_from(exec_time))?;
                }
                Event::Ignored => self
                    .reporter
                    .test_ignored(&name, message.as_deref().unwrap_or(""))?,
                Event::Unknown => {}
            },
            // Bench results have no test-lifecycle counterpart
            Record::Bench => {}
        }
        Ok(())
    }

    /// Close the suite if the input stream ended without a suite summary.
    pub fn finish(&mut self) -> Result<(), EmitError> {
        if self.suite_open {
            self.suite_open = false;
            self.reporter.test_suite_finished(&self.suite_name)?;
        }
        Ok(())
    }

    #[cfg(test)]
    fn into_sink(self) -> W {
        self.reporter.into_sink()
    }
}

fn duration_from(exec_time: Option<f64>) -> Option<Duration> {
    // try_from_secs_f64 rejects negative, non-finite, and overflowing
    // values; a nonsense exec_time must never abort the translation.
    exec_time.and_then(|secs| Duration::try_from_secs_f64(secs).ok())
}

#[cfg(test)]
#[path = "libtest_tests.rs"]
mod tests;
