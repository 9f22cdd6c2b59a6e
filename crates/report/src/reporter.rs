// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Test-lifecycle vocabulary over the generic emitter.

use std::io::Write;
use std::time::Duration;

use tcm_core::{Clock, SystemClock};

use crate::emitter::{EmitError, MessageEmitter};

/// Reports test-runner lifecycle events as TeamCity service messages.
///
/// Thin wrappers over [`MessageEmitter::emit`]; event names and attribute
/// keys follow the vocabulary TeamCity's log parser understands. The
/// encoder itself places no constraint on either.
pub struct TestReporter<C: Clock, W: Write> {
    emitter: MessageEmitter<C, W>,
}

impl<W: Write> TestReporter<SystemClock, W> {
    /// Reporter on the given sink with the real system clock.
    pub fn new(sink: W) -> Self {
        Self::with_clock(SystemClock, sink)
    }
}

impl<C: Clock, W: Write> TestReporter<C, W> {
    pub fn with_clock(clock: C, sink: W) -> Self {
        Self {
            emitter: MessageEmitter::new(clock, sink),
        }
    }

    pub fn test_suite_started(&mut self, name: &str) -> Result<(), EmitError> {
        self.emitter.emit("testSuiteStarted", &[("name", name)])
    }

    pub fn test_suite_finished(&mut self, name: &str) -> Result<(), EmitError> {
        self.emitter.emit("testSuiteFinished", &[("name", name)])
    }

    pub fn test_started(&mut self, name: &str) -> Result<(), EmitError> {
        self.emitter.emit("testStarted", &[("name", name)])
    }

    /// `duration`, when given, is reported in whole milliseconds.
    pub fn test_finished(
        &mut self,
        name: &str,
        duration: Option<Duration>,
    ) -> Result<(), EmitError> {
        match duration {
            Some(duration) => {
                let ms = duration.as_millis().to_string();
                self.emitter
                    .emit("testFinished", &[("name", name), ("duration", &ms)])
            }
            None => self.emitter.emit("testFinished", &[("name", name)]),
        }
    }

    pub fn test_failed(
        &mut self,
        name: &str,
        message: &str,
        details: &str,
    ) -> Result<(), EmitError> {
        self.emitter.emit(
            "testFailed",
            &[("name", name), ("message", message), ("details", details)],
        )
    }

    /// Failure carrying an expected/actual payload; TeamCity renders these
    /// as a diff.
    pub fn comparison_failure(
        &mut self,
        name: &str,
        message: &str,
        details: &str,
        expected: &str,
        actual: &str,
    ) -> Result<(), EmitError> {
        self.emitter.emit(
            "testFailed",
            &[
                ("type", "comparisonFailure"),
                ("name", name),
                ("message", message),
                ("details", details),
                ("expected", expected),
                ("actual", actual),
            ],
        )
    }

    pub fn test_ignored(&mut self, name: &str, message: &str) -> Result<(), EmitError> {
        self.emitter
            .emit("testIgnored", &[("name", name), ("message", message)])
    }

    pub fn block_opened(&mut self, name: &str) -> Result<(), EmitError> {
        self.emitter.emit("blockOpened", &[("name", name)])
    }

    pub fn block_closed(&mut self, name: &str) -> Result<(), EmitError> {
        self.emitter.emit("blockClosed", &[("name", name)])
    }

    /// Free-form build log message; `status` is NORMAL, WARNING, FAILURE
    /// or ERROR.
    pub fn message(
        &mut self,
        text: &str,
        status: &str,
        error_details: &str,
    ) -> Result<(), EmitError> {
        self.emitter.emit(
            "message",
            &[
                ("text", text),
                ("status", status),
                ("errorDetails", error_details),
            ],
        )
    }

    pub fn build_status(&mut self, text: &str, status: &str) -> Result<(), EmitError> {
        self.emitter
            .emit("buildStatus", &[("text", text), ("status", status)])
    }

    pub fn build_statistic(&mut self, key: &str, value: &str) -> Result<(), EmitError> {
        self.emitter
            .emit("buildStatisticValue", &[("key", key), ("value", value)])
    }

    /// Escape hatch for event names this reporter has no helper for.
    pub fn raw(&mut self, name: &str, attributes: &[(&str, &str)]) -> Result<(), EmitError> {
        self.emitter.emit(name, attributes)
    }

    /// Mutable access to the sink, for interleaving raw runner output
    /// between service messages.
    pub fn sink_mut(&mut self) -> &mut W {
        self.emitter.sink_mut()
    }

    /// Consume the reporter and hand back the sink.
    pub fn into_sink(self) -> W {
        self.emitter.into_sink()
    }
}

#[cfg(test)]
#[path = "reporter_tests.rs"]
mod tests;
