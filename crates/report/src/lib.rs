// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! tcm-report: service-message emission and the test-lifecycle reporter.
//!
//! Wire format: one framed line per message,
//! `\n##teamcity[<name> timestamp='...' key='value' ...]\n`

mod emitter;
mod reporter;

pub use emitter::{EmitError, MessageEmitter};
pub use reporter::TestReporter;
