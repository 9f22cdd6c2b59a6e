// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! tcm-core: service-message model, value escaping, clock abstraction, and
//! TeamCity supervisor detection

pub mod clock;
pub mod env;
pub mod escape;
pub mod message;

pub use clock::{Clock, FakeClock, SystemClock};
pub use env::{is_under_teamcity, is_under_teamcity_in, TEAMCITY_ENV_VAR};
pub use escape::{escape, unescape};
pub use message::{MessageError, ServiceMessage, TIMESTAMP_FORMAT};
