// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Supervisor detection: is this process running under TeamCity?

use std::ffi::OsStr;

/// Environment variable whose presence signals a TeamCity supervisor.
pub const TEAMCITY_ENV_VAR: &str = "TEAMCITY_VERSION";

/// True iff the given environment contains `TEAMCITY_VERSION`.
///
/// Only presence matters; the value is ignored, and an empty string
/// counts as present. Taking the environment as an argument keeps this
/// testable without mutating process state.
pub fn is_under_teamcity_in<I, K, V>(vars: I) -> bool
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<OsStr>,
{
    vars.into_iter()
        .any(|(key, _)| key.as_ref() == OsStr::new(TEAMCITY_ENV_VAR))
}

/// True iff the current process environment contains `TEAMCITY_VERSION`.
pub fn is_under_teamcity() -> bool {
    std::env::var_os(TEAMCITY_ENV_VAR).is_some()
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
